//! Selectable per-component rounding behavior.
//!
//! The rounding family on the vector types (`floor`, `ceil`, `round`,
//! `trunc`) covers the common cases directly; [`RoundMethod`] exists for
//! call sites that pick the mode at runtime, e.g. from a pipeline
//! description.
//!
//! # Usage
//!
//! ```rust
//! use lina_core::RoundMethod;
//!
//! assert_eq!(RoundMethod::Floor.apply(2.7), 2.0);
//! assert_eq!(RoundMethod::HalfEven.apply(2.5), 2.0);
//! assert_eq!("ceil".parse::<RoundMethod>().unwrap(), RoundMethod::Ceil);
//! ```

use crate::error::Error;
use std::str::FromStr;

/// Rounding mode applied per component by `round_with`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundMethod {
    /// Round toward negative infinity.
    Floor,
    /// Round toward positive infinity.
    Ceil,
    /// Round to nearest, ties away from zero (the `f32::round` behavior).
    #[default]
    HalfUp,
    /// Round to nearest, ties to the even neighbor.
    HalfEven,
    /// Round toward zero, discarding the fraction.
    Truncate,
}

impl RoundMethod {
    /// Applies this rounding mode to a scalar.
    #[inline]
    pub fn apply(self, x: f32) -> f32 {
        match self {
            Self::Floor => x.floor(),
            Self::Ceil => x.ceil(),
            Self::HalfUp => x.round(),
            Self::HalfEven => x.round_ties_even(),
            Self::Truncate => x.trunc(),
        }
    }

    /// Canonical lowercase name of this mode.
    pub fn name(self) -> &'static str {
        match self {
            Self::Floor => "floor",
            Self::Ceil => "ceil",
            Self::HalfUp => "half-up",
            Self::HalfEven => "half-even",
            Self::Truncate => "truncate",
        }
    }
}

impl FromStr for RoundMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "floor" => Ok(Self::Floor),
            "ceil" | "ceiling" => Ok(Self::Ceil),
            "half-up" | "round" => Ok(Self::HalfUp),
            "half-even" | "even" => Ok(Self::HalfEven),
            "truncate" | "trunc" => Ok(Self::Truncate),
            other => Err(Error::unknown_round_method(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_positive() {
        assert_eq!(RoundMethod::Floor.apply(2.7), 2.0);
        assert_eq!(RoundMethod::Ceil.apply(2.2), 3.0);
        assert_eq!(RoundMethod::HalfUp.apply(2.5), 3.0);
        assert_eq!(RoundMethod::HalfEven.apply(2.5), 2.0);
        assert_eq!(RoundMethod::HalfEven.apply(3.5), 4.0);
        assert_eq!(RoundMethod::Truncate.apply(2.9), 2.0);
    }

    #[test]
    fn test_apply_negative() {
        assert_eq!(RoundMethod::Floor.apply(-2.1), -3.0);
        assert_eq!(RoundMethod::Ceil.apply(-2.9), -2.0);
        assert_eq!(RoundMethod::HalfUp.apply(-2.5), -3.0);
        assert_eq!(RoundMethod::HalfEven.apply(-2.5), -2.0);
        assert_eq!(RoundMethod::Truncate.apply(-2.9), -2.0);
    }

    #[test]
    fn test_parse_round_trip() {
        for method in [
            RoundMethod::Floor,
            RoundMethod::Ceil,
            RoundMethod::HalfUp,
            RoundMethod::HalfEven,
            RoundMethod::Truncate,
        ] {
            assert_eq!(method.name().parse::<RoundMethod>().unwrap(), method);
        }
    }

    #[test]
    fn test_parse_unknown() {
        assert!("stochastic".parse::<RoundMethod>().is_err());
    }
}
