//! Integration tests for the lina crates.
//!
//! This crate contains end-to-end tests that verify agreement between
//! the different lina crates: quaternion rotation against Rodrigues
//! rotation against matrix rotation, providers against each other, and
//! everything against glam as an external reference.
