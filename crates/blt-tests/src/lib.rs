//! Integration tests for BLT-RS crates.
//!
//! This crate contains end-to-end tests that verify the interaction
//! between the capability tables and the surface layout calculator: the
//! flow a blit caller runs before touching a device.
