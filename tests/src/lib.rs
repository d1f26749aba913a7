//! # Signet Test Suite
//!
//! Unified test crate containing:
//!
//! ```text
//! tests/src/
//! ├── integration/      # End-to-end pipeline scenarios
//! └── properties/       # Numeric value-type properties
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p signet-tests
//!
//! # By category
//! cargo test -p signet-tests integration::
//! cargo test -p signet-tests properties::
//! ```

#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod integration;
