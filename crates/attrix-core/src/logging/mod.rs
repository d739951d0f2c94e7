//! Structured logging facility for Attrix
//!
//! - Single initialization point via `init(profile)`
//! - Canonical field keys from `attrix_core_types::schema`
//! - Test capture mode for deterministic assertions
//!
//! # Usage
//!
//! ```rust
//! use attrix_core::logging::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::Development);
//! ```

pub mod capture;
pub mod init;

pub use capture::{init_test_capture, CapturedEvent, TestCapture};
pub use init::{init, Profile};
