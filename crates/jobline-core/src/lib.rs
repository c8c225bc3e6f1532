//! Core types and trait definitions for the Jobline job board.
//!
//! This crate has no HTTP or database dependencies; the store backend and
//! the web layer both build on it.

pub mod account;
pub mod error;
pub mod insights;
pub mod job;
pub mod profile;
pub mod resume;
pub mod store;

pub use error::{Error, Result};
