//! # Engine Module
//!
//! Configuration, error aggregation and progress reporting shared by the workflows.
//!
//! - **Configuration** ([`config`]) - validated `TransformConfig` and `AbsorptionConfig`
//!   with builders
//! - **Error Handling** ([`error`]) - [`error::EngineError`], which wraps the error type of
//!   every core module
//! - **Progress Monitoring** ([`progress`]) - phase and task events for front ends

pub mod config;
pub mod error;
pub mod progress;
