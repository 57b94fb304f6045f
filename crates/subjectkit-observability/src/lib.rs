//! # subjectkit-observability
//!
//! Structured logging for SubjectKit binaries.
//!
//! JSON-structured logs (ELK, Loki, CloudWatch) or human-readable text,
//! with log levels configurable per component and an environment override.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, LogConfig, LOG_ENV_VAR};
