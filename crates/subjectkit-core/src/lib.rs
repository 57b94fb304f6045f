//! # subjectkit-core
//!
//! Core types and pure functions for addressing blockchain stream events.
//!
//! A subject is a `.`-delimited topic such as
//! `inputs.coin.1000000.0xab…ab.2.0.0xcd…cd.0xef…ef`. Every subject family is
//! described by a [`SubjectDefinition`]: an ordered list of typed fields and a
//! format template. On top of that this crate provides:
//!
//! - [`types`]: per-field-type encode/decode rules
//! - [`builder`]: typed values → topic (or subscription pattern)
//! - [`parser`]: topic → typed values
//! - [`matcher`]: `*` / `>` wildcard matching on raw strings
//!
//! The static catalog and registry live in `subjectkit-registry`.

pub mod builder;
pub mod error;
pub mod matcher;
pub mod parser;
pub mod primitives;
pub mod schema;
pub mod types;

pub use builder::{build, SubjectBuilder};
pub use error::{FieldError, RegistryError, SubjectError};
pub use matcher::{matches, validate_pattern, Pattern};
pub use parser::parse;
pub use primitives::{
    Bytes32, InputType, OutputType, ReceiptType, TransactionStatus, TransactionType, UtxoType,
};
pub use schema::{FieldMap, FieldSpec, Segment, SubjectDefinition};
pub use types::{FieldType, FieldValue};
