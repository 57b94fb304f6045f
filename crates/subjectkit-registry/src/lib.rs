//! # subjectkit-registry
//!
//! The built-in subject catalog and the registry that serves it.
//!
//! ## Pieces
//! 1. **Catalog**: the static table of every subject family and its variants
//! 2. **Registry**: lookup by entity, variant or id; topic resolution; a
//!    startup self-check that refuses a malformed catalog
//! 3. **SubjectKind**: tagged-union variant dispatch over the catalog
//! 4. **SubjectPayload**: `{subject, params}` JSON → subscription pattern
//! 5. **Export**: the catalog as an order-preserving JSON document
//!
//! Most callers only need [`SubjectRegistry::global`].

pub mod catalog;
pub mod export;
pub mod kind;
pub mod payload;
pub mod registry;
pub mod validate;

pub use catalog::CATALOG;
pub use export::{schema_document, schema_entries};
pub use kind::SubjectKind;
pub use payload::SubjectPayload;
pub use registry::{ResolvedSubject, SubjectRegistry};
pub use validate::validate_catalog;
