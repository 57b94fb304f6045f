//! Catalog export as a JSON document.
//!
//! Shape: `{ <entity>: { id, entity, subject, format, wildcard,
//! fields: { <name>: { type, description } }, variants: { <key>: {...} } } }`.
//! Key order follows the catalog.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use subjectkit_core::{FieldType, SubjectDefinition, SubjectError};

use crate::registry::SubjectRegistry;

#[derive(Debug, Clone, Serialize)]
pub struct FieldEntry {
    #[serde(rename = "type")]
    pub ty: FieldType,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct DefinitionEntry {
    pub id: &'static str,
    pub entity: &'static str,
    pub subject: &'static str,
    pub format: &'static str,
    pub wildcard: &'static str,
    pub fields: IndexMap<&'static str, FieldEntry>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub variants: IndexMap<&'static str, DefinitionEntry>,
}

impl From<&SubjectDefinition> for DefinitionEntry {
    fn from(def: &SubjectDefinition) -> Self {
        Self {
            id: def.id,
            entity: def.entity,
            subject: def.subject,
            format: def.format,
            wildcard: def.wildcard,
            fields: def
                .fields
                .iter()
                .map(|f| {
                    (
                        f.name,
                        FieldEntry {
                            ty: f.ty,
                            description: f.description,
                        },
                    )
                })
                .collect(),
            variants: def
                .variants
                .iter()
                .map(|(key, variant)| (*key, DefinitionEntry::from(variant)))
                .collect(),
        }
    }
}

/// Entity key → exported definition, for every entity in `registry`.
pub fn schema_entries(registry: &SubjectRegistry) -> IndexMap<&'static str, DefinitionEntry> {
    registry
        .entity_keys()
        .filter_map(|key| registry.lookup(key).ok().map(|def| (key, def.into())))
        .collect()
}

/// The whole catalog as a JSON value.
pub fn schema_document(registry: &SubjectRegistry) -> Result<Value, SubjectError> {
    Ok(serde_json::to_value(schema_entries(registry))?)
}
