//! Read-only subject registry.
//!
//! Built once from a static catalog, validated on construction, never
//! mutated afterwards. Every method takes `&self` and hands out `'static`
//! definitions, so one instance can be shared freely across threads.

use indexmap::IndexMap;
use std::sync::OnceLock;
use subjectkit_core::{parse, FieldMap, RegistryError, SubjectDefinition, SubjectError};
use tracing::{debug, error};

use crate::catalog::CATALOG;
use crate::kind::SubjectKind;
use crate::validate::validate_catalog;

/// A topic matched to the definition it belongs to, with its decoded fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSubject {
    pub definition: &'static SubjectDefinition,
    pub fields: FieldMap,
}

impl ResolvedSubject {
    pub fn kind(&self) -> Option<SubjectKind> {
        SubjectKind::from_id(self.definition.id)
    }
}

#[derive(Debug, Clone)]
pub struct SubjectRegistry {
    /// entity key → base definition, in catalog order
    entities: IndexMap<&'static str, &'static SubjectDefinition>,
    /// id → definition; each base is followed by its variants
    by_id: IndexMap<&'static str, &'static SubjectDefinition>,
}

impl SubjectRegistry {
    /// Build a registry from `catalog`, failing on the first invariant
    /// violation.
    pub fn try_new(
        catalog: &'static [(&'static str, SubjectDefinition)],
    ) -> Result<Self, RegistryError> {
        validate_catalog(catalog)?;

        let mut entities = IndexMap::with_capacity(catalog.len());
        let mut by_id = IndexMap::new();
        for (key, definition) in catalog {
            entities.insert(*key, definition);
            by_id.insert(definition.id, definition);
            for (_, variant) in definition.variants {
                by_id.insert(variant.id, variant);
            }
        }

        debug!(
            entities = entities.len(),
            definitions = by_id.len(),
            "subject registry built"
        );
        Ok(Self { entities, by_id })
    }

    /// Registry over the built-in [`CATALOG`].
    pub fn builtin() -> Result<Self, RegistryError> {
        Self::try_new(CATALOG)
    }

    /// The process-wide registry over the built-in catalog.
    ///
    /// # Panics
    /// If the built-in catalog fails its self-check. That is a defect in the
    /// catalog table itself and is caught by this crate's tests.
    pub fn global() -> &'static SubjectRegistry {
        static GLOBAL: OnceLock<SubjectRegistry> = OnceLock::new();
        GLOBAL.get_or_init(|| match Self::builtin() {
            Ok(registry) => registry,
            Err(e) => {
                error!(error = %e, "built-in subject catalog failed its self-check");
                panic!("invalid built-in subject catalog: {e}");
            }
        })
    }

    pub fn lookup(&self, entity: &str) -> Result<&'static SubjectDefinition, SubjectError> {
        self.entities
            .get(entity)
            .copied()
            .ok_or_else(|| SubjectError::UnknownEntity {
                entity: entity.to_string(),
            })
    }

    pub fn lookup_variant(
        &self,
        entity: &str,
        variant: &str,
    ) -> Result<&'static SubjectDefinition, SubjectError> {
        self.lookup(entity)?
            .variant(variant)
            .ok_or_else(|| SubjectError::UnknownVariant {
                entity: entity.to_string(),
                variant: variant.to_string(),
            })
    }

    /// Lookup by globally unique id (`inputs`, `inputs_coin`, ...).
    pub fn get(&self, id: &str) -> Result<&'static SubjectDefinition, SubjectError> {
        self.by_id
            .get(id)
            .copied()
            .ok_or_else(|| SubjectError::UnknownSubject { id: id.to_string() })
    }

    pub fn definition(&self, kind: SubjectKind) -> Result<&'static SubjectDefinition, SubjectError> {
        match kind.variant_key() {
            Some(variant) => self.lookup_variant(kind.entity_key(), variant),
            None => self.lookup(kind.entity_key()),
        }
    }

    /// Every definition: each base followed by its variants.
    pub fn all(&self) -> impl Iterator<Item = &'static SubjectDefinition> + '_ {
        self.by_id.values().copied()
    }

    pub fn entity_keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entities.keys().copied()
    }

    /// Number of definitions, variants included.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Find the definition `topic` was built from and decode its fields.
    ///
    /// Variants are tried before their base so the most specific definition
    /// wins. Definitions that do not fit the topic's shape are skipped; if
    /// none parses, the first field error seen is returned, otherwise
    /// `UnknownSubject`.
    pub fn resolve(&self, topic: &str) -> Result<ResolvedSubject, SubjectError> {
        let mut first_error = None;
        for base in self.entities.values() {
            let candidates = base.variants.iter().map(|(_, v)| v).chain(Some(*base));
            for definition in candidates {
                match parse(definition, topic) {
                    Ok(fields) => {
                        debug!(topic, subject = definition.id, "topic resolved");
                        return Ok(ResolvedSubject { definition, fields });
                    }
                    Err(e) if e.is_mismatch() => continue,
                    Err(e) => {
                        debug!(topic, subject = definition.id, error = %e, "topic rejected");
                        first_error.get_or_insert(e);
                    }
                }
            }
        }
        Err(first_error.unwrap_or_else(|| SubjectError::UnknownSubject {
            id: topic.to_string(),
        }))
    }
}
