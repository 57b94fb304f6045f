//! Catalog self-check.
//!
//! A catalog that fails any of these checks is a programming error; the
//! registry refuses to build from it rather than failing later per call.

use std::collections::HashSet;
use subjectkit_core::{RegistryError, Segment, SubjectDefinition};

/// Check every definition of `catalog`, including nested variants.
pub fn validate_catalog(catalog: &[(&str, SubjectDefinition)]) -> Result<(), RegistryError> {
    let mut ids = HashSet::new();
    let mut keys = HashSet::new();

    for (key, definition) in catalog {
        if !keys.insert(*key) {
            return Err(RegistryError::DuplicateEntity {
                key: key.to_string(),
            });
        }
        if definition.literal_prefix().first() != Some(key) {
            return Err(RegistryError::ValidationFailed {
                id: definition.id.to_string(),
                reason: format!("format must start with the entity key '{key}'"),
            });
        }

        validate_definition(definition)?;
        claim_id(&mut ids, definition)?;

        let mut variant_keys = HashSet::new();
        for (variant_key, variant) in definition.variants {
            if !variant_keys.insert(*variant_key) {
                return Err(RegistryError::ValidationFailed {
                    id: definition.id.to_string(),
                    reason: format!("duplicate variant key '{variant_key}'"),
                });
            }
            validate_definition(variant)?;
            validate_variant(definition, variant_key, variant)?;
            claim_id(&mut ids, variant)?;
        }
    }
    Ok(())
}

fn claim_id<'a>(
    ids: &mut HashSet<&'a str>,
    definition: &'a SubjectDefinition,
) -> Result<(), RegistryError> {
    if ids.insert(definition.id) {
        Ok(())
    } else {
        Err(RegistryError::DuplicateId {
            id: definition.id.to_string(),
        })
    }
}

/// Shape checks for a single definition: non-empty format, well-formed
/// literals, placeholder/field bijection in declared order, derived wildcard.
pub fn validate_definition(definition: &SubjectDefinition) -> Result<(), RegistryError> {
    let id = definition.id.to_string();
    if definition.format.is_empty() {
        return Err(RegistryError::EmptyFormat { id });
    }

    let mut placeholders = Vec::new();
    for segment in definition.segments() {
        match segment {
            Segment::Literal(lit) => {
                if lit.is_empty() || lit == "*" || lit == ">" || lit.contains(['{', '}']) {
                    return Err(RegistryError::ValidationFailed {
                        id,
                        reason: format!("malformed literal token '{lit}'"),
                    });
                }
            }
            Segment::Placeholder(name) => {
                if definition.field(name).is_none() {
                    return Err(RegistryError::UndeclaredPlaceholder {
                        id,
                        name: name.to_string(),
                    });
                }
                placeholders.push(name);
            }
        }
    }

    for field in definition.fields {
        let count = placeholders.iter().filter(|p| **p == field.name).count();
        if count != 1 {
            return Err(RegistryError::FieldNotPlacedOnce {
                id,
                name: field.name.to_string(),
                count,
            });
        }
    }
    if !placeholders.iter().copied().eq(definition.field_names()) {
        return Err(RegistryError::FieldOrder { id });
    }

    let expected = definition.derived_wildcard();
    if definition.wildcard != expected {
        return Err(RegistryError::WildcardMismatch {
            id,
            expected,
            got: definition.wildcard.to_string(),
        });
    }
    Ok(())
}

/// A variant must refine its parent: same entity, the parent's literal
/// prefix followed by the variant key where the parent has its
/// discriminant, then the parent's remaining fields (same names, same types)
/// before any fields of its own.
pub fn validate_variant(
    parent: &SubjectDefinition,
    key: &str,
    variant: &SubjectDefinition,
) -> Result<(), RegistryError> {
    let refinement = |reason: String| RegistryError::VariantPrefix {
        id: variant.id.to_string(),
        parent: parent.id.to_string(),
        reason,
    };

    if variant.entity != parent.entity {
        return Err(RegistryError::EntityMismatch {
            id: variant.id.to_string(),
            expected: parent.entity.to_string(),
            got: variant.entity.to_string(),
        });
    }
    if variant.has_variants() {
        return Err(RegistryError::ValidationFailed {
            id: variant.id.to_string(),
            reason: "variants cannot be nested".to_string(),
        });
    }

    let parent_prefix = parent.literal_prefix();
    let mut expected_prefix: Vec<&str> = parent_prefix.clone();
    expected_prefix.push(key);
    if variant.literal_prefix() != expected_prefix {
        return Err(refinement(format!(
            "literal prefix should be '{}'",
            expected_prefix.join(".")
        )));
    }

    let discriminant = parent
        .discriminant()
        .ok_or_else(|| refinement("parent has no discriminant field".to_string()))?;
    if parent.segments().nth(parent_prefix.len()) != Some(Segment::Placeholder(discriminant.name)) {
        return Err(refinement(format!(
            "discriminant '{}' must directly follow the literal prefix",
            discriminant.name
        )));
    }
    discriminant.ty.decode(key).map_err(|e| {
        refinement(format!(
            "'{key}' is not a {} literal: {e}",
            discriminant.ty
        ))
    })?;

    let parent_rest: Vec<_> = parent.segments().skip(parent_prefix.len() + 1).collect();
    let variant_rest: Vec<_> = variant.segments().skip(expected_prefix.len()).collect();
    if variant_rest.len() < parent_rest.len() {
        return Err(refinement("variant is shorter than its parent".to_string()));
    }
    for (p, v) in parent_rest.iter().zip(&variant_rest) {
        let (Segment::Placeholder(p_name), Segment::Placeholder(v_name)) = (p, v) else {
            return Err(refinement("literal tokens after the discriminant".to_string()));
        };
        if p_name != v_name {
            return Err(refinement(format!(
                "expected field '{p_name}', found '{v_name}'"
            )));
        }
        let p_ty = parent.field(p_name).map(|f| f.ty);
        let v_ty = variant.field(v_name).map(|f| f.ty);
        if p_ty != v_ty {
            return Err(refinement(format!("field '{p_name}' changes type")));
        }
    }
    Ok(())
}
