//! Subject builder: typed field values → topic string.
//!
//! The same walk serves publishing (every field present, `partial = false`)
//! and subscribing (`partial = true`, each absent field becomes `*`).

use crate::error::SubjectError;
use crate::matcher::SINGLE_WILDCARD;
use crate::schema::{FieldMap, Segment, SubjectDefinition};
use crate::types::FieldValue;

/// Render `definition.format` with `values`.
///
/// Fails with `MissingField` when a value is absent and `partial` is false,
/// `InvalidField` when a value does not fit its field type, and
/// `UnknownField` when `values` names a field the definition does not have.
pub fn build(
    definition: &SubjectDefinition,
    values: &FieldMap,
    partial: bool,
) -> Result<String, SubjectError> {
    if let Some(unknown) = values.keys().find(|k| definition.field(k).is_none()) {
        return Err(SubjectError::UnknownField {
            id: definition.id.to_string(),
            field: unknown.clone(),
        });
    }

    let mut tokens = Vec::with_capacity(definition.segment_count());
    for segment in definition.segments() {
        match segment {
            Segment::Literal(lit) => tokens.push(lit.to_string()),
            Segment::Placeholder(name) => {
                let spec = definition.field(name).ok_or_else(|| SubjectError::UnknownField {
                    id: definition.id.to_string(),
                    field: name.to_string(),
                })?;
                match values.get(name) {
                    Some(value) => {
                        let encoded = spec
                            .ty
                            .encode(value)
                            .map_err(|e| SubjectError::invalid_field(name, e))?;
                        tokens.push(encoded);
                    }
                    None if partial => tokens.push(SINGLE_WILDCARD.to_string()),
                    None => {
                        return Err(SubjectError::MissingField {
                            field: name.to_string(),
                        })
                    }
                }
            }
        }
    }
    Ok(tokens.join("."))
}

/// Fluent front-end over [`build`].
///
/// ```
/// use subjectkit_core::{Bytes32, FieldSpec, FieldType, SubjectBuilder, SubjectDefinition};
///
/// const FIELDS: &[FieldSpec] = &[
///     FieldSpec::new("producer", FieldType::Address, "block producer"),
///     FieldSpec::new("height", FieldType::BlockHeight, "block height"),
/// ];
/// const BLOCKS: SubjectDefinition = SubjectDefinition {
///     id: "blocks",
///     entity: "Block",
///     subject: "BlocksSubject",
///     format: "blocks.{producer}.{height}",
///     wildcard: "blocks.>",
///     fields: FIELDS,
///     variants: &[],
/// };
///
/// let pattern = SubjectBuilder::new(&BLOCKS).with("height", 7u64).build_partial().unwrap();
/// assert_eq!(pattern, "blocks.*.7");
/// ```
#[derive(Debug, Clone)]
pub struct SubjectBuilder<'d> {
    definition: &'d SubjectDefinition,
    values: FieldMap,
}

impl<'d> SubjectBuilder<'d> {
    pub fn new(definition: &'d SubjectDefinition) -> Self {
        Self {
            definition,
            values: FieldMap::new(),
        }
    }

    /// Set a field value. Setting the same field twice keeps the last value.
    pub fn with(mut self, field: &str, value: impl Into<FieldValue>) -> Self {
        self.values.insert(field.to_string(), value.into());
        self
    }

    /// Set a field only when `value` is `Some`.
    pub fn with_opt(self, field: &str, value: Option<impl Into<FieldValue>>) -> Self {
        match value {
            Some(v) => self.with(field, v),
            None => self,
        }
    }

    pub fn values(&self) -> &FieldMap {
        &self.values
    }

    /// Concrete topic for publishing; every field must be set.
    pub fn build(&self) -> Result<String, SubjectError> {
        build(self.definition, &self.values, false)
    }

    /// Subscription pattern; unset fields become `*`.
    pub fn build_partial(&self) -> Result<String, SubjectError> {
        build(self.definition, &self.values, true)
    }
}
