//! Subject parser: topic string → typed field values.
//!
//! The exact inverse of a strict build: wildcard tokens are never accepted,
//! and for canonical topics `build(d, &parse(d, s)?, false)? == s`.

use crate::error::SubjectError;
use crate::schema::{FieldMap, Segment, SubjectDefinition};

/// Recover the typed fields of `topic` according to `definition`.
pub fn parse(definition: &SubjectDefinition, topic: &str) -> Result<FieldMap, SubjectError> {
    let expected = definition.segment_count();
    let got = topic.split('.').count();
    if expected != got {
        return Err(SubjectError::SegmentCountMismatch { expected, got });
    }

    let mut fields = FieldMap::with_capacity(definition.fields.len());
    for (position, (segment, token)) in definition.segments().zip(topic.split('.')).enumerate() {
        match segment {
            Segment::Literal(lit) => {
                if lit != token {
                    return Err(SubjectError::LiteralMismatch {
                        position,
                        expected: lit.to_string(),
                        got: token.to_string(),
                    });
                }
            }
            Segment::Placeholder(name) => {
                let spec = definition.field(name).ok_or_else(|| SubjectError::UnknownField {
                    id: definition.id.to_string(),
                    field: name.to_string(),
                })?;
                let value = spec
                    .ty
                    .decode(token)
                    .map_err(|e| SubjectError::invalid_field(name, e))?;
                fields.insert(name.to_string(), value);
            }
        }
    }
    Ok(fields)
}
