//! Subject definitions: the static description of a subject family.

use crate::types::{FieldType, FieldValue};
use indexmap::IndexMap;
use serde::Serialize;

/// Field values keyed by field name, in the definition's field order.
pub type FieldMap = IndexMap<String, FieldValue>;

/// Definition of a single typed field of a subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub ty: FieldType,
    pub description: &'static str,
}

impl FieldSpec {
    pub const fn new(name: &'static str, ty: FieldType, description: &'static str) -> Self {
        Self {
            name,
            ty,
            description,
        }
    }
}

/// One `.`-separated token of a format template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Fixed text such as `inputs` or `coin`
    Literal(&'a str),
    /// `{name}`: replaced by the encoded value of field `name`
    Placeholder(&'a str),
}

impl<'a> Segment<'a> {
    pub fn parse(token: &'a str) -> Self {
        match token.strip_prefix('{').and_then(|t| t.strip_suffix('}')) {
            Some(name) => Segment::Placeholder(name),
            None => Segment::Literal(token),
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Segment::Literal(_))
    }
}

/// A subject family: its identity, format template and typed fields.
///
/// Base definitions (e.g. `inputs`) may carry variants (e.g. `inputs.coin`)
/// keyed by the literal that replaces the base's discriminant field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubjectDefinition {
    /// Globally unique key, e.g. `inputs_coin`
    pub id: &'static str,
    /// Logical domain entity shared by a base and its variants, e.g. `Input`
    pub entity: &'static str,
    /// Subject type name, e.g. `InputsCoinSubject`
    pub subject: &'static str,
    /// Template such as `inputs.coin.{block_height}.{tx_id}`
    pub format: &'static str,
    /// Subscribe-to-everything pattern, literal prefix of `format` + `.>`
    pub wildcard: &'static str,
    /// Ordered field definitions (same order as the placeholders in `format`)
    pub fields: &'static [FieldSpec],
    /// Narrower subjects keyed by discriminant literal; empty for leaves
    pub variants: &'static [(&'static str, SubjectDefinition)],
}

impl SubjectDefinition {
    pub fn segments(&self) -> impl Iterator<Item = Segment<'static>> + 'static {
        self.format.split('.').map(Segment::parse)
    }

    pub fn segment_count(&self) -> usize {
        self.format.split('.').count()
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> {
        self.fields.iter().map(|f| f.name)
    }

    pub fn variant(&self, key: &str) -> Option<&'static SubjectDefinition> {
        self.variants.iter().find(|(k, _)| *k == key).map(|(_, d)| d)
    }

    pub fn has_variants(&self) -> bool {
        !self.variants.is_empty()
    }

    /// Leading literal tokens of the format, up to the first placeholder.
    pub fn literal_prefix(&self) -> Vec<&'static str> {
        self.segments()
            .map_while(|s| match s {
                Segment::Literal(l) => Some(l),
                Segment::Placeholder(_) => None,
            })
            .collect()
    }

    /// The wildcard this definition should carry: literal prefix + `>`.
    pub fn derived_wildcard(&self) -> String {
        let mut tokens = self.literal_prefix();
        tokens.push(">");
        tokens.join(".")
    }

    /// Alias kept for callers that think in "query everything" terms.
    pub fn query_all(&self) -> &'static str {
        self.wildcard
    }

    /// The discriminant field of a base definition: the first placeholder
    /// whose position the variants fill with a literal.
    pub fn discriminant(&self) -> Option<&'static FieldSpec> {
        let (_, first) = self.variants.first()?;
        let position = first.literal_prefix().len().checked_sub(1)?;
        match self.segments().nth(position)? {
            Segment::Placeholder(name) => self.field(name),
            Segment::Literal(_) => None,
        }
    }

    /// Build a value map with every field of this definition set, taking
    /// values from `f`. Useful for fixtures and exhaustive checks.
    pub fn fill_with(&self, mut f: impl FnMut(&FieldSpec) -> FieldValue) -> FieldMap {
        self.fields
            .iter()
            .map(|spec| (spec.name.to_string(), f(spec)))
            .collect()
    }
}
