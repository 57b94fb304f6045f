//! `subjectkit list|show|build|parse`: work with one subject definition.

use anyhow::{anyhow, Context, Result};
use subjectkit_core::{build, parse, FieldMap, SubjectDefinition};
use subjectkit_registry::SubjectRegistry;

/// Select the base definition of `entity`, or one of its variants.
pub fn select(
    registry: &SubjectRegistry,
    entity: &str,
    variant: Option<&str>,
) -> Result<&'static SubjectDefinition> {
    let definition = match variant {
        Some(v) => registry.lookup_variant(entity, v)?,
        None => registry.lookup(entity)?,
    };
    Ok(definition)
}

/// Parse `name=value` assignments into typed fields of `definition`.
pub fn parse_assignments(definition: &SubjectDefinition, assignments: &[String]) -> Result<FieldMap> {
    let mut fields = FieldMap::with_capacity(assignments.len());
    for assignment in assignments {
        let (name, value) = assignment
            .split_once('=')
            .ok_or_else(|| anyhow!("expected name=value, got '{assignment}'"))?;
        let spec = definition
            .field(name)
            .ok_or_else(|| anyhow!("'{}' has no field '{name}'", definition.id))?;
        let typed = spec
            .ty
            .decode(value)
            .with_context(|| format!("invalid value for '{name}' ({})", spec.ty))?;
        fields.insert(name.to_string(), typed);
    }
    Ok(fields)
}

pub fn list(registry: &SubjectRegistry) -> Result<()> {
    println!("{} subjects:", registry.len());
    for definition in registry.all() {
        println!("  {:<28} {:<24} {}", definition.id, definition.wildcard, definition.format);
    }
    Ok(())
}

pub fn show(registry: &SubjectRegistry, entity: &str, variant: Option<&str>) -> Result<()> {
    let definition = select(registry, entity, variant)?;
    println!("Subject:  {} ({})", definition.id, definition.subject);
    println!("Entity:   {}", definition.entity);
    println!("Format:   {}", definition.format);
    println!("Wildcard: {}", definition.wildcard);
    println!("Fields:");
    for field in definition.fields {
        println!("  - {:<14} {:<18} {}", field.name, field.ty.name(), field.description);
    }
    if definition.has_variants() {
        let keys: Vec<_> = definition.variants.iter().map(|(k, _)| *k).collect();
        println!("Variants: {}", keys.join(", "));
    }
    Ok(())
}

pub fn run_build(
    registry: &SubjectRegistry,
    entity: &str,
    variant: Option<&str>,
    assignments: &[String],
    partial: bool,
) -> Result<()> {
    let definition = select(registry, entity, variant)?;
    let fields = parse_assignments(definition, assignments)?;
    let topic = build(definition, &fields, partial)?;
    println!("{topic}");
    Ok(())
}

pub fn run_parse(
    registry: &SubjectRegistry,
    entity: &str,
    variant: Option<&str>,
    topic: &str,
    as_json: bool,
) -> Result<()> {
    let definition = select(registry, entity, variant)?;
    let fields = parse(definition, topic)
        .with_context(|| format!("'{topic}' is not a {} topic", definition.id))?;
    print_fields(definition, &fields, as_json)
}

pub fn print_fields(definition: &SubjectDefinition, fields: &FieldMap, as_json: bool) -> Result<()> {
    if as_json {
        let doc = serde_json::json!({ "subject": definition.id, "fields": fields });
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        println!("Subject: {}", definition.id);
        println!("Fields:");
        for (name, value) in fields {
            println!("  {name}: {value}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use subjectkit_core::FieldValue;

    #[test]
    fn assignments_are_typed() {
        let registry = SubjectRegistry::global();
        let def = select(registry, "transactions", None).unwrap();
        let fields = parse_assignments(
            def,
            &["tx_index=3".to_string(), "tx_type=script".to_string()],
        )
        .unwrap();
        assert_eq!(fields["tx_index"], FieldValue::Uint(3));
        assert_eq!(build(def, &fields, true).unwrap(), "transactions.*.*.3.*.script");
    }

    #[test]
    fn bad_assignments_are_reported() {
        let registry = SubjectRegistry::global();
        let def = select(registry, "inputs", Some("coin")).unwrap();
        assert!(parse_assignments(def, &["owner".to_string()]).is_err());
        assert!(parse_assignments(def, &["colour=red".to_string()]).is_err());
        assert!(parse_assignments(def, &["owner=0x123".to_string()]).is_err());
        assert!(select(registry, "inputs", Some("gold")).is_err());
    }
}
