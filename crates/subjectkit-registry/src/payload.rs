//! JSON subject payloads.
//!
//! Subscribers describe what they want as `{"subject": "<id>", "params": {...}}`.
//! Params name fields of that subject; unset or `null` fields become `*`, and
//! a payload that sets no field at all subscribes to the subject's wildcard.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use subjectkit_core::{build, FieldMap, SubjectDefinition, SubjectError};

use crate::registry::SubjectRegistry;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectPayload {
    /// Catalog id, e.g. `inputs_coin`
    pub subject: String,
    #[serde(default)]
    pub params: Value,
}

impl SubjectPayload {
    pub fn new(subject: impl Into<String>, params: Value) -> Self {
        Self {
            subject: subject.into(),
            params,
        }
    }

    /// Payload for `definition` carrying already-typed field values.
    pub fn from_fields(
        definition: &SubjectDefinition,
        fields: &FieldMap,
    ) -> Result<Self, SubjectError> {
        if let Some(name) = fields.keys().find(|name| definition.field(name).is_none()) {
            return Err(SubjectError::UnknownField {
                id: definition.id.to_string(),
                field: name.clone(),
            });
        }
        Ok(Self::new(definition.id, serde_json::to_value(fields)?))
    }

    pub fn from_json(json: &str) -> Result<Self, SubjectError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Top-level entity this payload addresses (`inputs_coin` → `inputs`).
    pub fn entity_key(&self) -> &str {
        self.subject
            .split_once('_')
            .map_or(self.subject.as_str(), |(entity, _)| entity)
    }

    pub fn definition(
        &self,
        registry: &SubjectRegistry,
    ) -> Result<&'static SubjectDefinition, SubjectError> {
        registry.get(&self.subject)
    }

    /// Decode `params` into typed field values, skipping `null`s.
    pub fn fields(&self, definition: &SubjectDefinition) -> Result<FieldMap, SubjectError> {
        let params = match &self.params {
            Value::Null => return Ok(FieldMap::new()),
            Value::Object(map) => map,
            other => {
                return Err(SubjectError::InvalidParams(format!(
                    "params must be an object, got {other}"
                )))
            }
        };

        let mut fields = FieldMap::with_capacity(params.len());
        for (name, value) in params {
            let spec = definition.field(name).ok_or_else(|| {
                SubjectError::InvalidParams(format!(
                    "'{}' has no field '{name}'",
                    definition.id
                ))
            })?;
            if value.is_null() {
                continue;
            }
            let typed = spec
                .ty
                .from_json(value)
                .map_err(|e| SubjectError::invalid_field(name.as_str(), e))?;
            fields.insert(name.clone(), typed);
        }
        Ok(fields)
    }

    /// The subscription pattern this payload describes.
    ///
    /// When no field is set (`params` absent, `{}` or all `null`) this is the
    /// subject's wildcard; otherwise a partial build where every field not
    /// given is `*`.
    pub fn to_topic(&self, registry: &SubjectRegistry) -> Result<String, SubjectError> {
        let definition = self.definition(registry)?;
        let fields = self.fields(definition)?;
        if fields.is_empty() {
            return Ok(definition.query_all().to_string());
        }
        build(definition, &fields, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use subjectkit_core::{Bytes32, FieldValue, InputType};

    fn registry() -> &'static SubjectRegistry {
        SubjectRegistry::global()
    }

    #[test]
    fn no_params_is_query_all() {
        let payload = SubjectPayload::from_json(r#"{"subject":"receipts_mint"}"#).unwrap();
        assert_eq!(payload.to_topic(registry()).unwrap(), "receipts.mint.>");
        assert_eq!(payload.entity_key(), "receipts");
    }

    #[test]
    fn empty_or_all_null_params_are_query_all() {
        for params in [json!({}), json!({ "height": null, "producer": null })] {
            let payload = SubjectPayload::new("blocks", params);
            assert_eq!(payload.to_topic(registry()).unwrap(), "blocks.>");
        }
    }

    #[test]
    fn from_fields_matches_a_partial_build() {
        let coin = registry().lookup_variant("inputs", "coin").unwrap();
        let mut fields = FieldMap::new();
        fields.insert("block_height".into(), FieldValue::Uint(1_000_000));
        fields.insert("owner".into(), FieldValue::from(Bytes32::repeat(0xcd)));
        fields.insert("tx_index".into(), FieldValue::Uint(0));

        let payload = SubjectPayload::from_fields(coin, &fields).unwrap();
        assert_eq!(payload.subject, "inputs_coin");
        assert_eq!(payload.params["block_height"], json!(1_000_000));
        assert_eq!(payload.params["owner"], json!(Bytes32::repeat(0xcd).to_string()));
        assert_eq!(
            payload.to_topic(registry()).unwrap(),
            build(coin, &fields, true).unwrap()
        );
        assert_eq!(payload.fields(coin).unwrap(), fields);

        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(SubjectPayload::from_json(&json).unwrap(), payload);
    }

    #[test]
    fn from_fields_keeps_enum_literals() {
        let inputs = registry().lookup("inputs").unwrap();
        let mut fields = FieldMap::new();
        fields.insert("input_type".into(), FieldValue::from(InputType::Message));

        let payload = SubjectPayload::from_fields(inputs, &fields).unwrap();
        assert_eq!(payload.params, json!({ "input_type": "message" }));
        assert_eq!(payload.to_topic(registry()).unwrap(), "inputs.message.*.*.*.*");
    }

    #[test]
    fn from_fields_rejects_foreign_fields() {
        let blocks = registry().lookup("blocks").unwrap();
        let mut fields = FieldMap::new();
        fields.insert("owner".into(), FieldValue::from(Bytes32::repeat(1)));
        assert!(matches!(
            SubjectPayload::from_fields(blocks, &fields),
            Err(SubjectError::UnknownField { field, .. }) if field == "owner"
        ));
    }

    #[test]
    fn params_fill_a_partial_pattern() {
        let payload = SubjectPayload::new(
            "inputs_coin",
            json!({
                "block_height": 1000000,
                "owner": format!("0x{}", "CD".repeat(32)),
                "tx_index": null,
            }),
        );
        assert_eq!(
            payload.to_topic(registry()).unwrap(),
            format!("inputs.coin.1000000.*.*.*.0x{}.*", "cd".repeat(32))
        );
    }

    #[test]
    fn integers_accept_decimal_strings() {
        let payload = SubjectPayload::new("blocks", json!({ "height": "42" }));
        assert_eq!(payload.to_topic(registry()).unwrap(), "blocks.*.*.42");
    }

    #[test]
    fn enum_params_use_literals() {
        let payload = SubjectPayload::new(
            "transactions",
            json!({ "tx_status": "success", "tx_type": "script" }),
        );
        assert_eq!(
            payload.to_topic(registry()).unwrap(),
            "transactions.*.*.*.success.script"
        );

        let bad = SubjectPayload::new("transactions", json!({ "tx_type": "Script" }));
        assert!(matches!(
            bad.to_topic(registry()),
            Err(SubjectError::InvalidField { field, .. }) if field == "tx_type"
        ));
    }

    #[test]
    fn rejects_unknown_fields_and_shapes() {
        let unknown = SubjectPayload::new("blocks", json!({ "owner": "0x00" }));
        assert!(matches!(
            unknown.to_topic(registry()),
            Err(SubjectError::InvalidParams(_))
        ));

        let not_object = SubjectPayload::new("blocks", json!([1, 2]));
        assert!(matches!(
            not_object.to_topic(registry()),
            Err(SubjectError::InvalidParams(_))
        ));

        let missing = SubjectPayload::new("wallets", Value::Null);
        assert!(matches!(
            missing.to_topic(registry()),
            Err(SubjectError::UnknownSubject { .. })
        ));
    }

    #[test]
    fn negative_and_oversized_integers() {
        let negative = SubjectPayload::new("utxos", json!({ "tx_index": -1 }));
        assert!(matches!(
            negative.to_topic(registry()),
            Err(SubjectError::InvalidField { field, .. }) if field == "tx_index"
        ));

        let oversized = SubjectPayload::new("utxos", json!({ "tx_index": 1u64 << 32 }));
        assert!(oversized.to_topic(registry()).is_err());
    }

    #[test]
    fn malformed_json_is_a_serde_error() {
        assert!(matches!(
            SubjectPayload::from_json("{"),
            Err(SubjectError::Serde(_))
        ));
    }
}
