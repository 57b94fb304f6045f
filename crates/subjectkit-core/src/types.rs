//! Semantic field types and their topic-segment codecs.
//!
//! Each [`FieldType`] owns one wire rule:
//! - hash-like ids: `0x` + 64 hex characters (upper-case accepted, lower-case emitted)
//! - heights and indexes: canonical decimal, no sign, no leading zeros
//! - closed enums: exactly one of the type's literals

use crate::error::FieldError;
use crate::primitives::{
    Bytes32, InputType, OutputType, ReceiptType, TransactionStatus, TransactionType, UtxoType,
};
use serde::{Deserialize, Serialize, Serializer};
use std::{fmt, str::FromStr};

/// Semantic type of a subject field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    // --- 32-byte identifiers ---
    Address,
    AssetId,
    ContractId,
    TxId,
    HexData,
    Bytes32,

    // --- Integers ---
    /// Unsigned 64-bit block height.
    BlockHeight,
    /// Unsigned 64-bit DA-layer block height.
    DaBlockHeight,
    #[serde(rename = "u32")]
    U32,

    // --- Closed enums ---
    TransactionStatus,
    TransactionType,
    InputType,
    OutputType,
    ReceiptType,
    UtxoType,
}

impl FieldType {
    pub const ALL: &'static [FieldType] = &[
        FieldType::Address,
        FieldType::AssetId,
        FieldType::ContractId,
        FieldType::TxId,
        FieldType::HexData,
        FieldType::Bytes32,
        FieldType::BlockHeight,
        FieldType::DaBlockHeight,
        FieldType::U32,
        FieldType::TransactionStatus,
        FieldType::TransactionType,
        FieldType::InputType,
        FieldType::OutputType,
        FieldType::ReceiptType,
        FieldType::UtxoType,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FieldType::Address => "Address",
            FieldType::AssetId => "AssetId",
            FieldType::ContractId => "ContractId",
            FieldType::TxId => "TxId",
            FieldType::HexData => "HexData",
            FieldType::Bytes32 => "Bytes32",
            FieldType::BlockHeight => "BlockHeight",
            FieldType::DaBlockHeight => "DaBlockHeight",
            FieldType::U32 => "u32",
            FieldType::TransactionStatus => TransactionStatus::NAME,
            FieldType::TransactionType => TransactionType::NAME,
            FieldType::InputType => InputType::NAME,
            FieldType::OutputType => OutputType::NAME,
            FieldType::ReceiptType => ReceiptType::NAME,
            FieldType::UtxoType => UtxoType::NAME,
        }
    }

    /// `true` for the six 32-byte identifier types.
    pub fn is_bytes32(&self) -> bool {
        matches!(
            self,
            FieldType::Address
                | FieldType::AssetId
                | FieldType::ContractId
                | FieldType::TxId
                | FieldType::HexData
                | FieldType::Bytes32
        )
    }

    /// Bit width for integer types, `None` otherwise.
    pub fn int_bits(&self) -> Option<u32> {
        match self {
            FieldType::BlockHeight | FieldType::DaBlockHeight => Some(64),
            FieldType::U32 => Some(32),
            _ => None,
        }
    }

    /// The closed literal set for enum types, in declaration order.
    pub fn literals(&self) -> Option<Vec<&'static str>> {
        fn names<T: Copy>(all: &[T], f: fn(&T) -> &'static str) -> Option<Vec<&'static str>> {
            Some(all.iter().map(f).collect())
        }
        match self {
            FieldType::TransactionStatus => names(TransactionStatus::ALL, TransactionStatus::as_str),
            FieldType::TransactionType => names(TransactionType::ALL, TransactionType::as_str),
            FieldType::InputType => names(InputType::ALL, InputType::as_str),
            FieldType::OutputType => names(OutputType::ALL, OutputType::as_str),
            FieldType::ReceiptType => names(ReceiptType::ALL, ReceiptType::as_str),
            FieldType::UtxoType => names(UtxoType::ALL, UtxoType::as_str),
            _ => None,
        }
    }

    /// Validate `value` against this type and return its canonical segment.
    pub fn encode(&self, value: &FieldValue) -> Result<String, FieldError> {
        match (self, value) {
            (ty, FieldValue::Bytes(bytes)) if ty.is_bytes32() => {
                Ok(Bytes32::from_slice(bytes)?.to_string())
            }
            (FieldType::BlockHeight | FieldType::DaBlockHeight, FieldValue::Uint(v)) => {
                Ok(v.to_string())
            }
            (FieldType::U32, FieldValue::Uint(v)) => {
                if *v > u64::from(u32::MAX) {
                    return Err(FieldError::Overflow {
                        value: v.to_string(),
                        bits: 32,
                    });
                }
                Ok(v.to_string())
            }
            (FieldType::TransactionStatus, FieldValue::TransactionStatus(v)) => Ok(v.to_string()),
            (FieldType::TransactionType, FieldValue::TransactionType(v)) => Ok(v.to_string()),
            (FieldType::InputType, FieldValue::InputType(v)) => Ok(v.to_string()),
            (FieldType::OutputType, FieldValue::OutputType(v)) => Ok(v.to_string()),
            (FieldType::ReceiptType, FieldValue::ReceiptType(v)) => Ok(v.to_string()),
            (FieldType::UtxoType, FieldValue::UtxoType(v)) => Ok(v.to_string()),
            (ty, other) => Err(FieldError::TypeMismatch {
                expected: ty.name().to_string(),
                got: other.kind().to_string(),
            }),
        }
    }

    /// Decode one topic segment into a typed value.
    pub fn decode(&self, segment: &str) -> Result<FieldValue, FieldError> {
        match self {
            FieldType::Address
            | FieldType::AssetId
            | FieldType::ContractId
            | FieldType::TxId
            | FieldType::HexData
            | FieldType::Bytes32 => {
                let b: Bytes32 = segment.parse()?;
                Ok(FieldValue::Bytes(b.0.to_vec()))
            }
            FieldType::BlockHeight | FieldType::DaBlockHeight => {
                decode_uint(segment, 64).map(FieldValue::Uint)
            }
            FieldType::U32 => decode_uint(segment, 32).map(FieldValue::Uint),
            FieldType::TransactionStatus => segment.parse().map(FieldValue::TransactionStatus),
            FieldType::TransactionType => segment.parse().map(FieldValue::TransactionType),
            FieldType::InputType => segment.parse().map(FieldValue::InputType),
            FieldType::OutputType => segment.parse().map(FieldValue::OutputType),
            FieldType::ReceiptType => segment.parse().map(FieldValue::ReceiptType),
            FieldType::UtxoType => segment.parse().map(FieldValue::UtxoType),
        }
    }

    /// Convert a JSON parameter into a typed value.
    ///
    /// Hex ids and enums must be strings; integers may be JSON numbers or
    /// decimal strings.
    pub fn from_json(&self, value: &serde_json::Value) -> Result<FieldValue, FieldError> {
        use serde_json::Value;

        let decoded = match (self.int_bits(), value) {
            (Some(_), Value::Number(n)) => match (n.as_u64(), n.as_i64()) {
                (Some(v), _) => FieldValue::Uint(v),
                (None, Some(neg)) => return Err(FieldError::Negative(neg)),
                (None, None) => return Err(FieldError::InvalidInteger(n.to_string())),
            },
            (_, Value::String(s)) => self.decode(s)?,
            (_, other) => {
                return Err(FieldError::TypeMismatch {
                    expected: self.name().to_string(),
                    got: json_kind(other).to_string(),
                })
            }
        };
        // width check for numbers that bypassed `decode`
        self.encode(&decoded)?;
        Ok(decoded)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FieldType {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldType::ALL
            .iter()
            .find(|ty| ty.name() == s)
            .copied()
            .ok_or_else(|| FieldError::UnknownLiteral {
                ty: "FieldType",
                value: s.to_string(),
            })
    }
}

fn decode_uint(segment: &str, bits: u32) -> Result<u64, FieldError> {
    if segment.is_empty() {
        return Err(FieldError::EmptyInteger);
    }
    if !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FieldError::InvalidInteger(segment.to_string()));
    }
    if segment.len() > 1 && segment.starts_with('0') {
        return Err(FieldError::LeadingZero(segment.to_string()));
    }
    let overflow = || FieldError::Overflow {
        value: segment.to_string(),
        bits,
    };
    let value: u64 = segment.parse().map_err(|_| overflow())?;
    if bits < 64 && value >> bits != 0 {
        return Err(overflow());
    }
    Ok(value)
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A typed field value, as accepted by the builder and produced by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldValue {
    /// Raw bytes for any 32-byte identifier type.
    Bytes(Vec<u8>),
    /// Any unsigned integer field; width is checked against the field type.
    Uint(u64),
    TransactionStatus(TransactionStatus),
    TransactionType(TransactionType),
    InputType(InputType),
    OutputType(OutputType),
    ReceiptType(ReceiptType),
    UtxoType(UtxoType),
}

impl FieldValue {
    /// Short name of the value's shape, used in mismatch errors.
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Bytes(_) => "bytes",
            FieldValue::Uint(_) => "uint",
            FieldValue::TransactionStatus(_) => TransactionStatus::NAME,
            FieldValue::TransactionType(_) => TransactionType::NAME,
            FieldValue::InputType(_) => InputType::NAME,
            FieldValue::OutputType(_) => OutputType::NAME,
            FieldValue::ReceiptType(_) => ReceiptType::NAME,
            FieldValue::UtxoType(_) => UtxoType::NAME,
        }
    }

    pub fn as_bytes32(&self) -> Option<Bytes32> {
        match self {
            FieldValue::Bytes(b) => Bytes32::from_slice(b).ok(),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            FieldValue::Uint(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Bytes(b) => write!(f, "0x{}", hex::encode(b)),
            FieldValue::Uint(v) => write!(f, "{v}"),
            FieldValue::TransactionStatus(v) => write!(f, "{v}"),
            FieldValue::TransactionType(v) => write!(f, "{v}"),
            FieldValue::InputType(v) => write!(f, "{v}"),
            FieldValue::OutputType(v) => write!(f, "{v}"),
            FieldValue::ReceiptType(v) => write!(f, "{v}"),
            FieldValue::UtxoType(v) => write!(f, "{v}"),
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Uint(v) => serializer.serialize_u64(*v),
            other => serializer.collect_str(other),
        }
    }
}

impl From<Bytes32> for FieldValue {
    fn from(v: Bytes32) -> Self {
        FieldValue::Bytes(v.0.to_vec())
    }
}

impl From<u64> for FieldValue {
    fn from(v: u64) -> Self {
        FieldValue::Uint(v)
    }
}

impl From<u32> for FieldValue {
    fn from(v: u32) -> Self {
        FieldValue::Uint(u64::from(v))
    }
}

macro_rules! impl_from_enum {
    ($($ty:ident),+) => {
        $(impl From<$ty> for FieldValue {
            fn from(v: $ty) -> Self {
                FieldValue::$ty(v)
            }
        })+
    };
}

impl_from_enum!(
    TransactionStatus,
    TransactionType,
    InputType,
    OutputType,
    ReceiptType,
    UtxoType
);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn address_from_short_segment_is_invalid() {
        let err = FieldType::Address.decode("0x123").unwrap_err();
        assert!(matches!(err, FieldError::InvalidHex(_)));
    }

    #[test]
    fn hex_decode_canonicalises_case() {
        let upper = format!("0x{}", "CD".repeat(32));
        let v = FieldType::TxId.decode(&upper).unwrap();
        assert_eq!(FieldType::TxId.encode(&v).unwrap(), format!("0x{}", "cd".repeat(32)));
    }

    #[test]
    fn bytes_must_be_32_long() {
        let err = FieldType::AssetId
            .encode(&FieldValue::Bytes(vec![1, 2, 3]))
            .unwrap_err();
        assert_eq!(err, FieldError::WrongLength { expected: 32, got: 3 });
    }

    #[test]
    fn integers_are_canonical_decimal() {
        assert_eq!(FieldType::BlockHeight.decode("0").unwrap(), FieldValue::Uint(0));
        assert_eq!(
            FieldType::BlockHeight.decode("1000000").unwrap(),
            FieldValue::Uint(1_000_000)
        );
        assert_eq!(FieldType::U32.decode(""), Err(FieldError::EmptyInteger));
        assert!(matches!(FieldType::U32.decode("007"), Err(FieldError::LeadingZero(_))));
        assert!(matches!(FieldType::U32.decode("-1"), Err(FieldError::InvalidInteger(_))));
        assert!(matches!(FieldType::U32.decode("+1"), Err(FieldError::InvalidInteger(_))));
        assert!(matches!(FieldType::U32.decode("12a"), Err(FieldError::InvalidInteger(_))));
    }

    #[test]
    fn integer_width_is_enforced() {
        assert!(FieldType::U32.decode("4294967295").is_ok());
        assert!(matches!(
            FieldType::U32.decode("4294967296"),
            Err(FieldError::Overflow { bits: 32, .. })
        ));
        assert!(matches!(
            FieldType::BlockHeight.decode("18446744073709551616"),
            Err(FieldError::Overflow { bits: 64, .. })
        ));
        assert!(matches!(
            FieldType::U32.encode(&FieldValue::Uint(u64::from(u32::MAX) + 1)),
            Err(FieldError::Overflow { bits: 32, .. })
        ));
    }

    #[test]
    fn enums_reject_foreign_values() {
        assert_eq!(
            FieldType::InputType.decode("coin").unwrap(),
            FieldValue::InputType(InputType::Coin)
        );
        assert!(FieldType::InputType.decode("change").is_err());
        let err = FieldType::OutputType
            .encode(&FieldValue::InputType(InputType::Coin))
            .unwrap_err();
        assert!(matches!(err, FieldError::TypeMismatch { .. }));
    }

    #[test]
    fn json_params_decode_per_type() {
        assert_eq!(
            FieldType::BlockHeight.from_json(&json!(123)).unwrap(),
            FieldValue::Uint(123)
        );
        assert_eq!(
            FieldType::BlockHeight.from_json(&json!("123")).unwrap(),
            FieldValue::Uint(123)
        );
        assert_eq!(FieldType::U32.from_json(&json!(-4)), Err(FieldError::Negative(-4)));
        assert!(FieldType::U32.from_json(&json!(5_000_000_000u64)).is_err());
        assert!(FieldType::U32.from_json(&json!(1.5)).is_err());
        assert!(FieldType::Address.from_json(&json!(12)).is_err());
        assert_eq!(
            FieldType::UtxoType.from_json(&json!("input_coin")).unwrap(),
            FieldValue::UtxoType(UtxoType::InputCoin)
        );
    }

    #[test]
    fn field_type_names_round_trip() {
        for ty in FieldType::ALL {
            assert_eq!(ty.name().parse::<FieldType>().unwrap(), *ty);
            let json = serde_json::to_value(ty).unwrap();
            assert_eq!(json, json!(ty.name()));
        }
    }

    #[test]
    fn field_value_serializes_as_segment() {
        assert_eq!(serde_json::to_value(FieldValue::Uint(7)).unwrap(), json!(7));
        assert_eq!(
            serde_json::to_value(FieldValue::from(ReceiptType::LogData)).unwrap(),
            json!("log_data")
        );
        assert_eq!(
            serde_json::to_value(FieldValue::from(Bytes32::repeat(0))).unwrap(),
            json!(format!("0x{}", "00".repeat(32)))
        );
    }

    #[test]
    fn accessors_expose_the_inner_value() {
        let id = FieldValue::from(Bytes32::repeat(0xab));
        assert_eq!(id.as_bytes32(), Some(Bytes32::repeat(0xab)));
        assert_eq!(id.as_u64(), None);

        let height = FieldValue::Uint(1_000_000);
        assert_eq!(height.as_u64(), Some(1_000_000));
        assert_eq!(height.as_bytes32(), None);

        assert_eq!(FieldValue::Bytes(vec![1; 31]).as_bytes32(), None);
        assert_eq!(FieldValue::from(InputType::Coin).as_u64(), None);
    }
}
