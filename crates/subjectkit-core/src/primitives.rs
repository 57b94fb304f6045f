//! Typed primitives carried in subject segments.
//!
//! Every hash-like identifier is a [`Bytes32`]; every closed set of labels is
//! a small enum whose canonical literal is the only accepted topic encoding.

use crate::error::FieldError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// A 32-byte value rendered as `0x` + 64 lower-case hex characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Bytes32(pub [u8; 32]);

impl Bytes32 {
    pub const LEN: usize = 32;
    /// Length of the textual form, prefix included.
    pub const STR_LEN: usize = 2 + Self::LEN * 2;

    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Build from a raw byte slice; the slice must be exactly 32 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, FieldError> {
        let arr: [u8; 32] = bytes.try_into().map_err(|_| FieldError::WrongLength {
            expected: Self::LEN,
            got: bytes.len(),
        })?;
        Ok(Self(arr))
    }

    /// A value with every byte set to `byte`. Handy for fixtures.
    pub fn repeat(byte: u8) -> Self {
        Self([byte; 32])
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for Bytes32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for Bytes32 {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0x").ok_or(FieldError::MissingPrefix)?;
        if digits.len() != Self::LEN * 2 {
            return Err(FieldError::InvalidHex(format!(
                "expected {} hex characters, got {}",
                Self::LEN * 2,
                digits.len()
            )));
        }
        let bytes = hex::decode(digits).map_err(|e| FieldError::InvalidHex(e.to_string()))?;
        Self::from_slice(&bytes)
    }
}

impl TryFrom<String> for Bytes32 {
    type Error = FieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Bytes32> for String {
    fn from(value: Bytes32) -> Self {
        value.to_string()
    }
}

impl From<[u8; 32]> for Bytes32 {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

/// Declares a closed label enum with its canonical literals in order.
macro_rules! literal_enum {
    (
        $(#[$meta:meta])*
        $name:ident as $label:literal {
            $($variant:ident => $lit:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Type name used in error messages and the exported schema.
            pub const NAME: &'static str = $label;
            /// Every value, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $lit),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = FieldError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($lit => Ok($name::$variant),)+
                    _ => Err(FieldError::UnknownLiteral {
                        ty: $label,
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

literal_enum! {
    /// Execution status of a transaction.
    TransactionStatus as "TransactionStatus" {
        PreConfirmationFailed => "pre_confirmation_failed",
        PreConfirmationSuccess => "pre_confirmation_success",
        Failed => "failed",
        Submitted => "submitted",
        SqueezedOut => "squeezed_out",
        Success => "success",
    }
}

literal_enum! {
    TransactionType as "TransactionType" {
        Create => "create",
        Mint => "mint",
        Script => "script",
        Upgrade => "upgrade",
        Upload => "upload",
        Blob => "blob",
    }
}

literal_enum! {
    /// Discriminant of the `inputs` subject family.
    InputType as "InputType" {
        Contract => "contract",
        Coin => "coin",
        Message => "message",
    }
}

literal_enum! {
    /// Discriminant of the `outputs` subject family.
    OutputType as "OutputType" {
        Coin => "coin",
        Contract => "contract",
        Change => "change",
        Variable => "variable",
        ContractCreated => "contract_created",
    }
}

literal_enum! {
    /// Discriminant of the `receipts` subject family.
    ReceiptType as "ReceiptType" {
        Call => "call",
        Return => "return",
        ReturnData => "return_data",
        Panic => "panic",
        Revert => "revert",
        Log => "log",
        LogData => "log_data",
        Transfer => "transfer",
        TransferOut => "transfer_out",
        ScriptResult => "script_result",
        MessageOut => "message_out",
        Mint => "mint",
        Burn => "burn",
    }
}

literal_enum! {
    UtxoType as "UtxoType" {
        InputContract => "input_contract",
        InputCoin => "input_coin",
        OutputCoin => "output_coin",
        OutputVariable => "output_variable",
        OutputChange => "output_change",
    }
}
