//! Tagged-union dispatch over the catalog's subject families.
//!
//! `SubjectKind::Inputs(Some(InputType::Coin))` names `inputs_coin`,
//! `SubjectKind::Inputs(None)` names the `inputs` base. Resolve a kind to its
//! definition once with [`SubjectRegistry::definition`](crate::SubjectRegistry::definition)
//! and hand that to the builder or parser.

use std::{fmt, str::FromStr};
use subjectkit_core::{InputType, OutputType, ReceiptType, SubjectError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubjectKind {
    Blocks,
    Transactions,
    Inputs(Option<InputType>),
    Outputs(Option<OutputType>),
    Receipts(Option<ReceiptType>),
    Utxos,
}

impl SubjectKind {
    pub fn entity_key(&self) -> &'static str {
        match self {
            SubjectKind::Blocks => "blocks",
            SubjectKind::Transactions => "transactions",
            SubjectKind::Inputs(_) => "inputs",
            SubjectKind::Outputs(_) => "outputs",
            SubjectKind::Receipts(_) => "receipts",
            SubjectKind::Utxos => "utxos",
        }
    }

    pub fn variant_key(&self) -> Option<&'static str> {
        match self {
            SubjectKind::Inputs(v) => v.map(|v| v.as_str()),
            SubjectKind::Outputs(v) => v.map(|v| v.as_str()),
            SubjectKind::Receipts(v) => v.map(|v| v.as_str()),
            SubjectKind::Blocks | SubjectKind::Transactions | SubjectKind::Utxos => None,
        }
    }

    /// The catalog id: the entity key, or `<entity>_<variant>` for variants.
    pub fn id(&self) -> String {
        match self.variant_key() {
            Some(variant) => format!("{}_{variant}", self.entity_key()),
            None => self.entity_key().to_string(),
        }
    }

    /// The base kind of the same entity.
    pub fn base(&self) -> SubjectKind {
        match self {
            SubjectKind::Inputs(_) => SubjectKind::Inputs(None),
            SubjectKind::Outputs(_) => SubjectKind::Outputs(None),
            SubjectKind::Receipts(_) => SubjectKind::Receipts(None),
            other => *other,
        }
    }

    pub fn is_variant(&self) -> bool {
        self.variant_key().is_some()
    }

    /// Inverse of [`SubjectKind::id`].
    pub fn from_id(id: &str) -> Option<SubjectKind> {
        let kind = match id.split_once('_') {
            None => match id {
                "blocks" => SubjectKind::Blocks,
                "transactions" => SubjectKind::Transactions,
                "inputs" => SubjectKind::Inputs(None),
                "outputs" => SubjectKind::Outputs(None),
                "receipts" => SubjectKind::Receipts(None),
                "utxos" => SubjectKind::Utxos,
                _ => return None,
            },
            Some(("inputs", v)) => SubjectKind::Inputs(Some(v.parse().ok()?)),
            Some(("outputs", v)) => SubjectKind::Outputs(Some(v.parse().ok()?)),
            Some(("receipts", v)) => SubjectKind::Receipts(Some(v.parse().ok()?)),
            Some(_) => return None,
        };
        Some(kind)
    }

    /// Every kind, bases first within each entity, in catalog order.
    pub fn all() -> impl Iterator<Item = SubjectKind> {
        let inputs = InputType::ALL.iter().map(|v| SubjectKind::Inputs(Some(*v)));
        let outputs = OutputType::ALL.iter().map(|v| SubjectKind::Outputs(Some(*v)));
        let receipts = ReceiptType::ALL.iter().map(|v| SubjectKind::Receipts(Some(*v)));

        [SubjectKind::Blocks, SubjectKind::Transactions, SubjectKind::Inputs(None)]
            .into_iter()
            .chain(inputs)
            .chain(std::iter::once(SubjectKind::Outputs(None)))
            .chain(outputs)
            .chain(std::iter::once(SubjectKind::Receipts(None)))
            .chain(receipts)
            .chain(std::iter::once(SubjectKind::Utxos))
    }
}

impl fmt::Display for SubjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id())
    }
}

impl FromStr for SubjectKind {
    type Err = SubjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SubjectKind::from_id(s).ok_or_else(|| SubjectError::UnknownSubject { id: s.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_follow_entity_and_variant() {
        assert_eq!(SubjectKind::Blocks.id(), "blocks");
        assert_eq!(SubjectKind::Inputs(Some(InputType::Coin)).id(), "inputs_coin");
        assert_eq!(
            SubjectKind::Receipts(Some(ReceiptType::TransferOut)).id(),
            "receipts_transfer_out"
        );
        assert_eq!(
            SubjectKind::Outputs(Some(OutputType::ContractCreated)).to_string(),
            "outputs_contract_created"
        );
    }

    #[test]
    fn from_id_inverts_id() {
        for kind in SubjectKind::all() {
            assert_eq!(SubjectKind::from_id(&kind.id()), Some(kind), "{kind}");
        }
        assert_eq!(SubjectKind::from_id("inputs_gold"), None);
        assert_eq!(SubjectKind::from_id("blocks_coin"), None);
        assert!("nope".parse::<SubjectKind>().is_err());
    }

    #[test]
    fn all_covers_every_family() {
        let kinds: Vec<_> = SubjectKind::all().collect();
        // blocks, transactions, inputs + 3, outputs + 5, receipts + 13, utxos
        assert_eq!(kinds.len(), 2 + (1 + 3) + (1 + 5) + (1 + 13) + 1);
        assert_eq!(kinds.len(), crate::SubjectRegistry::global().len());
        assert_eq!(kinds.iter().filter(|k| !k.is_variant()).count(), 6);
    }

    #[test]
    fn base_drops_the_variant() {
        let coin = SubjectKind::Inputs(Some(InputType::Coin));
        assert_eq!(coin.base(), SubjectKind::Inputs(None));
        assert_eq!(coin.base().entity_key(), coin.entity_key());
        assert_eq!(SubjectKind::Utxos.base(), SubjectKind::Utxos);
    }
}
