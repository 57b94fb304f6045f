//! The built-in subject catalog.
//!
//! Six top-level entities; `inputs`, `outputs` and `receipts` carry one
//! variant per value of their discriminant enum. Field order follows the
//! placeholder order in each `format`.

use subjectkit_core::{FieldSpec, FieldType, SubjectDefinition};

/// Top-level entity key → base definition, in publication order.
pub static CATALOG: &[(&str, SubjectDefinition)] = &[
    ("blocks", BLOCKS),
    ("transactions", TRANSACTIONS),
    ("inputs", INPUTS),
    ("outputs", OUTPUTS),
    ("receipts", RECEIPTS),
    ("utxos", UTXOS),
];

pub const BLOCKS: SubjectDefinition = SubjectDefinition {
    id: "blocks",
    entity: "Block",
    subject: "BlocksSubject",
    format: "blocks.{producer}.{da_height}.{height}",
    wildcard: "blocks.>",
    fields: &[
        FieldSpec::new("producer", FieldType::Address, "The address of the producer that created the block"),
        FieldSpec::new("da_height", FieldType::DaBlockHeight, "The height of the DA block as unsigned 64 bit integer"),
        FieldSpec::new("height", FieldType::BlockHeight, "The height of the block as unsigned 64 bit integer"),
    ],
    variants: &[],
};

pub const TRANSACTIONS: SubjectDefinition = SubjectDefinition {
    id: "transactions",
    entity: "Transaction",
    subject: "TransactionsSubject",
    format: "transactions.{block_height}.{tx_id}.{tx_index}.{tx_status}.{tx_type}",
    wildcard: "transactions.>",
    fields: &[
        FieldSpec::new("block_height", FieldType::BlockHeight, "The height of the block containing this transaction"),
        FieldSpec::new("tx_id", FieldType::TxId, "The ID of the transaction (32 byte string prefixed by 0x)"),
        FieldSpec::new("tx_index", FieldType::U32, "The index of the transaction within the block"),
        FieldSpec::new("tx_status", FieldType::TransactionStatus, "The status of the transaction (success, failure, or submitted)"),
        FieldSpec::new("tx_type", FieldType::TransactionType, "The type of transaction (create, mint, script)"),
    ],
    variants: &[],
};

const INPUTS_VARIANTS: &[(&str, SubjectDefinition)] = &[
    (
        "coin",
        SubjectDefinition {
            id: "inputs_coin",
            entity: "Input",
            subject: "InputsCoinSubject",
            format: "inputs.coin.{block_height}.{tx_id}.{tx_index}.{input_index}.{owner}.{asset}",
            wildcard: "inputs.coin.>",
            fields: &[
                FieldSpec::new("block_height", FieldType::BlockHeight, "The height of the block containing this coin input"),
                FieldSpec::new("tx_id", FieldType::TxId, "The ID of the transaction containing this coin input (32 byte string prefixed by 0x)"),
                FieldSpec::new("tx_index", FieldType::U32, "The index of the transaction within the block"),
                FieldSpec::new("input_index", FieldType::U32, "The index of this input within the transaction"),
                FieldSpec::new("owner", FieldType::Address, "The address of the coin owner (32 byte string prefixed by 0x)"),
                FieldSpec::new("asset", FieldType::AssetId, "The asset ID of the coin (32 byte string prefixed by 0x)"),
            ],
            variants: &[],
        },
    ),
    (
        "contract",
        SubjectDefinition {
            id: "inputs_contract",
            entity: "Input",
            subject: "InputsContractSubject",
            format: "inputs.contract.{block_height}.{tx_id}.{tx_index}.{input_index}.{contract}",
            wildcard: "inputs.contract.>",
            fields: &[
                FieldSpec::new("block_height", FieldType::BlockHeight, "The height of the block containing this contract input"),
                FieldSpec::new("tx_id", FieldType::TxId, "The ID of the transaction containing this contract input (32 byte string prefixed by 0x)"),
                FieldSpec::new("tx_index", FieldType::U32, "The index of the transaction within the block"),
                FieldSpec::new("input_index", FieldType::U32, "The index of this input within the transaction"),
                FieldSpec::new("contract", FieldType::ContractId, "The ID of the contract being called (32 byte string prefixed by 0x)"),
            ],
            variants: &[],
        },
    ),
    (
        "message",
        SubjectDefinition {
            id: "inputs_message",
            entity: "Input",
            subject: "InputsMessageSubject",
            format: "inputs.message.{block_height}.{tx_id}.{tx_index}.{input_index}.{sender}.{recipient}",
            wildcard: "inputs.message.>",
            fields: &[
                FieldSpec::new("block_height", FieldType::BlockHeight, "The height of the block containing this message input"),
                FieldSpec::new("tx_id", FieldType::TxId, "The ID of the transaction containing this message input (32 byte string prefixed by 0x)"),
                FieldSpec::new("tx_index", FieldType::U32, "The index of the transaction within the block"),
                FieldSpec::new("input_index", FieldType::U32, "The index of this input within the transaction"),
                FieldSpec::new("sender", FieldType::Address, "The address that sent the message (32 byte string prefixed by 0x)"),
                FieldSpec::new("recipient", FieldType::Address, "The address that will receive the message (32 byte string prefixed by 0x)"),
            ],
            variants: &[],
        },
    ),
];

pub const INPUTS: SubjectDefinition = SubjectDefinition {
    id: "inputs",
    entity: "Input",
    subject: "InputsSubject",
    format: "inputs.{input_type}.{block_height}.{tx_id}.{tx_index}.{input_index}",
    wildcard: "inputs.>",
    fields: &[
        FieldSpec::new("input_type", FieldType::InputType, "The type of input (coin, contract, or message)"),
        FieldSpec::new("block_height", FieldType::BlockHeight, "The height of the block containing this input"),
        FieldSpec::new("tx_id", FieldType::TxId, "The ID of the transaction containing this input (32 byte string prefixed by 0x)"),
        FieldSpec::new("tx_index", FieldType::U32, "The index of the transaction within the block"),
        FieldSpec::new("input_index", FieldType::U32, "The index of this input within the transaction"),
    ],
    variants: INPUTS_VARIANTS,
};

const OUTPUTS_VARIANTS: &[(&str, SubjectDefinition)] = &[
    (
        "coin",
        SubjectDefinition {
            id: "outputs_coin",
            entity: "Output",
            subject: "OutputsCoinSubject",
            format: "outputs.coin.{block_height}.{tx_id}.{tx_index}.{output_index}.{to}.{asset}",
            wildcard: "outputs.coin.>",
            fields: &[
                FieldSpec::new("block_height", FieldType::BlockHeight, "The height of the block containing this coin output"),
                FieldSpec::new("tx_id", FieldType::TxId, "The ID of the transaction containing this coin output (32 byte string prefixed by 0x)"),
                FieldSpec::new("tx_index", FieldType::U32, "The index of the transaction within the block"),
                FieldSpec::new("output_index", FieldType::U32, "The index of this output within the transaction"),
                FieldSpec::new("to", FieldType::Address, "The recipient address of the coin output (32 byte string prefixed by 0x)"),
                FieldSpec::new("asset", FieldType::AssetId, "The asset ID of the coin (32 byte string prefixed by 0x)"),
            ],
            variants: &[],
        },
    ),
    (
        "contract",
        SubjectDefinition {
            id: "outputs_contract",
            entity: "Output",
            subject: "OutputsContractSubject",
            format: "outputs.contract.{block_height}.{tx_id}.{tx_index}.{output_index}.{contract}",
            wildcard: "outputs.contract.>",
            fields: &[
                FieldSpec::new("block_height", FieldType::BlockHeight, "The height of the block containing this contract output"),
                FieldSpec::new("tx_id", FieldType::TxId, "The ID of the transaction containing this contract output (32 byte string prefixed by 0x)"),
                FieldSpec::new("tx_index", FieldType::U32, "The index of the transaction within the block"),
                FieldSpec::new("output_index", FieldType::U32, "The index of this output within the transaction"),
                FieldSpec::new("contract", FieldType::ContractId, "The ID of the contract (32 byte string prefixed by 0x)"),
            ],
            variants: &[],
        },
    ),
    (
        "change",
        SubjectDefinition {
            id: "outputs_change",
            entity: "Output",
            subject: "OutputsChangeSubject",
            format: "outputs.change.{block_height}.{tx_id}.{tx_index}.{output_index}.{to}.{asset}",
            wildcard: "outputs.change.>",
            fields: &[
                FieldSpec::new("block_height", FieldType::BlockHeight, "The height of the block containing this change output"),
                FieldSpec::new("tx_id", FieldType::TxId, "The ID of the transaction containing this change output (32 byte string prefixed by 0x)"),
                FieldSpec::new("tx_index", FieldType::U32, "The index of the transaction within the block"),
                FieldSpec::new("output_index", FieldType::U32, "The index of this output within the transaction"),
                FieldSpec::new("to", FieldType::Address, "The recipient address of the change output (32 byte string prefixed by 0x)"),
                FieldSpec::new("asset", FieldType::AssetId, "The asset ID of the change output (32 byte string prefixed by 0x)"),
            ],
            variants: &[],
        },
    ),
    (
        "variable",
        SubjectDefinition {
            id: "outputs_variable",
            entity: "Output",
            subject: "OutputsVariableSubject",
            format: "outputs.variable.{block_height}.{tx_id}.{tx_index}.{output_index}.{to}.{asset}",
            wildcard: "outputs.variable.>",
            fields: &[
                FieldSpec::new("block_height", FieldType::BlockHeight, "The height of the block containing this variable output"),
                FieldSpec::new("tx_id", FieldType::TxId, "The ID of the transaction containing this variable output (32 byte string prefixed by 0x)"),
                FieldSpec::new("tx_index", FieldType::U32, "The index of the transaction within the block"),
                FieldSpec::new("output_index", FieldType::U32, "The index of this output within the transaction"),
                FieldSpec::new("to", FieldType::Address, "The recipient address of the variable output (32 byte string prefixed by 0x)"),
                FieldSpec::new("asset", FieldType::AssetId, "The asset ID of the variable output (32 byte string prefixed by 0x)"),
            ],
            variants: &[],
        },
    ),
    (
        "contract_created",
        SubjectDefinition {
            id: "outputs_contract_created",
            entity: "Output",
            subject: "OutputsContractCreatedSubject",
            format: "outputs.contract_created.{block_height}.{tx_id}.{tx_index}.{output_index}.{contract}",
            wildcard: "outputs.contract_created.>",
            fields: &[
                FieldSpec::new("block_height", FieldType::BlockHeight, "The height of the block containing this contract creation output"),
                FieldSpec::new("tx_id", FieldType::TxId, "The ID of the transaction containing this contract creation output (32 byte string prefixed by 0x)"),
                FieldSpec::new("tx_index", FieldType::U32, "The index of the transaction within the block"),
                FieldSpec::new("output_index", FieldType::U32, "The index of this output within the transaction"),
                FieldSpec::new("contract", FieldType::ContractId, "The ID of the created contract (32 byte string prefixed by 0x)"),
            ],
            variants: &[],
        },
    ),
];

pub const OUTPUTS: SubjectDefinition = SubjectDefinition {
    id: "outputs",
    entity: "Output",
    subject: "OutputsSubject",
    format: "outputs.{output_type}.{block_height}.{tx_id}.{tx_index}.{output_index}",
    wildcard: "outputs.>",
    fields: &[
        FieldSpec::new("output_type", FieldType::OutputType, "The type of output (coin, contract, change, variable, or contract_created)"),
        FieldSpec::new("block_height", FieldType::BlockHeight, "The height of the block containing this output"),
        FieldSpec::new("tx_id", FieldType::TxId, "The ID of the transaction containing this output (32 byte string prefixed by 0x)"),
        FieldSpec::new("tx_index", FieldType::U32, "The index of the transaction within the block"),
        FieldSpec::new("output_index", FieldType::U32, "The index of this output within the transaction"),
    ],
    variants: OUTPUTS_VARIANTS,
};

const RECEIPTS_VARIANTS: &[(&str, SubjectDefinition)] = &[
    (
        "call",
        SubjectDefinition {
            id: "receipts_call",
            entity: "Receipt",
            subject: "ReceiptsCallSubject",
            format: "receipts.call.{block_height}.{tx_id}.{tx_index}.{receipt_index}.{from}.{to}.{asset}",
            wildcard: "receipts.call.>",
            fields: &[
                FieldSpec::new("block_height", FieldType::BlockHeight, "The height of the block containing this call receipt"),
                FieldSpec::new("tx_id", FieldType::TxId, "The ID of the transaction containing this call receipt (32 byte string prefixed by 0x)"),
                FieldSpec::new("tx_index", FieldType::U32, "The index of the transaction within the block"),
                FieldSpec::new("receipt_index", FieldType::U32, "The index of this receipt within the transaction"),
                FieldSpec::new("from", FieldType::ContractId, "The contract ID that initiated the call (32 byte string prefixed by 0x)"),
                FieldSpec::new("to", FieldType::ContractId, "The contract ID that was called (32 byte string prefixed by 0x)"),
                FieldSpec::new("asset", FieldType::AssetId, "The asset ID involved in the call (32 byte string prefixed by 0x)"),
            ],
            variants: &[],
        },
    ),
    (
        "return",
        SubjectDefinition {
            id: "receipts_return",
            entity: "Receipt",
            subject: "ReceiptsReturnSubject",
            format: "receipts.return.{block_height}.{tx_id}.{tx_index}.{receipt_index}.{contract}",
            wildcard: "receipts.return.>",
            fields: &[
                FieldSpec::new("block_height", FieldType::BlockHeight, "The height of the block containing this return receipt"),
                FieldSpec::new("tx_id", FieldType::TxId, "The ID of the transaction containing this return receipt (32 byte string prefixed by 0x)"),
                FieldSpec::new("tx_index", FieldType::U32, "The index of the transaction within the block"),
                FieldSpec::new("receipt_index", FieldType::U32, "The index of this receipt within the transaction"),
                FieldSpec::new("contract", FieldType::ContractId, "The ID of the contract that returned (32 byte string prefixed by 0x)"),
            ],
            variants: &[],
        },
    ),
    (
        "return_data",
        SubjectDefinition {
            id: "receipts_return_data",
            entity: "Receipt",
            subject: "ReceiptsReturnDataSubject",
            format: "receipts.return_data.{block_height}.{tx_id}.{tx_index}.{receipt_index}.{contract}",
            wildcard: "receipts.return_data.>",
            fields: &[
                FieldSpec::new("block_height", FieldType::BlockHeight, "The height of the block containing this return data receipt"),
                FieldSpec::new("tx_id", FieldType::TxId, "The ID of the transaction containing this return data receipt (32 byte string prefixed by 0x)"),
                FieldSpec::new("tx_index", FieldType::U32, "The index of the transaction within the block"),
                FieldSpec::new("receipt_index", FieldType::U32, "The index of this receipt within the transaction"),
                FieldSpec::new("contract", FieldType::ContractId, "The ID of the contract that returned data (32 byte string prefixed by 0x)"),
            ],
            variants: &[],
        },
    ),
    (
        "panic",
        SubjectDefinition {
            id: "receipts_panic",
            entity: "Receipt",
            subject: "ReceiptsPanicSubject",
            format: "receipts.panic.{block_height}.{tx_id}.{tx_index}.{receipt_index}.{contract}",
            wildcard: "receipts.panic.>",
            fields: &[
                FieldSpec::new("block_height", FieldType::BlockHeight, "The height of the block containing this panic receipt"),
                FieldSpec::new("tx_id", FieldType::TxId, "The ID of the transaction containing this panic receipt (32 byte string prefixed by 0x)"),
                FieldSpec::new("tx_index", FieldType::U32, "The index of the transaction within the block"),
                FieldSpec::new("receipt_index", FieldType::U32, "The index of this receipt within the transaction"),
                FieldSpec::new("contract", FieldType::ContractId, "The ID of the contract that panicked (32 byte string prefixed by 0x)"),
            ],
            variants: &[],
        },
    ),
    (
        "revert",
        SubjectDefinition {
            id: "receipts_revert",
            entity: "Receipt",
            subject: "ReceiptsRevertSubject",
            format: "receipts.revert.{block_height}.{tx_id}.{tx_index}.{receipt_index}.{contract}",
            wildcard: "receipts.revert.>",
            fields: &[
                FieldSpec::new("block_height", FieldType::BlockHeight, "The height of the block containing this revert receipt"),
                FieldSpec::new("tx_id", FieldType::TxId, "The ID of the transaction containing this revert receipt (32 byte string prefixed by 0x)"),
                FieldSpec::new("tx_index", FieldType::U32, "The index of the transaction within the block"),
                FieldSpec::new("receipt_index", FieldType::U32, "The index of this receipt within the transaction"),
                FieldSpec::new("contract", FieldType::ContractId, "The ID of the contract that reverted (32 byte string prefixed by 0x)"),
            ],
            variants: &[],
        },
    ),
    (
        "log",
        SubjectDefinition {
            id: "receipts_log",
            entity: "Receipt",
            subject: "ReceiptsLogSubject",
            format: "receipts.log.{block_height}.{tx_id}.{tx_index}.{receipt_index}.{contract}",
            wildcard: "receipts.log.>",
            fields: &[
                FieldSpec::new("block_height", FieldType::BlockHeight, "The height of the block containing this log receipt"),
                FieldSpec::new("tx_id", FieldType::TxId, "The ID of the transaction containing this log receipt (32 byte string prefixed by 0x)"),
                FieldSpec::new("tx_index", FieldType::U32, "The index of the transaction within the block"),
                FieldSpec::new("receipt_index", FieldType::U32, "The index of this receipt within the transaction"),
                FieldSpec::new("contract", FieldType::ContractId, "The ID of the contract that emitted the log (32 byte string prefixed by 0x)"),
            ],
            variants: &[],
        },
    ),
    (
        "log_data",
        SubjectDefinition {
            id: "receipts_log_data",
            entity: "Receipt",
            subject: "ReceiptsLogDataSubject",
            format: "receipts.log_data.{block_height}.{tx_id}.{tx_index}.{receipt_index}.{contract}",
            wildcard: "receipts.log_data.>",
            fields: &[
                FieldSpec::new("block_height", FieldType::BlockHeight, "The height of the block containing this log data receipt"),
                FieldSpec::new("tx_id", FieldType::TxId, "The ID of the transaction containing this log data receipt (32 byte string prefixed by 0x)"),
                FieldSpec::new("tx_index", FieldType::U32, "The index of the transaction within the block"),
                FieldSpec::new("receipt_index", FieldType::U32, "The index of this receipt within the transaction"),
                FieldSpec::new("contract", FieldType::ContractId, "The ID of the contract that emitted the log data (32 byte string prefixed by 0x)"),
            ],
            variants: &[],
        },
    ),
    (
        "transfer",
        SubjectDefinition {
            id: "receipts_transfer",
            entity: "Receipt",
            subject: "ReceiptsTransferSubject",
            format: "receipts.transfer.{block_height}.{tx_id}.{tx_index}.{receipt_index}.{from}.{to}.{asset}",
            wildcard: "receipts.transfer.>",
            fields: &[
                FieldSpec::new("block_height", FieldType::BlockHeight, "The height of the block containing this transfer receipt"),
                FieldSpec::new("tx_id", FieldType::TxId, "The ID of the transaction containing this transfer receipt (32 byte string prefixed by 0x)"),
                FieldSpec::new("tx_index", FieldType::U32, "The index of the transaction within the block"),
                FieldSpec::new("receipt_index", FieldType::U32, "The index of this receipt within the transaction"),
                FieldSpec::new("from", FieldType::ContractId, "The contract ID that initiated the transfer (32 byte string prefixed by 0x)"),
                FieldSpec::new("to", FieldType::ContractId, "The contract ID that received the transfer (32 byte string prefixed by 0x)"),
                FieldSpec::new("asset", FieldType::AssetId, "The asset ID being transferred (32 byte string prefixed by 0x)"),
            ],
            variants: &[],
        },
    ),
    (
        "transfer_out",
        SubjectDefinition {
            id: "receipts_transfer_out",
            entity: "Receipt",
            subject: "ReceiptsTransferOutSubject",
            format: "receipts.transfer_out.{block_height}.{tx_id}.{tx_index}.{receipt_index}.{from}.{to_address}.{asset}",
            wildcard: "receipts.transfer_out.>",
            fields: &[
                FieldSpec::new("block_height", FieldType::BlockHeight, "The height of the block containing this transfer out receipt"),
                FieldSpec::new("tx_id", FieldType::TxId, "The ID of the transaction containing this transfer out receipt (32 byte string prefixed by 0x)"),
                FieldSpec::new("tx_index", FieldType::U32, "The index of the transaction within the block"),
                FieldSpec::new("receipt_index", FieldType::U32, "The index of this receipt within the transaction"),
                FieldSpec::new("from", FieldType::ContractId, "The contract ID that initiated the transfer out (32 byte string prefixed by 0x)"),
                FieldSpec::new("to_address", FieldType::Address, "The address that received the transfer (32 byte string prefixed by 0x)"),
                FieldSpec::new("asset", FieldType::AssetId, "The asset ID being transferred (32 byte string prefixed by 0x)"),
            ],
            variants: &[],
        },
    ),
    (
        "script_result",
        SubjectDefinition {
            id: "receipts_script_result",
            entity: "Receipt",
            subject: "ReceiptsScriptResultSubject",
            format: "receipts.script_result.{block_height}.{tx_id}.{tx_index}.{receipt_index}",
            wildcard: "receipts.script_result.>",
            fields: &[
                FieldSpec::new("block_height", FieldType::BlockHeight, "The height of the block containing this script result receipt"),
                FieldSpec::new("tx_id", FieldType::TxId, "The ID of the transaction containing this script result receipt (32 byte string prefixed by 0x)"),
                FieldSpec::new("tx_index", FieldType::U32, "The index of the transaction within the block"),
                FieldSpec::new("receipt_index", FieldType::U32, "The index of this receipt within the transaction"),
            ],
            variants: &[],
        },
    ),
    (
        "message_out",
        SubjectDefinition {
            id: "receipts_message_out",
            entity: "Receipt",
            subject: "ReceiptsMessageOutSubject",
            format: "receipts.message_out.{block_height}.{tx_id}.{tx_index}.{receipt_index}.{sender}.{recipient}",
            wildcard: "receipts.message_out.>",
            fields: &[
                FieldSpec::new("block_height", FieldType::BlockHeight, "The height of the block containing this message out receipt"),
                FieldSpec::new("tx_id", FieldType::TxId, "The ID of the transaction containing this message out receipt (32 byte string prefixed by 0x)"),
                FieldSpec::new("tx_index", FieldType::U32, "The index of the transaction within the block"),
                FieldSpec::new("receipt_index", FieldType::U32, "The index of this receipt within the transaction"),
                FieldSpec::new("sender", FieldType::Address, "The address that sent the message (32 byte string prefixed by 0x)"),
                FieldSpec::new("recipient", FieldType::Address, "The address that will receive the message (32 byte string prefixed by 0x)"),
            ],
            variants: &[],
        },
    ),
    (
        "mint",
        SubjectDefinition {
            id: "receipts_mint",
            entity: "Receipt",
            subject: "ReceiptsMintSubject",
            format: "receipts.mint.{block_height}.{tx_id}.{tx_index}.{receipt_index}.{contract}.{sub_id}",
            wildcard: "receipts.mint.>",
            fields: &[
                FieldSpec::new("block_height", FieldType::BlockHeight, "The height of the block containing this mint receipt"),
                FieldSpec::new("tx_id", FieldType::TxId, "The ID of the transaction containing this mint receipt (32 byte string prefixed by 0x)"),
                FieldSpec::new("tx_index", FieldType::U32, "The index of the transaction within the block"),
                FieldSpec::new("receipt_index", FieldType::U32, "The index of this receipt within the transaction"),
                FieldSpec::new("contract", FieldType::ContractId, "The ID of the contract that performed the mint (32 byte string prefixed by 0x)"),
                FieldSpec::new("sub_id", FieldType::Bytes32, "The sub identifier of the minted asset (32 byte string prefixed by 0x)"),
            ],
            variants: &[],
        },
    ),
    (
        "burn",
        SubjectDefinition {
            id: "receipts_burn",
            entity: "Receipt",
            subject: "ReceiptsBurnSubject",
            format: "receipts.burn.{block_height}.{tx_id}.{tx_index}.{receipt_index}.{contract}.{sub_id}",
            wildcard: "receipts.burn.>",
            fields: &[
                FieldSpec::new("block_height", FieldType::BlockHeight, "The height of the block containing this burn receipt"),
                FieldSpec::new("tx_id", FieldType::TxId, "The ID of the transaction containing this burn receipt (32 byte string prefixed by 0x)"),
                FieldSpec::new("tx_index", FieldType::U32, "The index of the transaction within the block"),
                FieldSpec::new("receipt_index", FieldType::U32, "The index of this receipt within the transaction"),
                FieldSpec::new("contract", FieldType::ContractId, "The ID of the contract that performed the burn (32 byte string prefixed by 0x)"),
                FieldSpec::new("sub_id", FieldType::Bytes32, "The sub identifier of the burned asset (32 byte string prefixed by 0x)"),
            ],
            variants: &[],
        },
    ),
];

pub const RECEIPTS: SubjectDefinition = SubjectDefinition {
    id: "receipts",
    entity: "Receipt",
    subject: "ReceiptsSubject",
    format: "receipts.{receipt_type}.{block_height}.{tx_id}.{tx_index}.{receipt_index}",
    wildcard: "receipts.>",
    fields: &[
        FieldSpec::new("receipt_type", FieldType::ReceiptType, "The type of receipt"),
        FieldSpec::new("block_height", FieldType::BlockHeight, "The height of the block containing this receipt"),
        FieldSpec::new("tx_id", FieldType::TxId, "The ID of the transaction containing this receipt (32 byte string prefixed by 0x)"),
        FieldSpec::new("tx_index", FieldType::U32, "The index of the transaction within the block"),
        FieldSpec::new("receipt_index", FieldType::U32, "The index of this receipt within the transaction"),
    ],
    variants: RECEIPTS_VARIANTS,
};

pub const UTXOS: SubjectDefinition = SubjectDefinition {
    id: "utxos",
    entity: "Utxo",
    subject: "UtxosSubject",
    format: "utxos.{block_height}.{tx_id}.{tx_index}.{input_index}.{utxo_type}.{utxo_id}.{contract_id}",
    wildcard: "utxos.>",
    fields: &[
        FieldSpec::new("block_height", FieldType::BlockHeight, "The height of the block containing this UTXO"),
        FieldSpec::new("tx_id", FieldType::TxId, "The ID of the transaction containing this UTXO (32 byte string prefixed by 0x)"),
        FieldSpec::new("tx_index", FieldType::U32, "The index of the transaction within the block"),
        FieldSpec::new("input_index", FieldType::U32, "The index of the input within the transaction"),
        FieldSpec::new("utxo_type", FieldType::UtxoType, "The type of UTXO (input or output, and its coin, contract, variable or change kind)"),
        FieldSpec::new("utxo_id", FieldType::HexData, "The unique identifier for this UTXO (32 byte string prefixed by 0x)"),
        FieldSpec::new("contract_id", FieldType::ContractId, "The ID of the contract this UTXO belongs to (32 byte string prefixed by 0x)"),
    ],
    variants: &[],
};

