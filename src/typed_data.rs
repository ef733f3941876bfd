// Typed-data documents in the eth_signTypedData_v4 layout.
// Hashing is delegated to alloy's dynamic EIP-712 encoder; the checks here only
// reject documents the encoder would otherwise hash without complaint
// (extra message fields are silently dropped by struct encoding, and the
// domain separator is built from the fixed Eip712Domain layout rather than
// the declared EIP712Domain type).

use std::{fs, path::Path};

use alloy::{dyn_abi::TypedData, primitives::B256};
use serde_json::{json, Map, Value};
use tracing::debug;

use crate::errors::SignerError;

pub const SPOT_LIMIT_ORDER: &str = "SpotLimitOrder";
pub const EIP712_DOMAIN: &str = "EIP712Domain";

// field order alloy hashes the domain in
const DOMAIN_FIELDS: [(&str, &str); 5] = [
    ("name", "string"),
    ("version", "string"),
    ("chainId", "uint256"),
    ("verifyingContract", "address"),
    ("salt", "bytes32"),
];

/// The spot limit order document signed when no other document is configured.
pub fn spot_limit_order_document() -> Value {
    json!({
        "types": {
            "EIP712Domain": [
                { "name": "name", "type": "string" },
                { "name": "version", "type": "string" },
                { "name": "chainId", "type": "uint256" },
                { "name": "verifyingContract", "type": "address" },
                { "name": "salt", "type": "bytes32" }
            ],
            "OrderInfo": [
                { "name": "SubaccountId", "type": "string" },
                { "name": "FeeRecipient", "type": "string" },
                { "name": "Price", "type": "string" },
                { "name": "Quantity", "type": "string" }
            ],
            "SpotLimitOrder": [
                { "name": "MarketId", "type": "string" },
                { "name": "OrderInfo", "type": "OrderInfo" },
                { "name": "OrderType", "type": "string" },
                { "name": "TriggerPrice", "type": "string" },
                { "name": "Salt", "type": "string" }
            ]
        },
        "primaryType": SPOT_LIMIT_ORDER,
        "domain": {
            "name": "Injective Protocol",
            "version": "2.0.0",
            "chainId": "0x378",
            "verifyingContract": "0xCcCCccccCCCCcCCCCCCcCcCccCcCCCcCcccccccC",
            "salt": "0x0000000000000000000000000000000000000000000000000000000000000000"
        },
        "message": {
            "MarketId": "0xb0057716d5917badaf911b193b12b910811c1497b5bada8d7711f758981c3773",
            "OrderInfo": {
                "FeeRecipient": "inj1dzqd00lfd4y4qy2pxa0dsdwzfnmsu27hgttswz",
                "Price": "137.000000000000000000",
                "Quantity": "24.000000000000000000",
                "SubaccountId": "90f8bf6a479f320ead074411a4b0e7944ea8c9c1000000000000000000000001"
            },
            "OrderType": "BUY",
            "Salt": "12",
            "TriggerPrice": "1.000000000000000000"
        }
    })
}

/// Validates a raw document against its own schema and hands it to alloy.
pub fn parse(document: Value) -> Result<TypedData, SignerError> {
    check_schema(&document)?;
    serde_json::from_value(document).map_err(|e| SignerError::InvalidTypedData(e.to_string()))
}

pub fn load(path: &Path) -> Result<TypedData, SignerError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| SignerError::ConfigError(format!("{}: {}", path.display(), e)))?;
    let document: Value =
        serde_json::from_str(&raw).map_err(|e| SignerError::InvalidTypedData(e.to_string()))?;
    debug!("loaded typed data from {}", path.display());
    parse(document)
}

/// keccak256(0x1901 ‖ domainSeparator ‖ hashStruct(message))
pub fn digest(typed_data: &TypedData) -> Result<B256, SignerError> {
    let digest = typed_data
        .eip712_signing_hash()
        .map_err(|e| SignerError::EncodingError(e.to_string()))?;
    debug!("{} digest: {}", typed_data.primary_type, digest);
    Ok(digest)
}

fn check_schema(document: &Value) -> Result<(), SignerError> {
    let types = document
        .get("types")
        .and_then(Value::as_object)
        .ok_or_else(|| SignerError::InvalidTypedData("missing types".to_string()))?;
    let primary_type = document
        .get("primaryType")
        .and_then(Value::as_str)
        .ok_or_else(|| SignerError::InvalidTypedData("missing primaryType".to_string()))?;
    let message = document
        .get("message")
        .ok_or_else(|| SignerError::InvalidTypedData("missing message".to_string()))?;
    let domain = document
        .get("domain")
        .and_then(Value::as_object)
        .ok_or_else(|| SignerError::InvalidTypedData("missing domain".to_string()))?;

    if !types.contains_key(primary_type) {
        return Err(SignerError::UndefinedType {
            type_name: primary_type.to_string(),
        });
    }
    check_domain(types, domain)?;
    check_value(types, primary_type, message)
}

/// The declared domain type must be an in-order subset of the canonical
/// layout, and the domain object must carry exactly the declared fields.
fn check_domain(
    types: &Map<String, Value>,
    domain: &Map<String, Value>,
) -> Result<(), SignerError> {
    let declared = types
        .get(EIP712_DOMAIN)
        .and_then(Value::as_array)
        .ok_or_else(|| SignerError::UndefinedType {
            type_name: EIP712_DOMAIN.to_string(),
        })?;

    let mut canonical = DOMAIN_FIELDS.iter();
    let mut names = Vec::with_capacity(declared.len());
    for def in declared {
        let name = def.get("name").and_then(Value::as_str).unwrap_or_default();
        let ty = def.get("type").and_then(Value::as_str).unwrap_or_default();
        if !canonical.any(|(field, field_ty)| *field == name && *field_ty == ty) {
            return Err(SignerError::InvalidTypedData(format!(
                "{} field {} {} is not supported or out of order",
                EIP712_DOMAIN, ty, name
            )));
        }
        names.push(name);
    }

    if let Some(extra) = domain.keys().find(|key| !names.contains(&key.as_str())) {
        return Err(SignerError::UnknownField {
            type_name: EIP712_DOMAIN.to_string(),
            field: extra.clone(),
        });
    }
    if let Some(missing) = names.iter().find(|name| !domain.contains_key(**name)) {
        return Err(SignerError::MissingField {
            type_name: EIP712_DOMAIN.to_string(),
            field: missing.to_string(),
        });
    }
    Ok(())
}

fn check_value(
    types: &Map<String, Value>,
    type_name: &str,
    value: &Value,
) -> Result<(), SignerError> {
    let Some(fields) = types.get(type_name).and_then(Value::as_array) else {
        // atomic or dynamic solidity type, the encoder owns these
        return Ok(());
    };
    let Some(object) = value.as_object() else {
        return Err(SignerError::InvalidTypedData(format!(
            "{} must be an object",
            type_name
        )));
    };

    for (field, field_value) in object {
        let declared = fields
            .iter()
            .find(|def| def.get("name").and_then(Value::as_str) == Some(field.as_str()))
            .and_then(|def| def.get("type").and_then(Value::as_str))
            .ok_or_else(|| SignerError::UnknownField {
                type_name: type_name.to_string(),
                field: field.clone(),
            })?;
        check_member(types, declared, field_value)?;
    }
    Ok(())
}

fn check_member(
    types: &Map<String, Value>,
    declared: &str,
    value: &Value,
) -> Result<(), SignerError> {
    match declared.rfind('[') {
        Some(open) if declared.ends_with(']') => {
            let inner = &declared[..open];
            match value.as_array() {
                Some(items) => items
                    .iter()
                    .try_for_each(|item| check_member(types, inner, item)),
                None => Err(SignerError::InvalidTypedData(format!(
                    "{} must be an array",
                    declared
                ))),
            }
        }
        _ => check_value(types, declared, value),
    }
}
