// EIP-712 domain of the Injective exchange module
// chain id 888, written 0x378 in typed-data documents

use alloy::{
    primitives::{address, B256},
    sol_types::{eip712_domain, Eip712Domain},
};

pub const INJECTIVE_DOMAIN: Eip712Domain = eip712_domain! {
    name: "Injective Protocol",
    version: "2.0.0",
    chain_id: 888,
    verifying_contract: address!("CcCCccccCCCCcCCCCCCcCcCccCcCCCcCcccccccC"),
    salt: B256::ZERO,
};
