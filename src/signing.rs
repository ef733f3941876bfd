#[allow(deprecated)]
use alloy::signers::Signature;
use alloy::{
    dyn_abi::TypedData,
    primitives::{hex, B256},
    signers::{local::PrivateKeySigner, SignerSync},
};
use tracing::{debug, info};

use crate::{errors::SignerError, typed_data};

/// A digest together with the recoverable signature produced over it.
#[allow(deprecated)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignedDigest {
    pub digest: B256,
    pub signature: Signature,
}

impl SignedDigest {
    pub fn message_hash(&self) -> String {
        hex::encode_prefixed(self.digest)
    }

    /// Legacy recovery id, 27 or 28.
    pub fn v(&self) -> u8 {
        27 + self.signature.v().y_parity() as u8
    }

    /// `0x` ‖ r ‖ s ‖ v, with v rendered as `1b` or `1c`.
    pub fn signature_hex(&self) -> String {
        format!(
            "0x{:064x}{:064x}{:02x}",
            self.signature.r(),
            self.signature.s(),
            self.v()
        )
    }
}

pub fn signer_from_key(private_key: B256) -> Result<PrivateKeySigner, SignerError> {
    let signer = PrivateKeySigner::from_bytes(&private_key)
        .map_err(|e| SignerError::InvalidPrivateKey(e.to_string()))?;
    info!("signing as {}", signer.address());
    Ok(signer)
}

pub fn sign_digest(signer: &PrivateKeySigner, digest: B256) -> Result<SignedDigest, SignerError> {
    let signature = signer
        .sign_hash_sync(&digest)
        .map_err(|e| SignerError::SigningError(e.to_string()))?;
    let signed = SignedDigest { digest, signature };
    debug!("signature: {}", signed.signature_hex());
    Ok(signed)
}

pub fn sign_typed_data(
    typed: &TypedData,
    signer: &PrivateKeySigner,
) -> Result<SignedDigest, SignerError> {
    let digest = typed_data::digest(typed)?;
    sign_digest(signer, digest)
}

