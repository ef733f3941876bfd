// Recovers the signing account from a signed digest.

use alloy::primitives::Address;

use crate::{errors::SignerError, signing::SignedDigest};

pub fn recover_signer(signed: &SignedDigest) -> Result<Address, SignerError> {
    signed
        .signature
        .recover_address_from_prehash(&signed.digest)
        .map_err(|e| SignerError::SignatureRecoveryError(e.to_string()))
}

pub fn verify(signed: &SignedDigest, expected_signer: Address) -> Result<(), SignerError> {
    let recovered = recover_signer(signed)?;
    if recovered != expected_signer {
        return Err(SignerError::InvalidSignature {
            expected: expected_signer.to_string(),
            recovered: recovered.to_string(),
        });
    }
    Ok(())
}
