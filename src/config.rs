// Everything is read from the environment, nothing from argv.
// With no variables set the signer uses the built-in key and order.

use std::{env, path::PathBuf, str::FromStr};

use alloy::{
    dyn_abi::TypedData,
    primitives::{b256, B256},
    signers::local::PrivateKeySigner,
};

use crate::{errors::SignerError, signing, typed_data};

pub const PRIVATE_KEY_VAR: &str = "SPOT_SIGNER_PRIVATE_KEY";
pub const TYPED_DATA_VAR: &str = "SPOT_SIGNER_TYPED_DATA";

/// Well-known development key (first ganache account), not a secret.
pub const DEFAULT_PRIVATE_KEY: B256 =
    b256!("4f3edf983ac636a65a842ce7c78d9aa706d3b113bce9c46f30d7d21715b23b1d");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub private_key: B256,
    pub typed_data_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            private_key: DEFAULT_PRIVATE_KEY,
            typed_data_path: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, SignerError> {
        let private_key = match non_empty_var(PRIVATE_KEY_VAR)? {
            Some(raw) => B256::from_str(raw.trim()).map_err(|e| {
                SignerError::InvalidPrivateKey(format!("{}: {}", PRIVATE_KEY_VAR, e))
            })?,
            None => DEFAULT_PRIVATE_KEY,
        };
        let typed_data_path = non_empty_var(TYPED_DATA_VAR)?.map(PathBuf::from);

        Ok(Config {
            private_key,
            typed_data_path,
        })
    }

    pub fn signer(&self) -> Result<PrivateKeySigner, SignerError> {
        signing::signer_from_key(self.private_key)
    }

    pub fn typed_data(&self) -> Result<TypedData, SignerError> {
        match &self.typed_data_path {
            Some(path) => typed_data::load(path),
            None => typed_data::parse(typed_data::spot_limit_order_document()),
        }
    }
}

fn non_empty_var(name: &str) -> Result<Option<String>, SignerError> {
    match env::var(name) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(SignerError::ConfigError(format!("{}: {}", name, e))),
    }
}
