use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignerError {
    InvalidTypedData(String),
    UndefinedType { type_name: String },
    UnknownField { type_name: String, field: String },
    MissingField { type_name: String, field: String },
    EncodingError(String),
    InvalidPrivateKey(String),
    SigningError(String),
    SignatureRecoveryError(String),
    InvalidSignature { expected: String, recovered: String },
    ConfigError(String),
}

impl fmt::Display for SignerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTypedData(message) => write!(f, "Invalid typed data: {}", message),
            Self::UndefinedType { type_name } => {
                write!(f, "Type {} is not defined in the schema", type_name)
            }
            Self::UnknownField { type_name, field } => {
                write!(f, "Field {} is not declared on type {}", field, type_name)
            }
            Self::MissingField { type_name, field } => {
                write!(f, "Field {} of type {} is missing", field, type_name)
            }
            Self::EncodingError(message) => write!(f, "EIP-712 encoding error: {}", message),
            Self::InvalidPrivateKey(message) => write!(f, "Invalid private key: {}", message),
            Self::SigningError(message) => write!(f, "Signing error: {}", message),
            Self::SignatureRecoveryError(message) => {
                write!(f, "Signature recovery error: {}", message)
            }
            Self::InvalidSignature {
                expected,
                recovered,
            } => write!(
                f,
                "Invalid signature: expected signer {}, recovered {}",
                expected, recovered
            ),
            Self::ConfigError(message) => write!(f, "Config error: {}", message),
        }
    }
}

impl std::error::Error for SignerError {}
