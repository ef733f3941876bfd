use spot_order_signer::{config::Config, errors::SignerError, signing};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), SignerError> {
    // stdout carries the result, logs stay on stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    let typed_data = config.typed_data()?;
    let signer = config.signer()?;
    let signed = signing::sign_typed_data(&typed_data, &signer)?;
    info!("signed {}", typed_data.primary_type);

    println!("Message hash: {}", signed.message_hash());
    println!("Signature: {}", signed.signature_hex());
    Ok(())
}
