pub mod config;
pub mod payload;
pub mod transport;

use anyhow::{Context, Result};
use paysign::{MessageSigner, Pkcs12Signer, canonical_message};

pub use config::Config;

/// Runs the full submission pipeline: build the canonical message, sign
/// it, assemble the payload, send the request, print the response.
///
/// Every failure aborts before the next step; a request is only ever
/// sent with a fully-formed, signed payload.
pub async fn run(config: Config) -> Result<()> {
    let message = canonical_message(&config.transaction_details)
        .context("building canonical message")?;
    tracing::info!(
        fields = config.transaction_details.len(),
        message_bytes = message.len(),
        "canonical message built"
    );

    let password = config
        .pfx_password
        .as_ref()
        .context("no bundle password configured (set `pfx_password` or --pfx-password)")?;
    let signer = Pkcs12Signer::new(&config.pfx_path, password.expose());
    let token = signer.sign(&message).context("signing transaction message")?;

    let payload = payload::prepare_payload(&config.transaction_details, &token)
        .context("assembling request payload")?;

    let client = reqwest::Client::new();
    let response = transport::send_request(
        &client,
        &config.method,
        &config.url,
        &config.headers,
        payload,
        &config.auth,
    )
    .await
    .context("submitting signed transaction")?;

    match serde_json::from_str::<serde_json::Value>(&response.body) {
        Ok(value) => println!("{}", serde_json::to_string_pretty(&value)?),
        Err(_) => println!("{}", response.body),
    }

    Ok(())
}
