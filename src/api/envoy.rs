mod production;

use std::time::Duration;

use http::Uri;
use ureq::{Agent, tls::TlsConfig};

pub use self::production::{ProductionEntry, ProductionSnapshot};
#[cfg(test)]
pub use self::production::{InverterAggregate, MeterReading};
use crate::{core::pipeline::Gateway, prelude::*};

/// Local Enphase IQ Gateway API.
///
/// API docs: <https://enphase.com/download/iq-gateway-access-using-local-apis-or-local-ui-token-based-authentication-tech-brief>.
pub struct Client {
    agent: Agent,
    url: Uri,
    token: String,
}

impl Client {
    #[instrument(skip_all, fields(address = address))]
    pub fn new(address: &str, token: String, timeout: Duration) -> Result<Self> {
        let url = Uri::builder()
            .scheme("https")
            .authority(address)
            .path_and_query("/production.json")
            .build()
            .with_context(|| format!("`{address}` is not a valid gateway address"))?;

        // The gateway serves a self-signed certificate:
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .tls_config(TlsConfig::builder().disable_verification(true).build())
            .http_status_as_error(false)
            .build()
            .into();

        Ok(Self { agent, url, token })
    }
}

impl Gateway for Client {
    #[instrument(skip_all, fields(url = %self.url))]
    fn fetch_snapshot(&self) -> Result<ProductionSnapshot> {
        info!("fetching the production snapshot…");
        let mut response = self
            .agent
            .get(&self.url)
            .header("Accept", "application/json")
            .header("Authorization", format!("Bearer {}", self.token))
            .call()
            .with_context(|| format!("failed to request `{}`", self.url))?;
        let status = response.status();
        ensure!(status.is_success(), "the gateway responded with `{status}`");
        response
            .body_mut()
            .read_json()
            .with_context(|| format!("failed to deserialize the response from `{}`", self.url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ok() -> Result {
        let client = Client::new("192.168.1.10", String::from("token"), Duration::from_secs(10))?;
        assert_eq!(client.url.to_string(), "https://192.168.1.10/production.json");
        Ok(())
    }

    #[test]
    fn new_rejects_garbage() {
        assert!(Client::new("not a host", String::new(), Duration::from_secs(10)).is_err());
    }

    #[test]
    #[ignore = "requires a gateway on the local network"]
    fn fetch_snapshot_ok() -> Result {
        let address = std::env::var("IP_ADDRESS")?;
        let token = std::env::var("TOKEN")?;
        let snapshot =
            Client::new(&address, token, Duration::from_secs(10))?.fetch_snapshot()?;
        assert!(!snapshot.production.is_empty());
        Ok(())
    }
}
