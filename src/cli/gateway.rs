use clap::Parser;

use crate::{api::envoy, prelude::*};

#[derive(Parser)]
pub struct GatewayArgs {
    /// IQ Gateway IP address or hostname.
    #[clap(long = "gateway-address", alias = "ip-address", env = "IP_ADDRESS")]
    address: String,

    /// IQ Gateway API token.
    #[clap(long = "gateway-token", env = "TOKEN", hide_env_values = true)]
    token: String,

    #[clap(id = "gateway_timeout", long = "gateway-timeout", env = "GATEWAY_TIMEOUT", default_value = "10s")]
    timeout: humantime::Duration,
}

impl GatewayArgs {
    pub fn new_client(&self) -> Result<envoy::Client> {
        envoy::Client::new(&self.address, self.token.clone(), self.timeout.into())
    }
}
