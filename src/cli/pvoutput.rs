use clap::Parser;
use http::Uri;

use crate::api::pvoutput;

#[derive(Parser)]
pub struct PvOutputArgs {
    #[clap(long = "pvoutput-api-key", env = "API_KEY", hide_env_values = true)]
    api_key: String,

    #[clap(long = "pvoutput-system-id", env = "SYSTEM_ID")]
    system_id: String,

    /// Add Status service URL.
    #[clap(
        long = "pvoutput-url",
        env = "PVOUTPUT_URL",
        default_value = pvoutput::Client::DEFAULT_URL,
    )]
    url: Uri,

    #[clap(id = "pvoutput_timeout", long = "pvoutput-timeout", env = "PVOUTPUT_TIMEOUT", default_value = "5s")]
    timeout: humantime::Duration,
}

impl PvOutputArgs {
    pub fn new_client(&self) -> pvoutput::Client {
        pvoutput::Client::new(
            self.url.clone(),
            self.api_key.clone(),
            self.system_id.clone(),
            self.timeout.into(),
        )
    }
}
