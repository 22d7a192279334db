use std::time::Duration;

use http::Uri;
use serde::Serialize;
use ureq::Agent;

use crate::{
    core::{pipeline::Reporter, reading::Reading},
    prelude::*,
};

/// PVOutput Add Status service.
///
/// API docs: <https://pvoutput.org/help/api_specification.html#add-status-service>.
pub struct Client {
    agent: Agent,
    url: Uri,
    api_key: String,
    system_id: String,
}

impl Client {
    pub const DEFAULT_URL: &'static str = "https://pvoutput.org/service/r2/addstatus.jsp";

    pub fn new(url: Uri, api_key: String, system_id: String, timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();
        Self { agent, url, api_key, system_id }
    }
}

impl Reporter for Client {
    #[instrument(skip_all, fields(url = %self.url, system_id = %self.system_id))]
    fn upload(&self, reading: &Reading) -> Result {
        let body = Status::from(reading).to_form()?;
        info!(%body, "uploading the status…");
        let mut response = self
            .agent
            .post(&self.url)
            .header("X-Pvoutput-Apikey", self.api_key.as_str())
            .header("X-Pvoutput-SystemId", self.system_id.as_str())
            .header("Content-Type", "application/x-www-form-urlencoded")
            .send(body)
            .with_context(|| format!("failed to post the status to `{}`", self.url))?;
        let status = response.status();
        if !status.is_success() {
            let message = response.body_mut().read_to_string().unwrap_or_default();
            bail!("PVOutput responded with `{status}`: {}", message.trim());
        }
        Ok(())
    }
}

/// Form fields of the Add Status request.
#[must_use]
#[derive(Serialize)]
struct Status {
    /// Date in `YYYYMMDD`.
    #[serde(rename = "d")]
    date: String,

    /// Time in `HH:MM`.
    #[serde(rename = "t")]
    time: String,

    /// Energy generation in watt-hours.
    #[serde(rename = "v1")]
    energy_generation: u64,

    /// Power generation in watts.
    #[serde(rename = "v2")]
    power_generation: i64,

    #[serde(rename = "v6", skip_serializing_if = "Option::is_none")]
    voltage: Option<u32>,
}

impl Status {
    fn to_form(&self) -> Result<String> {
        serde_qs::to_string(self).context("failed to encode the status")
    }
}

impl From<&Reading> for Status {
    fn from(reading: &Reading) -> Self {
        Self {
            date: reading.timestamp.format("%Y%m%d").to_string(),
            time: reading.timestamp.format("%H:%M").to_string(),
            energy_generation: reading.energy_today,
            power_generation: reading.power,
            voltage: (reading.voltage > 0).then_some(reading.voltage),
        }
    }
}
