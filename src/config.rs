use std::{env, time::Duration};

use url::Url;

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: Url,
    pub request_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let api_base_url = env::var("TRAVEL_API_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:4000/api/".to_string());
        let api_base_url = Url::parse(&api_base_url)
            .map_err(|err| AppError::Config(format!("invalid TRAVEL_API_URL: {err}")))?;

        let request_timeout = env::var("TRAVEL_API_TIMEOUT_SECS")
            .ok()
            .map(|raw| raw.parse::<u64>())
            .transpose()
            .map_err(|err| AppError::Config(format!("invalid TRAVEL_API_TIMEOUT_SECS: {err}")))?
            .map(Duration::from_secs)
            .unwrap_or_else(|| Duration::from_secs(30));

        Ok(Self {
            api_base_url,
            request_timeout,
        })
    }
}
