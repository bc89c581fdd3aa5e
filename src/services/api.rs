use async_trait::async_trait;
use serde::{de::DeserializeOwned, Deserialize};
use tracing::debug;
use url::Url;

use crate::{
    config::AppConfig,
    error::AppError,
    models::destination::TripDetail,
    submit::{AddDestinationData, EditTripData},
};

/// Acknowledgment the API returns for a successful mutation.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// The travel API operations the client core needs. A trait so the modal flow
/// takes its client as an explicit dependency and tests can stub the network.
#[async_trait]
pub trait TravelClient: Send + Sync + 'static {
    async fn edit_trip(&self, id: &str, data: &EditTripData) -> Result<ApiMessage, AppError>;

    async fn add_destination(
        &self,
        id: &str,
        data: &AddDestinationData,
    ) -> Result<ApiMessage, AppError>;

    async fn trip_detail(&self, id: &str) -> Result<TripDetail, AppError>;
}

/// reqwest-backed client for the remote travel API.
#[derive(Clone)]
pub struct TravelApi {
    http: reqwest::Client,
    base_url: Url,
}

impl TravelApi {
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, AppError> {
        self.base_url
            .join(path)
            .map_err(|err| AppError::Config(format!("invalid API url {path:?}: {err}")))
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, AppError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }
        let message = response
            .json::<ApiErrorBody>()
            .await
            .map(|body| body.message)
            .unwrap_or_else(|_| format!("request failed with status {status}"));
        Err(AppError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl TravelClient for TravelApi {
    async fn edit_trip(&self, id: &str, data: &EditTripData) -> Result<ApiMessage, AppError> {
        let url = self.endpoint(&format!("trips/{id}"))?;
        debug!(%url, "editing trip");
        let response = self.http.patch(url).json(data).send().await?;
        Self::decode(response).await
    }

    async fn add_destination(
        &self,
        id: &str,
        data: &AddDestinationData,
    ) -> Result<ApiMessage, AppError> {
        let url = self.endpoint(&format!("trips/{id}/destinations"))?;
        debug!(%url, "adding destination");
        let response = self.http.post(url).json(data).send().await?;
        Self::decode(response).await
    }

    async fn trip_detail(&self, id: &str) -> Result<TripDetail, AppError> {
        let url = self.endpoint(&format!("trips/{id}"))?;
        debug!(%url, "fetching trip detail");
        let response = self.http.get(url).send().await?;
        Self::decode(response).await
    }
}
