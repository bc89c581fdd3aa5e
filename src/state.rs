use std::sync::Arc;

use crate::{
    config::AppConfig,
    error::AppError,
    modal::{DestinationModal, ModalDeps},
    models::trip::Trip,
    services::{
        api::TravelApi,
        cache::QueryCache,
        notify::{LogNotifier, Notifier},
    },
};

/// Application composition root: one API client, one query cache and one
/// notification sink shared by every modal the shell opens.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub api: Arc<TravelApi>,
    pub cache: QueryCache,
    pub notifier: Arc<dyn Notifier>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self, AppError> {
        let api = Arc::new(TravelApi::new(&config)?);
        Ok(Self {
            config,
            api,
            cache: QueryCache::new(),
            notifier: Arc::new(LogNotifier),
        })
    }

    /// Swap the notification sink, e.g. for a shell that renders real toasts.
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    fn deps(&self) -> ModalDeps<TravelApi> {
        ModalDeps {
            client: Arc::clone(&self.api),
            cache: self.cache.clone(),
            notifier: Arc::clone(&self.notifier),
        }
    }

    pub fn add_destination_modal(&self, parent: Trip) -> DestinationModal<TravelApi> {
        DestinationModal::add(parent, self.deps())
    }

    pub fn edit_trip_modal(&self, trip: Trip) -> DestinationModal<TravelApi> {
        DestinationModal::edit(trip, self.deps())
    }
}
