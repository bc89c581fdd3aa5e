use std::sync::{Arc, Mutex};

use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::{
    modal::OpenFlag,
    services::{
        api::TravelClient,
        cache::{QueryCache, QueryKey},
        notify::{Notifier, ToastLevel, ToastPosition},
    },
    submit::TripMutation,
};

/// Lifecycle of one submission. `Success` and `Error` keep the message that
/// was surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MutationState {
    #[default]
    Idle,
    Pending,
    Success(String),
    Error(String),
}

impl MutationState {
    pub fn is_pending(&self) -> bool {
        matches!(self, MutationState::Pending)
    }
}

/// Runs the network side of a submission and applies its effects: on success
/// the trip's detail cache entry is invalidated, a toast is shown and the
/// shell is closed; on rejection the message is surfaced and the modal stays
/// open for a fresh user-initiated retry. The request lives in a spawned task
/// owned by this controller, so closing or dropping the modal aborts an
/// in-flight call instead of leaving the shell stuck in pending.
pub struct MutationController<C> {
    client: Arc<C>,
    cache: QueryCache,
    notifier: Arc<dyn Notifier>,
    open: OpenFlag,
    state: Arc<Mutex<MutationState>>,
    inflight: Option<JoinHandle<()>>,
}

impl<C: TravelClient> MutationController<C> {
    pub fn new(
        client: Arc<C>,
        cache: QueryCache,
        notifier: Arc<dyn Notifier>,
        open: OpenFlag,
    ) -> Self {
        Self {
            client,
            cache,
            notifier,
            open,
            state: Arc::new(Mutex::new(MutationState::Idle)),
            inflight: None,
        }
    }

    pub fn state(&self) -> MutationState {
        self.state.lock().expect("mutation state poisoned").clone()
    }

    pub fn is_pending(&self) -> bool {
        self.state().is_pending()
    }

    /// Start the request unless one is already in flight. Returns false when
    /// the submit was ignored because the previous one has not settled.
    pub fn submit(&mut self, mutation: TripMutation) -> bool {
        {
            let mut state = self.state.lock().expect("mutation state poisoned");
            if state.is_pending() {
                warn!("submit ignored, a request is already in flight");
                return false;
            }
            *state = MutationState::Pending;
        }

        let client = Arc::clone(&self.client);
        let cache = self.cache.clone();
        let notifier = Arc::clone(&self.notifier);
        let open = self.open.clone();
        let state = Arc::clone(&self.state);

        self.inflight = Some(tokio::spawn(async move {
            let trip_id = mutation.trip_id().to_string();
            let result = match &mutation {
                TripMutation::Edit { id, data } => client.edit_trip(id, data).await,
                TripMutation::Add { id, data } => client.add_destination(id, data).await,
            };

            let mut state = state.lock().expect("mutation state poisoned");
            match result {
                Ok(ack) => {
                    info!(trip_id = %trip_id, "trip mutation acknowledged");
                    cache.invalidate(&QueryKey::detail_destination(trip_id));
                    notifier.toast(&ack.message, ToastLevel::Info, ToastPosition::Bottom);
                    open.close();
                    *state = MutationState::Success(ack.message);
                }
                Err(err) => {
                    let message = err.user_message();
                    warn!(trip_id = %trip_id, %message, "trip mutation rejected");
                    notifier.alert(&message);
                    notifier.toast(&message, ToastLevel::Error, ToastPosition::Bottom);
                    *state = MutationState::Error(message);
                }
            }
        }));
        true
    }

    /// Wait for the in-flight request to settle; a no-op when nothing runs.
    pub async fn settled(&mut self) {
        if let Some(task) = self.inflight.take() {
            let _ = task.await;
        }
    }

    /// Cancel the in-flight request, if any. Called from the modal's close
    /// path; an aborted submission returns the controller to idle.
    pub fn abort(&mut self) {
        if let Some(task) = self.inflight.take() {
            task.abort();
            let mut state = self.state.lock().expect("mutation state poisoned");
            if state.is_pending() {
                *state = MutationState::Idle;
            }
        }
    }
}

impl<C> Drop for MutationController<C> {
    fn drop(&mut self) {
        if let Some(task) = self.inflight.take() {
            task.abort();
        }
    }
}
