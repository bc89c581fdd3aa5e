use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use crate::{
    form::{draft::FormDraft, schema::Mode},
    models::trip::Trip,
    mutation::{MutationController, MutationState},
    services::{api::TravelClient, cache::QueryCache, notify::Notifier},
    submit,
};

/// Shared visibility flag. The shell owns it; the mutation controller flips
/// it off on success.
#[derive(Debug, Clone)]
pub struct OpenFlag(Arc<AtomicBool>);

impl OpenFlag {
    pub fn opened() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_open(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    pub fn close(&self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Pure container around the form: a visibility flag and a mode-dependent
/// title. Business state lives in the draft and the mutation controller.
#[derive(Debug, Clone)]
pub struct ModalShell {
    open: OpenFlag,
    title: &'static str,
}

impl ModalShell {
    fn new(title: &'static str) -> Self {
        Self {
            open: OpenFlag::opened(),
            title,
        }
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn is_open(&self) -> bool {
        self.open.is_open()
    }

    pub fn open_flag(&self) -> OpenFlag {
        self.open.clone()
    }

    pub fn close(&self) {
        self.open.close();
    }
}

/// Collaborators for one modal instance, passed in explicitly rather than
/// reached through any ambient context.
pub struct ModalDeps<C> {
    pub client: Arc<C>,
    pub cache: QueryCache,
    pub notifier: Arc<dyn Notifier>,
}

/// The destination create/edit flow: draft, validation gate, submission
/// adapter and mutation controller behind one dismissible container.
pub struct DestinationModal<C: TravelClient> {
    mode: Mode,
    shell: ModalShell,
    draft: FormDraft,
    mutation: MutationController<C>,
}

impl<C: TravelClient> DestinationModal<C> {
    /// Open in add mode for a new destination of `parent`.
    pub fn add(parent: Trip, deps: ModalDeps<C>) -> Self {
        Self::open(Mode::Create { parent }, deps)
    }

    /// Open in edit mode, pre-filled from the trip being edited.
    pub fn edit(trip: Trip, deps: ModalDeps<C>) -> Self {
        let prefill = trip.clone();
        let mut modal = Self::open(Mode::Edit { trip }, deps);
        modal.draft.prefill_from_trip(&prefill);
        modal
    }

    fn open(mode: Mode, deps: ModalDeps<C>) -> Self {
        let shell = ModalShell::new(mode.title());
        let draft = FormDraft::new(mode.schema());
        let mutation =
            MutationController::new(deps.client, deps.cache, deps.notifier, shell.open_flag());
        Self {
            mode,
            shell,
            draft,
            mutation,
        }
    }

    pub fn title(&self) -> &'static str {
        self.shell.title()
    }

    pub fn is_open(&self) -> bool {
        self.shell.is_open()
    }

    pub fn set_field(&mut self, field: &str, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.draft.error(field)
    }

    pub fn draft(&self) -> &FormDraft {
        &self.draft
    }

    pub fn mutation_state(&self) -> MutationState {
        self.mutation.state()
    }

    /// Validate and, when the draft passes, hand the shaped payload to the
    /// mutation controller. Returns false when validation blocked the submit
    /// or a request is already pending.
    pub fn submit(&mut self) -> bool {
        if self.mutation.is_pending() {
            return false;
        }
        if !self.draft.validate() {
            return false;
        }
        match submit::build_mutation(&self.mode, &self.draft) {
            Ok(mutation) => self.mutation.submit(mutation),
            Err(invalid) => {
                self.draft.reject(invalid.field, invalid.message);
                false
            }
        }
    }

    /// Wait for an in-flight submission to settle.
    pub async fn settled(&mut self) {
        self.mutation.settled().await;
    }

    /// Explicit user dismissal: cancels any in-flight request and hides the
    /// modal. The draft dies with the instance.
    pub fn close(&mut self) {
        self.mutation.abort();
        self.shell.close();
    }
}
