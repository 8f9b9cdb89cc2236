//! The application workflow: load, submit, edit, delete.
//!
//! # Design
//! `PetApp` owns the canonical in-memory snapshot and mediates between the
//! remote store and the presentation layer. Two independent flags span four
//! composite states: Idle (not loading, no error), Busy (operation in
//! flight), Errored (last operation failed, prior snapshot retained) and
//! Editing (a record is selected for editing).
//!
//! The busy flag is an enforced guard, not a UI convenience: every entry
//! point checks it first and returns without side effects while an
//! operation is in flight. After every successful mutation the whole
//! collection is re-fetched, so the rendered snapshot never silently
//! diverges from server state.

use pet_core::{FetchError, Pet, PetStore, Transport};

use crate::form::PetSubmission;

pub struct PetApp<T: Transport> {
    store: PetStore<T>,
    pets: Vec<Pet>,
    loading: bool,
    error: Option<String>,
    editing: Option<Pet>,
}

impl<T: Transport> PetApp<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            store: PetStore::new(base_url, transport),
            pets: Vec::new(),
            loading: false,
            error: None,
            editing: None,
        }
    }

    /// Current snapshot, as of the last successful fetch.
    #[must_use]
    pub fn pets(&self) -> &[Pet] {
        &self.pets
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn editing_pet(&self) -> Option<&Pet> {
        self.editing.as_ref()
    }

    /// Fetch the full collection. Run once on startup and after every
    /// successful mutation.
    pub fn refresh(&mut self) {
        if !self.begin() {
            return;
        }
        self.fetch_pets();
        self.loading = false;
    }

    /// Create when the submission carries no id, update otherwise. On
    /// success the edit target is cleared and the collection re-fetched
    /// exactly once.
    pub fn submit(&mut self, submission: PetSubmission) {
        if !self.begin() {
            return;
        }
        let result = match submission {
            PetSubmission::Create(intent) => {
                tracing::debug!(name = %intent.name, "creating pet");
                self.store.create(&intent).map(|_| ())
            }
            PetSubmission::Update(intent) => {
                tracing::debug!(id = intent.id, "updating pet");
                self.store.update(&intent).map(|_| ())
            }
        };
        match result {
            Ok(()) => {
                self.editing = None;
                self.fetch_pets();
            }
            Err(err) => self.fail(&err),
        }
        self.loading = false;
    }

    /// Select a record for editing. No network call, no change to
    /// loading or error.
    pub fn request_edit(&mut self, pet: Pet) {
        self.editing = Some(pet);
    }

    /// Clear the edit target without submitting.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Delete a record, gated on an explicit affirmative signal. A declined
    /// confirmation performs no network call and changes no state.
    pub fn request_delete(&mut self, id: u64, confirm: impl FnOnce() -> bool) {
        if self.loading || !confirm() {
            return;
        }
        self.loading = true;
        self.error = None;
        tracing::debug!(id, "deleting pet");
        match self.store.delete(id) {
            Ok(()) => self.fetch_pets(),
            Err(err) => self.fail(&err),
        }
        self.loading = false;
    }

    /// Enter Busy unless an operation is already in flight.
    fn begin(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        self.error = None;
        true
    }

    fn fetch_pets(&mut self) {
        match self.store.list_all() {
            Ok(pets) => self.pets = pets,
            Err(err) => self.fail(&err),
        }
    }

    fn fail(&mut self, err: &FetchError) {
        let message = err.to_string();
        self.error = Some(if message.is_empty() {
            "Unknown error".to_string()
        } else {
            message
        });
    }
}
