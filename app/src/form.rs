//! Pet form: a local draft over three text fields plus an edit target.
//!
//! The draft lives independently from the committed collection. Handing the
//! form a record to edit initializes the draft from that record's fields
//! (age as its decimal string); clearing the target resets the draft to
//! empty strings. Submitting converts the draft into an intent — a create
//! intent, or an update intent carrying the target's id — and resets the
//! draft regardless of the outcome.

use pet_core::{CreatePet, Pet, UpdatePet};

/// What a submit produced: create when no record is being edited, update
/// (carrying the target's id) otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PetSubmission {
    Create(CreatePet),
    Update(UpdatePet),
}

#[derive(Debug, Default)]
pub struct PetForm {
    name: String,
    species: String,
    age: String,
    editing_id: Option<u64>,
}

/// Renderable projection of the form for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub heading: &'static str,
    pub name: String,
    pub species: String,
    pub age: String,
    pub submit_label: &'static str,
    pub show_cancel: bool,
    pub disabled: bool,
}

impl PetForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_species(&mut self, species: impl Into<String>) {
        self.species = species.into();
    }

    pub fn set_age(&mut self, age: impl Into<String>) {
        self.age = age.into();
    }

    /// Hand the form a record to edit, or clear the edit target.
    pub fn set_editing(&mut self, pet: Option<&Pet>) {
        match pet {
            Some(pet) => {
                self.name = pet.name.clone();
                self.species = pet.species.clone();
                self.age = pet.age.to_string();
                self.editing_id = Some(pet.id);
            }
            None => {
                self.name.clear();
                self.species.clear();
                self.age.clear();
                self.editing_id = None;
            }
        }
    }

    /// Convert the draft into a submission. Returns `None` when the age
    /// field does not parse as an integer. The draft is reset either way;
    /// the edit target is kept until the workflow clears it.
    pub fn submit(&mut self) -> Option<PetSubmission> {
        let age = self.age.trim().parse::<u32>().ok();
        let name = std::mem::take(&mut self.name);
        let species = std::mem::take(&mut self.species);
        self.age.clear();

        let intent = CreatePet {
            name,
            species,
            age: age?,
        };
        Some(match self.editing_id {
            Some(id) => PetSubmission::Update(intent.with_id(id)),
            None => PetSubmission::Create(intent),
        })
    }

    #[must_use]
    pub fn view(&self, loading: bool) -> FormView {
        let editing = self.editing_id.is_some();
        FormView {
            heading: if editing { "Edit Pet" } else { "Add New Pet" },
            name: self.name.clone(),
            species: self.species.clone(),
            age: self.age.clone(),
            submit_label: if editing { "Update Pet" } else { "Create Pet" },
            show_cancel: editing,
            disabled: loading,
        }
    }
}
