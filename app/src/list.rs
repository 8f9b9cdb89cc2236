//! Pet list: a pure projection of the current snapshot.
//!
//! No internal state — the view is recomputed from the records and the busy
//! flag on every frame. Edit and delete intents are the caller's to wire up
//! per card; the view only says whether they are enabled.

use pet_core::Pet;

/// One rendered card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetCard {
    pub id: u64,
    pub name: String,
    pub species: String,
    pub age_label: String,
    pub id_label: String,
}

/// Renderable projection of the list for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetListView {
    pub loading: bool,
    pub empty_message: Option<&'static str>,
    pub actions_disabled: bool,
    pub cards: Vec<PetCard>,
}

#[must_use]
pub fn pet_list_view(pets: &[Pet], loading: bool) -> PetListView {
    PetListView {
        loading,
        empty_message: (pets.is_empty() && !loading).then_some("No pets found. Add one above!"),
        actions_disabled: loading,
        cards: pets
            .iter()
            .map(|pet| PetCard {
                id: pet.id,
                name: pet.name.clone(),
                species: pet.species.clone(),
                age_label: format!("{} years", pet.age),
                id_label: format!("ID: {}", pet.id),
            })
            .collect(),
    }
}
