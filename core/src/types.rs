//! Domain DTOs for the pet API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates. Ids are
//! server-assigned and never minted or mutated on the client side, so
//! `CreatePet` has no id field at all — its JSON form must not contain one.

use serde::{Deserialize, Serialize};

/// A single pet record returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pet {
    pub id: u64,
    pub name: String,
    pub species: String,
    pub age: u32,
}

/// Request payload for creating a new pet. The server assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatePet {
    pub name: String,
    pub species: String,
    pub age: u32,
}

/// Request payload for replacing an existing pet. Carries the id of the
/// record it targets plus the full set of mutable fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdatePet {
    pub id: u64,
    pub name: String,
    pub species: String,
    pub age: u32,
}

impl CreatePet {
    /// Turn a create intent into an update intent targeting `id`.
    #[must_use]
    pub fn with_id(self, id: u64) -> UpdatePet {
        UpdatePet {
            id,
            name: self.name,
            species: self.species,
            age: self.age,
        }
    }
}
