//! Stateless HTTP request builder and response parser for the pet API.
//!
//! # Design
//! `PetClient` holds only a `base_url` and carries no mutable state between
//! calls. Each CRUD operation is split into a `build_*` method that produces
//! an `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! The store executes the actual HTTP round-trip between the two, keeping
//! this layer deterministic and free of I/O dependencies.
//!
//! Every failure mode of an operation maps to that operation's single
//! `FetchError` variant; no status code or serde detail leaks past here.

use crate::error::FetchError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreatePet, Pet, UpdatePet};

/// The REST resource lives at a fixed base path on the server.
const RESOURCE_PATH: &str = "/api/pets";

/// Synchronous, stateless client for the pet API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network.
#[derive(Debug, Clone)]
pub struct PetClient {
    base_url: String,
}

impl PetClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}{RESOURCE_PATH}", self.base_url)
    }

    fn item_url(&self, id: u64) -> String {
        format!("{}{RESOURCE_PATH}/{id}", self.base_url)
    }

    pub fn build_list_pets(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.collection_url(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_pet(&self, id: u64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.item_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_pet(&self, intent: &CreatePet) -> Result<HttpRequest, FetchError> {
        let body = serde_json::to_string(intent).map_err(|_| FetchError::Create)?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.collection_url(),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_update_pet(&self, intent: &UpdatePet) -> Result<HttpRequest, FetchError> {
        let body = serde_json::to_string(intent).map_err(|_| FetchError::Update(intent.id))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: self.item_url(intent.id),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_delete_pet(&self, id: u64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: self.item_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_pets(&self, response: HttpResponse) -> Result<Vec<Pet>, FetchError> {
        if !response.is_success() {
            return Err(FetchError::List);
        }
        serde_json::from_str(&response.body).map_err(|_| FetchError::List)
    }

    pub fn parse_get_pet(&self, id: u64, response: HttpResponse) -> Result<Pet, FetchError> {
        if !response.is_success() {
            return Err(FetchError::Get(id));
        }
        serde_json::from_str(&response.body).map_err(|_| FetchError::Get(id))
    }

    pub fn parse_create_pet(&self, response: HttpResponse) -> Result<Pet, FetchError> {
        if !response.is_success() {
            return Err(FetchError::Create);
        }
        serde_json::from_str(&response.body).map_err(|_| FetchError::Create)
    }

    pub fn parse_update_pet(&self, id: u64, response: HttpResponse) -> Result<Pet, FetchError> {
        if !response.is_success() {
            return Err(FetchError::Update(id));
        }
        serde_json::from_str(&response.body).map_err(|_| FetchError::Update(id))
    }

    /// Delete has no body contract; any 2xx counts as done.
    pub fn parse_delete_pet(&self, id: u64, response: HttpResponse) -> Result<(), FetchError> {
        if !response.is_success() {
            return Err(FetchError::Delete(id));
        }
        Ok(())
    }
}
