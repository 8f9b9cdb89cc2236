//! Remote store facade: the five CRUD operations over a transport.
//!
//! # Design
//! `PetStore` composes the stateless `PetClient` with a [`Transport`] and
//! runs the build → execute → parse loop for each operation. A transport
//! failure is indistinguishable from a bad response at this boundary: both
//! collapse into the operation's `FetchError`. Each call is a single
//! fire-and-wait round-trip with no retry.

use crate::client::PetClient;
use crate::error::FetchError;
use crate::http::Transport;
use crate::types::{CreatePet, Pet, UpdatePet};

/// Typed CRUD operations against the remote pet resource.
#[derive(Debug)]
pub struct PetStore<T: Transport> {
    client: PetClient,
    transport: T,
}

impl<T: Transport> PetStore<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            client: PetClient::new(base_url),
            transport,
        }
    }

    pub fn list_all(&mut self) -> Result<Vec<Pet>, FetchError> {
        let request = self.client.build_list_pets();
        let response = self.transport.execute(request).map_err(|_| FetchError::List)?;
        self.client.parse_list_pets(response)
    }

    pub fn get_one(&mut self, id: u64) -> Result<Pet, FetchError> {
        let request = self.client.build_get_pet(id);
        let response = self
            .transport
            .execute(request)
            .map_err(|_| FetchError::Get(id))?;
        self.client.parse_get_pet(id, response)
    }

    pub fn create(&mut self, intent: &CreatePet) -> Result<Pet, FetchError> {
        let request = self.client.build_create_pet(intent)?;
        let response = self
            .transport
            .execute(request)
            .map_err(|_| FetchError::Create)?;
        self.client.parse_create_pet(response)
    }

    pub fn update(&mut self, intent: &UpdatePet) -> Result<Pet, FetchError> {
        let request = self.client.build_update_pet(intent)?;
        let response = self
            .transport
            .execute(request)
            .map_err(|_| FetchError::Update(intent.id))?;
        self.client.parse_update_pet(intent.id, response)
    }

    pub fn delete(&mut self, id: u64) -> Result<(), FetchError> {
        let request = self.client.build_delete_pet(id);
        let response = self
            .transport
            .execute(request)
            .map_err(|_| FetchError::Delete(id))?;
        self.client.parse_delete_pet(id, response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{HttpMethod, HttpRequest, HttpResponse, TransportError};

    /// Scripted transport: pops queued responses and records every request.
    struct FakeTransport {
        responses: Vec<Result<HttpResponse, TransportError>>,
        requests: Vec<HttpRequest>,
    }

    impl FakeTransport {
        fn new(responses: Vec<Result<HttpResponse, TransportError>>) -> Self {
            Self {
                responses,
                requests: Vec::new(),
            }
        }
    }

    impl Transport for FakeTransport {
        fn execute(&mut self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            self.requests.push(request);
            if self.responses.is_empty() {
                return Err(TransportError("no scripted response".to_string()));
            }
            self.responses.remove(0)
        }
    }

    fn ok(status: u16, body: &str) -> Result<HttpResponse, TransportError> {
        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        })
    }

    #[test]
    fn create_issues_exactly_one_post_with_the_intent_body() {
        let transport = FakeTransport::new(vec![ok(
            201,
            r#"{"id":1,"name":"Buddy","species":"Dog","age":4}"#,
        )]);
        let mut store = PetStore::new("http://host", transport);

        let intent = CreatePet {
            name: "Buddy".to_string(),
            species: "Dog".to_string(),
            age: 4,
        };
        let created = store.create(&intent).unwrap();
        assert_eq!(created.id, 1);

        assert_eq!(store.transport.requests.len(), 1);
        let req = &store.transport.requests[0];
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://host/api/pets");
        let sent: CreatePet = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(sent, intent);
    }

    #[test]
    fn transport_failure_maps_to_operation_error() {
        let transport = FakeTransport::new(vec![Err(TransportError(
            "connection refused".to_string(),
        ))]);
        let mut store = PetStore::new("http://host", transport);
        let err = store.list_all().unwrap_err();
        assert_eq!(err, FetchError::List);
    }

    #[test]
    fn delete_resolves_to_unit_on_success() {
        let transport = FakeTransport::new(vec![ok(204, "")]);
        let mut store = PetStore::new("http://host", transport);
        store.delete(9).unwrap();
        let req = &store.transport.requests[0];
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://host/api/pets/9");
    }

    #[test]
    fn update_targets_the_intent_id_path() {
        let transport = FakeTransport::new(vec![ok(
            200,
            r#"{"id":7,"name":"Rex","species":"Dog","age":6}"#,
        )]);
        let mut store = PetStore::new("http://host", transport);
        let intent = UpdatePet {
            id: 7,
            name: "Rex".to_string(),
            species: "Dog".to_string(),
            age: 6,
        };
        let updated = store.update(&intent).unwrap();
        assert_eq!(updated.age, 6);
        assert_eq!(store.transport.requests[0].path, "http://host/api/pets/7");
    }

    #[test]
    fn get_one_transport_failure_keeps_the_id_in_the_message() {
        let transport = FakeTransport::new(vec![Err(TransportError("timeout".to_string()))]);
        let mut store = PetStore::new("http://host", transport);
        let err = store.get_one(4).unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch pet with id 4");
    }
}
