//! Synchronous API client core for the pet service.
//!
//! # Overview
//! Typed CRUD operations against the REST resource at `/api/pets`. Requests
//! and responses are plain data; the only I/O seam is the [`Transport`]
//! trait, so everything above it is deterministic and testable without a
//! network.
//!
//! # Design
//! - `PetClient` is stateless — it holds only `base_url`. Each operation is
//!   split into `build_*` (produces a request) and `parse_*` (consumes a
//!   response), so the I/O boundary is explicit.
//! - `PetStore` composes client + transport into the five operations the
//!   application workflow needs.
//! - Every failure of an operation collapses into that operation's
//!   [`FetchError`] variant with a fixed user-facing message.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod store;
pub mod types;

pub use client::PetClient;
pub use error::FetchError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};
pub use store::PetStore;
pub use types::{CreatePet, Pet, UpdatePet};
