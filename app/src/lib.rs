//! Pet management application: workflow and presentation over `pet-core`.
//!
//! # Overview
//! [`PetApp`] owns the in-memory snapshot and the load/submit/edit/delete
//! workflow; [`PetForm`] and [`pet_list_view`] project state into plain view
//! models a front end can render; [`UreqTransport`] executes the HTTP
//! round-trips. The binary in `main.rs` wires these into a terminal UI.

pub mod controller;
pub mod form;
pub mod list;
pub mod transport;

pub use controller::PetApp;
pub use form::{FormView, PetForm, PetSubmission};
pub use list::{pet_list_view, PetCard, PetListView};
pub use transport::UreqTransport;
