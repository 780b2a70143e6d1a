//! PetCare client state layer.
//!
//! Everything the dashboard page needs short of rendering: an API client
//! behind the [`PetApi`](api::PetApi) trait, the in-memory record shape,
//! the view-state controller that owns the pet list, the create/edit form
//! state and the delete confirmation flow.

pub mod api;
pub mod config;
pub mod confirm;
pub mod dashboard;
pub mod demo;
pub mod error;
pub mod form;
pub mod record;
