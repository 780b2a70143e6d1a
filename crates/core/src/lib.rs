//! PetCare domain crate.
//!
//! Pure types and rules shared by the HTTP server and the client state
//! layer: pet enumerations, derived health status, form validation and the
//! domain error type. Nothing in here performs I/O.

pub mod error;
pub mod pagination;
pub mod pet;
pub mod types;
pub mod validation;
