//! Route handlers for the Roost API.

pub mod callback;
pub mod engagements;
pub mod version;
