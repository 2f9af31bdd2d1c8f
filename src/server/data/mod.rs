//! Data access layer repositories.

pub mod flight;
