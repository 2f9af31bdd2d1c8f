//! Wire DTOs shared by the HTTP API.

pub mod flight;
