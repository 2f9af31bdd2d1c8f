//! HTTP controller endpoints for the flight log API.
//!
//! Controllers validate uploads, delegate to the processing service, and
//! shape responses. They are documented with utoipa for the OpenAPI surface.

pub mod flight;
