//! Processing services: the external transform runner and the upload
//! pipeline orchestrator.

pub mod processing;
pub mod transform;
