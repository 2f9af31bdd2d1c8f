//! Server application core modules.
//!
//! Everything needed to run the flight log ingestion service: HTTP routing
//! and controllers, the spreadsheet parser, the external transform runner,
//! the processing orchestrator, and the database access layer.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod parser;
pub mod router;
pub mod service;
pub mod startup;
