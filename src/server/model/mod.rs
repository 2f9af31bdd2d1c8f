pub mod app;
pub mod flight;
