pub mod prelude;

pub mod flight;
