pub mod domain;
pub mod error;
pub mod routes;
pub mod settings;
pub mod startup;
pub mod telemetry;
pub mod utils;
