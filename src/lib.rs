pub mod configuration;
pub mod constant;
pub mod domain;
pub mod error;
pub mod request;
pub mod routes;
pub mod startup;
pub mod telegram_client;
pub mod telemetry;
pub mod utils;
