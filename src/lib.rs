pub mod store;
pub mod telemetry;
pub mod web;
