pub mod alerts;
pub mod config;
