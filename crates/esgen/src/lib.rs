//! ESG self-assessment engine: question catalogs, scoring, recommendations
//! and the report lifecycle.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
