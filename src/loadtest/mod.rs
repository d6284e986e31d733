//! Loadtest command handlers.
//!
//! This module contains handlers for the generate and schema commands.

pub mod generate;
pub mod schema;

pub use generate::run_generate;
pub use schema::{run_schema, SchemaArgs, SchemaFormat};
