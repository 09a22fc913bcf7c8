// Utility modules shared across the CLI

pub mod error;
pub mod workspace;
