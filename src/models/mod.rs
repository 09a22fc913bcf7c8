// Models module for data structures
pub mod manifest;
pub mod version;
