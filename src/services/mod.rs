// Services module for business logic
pub mod layout;
pub mod manifest_store;
