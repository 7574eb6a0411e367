pub mod rock;
pub mod rock_system;
