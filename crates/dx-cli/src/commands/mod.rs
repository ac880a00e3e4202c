pub mod catalog;
pub mod diagnose;
pub mod symptoms;
pub mod version;
