pub mod entry;
pub mod error;
pub mod export;
pub mod validation;
