//! Data models for business card processing.

pub mod card;
pub mod config;

pub use card::*;
pub use config::*;
