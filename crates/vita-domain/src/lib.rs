//! Domain types for the vita publication catalog
//!
//! This crate provides the canonical domain models shared across the vita
//! suite:
//! - Publication: one catalogued academic work with bibliographic metadata
//! - PublicationType: closed set of publication categories
//! - User: the profile owner (faculty member)
//! - Validation: structural checks applied at the editing boundary

pub mod publication;
pub mod user;
pub mod validation;

pub use publication::*;
pub use user::*;
pub use validation::*;
