//! vita-core: Core library for the vita publication catalog
//!
//! This library provides pure Rust implementations of:
//! - Publication aggregation (per-type counts, citations, year/venue/co-author
//!   groupings)
//! - The list query pipeline (search, type filter, stable sort)
//! - Title collation for locale-conventional ordering
//! - The catalog store with replacement-style edits and JSON snapshots
//! - Login session lifecycle and TOML application config
//! - Plain-text report export and pre-shaped analytics rows
//!
//! The aggregation and query components are pure functions of their inputs:
//! they never mutate the publication list, allocate fresh output on every
//! call, and are safe to invoke from any number of concurrent readers.

pub mod config;
pub mod display;
pub mod export;
pub mod query;
pub mod sample;
pub mod session;
pub mod store;
pub mod summary;
pub mod text;

// Re-export main types for convenience
pub use config::{AppConfig, AuthConfig, ConfigError};
pub use display::{NamedCount, PublicationRow, TypeSlice, YearCount};
pub use query::{query, QueryParams, SortKey, SortOrder, TypeFilter};
pub use session::{AuthError, Session};
pub use store::{Catalog, StoreError};
pub use summary::{summarize, PublicationSummary};

// Re-export the domain crate so consumers need only one dependency
pub use vita_domain::{
    is_valid, validate_publication, Publication, PublicationType, User, ValidationError,
    ValidationSeverity,
};
