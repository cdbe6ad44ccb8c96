//! Interest data model and data sources.
//!
//! The master list of interests is injected at startup, either from the
//! built-in seed or from a TOML data file.

mod item;
mod seed;
mod source;

pub use item::{IconRef, InterestItem};
pub use seed::seed_interests;
pub use source::{load_interests, parse_interests, DataError, InterestFile};
