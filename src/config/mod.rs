//! Configuration module for Facet-Scout
//!
//! The search client takes an explicit, immutable [`SearchConfig`] instead of
//! reading ambient process state. The defaults target the real Shodan endpoint;
//! a TOML file can override the endpoint or the identity pool, which keeps
//! tests deterministic (inject a mock endpoint and a single fixed identity).

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::SearchConfig;

// Re-export parser functions
pub use parser::load_config;

pub use validation::validate;
