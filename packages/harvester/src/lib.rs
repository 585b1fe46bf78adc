//! Podium Harvester - Ingest theater production metadata from the TIN
//! Adlib archive.
//!
//! This crate drives a paginated query against the Adlib performTIN
//! endpoint, decodes each XML page into normalized [`ProductionRecord`]
//! entities and streams them as line-delimited JSON for the downstream
//! import step (which dedups by record id).
//!
//! # Example
//!
//! ```
//! use podium_harvester::config;
//!
//! // Validate a query boundary date
//! assert!(config::validate_date("2020-01-01").is_ok());
//! assert!(config::validate_date("01/01/2020").is_err());
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Configuration values and validation
//! - [`types`]: Core data types ([`ProductionRecord`])
//! - [`error`]: Error types and Result alias
//! - [`http`]: HTTP transport for the Adlib endpoint
//! - [`xml`]: XML navigation utilities
//! - [`normalize`]: Pure field normalization rules
//! - [`decode`]: Page decoding via a declarative field-path table
//! - [`fetch`]: Paginated, rate-limited page iteration
//! - [`jsonl`]: Line-delimited JSON output
//! - [`ingest`]: The harvest driver
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod decode;
pub mod error;
pub mod fetch;
pub mod http;
pub mod ingest;
pub mod jsonl;
pub mod normalize;
pub mod types;
pub mod xml;

// Re-export main entry point
pub use ingest::run_harvest;

// Re-export commonly used items
pub use config::HarvestConfig;
pub use error::{HarvestError, Result};
pub use types::ProductionRecord;
