//! # toontab-core
//!
//! Encoder and decoder for **tabular TOON**, a compact line-oriented text
//! notation for JSON-shaped data. Objects are written as a header line of
//! keys followed by their values; homogeneous arrays become a named,
//! size-tagged block (`name[N]{` … `}`) holding one shared key header and
//! one value row per element.
//!
//! ## Quick start
//!
//! ```rust
//! use toontab_core::{decode, encode_json, FormatConfig};
//!
//! // JSON → TOON
//! let json = r#"{"id":1,"name":"Test Product","price":99.99}"#;
//! let toon = encode_json(json, &FormatConfig::default()).unwrap();
//! assert_eq!(toon, "id, name, price;\n1, Test Product, 99.99");
//!
//! // TOON → Value
//! let value = decode(&toon).unwrap();
//! assert_eq!(value.get("name").and_then(|v| v.as_str()), Some("Test Product"));
//! ```
//!
//! Both directions are pure, synchronous functions over in-memory data with
//! no shared state; calls may run concurrently from any number of threads.
//!
//! ## Modules
//!
//! - [`encoder`] — [`Value`] → TOON text under a [`FormatConfig`]
//! - [`decoder`] — TOON text → [`Value`], with precise line-numbered errors
//! - [`builder`] — staged `from_json`/`from_value`/`from_toon` facade
//! - [`config`] — encoder formatting options
//! - [`error`] — error types for encode/decode failures
//! - [`types`] — the `Value` tree

pub mod builder;
pub mod config;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod types;

pub use builder::{DecodeBuilder, EncodeBuilder, Toon};
pub use config::FormatConfig;
pub use decoder::{decode, decode_to_json};
pub use encoder::{encode, encode_json};
pub use error::ToonError;
pub use types::Value;
