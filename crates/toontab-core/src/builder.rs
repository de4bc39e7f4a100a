//! Staged conversion facade.
//!
//! Pick a source first — [`Toon::from_json`], [`Toon::from_value`], or
//! [`Toon::from_toon`] — then run the one operation that source supports.
//! The stage types make encoding TOON text or decoding JSON unrepresentable
//! instead of a runtime error.
//!
//! ```
//! use toontab_core::{FormatConfig, Toon};
//!
//! let toon = Toon::from_json(r#"{"id":1,"name":"Test Product"}"#)
//!     .encode()
//!     .unwrap();
//! assert_eq!(toon, "id, name;\n1, Test Product");
//!
//! let value = Toon::from_toon(toon.as_str()).decode().unwrap();
//! assert_eq!(value.get("id").and_then(|v| v.as_i64()), Some(1));
//! ```

use crate::config::FormatConfig;
use crate::decoder;
use crate::encoder;
use crate::error::Result;
use crate::types::Value;

/// Entry point for the staged conversion API.
pub struct Toon;

impl Toon {
    /// Stage a JSON string for encoding.
    pub fn from_json(json: impl Into<String>) -> EncodeBuilder {
        EncodeBuilder {
            source: Source::Json(json.into()),
            config: FormatConfig::default(),
        }
    }

    /// Stage an already-built value for encoding.
    pub fn from_value(value: Value) -> EncodeBuilder {
        EncodeBuilder {
            source: Source::Value(value),
            config: FormatConfig::default(),
        }
    }

    /// Stage TOON text for decoding.
    pub fn from_toon(toon: impl Into<String>) -> DecodeBuilder {
        DecodeBuilder { text: toon.into() }
    }
}

enum Source {
    Json(String),
    Value(Value),
}

/// Encoding stage produced by [`Toon::from_json`] and [`Toon::from_value`].
pub struct EncodeBuilder {
    source: Source,
    config: FormatConfig,
}

impl EncodeBuilder {
    /// Replace the default formatting options.
    #[must_use]
    pub fn config(mut self, config: FormatConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the encode. Only the JSON-sourced path can fail.
    pub fn encode(self) -> Result<String> {
        match self.source {
            Source::Json(json) => encoder::encode_json(&json, &self.config),
            Source::Value(value) => Ok(encoder::encode(&value, &self.config)),
        }
    }
}

/// Decoding stage produced by [`Toon::from_toon`].
pub struct DecodeBuilder {
    text: String,
}

impl DecodeBuilder {
    /// Decode into a [`Value`] tree.
    pub fn decode(self) -> Result<Value> {
        decoder::decode(&self.text)
    }

    /// Decode and re-serialize as compact JSON.
    pub fn decode_to_json(self) -> Result<String> {
        decoder::decode_to_json(&self.text)
    }
}
