//! Codec Module - on-disk record formats
//!
//! A codec turns one value into the bytes appended by a single `save`, and
//! interprets the whole file during `load`. The store imposes no structure on
//! the bytes; record boundaries belong to the codec.
//!
//! Key types:
//! - `Codec`: the encode/decode seam injected into `FileStore`
//! - `FnCodec`: two caller-supplied closures
//! - `JsonLines` / `JsonDocument`: serde_json formats
//! - `YamlDocuments`: `---` separated serde_yaml documents
//! - `LengthPrefixed`: u32 big-endian length + raw bytes

use std::io::BufRead;

mod fn_codec;
mod json;
mod length_prefixed;
mod yaml;

pub use fn_codec::FnCodec;
pub use json::{JsonDocument, JsonLines};
pub use length_prefixed::LengthPrefixed;
pub use yaml::YamlDocuments;

/// Error raised by a codec (boxed so any format can plug in)
pub type CodecError = Box<dyn std::error::Error + Send + Sync>;

/// Encode/decode pair defining the on-disk record format
pub trait Codec {
    /// What `save` accepts
    type Value: ?Sized;
    /// What `load` populates
    type Target: ?Sized;

    /// Encode one record. Called once per `save`, before anything is written.
    fn encode(&self, value: &Self::Value) -> Result<Vec<u8>, CodecError>;

    /// Interpret the full file content into `target`. Called once per `load`.
    fn decode(&self, reader: &mut dyn BufRead, target: &mut Self::Target)
        -> Result<(), CodecError>;
}
