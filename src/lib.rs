//! filestore - single-file store with pluggable serialization
//!
//! A `FileStore` binds one path to one `Codec`. `save` appends an encoded
//! record, `load` decodes the whole file, and both are serialized by a
//! per-instance mutex.

pub mod codec;
pub mod error;
pub mod options;
pub mod store;

pub use codec::{
    Codec, CodecError, FnCodec, JsonDocument, JsonLines, LengthPrefixed, YamlDocuments,
};
pub use error::{FixSuggestion, Result, StoreError};
pub use options::{CreatePolicy, StoreOptions};
pub use store::FileStore;
