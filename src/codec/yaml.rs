//! YAML document stream codec (serde_yaml)

use std::fmt;
use std::io::BufRead;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::{Codec, CodecError};

/// Each record is one `---` prefixed YAML document; load collects them all.
pub struct YamlDocuments<T> {
    _record: PhantomData<fn() -> T>,
}

impl<T> YamlDocuments<T> {
    pub fn new() -> Self {
        Self {
            _record: PhantomData,
        }
    }
}

impl<T> Default for YamlDocuments<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for YamlDocuments<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("YamlDocuments")
    }
}

impl<T: Serialize + DeserializeOwned> Codec for YamlDocuments<T> {
    type Value = T;
    type Target = Vec<T>;

    fn encode(&self, value: &T) -> Result<Vec<u8>, CodecError> {
        let mut doc = String::from("---\n");
        doc.push_str(&serde_yaml::to_string(value)?);
        if !doc.ends_with('\n') {
            doc.push('\n');
        }
        Ok(doc.into_bytes())
    }

    fn decode(&self, reader: &mut dyn BufRead, target: &mut Vec<T>) -> Result<(), CodecError> {
        // Freshly created file: no documents
        if reader.fill_buf()?.is_empty() {
            return Ok(());
        }

        for document in serde_yaml::Deserializer::from_reader(reader) {
            target.push(T::deserialize(document)?);
        }
        Ok(())
    }
}
