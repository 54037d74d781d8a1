//! JSON codecs (serde_json)

use std::fmt;
use std::io::BufRead;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{Codec, CodecError};

/// Newline-delimited JSON: one record per line, loaded into a `Vec<T>`.
///
/// Blank lines are skipped. An empty file loads nothing and leaves the target
/// untouched.
pub struct JsonLines<T> {
    _record: PhantomData<fn() -> T>,
}

impl<T> JsonLines<T> {
    pub fn new() -> Self {
        Self {
            _record: PhantomData,
        }
    }
}

impl<T> Default for JsonLines<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for JsonLines<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("JsonLines")
    }
}

impl<T: Serialize + DeserializeOwned> Codec for JsonLines<T> {
    type Value = T;
    type Target = Vec<T>;

    fn encode(&self, value: &T) -> Result<Vec<u8>, CodecError> {
        // serde_json escapes newlines inside strings, so one value is one line
        let mut line = serde_json::to_vec(value)?;
        line.push(b'\n');
        Ok(line)
    }

    fn decode(&self, reader: &mut dyn BufRead, target: &mut Vec<T>) -> Result<(), CodecError> {
        let mut line = String::new();
        let mut line_no = 0usize;

        loop {
            line.clear();
            if reader.read_line(&mut line)? == 0 {
                return Ok(());
            }
            line_no += 1;

            if line.trim().is_empty() {
                continue;
            }
            let record = serde_json::from_str(&line)
                .map_err(|e| format!("line {}: {}", line_no, e))?;
            target.push(record);
        }
    }
}

/// A single JSON document per file, loaded into `T`.
///
/// Saving twice produces two concatenated documents, which `load` rejects as
/// trailing characters. An empty file is a decode error.
pub struct JsonDocument<T> {
    _document: PhantomData<fn() -> T>,
}

impl<T> JsonDocument<T> {
    pub fn new() -> Self {
        Self {
            _document: PhantomData,
        }
    }
}

impl<T> Default for JsonDocument<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for JsonDocument<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("JsonDocument")
    }
}

impl<T: Serialize + DeserializeOwned> Codec for JsonDocument<T> {
    type Value = T;
    type Target = T;

    fn encode(&self, value: &T) -> Result<Vec<u8>, CodecError> {
        Ok(serde_json::to_vec(value)?)
    }

    fn decode(&self, reader: &mut dyn BufRead, target: &mut T) -> Result<(), CodecError> {
        *target = serde_json::from_reader(reader)?;
        Ok(())
    }
}
