//! Length-prefixed binary frames

use std::io::{self, BufRead, Read};

use super::{Codec, CodecError};

const HEADER_LEN: usize = 4;

/// Raw byte records framed as `u32` big-endian length followed by the payload.
///
/// A trailing partial frame (from an interrupted append) fails the load with
/// `io::ErrorKind::UnexpectedEof`; complete frames before it are kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct LengthPrefixed;

impl Codec for LengthPrefixed {
    type Value = [u8];
    type Target = Vec<Vec<u8>>;

    fn encode(&self, value: &[u8]) -> Result<Vec<u8>, CodecError> {
        let len = u32::try_from(value.len()).map_err(|_| {
            format!(
                "record of {} bytes does not fit a u32 length prefix",
                value.len()
            )
        })?;

        let mut frame = Vec::with_capacity(HEADER_LEN + value.len());
        frame.extend_from_slice(&len.to_be_bytes());
        frame.extend_from_slice(value);
        Ok(frame)
    }

    fn decode(&self, reader: &mut dyn BufRead, target: &mut Vec<Vec<u8>>) -> Result<(), CodecError> {
        loop {
            if reader.fill_buf()?.is_empty() {
                return Ok(());
            }

            let mut header = [0u8; HEADER_LEN];
            reader.read_exact(&mut header)?;
            let len = u32::from_be_bytes(header) as usize;

            // take() bounds the allocation to what the file actually holds
            let mut body = Vec::new();
            Read::take(&mut *reader, len as u64).read_to_end(&mut body)?;
            if body.len() < len {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    format!("frame declares {} bytes, only {} present", len, body.len()),
                )
                .into());
            }
            target.push(body);
        }
    }
}
