//! Closure-backed codec

use std::fmt;
use std::io::BufRead;
use std::marker::PhantomData;

use super::{Codec, CodecError};

/// Codec built from two independently supplied functions.
///
/// `V` is the saved value type, `T` the load target type.
pub struct FnCodec<V: ?Sized, T: ?Sized, E, D> {
    encode: E,
    decode: D,
    _types: PhantomData<fn(&V, &mut T)>,
}

impl<V: ?Sized, T: ?Sized, E, D> FnCodec<V, T, E, D>
where
    E: Fn(&V) -> Result<Vec<u8>, CodecError>,
    D: Fn(&mut dyn BufRead, &mut T) -> Result<(), CodecError>,
{
    pub fn new(encode: E, decode: D) -> Self {
        Self {
            encode,
            decode,
            _types: PhantomData,
        }
    }
}

impl<V: ?Sized, T: ?Sized, E, D> Codec for FnCodec<V, T, E, D>
where
    E: Fn(&V) -> Result<Vec<u8>, CodecError>,
    D: Fn(&mut dyn BufRead, &mut T) -> Result<(), CodecError>,
{
    type Value = V;
    type Target = T;

    fn encode(&self, value: &V) -> Result<Vec<u8>, CodecError> {
        (self.encode)(value)
    }

    fn decode(&self, reader: &mut dyn BufRead, target: &mut T) -> Result<(), CodecError> {
        (self.decode)(reader, target)
    }
}

impl<V: ?Sized, T: ?Sized, E, D> fmt::Debug for FnCodec<V, T, E, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnCodec").finish_non_exhaustive()
    }
}
