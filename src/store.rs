//! FileStore - one file, one codec, one lock
//!
//! `save` appends one encoded record; `load` hands the whole file to the
//! codec. Both hold the store's mutex for the full call, so at most one of
//! them runs at a time per instance. `create` is unguarded and is expected to
//! run before the store is shared.
//!
//! No handle is kept between calls: every operation opens the file and drops
//! it on all exit paths.

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use tracing::{debug, trace};

use crate::codec::{Codec, CodecError, FnCodec};
use crate::error::{Result, StoreError};
use crate::options::{CreatePolicy, StoreOptions};

/// File-backed store with a pluggable codec
pub struct FileStore<C> {
    path: PathBuf,
    codec: C,
    options: StoreOptions,
    lock: Mutex<()>,
}

impl<C: Codec> FileStore<C> {
    /// Bind a path to a codec (no I/O happens here)
    pub fn new(path: impl Into<PathBuf>, codec: C) -> Self {
        Self::with_options(path, codec, StoreOptions::default())
    }

    pub fn with_options(path: impl Into<PathBuf>, codec: C, options: StoreOptions) -> Self {
        Self {
            path: path.into(),
            codec,
            options,
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }

    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    /// Create the backing file, empty.
    ///
    /// With `CreatePolicy::Truncate` an existing file is emptied; with
    /// `CreatePolicy::FailIfExists` it is left alone and `AlreadyExists` is
    /// returned. Not serialized with `save`/`load`.
    pub fn create(&self) -> Result<()> {
        if self.options.create_parents {
            if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
        }

        let mut open = OpenOptions::new();
        open.write(true);
        match self.options.create_policy {
            CreatePolicy::Truncate => open.create(true).truncate(true),
            CreatePolicy::FailIfExists => open.create_new(true),
        };

        // Handle closes at end of scope
        let _file = open.open(&self.path)?;

        debug!(
            path = %self.path.display(),
            policy = ?self.options.create_policy,
            "store file created"
        );
        Ok(())
    }

    /// Append one encoded record.
    ///
    /// The file must already exist. If encoding fails nothing is written.
    pub fn save(&self, value: &C::Value) -> Result<()> {
        let _guard = self.lock.lock();
        trace!(path = %self.path.display(), "save lock acquired");

        let mut file = OpenOptions::new().append(true).open(&self.path)?;
        let record = self.codec.encode(value).map_err(StoreError::Encode)?;

        // io::copy loops until the whole record is written or errors (WriteZero on short writes)
        let written = io::copy(&mut record.as_slice(), &mut file)?;

        debug!(path = %self.path.display(), bytes = written, "record appended");
        Ok(())
    }

    /// Decode the whole file into `target`.
    ///
    /// Empty-file and partial-record behavior is whatever the codec defines.
    pub fn load(&self, target: &mut C::Target) -> Result<()> {
        let _guard = self.lock.lock();
        trace!(path = %self.path.display(), "load lock acquired");

        let file = File::open(&self.path)?;
        let mut reader = BufReader::new(file);
        self.codec
            .decode(&mut reader, target)
            .map_err(StoreError::Decode)?;

        debug!(path = %self.path.display(), "store loaded");
        Ok(())
    }
}

impl<V: ?Sized, T: ?Sized, E, D> FileStore<FnCodec<V, T, E, D>>
where
    E: Fn(&V) -> std::result::Result<Vec<u8>, CodecError>,
    D: Fn(&mut dyn BufRead, &mut T) -> std::result::Result<(), CodecError>,
{
    /// Build a store from a plain encode function and decode function
    pub fn from_fns(path: impl Into<PathBuf>, encode: E, decode: D) -> Self {
        Self::new(path, FnCodec::new(encode, decode))
    }
}

impl<C: fmt::Debug> fmt::Debug for FileStore<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileStore")
            .field("path", &self.path)
            .field("codec", &self.codec)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
