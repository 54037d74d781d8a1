//! Store options for the create step

use serde::Deserialize;

/// Store configuration
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct StoreOptions {
    /// What `create` does when the file already exists
    #[serde(default)]
    pub create_policy: CreatePolicy,

    /// Create missing parent directories in `create`
    #[serde(default)]
    pub create_parents: bool,
}

impl StoreOptions {
    pub fn with_create_policy(mut self, policy: CreatePolicy) -> Self {
        self.create_policy = policy;
        self
    }

    pub fn with_create_parents(mut self, create_parents: bool) -> Self {
        self.create_parents = create_parents;
        self
    }
}

/// Behavior of `create` on an existing file
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CreatePolicy {
    /// Create, or truncate an existing file to empty (default)
    #[default]
    Truncate,

    /// Fail with `AlreadyExists` if the file is present
    FailIfExists,
}
