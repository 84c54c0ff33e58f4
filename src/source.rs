//! The merged key/value source a decode pass reads from.
//!
//! A [`Source`] is a snapshot over two flat string maps: the process
//! environment and the contents of zero or more `.env`-style files. Both are
//! captured once at construction; nothing is re-read mid-pass. Lookup
//! precedence is fixed:
//!
//! 1. Process environment, if the variable is defined at all. A variable
//!    explicitly set to the empty string counts as defined and overrides any
//!    file value or default.
//! 2. The file map, if the key exists there. Later files override earlier
//!    ones key-by-key.
//! 3. The per-field default, if non-empty.
//!
//! Missing files are silently skipped. Any other read or parse failure aborts
//! construction before a single field is touched.

use std::collections::HashMap;
use std::path::Path;

use crate::error::EnvfigError;

/// A read-only, per-decode-pass view over environment variables and
/// file-sourced defaults.
#[derive(Debug, Clone)]
pub struct Source {
    env: HashMap<String, String>,
    file: HashMap<String, String>,
}

impl Source {
    /// Build a source from `.env`-style files plus a snapshot of the current
    /// process environment.
    ///
    /// Files are parsed in order with later files overriding earlier ones.
    /// A file that does not exist is skipped; any other failure (permissions,
    /// malformed line) is returned as [`EnvfigError::FileSource`].
    pub fn from_files<P: AsRef<Path>>(paths: &[P]) -> Result<Self, EnvfigError> {
        let mut file = HashMap::new();
        for path in paths {
            let path = path.as_ref();
            let iter = match dotenvy::from_path_iter(path) {
                Ok(iter) => iter,
                Err(err) if err.not_found() => continue,
                Err(err) => {
                    return Err(EnvfigError::FileSource {
                        path: path.to_path_buf(),
                        source: err,
                    });
                }
            };
            for item in iter {
                let (key, value) = item.map_err(|err| EnvfigError::FileSource {
                    path: path.to_path_buf(),
                    source: err,
                })?;
                file.insert(key, value);
            }
        }

        Ok(Self {
            env: env_snapshot(),
            file,
        })
    }

    /// Build a source from synthetic key/value pairs instead of the real
    /// process environment and filesystem.
    ///
    /// This is the deterministic construction path for tests and for callers
    /// that already hold their mappings in memory.
    pub fn from_parts(
        env: impl IntoIterator<Item = (String, String)>,
        file: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        Self {
            env: env.into_iter().collect(),
            file: file.into_iter().collect(),
        }
    }

    /// Resolve `key` against the merged view.
    ///
    /// Returns `(value, present)`. `present` is true when the environment
    /// defines the key, when the file map contains it, or when a non-empty
    /// `default` stands in for it. With no hit and an empty default the
    /// result is `("", false)`.
    pub fn get(&self, key: &str, default: &str) -> (String, bool) {
        if let Some(value) = self.env.get(key) {
            return (value.clone(), true);
        }
        if let Some(value) = self.file.get(key) {
            return (value.clone(), true);
        }
        (default.to_string(), !default.is_empty())
    }
}

/// Snapshot the process environment into an owned map.
///
/// Variables whose name or value is not valid UTF-8 are skipped rather than
/// aborting the pass.
fn env_snapshot() -> HashMap<String, String> {
    std::env::vars_os()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
        .collect()
}
