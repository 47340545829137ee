//! Repo persistence and static web regeneration.
//!
//! Handlers only see [`RepoStore`]. The default implementation is
//! [`SatisClient`], a handle that queues jobs for a single [`JobProcessor`]
//! which owns the db file and runs `satis build`.

mod client;
mod db;
mod error;
mod generator;
#[cfg(test)]
pub mod memory;
mod processor;

use std::fs;
use std::path::Path;

use async_trait::async_trait;
use serde::Serialize;

use crate::types::Repo;

pub use client::SatisClient;
pub use db::{DbFile, RepoDb};
pub use error::SatisError;
pub use generator::Generator;
pub use processor::{Job, JobProcessor};

/// Persists repos and regenerates the static web output.
///
/// `regenerate` asks the store to rebuild the static output after the change
/// has been persisted. A build failure is reported even though the change
/// itself is kept.
#[async_trait]
pub trait RepoStore: Send + Sync {
    async fn find_repo(&self, id: &str) -> Result<Repo, SatisError>;
    async fn find_all_repos(&self) -> Result<Vec<Repo>, SatisError>;
    async fn save_repo(&self, repo: Repo, regenerate: bool) -> Result<(), SatisError>;
    async fn delete_repo(&self, id: &str, regenerate: bool) -> Result<(), SatisError>;
    async fn generate_static_web(&self) -> Result<(), SatisError>;
}

/// Writes `value` as pretty JSON next to `path` and renames it into place.
fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), SatisError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut bytes = serde_json::to_vec_pretty(value)?;
    bytes.push(b'\n');
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, bytes)?;
    fs::rename(&tmp, path)?;
    Ok(())
}
