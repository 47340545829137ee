use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{write_json_file, SatisError};
use crate::types::Repo;

/// On-disk shape of the repo db.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbFile {
    #[serde(default)]
    pub repositories: Vec<Repo>,
}

impl DbFile {
    pub fn find(&self, id: &str) -> Option<&Repo> {
        self.repositories.iter().find(|r| r.id == id)
    }

    /// Replaces the entry with the same id, or appends a new one.
    pub fn upsert(&mut self, repo: Repo) {
        match self.repositories.iter_mut().find(|r| r.id == repo.id) {
            Some(existing) => *existing = repo,
            None => self.repositories.push(repo),
        }
    }

    pub fn remove(&mut self, id: &str) -> Option<Repo> {
        let pos = self.repositories.iter().position(|r| r.id == id)?;
        Some(self.repositories.remove(pos))
    }
}

#[derive(Clone, Debug)]
pub struct RepoDb {
    path: PathBuf,
}

impl RepoDb {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file reads as an empty db.
    pub fn load(&self) -> Result<DbFile, SatisError> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(DbFile::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn save(&self, db: &DbFile) -> Result<(), SatisError> {
        write_json_file(&self.path, db)
    }
}
