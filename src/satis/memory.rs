//! In-memory [`RepoStore`] used by handler and client tests.

use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Arc, RwLock,
};

use async_trait::async_trait;

use super::{DbFile, RepoStore, SatisError};
use crate::types::Repo;

#[derive(Clone, Default)]
pub struct MemoryStore {
    db: Arc<RwLock<DbFile>>,
    fail_builds: Arc<AtomicBool>,
    builds: Arc<AtomicUsize>,
}

impl MemoryStore {
    pub fn with_repo(repo: Repo) -> Self {
        let store = Self::default();
        store.db.write().unwrap().upsert(repo);
        store
    }

    pub fn failing_builds(self) -> Self {
        self.fail_builds.store(true, Ordering::SeqCst);
        self
    }

    pub fn builds(&self) -> usize {
        self.builds.load(Ordering::SeqCst)
    }

    pub fn repos(&self) -> Vec<Repo> {
        self.db.read().unwrap().repositories.clone()
    }

    fn build(&self) -> Result<(), SatisError> {
        if self.fail_builds.load(Ordering::SeqCst) {
            return Err(SatisError::Build {
                status: "exit status: 1".to_string(),
                stderr: "boom".to_string(),
            });
        }
        self.builds.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[async_trait]
impl RepoStore for MemoryStore {
    async fn find_repo(&self, id: &str) -> Result<Repo, SatisError> {
        self.db
            .read()
            .unwrap()
            .find(id)
            .cloned()
            .ok_or_else(|| SatisError::RepoNotFound(id.to_string()))
    }

    async fn find_all_repos(&self) -> Result<Vec<Repo>, SatisError> {
        Ok(self.repos())
    }

    async fn save_repo(&self, repo: Repo, regenerate: bool) -> Result<(), SatisError> {
        self.db.write().unwrap().upsert(repo);
        if regenerate {
            self.build()?;
        }
        Ok(())
    }

    async fn delete_repo(&self, id: &str, regenerate: bool) -> Result<(), SatisError> {
        if self.db.write().unwrap().remove(id).is_none() {
            return Err(SatisError::RepoNotFound(id.to_string()));
        }
        if regenerate {
            self.build()?;
        }
        Ok(())
    }

    async fn generate_static_web(&self) -> Result<(), SatisError> {
        self.build()
    }
}
