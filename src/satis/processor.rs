use tokio::sync::{mpsc, oneshot};
use tokio_util::sync::CancellationToken;

use super::{DbFile, Generator, RepoDb, SatisError};
use crate::types::Repo;

type Reply<T> = oneshot::Sender<Result<T, SatisError>>;

/// Work queued for the [`JobProcessor`]. Every job answers on its `reply`.
pub enum Job {
    FindRepo {
        id: String,
        reply: Reply<Repo>,
    },
    FindAllRepos {
        reply: Reply<Vec<Repo>>,
    },
    SaveRepo {
        repo: Repo,
        regenerate: bool,
        reply: Reply<()>,
    },
    DeleteRepo {
        id: String,
        regenerate: bool,
        reply: Reply<()>,
    },
    Generate {
        reply: Reply<()>,
    },
}

/// Owns the db and the generator and executes jobs strictly one at a time.
pub struct JobProcessor {
    db: RepoDb,
    generator: Generator,
}

impl JobProcessor {
    pub fn new(db: RepoDb, generator: Generator) -> Self {
        Self { db, generator }
    }

    /// Blocking loop; run it on a blocking thread. Returns once every sender
    /// is dropped or `shutdown` is cancelled.
    pub fn run(self, mut jobs: mpsc::Receiver<Job>, shutdown: CancellationToken) {
        log::info!("⚙️ Job processor started (db {})", self.db.path().display());
        while let Some(job) = jobs.blocking_recv() {
            if shutdown.is_cancelled() {
                log::info!("🛑 Job processor shutdown requested");
                break;
            }
            self.execute(job);
        }
        log::info!("👋 Job processor exited");
    }

    pub fn execute(&self, job: Job) {
        // A dropped receiver only means the caller went away.
        match job {
            Job::FindRepo { id, reply } => {
                let _ = reply.send(self.find_repo(&id));
            }
            Job::FindAllRepos { reply } => {
                let _ = reply.send(self.db.load().map(|db| db.repositories));
            }
            Job::SaveRepo {
                repo,
                regenerate,
                reply,
            } => {
                let _ = reply.send(self.save_repo(repo, regenerate));
            }
            Job::DeleteRepo {
                id,
                regenerate,
                reply,
            } => {
                let _ = reply.send(self.delete_repo(&id, regenerate));
            }
            Job::Generate { reply } => {
                let _ = reply.send(self.db.load().and_then(|db| self.regenerate(&db)));
            }
        }
    }

    fn find_repo(&self, id: &str) -> Result<Repo, SatisError> {
        self.db
            .load()?
            .find(id)
            .cloned()
            .ok_or_else(|| SatisError::RepoNotFound(id.to_string()))
    }

    fn save_repo(&self, repo: Repo, regenerate: bool) -> Result<(), SatisError> {
        let mut db = self.db.load()?;
        log::info!("💾 Saving repo {} ({} {})", repo.id, repo.repo_type, repo.url);
        db.upsert(repo);
        self.db.save(&db)?;

        if regenerate {
            self.regenerate(&db)?;
        }
        Ok(())
    }

    fn delete_repo(&self, id: &str, regenerate: bool) -> Result<(), SatisError> {
        let mut db = self.db.load()?;
        if db.remove(id).is_none() {
            return Err(SatisError::RepoNotFound(id.to_string()));
        }
        log::info!("🗑️ Deleted repo {}", id);
        self.db.save(&db)?;

        if regenerate {
            self.regenerate(&db)?;
        }
        Ok(())
    }

    fn regenerate(&self, db: &DbFile) -> Result<(), SatisError> {
        self.generator.generate(&db.repositories)
    }
}
