use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};

use super::{Job, RepoStore, SatisError};
use crate::types::Repo;

/// Cloneable handle that queues jobs for the [`super::JobProcessor`].
#[derive(Clone)]
pub struct SatisClient {
    jobs: mpsc::Sender<Job>,
}

impl SatisClient {
    /// Creates a handle and the receiver the processor should drain.
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<Job>) {
        let (jobs, rx) = mpsc::channel(capacity);
        (Self { jobs }, rx)
    }

    async fn submit<T>(
        &self,
        job: impl FnOnce(oneshot::Sender<Result<T, SatisError>>) -> Job,
    ) -> Result<T, SatisError> {
        let (reply, rx) = oneshot::channel();
        self.jobs
            .send(job(reply))
            .await
            .map_err(|_| SatisError::ProcessorStopped)?;
        rx.await.map_err(|_| SatisError::ProcessorStopped)?
    }
}

#[async_trait]
impl RepoStore for SatisClient {
    async fn find_repo(&self, id: &str) -> Result<Repo, SatisError> {
        let id = id.to_string();
        self.submit(|reply| Job::FindRepo { id, reply }).await
    }

    async fn find_all_repos(&self) -> Result<Vec<Repo>, SatisError> {
        self.submit(|reply| Job::FindAllRepos { reply }).await
    }

    async fn save_repo(&self, repo: Repo, regenerate: bool) -> Result<(), SatisError> {
        self.submit(|reply| Job::SaveRepo {
            repo,
            regenerate,
            reply,
        })
        .await
    }

    async fn delete_repo(&self, id: &str, regenerate: bool) -> Result<(), SatisError> {
        let id = id.to_string();
        self.submit(|reply| Job::DeleteRepo {
            id,
            regenerate,
            reply,
        })
        .await
    }

    async fn generate_static_web(&self) -> Result<(), SatisError> {
        self.submit(|reply| Job::Generate { reply }).await
    }
}
