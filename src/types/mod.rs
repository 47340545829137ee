mod repo;

pub use repo::{derive_repo_id, Repo};
