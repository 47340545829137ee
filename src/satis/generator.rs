use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use serde::{Deserialize, Serialize};

use super::{write_json_file, SatisError};
use crate::types::Repo;

/// Config file handed to `satis build`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SatisConfig {
    pub name: String,
    pub homepage: String,
    pub repositories: Vec<SatisRepository>,
    #[serde(rename = "require-all")]
    pub require_all: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SatisRepository {
    #[serde(rename = "type")]
    pub repo_type: String,
    pub url: String,
}

/// Renders the satis config and runs `{satis_bin} build` into the web dir.
#[derive(Clone, Debug)]
pub struct Generator {
    satis_bin: String,
    config_path: PathBuf,
    web_path: PathBuf,
    name: String,
    homepage: String,
}

impl Generator {
    pub fn new(
        satis_bin: impl Into<String>,
        config_path: impl Into<PathBuf>,
        web_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            satis_bin: satis_bin.into(),
            config_path: config_path.into(),
            web_path: web_path.into(),
            name: String::new(),
            homepage: String::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_homepage(mut self, homepage: impl Into<String>) -> Self {
        self.homepage = homepage.into();
        self
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn render_config(&self, repos: &[Repo]) -> SatisConfig {
        SatisConfig {
            name: self.name.clone(),
            homepage: self.homepage.clone(),
            repositories: repos
                .iter()
                .map(|r| SatisRepository {
                    repo_type: r.repo_type.clone(),
                    url: r.url.clone(),
                })
                .collect(),
            require_all: true,
        }
    }

    pub fn generate(&self, repos: &[Repo]) -> Result<(), SatisError> {
        write_json_file(&self.config_path, &self.render_config(repos))?;
        fs::create_dir_all(&self.web_path)?;

        log::info!(
            "🏗️ Building static web: {} repos -> {}",
            repos.len(),
            self.web_path.display()
        );
        let output = Command::new(&self.satis_bin)
            .arg("build")
            .arg("--no-interaction")
            .arg(&self.config_path)
            .arg(&self.web_path)
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            log::error!("satis build failed ({}): {}", output.status, stderr);
            return Err(SatisError::Build {
                status: output.status.to_string(),
                stderr,
            });
        }

        log::debug!(
            "satis build output: {}",
            String::from_utf8_lossy(&output.stdout).trim()
        );
        Ok(())
    }
}
