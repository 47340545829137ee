//! Typed client for the repo HTTP API.

mod helper;

use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use url::Url;

use crate::types::Repo;

use helper::{check_status, read_body_as_entity, request};
pub use helper::ClientError;

#[derive(Serialize)]
struct NewRepo<'a> {
    #[serde(rename = "type")]
    repo_type: &'a str,
    url: &'a str,
}

pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Ok(Self {
            http: Client::new(),
            base_url: Url::parse(base_url)?,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    pub async fn add_repo(&self, repo_type: &str, url: &str) -> Result<Repo, ClientError> {
        let body = NewRepo { repo_type, url };
        let response = request(
            &self.http,
            Method::POST,
            &self.endpoint("/api/repo"),
            Some(&body),
        )
        .await?;
        read_body_as_entity(response, StatusCode::CREATED).await
    }

    pub async fn save_repo(&self, repo: &Repo) -> Result<Repo, ClientError> {
        let url = self.endpoint(&format!("/api/repo/{}", repo.id));
        let response = request(&self.http, Method::PUT, &url, Some(repo)).await?;
        read_body_as_entity(response, StatusCode::OK).await
    }

    pub async fn find_repo(&self, id: &str) -> Result<Repo, ClientError> {
        let url = self.endpoint(&format!("/api/repo/{}", id));
        let response = request(&self.http, Method::GET, &url, None::<&()>).await?;
        read_body_as_entity(response, StatusCode::OK).await
    }

    pub async fn find_all_repos(&self) -> Result<Vec<Repo>, ClientError> {
        let url = self.endpoint("/api/repo");
        let response = request(&self.http, Method::GET, &url, None::<&()>).await?;
        read_body_as_entity(response, StatusCode::OK).await
    }

    pub async fn delete_repo(&self, id: &str) -> Result<(), ClientError> {
        let url = self.endpoint(&format!("/api/repo/{}", id));
        let response = request(&self.http, Method::DELETE, &url, None::<&()>).await?;
        check_status(&response, StatusCode::NO_CONTENT)
    }

    pub async fn generate_static_web(&self) -> Result<(), ClientError> {
        let url = self.endpoint("/api/generate");
        let response = request(&self.http, Method::POST, &url, None::<&()>).await?;
        check_status(&response, StatusCode::CREATED)
    }

    pub async fn update_package(
        &self,
        username: &str,
        api_token: &str,
    ) -> Result<(), ClientError> {
        let url = Url::parse_with_params(
            &self.endpoint("/update-package"),
            &[("username", username), ("apiToken", api_token)],
        )?;
        let response = request(&self.http, Method::GET, url.as_str(), None::<&()>).await?;
        check_status(&response, StatusCode::ACCEPTED)
    }
}
