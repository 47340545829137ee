use serde::{Deserialize, Deserializer, Serialize};
use sha2::{Digest, Sha256};

/// A package source tracked for inclusion in the generated index.
///
/// `id` is optional on input: create derives it from `repo_type` and `url`,
/// update only uses it to reject a body that names a different repo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repo {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub id: String,
    #[serde(rename = "type")]
    pub repo_type: String,
    pub url: String,
}

impl Repo {
    pub fn new(repo_type: impl Into<String>, url: impl Into<String>) -> Self {
        let repo_type = repo_type.into();
        let url = url.into();
        Self {
            id: derive_repo_id(&repo_type, &url),
            repo_type,
            url,
        }
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Hex SHA-256 over `repo_type`, a NUL separator and `url`.
pub fn derive_repo_id(repo_type: &str, url: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(repo_type.as_bytes());
    hasher.update([0u8]);
    hasher.update(url.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_id_is_stable_across_calls() {
        let a = derive_repo_id("vcs", "https://example.com/a.git");
        let b = derive_repo_id("vcs", "https://example.com/a.git");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn derived_id_depends_on_type_and_url() {
        let base = derive_repo_id("vcs", "https://example.com/a.git");
        assert_ne!(base, derive_repo_id("git", "https://example.com/a.git"));
        assert_ne!(base, derive_repo_id("vcs", "https://example.com/b.git"));
    }

    #[test]
    fn separator_keeps_field_boundaries() {
        assert_ne!(derive_repo_id("ab", "c"), derive_repo_id("a", "bc"));
    }

    #[test]
    fn new_sets_derived_id() {
        let repo = Repo::new("vcs", "https://example.com/a.git");
        assert_eq!(repo.id, derive_repo_id("vcs", "https://example.com/a.git"));
        assert_eq!(repo.repo_type, "vcs");
        assert_eq!(repo.url, "https://example.com/a.git");
    }

    #[test]
    fn serializes_with_type_key() {
        let repo = Repo::new("vcs", "https://example.com/a.git");
        let value = serde_json::to_value(&repo).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": repo.id,
                "type": "vcs",
                "url": "https://example.com/a.git",
            })
        );
    }

    #[test]
    fn id_is_optional_on_input() {
        let repo: Repo =
            serde_json::from_str(r#"{"type":"vcs","url":"https://example.com/a.git"}"#).unwrap();
        assert!(repo.id.is_empty());
    }

    #[test]
    fn null_id_reads_as_empty() {
        let repo: Repo =
            serde_json::from_str(r#"{"id":null,"type":"vcs","url":"https://example.com/a.git"}"#)
                .unwrap();
        assert!(repo.id.is_empty());
    }

    #[test]
    fn type_and_url_are_required() {
        assert!(serde_json::from_str::<Repo>(r#"{"type":"vcs"}"#).is_err());
        assert!(serde_json::from_str::<Repo>(r#"{"url":"https://example.com"}"#).is_err());
    }
}
