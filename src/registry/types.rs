//! Registry API payloads and image references

use serde::{Deserialize, Serialize};
use std::fmt;

/// Body of `GET /v2/_catalog`
///
/// The field is optional so that an absent (or `null`) listing can be told
/// apart from a body that is not a JSON object at all.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogResponse {
    #[serde(default)]
    pub repositories: Option<Vec<String>>,
}

/// Body of `GET /v2/<name>/tags/list`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TagListResponse {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// Fully qualified image location, `<endpoint>/<repository>:<tag>`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageReference {
    pub endpoint: String,
    pub repository: String,
    pub tag: String,
}

impl ImageReference {
    pub fn new(endpoint: &str, repository: &str, tag: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            repository: repository.to_string(),
            tag: tag.to_string(),
        }
    }

    /// Reference in the copy tool's docker transport syntax
    pub fn docker_uri(&self) -> String {
        format!("docker://{}", self)
    }
}

impl fmt::Display for ImageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}:{}", self.endpoint, self.repository, self.tag)
    }
}

/// One unit of replication work
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransferTask {
    pub source: String,
    pub destination: String,
    pub repository: String,
    pub tag: String,
}

impl TransferTask {
    pub fn new(source: &str, destination: &str, repository: &str, tag: &str) -> Self {
        Self {
            source: source.to_string(),
            destination: destination.to_string(),
            repository: repository.to_string(),
            tag: tag.to_string(),
        }
    }

    pub fn source_ref(&self) -> ImageReference {
        ImageReference::new(&self.source, &self.repository, &self.tag)
    }

    pub fn destination_ref(&self) -> ImageReference {
        ImageReference::new(&self.destination, &self.repository, &self.tag)
    }
}

impl fmt::Display for TransferTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.repository, self.tag)
    }
}
