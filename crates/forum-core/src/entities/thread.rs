//! Thread entity - top-level discussion post

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use super::payload::{require_present, required_strings};
use crate::error::{DomainResult, Operation};

/// Stored thread row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thread {
    pub id: String,
    pub title: String,
    pub body: String,
    pub owner: String,
    pub date: DateTime<Utc>,
}

/// Validated input for creating a thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateThread {
    pub title: String,
    pub body: String,
    pub owner: String,
}

impl CreateThread {
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        owner: impl Into<String>,
    ) -> DomainResult<Self> {
        let (title, body, owner) = (title.into(), body.into(), owner.into());
        require_present(
            Operation::CreateThread,
            &[title.as_str(), body.as_str(), owner.as_str()],
        )?;
        Ok(Self { title, body, owner })
    }

    /// Parse from an untyped JSON payload (`title`, `body`, `owner`)
    pub fn from_payload(payload: &Value) -> DomainResult<Self> {
        let [title, body, owner] =
            required_strings(payload, Operation::CreateThread, ["title", "body", "owner"])?;
        Ok(Self { title, body, owner })
    }
}

/// Result of a successful thread insert
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedThread {
    pub id: String,
    pub title: String,
    pub owner: String,
}

impl CreatedThread {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        owner: impl Into<String>,
    ) -> DomainResult<Self> {
        let (id, title, owner) = (id.into(), title.into(), owner.into());
        require_present(
            Operation::CreatedThread,
            &[id.as_str(), title.as_str(), owner.as_str()],
        )?;
        Ok(Self { id, title, owner })
    }

    pub fn from_payload(payload: &Value) -> DomainResult<Self> {
        let [id, title, owner] =
            required_strings(payload, Operation::CreatedThread, ["id", "title", "owner"])?;
        Ok(Self { id, title, owner })
    }
}
