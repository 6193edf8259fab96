// src/domain/article/status.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Workflow stage of an article. Independent of the publish window and
/// freely changeable; the only side effect lives in `before_save`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArticleStatus {
    New,
    InWork,
    Review,
    Published,
}

/// Entry of the status picker shown to editors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusOption {
    pub status: ArticleStatus,
    pub label: &'static str,
}

impl ArticleStatus {
    pub const ALL: [ArticleStatus; 4] = [
        ArticleStatus::New,
        ArticleStatus::InWork,
        ArticleStatus::Review,
        ArticleStatus::Published,
    ];

    /// Value stored in the `status_id` column.
    pub fn id(self) -> i32 {
        match self {
            ArticleStatus::New => 1,
            ArticleStatus::InWork => 2,
            ArticleStatus::Review => 3,
            ArticleStatus::Published => 4,
        }
    }

    pub fn from_id(id: i32) -> DomainResult<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.id() == id)
            .ok_or_else(|| DomainError::Validation(format!("unknown status id {id}")))
    }

    pub fn label(self) -> &'static str {
        match self {
            ArticleStatus::New => "New",
            ArticleStatus::InWork => "In work",
            ArticleStatus::Review => "Review",
            ArticleStatus::Published => "Published",
        }
    }

    /// Options offered in the editor status picker.
    ///
    /// Review is not listed. Articles may still carry that status, it just
    /// cannot be picked here.
    pub fn options() -> Vec<StatusOption> {
        [
            ArticleStatus::New,
            ArticleStatus::InWork,
            ArticleStatus::Published,
        ]
        .into_iter()
        .map(|status| StatusOption {
            status,
            label: status.label(),
        })
        .collect()
    }
}

impl Default for ArticleStatus {
    fn default() -> Self {
        ArticleStatus::New
    }
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<i32> for ArticleStatus {
    type Error = DomainError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::from_id(value)
    }
}

impl From<ArticleStatus> for i32 {
    fn from(value: ArticleStatus) -> Self {
        value.id()
    }
}
