use std::fmt;

use shared::{domain::FoodId, error::ApiException};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to reach catalog service: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("catalog service rejected request with status {status}: {source}")]
    Rejected { status: u16, source: ApiException },
    #[error("catalog service returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("invalid catalog service url: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
    #[error("no food is being edited")]
    NoActiveEdit,
    #[error("food {0} is not in the catalog")]
    UnknownFood(FoodId),
}

impl CatalogError {
    /// HTTP status reported by the service, if the request got that far.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } | Self::Status { status, .. } => Some(*status),
            Self::Transport(err) => err.status().map(|status| status.as_u16()),
            _ => None,
        }
    }
}

/// Which dashboard action a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogOperation {
    Load,
    Create,
    Update,
    Delete,
}

impl fmt::Display for CatalogOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Load => "load",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        };
        f.write_str(name)
    }
}
