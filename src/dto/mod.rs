use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod movies;
pub mod users;

/// Fixed marker returned by operations with no natural result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn success() -> Self {
        Self {
            status: "Success".to_string(),
        }
    }
}
