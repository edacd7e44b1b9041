//! Level Endpoints

use reqwest::Method;

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{Level, LevelDraft};

const LEVELS: &str = "/clients/levels/";

fn level_path(id: u32) -> String {
    format!("{}{}/", LEVELS, id)
}

impl ApiClient {
    pub async fn fetch_levels(&self) -> Result<Vec<Level>, ApiError> {
        self.get_json(LEVELS).await
    }

    pub async fn create_level(&self, draft: &LevelDraft) -> Result<(), ApiError> {
        self.send_json(Method::POST, LEVELS, draft).await
    }

    pub async fn update_level(&self, id: u32, draft: &LevelDraft) -> Result<(), ApiError> {
        self.send_json(Method::PATCH, &level_path(id), draft).await
    }

    /// Fails with a 4xx while structures still use the level
    pub async fn delete_level(&self, id: u32) -> Result<(), ApiError> {
        self.delete(&level_path(id)).await
    }
}
