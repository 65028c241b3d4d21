use super::client::{ApiClient, ApiError};
use crate::models::{CreateDeclarationRequest, Declaration, DeclarationsResponse};

const DECLARATIONS_PATH: &str = "/api/declarations";

pub const FETCH_FAILED: &str = "Failed to fetch declarations";
pub const CREATE_FAILED: &str = "Failed to create declaration";

impl ApiClient {
    /// Get one page of submitted declarations
    pub async fn fetch_declarations(
        &self,
        page: u32,
        limit: u32,
    ) -> Result<DeclarationsResponse, ApiError> {
        let result = self
            .get(&declarations_query(page, limit), FETCH_FAILED)
            .await;
        if let Err(e) = &result {
            log::error!("Error fetching declarations: {}", e);
        }
        result
    }

    /// Submit a new declaration
    pub async fn create_declaration(
        &self,
        request: &CreateDeclarationRequest,
    ) -> Result<Declaration, ApiError> {
        let result = self.post(DECLARATIONS_PATH, request, CREATE_FAILED).await;
        if let Err(e) = &result {
            log::error!("Error creating declaration: {}", e);
        }
        result
    }
}

fn declarations_query(page: u32, limit: u32) -> String {
    format!("{}?page={}&limit={}", DECLARATIONS_PATH, page, limit)
}
