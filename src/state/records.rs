use super::pagination::PaginationState;
use crate::api::ApiError;
use crate::models::{Declaration, DeclarationsResponse};

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const PAGE_SIZES: [u32; 3] = [10, 25, 50];

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load declarations";

/// Identifies a single load so late responses can be recognised
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadRequest {
    pub ticket: u64,
    pub page: u32,
    pub limit: u32,
}

/// State behind the records table
#[derive(Debug, Clone, PartialEq)]
pub struct RecordsState {
    declarations: Vec<Declaration>,
    pagination: PaginationState,
    loading: bool,
    error: Option<String>,
    latest_ticket: u64,
}

impl Default for RecordsState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl RecordsState {
    pub fn new(limit: u32) -> Self {
        Self {
            declarations: Vec::new(),
            pagination: PaginationState::new(limit),
            // The first load starts as soon as the table mounts
            loading: true,
            error: None,
            latest_ticket: 0,
        }
    }

    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    pub fn pagination(&self) -> PaginationState {
        self.pagination
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The `(page, limit)` pair a load depends on
    pub fn query(&self) -> (u32, u32) {
        (self.pagination.page, self.pagination.limit)
    }

    /// Start a load for the current page. Any load still in flight is
    /// superseded.
    pub fn begin_load(&mut self) -> LoadRequest {
        self.latest_ticket += 1;
        self.loading = true;
        LoadRequest {
            ticket: self.latest_ticket,
            page: self.pagination.page,
            limit: self.pagination.limit,
        }
    }

    /// Apply the outcome of a load. Returns false when the response was
    /// stale and has been dropped.
    pub fn finish_load(
        &mut self,
        request: LoadRequest,
        result: Result<DeclarationsResponse, ApiError>,
    ) -> bool {
        if request.ticket != self.latest_ticket {
            return false;
        }
        self.loading = false;
        match result {
            Ok(response) => {
                self.declarations = response.data;
                self.pagination.set_total(response.total);
                self.error = None;
            }
            Err(_) => {
                self.error = Some(LOAD_FAILED_MESSAGE.to_string());
            }
        }
        true
    }

    pub fn go_to_page(&mut self, page: u32) -> bool {
        self.pagination.go_to_page(page)
    }

    pub fn set_limit(&mut self, limit: u32) -> bool {
        self.pagination.set_limit(limit)
    }
}
