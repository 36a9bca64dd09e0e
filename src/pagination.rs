//! Pagination query parsing and listing meta.

use crate::error::AppError;
use serde::Serialize;
use std::collections::HashMap;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PER_PAGE: i64 = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    /// Never above the configured maximum.
    pub per_page: u32,
}

impl Pagination {
    /// Reads `page` and `per_page`. Missing, non-positive, or unparsable values take the defaults;
    /// `per_page` above `max_per_page` is rejected.
    pub fn from_query(params: &HashMap<String, String>, max_per_page: u32) -> Result<Self, AppError> {
        let page = positive_or(params.get("page"), DEFAULT_PAGE);
        let per_page = positive_or(params.get("per_page"), DEFAULT_PER_PAGE);
        match u32::try_from(per_page) {
            Ok(per_page) if per_page <= max_per_page => Ok(Pagination { page, per_page }),
            _ => Err(AppError::PerPageTooLarge {
                requested: per_page,
                max_per_page,
            }),
        }
    }

    pub fn meta(&self, total: i64) -> PageMeta {
        PageMeta {
            page: self.page,
            per_page: self.per_page,
            total,
            total_pages: total_pages(total, self.per_page),
        }
    }
}

/// Strict integer parse: surrounding whitespace or values outside `i64` take the default.
fn positive_or(value: Option<&String>, default: i64) -> i64 {
    value
        .and_then(|v| v.parse::<i64>().ok())
        .filter(|n| *n >= 1)
        .unwrap_or(default)
}

/// `ceil(total / per_page)`, 0 when there is nothing to page.
pub fn total_pages(total: i64, per_page: u32) -> i64 {
    if total <= 0 || per_page == 0 {
        return 0;
    }
    let per_page = i64::from(per_page);
    (total + per_page - 1) / per_page
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PageMeta {
    pub page: i64,
    pub per_page: u32,
    pub total: i64,
    pub total_pages: i64,
}
