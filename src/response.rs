use serde::Serialize;
use utoipa::ToSchema;

/// Pagination block attached to list responses. Field names are part of the
/// dashboard contract.
#[derive(Debug, Serialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub current_page: i64,
    pub total_pages: i64,
    pub total_items: i64,
    pub items_per_page: i64,
}

impl PaginationMeta {
    pub fn new(current_page: i64, items_per_page: i64, total_items: i64) -> Self {
        Self {
            current_page,
            total_pages: (total_items as u64).div_ceil(items_per_page as u64) as i64,
            total_items,
            items_per_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(PaginationMeta::new(1, 5, 12).total_pages, 3);
        assert_eq!(PaginationMeta::new(1, 5, 10).total_pages, 2);
        assert_eq!(PaginationMeta::new(1, 5, 0).total_pages, 0);
    }
}
