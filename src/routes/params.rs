use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Closed set of sortable customer-summary fields. Anything else in `sortBy`
/// is rejected when the query string is parsed.
#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum CustomerSortBy {
    Name,
    Email,
    Status,
    Revenue,
    OrderCount,
    LastOrderDate,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CustomerListQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    #[serde(rename = "sortBy")]
    pub sort_by: Option<CustomerSortBy>,
    pub order: Option<SortOrder>,
    pub search: Option<String>,
}

impl CustomerListQuery {
    pub fn normalize_pagination(&self) -> (i64, i64, i64) {
        let page = self.page.unwrap_or(1).max(1);
        let limit = self.limit.unwrap_or(10).clamp(1, 100);
        let offset = (page - 1) * limit;
        (page, limit, offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_clamps_page_and_limit() {
        let query = CustomerListQuery {
            page: Some(0),
            limit: Some(500),
            ..Default::default()
        };
        assert_eq!(query.normalize_pagination(), (1, 100, 0));

        let defaults = CustomerListQuery::default();
        assert_eq!(defaults.normalize_pagination(), (1, 10, 0));

        let third_page = CustomerListQuery {
            page: Some(3),
            limit: Some(5),
            ..Default::default()
        };
        assert_eq!(third_page.normalize_pagination(), (3, 5, 10));
    }

    #[test]
    fn sort_by_rejects_unknown_keys() {
        assert!(serde_json::from_str::<CustomerSortBy>("\"revenue\"").is_ok());
        assert!(serde_json::from_str::<CustomerSortBy>("\"orderCount\"").is_ok());
        assert!(serde_json::from_str::<CustomerSortBy>("\"__proto__\"").is_err());
    }
}
