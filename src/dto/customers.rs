use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{CustomerStatus, CustomerSummary};
use crate::response::PaginationMeta;

#[derive(Debug, Serialize, ToSchema)]
pub struct CustomerListResponse {
    pub customers: Vec<CustomerSummary>,
    pub pagination: PaginationMeta,
}

/// Status is carried as a raw string here; the service decides whether it
/// names a known status.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusRequest {
    pub customer_id: String,
    pub status: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusResponse {
    pub message: String,
    pub customer_id: String,
    pub new_status: CustomerStatus,
}
