use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};

use crate::{
    dto::{
        customers::{CustomerListResponse, UpdateStatusRequest, UpdateStatusResponse},
        orders::{OrderListResponse, UpdateItemSizeRequest, UpdateItemSizeResponse},
    },
    error::AppResult,
    routes::params::CustomerListQuery,
    services::{customer_service, order_service},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_customers).patch(update_customer_status))
        .route(
            "/{id}/orders",
            get(list_customer_orders).patch(update_order_item_size),
        )
}

#[utoipa::path(
    get,
    path = "/customers",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("limit" = Option<i64>, Query, description = "Items per page, default 10"),
        ("sortBy" = Option<String>, Query, description = "Sort field: name, email, status, revenue, orderCount, lastOrderDate"),
        ("order" = Option<String>, Query, description = "Sort order: asc, desc"),
        ("search" = Option<String>, Query, description = "Case-insensitive name/email filter"),
    ),
    responses(
        (status = 200, description = "One page of customer summaries", body = CustomerListResponse),
        (status = 400, description = "Unknown sort field or malformed query"),
    ),
    tag = "Customers"
)]
pub async fn list_customers(
    State(state): State<AppState>,
    Query(query): Query<CustomerListQuery>,
) -> AppResult<Json<CustomerListResponse>> {
    let response = customer_service::list_customers(&state, query).await?;
    Ok(Json(response))
}

#[utoipa::path(
    patch,
    path = "/customers",
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = UpdateStatusResponse),
        (status = 400, description = "Unknown status value"),
        (status = 404, description = "Customer not found"),
    ),
    tag = "Customers"
)]
pub async fn update_customer_status(
    State(state): State<AppState>,
    Json(payload): Json<UpdateStatusRequest>,
) -> AppResult<Json<UpdateStatusResponse>> {
    let response = customer_service::set_customer_status(&state, payload).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/customers/{id}/orders",
    params(
        ("id" = String, Path, description = "Customer ID"),
    ),
    responses(
        (status = 200, description = "The customer's full order history", body = OrderListResponse),
        (status = 404, description = "Customer not found and fallback creation disabled"),
    ),
    tag = "Orders"
)]
pub async fn list_customer_orders(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<OrderListResponse>> {
    let response = order_service::list_customer_orders(&state, &id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    patch,
    path = "/customers/{id}/orders",
    params(
        ("id" = String, Path, description = "Customer ID"),
    ),
    request_body = UpdateItemSizeRequest,
    responses(
        (status = 200, description = "Measurements updated", body = UpdateItemSizeResponse),
        (status = 400, description = "Missing or invalid measurement fields"),
        (status = 404, description = "Customer, order, or item not found"),
    ),
    tag = "Orders"
)]
pub async fn update_order_item_size(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateItemSizeRequest>,
) -> AppResult<Json<UpdateItemSizeResponse>> {
    let response = order_service::set_order_item_size(&state, &id, payload).await?;
    Ok(Json(response))
}
