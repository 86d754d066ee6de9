use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiSpec;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        customers::{CustomerListResponse, UpdateStatusRequest, UpdateStatusResponse},
        orders::{OrderListResponse, SizePayload, UpdateItemSizeRequest, UpdateItemSizeResponse},
    },
    error::ErrorBody,
    models::{CustomSize, Customer, CustomerStatus, CustomerSummary, Order, OrderItem},
    response::PaginationMeta,
    routes::{customers, health, params},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        customers::list_customers,
        customers::update_customer_status,
        customers::list_customer_orders,
        customers::update_order_item_size,
    ),
    components(
        schemas(
            Customer,
            CustomerSummary,
            CustomerStatus,
            CustomSize,
            Order,
            OrderItem,
            CustomerListResponse,
            UpdateStatusRequest,
            UpdateStatusResponse,
            OrderListResponse,
            SizePayload,
            UpdateItemSizeRequest,
            UpdateItemSizeResponse,
            params::CustomerListQuery,
            params::CustomerSortBy,
            params::SortOrder,
            PaginationMeta,
            ErrorBody,
            health::HealthData,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Customers", description = "Customer table endpoints"),
        (name = "Orders", description = "Per-customer order history endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
