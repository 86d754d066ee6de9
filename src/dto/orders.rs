use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Order, OrderItem};

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderListResponse {
    pub orders: Vec<Order>,
}

/// Measurement fields arrive as optionals so a missing field surfaces as a
/// 400 from validation rather than a deserialization rejection.
#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
pub struct SizePayload {
    pub chest: Option<f64>,
    pub waist: Option<f64>,
    pub hips: Option<f64>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemSizeRequest {
    pub order_id: String,
    pub order_item_id: String,
    pub custom_size: SizePayload,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemSizeResponse {
    pub message: String,
    pub updated_item: OrderItem,
}
