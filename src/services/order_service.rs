use crate::{
    dto::orders::{
        OrderListResponse, SizePayload, UpdateItemSizeRequest, UpdateItemSizeResponse,
    },
    error::{AppError, AppResult},
    models::CustomSize,
    state::AppState,
};

/// Full order graph for one customer, items and measurements included.
pub async fn list_customer_orders(
    state: &AppState,
    customer_id: &str,
) -> AppResult<OrderListResponse> {
    let customer = state
        .store
        .get_or_create(customer_id)
        .await
        .ok_or(AppError::NotFound)?;

    Ok(OrderListResponse {
        orders: customer.orders,
    })
}

pub async fn set_order_item_size(
    state: &AppState,
    customer_id: &str,
    payload: UpdateItemSizeRequest,
) -> AppResult<UpdateItemSizeResponse> {
    let size = validate_size(&payload.custom_size)?;

    let updated = state
        .store
        .update_order_item_size(
            customer_id,
            &payload.order_id,
            &payload.order_item_id,
            size,
        )
        .await;
    if !updated {
        return Err(AppError::NotFound);
    }

    // Read the item back so the caller sees exactly what was stored.
    let customer = state
        .store
        .find_by_id(customer_id)
        .await
        .ok_or(AppError::NotFound)?;
    let updated_item = customer
        .orders
        .iter()
        .find(|o| o.order_id == payload.order_id)
        .and_then(|o| {
            o.items
                .iter()
                .find(|i| i.order_item_id == payload.order_item_id)
        })
        .cloned()
        .ok_or(AppError::NotFound)?;

    tracing::info!(
        customer_id = %customer_id,
        order_id = %payload.order_id,
        order_item_id = %payload.order_item_id,
        "order item measurements updated"
    );

    Ok(UpdateItemSizeResponse {
        message: "Measurements updated".into(),
        updated_item,
    })
}

fn validate_size(payload: &SizePayload) -> AppResult<CustomSize> {
    let (Some(chest), Some(waist), Some(hips)) = (payload.chest, payload.waist, payload.hips)
    else {
        return Err(AppError::BadRequest(
            "customSize requires chest, waist and hips".into(),
        ));
    };

    let size = CustomSize { chest, waist, hips };
    if !size.is_valid() {
        return Err(AppError::BadRequest(
            "customSize fields must be finite non-negative numbers".into(),
        ));
    }
    Ok(size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_size_requires_every_field() {
        let missing = SizePayload {
            chest: Some(100.0),
            waist: None,
            hips: Some(95.0),
        };
        assert!(matches!(
            validate_size(&missing),
            Err(AppError::BadRequest(_))
        ));

        let negative = SizePayload {
            chest: Some(100.0),
            waist: Some(-2.0),
            hips: Some(95.0),
        };
        assert!(matches!(
            validate_size(&negative),
            Err(AppError::BadRequest(_))
        ));

        let complete = SizePayload {
            chest: Some(100.0),
            waist: Some(82.0),
            hips: Some(95.0),
        };
        let size = validate_size(&complete).unwrap();
        assert_eq!(size.waist, 82.0);
    }
}
