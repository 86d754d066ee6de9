use std::cmp::Ordering;

use crate::{
    dto::customers::{CustomerListResponse, UpdateStatusRequest, UpdateStatusResponse},
    error::{AppError, AppResult},
    models::{Customer, CustomerStatus, CustomerSummary},
    response::PaginationMeta,
    routes::params::{CustomerListQuery, CustomerSortBy, SortOrder},
    state::AppState,
};

pub async fn list_customers(
    state: &AppState,
    query: CustomerListQuery,
) -> AppResult<CustomerListResponse> {
    let snapshot = state.store.list_all().await;
    let (page, limit, _offset) = query.normalize_pagination();

    let (customers, total_items) = run_query(&snapshot, &query);

    Ok(CustomerListResponse {
        customers,
        pagination: PaginationMeta::new(page, limit, total_items),
    })
}

pub async fn set_customer_status(
    state: &AppState,
    payload: UpdateStatusRequest,
) -> AppResult<UpdateStatusResponse> {
    let status: CustomerStatus = payload
        .status
        .parse()
        .map_err(|_| AppError::BadRequest(format!("unknown status '{}'", payload.status)))?;

    if !state.store.update_status(&payload.customer_id, status).await {
        return Err(AppError::NotFound);
    }

    tracing::info!(customer_id = %payload.customer_id, status = %status, "customer status updated");

    Ok(UpdateStatusResponse {
        message: "Status updated".into(),
        customer_id: payload.customer_id,
        new_status: status,
    })
}

/// Filter, sort, and paginate one snapshot of the collection into a page of
/// summaries plus the filtered (pre-pagination) count.
fn run_query(snapshot: &[Customer], query: &CustomerListQuery) -> (Vec<CustomerSummary>, i64) {
    let mut matches: Vec<&Customer> = match query.search.as_deref().filter(|s| !s.is_empty()) {
        Some(needle) => {
            let needle = needle.to_lowercase();
            snapshot
                .iter()
                .filter(|c| {
                    c.name.to_lowercase().contains(&needle)
                        || c.email.to_lowercase().contains(&needle)
                })
                .collect()
        }
        None => snapshot.iter().collect(),
    };

    // sort_by is stable, so ties keep their input order and repeated queries
    // paginate identically.
    if let Some(sort_by) = query.sort_by {
        let order = query.order.unwrap_or(SortOrder::Asc);
        matches.sort_by(|a, b| compare_customers(a, b, sort_by, order));
    }

    let total_items = matches.len() as i64;
    let (_page, limit, offset) = query.normalize_pagination();
    let customers = matches
        .into_iter()
        .skip(offset as usize)
        .take(limit as usize)
        .map(Customer::summary)
        .collect();

    (customers, total_items)
}

fn compare_customers(
    a: &Customer,
    b: &Customer,
    sort_by: CustomerSortBy,
    order: SortOrder,
) -> Ordering {
    match sort_by {
        CustomerSortBy::Name => directed(order, a.name.to_lowercase().cmp(&b.name.to_lowercase())),
        CustomerSortBy::Email => {
            directed(order, a.email.to_lowercase().cmp(&b.email.to_lowercase()))
        }
        CustomerSortBy::Status => directed(order, a.status.as_str().cmp(b.status.as_str())),
        CustomerSortBy::Revenue => directed(order, a.revenue.cmp(&b.revenue)),
        CustomerSortBy::OrderCount => directed(order, a.order_count.cmp(&b.order_count)),
        // Customers without orders sort last whichever direction is asked for.
        CustomerSortBy::LastOrderDate => match (a.last_order_date, b.last_order_date) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a), Some(b)) => directed(order, a.cmp(&b)),
        },
    }
}

fn directed(order: SortOrder, ordering: Ordering) -> Ordering {
    match order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    }
}
