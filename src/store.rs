use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::generator;
use crate::models::{CustomSize, Customer, CustomerStatus};

/// Process-wide collection of customers, each owning its full order graph.
///
/// Cloning the store clones the handle; all clones share the same collection.
/// Mutations hold the write lock across the whole find-and-mutate sequence so
/// concurrent requests cannot lose updates.
#[derive(Clone)]
pub struct CustomerStore {
    customers: Arc<RwLock<Vec<Customer>>>,
    seed: u64,
    allow_fallback_creation: bool,
}

impl CustomerStore {
    /// Build a store populated with `count` generated customers.
    pub fn new(count: usize, seed: u64, allow_fallback_creation: bool) -> Self {
        let customers = generator::generate_customers(count, seed, Utc::now());
        Self {
            customers: Arc::new(RwLock::new(customers)),
            seed,
            allow_fallback_creation,
        }
    }

    /// Build a store over a fixed collection.
    pub fn with_customers(
        customers: Vec<Customer>,
        seed: u64,
        allow_fallback_creation: bool,
    ) -> Self {
        Self {
            customers: Arc::new(RwLock::new(customers)),
            seed,
            allow_fallback_creation,
        }
    }

    pub async fn customer_count(&self) -> usize {
        self.customers.read().await.len()
    }

    /// Snapshot of the live collection.
    pub async fn list_all(&self) -> Vec<Customer> {
        self.customers.read().await.clone()
    }

    pub async fn find_by_id(&self, id: &str) -> Option<Customer> {
        self.customers
            .read()
            .await
            .iter()
            .find(|c| c.id == id)
            .cloned()
    }

    /// Look a customer up, synthesizing one on a miss when fallback creation
    /// is enabled. The dashboard may hold ids from before a restart wiped the
    /// collection; the fallback keeps those links working. Returns `None`
    /// only when the id is unknown and fallback creation is off.
    pub async fn get_or_create(&self, id: &str) -> Option<Customer> {
        if let Some(existing) = self.find_by_id(id).await {
            return Some(existing);
        }
        if !self.allow_fallback_creation {
            return None;
        }

        let mut customers = self.customers.write().await;
        // Re-check under the write lock; a racing request may have inserted.
        if let Some(existing) = customers.iter().find(|c| c.id == id) {
            return Some(existing.clone());
        }

        let customer = generator::generate_fallback_customer(id, self.seed, Utc::now());
        tracing::info!(customer_id = %id, "synthesized fallback customer");
        customers.push(customer.clone());
        Some(customer)
    }

    /// Set a customer's status in place. Returns false when the id is
    /// unknown. Status validity is the caller's concern.
    pub async fn update_status(&self, id: &str, status: CustomerStatus) -> bool {
        let mut customers = self.customers.write().await;
        match customers.iter_mut().find(|c| c.id == id) {
            Some(customer) => {
                customer.status = status;
                true
            }
            None => false,
        }
    }

    /// Replace the measurements on one order item, walking customer → order
    /// → item. Returns false at the first missing link. Prices and order
    /// totals are left untouched.
    pub async fn update_order_item_size(
        &self,
        customer_id: &str,
        order_id: &str,
        order_item_id: &str,
        size: CustomSize,
    ) -> bool {
        let mut customers = self.customers.write().await;
        let Some(customer) = customers.iter_mut().find(|c| c.id == customer_id) else {
            return false;
        };
        let Some(order) = customer.orders.iter_mut().find(|o| o.order_id == order_id) else {
            return false;
        };
        let Some(item) = order
            .items
            .iter_mut()
            .find(|i| i.order_item_id == order_item_id)
        else {
            return false;
        };
        item.custom_size = size;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_store(allow_fallback: bool) -> CustomerStore {
        CustomerStore::new(8, 11, allow_fallback)
    }

    #[tokio::test]
    async fn find_by_id_returns_generated_customers() {
        let store = seeded_store(true);
        let all = store.list_all().await;
        assert_eq!(all.len(), 8);

        let found = store.find_by_id(&all[0].id).await;
        assert_eq!(found.map(|c| c.id), Some(all[0].id.clone()));
        assert!(store.find_by_id("cust-missing").await.is_none());
    }

    #[tokio::test]
    async fn update_status_mutates_in_place() {
        let store = seeded_store(true);
        let id = store.list_all().await[0].id.clone();

        assert!(store.update_status(&id, CustomerStatus::Churned).await);
        let customer = store.find_by_id(&id).await.unwrap();
        assert_eq!(customer.status, CustomerStatus::Churned);

        assert!(!store.update_status("cust-missing", CustomerStatus::Active).await);
    }

    #[tokio::test]
    async fn get_or_create_inserts_once_for_unknown_id() {
        let store = seeded_store(true);
        let before = store.customer_count().await;

        let first = store.get_or_create("cust-from-old-session").await.unwrap();
        let second = store.get_or_create("cust-from-old-session").await.unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(first.revenue, second.revenue);
        assert_eq!(store.customer_count().await, before + 1);
    }

    #[tokio::test]
    async fn get_or_create_respects_disabled_fallback() {
        let store = seeded_store(false);
        let before = store.customer_count().await;

        assert!(store.get_or_create("cust-unknown").await.is_none());
        assert_eq!(store.customer_count().await, before);

        // Known ids still resolve.
        let id = store.list_all().await[0].id.clone();
        assert!(store.get_or_create(&id).await.is_some());
    }

    #[tokio::test]
    async fn update_order_item_size_touches_exactly_one_item() {
        let store = seeded_store(true);
        let customer = store
            .list_all()
            .await
            .into_iter()
            .find(|c| !c.orders.is_empty())
            .expect("seeded store should contain a customer with orders");
        let order = customer.orders[0].clone();
        let item = order.items[0].clone();

        let size = CustomSize {
            chest: 101.5,
            waist: 86.0,
            hips: 99.0,
        };
        assert!(
            store
                .update_order_item_size(&customer.id, &order.order_id, &item.order_item_id, size)
                .await
        );

        let after = store.find_by_id(&customer.id).await.unwrap();
        let after_order = after
            .orders
            .iter()
            .find(|o| o.order_id == order.order_id)
            .unwrap();
        let after_item = after_order
            .items
            .iter()
            .find(|i| i.order_item_id == item.order_item_id)
            .unwrap();

        assert_eq!(after_item.custom_size, size);
        assert_eq!(after_item.price, item.price);
        assert_eq!(after_item.item_name, item.item_name);
        assert_eq!(after_order.total_amount, order.total_amount);
        assert_eq!(after.revenue, customer.revenue);

        // Siblings untouched.
        for (before_item, after_item) in order.items.iter().zip(&after_order.items).skip(1) {
            assert_eq!(before_item.custom_size, after_item.custom_size);
        }
    }

    #[tokio::test]
    async fn update_order_item_size_fails_on_any_broken_link() {
        let store = seeded_store(true);
        let customer = store
            .list_all()
            .await
            .into_iter()
            .find(|c| !c.orders.is_empty())
            .unwrap();
        let order_id = customer.orders[0].order_id.clone();
        let item_id = customer.orders[0].items[0].order_item_id.clone();
        let size = CustomSize {
            chest: 100.0,
            waist: 80.0,
            hips: 95.0,
        };

        assert!(
            !store
                .update_order_item_size("cust-missing", &order_id, &item_id, size)
                .await
        );
        assert!(
            !store
                .update_order_item_size(&customer.id, "ord-missing", &item_id, size)
                .await
        );
        assert!(
            !store
                .update_order_item_size(&customer.id, &order_id, "itm-missing", size)
                .await
        );
    }
}
