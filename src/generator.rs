use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hash::{DefaultHasher, Hash, Hasher};
use uuid::Uuid;

use crate::models::{CustomSize, Customer, CustomerStatus, Order, OrderItem};

// Garment vocabulary the mock orders draw from.
const GARMENTS: &[(&str, &str)] = &[
    ("Two-Piece Suit", "Suiting"),
    ("Three-Piece Suit", "Suiting"),
    ("Blazer", "Suiting"),
    ("Dress Shirt", "Shirting"),
    ("Oxford Shirt", "Shirting"),
    ("Linen Shirt", "Shirting"),
    ("Wool Trousers", "Trousers"),
    ("Flannel Trousers", "Trousers"),
    ("Waistcoat", "Formalwear"),
    ("Dinner Jacket", "Formalwear"),
    ("Overcoat", "Outerwear"),
    ("Trench Coat", "Outerwear"),
];

const FIRST_NAMES: &[&str] = &[
    "Amelia", "Arthur", "Beatrice", "Charles", "Dorothy", "Edmund", "Florence", "George", "Harriet",
    "Isaac", "Josephine", "Leonard", "Margaret", "Nathaniel", "Olivia", "Percival", "Rosalind",
    "Sebastian", "Theodora", "Vincent",
];

const LAST_NAMES: &[&str] = &[
    "Ashworth", "Blackwell", "Carmichael", "Davenport", "Ellsworth", "Fairfax", "Galloway",
    "Harrington", "Kingsley", "Lockhart", "Montgomery", "Pemberton", "Radcliffe", "Sinclair",
    "Whitfield",
];

/// Generate the startup population. All randomness flows from `seed`, so the
/// same seed reproduces the same collection.
pub fn generate_customers(count: usize, seed: u64, now: DateTime<Utc>) -> Vec<Customer> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let first = FIRST_NAMES[rng.random_range(0..FIRST_NAMES.len())];
            let last = LAST_NAMES[rng.random_range(0..LAST_NAMES.len())];
            let name = format!("{first} {last}");
            let email = format!(
                "{}.{}@example.com",
                first.to_lowercase(),
                last.to_lowercase()
            );
            let id = format!("cust-{}", Uuid::from_u128(rng.random::<u128>()));
            generate_customer(&mut rng, id, name, email, now)
        })
        .collect()
}

/// Synthesize a customer for an id the store has never seen. Seeded from the
/// id itself (mixed with the store seed), so repeated misses for the same id
/// produce the same customer.
pub fn generate_fallback_customer(id: &str, store_seed: u64, now: DateTime<Utc>) -> Customer {
    let mut hasher = DefaultHasher::new();
    id.hash(&mut hasher);
    let mut rng = StdRng::seed_from_u64(hasher.finish() ^ store_seed);

    let name = format!("Customer {id}");
    let email = format!("{}@example.com", id.to_lowercase().replace(' ', "-"));
    generate_customer(&mut rng, id.to_string(), name, email, now)
}

fn generate_customer(
    rng: &mut StdRng,
    id: String,
    name: String,
    email: String,
    now: DateTime<Utc>,
) -> Customer {
    let status = CustomerStatus::ALL[rng.random_range(0..CustomerStatus::ALL.len())];

    let order_count = rng.random_range(0..=10);
    let mut orders: Vec<Order> = (0..order_count).map(|_| generate_order(rng, now)).collect();
    orders.sort_by_key(|order| order.order_date);

    let revenue = orders.iter().map(|o| o.total_amount).sum();
    let last_order_date = orders.last().map(|o| o.order_date);

    Customer {
        id,
        name,
        email,
        status,
        revenue,
        order_count: orders.len() as i64,
        last_order_date,
        orders,
    }
}

fn generate_order(rng: &mut StdRng, now: DateTime<Utc>) -> Order {
    let order_date = now - Duration::days(rng.random_range(1..=365));

    let item_count = rng.random_range(1..=5);
    let items: Vec<OrderItem> = (0..item_count)
        .map(|_| {
            let (item_name, category) = GARMENTS[rng.random_range(0..GARMENTS.len())];
            OrderItem {
                order_item_id: format!("itm-{}", Uuid::from_u128(rng.random::<u128>())),
                item_name: item_name.to_string(),
                category: category.to_string(),
                price: rng.random_range(100..=1000),
                custom_size: CustomSize {
                    chest: rng.random_range(85..=125) as f64,
                    waist: rng.random_range(70..=110) as f64,
                    hips: rng.random_range(85..=120) as f64,
                },
            }
        })
        .collect();

    Order {
        order_id: format!("ord-{}", Uuid::from_u128(rng.random::<u128>())),
        order_date,
        total_amount: items.iter().map(|i| i.price).sum(),
        items,
    }
}
