use crate::store::CustomerStore;

#[derive(Clone)]
pub struct AppState {
    pub store: CustomerStore,
}
