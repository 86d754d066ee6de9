use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub seed_customers: usize,
    pub data_seed: Option<u64>,
    pub allow_fallback_creation: bool,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let seed_customers = env::var("SEED_CUSTOMERS")
            .ok()
            .and_then(|n| n.parse::<usize>().ok())
            .unwrap_or(50);
        let data_seed = env::var("DATA_SEED")
            .ok()
            .and_then(|s| s.parse::<u64>().ok());
        let allow_fallback_creation = env::var("ALLOW_FALLBACK_CREATION")
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(true);
        Ok(Self {
            host,
            port,
            seed_customers,
            data_seed,
            allow_fallback_creation,
        })
    }
}
