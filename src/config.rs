use serde::{Deserialize, Serialize};

pub const DEFAULT_COLLECTION: &str = "unified_data";
pub const DEFAULT_FIRESTORE_URL: &str = "https://firestore.googleapis.com";

/// Placeholder key shipped in sample `.env` files.
const DEMO_API_KEY: &str = "demo-api-key";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FirestoreConfig {
    pub api_key: String,
    pub project_id: String,
    pub collection: String,
    pub base_url: String,
}

impl FirestoreConfig {
    /// Both an API key and a project id are set, and the key isn't the demo placeholder.
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty() && !self.project_id.is_empty() && self.api_key != DEMO_API_KEY
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub firestore: FirestoreConfig,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        // Plain names first, then the VITE_ names older deployments use.
        let env = |key: &str, default: &str| -> String {
            std::env::var(key)
                .or_else(|_| std::env::var(format!("VITE_{}", key)))
                .unwrap_or_else(|_| default.to_string())
        };

        Config {
            firestore: FirestoreConfig {
                api_key: env("FIREBASE_API_KEY", ""),
                project_id: env("FIREBASE_PROJECT_ID", ""),
                collection: env("FIREBASE_COLLECTION", DEFAULT_COLLECTION),
                base_url: env("FIRESTORE_BASE_URL", DEFAULT_FIRESTORE_URL)
                    .trim_end_matches('/')
                    .to_string(),
            },
            log_level: env("LOG_LEVEL", "info"),
        }
    }
}
