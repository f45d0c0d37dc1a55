use gloo::console::error;
use gloo::net::http::Request;
use gloo::storage::{LocalStorage, Storage};
use serde::Deserialize;

const API_URL_KEY: &str = "api_url";
const CONFIG_PATH: &str = "/config/config.json";

#[derive(Debug, Deserialize)]
pub struct FrontendConfig {
    pub api_url: String,
}

/// Fetch the runtime config and cache it in localStorage
pub async fn load_config() {
    let response = match Request::get(CONFIG_PATH).send().await {
        Ok(response) => response,
        Err(e) => {
            error!(format!("Failed to fetch {}: {:?}", CONFIG_PATH, e));
            return;
        }
    };

    match response.json::<FrontendConfig>().await {
        Ok(config) => {
            LocalStorage::set(API_URL_KEY, config.api_url)
                .expect("failed to write api_url to localStorage");
        }
        Err(e) => {
            error!(format!("Failed to parse {}: {:?}", CONFIG_PATH, e));
        }
    }
}

/// Base URL of the backend API, empty until load_config has run
pub fn api_url() -> String {
    let value = LocalStorage::get::<String>(API_URL_KEY)
        .ok()
        .unwrap_or_default();

    if value.is_empty() {
        error!("api_url requested before config was loaded");
    }

    value
}
