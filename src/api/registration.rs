// frontend_medilink/src/api/registration.rs
use gloo::console::error;
use gloo::net::http::Request;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct RegisteredResponse {
    pub id: String,
}

/// Create a new patient account and return its id
pub async fn register(name: &str, email: &str, password: &str) -> Result<String, String> {
    let api_url = crate::config_file::api_url();
    let register_request = RegisterRequest {
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    };

    let response = Request::post(&format!("{}/api/patients/register", api_url))
        .header("Content-Type", "application/json")
        .json(&register_request)
        .map_err(|e| format!("Failed to create request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if response.ok() {
        let registered: RegisteredResponse = response
            .json()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))?;

        Ok(registered.id)
    } else {
        let error_msg = format!("Registration failed: {}", response.status());
        error!(&error_msg);
        Err(error_msg)
    }
}
