use std::sync::OnceLock;

use actix_web::{get, web::Json};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    pub name: String,
    pub version: String,
}

static NAME_AND_VERSION: OnceLock<(String, String)> = OnceLock::new();

/// Records the running binary's package name and version. Call once from
/// `main` with `env!("CARGO_PKG_NAME")` and `env!("CARGO_PKG_VERSION")`.
pub fn set_name_and_version(name: &str, version: &str) {
    let _ = NAME_AND_VERSION.set((name.to_string(), version.to_string()));
}

pub fn load_name_and_version() -> (String, String) {
    NAME_AND_VERSION
        .get()
        .cloned()
        .unwrap_or_else(|| ("unknown".to_string(), "unknown".to_string()))
}

#[get("/health-check")]
pub async fn health_check() -> Json<HealthCheckResponse> {
    let (name, version) = load_name_and_version();
    Json(HealthCheckResponse { name, version })
}
