//! Common test utilities
//!
//! A wiremock backend plus JSON fixtures in the backend's wire format.

#![allow(dead_code)]

use std::sync::Arc;

use cafe_catalog::client::{ApiClient, Config, CredentialStore};
use cafe_catalog::shared::AppConfig;
use serde_json::{json, Value};
use wiremock::MockServer;

pub const ADMIN_TOKEN: &str = "admin-token";

pub async fn mock_backend() -> MockServer {
    MockServer::start().await
}

/// Client pointed at `<server>/api`, backed by `store`
pub fn client_for(server: &MockServer, store: Arc<dyn CredentialStore>) -> ApiClient {
    client_at(&format!("{}/api", server.uri()), store)
}

pub fn client_at(url: &str, store: Arc<dyn CredentialStore>) -> ApiClient {
    let config = Config::with_builder(AppConfig::builder().server_url(url))
        .expect("valid test config");
    ApiClient::new(config, store).expect("http client")
}

pub fn user_json(role: &str) -> Value {
    json!({
        "uid": "u1",
        "nombre": "Ana",
        "correo": "ana@example.com",
        "rol": role,
        "estado": true,
        "google": false
    })
}

pub fn login_json(token: &str, role: &str) -> Value {
    json!({ "token": token, "usuario": user_json(role) })
}

pub fn product_json(id: &str, name: &str, img: Option<&str>) -> Value {
    let mut product = json!({
        "_id": id,
        "nombre": name,
        "precio": 0,
        "categoria": { "_id": "c1", "nombre": "DRINKS" },
        "usuario": { "_id": "u1", "nombre": "Ana" }
    });
    if let Some(img) = img {
        product["img"] = json!(img);
    }
    product
}

pub fn products_page(products: Vec<Value>) -> Value {
    json!({ "total": products.len(), "productos": products })
}
