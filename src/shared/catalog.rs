//! Catalog wire types: products, categories and their list envelopes.

use serde::{Deserialize, Serialize};

/// Minimal `{_id, nombre}` reference embedded in products and categories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "precio", default)]
    pub price: f64,
    #[serde(rename = "categoria")]
    pub category: EntityRef,
    /// User that created the product
    #[serde(rename = "usuario")]
    pub owner: EntityRef,
    #[serde(rename = "img", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Product {
    /// Fold a fresher copy of this product into `self`.
    ///
    /// The image URL survives when the update omits it.
    pub fn merge(&mut self, update: Product) {
        let image_url = update.image_url.or_else(|| self.image_url.take());
        *self = Product { image_url, ..update };
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "usuario", default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<EntityRef>,
}

/// `GET /productos` envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductsResponse {
    pub total: u64,
    #[serde(rename = "productos")]
    pub products: Vec<Product>,
}

/// `GET /categorias` envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub total: u64,
    #[serde(rename = "categorias")]
    pub categories: Vec<Category>,
}

/// Body of `POST /productos` and `PUT /productos/:id`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductPayload {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "categoria")]
    pub category_id: String,
}
