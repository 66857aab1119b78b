//! Catalog Controller
//!
//! Holds the cached product list and keeps it in step with the backend.
//! Each operation has a free `request_*` function doing the network part
//! and an `apply_*` method folding the outcome into the cached list, so the
//! UI can run the former on the runtime and the latter on its own thread.

use thiserror::Error;

use crate::client::api::ApiClient;
use crate::client::upload::{Platform, PickerResult, UploadError, UploadFile};
use crate::shared::auth::User;
use crate::shared::catalog::{Product, ProductPayload, ProductsResponse};
use crate::shared::error::ApiError;

#[derive(Debug, Error)]
pub enum ProductsError {
    #[error("Admin user permissions required.")]
    Forbidden,

    #[error(transparent)]
    Upload(#[from] UploadError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// `GET /productos?limite=<page_size>`
pub async fn request_products(client: &ApiClient) -> Result<Vec<Product>, ProductsError> {
    let path = format!("/productos?limite={}", client.config().page_size());
    let page: ProductsResponse = client.get(&path).await?;
    tracing::debug!("Fetched {} of {} products", page.products.len(), page.total);
    Ok(page.products)
}

/// `POST /productos`
pub async fn request_add_product(
    client: &ApiClient,
    category_id: &str,
    name: &str,
) -> Result<Product, ProductsError> {
    let payload = ProductPayload {
        name: name.to_string(),
        category_id: category_id.to_string(),
    };
    Ok(client.post("/productos", &payload).await?)
}

/// `PUT /productos/:id`
pub async fn request_update_product(
    client: &ApiClient,
    category_id: &str,
    name: &str,
    id: &str,
) -> Result<Product, ProductsError> {
    let payload = ProductPayload {
        name: name.to_string(),
        category_id: category_id.to_string(),
    };
    Ok(client.put(&format!("/productos/{}", id), &payload).await?)
}

/// `DELETE /productos/:id`, refused locally unless `requested_by` is an admin
pub async fn request_delete_product(
    client: &ApiClient,
    id: &str,
    requested_by: Option<&User>,
) -> Result<(), ProductsError> {
    authorize_delete(requested_by)?;
    client.delete(&format!("/productos/{}", id)).await?;
    Ok(())
}

/// `GET /productos/:id`
pub async fn request_product(client: &ApiClient, id: &str) -> Result<Product, ProductsError> {
    Ok(client.get(&format!("/productos/{}", id)).await?)
}

/// `PUT /uploads/productos/:id` with the picked image
pub async fn request_upload_image(
    client: &ApiClient,
    picked: &PickerResult,
    platform: Platform,
    product_id: &str,
) -> Result<Product, ProductsError> {
    let file = UploadFile::from_picker(picked, platform)?;
    tracing::info!("Uploading {} ({}) for product {}", file.file_name, file.mime_type, product_id);
    let form = file.into_form().await?;
    Ok(client
        .put_multipart(&format!("/uploads/productos/{}", product_id), form)
        .await?)
}

/// Only admins may delete products
pub fn authorize_delete(user: Option<&User>) -> Result<(), ProductsError> {
    match user {
        Some(user) if user.is_admin() => Ok(()),
        _ => Err(ProductsError::Forbidden),
    }
}

/// Catalog controller
#[derive(Debug, Clone)]
pub struct ProductsController {
    client: ApiClient,
    products: Vec<Product>,
    is_uploading_img: bool,
}

impl ProductsController {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            products: Vec::new(),
            is_uploading_img: false,
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Cached products, in backend order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn is_uploading_img(&self) -> bool {
        self.is_uploading_img
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn apply_loaded(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    /// Forget the cache and any upload in progress
    pub fn clear(&mut self) {
        self.products.clear();
        self.is_uploading_img = false;
    }

    pub fn apply_added(&mut self, product: Product) {
        self.products.push(product);
    }

    pub fn apply_updated(&mut self, updated: Product) {
        if let Some(cached) = self.products.iter_mut().find(|p| p.id == updated.id) {
            cached.merge(updated);
        }
    }

    pub fn apply_deleted(&mut self, id: &str) {
        self.products.retain(|p| p.id != id);
    }

    /// Raise the uploading flag; pair with [`Self::finish_upload`]
    pub fn begin_upload(&mut self) {
        self.is_uploading_img = true;
    }

    /// Lower the uploading flag and fold a successful result into the cache
    pub fn finish_upload(&mut self, result: &Result<Product, ProductsError>) {
        self.is_uploading_img = false;
        match result {
            Ok(product) => self.apply_updated(product.clone()),
            Err(e) => tracing::error!("Image upload failed: {}", e),
        }
    }

    /// Replace the cached list with the first page from the backend
    pub async fn load(&mut self) -> Result<(), ProductsError> {
        let products = request_products(&self.client).await?;
        self.apply_loaded(products);
        Ok(())
    }

    pub async fn add(&mut self, category_id: &str, name: &str) -> Result<Product, ProductsError> {
        let product = request_add_product(&self.client, category_id, name).await?;
        self.apply_added(product.clone());
        Ok(product)
    }

    pub async fn update(
        &mut self,
        category_id: &str,
        name: &str,
        id: &str,
    ) -> Result<(), ProductsError> {
        let product = request_update_product(&self.client, category_id, name, id).await?;
        self.apply_updated(product);
        Ok(())
    }

    pub async fn delete(&mut self, id: &str, requested_by: Option<&User>) -> Result<(), ProductsError> {
        request_delete_product(&self.client, id, requested_by).await?;
        self.apply_deleted(id);
        Ok(())
    }

    /// Fetch one product; the cached list is left alone
    pub async fn load_by_id(&self, id: &str) -> Result<Product, ProductsError> {
        request_product(&self.client, id).await
    }

    pub async fn upload_image(
        &mut self,
        picked: &PickerResult,
        product_id: &str,
    ) -> Result<Product, ProductsError> {
        self.begin_upload();
        let result = request_upload_image(&self.client, picked, Platform::current(), product_id).await;
        self.finish_upload(&result);
        result
    }
}
