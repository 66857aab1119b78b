//! Category query: one fetch per screen mount, nothing cached across mounts.

use crate::client::api::ApiClient;
use crate::shared::catalog::{CategoriesResponse, Category};
use crate::shared::error::ApiError;

/// `GET /categorias`
pub async fn request_categories(client: &ApiClient) -> Result<Vec<Category>, ApiError> {
    let page: CategoriesResponse = client.get("/categorias").await?;
    Ok(page.categories)
}

#[derive(Debug)]
pub struct CategoriesQuery {
    categories: Vec<Category>,
    is_loading: bool,
    error: Option<ApiError>,
}

impl Default for CategoriesQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoriesQuery {
    /// A freshly mounted query, loading until its result is applied
    pub fn new() -> Self {
        Self {
            categories: Vec::new(),
            is_loading: true,
            error: None,
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    pub fn first(&self) -> Option<&Category> {
        self.categories.first()
    }

    pub fn apply(&mut self, result: Result<Vec<Category>, ApiError>) {
        self.is_loading = false;
        match result {
            Ok(categories) => {
                self.categories = categories;
                self.error = None;
            }
            Err(e) => {
                tracing::error!("Failed to load categories: {}", e);
                self.error = Some(e);
            }
        }
    }

    /// Fetch and apply; a failure stays readable through [`Self::error`]
    pub async fn fetch(&mut self, client: &ApiClient) -> Result<(), &ApiError> {
        let result = request_categories(client).await;
        self.apply(result);
        match &self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: &str, name: &str) -> Category {
        Category {
            id: id.to_string(),
            name: name.to_string(),
            created_by: None,
        }
    }

    #[test]
    fn test_new_query_is_loading() {
        let query = CategoriesQuery::new();
        assert!(query.is_loading());
        assert!(query.categories().is_empty());
        assert!(query.first().is_none());
    }

    #[test]
    fn test_apply_success() {
        let mut query = CategoriesQuery::new();
        query.apply(Ok(vec![category("c1", "DRINKS"), category("c2", "SNACKS")]));
        assert!(!query.is_loading());
        assert_eq!(query.first().map(|c| c.id.as_str()), Some("c1"));
        assert!(query.error().is_none());
    }

    #[test]
    fn test_apply_failure_stops_loading() {
        let mut query = CategoriesQuery::new();
        query.apply(Err(ApiError::status(500, serde_json::Value::Null)));
        assert!(!query.is_loading());
        assert_eq!(query.error().and_then(ApiError::status_code), Some(500));

        query.apply(Ok(vec![category("c1", "DRINKS")]));
        assert!(query.error().is_none());
    }
}
