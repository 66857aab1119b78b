//! HTTP Client Wrapper
//!
//! Every backend call goes through [`ApiClient`]. It resolves paths
//! against the configured base URL and attaches the stored session token
//! (header `x-token` by default) to each outgoing request.

use std::fmt;
use std::sync::Arc;

use reqwest::{multipart, Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::client::config::Config;
use crate::client::credentials::CredentialStore;
use crate::shared::error::ApiError;

pub type ApiResult<T> = Result<T, ApiError>;

/// Backend API client
#[derive(Clone)]
pub struct ApiClient {
    config: Config,
    http: Client,
    store: Arc<dyn CredentialStore>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("server_url", &self.config.server_url())
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(config: Config, store: Arc<dyn CredentialStore>) -> ApiResult<Self> {
        let http = Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self {
            config,
            http,
            store,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The token store this client reads from
    pub fn credentials(&self) -> &Arc<dyn CredentialStore> {
        &self.store
    }

    fn request(&self, method: Method, path: &str) -> ApiResult<RequestBuilder> {
        let url = self.config.api_url(path);
        let mut builder = self.http.request(method.clone(), &url);
        if let Some(token) = self.store.get_token()? {
            builder = builder.header(self.config.token_header(), token);
        }
        tracing::debug!("{} {}", method, url);
        Ok(builder)
    }

    async fn checked(response: Response) -> ApiResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let bytes = response.bytes().await.unwrap_or_default();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        tracing::debug!("Backend answered {}: {}", status, body);
        Err(ApiError::status(status.as_u16(), body))
    }

    async fn send_json<T: DeserializeOwned>(builder: RequestBuilder) -> ApiResult<T> {
        let response = Self::checked(builder.send().await?).await?;
        Ok(response.json::<T>().await?)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        Self::send_json(self.request(Method::GET, path)?).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        Self::send_json(self.request(Method::POST, path)?.json(body)).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        Self::send_json(self.request(Method::PUT, path)?.json(body)).await
    }

    /// `DELETE`, discarding whatever body the backend returns
    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        let response = self.request(Method::DELETE, path)?.send().await?;
        Self::checked(response).await?;
        Ok(())
    }

    /// `PUT` with a `multipart/form-data` body
    pub async fn put_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: multipart::Form,
    ) -> ApiResult<T> {
        Self::send_json(self.request(Method::PUT, path)?.multipart(form)).await
    }
}
