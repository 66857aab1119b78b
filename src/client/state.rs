use std::future::Future;
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::Arc;

use thiserror::Error;
use tokio::runtime::Runtime;

use crate::client::api::ApiClient;
use crate::client::categories::{request_categories, CategoriesQuery};
use crate::client::config::Config;
use crate::client::credentials::{CredentialStore, FileCredentialStore};
use crate::client::form::FormState;
use crate::client::navigation::{Navigator, ProductRoute, Screen};
use crate::client::products::{
    authorize_delete, request_add_product, request_delete_product, request_product,
    request_products, request_update_product, request_upload_image, ProductsController,
    ProductsError,
};
use crate::client::session::{
    request_sign_in, request_sign_up, request_stored_session, AuthStatus, SessionController,
    SessionError, StoredSession,
};
use crate::client::upload::{Platform, PickerResult};
use crate::shared::auth::{LoginData, LoginResponse, RegisterData};
use crate::shared::catalog::{Category, Product};
use crate::shared::error::ApiError;

/// Pending result types
pub type AuthResult = Result<LoginResponse, SessionError>;
pub type StoredSessionResult = Result<StoredSession, SessionError>;
pub type ProductsResult = Result<Vec<Product>, ProductsError>;
pub type ProductResult = Result<Product, ProductsError>;
pub type SaveResult = Result<SavedProduct, ProductsError>;
/// Result tagged with the product form mount it was started from
pub type MountedResult<T> = (u64, T);
pub type DeleteResult = (String, Result<(), ProductsError>);
pub type CategoriesResult = Result<Vec<Category>, ApiError>;

/// Product form field names
pub mod fields {
    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
    pub const PASSWORD: &str = "password";
    pub const PRODUCT_ID: &str = "_id";
    pub const CATEGORY_ID: &str = "categoryId";
    pub const PRODUCT_NAME: &str = "productName";
    pub const PRODUCT_IMG: &str = "productImg";
    pub const IMAGE_PATH: &str = "imagePath";
}

/// Outcome of the product screen's Save button
#[derive(Debug, Clone)]
pub enum SavedProduct {
    Added(Product),
    Updated(Product),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlertKind {
    /// Single "Ok" acknowledgment
    Notice,
    /// Cancel / Confirm before deleting a product
    ConfirmDelete { id: String },
}

/// Modal dialog waiting for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
    pub kind: AlertKind,
}

impl Alert {
    pub fn notice(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind: AlertKind::Notice,
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] ApiError),
}

/// Central application state shared across egui views.
pub struct AppState {
    runtime: Runtime,
    pub session: SessionController,
    pub products: ProductsController,
    pub navigator: Navigator,
    pub login_form: FormState,
    pub register_form: FormState,
    pub product_form: FormState,
    pub categories: CategoriesQuery,
    pub alert: Option<Alert>,
    /// Whether the authenticated shell has done its first product load
    products_mounted: bool,
    /// Bumped whenever `product_form` is replaced
    form_mount: u64,

    pending_session_check: Option<Receiver<StoredSessionResult>>,
    pending_auth: Option<Receiver<AuthResult>>,
    pending_products: Option<Receiver<ProductsResult>>,
    pending_product_detail: Option<Receiver<ProductResult>>,
    pending_categories: Option<Receiver<CategoriesResult>>,
    pending_save: Option<Receiver<MountedResult<SaveResult>>>,
    pending_delete: Option<Receiver<DeleteResult>>,
    pending_upload: Option<Receiver<MountedResult<ProductResult>>>,
}

/// Take the value out of a pending receiver once it has arrived
fn take_ready<T>(slot: &mut Option<Receiver<T>>) -> Option<T> {
    let rx = slot.as_ref()?;
    match rx.try_recv() {
        Ok(value) => {
            *slot = None;
            Some(value)
        }
        Err(TryRecvError::Empty) => None,
        Err(TryRecvError::Disconnected) => {
            tracing::error!("Background task ended without a result");
            *slot = None;
            None
        }
    }
}

impl AppState {
    /// State backed by the on-disk token file named in `config`
    pub fn new(config: Config) -> Result<Self, StartupError> {
        let store = Arc::new(FileCredentialStore::new(config.token_path()));
        Self::with_store(config, store)
    }

    pub fn with_store(
        config: Config,
        store: Arc<dyn CredentialStore>,
    ) -> Result<Self, StartupError> {
        let runtime = Runtime::new()?;
        let client = ApiClient::new(config, store)?;
        tracing::info!("Using backend at {}", client.config().server_url());

        Ok(Self {
            runtime,
            session: SessionController::new(client.clone()),
            products: ProductsController::new(client),
            navigator: Navigator::new(),
            login_form: FormState::new([(fields::EMAIL, ""), (fields::PASSWORD, "")]),
            register_form: FormState::new([
                (fields::NAME, ""),
                (fields::EMAIL, ""),
                (fields::PASSWORD, ""),
            ]),
            product_form: FormState::default(),
            categories: CategoriesQuery::new(),
            alert: None,
            products_mounted: false,
            form_mount: 0,
            pending_session_check: None,
            pending_auth: None,
            pending_products: None,
            pending_product_detail: None,
            pending_categories: None,
            pending_save: None,
            pending_delete: None,
            pending_upload: None,
        })
    }

    fn client(&self) -> ApiClient {
        self.session.client().clone()
    }

    fn spawn<T, F>(&self, task: F) -> Receiver<T>
    where
        T: Send + 'static,
        F: Future<Output = T> + Send + 'static,
    {
        let (tx, rx) = channel();
        self.runtime.spawn(async move {
            let _ = tx.send(task.await);
        });
        rx
    }

    /// Kick off the one-time stored session check
    pub fn start(&mut self) {
        if self.pending_session_check.is_some() || self.session.status() != AuthStatus::Checking {
            return;
        }
        let client = self.client();
        self.pending_session_check =
            Some(self.spawn(async move { request_stored_session(&client).await }));
    }

    /// Fold finished background work into state; call once per frame
    pub fn poll(&mut self) {
        if let Some(result) = take_ready(&mut self.pending_session_check) {
            // Failure is already logged and resolved to NotAuthenticated.
            let _ = self.session.apply_stored_session(result);
        }

        if let Some(result) = take_ready(&mut self.pending_auth) {
            if self.session.apply_auth_result(result).is_ok() {
                self.login_form.clear(fields::PASSWORD);
                self.register_form.clear(fields::PASSWORD);
            }
        }

        self.navigator.sync(self.session.status());
        match self.session.status() {
            AuthStatus::Authenticated if !self.products_mounted => {
                self.products_mounted = true;
                self.refresh_products();
            }
            AuthStatus::NotAuthenticated => self.products_mounted = false,
            _ => {}
        }

        if let Some(result) = take_ready(&mut self.pending_products) {
            match result {
                Ok(products) => self.products.apply_loaded(products),
                Err(e) => tracing::error!("Failed to load products: {}", e),
            }
        }

        if let Some(result) = take_ready(&mut self.pending_product_detail) {
            self.apply_product_detail(result);
        }

        if let Some(result) = take_ready(&mut self.pending_categories) {
            self.categories.apply(result);
        }

        if let Some((mount, result)) = take_ready(&mut self.pending_save) {
            self.apply_saved(mount, result);
        }

        if let Some((id, result)) = take_ready(&mut self.pending_delete) {
            match result {
                Ok(()) => {
                    self.products.apply_deleted(&id);
                    self.refresh_products();
                }
                Err(e) => {
                    tracing::error!("Failed to delete product {}: {}", id, e);
                    self.alert = Some(Alert::notice("Delete failed", e.to_string()));
                }
            }
        }

        if let Some((mount, result)) = take_ready(&mut self.pending_upload) {
            self.products.finish_upload(&result);
            match result {
                Ok(product) if mount == self.form_mount => {
                    if let Some(img) = product.image_url {
                        self.product_form.on_change(img, fields::PRODUCT_IMG);
                    }
                }
                Ok(_) => tracing::debug!("Upload finished after its form was closed"),
                Err(e) => self.alert = Some(Alert::notice("Upload failed", e.to_string())),
            }
        }
    }

    pub fn is_authenticating(&self) -> bool {
        self.pending_auth.is_some()
    }

    pub fn is_refreshing(&self) -> bool {
        self.pending_products.is_some()
    }

    pub fn is_saving(&self) -> bool {
        self.pending_save.is_some()
    }

    pub fn is_deleting(&self) -> bool {
        self.pending_delete.is_some()
    }

    pub fn is_loading_product(&self) -> bool {
        self.pending_product_detail.is_some()
    }

    pub fn handle_login(&mut self) {
        if self.is_authenticating() {
            return;
        }
        let data = LoginData {
            email: self.login_form.get(fields::EMAIL).trim().to_string(),
            password: self.login_form.get(fields::PASSWORD).to_string(),
        };
        if data.email.is_empty() || data.password.is_empty() {
            return;
        }
        let client = self.client();
        self.pending_auth = Some(self.spawn(async move { request_sign_in(&client, &data).await }));
    }

    pub fn handle_register(&mut self) {
        if self.is_authenticating() {
            return;
        }
        let data = RegisterData {
            name: self.register_form.get(fields::NAME).trim().to_string(),
            email: self.register_form.get(fields::EMAIL).trim().to_string(),
            password: self.register_form.get(fields::PASSWORD).to_string(),
        };
        if data.name.is_empty() || data.email.is_empty() || data.password.is_empty() {
            return;
        }
        let client = self.client();
        self.pending_auth = Some(self.spawn(async move { request_sign_up(&client, &data).await }));
    }

    /// Sign out and drop every request still in flight; their results are discarded
    pub fn logout(&mut self) {
        if let Err(e) = self.session.log_out() {
            tracing::error!("Failed to remove stored token: {}", e);
        }
        self.pending_session_check = None;
        self.pending_auth = None;
        self.pending_products = None;
        self.pending_product_detail = None;
        self.pending_categories = None;
        self.pending_save = None;
        self.pending_delete = None;
        self.pending_upload = None;

        self.products.clear();
        self.replace_product_form(FormState::default());
        self.alert = None;
        self.navigator.sync(self.session.status());
    }

    fn replace_product_form(&mut self, form: FormState) {
        self.product_form = form;
        self.form_mount += 1;
    }

    pub fn refresh_products(&mut self) {
        if self.is_refreshing() {
            return;
        }
        let client = self.client();
        self.pending_products = Some(self.spawn(async move { request_products(&client).await }));
    }

    /// Mount the product screen: fresh form, fresh categories, detail fetch
    pub fn open_product(&mut self, route: ProductRoute) {
        let id = route.id.clone().unwrap_or_default();
        self.replace_product_form(FormState::new([
            (fields::PRODUCT_ID, id.clone()),
            (fields::CATEGORY_ID, String::new()),
            (fields::PRODUCT_NAME, route.name.clone().unwrap_or_default()),
            (fields::PRODUCT_IMG, String::new()),
            (fields::IMAGE_PATH, String::new()),
        ]));
        if !self.navigator.push(Screen::Product(route)) {
            return;
        }

        self.categories = CategoriesQuery::new();
        let client = self.client();
        self.pending_categories = Some(self.spawn(async move { request_categories(&client).await }));

        self.pending_product_detail = None;
        if !id.is_empty() {
            let client = self.client();
            self.pending_product_detail =
                Some(self.spawn(async move { request_product(&client, &id).await }));
        }
    }

    fn apply_product_detail(&mut self, result: ProductResult) {
        match result {
            Ok(product) => {
                let name = self.product_form.get(fields::PRODUCT_NAME).to_string();
                let image_path = self.product_form.get(fields::IMAGE_PATH).to_string();
                self.product_form.set_form_value([
                    (fields::PRODUCT_ID, product.id),
                    (fields::CATEGORY_ID, product.category.id),
                    (fields::PRODUCT_NAME, name),
                    (fields::PRODUCT_IMG, product.image_url.unwrap_or_default()),
                    (fields::IMAGE_PATH, image_path),
                ]);
            }
            Err(e) => tracing::error!("Failed to load product: {}", e),
        }
    }

    /// Category to save with: the picked one, else the first available
    pub fn effective_category_id(&self) -> Option<String> {
        let picked = self.product_form.get(fields::CATEGORY_ID);
        if !picked.is_empty() {
            return Some(picked.to_string());
        }
        self.categories.first().map(|c| c.id.clone())
    }

    pub fn save_product(&mut self) {
        if self.is_saving() {
            return;
        }
        let name = self.product_form.get(fields::PRODUCT_NAME).trim().to_string();
        if name.is_empty() {
            return;
        }
        let Some(category_id) = self.effective_category_id() else {
            self.alert = Some(Alert::notice("Missing category", "Select a category first."));
            return;
        };

        let id = self.product_form.get(fields::PRODUCT_ID).to_string();
        let mount = self.form_mount;
        let client = self.client();
        self.pending_save = Some(self.spawn(async move {
            let result = if id.is_empty() {
                request_add_product(&client, &category_id, &name)
                    .await
                    .map(SavedProduct::Added)
            } else {
                request_update_product(&client, &category_id, &name, &id)
                    .await
                    .map(SavedProduct::Updated)
            };
            (mount, result)
        }));
    }

    /// The cache always takes the result; the form only if it is still the one saved
    fn apply_saved(&mut self, mount: u64, result: SaveResult) {
        match result {
            Ok(SavedProduct::Added(product)) => {
                tracing::info!("Created product {} ({})", product.name, product.id);
                if mount == self.form_mount {
                    self.product_form.on_change(product.id.clone(), fields::PRODUCT_ID);
                }
                self.products.apply_added(product);
            }
            Ok(SavedProduct::Updated(product)) => {
                tracing::info!("Updated product {}", product.id);
                self.products.apply_updated(product);
            }
            Err(e) => {
                tracing::error!("Failed to save product: {}", e);
                self.alert = Some(Alert::notice("Save failed", e.to_string()));
            }
        }
    }

    pub fn upload_image(&mut self) {
        if self.products.is_uploading_img() {
            return;
        }
        let product_id = self.product_form.get(fields::PRODUCT_ID).to_string();
        let path = self.product_form.get(fields::IMAGE_PATH).trim().to_string();
        if product_id.is_empty() || path.is_empty() {
            return;
        }

        self.products.begin_upload();
        let picked = PickerResult::from_path(path);
        let mount = self.form_mount;
        let client = self.client();
        self.pending_upload = Some(self.spawn(async move {
            let result =
                request_upload_image(&client, &picked, Platform::current(), &product_id).await;
            (mount, result)
        }));
    }

    /// Ask before deleting; non-admins get a warning and no request is made
    pub fn request_delete(&mut self, id: &str, name: &str) {
        if authorize_delete(self.session.user()).is_err() {
            self.alert = Some(Alert::notice("Warning!!", "Admin user permissions required."));
            return;
        }
        self.alert = Some(Alert {
            title: format!("Do you want to delete the product {}?", name),
            message: String::new(),
            kind: AlertKind::ConfirmDelete { id: id.to_string() },
        });
    }

    pub fn confirm_delete(&mut self, id: String) {
        self.alert = None;
        if self.is_deleting() {
            return;
        }
        let client = self.client();
        let user = self.session.user().cloned();
        self.pending_delete = Some(self.spawn(async move {
            let result = request_delete_product(&client, &id, user.as_ref()).await;
            (id, result)
        }));
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn go_back(&mut self) {
        self.navigator.pop();
    }
}
