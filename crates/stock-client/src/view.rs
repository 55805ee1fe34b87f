//! # Inventory View State
//!
//! The state behind the inventory page: the stock list, the add-product form,
//! the search box with its dropdown, and a single alert slot.
//!
//! ## Adjustment Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  Optimistic Quantity Adjustment                         │
//! │                                                                         │
//! │  Click "+" on widget (quantity: 5)                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  apply_local_adjustment(Plus, "widget")                                │
//! │  ├── products[widget].quantity = 6   ← visible immediately             │
//! │  └── dropdown[widget].quantity = 6                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  POST /api/action { action: "plus", slug: "widget", initialQuantity: 5 }│
//! │       │                                                                 │
//! │       ├── Ok  ──► done                                                  │
//! │       └── Err ──► alert "Error updating quantity: …"                   │
//! │                   fetch_products() restores the stored quantity        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Concurrency
//! Every operation takes `&mut self`, so one view runs one call at a time.
//! Whatever response lands last is what the state shows.

use tracing::{debug, warn};

use stock_core::validation::parse_product_form;
use stock_core::{
    AdjustAction, AdjustRequest, CoreError, CoreResult, NewProduct, Product, MIN_SEARCH_CHARS,
};

use crate::api::InventoryApi;
use crate::error::ClientResult;

// =============================================================================
// Alerts
// =============================================================================

/// Tone of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

/// A transient message shown above the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

impl Alert {
    pub fn success(message: impl Into<String>) -> Self {
        Alert {
            kind: AlertKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Alert {
            kind: AlertKind::Error,
            message: message.into(),
        }
    }
}

// =============================================================================
// Form
// =============================================================================

/// Fields of the add-product form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Slug,
    Quantity,
    Price,
}

/// Raw add-product form input, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub slug: String,
    pub quantity: String,
    pub price: String,
}

impl ProductForm {
    /// Sets one field.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Slug => self.slug = value,
            FormField::Quantity => self.quantity = value,
            FormField::Price => self.price = value,
        }
    }

    /// Parses the raw fields into a product ready to post.
    pub fn validate(&self) -> ClientResult<NewProduct> {
        Ok(parse_product_form(&self.slug, &self.quantity, &self.price)?)
    }
}

// =============================================================================
// View
// =============================================================================

/// State controller for the inventory page.
#[derive(Debug)]
pub struct InventoryView<A: InventoryApi> {
    api: A,

    /// Full stock list.
    pub products: Vec<Product>,
    /// Search results.
    pub dropdown: Vec<Product>,
    /// Add-product form.
    pub form: ProductForm,
    /// Search box contents.
    pub query: String,
    /// A list or search request is in flight.
    pub loading: bool,
    /// An insert or adjustment request is in flight.
    pub loading_action: bool,
    /// Whether the search dropdown is visible.
    pub show_dropdown: bool,
    /// Current alert, if any.
    pub alert: Option<Alert>,
}

impl<A: InventoryApi> InventoryView<A> {
    /// Creates an empty view. Call [`fetch_products`](Self::fetch_products)
    /// to load the stock list.
    pub fn new(api: A) -> Self {
        InventoryView {
            api,
            products: Vec::new(),
            dropdown: Vec::new(),
            form: ProductForm::default(),
            query: String::new(),
            loading: false,
            loading_action: false,
            show_dropdown: false,
            alert: None,
        }
    }

    /// The API this view talks to.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Reloads the stock list.
    pub async fn fetch_products(&mut self) {
        self.loading = true;
        match self.api.list_products().await {
            Ok(products) => {
                debug!(count = products.len(), "Fetched products");
                self.products = products;
            }
            Err(e) => {
                warn!(error = %e, "Fetching products failed");
                self.alert = Some(Alert::error(format!("Error fetching products: {}", e)));
            }
        }
        self.loading = false;
    }

    /// Updates one form field.
    pub fn set_form_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Validates and submits the form.
    ///
    /// On success the returned product is appended, the form is cleared and
    /// the list is fetched again.
    pub async fn add_product(&mut self) {
        let product = match self.form.validate() {
            Ok(product) => product,
            Err(e) => {
                self.alert = Some(Alert::error(format!("Error adding product: {}", e)));
                return;
            }
        };

        self.loading_action = true;
        let result = self.api.add_product(&product).await;
        self.loading_action = false;

        match result {
            Ok(created) => {
                debug!(slug = %created.slug, "Product added");
                self.alert = Some(Alert::success("Product added successfully"));
                self.products.push(created);
                self.form = ProductForm::default();
                self.fetch_products().await;
            }
            Err(e) => {
                warn!(error = %e, "Adding product failed");
                self.alert = Some(Alert::error(format!("Error adding product: {}", e)));
            }
        }
    }

    /// Replaces the search text and hides stale results.
    pub fn edit_query(&mut self, value: impl Into<String>) {
        self.query = value.into();
        self.show_dropdown = false;
    }

    /// Runs the search for the current query.
    pub async fn search(&mut self) {
        if self.query.chars().count() < MIN_SEARCH_CHARS {
            self.alert = Some(Alert::error(format!(
                "Please enter at least {} characters to search",
                MIN_SEARCH_CHARS
            )));
            return;
        }

        self.loading = true;
        self.show_dropdown = true;
        match self.api.search(&self.query).await {
            Ok(products) => {
                debug!(query = %self.query, count = products.len(), "Search finished");
                self.dropdown = products;
            }
            Err(e) => {
                warn!(error = %e, "Search failed");
                self.alert = Some(Alert::error(format!("Error searching products: {}", e)));
            }
        }
        self.loading = false;
    }

    /// Empties the search box and the dropdown.
    pub fn clear_search(&mut self) {
        self.query.clear();
        self.dropdown.clear();
        self.show_dropdown = false;
    }

    /// Applies a one-unit change to every entry with `slug` in both the
    /// stock list and the dropdown.
    ///
    /// Nothing changes if a decrement would take any of them below zero.
    pub fn apply_local_adjustment(&mut self, action: AdjustAction, slug: &str) -> CoreResult<()> {
        let matching = self
            .products
            .iter()
            .chain(self.dropdown.iter())
            .filter(|p| p.slug == slug);

        for product in matching {
            action.checked_apply(slug, product.quantity)?;
        }

        for product in self
            .products
            .iter_mut()
            .chain(self.dropdown.iter_mut())
            .filter(|p| p.slug == slug)
        {
            product.quantity = action.apply(product.quantity);
        }
        Ok(())
    }

    /// Optimistically adjusts the quantity, then tells the server.
    ///
    /// `initial_quantity` is the quantity shown before the click. A failed
    /// request raises an alert and reloads the list.
    pub async fn adjust_quantity(&mut self, action: AdjustAction, slug: &str, initial_quantity: i64) {
        if let Err(e) = self.apply_local_adjustment(action, slug) {
            self.alert = Some(Alert::error(format!("Error updating quantity: {}", e)));
            return;
        }

        let request = AdjustRequest {
            action,
            slug: slug.to_string(),
            initial_quantity,
        };

        self.loading_action = true;
        let result = self.api.adjust(&request).await;
        self.loading_action = false;

        match result {
            Ok(outcome) => {
                debug!(slug = %slug, quantity = outcome.quantity, "Quantity updated");
            }
            Err(e) => {
                warn!(slug = %slug, error = %e, "Quantity update failed");
                self.alert = Some(Alert::error(format!("Error updating quantity: {}", e)));
                self.fetch_products().await;
            }
        }
    }

    /// Clears the alert.
    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Looks up a product in the stock list.
    pub fn product(&self, slug: &str) -> Result<&Product, CoreError> {
        self.products
            .iter()
            .find(|p| p.slug == slug)
            .ok_or_else(|| CoreError::ProductNotFound(slug.to_string()))
    }
}
