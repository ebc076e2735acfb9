//! Carts service.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use rustc_hash::FxHashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use smartbasket::{
    basket::CartLine,
    compare::compare,
    quotes::QuoteRequest,
    sampler::QuoteSource,
    totals::{aggregate, best_deal_by_regret},
};

use crate::domain::{
    carts::{
        errors::CartsServiceError,
        models::{Cart, CartComparisonReport},
    },
    catalog::CatalogService,
};

/// Carts held in process memory, keyed by cart UUID.
///
/// Quotes are attached to a line once, when the item is first added; repeat
/// adds only bump the quantity. Setting a quantity to zero removes the line.
pub struct InMemoryCartsService {
    store: RwLock<FxHashMap<Uuid, Cart>>,
    catalog: Arc<dyn CatalogService>,
    quotes: Arc<dyn QuoteSource>,
}

impl InMemoryCartsService {
    /// An empty cart store resolving items against `catalog` and sampling
    /// line quotes from `quotes`.
    #[must_use]
    pub fn new(catalog: Arc<dyn CatalogService>, quotes: Arc<dyn QuoteSource>) -> Self {
        Self {
            store: RwLock::new(FxHashMap::default()),
            catalog,
            quotes,
        }
    }
}

impl Debug for InMemoryCartsService {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("InMemoryCartsService").finish_non_exhaustive()
    }
}

#[async_trait]
impl CartsService for InMemoryCartsService {
    async fn create_cart(&self) -> Result<Cart, CartsServiceError> {
        let now = Timestamp::now();
        let cart = Cart {
            uuid: Uuid::now_v7(),
            lines: Vec::new(),
            created_at: now,
            updated_at: now,
        };

        self.store.write().await.insert(cart.uuid, cart.clone());

        Ok(cart)
    }

    async fn get_cart(&self, cart: Uuid) -> Result<Cart, CartsServiceError> {
        self.store
            .read()
            .await
            .get(&cart)
            .cloned()
            .ok_or(CartsServiceError::NotFound)
    }

    async fn delete_cart(&self, cart: Uuid) -> Result<(), CartsServiceError> {
        self.store
            .write()
            .await
            .remove(&cart)
            .map(|_removed| ())
            .ok_or(CartsServiceError::NotFound)
    }

    async fn add_item(
        &self,
        cart: Uuid,
        item_id: &str,
        quantity: u32,
    ) -> Result<Cart, CartsServiceError> {
        if quantity == 0 {
            return Err(CartsServiceError::InvalidQuantity);
        }

        let item = self
            .catalog
            .get_item(item_id)
            .await
            .map_err(|_not_found| CartsServiceError::UnknownItem {
                item_id: item_id.to_string(),
            })?;

        let mut store = self.store.write().await;
        let entry = store.get_mut(&cart).ok_or(CartsServiceError::NotFound)?;

        if let Some(line) = entry.lines.iter_mut().find(|line| line.item_id == item_id) {
            line.quantity += quantity;
        } else {
            let request =
                QuoteRequest::new(item.id.clone(), Some(item.name.clone()), Some(item.base_price))?;
            let quotes = self.quotes.quotes(&request);

            entry
                .lines
                .push(CartLine::new(item.id, item.name, item.base_price, quantity, quotes));
        }

        entry.updated_at = Timestamp::now();

        Ok(entry.clone())
    }

    async fn set_quantity(
        &self,
        cart: Uuid,
        item_id: &str,
        quantity: u32,
    ) -> Result<Cart, CartsServiceError> {
        let mut store = self.store.write().await;
        let entry = store.get_mut(&cart).ok_or(CartsServiceError::NotFound)?;

        if quantity == 0 {
            // Quantity reaching zero destroys the line.
            let before = entry.lines.len();
            entry.lines.retain(|line| line.item_id != item_id);

            if entry.lines.len() == before {
                return Err(CartsServiceError::UnknownItem {
                    item_id: item_id.to_string(),
                });
            }
        } else {
            let line = entry
                .lines
                .iter_mut()
                .find(|line| line.item_id == item_id)
                .ok_or_else(|| CartsServiceError::UnknownItem {
                    item_id: item_id.to_string(),
                })?;

            line.quantity = quantity;
        }

        entry.updated_at = Timestamp::now();

        Ok(entry.clone())
    }

    async fn remove_item(&self, cart: Uuid, item_id: &str) -> Result<Cart, CartsServiceError> {
        self.set_quantity(cart, item_id, 0).await
    }

    async fn compare_cart(&self, cart: Uuid) -> Result<CartComparisonReport, CartsServiceError> {
        let cart = self.get_cart(cart).await?;

        let comparisons = cart
            .lines
            .iter()
            .map(compare)
            .collect::<Result<Vec<_>, _>>()?;

        let totals = aggregate(&comparisons);
        let alternate = best_deal_by_regret(&comparisons);

        Ok(CartComparisonReport {
            generated_at: Timestamp::now(),
            comparisons,
            totals,
            alternate,
        })
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Creates a new, empty cart.
    async fn create_cart(&self) -> Result<Cart, CartsServiceError>;

    /// Retrieves a single cart.
    async fn get_cart(&self, cart: Uuid) -> Result<Cart, CartsServiceError>;

    /// Deletes a cart.
    async fn delete_cart(&self, cart: Uuid) -> Result<(), CartsServiceError>;

    /// Adds an item to a cart, bumping the quantity when the line exists.
    async fn add_item(
        &self,
        cart: Uuid,
        item_id: &str,
        quantity: u32,
    ) -> Result<Cart, CartsServiceError>;

    /// Sets a line's quantity; zero removes the line.
    async fn set_quantity(
        &self,
        cart: Uuid,
        item_id: &str,
        quantity: u32,
    ) -> Result<Cart, CartsServiceError>;

    /// Removes a line from a cart.
    async fn remove_item(&self, cart: Uuid, item_id: &str) -> Result<Cart, CartsServiceError>;

    /// Runs the comparison pipeline over a stored cart.
    async fn compare_cart(&self, cart: Uuid) -> Result<CartComparisonReport, CartsServiceError>;
}
