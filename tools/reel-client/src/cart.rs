//! Shopping cart with injected persistence.

use serde::{Deserialize, Serialize};

use reelbite_domain::id::FoodId;
use reelbite_domain::price::Price;

use crate::store::CartStore;

pub const MAX_QTY: u32 = 99;
/// Orders at or above this subtotal ship free.
pub const FREE_SHIPPING_THRESHOLD: f64 = 299.0;
pub const SHIPPING_FEE: f64 = 29.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub item_id: FoodId,
    pub title: String,
    pub price: Price,
    pub vendor_id: Option<String>,
    pub image: Option<String>,
    pub qty: u32,
}

impl CartItem {
    pub fn line_total(&self) -> f64 {
        self.price.value() * f64::from(self.qty)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    pub subtotal: f64,
    pub shipping: f64,
    pub total: f64,
}

impl Totals {
    pub fn of(items: &[CartItem]) -> Self {
        let subtotal: f64 = items.iter().map(CartItem::line_total).sum();
        let shipping = if subtotal == 0.0 || subtotal >= FREE_SHIPPING_THRESHOLD {
            0.0
        } else {
            SHIPPING_FEE
        };
        Self {
            subtotal,
            shipping,
            total: subtotal + shipping,
        }
    }
}

fn clamp_qty(qty: u32) -> u32 {
    qty.clamp(1, MAX_QTY)
}

/// Cart state plus the store it is written back to after every change.
pub struct CartService<S: CartStore> {
    store: S,
    items: Vec<CartItem>,
}

impl<S: CartStore> CartService<S> {
    /// Load the cart from `store`. An unreadable cart starts out empty.
    pub fn open(store: S) -> Self {
        let items = store.load().unwrap_or_else(|e| {
            tracing::warn!(error = %format!("{e:#}"), "discarding unreadable cart");
            Vec::new()
        });
        Self { store, items }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn totals(&self) -> Totals {
        Totals::of(&self.items)
    }

    /// Add `qty` of `item`. An item already in the cart has its quantity
    /// increased instead, up to [`MAX_QTY`].
    pub fn add(&mut self, item: CartItem, qty: u32) -> anyhow::Result<()> {
        match self.items.iter_mut().find(|i| i.item_id == item.item_id) {
            Some(existing) => existing.qty = existing.qty.saturating_add(qty).min(MAX_QTY),
            None => self.items.push(CartItem {
                qty: clamp_qty(qty),
                ..item
            }),
        }
        self.persist()
    }

    pub fn remove(&mut self, item_id: FoodId) -> anyhow::Result<()> {
        self.items.retain(|i| i.item_id != item_id);
        self.persist()
    }

    /// Set the quantity of an item already in the cart, clamped to `1..=MAX_QTY`.
    pub fn set_qty(&mut self, item_id: FoodId, qty: u32) -> anyhow::Result<()> {
        if let Some(item) = self.items.iter_mut().find(|i| i.item_id == item_id) {
            item.qty = clamp_qty(qty);
        }
        self.persist()
    }

    pub fn clear(&mut self) -> anyhow::Result<()> {
        self.items.clear();
        self.persist()
    }

    fn persist(&self) -> anyhow::Result<()> {
        self.store.save(&self.items)
    }
}
