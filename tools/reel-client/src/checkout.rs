//! Turning a cart into an order.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use reelbite_domain::id::FoodId;

use crate::cart::{CartService, Totals};
use crate::store::CartStore;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CheckoutError {
    #[error("no items to checkout")]
    EmptyCart,
    #[error("please enter your delivery address")]
    MissingAddress,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderLine {
    pub item_id: FoodId,
    pub title: String,
    pub price: f64,
    pub qty: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub id: Uuid,
    pub lines: Vec<OrderLine>,
    pub subtotal: f64,
    pub shipping: f64,
    pub total: f64,
    pub address: String,
    pub placed_at: DateTime<Utc>,
}

/// Snapshot the cart into an [`Order`]. The cart itself is left untouched
/// until payment succeeds.
pub fn place_order<S: CartStore>(
    cart: &CartService<S>,
    address: &str,
) -> Result<Order, CheckoutError> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }
    let address = address.trim();
    if address.is_empty() {
        return Err(CheckoutError::MissingAddress);
    }

    let Totals {
        subtotal,
        shipping,
        total,
    } = cart.totals();
    let lines = cart
        .items()
        .iter()
        .map(|i| OrderLine {
            item_id: i.item_id,
            title: i.title.clone(),
            price: i.price.value(),
            qty: i.qty,
        })
        .collect();

    Ok(Order {
        id: Uuid::now_v7(),
        lines,
        subtotal,
        shipping,
        total,
        address: address.to_owned(),
        placed_at: Utc::now(),
    })
}
