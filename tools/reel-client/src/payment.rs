//! Payment method validation and settlement.
//!
//! Payment is simulated: a method that passes validation always succeeds.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::cart::CartService;
use crate::checkout::Order;
use crate::store::CartStore;

#[derive(Debug, Clone)]
pub struct CardDetails {
    pub name: String,
    pub number: String,
    pub expiry: String,
    pub cvv: String,
}

#[derive(Debug, Clone)]
pub enum PaymentMethod {
    Card(CardDetails),
    Upi { id: String },
    CashOnDelivery,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum PaymentError {
    #[error("enter cardholder name")]
    MissingCardholder,
    #[error("enter a valid card number")]
    InvalidCardNumber,
    #[error("enter expiry as MM/YY")]
    InvalidExpiry,
    #[error("enter a valid CVV")]
    InvalidCvv,
    #[error("enter a valid UPI ID")]
    InvalidUpiId,
}

#[derive(Debug, Clone, Serialize)]
pub struct Receipt {
    pub order_id: Uuid,
    pub method: &'static str,
    pub amount: f64,
    pub paid_at: DateTime<Utc>,
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// `MM/YY` with month `01`..=`12`.
fn valid_expiry(expiry: &str) -> bool {
    let Some((mm, yy)) = expiry.split_once('/') else {
        return false;
    };
    if mm.len() != 2 || yy.len() != 2 || !all_digits(mm) || !all_digits(yy) {
        return false;
    }
    matches!(mm.parse::<u8>(), Ok(1..=12))
}

/// `handle@provider`: the handle is word characters with at most one `.` or
/// `-` after the first character, the provider is word characters.
fn valid_upi_id(id: &str) -> bool {
    let Some((handle, provider)) = id.split_once('@') else {
        return false;
    };
    if provider.is_empty() || !provider.chars().all(is_word) {
        return false;
    }
    let mut chars = handle.chars();
    if !chars.next().is_some_and(is_word) {
        return false;
    }
    let mut separated = false;
    for c in chars {
        match c {
            c if is_word(c) => {}
            '.' | '-' if !separated => separated = true,
            _ => return false,
        }
    }
    true
}

impl CardDetails {
    pub fn validate(&self) -> Result<(), PaymentError> {
        if self.name.trim().is_empty() {
            return Err(PaymentError::MissingCardholder);
        }
        let number: String = self.number.split_whitespace().collect();
        if !(13..=19).contains(&number.len()) || !all_digits(&number) {
            return Err(PaymentError::InvalidCardNumber);
        }
        if !valid_expiry(self.expiry.trim()) {
            return Err(PaymentError::InvalidExpiry);
        }
        let cvv = self.cvv.trim();
        if !(3..=4).contains(&cvv.len()) || !all_digits(cvv) {
            return Err(PaymentError::InvalidCvv);
        }
        Ok(())
    }
}

impl PaymentMethod {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Card(_) => "card",
            Self::Upi { .. } => "upi",
            Self::CashOnDelivery => "cod",
        }
    }

    pub fn validate(&self) -> Result<(), PaymentError> {
        match self {
            Self::Card(card) => card.validate(),
            Self::Upi { id } if valid_upi_id(id.trim()) => Ok(()),
            Self::Upi { .. } => Err(PaymentError::InvalidUpiId),
            Self::CashOnDelivery => Ok(()),
        }
    }
}

/// Validate `method`, settle `order`, and empty the cart.
pub fn pay<S: CartStore>(
    cart: &mut CartService<S>,
    order: &Order,
    method: &PaymentMethod,
) -> Result<Receipt, PaymentError> {
    method.validate()?;

    if let Err(e) = cart.clear() {
        tracing::warn!(
            error = %format!("{e:#}"),
            order_id = %order.id,
            "cart not cleared after payment"
        );
    }
    tracing::info!(
        order_id = %order.id,
        method = method.label(),
        total = order.total,
        "order paid"
    );

    Ok(Receipt {
        order_id: order.id,
        method: method.label(),
        amount: order.total,
        paid_at: Utc::now(),
    })
}
