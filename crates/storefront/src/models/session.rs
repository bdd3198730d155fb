//! Order selection carried across requests in the session.
//!
//! Opening the confirmation modal stores the product as the *pending* order.
//! Confirming moves it into the *confirmed* slot, which the confirmation page
//! consumes exactly once.

use leve_bem_core::{Product, ProductId};
use tower_sessions::Session;
use tower_sessions::session::Error;

/// Session keys for order state.
pub mod keys {
    /// Product whose confirmation modal was last opened.
    pub const PENDING_ORDER: &str = "pending_order";

    /// Product handed to the confirmation page; removed when read.
    pub const CONFIRMED_ORDER: &str = "confirmed_order";
}

/// Remember `product` as the shopper's pending selection.
///
/// # Errors
///
/// Returns an error if the session store fails.
pub async fn set_pending_order(session: &Session, product: &Product) -> Result<(), Error> {
    session.insert(keys::PENDING_ORDER, product).await
}

/// Move the pending selection into the confirmed slot.
///
/// Only succeeds when the pending product is `id`. Returns whether an order
/// was confirmed.
///
/// # Errors
///
/// Returns an error if the session store fails.
pub async fn confirm_pending_order(session: &Session, id: ProductId) -> Result<bool, Error> {
    let Some(pending) = session.remove::<Product>(keys::PENDING_ORDER).await? else {
        return Ok(false);
    };
    if pending.id != id {
        return Ok(false);
    }

    session.insert(keys::CONFIRMED_ORDER, &pending).await?;
    Ok(true)
}

/// Take the confirmed order, leaving the slot empty.
///
/// # Errors
///
/// Returns an error if the session store fails.
pub async fn take_confirmed_order(session: &Session) -> Result<Option<Product>, Error> {
    session.remove::<Product>(keys::CONFIRMED_ORDER).await
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use rust_decimal::Decimal;
    use tower_sessions::MemoryStore;

    use super::*;

    fn session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }

    fn wrap() -> Product {
        Product {
            id: ProductId::new(10),
            name: "Wrap".to_string(),
            price: Decimal::new(2250, 2),
            ingredients: "Frango e folhas".to_string(),
            calories: 320,
            photo: None,
            category: None,
            owner: None,
        }
    }

    #[tokio::test]
    async fn test_confirmed_order_is_consumed_once() {
        let session = session();
        set_pending_order(&session, &wrap()).await.unwrap();

        assert!(confirm_pending_order(&session, ProductId::new(10)).await.unwrap());

        let order = take_confirmed_order(&session).await.unwrap();
        assert_eq!(order.map(|p| p.name), Some("Wrap".to_string()));
        assert!(take_confirmed_order(&session).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_confirm_without_pending_order() {
        let session = session();

        assert!(!confirm_pending_order(&session, ProductId::new(10)).await.unwrap());
        assert!(take_confirmed_order(&session).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_confirm_rejects_mismatched_product() {
        let session = session();
        set_pending_order(&session, &wrap()).await.unwrap();

        assert!(!confirm_pending_order(&session, ProductId::new(11)).await.unwrap());
        assert!(take_confirmed_order(&session).await.unwrap().is_none());
    }
}
