//! Order confirmation: the confirmed product plus server-picked
//! recommendations.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use leve_bem_core::ProductId;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use super::catalog::ProductView;
use crate::error::Result;
use crate::filters;
use crate::models::{confirm_pending_order, set_pending_order, take_confirmed_order};
use crate::state::AppState;

/// Order confirmation page template.
#[derive(Template, WebTemplate)]
#[template(path = "order_confirmed.html")]
pub struct OrderConfirmedTemplate {
    pub product: ProductView,
    pub recommendations: Vec<ProductView>,
}

/// Confirmation form posted from the catalog modal or a showcase card.
#[derive(Debug, Deserialize)]
pub struct ConfirmForm {
    #[serde(default)]
    pub produto: String,
}

/// Confirm the pending order and go to the confirmation page.
///
/// The confirmation page itself decides whether there is anything to show,
/// so this always redirects there.
#[instrument(skip(session))]
pub async fn confirm(session: Session, Form(form): Form<ConfirmForm>) -> Result<Redirect> {
    if let Ok(id) = form.produto.parse::<ProductId>()
        && !confirm_pending_order(&session, id).await?
    {
        tracing::warn!(product_id = %id, "Order confirmed without a matching pending selection");
    }

    Ok(Redirect::to("/pedido-confirmado"))
}

/// Order a product straight from the home showcase.
///
/// The product is fetched and handed over through the same pending and
/// confirmed slots as the catalog modal. Like [`confirm`], this always
/// redirects to the confirmation page.
#[instrument(skip(state, session))]
pub async fn buy(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<ConfirmForm>,
) -> Result<Redirect> {
    let Ok(id) = form.produto.parse::<ProductId>() else {
        tracing::warn!(produto = %form.produto, "Direct order without a valid product id");
        return Ok(Redirect::to("/pedido-confirmado"));
    };

    match state.api().products().get_by_id(id).await {
        Ok(product) => {
            set_pending_order(&session, &product).await?;
            confirm_pending_order(&session, id).await?;
        }
        Err(e) => tracing::warn!(product_id = %id, "Failed to fetch product for direct order: {e}"),
    }

    Ok(Redirect::to("/pedido-confirmado"))
}

/// Display the confirmed order.
///
/// Redirects to the catalog when no order was handed over; the slot is
/// emptied on read, so a refresh lands back on the catalog too.
#[instrument(skip(state, session))]
pub async fn show(State(state): State<AppState>, session: Session) -> Result<Response> {
    let Some(product) = take_confirmed_order(&session).await? else {
        return Ok(Redirect::to("/").into_response());
    };

    let recommendations = match state.api().products().recommendations(product.id).await {
        Ok(products) => products.iter().map(ProductView::from).collect(),
        Err(e) => {
            tracing::error!(product_id = %product.id, "Failed to fetch recommendations: {e}");
            Vec::new()
        }
    };

    Ok(OrderConfirmedTemplate {
        product: ProductView::from(&product),
        recommendations,
    }
    .into_response())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use leve_bem_core::Product;
    use rust_decimal::Decimal;

    use super::*;

    fn product(id: i64, name: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            price: Decimal::new(1250, 2),
            ingredients: String::new(),
            calories: 150,
            photo: None,
            category: None,
            owner: None,
        }
    }

    #[test]
    fn test_renders_recommendations_with_add_buttons() {
        let template = OrderConfirmedTemplate {
            product: ProductView::from(&product(1, "Wrap")),
            recommendations: vec![ProductView::from(&product(2, "Suco Verde"))],
        };
        let html = template.render().unwrap();

        assert!(html.contains("Wrap"));
        assert!(html.contains("R$ 12,50"));
        assert!(html.contains("Suco Verde"));
        assert!(html.contains("Adicionar"));
        assert!(!html.contains("Nenhuma recomendação"));
    }

    #[test]
    fn test_renders_without_recommendations() {
        let template = OrderConfirmedTemplate {
            product: ProductView::from(&product(1, "Wrap")),
            recommendations: Vec::new(),
        };
        let html = template.render().unwrap();

        assert!(html.contains("Nenhuma recomendação"));
    }
}
