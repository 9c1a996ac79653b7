use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShowcaseError};
use crate::model::{ItemId, ViewKind};
use crate::session::Session;
use tracing::debug;

/// Adds a home-page product to the cart. Only the counter is kept.
pub fn add(session: &mut Session, id: ItemId) -> Result<CmdResult> {
    let view = session.view();
    if view != ViewKind::Home {
        return Err(ShowcaseError::WrongView {
            view,
            action: "adding to cart",
        });
    }

    let cv = session.catalog_view_mut("adding to cart")?;
    let title = cv
        .catalog
        .get(id)
        .map(|item| item.title.clone())
        .ok_or(ShowcaseError::ItemNotFound { view, id })?;
    cv.cart_items = cv.cart_items.saturating_add(1);
    debug!(%id, cart_items = cv.cart_items, "added to cart");

    let mut result = CmdResult::default().with_message(CmdMessage::success(format!(
        "Added to cart: {}",
        title
    )));
    result.cart_items = Some(cv.cart_items);
    Ok(result)
}
