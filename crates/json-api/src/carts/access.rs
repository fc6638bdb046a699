//! Cart ownership checks.

use salvo::http::StatusError;
use shopfront_app::{
    auth::Claims,
    domain::carts::records::{CartRecord, CartUuid},
};

use crate::{carts::errors::into_status_error, state::State};

/// Load a cart the caller may act on.
///
/// Someone else's cart is reported as missing so cart ids cannot be probed.
pub(super) async fn accessible_cart(
    state: &State,
    claims: &Claims,
    cart: CartUuid,
) -> Result<CartRecord, StatusError> {
    let cart = state
        .app
        .carts
        .get_cart(cart)
        .await
        .map_err(into_status_error)?;

    if !claims.may_act_for(cart.user_uuid) {
        return Err(StatusError::not_found().brief("Cart not found"));
    }

    Ok(cart)
}
