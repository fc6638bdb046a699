//! Auth middleware.
//!
//! Never fails the request itself. Handlers decide whether the resolved
//! [`Authentication`] is enough for them.

use std::sync::Arc;

use salvo::{http::header::AUTHORIZATION, prelude::*};
use shopfront_app::auth::TokenError;
use tracing::{debug, error};

use crate::{auth::Authentication, extensions::*, state::State};

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let state = match depot.obtain::<Arc<State>>() {
        Ok(state) => state,
        Err(_error) => {
            error!("application state missing from depot");

            res.render(StatusError::internal_server_error());
            ctrl.skip_rest();

            return;
        }
    };

    let authentication = match bearer_token(req) {
        BearerToken::Missing => Authentication::Anonymous,
        BearerToken::Malformed => Authentication::Rejected,
        BearerToken::Present(token) => match state.app.tokens.verify(token) {
            Ok(claims) => Authentication::Authenticated(claims),
            Err(TokenError::Expired) => {
                debug!("rejected expired access token");

                Authentication::Rejected
            }
            Err(TokenError::Invalid) => {
                debug!("rejected invalid access token");

                Authentication::Rejected
            }
            Err(TokenError::Signing(source)) => {
                error!("failed to verify access token: {source}");

                Authentication::Rejected
            }
        },
    };

    depot.insert_authentication(authentication);

    ctrl.call_next(req, depot, res).await;
}

#[derive(Debug, PartialEq, Eq)]
enum BearerToken<'a> {
    Missing,
    Malformed,
    Present(&'a str),
}

fn bearer_token(req: &Request) -> BearerToken<'_> {
    let Some(value) = req.headers().get(AUTHORIZATION) else {
        return BearerToken::Missing;
    };

    let Ok(value) = value.to_str() else {
        return BearerToken::Malformed;
    };

    let mut parts = value.splitn(2, ' ');

    let scheme = parts.next().unwrap_or_default();
    let token = parts.next().unwrap_or_default().trim();

    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return BearerToken::Malformed;
    }

    BearerToken::Present(token)
}
