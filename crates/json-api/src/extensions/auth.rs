//! Authentication accessors for handlers.

use salvo::prelude::{Depot, StatusError};
use shopfront_app::auth::Claims;

use crate::auth::Authentication;

/// Read the caller's [`Authentication`] out of the depot.
pub(crate) trait AuthDepotExt {
    fn insert_authentication(&mut self, authentication: Authentication);

    /// Claims of any signed-in caller.
    fn claims_or_401(&self) -> Result<Claims, StatusError>;

    /// Claims of a signed-in admin.
    fn admin_or_401(&self) -> Result<Claims, StatusError>;
}

impl AuthDepotExt for Depot {
    fn insert_authentication(&mut self, authentication: Authentication) {
        self.inject(authentication);
    }

    fn claims_or_401(&self) -> Result<Claims, StatusError> {
        match self.obtain::<Authentication>() {
            Ok(Authentication::Authenticated(claims)) => Ok(claims.clone()),
            Ok(Authentication::Rejected) => {
                Err(StatusError::unauthorized().brief("Invalid or expired access token"))
            }
            Ok(Authentication::Anonymous) | Err(_) => {
                Err(StatusError::unauthorized().brief("Missing access token"))
            }
        }
    }

    fn admin_or_401(&self) -> Result<Claims, StatusError> {
        let claims = self.claims_or_401()?;

        if !claims.is_admin {
            return Err(StatusError::unauthorized().brief("Administrator access required"));
        }

        Ok(claims)
    }
}
