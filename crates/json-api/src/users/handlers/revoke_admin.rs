//! Revoke Admin Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    state::State,
    users::{errors::into_status_error, models::UserResponse},
};

/// Revoke Admin Handler
#[endpoint(
    tags("users"),
    summary = "Revoke Admin",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "User is no longer an administrator"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Administrator access required"),
        (status_code = StatusCode::NOT_FOUND, description = "User not found"),
    ),
)]
#[tracing::instrument(
    name = "users.revoke_admin",
    skip_all,
    fields(user_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    user: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<UserResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.admin_or_401()?;

    let user = user.into_inner();

    tracing::Span::current().record("user_uuid", tracing::field::display(user));

    let user = state
        .app
        .users
        .set_admin(user.into(), false)
        .await
        .map_err(into_status_error)?;

    Ok(Json(user.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::test_helpers::{Mocks, OTHER_USER_UUID, admin, make_user};

    use super::*;

    #[tokio::test]
    async fn test_revoke_admin_clears_flag() -> TestResult {
        let mut mocks = Mocks::new();

        mocks
            .users
            .expect_set_admin()
            .once()
            .withf(|uuid, is_admin| *uuid == OTHER_USER_UUID && !*is_admin)
            .return_once(|uuid, is_admin| Ok(make_user(uuid, is_admin)));

        let mut res =
            TestClient::delete(format!("http://example.com/users/{OTHER_USER_UUID}/admin"))
                .send(&mocks.service(
                    admin(),
                    Router::with_path("users/{user}/admin").delete(handler),
                ))
                .await;

        let body: UserResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(!body.user.is_admin);

        Ok(())
    }
}
