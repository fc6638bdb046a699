//! Login Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, state::State, users::errors::into_status_error};

/// Login Request
#[derive(Deserialize, Serialize, ToSchema)]
pub(crate) struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Login Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LoginResponse {
    pub success: bool,
    /// Bearer access token
    pub access: String,
    /// When the token stops being accepted
    pub expires_at: String,
}

/// Login Handler
///
/// Exchanges an email and password for an access token.
#[endpoint(
    tags("users"),
    summary = "Login",
    responses(
        (status_code = StatusCode::OK, description = "Access token issued"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Invalid email or password"),
    ),
)]
#[tracing::instrument(name = "users.login", skip_all, fields(user_uuid = tracing::field::Empty), err)]
pub(crate) async fn handler(
    json: JsonBody<LoginRequest>,
    depot: &mut Depot,
) -> Result<Json<LoginResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let user = state
        .app
        .users
        .authenticate(&request.email, &request.password)
        .await
        .map_err(into_status_error)?;

    tracing::Span::current().record("user_uuid", tracing::field::display(user.uuid));

    let issued = state
        .app
        .tokens
        .issue(&user)
        .or_500("failed to issue access token")?;

    Ok(Json(LoginResponse {
        success: true,
        access: issued.token,
        expires_at: issued.expires_at.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use shopfront_app::{
        auth::{IssuedToken, TokenError},
        domain::users::UsersServiceError,
    };

    use crate::{
        auth::Authentication,
        test_helpers::{Mocks, TEST_USER_UUID, make_user},
    };

    use super::*;

    fn make_service(mocks: Mocks) -> Service {
        mocks.service(
            Authentication::Anonymous,
            Router::with_path("users/login").post(handler),
        )
    }

    fn payload() -> serde_json::Value {
        json!({ "email": "ada@example.com", "password": "correct horse battery" })
    }

    #[tokio::test]
    async fn test_login_returns_access_token() -> TestResult {
        let mut mocks = Mocks::new();

        mocks
            .users
            .expect_authenticate()
            .once()
            .withf(|email, password| email == "ada@example.com" && password == "correct horse battery")
            .return_once(|_, _| Ok(make_user(TEST_USER_UUID, false)));

        mocks
            .tokens
            .expect_issue()
            .once()
            .withf(|user| user.uuid == TEST_USER_UUID)
            .return_once(|_| {
                Ok(IssuedToken {
                    token: "signed.jwt.token".to_string(),
                    expires_at: Timestamp::UNIX_EPOCH,
                })
            });

        let mut res = TestClient::post("http://example.com/users/login")
            .json(&payload())
            .send(&make_service(mocks))
            .await;

        let body: LoginResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(body.success);
        assert_eq!(body.access, "signed.jwt.token");

        Ok(())
    }

    #[tokio::test]
    async fn test_login_bad_credentials_returns_401() -> TestResult {
        let mut mocks = Mocks::new();

        mocks
            .users
            .expect_authenticate()
            .once()
            .return_once(|_, _| Err(UsersServiceError::InvalidCredentials));

        mocks.tokens.expect_issue().never();

        let res = TestClient::post("http://example.com/users/login")
            .json(&payload())
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_login_signing_failure_returns_500() -> TestResult {
        let mut mocks = Mocks::new();

        mocks
            .users
            .expect_authenticate()
            .once()
            .return_once(|_, _| Ok(make_user(TEST_USER_UUID, false)));

        mocks
            .tokens
            .expect_issue()
            .once()
            .return_once(|_| Err(TokenError::Signing("no key".to_string())));

        let res = TestClient::post("http://example.com/users/login")
            .json(&payload())
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
