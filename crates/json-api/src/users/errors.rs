//! User Errors

use salvo::http::StatusError;
use tracing::error;

use shopfront_app::domain::users::UsersServiceError;

pub(crate) fn into_status_error(error: UsersServiceError) -> StatusError {
    match error {
        UsersServiceError::EmailTaken => {
            StatusError::conflict().brief("Email address is already registered")
        }
        UsersServiceError::InvalidCredentials => {
            StatusError::unauthorized().brief("Invalid email or password")
        }
        UsersServiceError::WeakPassword(min) => StatusError::bad_request()
            .brief(format!("Password must be at least {min} characters")),
        UsersServiceError::InvalidReference
        | UsersServiceError::MissingRequiredData
        | UsersServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid user payload")
        }
        UsersServiceError::NotFound => StatusError::not_found().brief("User not found"),
        UsersServiceError::PasswordHash => {
            error!("failed to hash password");

            StatusError::internal_server_error()
        }
        UsersServiceError::Sql(source) => {
            error!("user storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn caller_errors_map_to_client_statuses() {
        let cases = [
            (UsersServiceError::EmailTaken, StatusCode::CONFLICT),
            (UsersServiceError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (UsersServiceError::WeakPassword(8), StatusCode::BAD_REQUEST),
            (UsersServiceError::MissingRequiredData, StatusCode::BAD_REQUEST),
            (UsersServiceError::NotFound, StatusCode::NOT_FOUND),
            (UsersServiceError::PasswordHash, StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, expected) in cases {
            assert_eq!(into_status_error(error).code, expected);
        }
    }
}
