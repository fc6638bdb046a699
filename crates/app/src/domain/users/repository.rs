//! Users Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};

use crate::domain::users::records::{UserCredentials, UserRecord, UserUuid};

const LIST_USERS_SQL: &str = include_str!("sql/list_users.sql");
const GET_USER_SQL: &str = include_str!("sql/get_user.sql");
const EMAIL_EXISTS_SQL: &str = include_str!("sql/email_exists.sql");
const FIND_CREDENTIALS_BY_EMAIL_SQL: &str = include_str!("sql/find_credentials_by_email.sql");
const FIND_CREDENTIALS_BY_UUID_SQL: &str = include_str!("sql/find_credentials_by_uuid.sql");
const CREATE_USER_SQL: &str = include_str!("sql/create_user.sql");
const UPDATE_PASSWORD_SQL: &str = include_str!("sql/update_password.sql");
const SET_ADMIN_SQL: &str = include_str!("sql/set_admin.sql");
const DELETE_USER_SQL: &str = include_str!("sql/delete_user.sql");
const COUNT_USERS_SQL: &str = include_str!("sql/count_users.sql");

/// Columns written when inserting a user.
#[derive(Debug, Clone, Copy)]
pub(crate) struct UserRow<'a> {
    pub(crate) uuid: UserUuid,
    pub(crate) email: &'a str,
    pub(crate) username: &'a str,
    pub(crate) password_hash: &'a str,
    pub(crate) is_admin: bool,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgUsersRepository;

impl PgUsersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_users(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<UserRecord>, sqlx::Error> {
        query_as::<Postgres, UserRecord>(LIST_USERS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_user(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<UserRecord, sqlx::Error> {
        query_as::<Postgres, UserRecord>(GET_USER_SQL)
            .bind(user.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn email_exists(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        email: &str,
    ) -> Result<bool, sqlx::Error> {
        query_scalar::<Postgres, bool>(EMAIL_EXISTS_SQL)
            .bind(email)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn find_credentials_by_email(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        email: &str,
    ) -> Result<Option<UserCredentials>, sqlx::Error> {
        query_as::<Postgres, UserCredentials>(FIND_CREDENTIALS_BY_EMAIL_SQL)
            .bind(email)
            .fetch_optional(&mut **tx)
            .await
    }

    /// Load a user's credentials, locking the row until the transaction ends.
    pub(crate) async fn lock_credentials(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<UserCredentials, sqlx::Error> {
        query_as::<Postgres, UserCredentials>(FIND_CREDENTIALS_BY_UUID_SQL)
            .bind(user.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_user(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        row: UserRow<'_>,
    ) -> Result<UserRecord, sqlx::Error> {
        query_as::<Postgres, UserRecord>(CREATE_USER_SQL)
            .bind(row.uuid.into_uuid())
            .bind(row.email)
            .bind(row.username)
            .bind(row.password_hash)
            .bind(row.is_admin)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_password(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        password_hash: &str,
    ) -> Result<UserRecord, sqlx::Error> {
        query_as::<Postgres, UserRecord>(UPDATE_PASSWORD_SQL)
            .bind(user.into_uuid())
            .bind(password_hash)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn set_admin(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        is_admin: bool,
    ) -> Result<UserRecord, sqlx::Error> {
        query_as::<Postgres, UserRecord>(SET_ADMIN_SQL)
            .bind(user.into_uuid())
            .bind(is_admin)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_user(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_USER_SQL)
            .bind(user.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn count_users(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<i64, sqlx::Error> {
        query_scalar::<Postgres, i64>(COUNT_USERS_SQL)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for UserRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: UserUuid::from_uuid(row.try_get("uuid")?),
            email: row.try_get("email")?,
            username: row.try_get("username")?,
            is_admin: row.try_get("is_admin")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for UserCredentials {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            user: UserRecord::from_row(row)?,
            password_hash: row.try_get("password_hash")?,
        })
    }
}
