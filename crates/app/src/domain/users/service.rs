//! Users service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    auth::passwords::{hash_password, reject_without_account, validate_password, verify_password},
    database::Db,
    domain::users::{
        data::{NewUser, PasswordChange},
        errors::UsersServiceError,
        records::{UserRecord, UserUuid},
        repository::{PgUsersRepository, UserRow},
    },
};

#[derive(Debug, Clone)]
pub struct PgUsersService {
    db: Db,
    repository: PgUsersRepository,
}

impl PgUsersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgUsersRepository::new(),
        }
    }
}

/// Emails are compared and stored trimmed and lowercased.
fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn validate_new_user(user: &NewUser) -> Result<(), UsersServiceError> {
    let email = user.email.trim();

    if email.is_empty() || user.username.trim().is_empty() {
        return Err(UsersServiceError::MissingRequiredData);
    }

    if !email.contains('@') {
        return Err(UsersServiceError::InvalidData);
    }

    validate_password(&user.password)?;

    Ok(())
}

#[async_trait]
impl UsersService for PgUsersService {
    async fn email_exists(&self, email: &str) -> Result<bool, UsersServiceError> {
        let mut tx = self.db.begin().await?;

        let exists = self
            .repository
            .email_exists(&mut tx, &normalize_email(email))
            .await?;

        tx.commit().await?;

        Ok(exists)
    }

    async fn register(&self, user: NewUser) -> Result<UserRecord, UsersServiceError> {
        validate_new_user(&user)?;

        let email = normalize_email(&user.email);
        let password_hash = hash_password(&user.password)?;

        let mut tx = self.db.begin().await?;

        // Advisory only: the unique index on lower(email) settles concurrent registrations.
        if self.repository.email_exists(&mut tx, &email).await? {
            return Err(UsersServiceError::EmailTaken);
        }

        let created = self
            .repository
            .create_user(
                &mut tx,
                UserRow {
                    uuid: UserUuid::new(),
                    email: &email,
                    username: user.username.trim(),
                    password_hash: &password_hash,
                    is_admin: false,
                },
            )
            .await?;

        tx.commit().await?;

        info!(user = %created.uuid, "registered user");

        Ok(created)
    }

    async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<UserRecord, UsersServiceError> {
        let mut tx = self.db.begin().await?;

        let credentials = self
            .repository
            .find_credentials_by_email(&mut tx, &normalize_email(email))
            .await?;

        tx.commit().await?;

        let Some(credentials) = credentials else {
            return Err(reject_without_account(password).into());
        };

        verify_password(password, &credentials.password_hash)?;

        Ok(credentials.user)
    }

    async fn get_user(&self, user: UserUuid) -> Result<UserRecord, UsersServiceError> {
        let mut tx = self.db.begin().await?;

        let user = self.repository.get_user(&mut tx, user).await?;

        tx.commit().await?;

        Ok(user)
    }

    async fn list_users(&self) -> Result<Vec<UserRecord>, UsersServiceError> {
        let mut tx = self.db.begin().await?;

        let users = self.repository.list_users(&mut tx).await?;

        tx.commit().await?;

        Ok(users)
    }

    async fn change_password(
        &self,
        user: UserUuid,
        change: PasswordChange,
    ) -> Result<UserRecord, UsersServiceError> {
        validate_password(&change.new_password)?;

        let mut tx = self.db.begin().await?;

        let credentials = self.repository.lock_credentials(&mut tx, user).await?;

        verify_password(&change.current_password, &credentials.password_hash)?;

        let password_hash = hash_password(&change.new_password)?;

        let updated = self
            .repository
            .update_password(&mut tx, user, &password_hash)
            .await?;

        tx.commit().await?;

        info!(%user, "changed password");

        Ok(updated)
    }

    async fn set_admin(
        &self,
        user: UserUuid,
        is_admin: bool,
    ) -> Result<UserRecord, UsersServiceError> {
        let mut tx = self.db.begin().await?;

        let updated = self.repository.set_admin(&mut tx, user, is_admin).await?;

        tx.commit().await?;

        info!(%user, is_admin, "changed admin flag");

        Ok(updated)
    }

    async fn delete_user(&self, user: UserUuid) -> Result<(), UsersServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_user(&mut tx, user).await?;

        if rows_affected == 0 {
            return Err(UsersServiceError::NotFound);
        }

        tx.commit().await?;

        info!(%user, "deleted user");

        Ok(())
    }

    async fn count_users(&self) -> Result<u64, UsersServiceError> {
        let mut tx = self.db.begin().await?;

        let count = self.repository.count_users(&mut tx).await?;

        tx.commit().await?;

        Ok(u64::try_from(count).unwrap_or_default())
    }
}

#[automock]
#[async_trait]
pub trait UsersService: Send + Sync {
    /// Whether an account already uses this email address.
    async fn email_exists(&self, email: &str) -> Result<bool, UsersServiceError>;

    /// Creates a non-admin account.
    async fn register(&self, user: NewUser) -> Result<UserRecord, UsersServiceError>;

    /// Checks an email and password pair.
    ///
    /// An unknown email and a wrong password are both reported as
    /// [`UsersServiceError::InvalidCredentials`].
    async fn authenticate(&self, email: &str, password: &str)
    -> Result<UserRecord, UsersServiceError>;

    /// Retrieve a single user.
    async fn get_user(&self, user: UserUuid) -> Result<UserRecord, UsersServiceError>;

    /// Retrieves every user.
    async fn list_users(&self) -> Result<Vec<UserRecord>, UsersServiceError>;

    /// Replaces a password after checking the current one.
    async fn change_password(
        &self,
        user: UserUuid,
        change: PasswordChange,
    ) -> Result<UserRecord, UsersServiceError>;

    /// Grants or revokes administrative rights.
    async fn set_admin(&self, user: UserUuid, is_admin: bool)
    -> Result<UserRecord, UsersServiceError>;

    /// Deletes a user and their cart. Their orders are kept.
    async fn delete_user(&self, user: UserUuid) -> Result<(), UsersServiceError>;

    /// Number of registered users.
    async fn count_users(&self) -> Result<u64, UsersServiceError>;
}
