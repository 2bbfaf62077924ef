//! Account service: registration, authentication, and account management.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::{Account, AccountId, Role};
use crate::error::BookingError;
use crate::persistence::PostgresStore;

/// Minimum password length accepted at registration.
const MIN_PASSWORD_LEN: usize = 6;

/// Fields submitted at registration.
#[derive(Debug, Clone)]
pub struct RegistrationInput {
    /// Requested username.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Plaintext password; hashed before it ever reaches the store.
    pub password: String,
    /// Display name.
    pub full_name: String,
    /// Optional contact phone.
    pub phone: Option<String>,
}

/// Result of a username/email availability lookup.
#[derive(Debug, Clone)]
pub struct Availability {
    /// Whether the value can be used for a new registration.
    pub available: bool,
    /// Human-readable reason, suitable for inline form feedback.
    pub message: String,
}

/// Orchestration layer for identity operations.
#[derive(Debug, Clone)]
pub struct AccountService {
    store: Arc<PostgresStore>,
}

impl AccountService {
    /// Creates a new `AccountService`.
    #[must_use]
    pub fn new(store: Arc<PostgresStore>) -> Self {
        Self { store }
    }

    /// Registers a new client account.
    ///
    /// The new account always gets `role=client, active=true`;
    /// administrators are provisioned out of band. Uniqueness of username
    /// and email is enforced atomically by the store's unique indexes.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::Validation`] on field errors,
    /// [`BookingError::DuplicateUsername`] / [`BookingError::DuplicateEmail`]
    /// on collision.
    pub async fn register(&self, input: RegistrationInput) -> Result<Account, BookingError> {
        validate_registration(&input)?;

        let password_hash = hash_password(input.password).await?;
        let account = Account {
            id: AccountId::new(),
            username: input.username,
            email: input.email,
            password_hash,
            role: Role::Client,
            full_name: input.full_name,
            phone: input.phone,
            active: true,
            created_at: Utc::now(),
        };

        self.store.insert_account(&account).await?;

        tracing::info!(account_id = %account.id, username = %account.username, "account registered");
        Ok(account)
    }

    /// Verifies a username/password pair.
    ///
    /// The password is checked before the active flag, so a wrong password
    /// on a disabled account still reads as bad credentials.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::InvalidCredentials`] when the pair does not
    /// match and [`BookingError::AccountDisabled`] for a deactivated
    /// account.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Account, BookingError> {
        let account = self
            .store
            .find_account_by_username(username)
            .await?
            .ok_or(BookingError::InvalidCredentials)?;

        let matches = verify_password(password.to_string(), account.password_hash.clone()).await?;
        if !matches {
            return Err(BookingError::InvalidCredentials);
        }
        if !account.active {
            return Err(BookingError::AccountDisabled);
        }
        Ok(account)
    }

    /// Authenticates and opens a session, returning the opaque token.
    ///
    /// # Errors
    ///
    /// Propagates [`Self::authenticate`] failures.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<(Uuid, Account), BookingError> {
        let account = self.authenticate(username, password).await?;
        let token = self.store.create_session(account.id).await?;
        tracing::info!(account_id = %account.id, "session opened");
        Ok((token, account))
    }

    /// Closes a session.
    ///
    /// # Errors
    ///
    /// Returns a [`BookingError::Persistence`] on database failure.
    pub async fn logout(&self, token: Uuid) -> Result<(), BookingError> {
        self.store.delete_session(token).await
    }

    /// Resolves a session token to its account.
    ///
    /// A session belonging to a since-deactivated account is rejected the
    /// same way a disabled login is.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::Unauthenticated`] for an unknown token and
    /// [`BookingError::AccountDisabled`] for a deactivated account.
    pub async fn resolve_session(&self, token: Uuid) -> Result<Account, BookingError> {
        let account = self
            .store
            .find_account_by_session(token)
            .await?
            .ok_or(BookingError::Unauthenticated)?;
        if !account.active {
            return Err(BookingError::AccountDisabled);
        }
        Ok(account)
    }

    /// Flips the active flag on another account.
    ///
    /// Administrator-only caller context (gated at the boundary); a caller
    /// may never deactivate their own account.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::SelfDeactivationForbidden`] when the target
    /// is the caller and [`BookingError::NotFound`] for an unknown target.
    pub async fn toggle_active(
        &self,
        actor: &Account,
        target: AccountId,
    ) -> Result<Account, BookingError> {
        if actor.id == target {
            return Err(BookingError::SelfDeactivationForbidden);
        }
        let current = self
            .store
            .find_account_by_id(target)
            .await?
            .ok_or(BookingError::NotFound("account"))?;
        let updated = self
            .store
            .set_account_active(target, !current.active)
            .await?;

        tracing::info!(
            account_id = %updated.id,
            active = updated.active,
            "account active flag toggled"
        );
        Ok(updated)
    }

    /// Returns all accounts (administrator view).
    ///
    /// # Errors
    ///
    /// Returns a [`BookingError::Persistence`] on database failure.
    pub async fn list_accounts(&self) -> Result<Vec<Account>, BookingError> {
        self.store.list_accounts().await
    }

    /// Live-validation lookup: is this username available?
    ///
    /// # Errors
    ///
    /// Returns a [`BookingError::Persistence`] on database failure.
    pub async fn username_available(&self, username: &str) -> Result<Availability, BookingError> {
        let username = username.trim();
        if username.is_empty() {
            return Ok(unavailable("username may not be empty"));
        }
        if username.len() < 3 {
            return Ok(unavailable("username must be at least 3 characters"));
        }
        if self.store.username_exists(username).await? {
            return Ok(unavailable("username is already taken"));
        }
        Ok(Availability {
            available: true,
            message: "username is available".to_string(),
        })
    }

    /// Live-validation lookup: is this email available?
    ///
    /// # Errors
    ///
    /// Returns a [`BookingError::Persistence`] on database failure.
    pub async fn email_available(&self, email: &str) -> Result<Availability, BookingError> {
        let email = email.trim();
        if email.is_empty() {
            return Ok(unavailable("email may not be empty"));
        }
        if !is_valid_email(email) {
            return Ok(unavailable("email address is not valid"));
        }
        if self.store.email_exists(email).await? {
            return Ok(unavailable("email is already registered"));
        }
        Ok(Availability {
            available: true,
            message: "email is available".to_string(),
        })
    }
}

fn unavailable(message: &str) -> Availability {
    Availability {
        available: false,
        message: message.to_string(),
    }
}

/// Hashes a password on the blocking pool (bcrypt is CPU-bound).
async fn hash_password(password: String) -> Result<String, BookingError> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, bcrypt::DEFAULT_COST))
        .await
        .map_err(|e| BookingError::Internal(format!("hash task failed: {e}")))?
        .map_err(|e| BookingError::Internal(format!("password hashing failed: {e}")))
}

/// Verifies a password against a stored hash on the blocking pool.
async fn verify_password(password: String, hash: String) -> Result<bool, BookingError> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| BookingError::Internal(format!("verify task failed: {e}")))?
        .map_err(|e| BookingError::Internal(format!("password verification failed: {e}")))
}

// ── Validation Helpers ──────────────────────────────────────────────────

fn validate_registration(input: &RegistrationInput) -> Result<(), BookingError> {
    let len = input.username.chars().count();
    if !(3..=80).contains(&len) {
        return Err(BookingError::Validation(
            "username must be 3-80 characters".to_string(),
        ));
    }
    if !is_valid_email(&input.email) || input.email.chars().count() > 120 {
        return Err(BookingError::Validation(
            "email address is not valid".to_string(),
        ));
    }
    if input.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(BookingError::Validation(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    let name_len = input.full_name.chars().count();
    if !(3..=150).contains(&name_len) {
        return Err(BookingError::Validation(
            "full name must be 3-150 characters".to_string(),
        ));
    }
    if let Some(phone) = &input.phone {
        let phone_len = phone.chars().count();
        if !(10..=15).contains(&phone_len) {
            return Err(BookingError::Validation(
                "phone must be 10-15 characters".to_string(),
            ));
        }
    }
    Ok(())
}

/// Syntactic email check: one `@`, non-empty local part, dotted domain,
/// no whitespace.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.splitn(2, '@');
    let (Some(local), Some(domain)) = (parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.len() < 3 || domain.contains('@') {
        return false;
    }
    let mut labels = domain.split('.');
    domain.contains('.') && labels.all(|l| !l.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> RegistrationInput {
        RegistrationInput {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "secret1".to_string(),
            full_name: "Alice Example".to_string(),
            phone: None,
        }
    }

    #[test]
    fn valid_registration_passes() {
        assert!(validate_registration(&input()).is_ok());
    }

    #[test]
    fn short_username_is_rejected() {
        let mut i = input();
        i.username = "ab".to_string();
        assert!(matches!(
            validate_registration(&i),
            Err(BookingError::Validation(_))
        ));
    }

    #[test]
    fn short_password_is_rejected() {
        let mut i = input();
        i.password = "12345".to_string();
        assert!(validate_registration(&i).is_err());
    }

    #[test]
    fn bad_phone_length_is_rejected() {
        let mut i = input();
        i.phone = Some("12345".to_string());
        assert!(validate_registration(&i).is_err());
    }

    #[tokio::test]
    async fn password_hash_round_trip() {
        let hash = hash_password("secret1".to_string()).await;
        let Ok(hash) = hash else {
            unreachable!("hashing failed");
        };
        assert_ne!(hash, "secret1");

        let ok = verify_password("secret1".to_string(), hash.clone()).await;
        assert_eq!(ok.ok(), Some(true));

        let wrong = verify_password("secret2".to_string(), hash).await;
        assert_eq!(wrong.ok(), Some(false));
    }

    #[test]
    fn email_syntax() {
        assert!(is_valid_email("alice@example.com"));
        assert!(is_valid_email("a.b+c@mail.example.co"));
        assert!(!is_valid_email("alice"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("alice@"));
        assert!(!is_valid_email("alice@nodot"));
        assert!(!is_valid_email("alice@ex ample.com"));
        assert!(!is_valid_email("alice@example..com"));
    }
}
