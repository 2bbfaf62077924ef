//! PostgreSQL implementation of the booking store.
//!
//! All mutation is transactional read-modify-write scoped to one request.
//! Uniqueness invariants are enforced by the unique indexes created in
//! `migrations/`, and violations are translated into the matching typed
//! errors here.

use sqlx::PgPool;
use uuid::Uuid;

use super::models::{AccountRow, EventRow, EventServiceRow, ServiceRow, VendorRow};
use crate::domain::{
    Account, AccountId, Event, EventId, EventService, Service, ServiceId, Vendor, VendorId,
};
use crate::error::BookingError;

/// PostgreSQL-backed store using `sqlx::PgPool`.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Creates a new store with the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Runs pending database migrations.
    ///
    /// # Errors
    ///
    /// Returns a [`BookingError::Persistence`] if migrations fail.
    pub async fn migrate(&self) -> Result<(), BookingError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| BookingError::Persistence(format!("migration failed: {e}")))?;
        Ok(())
    }
}

// ── Accounts ────────────────────────────────────────────────────────────

impl PostgresStore {
    /// Inserts a new account.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::DuplicateUsername`] or
    /// [`BookingError::DuplicateEmail`] when the corresponding unique index
    /// rejects the row (the atomic form of the registration uniqueness
    /// check), and [`BookingError::Persistence`] on other failures.
    pub async fn insert_account(&self, account: &Account) -> Result<(), BookingError> {
        sqlx::query(
            "INSERT INTO accounts (id, username, email, password_hash, role, full_name, phone, active, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
        )
        .bind(account.id.as_uuid())
        .bind(&account.username)
        .bind(&account.email)
        .bind(&account.password_hash)
        .bind(account.role.as_str())
        .bind(&account.full_name)
        .bind(&account.phone)
        .bind(account.active)
        .bind(account.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_account_insert_err)?;
        Ok(())
    }

    /// Looks up an account by username.
    ///
    /// # Errors
    ///
    /// Returns a [`BookingError::Persistence`] on database failure.
    pub async fn find_account_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Account>, BookingError> {
        let row = sqlx::query_as::<_, AccountRow>(
            "SELECT id, username, email, password_hash, role, full_name, phone, active, created_at \
             FROM accounts WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(pg_err)?;
        row.map(Account::try_from).transpose()
    }

    /// Looks up an account by id.
    ///
    /// # Errors
    ///
    /// Returns a [`BookingError::Persistence`] on database failure.
    pub async fn find_account_by_id(
        &self,
        id: AccountId,
    ) -> Result<Option<Account>, BookingError> {
        let row = sqlx::query_as::<_, AccountRow>(
            "SELECT id, username, email, password_hash, role, full_name, phone, active, created_at \
             FROM accounts WHERE id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(pg_err)?;
        row.map(Account::try_from).transpose()
    }

    /// Returns whether a username is already taken.
    ///
    /// # Errors
    ///
    /// Returns a [`BookingError::Persistence`] on database failure.
    pub async fn username_exists(&self, username: &str) -> Result<bool, BookingError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM accounts WHERE username = $1)")
            .bind(username)
            .fetch_one(&self.pool)
            .await
            .map_err(pg_err)
    }

    /// Returns whether an email is already registered.
    ///
    /// # Errors
    ///
    /// Returns a [`BookingError::Persistence`] on database failure.
    pub async fn email_exists(&self, email: &str) -> Result<bool, BookingError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM accounts WHERE email = $1)")
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(pg_err)
    }

    /// Returns all accounts, newest first.
    ///
    /// # Errors
    ///
    /// Returns a [`BookingError::Persistence`] on database failure.
    pub async fn list_accounts(&self) -> Result<Vec<Account>, BookingError> {
        let rows = sqlx::query_as::<_, AccountRow>(
            "SELECT id, username, email, password_hash, role, full_name, phone, active, created_at \
             FROM accounts ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(pg_err)?;
        rows.into_iter().map(Account::try_from).collect()
    }

    /// Sets the active flag on an account, returning the updated row.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::NotFound`] if the account does not exist and
    /// [`BookingError::Persistence`] on database failure.
    pub async fn set_account_active(
        &self,
        id: AccountId,
        active: bool,
    ) -> Result<Account, BookingError> {
        let row = sqlx::query_as::<_, AccountRow>(
            "UPDATE accounts SET active = $2 WHERE id = $1 \
             RETURNING id, username, email, password_hash, role, full_name, phone, active, created_at",
        )
        .bind(id.as_uuid())
        .bind(active)
        .fetch_optional(&self.pool)
        .await
        .map_err(pg_err)?
        .ok_or(BookingError::NotFound("account"))?;
        row.try_into()
    }

    /// Counts all accounts.
    ///
    /// # Errors
    ///
    /// Returns a [`BookingError::Persistence`] on database failure.
    pub async fn count_accounts(&self) -> Result<i64, BookingError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM accounts")
            .fetch_one(&self.pool)
            .await
            .map_err(pg_err)
    }
}

// ── Sessions ────────────────────────────────────────────────────────────

impl PostgresStore {
    /// Creates a session for an account and returns the opaque token.
    ///
    /// # Errors
    ///
    /// Returns a [`BookingError::Persistence`] on database failure.
    pub async fn create_session(&self, account_id: AccountId) -> Result<Uuid, BookingError> {
        let token = Uuid::new_v4();
        sqlx::query("INSERT INTO sessions (token, account_id) VALUES ($1, $2)")
            .bind(token)
            .bind(account_id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(pg_err)?;
        Ok(token)
    }

    /// Removes a session token.
    ///
    /// # Errors
    ///
    /// Returns a [`BookingError::Persistence`] on database failure.
    pub async fn delete_session(&self, token: Uuid) -> Result<(), BookingError> {
        sqlx::query("DELETE FROM sessions WHERE token = $1")
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(pg_err)?;
        Ok(())
    }

    /// Resolves a session token to its account.
    ///
    /// # Errors
    ///
    /// Returns a [`BookingError::Persistence`] on database failure.
    pub async fn find_account_by_session(
        &self,
        token: Uuid,
    ) -> Result<Option<Account>, BookingError> {
        let row = sqlx::query_as::<_, AccountRow>(
            "SELECT a.id, a.username, a.email, a.password_hash, a.role, a.full_name, a.phone, a.active, a.created_at \
             FROM accounts a JOIN sessions s ON s.account_id = a.id WHERE s.token = $1",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(pg_err)?;
        row.map(Account::try_from).transpose()
    }
}

// ── Services ────────────────────────────────────────────────────────────

impl PostgresStore {
    /// Inserts a new catalog service.
    ///
    /// # Errors
    ///
    /// Returns a [`BookingError::Persistence`] on database failure.
    pub async fn insert_service(&self, service: &Service) -> Result<(), BookingError> {
        sqlx::query(
            "INSERT INTO services (id, name, description, base_price, category, available, image_url, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(service.id.as_uuid())
        .bind(&service.name)
        .bind(&service.description)
        .bind(service.base_price)
        .bind(&service.category)
        .bind(service.available)
        .bind(&service.image_url)
        .bind(service.created_at)
        .execute(&self.pool)
        .await
        .map_err(pg_err)?;
        Ok(())
    }

    /// Updates a service, returning the stored row.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::NotFound`] if the service does not exist and
    /// [`BookingError::Persistence`] on database failure.
    pub async fn update_service(&self, service: &Service) -> Result<Service, BookingError> {
        let row = sqlx::query_as::<_, ServiceRow>(
            "UPDATE services SET name = $2, description = $3, base_price = $4, category = $5, \
             available = $6, image_url = $7 WHERE id = $1 \
             RETURNING id, name, description, base_price, category, available, image_url, created_at",
        )
        .bind(service.id.as_uuid())
        .bind(&service.name)
        .bind(&service.description)
        .bind(service.base_price)
        .bind(&service.category)
        .bind(service.available)
        .bind(&service.image_url)
        .fetch_optional(&self.pool)
        .await
        .map_err(pg_err)?
        .ok_or(BookingError::NotFound("service"))?;
        Ok(row.into())
    }

    /// Looks up a service by id.
    ///
    /// # Errors
    ///
    /// Returns a [`BookingError::Persistence`] on database failure.
    pub async fn get_service(&self, id: ServiceId) -> Result<Option<Service>, BookingError> {
        let row = sqlx::query_as::<_, ServiceRow>(
            "SELECT id, name, description, base_price, category, available, image_url, created_at \
             FROM services WHERE id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(pg_err)?;
        Ok(row.map(Service::from))
    }

    /// Deletes a service if nothing references it.
    ///
    /// The reference count and the delete run in one transaction; the
    /// `ON DELETE RESTRICT` foreign key backs the guard against a
    /// concurrent attach.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::InUse`] with the number of referencing
    /// attachments when deletion is refused, [`BookingError::NotFound`] if
    /// the service does not exist, and [`BookingError::Persistence`] on
    /// database failure.
    pub async fn delete_service(&self, id: ServiceId) -> Result<(), BookingError> {
        let mut tx = self.pool.begin().await.map_err(pg_err)?;

        let in_use = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM event_services WHERE service_id = $1",
        )
        .bind(id.as_uuid())
        .fetch_one(&mut *tx)
        .await
        .map_err(pg_err)?;

        if in_use > 0 {
            return Err(BookingError::InUse(in_use));
        }

        let result = sqlx::query("DELETE FROM services WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&mut *tx)
            .await
            .map_err(|e| map_fk_violation(e, 1))?;

        if result.rows_affected() == 0 {
            return Err(BookingError::NotFound("service"));
        }

        tx.commit().await.map_err(pg_err)?;
        Ok(())
    }

    /// Returns the services with the availability flag set, name order.
    ///
    /// # Errors
    ///
    /// Returns a [`BookingError::Persistence`] on database failure.
    pub async fn list_available_services(&self) -> Result<Vec<Service>, BookingError> {
        let rows = sqlx::query_as::<_, ServiceRow>(
            "SELECT id, name, description, base_price, category, available, image_url, created_at \
             FROM services WHERE available ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(pg_err)?;
        Ok(rows.into_iter().map(Service::from).collect())
    }

    /// Returns every service including unavailable ones (admin view).
    ///
    /// # Errors
    ///
    /// Returns a [`BookingError::Persistence`] on database failure.
    pub async fn list_all_services(&self) -> Result<Vec<Service>, BookingError> {
        let rows = sqlx::query_as::<_, ServiceRow>(
            "SELECT id, name, description, base_price, category, available, image_url, created_at \
             FROM services ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(pg_err)?;
        Ok(rows.into_iter().map(Service::from).collect())
    }

    /// Case-insensitive substring search on name over available services.
    ///
    /// # Errors
    ///
    /// Returns a [`BookingError::Persistence`] on database failure.
    pub async fn search_services(
        &self,
        query: &str,
        limit: i64,
    ) -> Result<Vec<Service>, BookingError> {
        let pattern = format!("%{query}%");
        let rows = sqlx::query_as::<_, ServiceRow>(
            "SELECT id, name, description, base_price, category, available, image_url, created_at \
             FROM services WHERE available AND name ILIKE $1 ORDER BY name LIMIT $2",
        )
        .bind(pattern)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(pg_err)?;
        Ok(rows.into_iter().map(Service::from).collect())
    }

    /// Counts all services.
    ///
    /// # Errors
    ///
    /// Returns a [`BookingError::Persistence`] on database failure.
    pub async fn count_services(&self) -> Result<i64, BookingError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM services")
            .fetch_one(&self.pool)
            .await
            .map_err(pg_err)
    }
}

// ── Vendors ─────────────────────────────────────────────────────────────

impl PostgresStore {
    /// Inserts a new vendor.
    ///
    /// # Errors
    ///
    /// Returns a [`BookingError::Persistence`] on database failure.
    pub async fn insert_vendor(&self, vendor: &Vendor) -> Result<(), BookingError> {
        sqlx::query(
            "INSERT INTO vendors (id, name, service_type, contact_name, phone, email, rating, notes, active) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
        )
        .bind(vendor.id.as_uuid())
        .bind(&vendor.name)
        .bind(&vendor.service_type)
        .bind(&vendor.contact_name)
        .bind(&vendor.phone)
        .bind(&vendor.email)
        .bind(vendor.rating)
        .bind(&vendor.notes)
        .bind(vendor.active)
        .execute(&self.pool)
        .await
        .map_err(pg_err)?;
        Ok(())
    }

    /// Updates a vendor, returning the stored row.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::NotFound`] if the vendor does not exist and
    /// [`BookingError::Persistence`] on database failure.
    pub async fn update_vendor(&self, vendor: &Vendor) -> Result<Vendor, BookingError> {
        let row = sqlx::query_as::<_, VendorRow>(
            "UPDATE vendors SET name = $2, service_type = $3, contact_name = $4, phone = $5, \
             email = $6, rating = $7, notes = $8, active = $9 WHERE id = $1 \
             RETURNING id, name, service_type, contact_name, phone, email, rating, notes, active",
        )
        .bind(vendor.id.as_uuid())
        .bind(&vendor.name)
        .bind(&vendor.service_type)
        .bind(&vendor.contact_name)
        .bind(&vendor.phone)
        .bind(&vendor.email)
        .bind(vendor.rating)
        .bind(&vendor.notes)
        .bind(vendor.active)
        .fetch_optional(&self.pool)
        .await
        .map_err(pg_err)?
        .ok_or(BookingError::NotFound("vendor"))?;
        Ok(row.into())
    }

    /// Looks up a vendor by id.
    ///
    /// # Errors
    ///
    /// Returns a [`BookingError::Persistence`] on database failure.
    pub async fn get_vendor(&self, id: VendorId) -> Result<Option<Vendor>, BookingError> {
        let row = sqlx::query_as::<_, VendorRow>(
            "SELECT id, name, service_type, contact_name, phone, email, rating, notes, active \
             FROM vendors WHERE id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(pg_err)?;
        Ok(row.map(Vendor::from))
    }

    /// Deletes a vendor unconditionally (no in-use guard).
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::NotFound`] if the vendor does not exist and
    /// [`BookingError::Persistence`] on database failure.
    pub async fn delete_vendor(&self, id: VendorId) -> Result<(), BookingError> {
        let result = sqlx::query("DELETE FROM vendors WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(pg_err)?;
        if result.rows_affected() == 0 {
            return Err(BookingError::NotFound("vendor"));
        }
        Ok(())
    }

    /// Returns all vendors, name order.
    ///
    /// # Errors
    ///
    /// Returns a [`BookingError::Persistence`] on database failure.
    pub async fn list_vendors(&self) -> Result<Vec<Vendor>, BookingError> {
        let rows = sqlx::query_as::<_, VendorRow>(
            "SELECT id, name, service_type, contact_name, phone, email, rating, notes, active \
             FROM vendors ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(pg_err)?;
        Ok(rows.into_iter().map(Vendor::from).collect())
    }
}

// ── Events ──────────────────────────────────────────────────────────────

impl PostgresStore {
    /// Inserts a new event.
    ///
    /// # Errors
    ///
    /// Returns a [`BookingError::Persistence`] on database failure.
    pub async fn insert_event(&self, event: &Event) -> Result<(), BookingError> {
        sqlx::query(
            "INSERT INTO events (id, account_id, title, description, scheduled_at, location, \
             guest_count, budget, status, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)",
        )
        .bind(event.id.as_uuid())
        .bind(event.account_id.as_uuid())
        .bind(&event.title)
        .bind(&event.description)
        .bind(event.scheduled_at)
        .bind(&event.location)
        .bind(event.guest_count)
        .bind(event.budget)
        .bind(event.status.as_str())
        .bind(event.created_at)
        .bind(event.updated_at)
        .execute(&self.pool)
        .await
        .map_err(pg_err)?;
        Ok(())
    }

    /// Updates an event, returning the stored row.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::NotFound`] if the event does not exist and
    /// [`BookingError::Persistence`] on database failure.
    pub async fn update_event(&self, event: &Event) -> Result<Event, BookingError> {
        let row = sqlx::query_as::<_, EventRow>(
            "UPDATE events SET title = $2, description = $3, scheduled_at = $4, location = $5, \
             guest_count = $6, budget = $7, status = $8, updated_at = $9 WHERE id = $1 \
             RETURNING id, account_id, title, description, scheduled_at, location, guest_count, \
             budget, status, created_at, updated_at",
        )
        .bind(event.id.as_uuid())
        .bind(&event.title)
        .bind(&event.description)
        .bind(event.scheduled_at)
        .bind(&event.location)
        .bind(event.guest_count)
        .bind(event.budget)
        .bind(event.status.as_str())
        .bind(event.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(pg_err)?
        .ok_or(BookingError::NotFound("event"))?;
        row.try_into()
    }

    /// Looks up an event by id.
    ///
    /// # Errors
    ///
    /// Returns a [`BookingError::Persistence`] on database failure.
    pub async fn get_event(&self, id: EventId) -> Result<Option<Event>, BookingError> {
        let row = sqlx::query_as::<_, EventRow>(
            "SELECT id, account_id, title, description, scheduled_at, location, guest_count, \
             budget, status, created_at, updated_at FROM events WHERE id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(pg_err)?;
        row.map(Event::try_from).transpose()
    }

    /// Returns the events owned by an account, scheduled date descending.
    ///
    /// # Errors
    ///
    /// Returns a [`BookingError::Persistence`] on database failure.
    pub async fn list_events_for(&self, owner: AccountId) -> Result<Vec<Event>, BookingError> {
        let rows = sqlx::query_as::<_, EventRow>(
            "SELECT id, account_id, title, description, scheduled_at, location, guest_count, \
             budget, status, created_at, updated_at FROM events \
             WHERE account_id = $1 ORDER BY scheduled_at DESC",
        )
        .bind(owner.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(pg_err)?;
        rows.into_iter().map(Event::try_from).collect()
    }

    /// Returns all events, scheduled date descending (administrator view).
    ///
    /// # Errors
    ///
    /// Returns a [`BookingError::Persistence`] on database failure.
    pub async fn list_all_events(&self) -> Result<Vec<Event>, BookingError> {
        let rows = sqlx::query_as::<_, EventRow>(
            "SELECT id, account_id, title, description, scheduled_at, location, guest_count, \
             budget, status, created_at, updated_at FROM events ORDER BY scheduled_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(pg_err)?;
        rows.into_iter().map(Event::try_from).collect()
    }

    /// Returns the most recently created events.
    ///
    /// # Errors
    ///
    /// Returns a [`BookingError::Persistence`] on database failure.
    pub async fn recent_events(&self, limit: i64) -> Result<Vec<Event>, BookingError> {
        let rows = sqlx::query_as::<_, EventRow>(
            "SELECT id, account_id, title, description, scheduled_at, location, guest_count, \
             budget, status, created_at, updated_at FROM events \
             ORDER BY created_at DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(pg_err)?;
        rows.into_iter().map(Event::try_from).collect()
    }

    /// Counts all events.
    ///
    /// # Errors
    ///
    /// Returns a [`BookingError::Persistence`] on database failure.
    pub async fn count_events(&self) -> Result<i64, BookingError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM events")
            .fetch_one(&self.pool)
            .await
            .map_err(pg_err)
    }

    /// Counts events in the given status.
    ///
    /// # Errors
    ///
    /// Returns a [`BookingError::Persistence`] on database failure.
    pub async fn count_events_with_status(&self, status: &str) -> Result<i64, BookingError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM events WHERE status = $1")
            .bind(status)
            .fetch_one(&self.pool)
            .await
            .map_err(pg_err)
    }
}

// ── Attachments ─────────────────────────────────────────────────────────

impl PostgresStore {
    /// Inserts a service attachment.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::AlreadyAttached`] when the `(event, service)`
    /// unique index rejects the row, and [`BookingError::Persistence`] on
    /// other failures.
    pub async fn insert_attachment(&self, attachment: &EventService) -> Result<(), BookingError> {
        sqlx::query(
            "INSERT INTO event_services (id, event_id, service_id, agreed_price, notes, added_at) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(attachment.id)
        .bind(attachment.event_id.as_uuid())
        .bind(attachment.service_id.as_uuid())
        .bind(attachment.agreed_price)
        .bind(&attachment.notes)
        .bind(attachment.added_at)
        .execute(&self.pool)
        .await
        .map_err(map_attachment_insert_err)?;
        Ok(())
    }

    /// Removes the attachment for an `(event, service)` pair.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::NotFound`] if no such attachment exists and
    /// [`BookingError::Persistence`] on database failure.
    pub async fn delete_attachment(
        &self,
        event_id: EventId,
        service_id: ServiceId,
    ) -> Result<(), BookingError> {
        let result =
            sqlx::query("DELETE FROM event_services WHERE event_id = $1 AND service_id = $2")
                .bind(event_id.as_uuid())
                .bind(service_id.as_uuid())
                .execute(&self.pool)
                .await
                .map_err(pg_err)?;
        if result.rows_affected() == 0 {
            return Err(BookingError::NotFound("attachment"));
        }
        Ok(())
    }

    /// Returns an event's attachments in the order they were added.
    ///
    /// # Errors
    ///
    /// Returns a [`BookingError::Persistence`] on database failure.
    pub async fn list_attachments(
        &self,
        event_id: EventId,
    ) -> Result<Vec<EventService>, BookingError> {
        let rows = sqlx::query_as::<_, EventServiceRow>(
            "SELECT id, event_id, service_id, agreed_price, notes, added_at \
             FROM event_services WHERE event_id = $1 ORDER BY added_at",
        )
        .bind(event_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(pg_err)?;
        Ok(rows.into_iter().map(EventService::from).collect())
    }
}

// ── Error Mapping Helpers ───────────────────────────────────────────────

fn pg_err(e: sqlx::Error) -> BookingError {
    BookingError::Persistence(e.to_string())
}

/// Maps an account-insert failure, distinguishing the two unique indexes
/// by constraint name.
fn map_account_insert_err(e: sqlx::Error) -> BookingError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
            if let Some(dup) = account_duplicate_for(db_err.constraint()) {
                return dup;
            }
        }
    }
    BookingError::Persistence(e.to_string())
}

/// Resolves which registration uniqueness constraint was violated.
fn account_duplicate_for(constraint: Option<&str>) -> Option<BookingError> {
    match constraint {
        Some("accounts_username_key") => Some(BookingError::DuplicateUsername),
        Some("accounts_email_key") => Some(BookingError::DuplicateEmail),
        _ => None,
    }
}

/// Maps an attachment-insert failure: the `(event_id, service_id)` unique
/// index means the pair already exists.
fn map_attachment_insert_err(e: sqlx::Error) -> BookingError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
            return BookingError::AlreadyAttached;
        }
    }
    BookingError::Persistence(e.to_string())
}

/// Maps a foreign-key violation (a concurrent attach racing the delete
/// guard) to [`BookingError::InUse`].
fn map_fk_violation(e: sqlx::Error, count: i64) -> BookingError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_foreign_key_violation() {
            return BookingError::InUse(count);
        }
    }
    BookingError::Persistence(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_constraint_maps_to_duplicate_username() {
        assert!(matches!(
            account_duplicate_for(Some("accounts_username_key")),
            Some(BookingError::DuplicateUsername)
        ));
    }

    #[test]
    fn email_constraint_maps_to_duplicate_email() {
        assert!(matches!(
            account_duplicate_for(Some("accounts_email_key")),
            Some(BookingError::DuplicateEmail)
        ));
    }

    #[test]
    fn unknown_constraint_is_not_a_duplicate() {
        assert!(account_duplicate_for(Some("accounts_pkey")).is_none());
        assert!(account_duplicate_for(None).is_none());
    }

    #[test]
    fn non_database_errors_stay_persistence_errors() {
        let err = map_account_insert_err(sqlx::Error::RowNotFound);
        assert!(matches!(err, BookingError::Persistence(_)));
        let err = map_attachment_insert_err(sqlx::Error::RowNotFound);
        assert!(matches!(err, BookingError::Persistence(_)));
        let err = map_fk_violation(sqlx::Error::RowNotFound, 2);
        assert!(matches!(err, BookingError::Persistence(_)));
    }
}
