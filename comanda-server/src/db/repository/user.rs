//! User Repository

use super::{BaseRepository, RepoError, RepoResult, parse_record_id};
use crate::db::models::{User, UserCreate};
use shared::Role;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const USER_TABLE: &str = "user";

#[derive(Clone)]
pub struct UserRepository {
    base: BaseRepository,
}

impl UserRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Create a new user with an empty order list
    ///
    /// The display name falls back to one derived from the login. No
    /// login-uniqueness check happens here (the store carries none either).
    pub async fn create(&self, data: UserCreate) -> RepoResult<User> {
        let name = data
            .name
            .unwrap_or_else(|| User::derive_name(&data.login));

        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE user SET
                    name = $name,
                    role = $role,
                    login = $login,
                    password = $password,
                    orders = []
                RETURN AFTER"#,
            )
            .bind(("name", name))
            .bind(("role", data.role))
            .bind(("login", data.login))
            .bind(("password", data.password))
            .await?;

        let created: Option<User> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create user".to_string()))
    }

    /// Find user by login
    pub async fn find_by_login(&self, login: &str) -> RepoResult<Option<User>> {
        let login_owned = login.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM user WHERE login = $login LIMIT 1")
            .bind(("login", login_owned))
            .await?;
        let users: Vec<User> = result.take(0)?;
        Ok(users.into_iter().next())
    }

    /// Find user by exact login/password pair
    ///
    /// Credentials are compared verbatim; see DESIGN.md.
    pub async fn find_by_credentials(
        &self,
        login: &str,
        password: &str,
    ) -> RepoResult<Option<User>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM user WHERE login = $login AND password = $password LIMIT 1")
            .bind(("login", login.to_string()))
            .bind(("password", password.to_string()))
            .await?;
        let users: Vec<User> = result.take(0)?;
        Ok(users.into_iter().next())
    }

    /// Find a user by id, but only when they hold the waiter role
    pub async fn find_waiter_by_id(&self, id: &str) -> RepoResult<Option<User>> {
        let record_id = parse_record_id(USER_TABLE, id)?;
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM user WHERE id = $id AND role = $role LIMIT 1")
            .bind(("id", record_id))
            .bind(("role", Role::Waiter))
            .await?;
        let users: Vec<User> = result.take(0)?;
        Ok(users.into_iter().next())
    }

    /// Find all users with the waiter role
    pub async fn find_waiters(&self) -> RepoResult<Vec<User>> {
        let users: Vec<User> = self
            .base
            .db()
            .query("SELECT * FROM user WHERE role = $role")
            .bind(("role", Role::Waiter))
            .await?
            .take(0)?;
        Ok(users)
    }

    /// Append an order id to a user's order list
    ///
    /// Single-statement array append; concurrent creations for the same
    /// waiter cannot lose entries.
    pub async fn append_order(&self, user_id: &RecordId, order_id: &RecordId) -> RepoResult<User> {
        let mut result = self
            .base
            .db()
            .query("UPDATE $user SET orders += $order RETURN AFTER")
            .bind(("user", user_id.clone()))
            .bind(("order", order_id.clone()))
            .await?;
        let users: Vec<User> = result.take(0)?;
        users
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("User {} not found", user_id)))
    }
}
