//! Order Repository

use super::{BaseRepository, RepoError, RepoResult, parse_record_id};
use crate::db::models::Order;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const ORDER_TABLE: &str = "order";

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Create an open order carrying the given item ids
    ///
    /// Items are written in the same statement that creates the order, so
    /// no half-built order is ever observable.
    pub async fn create(&self, items: Vec<RecordId>) -> RepoResult<Order> {
        let mut result = self
            .base
            .db()
            .query("CREATE order SET is_active = true, items = $items RETURN AFTER")
            .bind(("items", items))
            .await?;
        let orders: Vec<Order> = result.take(0)?;
        orders
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::Database("Failed to create order".to_string()))
    }

    /// Find order by wire id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Order>> {
        let record_id = parse_record_id(ORDER_TABLE, id)?;
        let order: Option<Order> = self.base.db().select(record_id).await?;
        Ok(order)
    }

    /// Find order by record id
    pub async fn find_by_record_id(&self, id: &RecordId) -> RepoResult<Option<Order>> {
        let order: Option<Order> = self.base.db().select(id.clone()).await?;
        Ok(order)
    }

    /// Mark an order closed; returns None when the order does not exist
    ///
    /// Unconditional write: closing an already-closed order is a no-op
    /// with the same observable result.
    pub async fn close(&self, id: &str) -> RepoResult<Option<Order>> {
        let record_id = parse_record_id(ORDER_TABLE, id)?;
        let mut result = self
            .base
            .db()
            .query("UPDATE $order SET is_active = false RETURN AFTER")
            .bind(("order", record_id))
            .await?;
        let orders: Vec<Order> = result.take(0)?;
        Ok(orders.into_iter().next())
    }
}
