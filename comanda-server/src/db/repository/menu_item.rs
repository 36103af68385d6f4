//! Menu Item Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{MenuItem, MenuItemCreate};
use serde::Deserialize;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const MENU_ITEM_TABLE: &str = "menu_item";

#[derive(Clone)]
pub struct MenuItemRepository {
    base: BaseRepository,
}

impl MenuItemRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all menu items
    pub async fn find_all(&self) -> RepoResult<Vec<MenuItem>> {
        let items: Vec<MenuItem> = self
            .base
            .db()
            .query("SELECT * FROM menu_item")
            .await?
            .take(0)?;
        Ok(items)
    }

    /// Find all menu items ordered by title
    pub async fn find_all_sorted_by_title(&self) -> RepoResult<Vec<MenuItem>> {
        let items: Vec<MenuItem> = self
            .base
            .db()
            .query("SELECT * FROM menu_item ORDER BY title ASC")
            .await?
            .take(0)?;
        Ok(items)
    }

    /// Find menu item by its unique title
    pub async fn find_by_title(&self, title: &str) -> RepoResult<Option<MenuItem>> {
        let title_owned = title.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM menu_item WHERE title = $title LIMIT 1")
            .bind(("title", title_owned))
            .await?;
        let items: Vec<MenuItem> = result.take(0)?;
        Ok(items.into_iter().next())
    }

    /// Find menu items whose id is in the given set
    ///
    /// Set semantics: duplicate ids in the input yield a single row.
    pub async fn find_by_ids(&self, ids: &[RecordId]) -> RepoResult<Vec<MenuItem>> {
        let items: Vec<MenuItem> = self
            .base
            .db()
            .query("SELECT * FROM menu_item WHERE id IN $ids")
            .bind(("ids", ids.to_vec()))
            .await?
            .take(0)?;
        Ok(items)
    }

    /// Find menu item by record id
    pub async fn find_by_record_id(&self, id: &RecordId) -> RepoResult<Option<MenuItem>> {
        let item: Option<MenuItem> = self.base.db().select(id.clone()).await?;
        Ok(item)
    }

    /// Create a menu item (seeding only; titles are unique)
    pub async fn create(&self, data: MenuItemCreate) -> RepoResult<MenuItem> {
        let created: Option<MenuItem> = self
            .base
            .db()
            .create(MENU_ITEM_TABLE)
            .content(data)
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create menu item".to_string()))
    }

    /// Count menu items
    pub async fn count(&self) -> RepoResult<i64> {
        #[derive(Deserialize)]
        struct CountRow {
            total: i64,
        }

        let mut result = self
            .base
            .db()
            .query("SELECT count() AS total FROM menu_item GROUP ALL")
            .await?;
        let row: Option<CountRow> = result.take(0)?;
        Ok(row.map(|r| r.total).unwrap_or(0))
    }
}
