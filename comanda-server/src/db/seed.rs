//! Startup seed data
//!
//! The menu is seeded once at first startup together with two demo waiters
//! and their orders. Menu items are immutable afterwards; no handler ever
//! writes to `menu_item`.

use super::repository::{MenuItemRepository, OrderRepository, RepoError, RepoResult, UserRepository};
use crate::db::models::{MenuItemCreate, UserCreate};
use rust_decimal::Decimal;
use shared::Role;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

/// Seed the database unless it already holds a menu
pub async fn seed_if_empty(db: &Surreal<Db>) -> RepoResult<()> {
    let menu_repo = MenuItemRepository::new(db.clone());

    if menu_repo.count().await? > 0 {
        tracing::debug!("Seed skipped, menu already present");
        return Ok(());
    }

    let user_repo = UserRepository::new(db.clone());
    let order_repo = OrderRepository::new(db.clone());

    let alice = user_repo
        .create(UserCreate {
            login: "alice_godless".to_string(),
            password: "imm32obilise".to_string(),
            role: Role::Waiter,
            name: Some("Alice".to_string()),
        })
        .await?;
    let bob = user_repo
        .create(UserCreate {
            login: "bob_sinner".to_string(),
            password: "at69tractive".to_string(),
            role: Role::Waiter,
            name: Some("Bob".to_string()),
        })
        .await?;

    let burger = menu_repo
        .create(MenuItemCreate {
            title: "Burger".to_string(),
            picture: "/images/burger.png".to_string(),
            cost: Decimal::new(999, 2),
            call_quantity: 10,
            description: "Delicious burger".to_string(),
        })
        .await?;
    let salad = menu_repo
        .create(MenuItemCreate {
            title: "Salad".to_string(),
            picture: "/images/salad.png".to_string(),
            cost: Decimal::new(699, 2),
            call_quantity: 15,
            description: "Fresh salad".to_string(),
        })
        .await?;

    let burger_id = record_id(burger.id)?;
    let salad_id = record_id(salad.id)?;

    // Alice holds an open order with one burger and one salad, Bob a
    // closed one with a single burger
    let open_order = order_repo.create(vec![burger_id.clone(), salad_id]).await?;
    let closed_order = order_repo.create(vec![burger_id]).await?;

    let open_order_id = record_id(open_order.id)?;
    let closed_order_id = record_id(closed_order.id)?;

    order_repo.close(&closed_order_id.to_string()).await?;

    user_repo
        .append_order(&record_id(alice.id)?, &open_order_id)
        .await?;
    user_repo
        .append_order(&record_id(bob.id)?, &closed_order_id)
        .await?;

    tracing::info!("Seed data created (2 waiters, 2 orders, 2 menu items)");
    Ok(())
}

fn record_id(id: Option<surrealdb::RecordId>) -> RepoResult<surrealdb::RecordId> {
    id.ok_or_else(|| RepoError::Database("Created record is missing its id".to_string()))
}
