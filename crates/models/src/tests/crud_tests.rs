use migration::MigratorTrait;
use sea_orm::{DatabaseConnection, EntityTrait};
use uuid::Uuid;

use crate::{db, item, store, user};

async fn test_db() -> Option<DatabaseConnection> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    let db = match db::connect().await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("skip: cannot connect to db: {}", e);
            return None;
        }
    };
    if let Err(e) = migration::Migrator::up(&db, None).await {
        eprintln!("skip: migrate up failed: {}", e);
        return None;
    }
    Some(db)
}

#[tokio::test]
async fn test_store_crud() -> anyhow::Result<()> {
    let Some(db) = test_db().await else { return Ok(()) };

    let name = format!("test_store_{}", Uuid::new_v4());
    assert!(store::find_by_name(&db, &name).await?.is_none());

    let created = store::create(&db, &name).await?;
    assert!(created.id > 0);

    let found = store::find_by_name(&db, &name).await?.expect("store exists after create");
    assert_eq!(found, created);

    store::delete(&db, created.id).await?;
    assert!(store::find_by_name(&db, &name).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_store_name_is_unique() -> anyhow::Result<()> {
    let Some(db) = test_db().await else { return Ok(()) };

    let name = format!("dup_store_{}", Uuid::new_v4());
    let created = store::create(&db, &name).await?;
    assert!(store::create(&db, &name).await.is_err());

    store::delete(&db, created.id).await?;
    Ok(())
}

#[tokio::test]
async fn test_item_belongs_to_store() -> anyhow::Result<()> {
    let Some(db) = test_db().await else { return Ok(()) };

    let store_name = format!("owner_store_{}", Uuid::new_v4());
    let item_name = format!("owned_item_{}", Uuid::new_v4());
    let s = store::create(&db, &store_name).await?;

    let i = item::create(&db, &item_name, 19.99, s.id).await?;
    assert_eq!(i.store_id, s.id);

    let owned = item::list_by_store(&db, s.id).await?;
    assert_eq!(owned.len(), 1);
    assert_eq!(owned[0].name, item_name);

    store::delete(&db, s.id).await?;
    Ok(())
}

#[tokio::test]
async fn test_item_requires_existing_store() -> anyhow::Result<()> {
    let Some(db) = test_db().await else { return Ok(()) };

    let item_name = format!("orphan_item_{}", Uuid::new_v4());
    // No store row with this id; the FK must reject the insert.
    let res = item::create(&db, &item_name, 1.0, i32::MAX).await;
    assert!(res.is_err());
    Ok(())
}

#[tokio::test]
async fn test_delete_store_cascades_to_items() -> anyhow::Result<()> {
    let Some(db) = test_db().await else { return Ok(()) };

    let store_name = format!("cascade_store_{}", Uuid::new_v4());
    let item_name = format!("cascade_item_{}", Uuid::new_v4());
    let s = store::create(&db, &store_name).await?;
    item::create(&db, &item_name, 5.25, s.id).await?;

    store::delete(&db, s.id).await?;
    assert!(item::find_by_name(&db, &item_name).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_item_update_price() -> anyhow::Result<()> {
    let Some(db) = test_db().await else { return Ok(()) };

    let store_name = format!("price_store_{}", Uuid::new_v4());
    let item_name = format!("price_item_{}", Uuid::new_v4());
    let s = store::create(&db, &store_name).await?;
    let i = item::create(&db, &item_name, 54.11, s.id).await?;

    let updated = item::update_price(&db, i.id, 30.00).await?;
    assert_eq!(updated.price, 30.00);
    // store assignment is untouched by a price update
    assert_eq!(updated.store_id, s.id);

    store::delete(&db, s.id).await?;
    Ok(())
}

#[tokio::test]
async fn test_user_crud_and_unique_username() -> anyhow::Result<()> {
    let Some(db) = test_db().await else { return Ok(()) };

    let username = format!("test_user_{}", Uuid::new_v4());
    assert!(user::find_by_username(&db, &username).await?.is_none());

    let created = user::create(&db, &username, "argon2-hash-placeholder").await?;
    assert!(user::find_by_username(&db, &username).await?.is_some());
    assert!(user::create(&db, &username, "other-hash").await.is_err());

    user::Entity::delete_by_id(created.id).exec(&db).await?;
    Ok(())
}
