use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;

/// Repository abstraction for store persistence.
#[async_trait]
pub trait StoreRepository: Send + Sync {
    async fn find_store_by_name(&self, name: &str) -> Result<Option<models::store::Model>, ServiceError>;
    async fn insert_store(&self, name: &str) -> Result<models::store::Model, ServiceError>;
    /// Deleting a store also deletes its items.
    async fn delete_store(&self, id: i32) -> Result<(), ServiceError>;
    async fn list_stores(&self) -> Result<Vec<models::store::Model>, ServiceError>;
}

/// Repository abstraction for item persistence.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn find_item_by_name(&self, name: &str) -> Result<Option<models::item::Model>, ServiceError>;
    async fn insert_item(&self, name: &str, price: f64, store_id: i32) -> Result<models::item::Model, ServiceError>;
    async fn update_item_price(&self, id: i32, price: f64) -> Result<models::item::Model, ServiceError>;
    async fn delete_item(&self, id: i32) -> Result<(), ServiceError>;
    async fn list_items(&self) -> Result<Vec<models::item::Model>, ServiceError>;
    async fn list_items_by_store(&self, store_id: i32) -> Result<Vec<models::item::Model>, ServiceError>;
}

/// SeaORM-backed repository implementing both catalog interfaces over one
/// connection. Cascade on store delete is enforced by the FK in the schema.
pub struct SeaOrmCatalogRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl StoreRepository for SeaOrmCatalogRepository {
    async fn find_store_by_name(&self, name: &str) -> Result<Option<models::store::Model>, ServiceError> {
        Ok(models::store::find_by_name(&self.db, name).await?)
    }

    async fn insert_store(&self, name: &str) -> Result<models::store::Model, ServiceError> {
        Ok(models::store::create(&self.db, name).await?)
    }

    async fn delete_store(&self, id: i32) -> Result<(), ServiceError> {
        Ok(models::store::delete(&self.db, id).await?)
    }

    async fn list_stores(&self) -> Result<Vec<models::store::Model>, ServiceError> {
        Ok(models::store::list(&self.db).await?)
    }
}

#[async_trait]
impl ItemRepository for SeaOrmCatalogRepository {
    async fn find_item_by_name(&self, name: &str) -> Result<Option<models::item::Model>, ServiceError> {
        Ok(models::item::find_by_name(&self.db, name).await?)
    }

    async fn insert_item(&self, name: &str, price: f64, store_id: i32) -> Result<models::item::Model, ServiceError> {
        models::item::create(&self.db, name, price, store_id)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn update_item_price(&self, id: i32, price: f64) -> Result<models::item::Model, ServiceError> {
        models::item::update_price(&self.db, id, price)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn delete_item(&self, id: i32) -> Result<(), ServiceError> {
        Ok(models::item::delete(&self.db, id).await?)
    }

    async fn list_items(&self) -> Result<Vec<models::item::Model>, ServiceError> {
        Ok(models::item::list(&self.db).await?)
    }

    async fn list_items_by_store(&self, store_id: i32) -> Result<Vec<models::item::Model>, ServiceError> {
        Ok(models::item::list_by_store(&self.db, store_id).await?)
    }
}

/// Simple in-memory repository for tests and doc examples. Emulates the
/// schema's behavior: sequential ids from 1, FK check on item insert, and
/// cascade on store delete.
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    struct Inner {
        stores: Vec<models::store::Model>,
        items: Vec<models::item::Model>,
        next_store_id: i32,
        next_item_id: i32,
    }

    pub struct MemoryCatalog {
        inner: Mutex<Inner>,
    }

    impl Default for MemoryCatalog {
        fn default() -> Self {
            Self {
                inner: Mutex::new(Inner {
                    stores: Vec::new(),
                    items: Vec::new(),
                    next_store_id: 1,
                    next_item_id: 1,
                }),
            }
        }
    }

    #[async_trait]
    impl StoreRepository for MemoryCatalog {
        async fn find_store_by_name(&self, name: &str) -> Result<Option<models::store::Model>, ServiceError> {
            let inner = self.inner.lock().unwrap();
            Ok(inner.stores.iter().find(|s| s.name == name).cloned())
        }

        async fn insert_store(&self, name: &str) -> Result<models::store::Model, ServiceError> {
            let mut inner = self.inner.lock().unwrap();
            if inner.stores.iter().any(|s| s.name == name) {
                return Err(ServiceError::Db("unique violation: store.name".into()));
            }
            let store = models::store::Model { id: inner.next_store_id, name: name.to_string() };
            inner.next_store_id += 1;
            inner.stores.push(store.clone());
            Ok(store)
        }

        async fn delete_store(&self, id: i32) -> Result<(), ServiceError> {
            let mut inner = self.inner.lock().unwrap();
            inner.stores.retain(|s| s.id != id);
            // same effect as ON DELETE CASCADE
            inner.items.retain(|i| i.store_id != id);
            Ok(())
        }

        async fn list_stores(&self) -> Result<Vec<models::store::Model>, ServiceError> {
            let inner = self.inner.lock().unwrap();
            Ok(inner.stores.clone())
        }
    }

    #[async_trait]
    impl ItemRepository for MemoryCatalog {
        async fn find_item_by_name(&self, name: &str) -> Result<Option<models::item::Model>, ServiceError> {
            let inner = self.inner.lock().unwrap();
            Ok(inner.items.iter().find(|i| i.name == name).cloned())
        }

        async fn insert_item(&self, name: &str, price: f64, store_id: i32) -> Result<models::item::Model, ServiceError> {
            let mut inner = self.inner.lock().unwrap();
            if !inner.stores.iter().any(|s| s.id == store_id) {
                return Err(ServiceError::Db("foreign key violation: item.store_id".into()));
            }
            if inner.items.iter().any(|i| i.name == name) {
                return Err(ServiceError::Db("unique violation: item.name".into()));
            }
            let item = models::item::Model {
                id: inner.next_item_id,
                name: name.to_string(),
                price,
                store_id,
            };
            inner.next_item_id += 1;
            inner.items.push(item.clone());
            Ok(item)
        }

        async fn update_item_price(&self, id: i32, price: f64) -> Result<models::item::Model, ServiceError> {
            let mut inner = self.inner.lock().unwrap();
            let item = inner
                .items
                .iter_mut()
                .find(|i| i.id == id)
                .ok_or_else(|| ServiceError::not_found("Item"))?;
            item.price = price;
            Ok(item.clone())
        }

        async fn delete_item(&self, id: i32) -> Result<(), ServiceError> {
            let mut inner = self.inner.lock().unwrap();
            inner.items.retain(|i| i.id != id);
            Ok(())
        }

        async fn list_items(&self) -> Result<Vec<models::item::Model>, ServiceError> {
            let inner = self.inner.lock().unwrap();
            Ok(inner.items.clone())
        }

        async fn list_items_by_store(&self, store_id: i32) -> Result<Vec<models::item::Model>, ServiceError> {
            let inner = self.inner.lock().unwrap();
            Ok(inner.items.iter().filter(|i| i.store_id == store_id).cloned().collect())
        }
    }
}
