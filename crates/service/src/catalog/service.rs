use std::sync::Arc;

use tracing::{info, instrument};

use super::domain::{ItemJson, StoreJson};
use super::repository::{ItemRepository, StoreRepository};
use crate::errors::ServiceError;

/// Catalog business service independent of the web framework.
///
/// Duplicate-name rules and JSON projections live here; persistence is
/// delegated to the injected repository.
pub struct CatalogService<R: StoreRepository + ItemRepository> {
    repo: Arc<R>,
}

impl<R: StoreRepository + ItemRepository> CatalogService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Create a store with a unique name.
    ///
    /// # Examples
    /// ```
    /// use service::catalog::{CatalogService, repository::mock::MemoryCatalog};
    /// use std::sync::Arc;
    /// let svc = CatalogService::new(Arc::new(MemoryCatalog::default()));
    /// let store = tokio_test::block_on(svc.create_store("corner shop")).unwrap();
    /// assert_eq!(store.id, Some(1));
    /// assert!(store.items.is_empty());
    /// ```
    #[instrument(skip(self))]
    pub async fn create_store(&self, name: &str) -> Result<StoreJson, ServiceError> {
        if self.repo.find_store_by_name(name).await?.is_some() {
            return Err(ServiceError::Conflict(format!(
                "A store with name '{}' already exists.",
                name
            )));
        }
        let store = self.repo.insert_store(name).await?;
        info!(store_id = store.id, "store_created");
        Ok(StoreJson { id: Some(store.id), name: store.name, items: Vec::new() })
    }

    pub async fn get_store(&self, name: &str) -> Result<StoreJson, ServiceError> {
        let store = self
            .repo
            .find_store_by_name(name)
            .await?
            .ok_or_else(|| ServiceError::not_found("Store"))?;
        self.project_store(store).await
    }

    /// Delete by name; a miss is not an error. Owned items go with the store.
    #[instrument(skip(self))]
    pub async fn delete_store(&self, name: &str) -> Result<(), ServiceError> {
        if let Some(store) = self.repo.find_store_by_name(name).await? {
            self.repo.delete_store(store.id).await?;
            info!(store_id = store.id, "store_deleted");
        }
        Ok(())
    }

    pub async fn list_stores(&self) -> Result<Vec<StoreJson>, ServiceError> {
        let stores = self.repo.list_stores().await?;
        let mut out = Vec::with_capacity(stores.len());
        for store in stores {
            out.push(self.project_store(store).await?);
        }
        Ok(out)
    }

    #[instrument(skip(self))]
    pub async fn create_item(&self, name: &str, price: f64, store_id: i32) -> Result<ItemJson, ServiceError> {
        if self.repo.find_item_by_name(name).await?.is_some() {
            return Err(ServiceError::Conflict(format!(
                "An item with name '{}' already exists.",
                name
            )));
        }
        let item = self.repo.insert_item(name, price, store_id).await?;
        info!(item_id = item.id, store_id = item.store_id, "item_created");
        Ok(item.into())
    }

    /// Upsert by name. An existing item only has its price updated; its
    /// store assignment is immutable.
    #[instrument(skip(self))]
    pub async fn put_item(&self, name: &str, price: f64, store_id: i32) -> Result<ItemJson, ServiceError> {
        match self.repo.find_item_by_name(name).await? {
            Some(existing) => {
                let updated = self.repo.update_item_price(existing.id, price).await?;
                info!(item_id = updated.id, "item_price_updated");
                Ok(updated.into())
            }
            None => {
                let created = self.repo.insert_item(name, price, store_id).await?;
                info!(item_id = created.id, store_id = created.store_id, "item_created");
                Ok(created.into())
            }
        }
    }

    pub async fn get_item(&self, name: &str) -> Result<ItemJson, ServiceError> {
        let item = self
            .repo
            .find_item_by_name(name)
            .await?
            .ok_or_else(|| ServiceError::not_found("Item"))?;
        Ok(item.into())
    }

    #[instrument(skip(self))]
    pub async fn delete_item(&self, name: &str) -> Result<(), ServiceError> {
        if let Some(item) = self.repo.find_item_by_name(name).await? {
            self.repo.delete_item(item.id).await?;
            info!(item_id = item.id, "item_deleted");
        }
        Ok(())
    }

    pub async fn list_items(&self) -> Result<Vec<ItemJson>, ServiceError> {
        let items = self.repo.list_items().await?;
        Ok(items.into_iter().map(ItemJson::from).collect())
    }

    async fn project_store(&self, store: models::store::Model) -> Result<StoreJson, ServiceError> {
        let items = self.repo.list_items_by_store(store.id).await?;
        Ok(StoreJson {
            id: Some(store.id),
            name: store.name,
            items: items.into_iter().map(ItemJson::from).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::super::domain::{ItemJson, StoreJson};
    use super::super::repository::mock::MemoryCatalog;
    use super::CatalogService;
    use crate::errors::ServiceError;

    fn svc() -> CatalogService<MemoryCatalog> {
        CatalogService::new(Arc::new(MemoryCatalog::default()))
    }

    #[tokio::test]
    async fn create_then_find_then_delete_store() {
        let svc = svc();
        svc.create_store("test store").await.unwrap();

        let found = svc.get_store("test store").await.unwrap();
        assert_eq!(found.id, Some(1));
        assert_eq!(found.name, "test store");

        svc.delete_store("test store").await.unwrap();
        assert!(matches!(
            svc.get_store("test store").await,
            Err(ServiceError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn store_lookup_is_case_sensitive() {
        let svc = svc();
        svc.create_store("Test Store").await.unwrap();
        assert!(svc.get_store("test store").await.is_err());
        assert!(svc.get_store("Test Store").await.is_ok());
    }

    #[tokio::test]
    async fn duplicate_store_message() {
        let svc = svc();
        svc.create_store("test_store").await.unwrap();
        let err = svc.create_store("test_store").await.unwrap_err();
        assert_eq!(err.to_string(), "A store with name 'test_store' already exists.");
    }

    #[tokio::test]
    async fn duplicate_item_message() {
        let svc = svc();
        svc.create_store("test_store").await.unwrap();
        svc.create_item("test", 25.00, 1).await.unwrap();
        let err = svc.create_item("test", 32.11, 1).await.unwrap_err();
        assert_eq!(err.to_string(), "An item with name 'test' already exists.");
    }

    #[tokio::test]
    async fn missing_entities_have_fixed_messages() {
        let svc = svc();
        assert_eq!(svc.get_store("nope").await.unwrap_err().to_string(), "Store not found");
        assert_eq!(svc.get_item("nope").await.unwrap_err().to_string(), "Item not found");
    }

    #[tokio::test]
    async fn delete_store_cascades_to_items() {
        let svc = svc();
        svc.create_store("test store").await.unwrap();
        svc.create_item("test_item", 19.99, 1).await.unwrap();

        let store = svc.get_store("test store").await.unwrap();
        assert_eq!(store.items.len(), 1);
        assert_eq!(store.items[0].name, "test_item");

        svc.delete_store("test store").await.unwrap();
        assert!(svc.get_item("test_item").await.is_err());
        assert!(svc.list_items().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let svc = svc();
        svc.delete_store("never existed").await.unwrap();
        svc.delete_item("never existed").await.unwrap();
    }

    #[tokio::test]
    async fn item_requires_existing_store() {
        let svc = svc();
        let err = svc.create_item("orphan", 1.0, 42).await.unwrap_err();
        assert!(matches!(err, ServiceError::Db(_)));
    }

    #[tokio::test]
    async fn put_item_creates_then_updates_price_only() {
        let svc = svc();
        svc.create_store("test_store").await.unwrap();
        svc.create_store("other_store").await.unwrap();

        let created = svc.put_item("test", 30.00, 1).await.unwrap();
        assert_eq!(created, ItemJson { name: "test".into(), price: 30.00 });

        // Second put with a different store_id: price changes, owner does not.
        let updated = svc.put_item("test", 12.50, 2).await.unwrap();
        assert_eq!(updated.price, 12.50);
        let owner = svc.get_store("test_store").await.unwrap();
        assert_eq!(owner.items.len(), 1);
        let other = svc.get_store("other_store").await.unwrap();
        assert!(other.items.is_empty());
    }

    #[tokio::test]
    async fn listings_preserve_creation_order() {
        let svc = svc();
        svc.create_store("test_store1").await.unwrap();
        svc.create_store("test_store2").await.unwrap();
        svc.create_store("test_store3").await.unwrap();
        svc.create_item("test item2", 37.43, 2).await.unwrap();

        let stores = svc.list_stores().await.unwrap();
        assert_eq!(
            stores,
            vec![
                StoreJson { id: Some(1), name: "test_store1".into(), items: vec![] },
                StoreJson {
                    id: Some(2),
                    name: "test_store2".into(),
                    items: vec![ItemJson { name: "test item2".into(), price: 37.43 }],
                },
                StoreJson { id: Some(3), name: "test_store3".into(), items: vec![] },
            ]
        );

        svc.create_item("test1", 45.00, 1).await.unwrap();
        let items = svc.list_items().await.unwrap();
        assert_eq!(items[0].name, "test item2");
        assert_eq!(items[1].name, "test1");
    }

    #[test]
    fn store_json_shapes() {
        let draft = StoreJson { id: None, name: "test store".into(), items: vec![] };
        assert_eq!(
            serde_json::to_value(&draft).unwrap(),
            json!({"id": null, "name": "test store", "items": []})
        );

        let persisted = StoreJson {
            id: Some(1),
            name: "test store".into(),
            items: vec![ItemJson { name: "test_item".into(), price: 19.77 }],
        };
        assert_eq!(
            serde_json::to_value(&persisted).unwrap(),
            json!({"id": 1, "name": "test store", "items": [{"name": "test_item", "price": 19.77}]})
        );
    }

    #[test]
    fn item_json_shape() {
        let item = ItemJson { name: "test".into(), price: 32.11 };
        assert_eq!(serde_json::to_value(&item).unwrap(), json!({"name": "test", "price": 32.11}));
    }
}
