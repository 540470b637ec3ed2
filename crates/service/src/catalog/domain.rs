use serde::{Deserialize, Serialize};

/// Wire form of an item inside store payloads and item endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemJson {
    pub name: String,
    pub price: f64,
}

impl From<models::item::Model> for ItemJson {
    fn from(m: models::item::Model) -> Self {
        Self { name: m.name, price: m.price }
    }
}

/// Wire form of a store. `id` is `None` only for a draft that was never
/// persisted; every repository-backed store carries its assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreJson {
    pub id: Option<i32>,
    pub name: String,
    pub items: Vec<ItemJson>,
}

/// Body of item create/update requests (form-encoded on the wire).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemInput {
    pub price: f64,
    pub store_id: i32,
}
