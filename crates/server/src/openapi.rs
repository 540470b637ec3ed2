use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct CredentialsRequest { pub username: String, pub password: String }

#[derive(ToSchema)]
pub struct ItemForm { pub price: f64, pub store_id: i32 }

#[derive(ToSchema)]
pub struct MessageResponse { pub message: String }

#[derive(ToSchema)]
pub struct ItemDoc { pub name: String, pub price: f64 }

#[derive(ToSchema)]
pub struct StoreDoc { pub id: Option<i32>, pub name: String, pub items: Vec<ItemDoc> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::auth::authenticate,
        crate::routes::auth::register,
        crate::routes::stores::create_store,
        crate::routes::stores::get_store,
        crate::routes::stores::delete_store,
        crate::routes::stores::list_stores,
        crate::routes::items::create_item,
        crate::routes::items::put_item,
        crate::routes::items::get_item,
        crate::routes::items::delete_item,
        crate::routes::items::list_items,
    ),
    components(
        schemas(
            HealthResponse,
            CredentialsRequest,
            ItemForm,
            MessageResponse,
            ItemDoc,
            StoreDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "auth"),
        (name = "stores"),
        (name = "items")
    )
)]
pub struct ApiDoc;
