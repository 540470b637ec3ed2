//! Create `item` table with FK to `store`.
//!
//! Deleting a store must remove its items, so the FK cascades.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Item::Table)
                    .if_not_exists()
                    .col(pk_auto(Item::Id))
                    .col(string_len_uniq(Item::Name, 80))
                    .col(double(Item::Price))
                    .col(integer(Item::StoreId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_item_store")
                            .from(Item::Table, Item::StoreId)
                            .to(Store::Table, Store::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Item::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Item { Table, Id, Name, Price, StoreId }

#[derive(DeriveIden)]
enum Store { Table, Id }
