use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MbmItem::Table)
                    .if_not_exists()
                    .col(pk_auto(MbmItem::Id))
                    .col(string_len_uniq(MbmItem::Sku, 64))
                    .col(string_len_null(MbmItem::Gtin, 64))
                    .col(timestamp(MbmItem::CreatedAt))
                    .col(timestamp(MbmItem::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MbmItem::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum MbmItem {
    Table,
    Id,
    Sku,
    Gtin,
    CreatedAt,
    UpdatedAt,
}
