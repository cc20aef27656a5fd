use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261019_000006_mbm_item::MbmItem;

// One primary detail per (item, field, locale)
static IDX_ITEM_FIELD_DETAIL_PRIMARY: &str = "idx-mbm_item_field_detail-item_id-item_field-locale";
static FK_ITEM_FIELD_DETAIL_ITEM_ID: &str = "fk-mbm_item_field_detail-item_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MbmItemFieldDetail::Table)
                    .if_not_exists()
                    .col(pk_auto(MbmItemFieldDetail::Id))
                    .col(integer(MbmItemFieldDetail::ItemId))
                    .col(string_len(MbmItemFieldDetail::ItemField, 32))
                    .col(string_len(MbmItemFieldDetail::Locale, 16))
                    .col(text(MbmItemFieldDetail::Content))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ITEM_FIELD_DETAIL_PRIMARY)
                    .table(MbmItemFieldDetail::Table)
                    .col(MbmItemFieldDetail::ItemId)
                    .col(MbmItemFieldDetail::ItemField)
                    .col(MbmItemFieldDetail::Locale)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ITEM_FIELD_DETAIL_ITEM_ID)
                    .from_tbl(MbmItemFieldDetail::Table)
                    .from_col(MbmItemFieldDetail::ItemId)
                    .to_tbl(MbmItem::Table)
                    .to_col(MbmItem::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ITEM_FIELD_DETAIL_ITEM_ID)
                    .table(MbmItemFieldDetail::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ITEM_FIELD_DETAIL_PRIMARY)
                    .table(MbmItemFieldDetail::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(MbmItemFieldDetail::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum MbmItemFieldDetail {
    Table,
    Id,
    ItemId,
    ItemField,
    Locale,
    Content,
}
