use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MbmRole::Table)
                    .if_not_exists()
                    .col(pk_auto(MbmRole::Id))
                    .col(string_len_uniq(MbmRole::Name, 64))
                    .col(string(MbmRole::Description))
                    .col(timestamp(MbmRole::CreatedAt))
                    .col(timestamp(MbmRole::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MbmRole::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum MbmRole {
    Table,
    Id,
    Name,
    Description,
    CreatedAt,
    UpdatedAt,
}
