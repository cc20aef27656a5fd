use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // open_id is nullable but unique: customers seeded alongside demo users have no
        // external identity, while each OpenID identity maps to at most one customer.
        manager
            .create_table(
                Table::create()
                    .table(MbmCustomer::Table)
                    .if_not_exists()
                    .col(pk_auto(MbmCustomer::Id))
                    .col(
                        ColumnDef::new(MbmCustomer::OpenId)
                            .string()
                            .null()
                            .unique_key(),
                    )
                    .col(string_null(MbmCustomer::EmailAddress))
                    .col(timestamp(MbmCustomer::CreatedAt))
                    .col(timestamp(MbmCustomer::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MbmCustomer::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum MbmCustomer {
    Table,
    Id,
    OpenId,
    EmailAddress,
    CreatedAt,
    UpdatedAt,
}
