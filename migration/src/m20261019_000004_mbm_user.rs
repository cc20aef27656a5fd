use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20261019_000001_mbm_role::MbmRole, m20261019_000003_mbm_customer::MbmCustomer};

static IDX_USER_ROLE_ID: &str = "idx-mbm_user-role_id";
static FK_USER_ROLE_ID: &str = "fk-mbm_user-role_id";
static FK_USER_CUSTOMER_ID: &str = "fk-mbm_user-customer_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MbmUser::Table)
                    .if_not_exists()
                    .col(pk_auto(MbmUser::Id))
                    .col(string_len_uniq(MbmUser::Username, 128))
                    .col(string(MbmUser::Password))
                    .col(string_uniq(MbmUser::ApiKey))
                    .col(string(MbmUser::SecretKey))
                    .col(integer(MbmUser::RoleId))
                    .col(
                        ColumnDef::new(MbmUser::CustomerId)
                            .integer()
                            .null()
                            .unique_key(),
                    )
                    .col(timestamp(MbmUser::CreatedAt))
                    .col(timestamp(MbmUser::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_USER_ROLE_ID)
                    .table(MbmUser::Table)
                    .col(MbmUser::RoleId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_USER_ROLE_ID)
                    .from_tbl(MbmUser::Table)
                    .from_col(MbmUser::RoleId)
                    .to_tbl(MbmRole::Table)
                    .to_col(MbmRole::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_USER_CUSTOMER_ID)
                    .from_tbl(MbmUser::Table)
                    .from_col(MbmUser::CustomerId)
                    .to_tbl(MbmCustomer::Table)
                    .to_col(MbmCustomer::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_USER_CUSTOMER_ID)
                    .table(MbmUser::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_USER_ROLE_ID)
                    .table(MbmUser::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_USER_ROLE_ID)
                    .table(MbmUser::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(MbmUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum MbmUser {
    Table,
    Id,
    Username,
    Password,
    ApiKey,
    SecretKey,
    RoleId,
    CustomerId,
    CreatedAt,
    UpdatedAt,
}
