use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261019_000001_mbm_role::MbmRole;

static IDX_ROLE_AUTHORITY_ROLE_ID_AUTHORITY: &str = "idx-mbm_role_authority-role_id-authority";
static FK_ROLE_AUTHORITY_ROLE_ID: &str = "fk-mbm_role_authority-role_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MbmRoleAuthority::Table)
                    .if_not_exists()
                    .col(pk_auto(MbmRoleAuthority::Id))
                    .col(integer(MbmRoleAuthority::RoleId))
                    .col(string_len(MbmRoleAuthority::Authority, 32))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ROLE_AUTHORITY_ROLE_ID_AUTHORITY)
                    .table(MbmRoleAuthority::Table)
                    .col(MbmRoleAuthority::RoleId)
                    .col(MbmRoleAuthority::Authority)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ROLE_AUTHORITY_ROLE_ID)
                    .from_tbl(MbmRoleAuthority::Table)
                    .from_col(MbmRoleAuthority::RoleId)
                    .to_tbl(MbmRole::Table)
                    .to_col(MbmRole::Id)
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
                    .name(FK_ROLE_AUTHORITY_ROLE_ID)
                    .table(MbmRoleAuthority::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ROLE_AUTHORITY_ROLE_ID_AUTHORITY)
                    .table(MbmRoleAuthority::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(MbmRoleAuthority::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum MbmRoleAuthority {
    Table,
    Id,
    RoleId,
    Authority,
}
