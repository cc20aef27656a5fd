use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261019_000004_mbm_user::MbmUser;

static IDX_USER_CONTACT_METHOD_USER_ID_METHOD: &str =
    "idx-mbm_user_contact_method-user_id-contact_method";
static FK_USER_CONTACT_METHOD_USER_ID: &str = "fk-mbm_user_contact_method-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MbmUserContactMethod::Table)
                    .if_not_exists()
                    .col(pk_auto(MbmUserContactMethod::Id))
                    .col(integer(MbmUserContactMethod::UserId))
                    .col(string_len(MbmUserContactMethod::ContactMethod, 32))
                    .col(string(MbmUserContactMethod::Detail))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_USER_CONTACT_METHOD_USER_ID_METHOD)
                    .table(MbmUserContactMethod::Table)
                    .col(MbmUserContactMethod::UserId)
                    .col(MbmUserContactMethod::ContactMethod)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_USER_CONTACT_METHOD_USER_ID)
                    .from_tbl(MbmUserContactMethod::Table)
                    .from_col(MbmUserContactMethod::UserId)
                    .to_tbl(MbmUser::Table)
                    .to_col(MbmUser::Id)
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
                    .name(FK_USER_CONTACT_METHOD_USER_ID)
                    .table(MbmUserContactMethod::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_USER_CONTACT_METHOD_USER_ID_METHOD)
                    .table(MbmUserContactMethod::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(MbmUserContactMethod::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum MbmUserContactMethod {
    Table,
    Id,
    UserId,
    ContactMethod,
    Detail,
}
