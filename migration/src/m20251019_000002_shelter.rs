use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251019_000001_user::User;

static IDX_SHELTER_NAME: &str = "idx-shelters-name";
static FK_SHELTER_MANAGER_ID: &str = "fk-shelters-manager_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Shelter::Table)
                    .if_not_exists()
                    .col(pk_auto(Shelter::Id))
                    .col(string(Shelter::Name))
                    .col(string(Shelter::Location))
                    .col(integer(Shelter::Capacity))
                    .col(integer(Shelter::CurrentOccupancy).default(0))
                    .col(string(Shelter::Phone))
                    .col(string(Shelter::Email))
                    .col(string(Shelter::Address))
                    .col(integer_null(Shelter::ManagerId))
                    .col(timestamp(Shelter::CreatedAt))
                    .col(timestamp(Shelter::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SHELTER_MANAGER_ID)
                            .from(Shelter::Table, Shelter::ManagerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SHELTER_NAME)
                    .table(Shelter::Table)
                    .col(Shelter::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SHELTER_NAME)
                    .table(Shelter::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Shelter::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Shelter {
    #[sea_orm(iden = "shelters")]
    Table,
    Id,
    Name,
    Location,
    Capacity,
    CurrentOccupancy,
    Phone,
    Email,
    Address,
    ManagerId,
    CreatedAt,
    UpdatedAt,
}
