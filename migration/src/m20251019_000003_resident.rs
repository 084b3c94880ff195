use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251019_000002_shelter::Shelter;

static IDX_RESIDENT_SHELTER_ID: &str = "idx-residents-shelter_id";
static FK_RESIDENT_SHELTER_ID: &str = "fk-residents-shelter_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Resident::Table)
                    .if_not_exists()
                    .col(pk_auto(Resident::Id))
                    .col(string(Resident::Name))
                    .col(integer(Resident::Age))
                    .col(string(Resident::Gender))
                    .col(string_null(Resident::Phone))
                    .col(integer(Resident::ShelterId))
                    .col(string_len(Resident::Status, 16).default("active"))
                    .col(timestamp(Resident::CheckInDate))
                    .col(timestamp_null(Resident::CheckOutDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_RESIDENT_SHELTER_ID)
                            .from(Resident::Table, Resident::ShelterId)
                            .to(Shelter::Table, Shelter::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_RESIDENT_SHELTER_ID)
                    .table(Resident::Table)
                    .col(Resident::ShelterId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_RESIDENT_SHELTER_ID)
                    .table(Resident::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Resident::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Resident {
    #[sea_orm(iden = "residents")]
    Table,
    Id,
    Name,
    Age,
    Gender,
    Phone,
    ShelterId,
    Status,
    CheckInDate,
    CheckOutDate,
}
