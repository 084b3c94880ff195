use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251019_000002_shelter::Shelter;

static IDX_EVENT_SHELTER_ID: &str = "idx-events-shelter_id";
static FK_EVENT_SHELTER_ID: &str = "fk-events-shelter_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(pk_auto(Event::Id))
                    .col(string(Event::Title))
                    .col(text(Event::Description))
                    .col(timestamp(Event::EventDate))
                    .col(string(Event::Location))
                    .col(integer(Event::ShelterId))
                    .col(string(Event::Type))
                    .col(timestamp(Event::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_EVENT_SHELTER_ID)
                            .from(Event::Table, Event::ShelterId)
                            .to(Shelter::Table, Shelter::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EVENT_SHELTER_ID)
                    .table(Event::Table)
                    .col(Event::ShelterId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EVENT_SHELTER_ID)
                    .table(Event::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Event {
    #[sea_orm(iden = "events")]
    Table,
    Id,
    Title,
    Description,
    EventDate,
    Location,
    ShelterId,
    Type,
    CreatedAt,
}
