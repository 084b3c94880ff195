use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251019_000002_shelter::Shelter;

static IDX_RESEARCH_DATA_SHELTER_ID: &str = "idx-research_data-shelter_id";
static FK_RESEARCH_DATA_SHELTER_ID: &str = "fk-research_data-shelter_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ResearchData::Table)
                    .if_not_exists()
                    .col(pk_auto(ResearchData::Id))
                    .col(string(ResearchData::Title))
                    .col(text(ResearchData::Description))
                    .col(string(ResearchData::DataType))
                    .col(integer(ResearchData::ShelterId))
                    .col(timestamp(ResearchData::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_RESEARCH_DATA_SHELTER_ID)
                            .from(ResearchData::Table, ResearchData::ShelterId)
                            .to(Shelter::Table, Shelter::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_RESEARCH_DATA_SHELTER_ID)
                    .table(ResearchData::Table)
                    .col(ResearchData::ShelterId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_RESEARCH_DATA_SHELTER_ID)
                    .table(ResearchData::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ResearchData::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum ResearchData {
    Table,
    Id,
    Title,
    Description,
    DataType,
    ShelterId,
    CreatedAt,
}
