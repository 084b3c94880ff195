use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251019_000001_user::User, m20251019_000002_shelter::Shelter};

static IDX_RISK_ALERT_SHELTER_ID: &str = "idx-risk_alerts-shelter_id";
static FK_RISK_ALERT_SHELTER_ID: &str = "fk-risk_alerts-shelter_id";
static FK_RISK_ALERT_CREATED_BY_ID: &str = "fk-risk_alerts-created_by_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RiskAlert::Table)
                    .if_not_exists()
                    .col(pk_auto(RiskAlert::Id))
                    .col(string(RiskAlert::Title))
                    .col(text(RiskAlert::Description))
                    .col(string_len(RiskAlert::RiskLevel, 16).default("medium"))
                    .col(integer(RiskAlert::ShelterId))
                    .col(boolean(RiskAlert::IsResolved).default(false))
                    .col(integer(RiskAlert::CreatedById))
                    .col(timestamp(RiskAlert::CreatedAt))
                    .col(timestamp_null(RiskAlert::ResolvedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_RISK_ALERT_SHELTER_ID)
                            .from(RiskAlert::Table, RiskAlert::ShelterId)
                            .to(Shelter::Table, Shelter::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_RISK_ALERT_CREATED_BY_ID)
                            .from(RiskAlert::Table, RiskAlert::CreatedById)
                            .to(User::Table, User::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_RISK_ALERT_SHELTER_ID)
                    .table(RiskAlert::Table)
                    .col(RiskAlert::ShelterId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_RISK_ALERT_SHELTER_ID)
                    .table(RiskAlert::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(RiskAlert::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum RiskAlert {
    #[sea_orm(iden = "risk_alerts")]
    Table,
    Id,
    Title,
    Description,
    RiskLevel,
    ShelterId,
    IsResolved,
    CreatedById,
    CreatedAt,
    ResolvedAt,
}
