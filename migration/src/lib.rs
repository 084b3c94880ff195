pub use sea_orm_migration::prelude::*;

mod m20251019_000001_user;
mod m20251019_000002_shelter;
mod m20251019_000003_resident;
mod m20251019_000004_event;
mod m20251019_000005_risk_alert;
mod m20251019_000006_research_data;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251019_000001_user::Migration),
            Box::new(m20251019_000002_shelter::Migration),
            Box::new(m20251019_000003_resident::Migration),
            Box::new(m20251019_000004_event::Migration),
            Box::new(m20251019_000005_risk_alert::Migration),
            Box::new(m20251019_000006_research_data::Migration),
        ]
    }
}
