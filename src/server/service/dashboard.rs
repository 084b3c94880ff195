use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    model::dashboard::{DashboardStatsDto, ShelterStatsDto},
    server::{
        data::{
            event::EventRepository, resident::ResidentRepository, risk_alert::RiskAlertRepository,
            shelter::ShelterRepository,
        },
        error::Error,
        model::db::ShelterModel,
    },
};

/// Service aggregating network-wide figures for the dashboard.
pub struct DashboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DashboardService<'a> {
    /// Creates a new instance of [`DashboardService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counts residents, shelters, open alerts and upcoming events and sums shelter capacity.
    ///
    /// Figures are read with separate queries and may be mutually inconsistent while records
    /// are being created.
    pub async fn get_stats(&self) -> Result<DashboardStatsDto, Error> {
        let shelters = ShelterRepository::new(self.db).get_all().await?;
        let total_residents = ResidentRepository::new(self.db).count().await?;
        let active_alerts = RiskAlertRepository::new(self.db).count_unresolved().await?;
        let upcoming_events = EventRepository::new(self.db)
            .count_upcoming(Utc::now().naive_utc())
            .await?;

        Ok(DashboardStatsDto {
            total_residents,
            total_shelters: shelters.len() as u64,
            active_alerts,
            upcoming_events,
            shelter_stats: shelter_stats(&shelters),
        })
    }
}

fn shelter_stats(shelters: &[ShelterModel]) -> ShelterStatsDto {
    let total_capacity: i64 = shelters.iter().map(|s| i64::from(s.capacity)).sum();
    let total_occupancy: i64 = shelters.iter().map(|s| i64::from(s.current_occupancy)).sum();
    let active_shelters = shelters.iter().filter(|s| s.current_occupancy > 0).count() as i64;

    let occupancy_rate = if total_capacity > 0 {
        total_occupancy as f64 / total_capacity as f64 * 100.0
    } else {
        0.0
    };

    ShelterStatsDto {
        total_capacity,
        total_occupancy,
        occupancy_rate,
        active_shelters,
    }
}
