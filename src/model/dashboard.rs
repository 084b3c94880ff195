use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Capacity figures aggregated over every shelter
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ShelterStatsDto {
    pub total_capacity: i64,
    pub total_occupancy: i64,
    /// Occupancy as a percentage of capacity, `0.0` when there is no capacity
    pub occupancy_rate: f64,
    /// Shelters currently housing at least one person
    pub active_shelters: i64,
}

/// Network-wide overview returned by `GET /api/dashboard/stats`
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct DashboardStatsDto {
    pub total_residents: u64,
    pub total_shelters: u64,
    pub active_alerts: u64,
    pub upcoming_events: u64,
    pub shelter_stats: ShelterStatsDto,
}
