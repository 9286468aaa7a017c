#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::pages::dashboard::repository::{generate_dashboard_data, DashboardData};
    use crate::pages::dashboard::table::{CampaignRow, CampaignStatus};
    use chrono::NaiveDate;
    use rand::{rngs::StdRng, SeedableRng};

    pub fn seeded_rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    pub fn campaign_row(id: u32, name: &str) -> CampaignRow {
        CampaignRow {
            id,
            campaign: name.into(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            impressions: 10_000,
            clicks: 500,
            conversions: 20,
            ctr: 1.0,
            cost: 100.0,
            status: CampaignStatus::Active,
        }
    }

    pub fn sample_data(seed: u64) -> DashboardData {
        generate_dashboard_data(&mut seeded_rng(seed), 50)
    }
}
