use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::pages::dashboard::table::{CampaignRow, CampaignStatus};

pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const REPORT_YEAR: i32 = 2024;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPoint {
    pub month: String,
    pub revenue: u64,
    pub users: u64,
    pub conversions: u64,
    pub growth: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChannelShare {
    pub name: String,
    pub value: u32,
    pub color: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetricAccent {
    Green,
    Blue,
    Purple,
    Orange,
}

impl MetricAccent {
    pub fn gradient(&self) -> &'static str {
        match self {
            MetricAccent::Green => "from-green-500 to-emerald-600",
            MetricAccent::Blue => "from-blue-500 to-cyan-600",
            MetricAccent::Purple => "from-purple-500 to-pink-600",
            MetricAccent::Orange => "from-orange-500 to-red-600",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct KeyMetric {
    pub title: &'static str,
    pub value: &'static str,
    /// Month-over-month change in percent.
    pub change: f64,
    pub icon: &'static str,
    pub accent: MetricAccent,
}

/// Everything the dashboard renders, replaced as a whole on every refresh.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub monthly: Vec<MonthlyPoint>,
    pub channels: Vec<ChannelShare>,
    pub campaigns: Vec<CampaignRow>,
}

pub fn generate_dashboard_data<R: Rng + ?Sized>(rng: &mut R, record_count: usize) -> DashboardData {
    DashboardData {
        monthly: generate_monthly(rng),
        channels: channel_shares(),
        campaigns: generate_campaigns(rng, record_count),
    }
}

pub fn generate_monthly<R: Rng + ?Sized>(rng: &mut R) -> Vec<MonthlyPoint> {
    MONTHS
        .iter()
        .map(|month| MonthlyPoint {
            month: month.to_string(),
            revenue: rng.gen_range(30_000..80_000),
            users: rng.gen_range(1_000..3_000),
            conversions: rng.gen_range(200..700),
            growth: rng.gen_range(-10.0..10.0),
        })
        .collect()
}

/// Ids run from 1; counts beyond `u32::MAX` are capped.
pub fn generate_campaigns<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<CampaignRow> {
    let count = u32::try_from(count).unwrap_or_else(|_| {
        log::warn!("Capping campaign count {count} to {}", u32::MAX);
        u32::MAX
    });
    (1..=count)
        .map(|id| CampaignRow {
            id,
            campaign: format!("Campaign {id}"),
            date: random_report_date(rng),
            impressions: rng.gen_range(10_000..110_000),
            clicks: rng.gen_range(500..5_500),
            conversions: rng.gen_range(20..220),
            ctr: round_cents(rng.gen_range(1.0..6.0)),
            cost: round_cents(rng.gen_range(100.0..1_100.0)),
            status: if rng.gen_bool(0.7) {
                CampaignStatus::Active
            } else {
                CampaignStatus::Paused
            },
        })
        .collect()
}

fn random_report_date<R: Rng + ?Sized>(rng: &mut R) -> NaiveDate {
    let month = rng.gen_range(1..=12);
    let day = rng.gen_range(1..=28);
    NaiveDate::from_ymd_opt(REPORT_YEAR, month, day).unwrap_or_default()
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn channel_shares() -> Vec<ChannelShare> {
    [
        ("Google Ads", 45, "#4285F4"),
        ("Facebook", 25, "#1877F2"),
        ("Instagram", 15, "#E4405F"),
        ("LinkedIn", 10, "#0077B5"),
        ("Twitter", 5, "#1DA1F2"),
    ]
    .into_iter()
    .map(|(name, value, color)| ChannelShare {
        name: name.into(),
        value,
        color: color.into(),
    })
    .collect()
}

pub fn key_metrics() -> Vec<KeyMetric> {
    vec![
        KeyMetric {
            title: "Total Revenue",
            value: "$245,890",
            change: 12.5,
            icon: "fa-dollar-sign",
            accent: MetricAccent::Green,
        },
        KeyMetric {
            title: "Active Users",
            value: "18,432",
            change: 8.2,
            icon: "fa-users",
            accent: MetricAccent::Blue,
        },
        KeyMetric {
            title: "Conversions",
            value: "3,281",
            change: -2.1,
            icon: "fa-bullseye",
            accent: MetricAccent::Purple,
        },
        KeyMetric {
            title: "Growth Rate",
            value: "15.8%",
            change: 5.4,
            icon: "fa-arrow-trend-up",
            accent: MetricAccent::Orange,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::seeded_rng;
    use std::collections::HashSet;

    #[test]
    fn campaigns_follow_fixture_ranges() {
        let rows = generate_campaigns(&mut seeded_rng(1), 50);
        assert_eq!(rows.len(), 50);
        let ids: HashSet<u32> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), 50);
        for row in &rows {
            assert_eq!(row.campaign, format!("Campaign {}", row.id));
            assert!((10_000..110_000).contains(&row.impressions));
            assert!((500..5_500).contains(&row.clicks));
            assert!((20..220).contains(&row.conversions));
            assert!((1.0..=6.0).contains(&row.ctr));
            assert!((100.0..=1_100.0).contains(&row.cost));
            assert_eq!(row.cost, round_cents(row.cost));
            assert_eq!(chrono::Datelike::year(&row.date), REPORT_YEAR);
        }
    }

    #[test]
    fn zero_count_generates_no_campaigns() {
        assert!(generate_campaigns(&mut seeded_rng(1), 0).is_empty());
        let data = generate_dashboard_data(&mut seeded_rng(1), 0);
        assert!(data.campaigns.is_empty());
        assert_eq!(data.monthly.len(), 12);
    }

    #[test]
    fn same_seed_generates_same_data() {
        let a = generate_dashboard_data(&mut seeded_rng(42), 50);
        let b = generate_dashboard_data(&mut seeded_rng(42), 50);
        assert_eq!(a, b);
        let c = generate_dashboard_data(&mut seeded_rng(43), 50);
        assert_ne!(a.campaigns, c.campaigns);
    }

    #[test]
    fn monthly_series_covers_the_year() {
        let monthly = generate_monthly(&mut seeded_rng(9));
        let months: Vec<&str> = monthly.iter().map(|p| p.month.as_str()).collect();
        assert_eq!(months, MONTHS.to_vec());
        for point in &monthly {
            assert!((30_000..80_000).contains(&point.revenue));
            assert!((200..700).contains(&point.conversions));
            assert!((-10.0..10.0).contains(&point.growth));
        }
    }

    #[test]
    fn channel_shares_add_up_to_one_hundred() {
        let total: u32 = channel_shares().iter().map(|c| c.value).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn key_metrics_include_one_decline() {
        let metrics = key_metrics();
        assert_eq!(metrics.len(), 4);
        assert_eq!(metrics.iter().filter(|m| m.change < 0.0).count(), 1);
    }
}
