use chrono::{Datelike, NaiveDate};

use crate::pages::dashboard::table::CampaignRow;
use crate::utils::csv::append_csv_row;

/// Groups digits in threes: `12345` becomes `"12,345"`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_currency(value: f64) -> String {
    format!("${:.2}", value)
}

pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

pub fn format_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

/// Absolute change with one decimal, as shown next to the trend arrow.
pub fn format_change(change: f64) -> String {
    format!("{:.1}%", change.abs())
}

pub const CSV_HEADER: [&str; 9] = [
    "ID",
    "Campaign",
    "Date",
    "Impressions",
    "Clicks",
    "Conversions",
    "CTR",
    "Cost",
    "Status",
];

pub fn campaigns_to_csv<'a>(rows: impl IntoIterator<Item = &'a CampaignRow>) -> String {
    let mut buffer = String::new();
    let header: Vec<String> = CSV_HEADER.iter().map(|h| h.to_string()).collect();
    append_csv_row(&mut buffer, &header);
    for row in rows {
        append_csv_row(
            &mut buffer,
            &[
                row.id.to_string(),
                row.campaign.clone(),
                row.date.format("%Y-%m-%d").to_string(),
                row.impressions.to_string(),
                row.clicks.to_string(),
                row.conversions.to_string(),
                row.ctr_label(),
                row.cost_label(),
                row.status.label().to_string(),
            ],
        );
    }
    buffer
}
