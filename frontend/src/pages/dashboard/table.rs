//! Campaign table view engine.
//!
//! Rows flow through three pure stages: [`filter_rows`] narrows by the search
//! term, [`sort_rows`] orders by the active column, and [`paginate`] cuts the
//! page that is rendered. [`TableState`] holds the user-controlled parameters
//! and is the only thing that changes between renders besides the rows.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::pages::dashboard::utils::{format_count, format_currency, format_date, format_percent};

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CampaignStatus {
    Active,
    Paused,
}

impl CampaignStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CampaignStatus::Active => "Active",
            CampaignStatus::Paused => "Paused",
        }
    }

    pub fn badge_classes(&self) -> &'static str {
        match self {
            CampaignStatus::Active => "bg-green-100 text-green-800",
            CampaignStatus::Paused => "bg-red-100 text-red-800",
        }
    }
}

/// One campaign performance entry.
///
/// `ctr` is a percentage (`3.42` means 3.42 %) and `cost` is in dollars; both
/// are formatted only when rendered.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CampaignRow {
    pub id: u32,
    pub campaign: String,
    pub date: NaiveDate,
    pub impressions: u64,
    pub clicks: u64,
    pub conversions: u64,
    pub ctr: f64,
    pub cost: f64,
    pub status: CampaignStatus,
}

impl CampaignRow {
    pub fn date_label(&self) -> String {
        format_date(self.date)
    }

    pub fn impressions_label(&self) -> String {
        format_count(self.impressions)
    }

    pub fn clicks_label(&self) -> String {
        format_count(self.clicks)
    }

    pub fn ctr_label(&self) -> String {
        format_percent(self.ctr)
    }

    pub fn cost_label(&self) -> String {
        format_currency(self.cost)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortField {
    Campaign,
    Date,
    Impressions,
    Clicks,
    Conversions,
    Ctr,
    Cost,
    Status,
}

impl SortField {
    /// Columns rendered in the campaign table, in display order.
    pub const COLUMNS: [SortField; 7] = [
        SortField::Campaign,
        SortField::Date,
        SortField::Impressions,
        SortField::Clicks,
        SortField::Ctr,
        SortField::Cost,
        SortField::Status,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SortField::Campaign => "Campaign",
            SortField::Date => "Date",
            SortField::Impressions => "Impressions",
            SortField::Clicks => "Clicks",
            SortField::Conversions => "Conversions",
            SortField::Ctr => "CTR",
            SortField::Cost => "Cost",
            SortField::Status => "Status",
        }
    }

    fn compare(&self, a: &CampaignRow, b: &CampaignRow) -> Ordering {
        match self {
            SortField::Campaign => a.campaign.cmp(&b.campaign),
            SortField::Date => a.date.cmp(&b.date),
            SortField::Impressions => a.impressions.cmp(&b.impressions),
            SortField::Clicks => a.clicks.cmp(&b.clicks),
            SortField::Conversions => a.conversions.cmp(&b.conversions),
            SortField::Ctr => a.ctr.total_cmp(&b.ctr),
            SortField::Cost => a.cost.total_cmp(&b.cost),
            SortField::Status => a.status.cmp(&b.status),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn indicator(&self) -> &'static str {
        match self {
            SortDirection::Asc => "▲",
            SortDirection::Desc => "▼",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            field: SortField::Date,
            direction: SortDirection::Desc,
        }
    }
}

impl SortState {
    /// Header click: same column flips the direction, a new column starts ascending.
    pub fn toggled(self, field: SortField) -> Self {
        if self.field == field {
            Self {
                field,
                direction: self.direction.flipped(),
            }
        } else {
            Self {
                field,
                direction: SortDirection::Asc,
            }
        }
    }
}

/// User-controlled parameters of the campaign table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TableState {
    pub search: String,
    pub sort: SortState,
    pub page: usize,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort: SortState::default(),
            page: 1,
        }
    }
}

impl TableState {
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.page = 1;
    }

    pub fn toggle_sort(&mut self, field: SortField) {
        self.sort = self.sort.toggled(field);
        self.page = 1;
    }

    pub fn previous_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    pub fn next_page(&mut self, total_pages: usize) {
        self.page = (self.page + 1).min(total_pages.max(1));
    }

    pub fn clamp_page(&mut self, total_pages: usize) {
        self.page = self.page.clamp(1, total_pages.max(1));
    }
}

pub fn filter_rows<'a>(rows: &'a [CampaignRow], term: &str) -> Vec<&'a CampaignRow> {
    if term.is_empty() {
        return rows.iter().collect();
    }
    let needle = term.to_lowercase();
    rows.iter()
        .filter(|row| row.campaign.to_lowercase().contains(&needle))
        .collect()
}

/// Orders rows by `sort`, breaking ties by ascending id in either direction.
pub fn sort_rows<'a>(rows: &[&'a CampaignRow], sort: SortState) -> Vec<&'a CampaignRow> {
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = sort.field.compare(a, b);
        let ordering = match sort.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        };
        ordering.then_with(|| a.id.cmp(&b.id))
    });
    sorted
}

pub fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

#[derive(Clone, Debug, PartialEq)]
pub struct PageSlice<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> PageSlice<T> {
    /// 1-based index of the first item on this page, 0 when the page is empty.
    pub fn first_index(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            (self.page - 1) * self.page_size + 1
        }
    }

    pub fn last_index(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            self.first_index() + self.items.len() - 1
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn range_label(&self) -> String {
        if self.total_items == 0 {
            "No results".to_string()
        } else {
            format!(
                "Showing {} to {} of {} results",
                self.first_index(),
                self.last_index(),
                self.total_items
            )
        }
    }
}

/// Cuts page `page` (1-indexed) out of `items`. Pages past the end are empty.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> PageSlice<T> {
    let page = page.max(1);
    let total_items = items.len();
    let start = (page - 1).saturating_mul(page_size).min(total_items);
    let end = start.saturating_add(page_size).min(total_items);
    PageSlice {
        items: items[start..end].to_vec(),
        page,
        page_size,
        total_items,
        total_pages: total_pages(total_items, page_size),
    }
}

/// What the table renders for a given record set and [`TableState`].
#[derive(Clone, Debug, PartialEq)]
pub struct TableView {
    pub state: TableState,
    pub page: PageSlice<CampaignRow>,
}

impl TableView {
    pub fn total_pages(&self) -> usize {
        self.page.total_pages
    }

    pub fn rows(&self) -> &[CampaignRow] {
        &self.page.items
    }

    pub fn page_label(&self) -> String {
        format!("{} / {}", self.page.page, self.page.total_pages.max(1))
    }
}

/// Filtered and sorted rows across all pages.
pub fn arrange_rows<'a>(rows: &'a [CampaignRow], state: &TableState) -> Vec<&'a CampaignRow> {
    let filtered = filter_rows(rows, &state.search);
    sort_rows(&filtered, state.sort)
}

pub fn build_table_view(rows: &[CampaignRow], state: &TableState, page_size: usize) -> TableView {
    let arranged = arrange_rows(rows, state);
    let page = paginate(&arranged, state.page, page_size);
    TableView {
        state: state.clone(),
        page: PageSlice {
            items: page.items.into_iter().cloned().collect(),
            page: page.page,
            page_size: page.page_size,
            total_items: page.total_items,
            total_pages: page.total_pages,
        },
    }
}
