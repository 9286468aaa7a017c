use crate::config::RuntimeConfig;
use crate::pages::dashboard::{
    repository::{self, DashboardData},
    table::{arrange_rows, build_table_view, total_pages, SortField, TableState, TableView},
    utils::campaigns_to_csv,
};
use crate::utils::{download::trigger_csv_download, timers};
use leptos::*;

pub const EXPORT_FILENAME: &str = "campaigns.csv";

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub data: RwSignal<DashboardData>,
    pub loading: RwSignal<bool>,
    pub table_state: RwSignal<TableState>,
    pub table_view: Memo<TableView>,
    page_size: usize,
    record_count: usize,
}

impl DashboardViewModel {
    pub fn new(config: &RuntimeConfig) -> Self {
        let data = repository::generate_dashboard_data(&mut rand::thread_rng(), config.record_count);
        Self::with_data(config, data)
    }

    pub fn with_data(config: &RuntimeConfig, data: DashboardData) -> Self {
        let page_size = config.page_size;
        let data = create_rw_signal(data);
        let table_state = create_rw_signal(TableState::default());
        let table_view = create_memo(move |_| {
            data.with(|d| table_state.with(|state| build_table_view(&d.campaigns, state, page_size)))
        });
        Self {
            data,
            loading: create_rw_signal(true),
            table_state,
            table_view,
            page_size,
            record_count: config.record_count,
        }
    }

    pub fn finish_loading(&self) {
        self.loading.set(false);
    }

    /// Replaces the whole data set with a fresh random one.
    pub fn refresh(&self) {
        let data = repository::generate_dashboard_data(&mut rand::thread_rng(), self.record_count);
        self.apply_refresh(data);
    }

    /// Swaps in `data`, keeping search and sort and pulling the page back in range.
    pub fn apply_refresh(&self, data: DashboardData) {
        let page_size = self.page_size;
        let total = self
            .table_state
            .with_untracked(|state| arrange_rows(&data.campaigns, state).len());
        let pages = total_pages(total, page_size);
        self.data.set(data);
        self.table_state.update(|state| state.clamp_page(pages));
        log::debug!("Dashboard data refreshed ({total} matching campaigns)");
    }

    pub fn set_search(&self, term: String) {
        self.table_state.update(|state| state.set_search(term));
    }

    pub fn toggle_sort(&self, field: SortField) {
        self.table_state.update(|state| state.toggle_sort(field));
    }

    pub fn previous_page(&self) {
        self.table_state.update(|state| state.previous_page());
    }

    pub fn next_page(&self) {
        let pages = self.table_view.with_untracked(|view| view.total_pages());
        self.table_state.update(|state| state.next_page(pages));
    }

    /// CSV of every filtered and sorted row, ignoring pagination.
    pub fn export_csv(&self) -> String {
        self.data.with_untracked(|data| {
            self.table_state
                .with_untracked(|state| campaigns_to_csv(arrange_rows(&data.campaigns, state)))
        })
    }

    pub fn download_csv(&self) {
        let csv = self.export_csv();
        match trigger_csv_download(EXPORT_FILENAME, &csv) {
            Ok(()) => log::info!("Exported campaigns to {EXPORT_FILENAME}"),
            Err(err) => log::warn!("CSV export failed: {err}"),
        }
    }

    /// Schedules the loading timeout and the refresh interval; both are
    /// cancelled when the owning scope is disposed.
    pub fn start_timers(&self, config: &RuntimeConfig) {
        let vm = *self;
        let loading = timers::schedule_once("loading", config.loading_delay_ms, move || {
            vm.finish_loading()
        });
        let refresh = timers::schedule_repeating("refresh", config.refresh_interval_ms, move || {
            vm.refresh()
        });
        let handles = store_value(Some((loading, refresh)));
        on_cleanup(move || {
            if let Some((loading, refresh)) = handles.try_update_value(|h| h.take()).flatten() {
                loading.cancel();
                refresh.cancel();
            }
        });
    }
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    match use_context::<DashboardViewModel>() {
        Some(vm) => vm,
        None => {
            let config = use_context::<RuntimeConfig>().unwrap_or_else(crate::config::current);
            let vm = DashboardViewModel::new(&config);
            vm.start_timers(&config);
            provide_context(vm);
            vm
        }
    }
}
