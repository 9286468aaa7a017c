use leptos::*;

use crate::config::RuntimeConfig;
use crate::pages::dashboard::view_model::DashboardViewModel;
use crate::test_support::helpers::sample_data;

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}

/// Provides a dashboard over seeded data. Call inside a reactive runtime.
pub fn provide_dashboard(seed: u64, loaded: bool) -> DashboardViewModel {
    let vm = DashboardViewModel::with_data(&RuntimeConfig::default(), sample_data(seed));
    if loaded {
        vm.finish_loading();
    }
    provide_context(vm);
    vm
}
