use crate::{components::cards::MetricCard, pages::dashboard::repository::key_metrics};
use leptos::*;

#[component]
pub fn MetricsSection(#[prop(into)] loading: MaybeSignal<bool>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 gap-6 sm:grid-cols-2 lg:grid-cols-4">
            {key_metrics()
                .into_iter()
                .map(|metric| view! { <MetricCard metric=metric loading=loading.clone()/> })
                .collect_view()}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_all_four_metrics() {
        let html = render_to_string(move || view! { <MetricsSection loading=false/> });
        for title in ["Total Revenue", "Active Users", "Conversions", "Growth Rate"] {
            assert!(html.contains(title), "missing {title}");
        }
        assert!(html.contains("15.8%"));
    }
}
