use leptos::*;

use crate::components::layout::Skeleton;
use crate::pages::dashboard::{repository::KeyMetric, utils::format_change};

fn trend_badge(change: f64) -> (&'static str, &'static str) {
    if change >= 0.0 {
        ("fa-arrow-up", "text-green-600 bg-green-50 dark:bg-green-900/40 dark:text-green-300")
    } else {
        ("fa-arrow-down", "text-red-600 bg-red-50 dark:bg-red-900/40 dark:text-red-300")
    }
}

#[component]
pub fn MetricCard(metric: KeyMetric, #[prop(into)] loading: MaybeSignal<bool>) -> impl IntoView {
    let (arrow, trend_classes) = trend_badge(metric.change);
    let KeyMetric {
        title,
        value,
        change,
        icon,
        accent,
    } = metric;

    view! {
        <div class="relative overflow-hidden p-6 rounded-2xl bg-white dark:bg-gray-900 border border-gray-100 dark:border-gray-800 shadow hover:shadow-lg transition-all duration-300">
            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <div class="space-y-3">
                        <Skeleton class="h-4 w-24"/>
                        <Skeleton class="h-8 w-32"/>
                        <Skeleton class="h-4 w-20"/>
                    </div>
                }
            >
                <div class="flex items-start justify-between">
                    <div>
                        <p class="text-sm font-medium text-gray-500 dark:text-gray-400">{title}</p>
                        <p class="mt-2 text-3xl font-bold text-gray-900 dark:text-white">{value}</p>
                    </div>
                    <div class=format!("h-12 w-12 rounded-xl bg-gradient-to-br {} flex items-center justify-center text-white", accent.gradient())>
                        <i class=format!("fas {}", icon)></i>
                    </div>
                </div>
                <div class="mt-4 flex items-center gap-2 text-sm">
                    <span class=format!("inline-flex items-center gap-1 px-2 py-0.5 rounded-full font-medium {}", trend_classes)>
                        <i class=format!("fas {}", arrow)></i>
                        {format_change(change)}
                    </span>
                    <span class="text-gray-500 dark:text-gray-400">"vs last month"</span>
                </div>
            </Show>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::pages::dashboard::repository::key_metrics;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn loaded_card_shows_value_and_trend() {
        let metric = key_metrics().remove(0);
        let html = render_to_string(move || view! { <MetricCard metric=metric loading=false/> });
        assert!(html.contains("Total Revenue"));
        assert!(html.contains("$245,890"));
        assert!(html.contains("12.5%"));
        assert!(html.contains("fa-arrow-up"));
        assert!(html.contains("vs last month"));
    }

    #[test]
    fn negative_change_points_down_without_sign() {
        let metric = key_metrics().remove(2);
        let html = render_to_string(move || view! { <MetricCard metric=metric loading=false/> });
        assert!(html.contains("fa-arrow-down"));
        assert!(html.contains("2.1%"));
        assert!(!html.contains("-2.1%"));
    }

    #[test]
    fn loading_card_renders_skeleton_only() {
        let metric = key_metrics().remove(1);
        let html = render_to_string(move || view! { <MetricCard metric=metric loading=true/> });
        assert!(html.contains("animate-pulse"));
        assert!(!html.contains("18,432"));
    }
}
