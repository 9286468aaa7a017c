use crate::components::theme::ThemeToggle;
use leptos::*;

pub const APP_TITLE: &str = "ADmyBRAND Insights";

#[component]
pub fn Header(#[prop(into)] on_download: Callback<()>) -> impl IntoView {
    view! {
        <header class="bg-white/80 dark:bg-gray-900/80 backdrop-blur border-b border-gray-200 dark:border-gray-800 sticky top-0 z-10">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center gap-3">
                        <div class="h-9 w-9 rounded-lg bg-gradient-to-br from-blue-500 to-purple-600 flex items-center justify-center text-white">
                            <i class="fas fa-chart-line"></i>
                        </div>
                        <div>
                            <h1 class="text-xl font-semibold text-gray-900 dark:text-white">{APP_TITLE}</h1>
                            <p class="text-xs text-gray-500 dark:text-gray-400">
                                "Marketing analytics at a glance"
                            </p>
                        </div>
                    </div>
                    <div class="flex items-center gap-4">
                        <button
                            type="button"
                            class="inline-flex items-center gap-2 px-3 py-2 rounded-md text-sm font-medium text-gray-700 dark:text-gray-200 bg-gray-100 dark:bg-gray-800 hover:bg-gray-200 dark:hover:bg-gray-700 transition-colors"
                            on:click=move |_| on_download.call(())
                        >
                            <i class="fas fa-download"></i>
                            <span>"Export CSV"</span>
                        </button>
                        <ThemeToggle/>
                    </div>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(#[prop(into)] on_download: Callback<()>, children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-50 dark:bg-gray-950 transition-colors">
            <Header on_download=on_download/>
            <main class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8 space-y-6">
                {children()}
            </main>
        </div>
    }
}

/// Titled card that hosts a chart or the campaign table.
#[component]
pub fn Panel(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(optional)] badge: Option<View>,
    children: Children,
) -> impl IntoView {
    view! {
        <section class="bg-white dark:bg-gray-900 shadow rounded-xl border border-gray-100 dark:border-gray-800 p-6 space-y-4">
            <div class="flex items-start justify-between gap-2">
                <div>
                    <h2 class="text-base font-semibold text-gray-900 dark:text-white">{title}</h2>
                    {subtitle.map(|text| view! {
                        <p class="text-sm text-gray-500 dark:text-gray-400">{text}</p>
                    })}
                </div>
                {badge}
            </div>
            {children()}
        </section>
    }
}

#[component]
pub fn LiveBadge() -> impl IntoView {
    view! {
        <span class="inline-flex items-center gap-1 px-2 py-0.5 rounded-full text-xs font-semibold bg-green-100 text-green-800 dark:bg-green-900 dark:text-green-200">
            <span class="h-2 w-2 rounded-full bg-green-500 animate-pulse"></span>
            "LIVE"
        </span>
    }
}

/// Pulsing placeholder block shown while data is loading.
#[component]
pub fn Skeleton(#[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <div class=format!("animate-pulse rounded bg-gray-200 dark:bg-gray-700 {}", class) data-skeleton="true"></div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn header_renders_title_and_actions() {
        let html = render_to_string(move || view! { <Header on_download=|_: ()| {}/> });
        assert!(html.contains("ADmyBRAND Insights"));
        assert!(html.contains("Export CSV"));
        assert!(html.contains("Toggle theme"));
    }

    #[test]
    fn layout_renders_children() {
        let html = render_to_string(move || {
            view! { <Layout on_download=|_: ()| {}><div>"child"</div></Layout> }
        });
        assert!(html.contains("child"));
        assert!(html.contains("<main"));
    }

    #[test]
    fn panel_renders_title_subtitle_and_badge() {
        let html = render_to_string(move || {
            view! {
                <Panel title="Revenue Trend" subtitle="Monthly revenue" badge=view! { <LiveBadge/> }.into_view()>
                    <p>"body"</p>
                </Panel>
            }
        });
        assert!(html.contains("Revenue Trend"));
        assert!(html.contains("Monthly revenue"));
        assert!(html.contains("LIVE"));
        assert!(html.contains("body"));
    }

    #[test]
    fn skeleton_keeps_extra_classes() {
        let html = render_to_string(move || view! { <Skeleton class="h-4 w-24"/> });
        assert!(html.contains("animate-pulse"));
        assert!(html.contains("h-4 w-24"));
    }
}
