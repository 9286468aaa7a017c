use crate::components::{
    charts::{BarChart, DonutChart, LineChart},
    layout::{LiveBadge, Panel, Skeleton},
};
use crate::pages::dashboard::repository::DashboardData;
use leptos::*;

#[component]
fn ChartSkeleton() -> impl IntoView {
    view! { <Skeleton class="h-60 w-full"/> }
}

#[component]
pub fn ChartsSection(
    #[prop(into)] data: Signal<DashboardData>,
    #[prop(into)] loading: MaybeSignal<bool>,
) -> impl IntoView {
    let months = Signal::derive(move || {
        data.with(|d| d.monthly.iter().map(|p| p.month.clone()).collect::<Vec<_>>())
    });
    let revenue = Signal::derive(move || {
        data.with(|d| d.monthly.iter().map(|p| p.revenue as f64).collect::<Vec<_>>())
    });
    let conversions = Signal::derive(move || {
        data.with(|d| d.monthly.iter().map(|p| p.conversions as f64).collect::<Vec<_>>())
    });
    let is_loading = Signal::derive(move || loading.get());

    view! {
        <div class="grid grid-cols-1 gap-6 lg:grid-cols-3">
            <div class="lg:col-span-2">
                <Panel title="Revenue Trend" subtitle="Monthly revenue over the year">
                    <Show when=move || !is_loading.get() fallback=|| view! { <ChartSkeleton/> }>
                        <LineChart labels=months.get_untracked() values=revenue value_prefix="$"/>
                    </Show>
                </Panel>
            </div>
            <Panel title="Channel Performance" subtitle="Share of traffic by channel">
                <Show when=move || !is_loading.get() fallback=|| view! { <ChartSkeleton/> }>
                    {move || view! { <DonutChart shares=data.with(|d| d.channels.clone())/> }}
                </Show>
            </Panel>
            <div class="lg:col-span-3">
                <Panel
                    title="Monthly Conversions"
                    subtitle="Conversions per month"
                    badge=view! { <LiveBadge/> }.into_view()
                >
                    <Show when=move || !is_loading.get() fallback=|| view! { <ChartSkeleton/> }>
                        <BarChart labels=months.get_untracked() values=conversions/>
                    </Show>
                </Panel>
            </div>
        </div>
    }
}
