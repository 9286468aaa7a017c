use crate::components::{
    empty_state::EmptyState,
    layout::{Panel, Skeleton},
};
use crate::pages::dashboard::table::{CampaignRow, SortField, TableView};
use leptos::*;

const SKELETON_ROWS: usize = 5;

fn header_label(field: SortField, view: &TableView) -> String {
    let sort = view.state.sort;
    if sort.field == field {
        format!("{} {}", field.label(), sort.direction.indicator())
    } else {
        field.label().to_string()
    }
}

fn render_row(row: CampaignRow) -> impl IntoView {
    view! {
        <tr class="hover:bg-gray-50 dark:hover:bg-gray-800/60 transition-colors">
            <td class="px-4 py-3 font-medium text-gray-900 dark:text-white whitespace-nowrap">{row.campaign.clone()}</td>
            <td class="px-4 py-3 text-gray-600 dark:text-gray-300">{row.date_label()}</td>
            <td class="px-4 py-3 text-gray-600 dark:text-gray-300">{row.impressions_label()}</td>
            <td class="px-4 py-3 text-gray-600 dark:text-gray-300">{row.clicks_label()}</td>
            <td class="px-4 py-3 text-gray-600 dark:text-gray-300">{row.ctr_label()}</td>
            <td class="px-4 py-3 text-gray-600 dark:text-gray-300">{row.cost_label()}</td>
            <td class="px-4 py-3">
                <span class=format!("px-2 py-0.5 rounded-full text-xs font-semibold {}", row.status.badge_classes())>
                    {row.status.label()}
                </span>
            </td>
        </tr>
    }
}

fn skeleton_rows() -> View {
    (0..SKELETON_ROWS)
        .map(|_| {
            view! {
                <tr>
                    <td class="px-4 py-3" colspan=SortField::COLUMNS.len()>
                        <Skeleton class="h-5 w-full"/>
                    </td>
                </tr>
            }
        })
        .collect_view()
}

#[component]
pub fn CampaignTable(
    #[prop(into)] table: Signal<TableView>,
    #[prop(into)] loading: MaybeSignal<bool>,
    #[prop(into)] on_search: Callback<String>,
    #[prop(into)] on_sort: Callback<SortField>,
    #[prop(into)] on_previous: Callback<()>,
    #[prop(into)] on_next: Callback<()>,
) -> impl IntoView {
    let search = move || table.with(|v| v.state.search.clone());
    let has_previous = move || table.with(|v| v.page.has_previous());
    let has_next = move || table.with(|v| v.page.has_next());

    let headers = SortField::COLUMNS
        .into_iter()
        .map(|field| {
            view! {
                <th class="px-4 py-3 text-left text-xs font-semibold uppercase tracking-wider text-gray-500 dark:text-gray-400">
                    <button
                        type="button"
                        class="inline-flex items-center gap-1 hover:text-gray-900 dark:hover:text-white"
                        on:click=move |_| on_sort.call(field)
                    >
                        {move || table.with(|v| header_label(field, v))}
                    </button>
                </th>
            }
        })
        .collect_view();

    let body = move || {
        if loading.get() {
            return skeleton_rows();
        }
        let rows = table.with(|v| v.rows().to_vec());
        if rows.is_empty() {
            return view! {
                <tr>
                    <td colspan=SortField::COLUMNS.len()>
                        <EmptyState
                            title="No campaigns found"
                            description="Try a different search term."
                        />
                    </td>
                </tr>
            }
            .into_view();
        }
        rows.into_iter().map(render_row).collect_view()
    };

    view! {
        <Panel title="Campaign Performance" subtitle="Search, sort and page through every campaign">
            <div class="relative max-w-sm">
                <i class="fas fa-magnifying-glass absolute left-3 top-1/2 -translate-y-1/2 text-gray-400"></i>
                <input
                    type="search"
                    class="w-full pl-9 pr-3 py-2 rounded-md border border-gray-200 dark:border-gray-700 bg-white dark:bg-gray-800 text-sm text-gray-900 dark:text-white focus:outline-none focus:ring-2 focus:ring-blue-500"
                    placeholder="Search campaigns..."
                    prop:value=search
                    on:input=move |ev| on_search.call(event_target_value(&ev))
                />
            </div>
            <div class="overflow-x-auto">
                <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-800 text-sm">
                    <thead class="bg-gray-50 dark:bg-gray-800/60">
                        <tr>{headers}</tr>
                    </thead>
                    <tbody class="divide-y divide-gray-100 dark:divide-gray-800">{body}</tbody>
                </table>
            </div>
            <div class="flex flex-col gap-3 sm:flex-row sm:items-center sm:justify-between text-sm text-gray-600 dark:text-gray-400">
                <p>{move || table.with(|v| v.page.range_label())}</p>
                <div class="flex items-center gap-2">
                    <button
                        type="button"
                        class="px-3 py-1.5 rounded-md border border-gray-200 dark:border-gray-700 disabled:opacity-50 disabled:cursor-not-allowed"
                        disabled=move || !has_previous()
                        aria-disabled=move || (!has_previous()).to_string()
                        on:click=move |_| on_previous.call(())
                    >
                        "Previous"
                    </button>
                    <span class="px-2 font-medium" data-page-label="true">
                        {move || table.with(|v| v.page_label())}
                    </span>
                    <button
                        type="button"
                        class="px-3 py-1.5 rounded-md border border-gray-200 dark:border-gray-700 disabled:opacity-50 disabled:cursor-not-allowed"
                        disabled=move || !has_next()
                        aria-disabled=move || (!has_next()).to_string()
                        on:click=move |_| on_next.call(())
                    >
                        "Next"
                    </button>
                </div>
            </div>
        </Panel>
    }
}
