use crate::components::layout::Layout;
use crate::pages::dashboard::{
    components::{CampaignTable, ChartsSection, MetricsSection},
    table::SortField,
    view_model::use_dashboard_view_model,
};
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = use_dashboard_view_model();
    let loading = vm.loading;

    view! {
        <Layout on_download=move |_: ()| vm.download_csv()>
            <MetricsSection loading=loading/>
            <ChartsSection data=vm.data loading=loading/>
            <CampaignTable
                table=vm.table_view
                loading=loading
                on_search=move |term: String| vm.set_search(term)
                on_sort=move |field: SortField| vm.toggle_sort(field)
                on_previous=move |_: ()| vm.previous_page()
                on_next=move |_: ()| vm.next_page()
            />
        </Layout>
    }
}
