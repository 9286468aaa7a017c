use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    components::{layout::APP_TITLE, theme::ThemeProvider},
    pages::dashboard::DashboardPage,
};

#[cfg(target_arch = "wasm32")]
pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    view! {
        <Title text=APP_TITLE/>
        <ThemeProvider>
            <Router>
                <Routes>
                    <Route path="/" view=DashboardPage/>
                    <Route path="/*any" view=NotFound/>
                </Routes>
            </Router>
        </ThemeProvider>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col items-center justify-center gap-4 bg-gray-50 dark:bg-gray-950">
            <p class="text-6xl font-bold text-gray-300 dark:text-gray-700">"404"</p>
            <p class="text-gray-600 dark:text-gray-400">"This page does not exist."</p>
            <a href="/" class="text-blue-600 hover:underline">"Back to the dashboard"</a>
        </div>
    }
}
