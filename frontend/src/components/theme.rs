use crate::state::theme::{provide_theme, use_theme};
use leptos::*;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme_state = use_theme();
    let current_theme = theme_state.current();
    let is_dark = move || current_theme.get().is_dark();

    view! {
        <button
            type="button"
            class="relative inline-flex h-6 w-11 items-center rounded-full bg-gray-200 dark:bg-gray-700 transition-colors focus:outline-none focus:ring-2 focus:ring-blue-500 focus:ring-offset-2"
            on:click=move |_| theme_state.toggle()
            aria-label="Toggle theme"
            aria-pressed=move || is_dark().to_string()
        >
            <span class="sr-only">"Toggle theme"</span>
            <span class=move || {
                let position = if is_dark() { "translate-x-6" } else { "translate-x-1" };
                format!("inline-block h-4 w-4 transform rounded-full bg-white shadow transition-transform {}", position)
            }/>
            <span class=move || {
                let opacity = if is_dark() { "opacity-100" } else { "opacity-0" };
                format!("absolute left-1 top-1/2 -translate-y-1/2 text-xs text-gray-400 transition-opacity {}", opacity)
            }>
                <i class="fas fa-moon"></i>
            </span>
            <span class=move || {
                let opacity = if is_dark() { "opacity-0" } else { "opacity-100" };
                format!("absolute right-1 top-1/2 -translate-y-1/2 text-xs text-yellow-500 transition-opacity {}", opacity)
            }>
                <i class="fas fa-sun"></i>
            </span>
        </button>
    }
}

#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let theme_state = provide_theme();

    view! {
        <div class=move || theme_state.current().get().as_class()>
            {children()}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::theme::{Theme, ThemeState};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn provider_reuses_theme_state_already_in_context() {
        let html = render_to_string(move || {
            provide_context(ThemeState::new(Theme::Dark));
            view! {
                <ThemeProvider>
                    <ThemeToggle/>
                </ThemeProvider>
            }
        });
        assert!(html.contains("class=\"dark\""));
        assert!(html.contains("aria-pressed=\"true\""));
    }

    #[test]
    fn provider_defaults_to_light_outside_the_browser() {
        let html = render_to_string(move || view! { <ThemeProvider><ThemeToggle/></ThemeProvider> });
        assert!(!html.contains("class=\"dark\""));
        assert!(html.contains("aria-pressed=\"false\""));
    }

    #[test]
    fn toggle_starts_light_without_provider() {
        let html = render_to_string(move || view! { <ThemeToggle/> });
        assert!(html.contains("translate-x-1"));
        assert!(html.contains("aria-pressed=\"false\""));
    }
}
