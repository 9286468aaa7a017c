use leptos::*;

#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
) -> impl IntoView {
    view! {
        <div class="text-center py-12 px-4 rounded-lg border-2 border-dashed border-gray-200 dark:border-gray-700">
            <div class="mx-auto h-12 w-12 text-gray-400 flex items-center justify-center">
                <i class="fas fa-magnifying-glass text-2xl"></i>
            </div>
            <h3 class="mt-2 text-sm font-semibold text-gray-900 dark:text-white">{title}</h3>
            {description.map(|desc| view! {
                <p class="mt-1 text-sm text-gray-500 dark:text-gray-400">{desc}</p>
            })}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_title_and_optional_description() {
        let html = render_to_string(move || {
            view! { <EmptyState title="No campaigns found" description="Try another search"/> }
        });
        assert!(html.contains("No campaigns found"));
        assert!(html.contains("Try another search"));

        let bare = render_to_string(move || view! { <EmptyState title="Nothing here"/> });
        assert!(bare.contains("Nothing here"));
        assert!(!bare.contains("<p"));
    }
}
