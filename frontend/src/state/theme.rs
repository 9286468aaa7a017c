use leptos::*;

const DARK_CLASS: &str = "dark";
#[cfg(target_arch = "wasm32")]
const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_class(&self) -> &'static str {
        match self {
            Theme::Light => "",
            Theme::Dark => DARK_CLASS,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Operating system preference; always light outside the browser.
    pub fn system() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let prefers_dark = web_sys::window()
                .and_then(|w| w.match_media(DARK_QUERY).ok().flatten())
                .map(|m| m.matches())
                .unwrap_or(false);
            if prefers_dark {
                return Theme::Dark;
            }
        }
        Theme::Light
    }
}

#[derive(Clone, Copy)]
pub struct ThemeState {
    pub theme: RwSignal<Theme>,
    follows_system: StoredValue<bool>,
}

impl ThemeState {
    pub fn new(initial: Theme) -> Self {
        Self {
            theme: create_rw_signal(initial),
            follows_system: store_value(true),
        }
    }

    pub fn set_theme(&self, theme: Theme) {
        log::debug!("Switching theme to {:?}", theme);
        self.theme.set(theme);
        apply_to_document(theme);
    }

    /// Explicit user choice; the system preference is ignored afterwards.
    pub fn toggle(&self) {
        self.follows_system.set_value(false);
        self.set_theme(self.theme.get_untracked().toggled());
    }

    pub fn follows_system(&self) -> bool {
        self.follows_system.get_value()
    }

    pub fn current(&self) -> ReadSignal<Theme> {
        self.theme.read_only()
    }
}

#[cfg(target_arch = "wasm32")]
fn apply_to_document(theme: Theme) {
    let Some(html) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let list = html.class_list();
    let result = if theme.is_dark() {
        list.add_1(DARK_CLASS)
    } else {
        list.remove_1(DARK_CLASS)
    };
    if result.is_err() {
        log::warn!("Could not update the document theme class");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn apply_to_document(_theme: Theme) {}

#[cfg(target_arch = "wasm32")]
fn follow_system_theme(state: ThemeState) {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    let Some(media) = web_sys::window().and_then(|w| w.match_media(DARK_QUERY).ok().flatten())
    else {
        return;
    };
    let closure = Closure::wrap(Box::new(move |event: web_sys::MediaQueryListEvent| {
        if !state.follows_system() {
            return;
        }
        let theme = if event.matches() { Theme::Dark } else { Theme::Light };
        state.set_theme(theme);
    }) as Box<dyn FnMut(_)>);
    if media
        .add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("Could not watch the system color scheme");
    }
    closure.forget();
}

#[cfg(not(target_arch = "wasm32"))]
fn follow_system_theme(_state: ThemeState) {}

/// Provides the app theme, reusing a `ThemeState` that is already in context.
pub fn provide_theme() -> ThemeState {
    if let Some(existing) = use_context::<ThemeState>() {
        apply_to_document(existing.theme.get_untracked());
        return existing;
    }
    let state = ThemeState::new(Theme::system());
    provide_context(state);
    apply_to_document(state.theme.get_untracked());
    follow_system_theme(state);
    state
}

/// Theme state from context, or a fresh light theme when no provider is mounted.
pub fn use_theme() -> ThemeState {
    use_context::<ThemeState>().unwrap_or_else(|| {
        let state = ThemeState::new(Theme::default());
        provide_context(state);
        state
    })
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn toggling_flips_between_light_and_dark() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Dark.as_class(), "dark");
        assert_eq!(Theme::Light.as_class(), "");
    }

    #[test]
    fn provided_theme_is_shared_through_context() {
        with_runtime(|| {
            let provided = provide_theme();
            assert_eq!(provided.current().get_untracked(), Theme::Light);
            assert!(provided.follows_system());
            use_theme().toggle();
            assert_eq!(provided.current().get_untracked(), Theme::Dark);
            assert!(!provided.follows_system());
        });
    }
}
