use leptos::prelude::*;
use leptos_use::use_preferred_dark;

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use crate::theme::{Theme, DARK_CLASS};

/// Owns the dark-mode preference. `toggle` is the only way to change it.
#[derive(Clone, Copy)]
pub struct ThemeStore {
    theme: Signal<Theme>,
    set_stored: WriteSignal<Option<bool>>,
}

impl ThemeStore {
    fn new() -> Self {
        #[cfg(feature = "hydrate")]
        let (stored, set_stored, _) =
            use_local_storage::<Option<bool>, JsonSerdeWasmCodec>(crate::theme::THEME_STORAGE_KEY);
        #[cfg(not(feature = "hydrate"))]
        let (stored, set_stored) = signal(None::<bool>);

        let stored: Signal<Option<bool>> = stored.into();
        let prefers_dark = use_preferred_dark();
        let theme = Signal::derive(move || Theme::resolve(stored.get(), prefers_dark.get()));

        Effect::new(move |_| apply_theme_class(theme.get()));

        Self { theme, set_stored }
    }

    pub fn theme(&self) -> Signal<Theme> {
        self.theme
    }

    pub fn toggle(&self) {
        let next = self.theme.get_untracked().toggled();
        log::debug!("theme -> {next:?}");
        self.set_stored.set(Some(next.is_dark()));
    }
}

fn apply_theme_class(theme: Theme) {
    let Some(root) = document().document_element() else {
        return;
    };
    if let Err(e) = root
        .class_list()
        .toggle_with_force(DARK_CLASS, theme.is_dark())
    {
        log::warn!("couldn't apply theme class: {e:?}");
    }
}

pub fn provide_theme_store() {
    provide_context(ThemeStore::new());
}

pub fn use_theme_store() -> ThemeStore {
    expect_context::<ThemeStore>()
}
