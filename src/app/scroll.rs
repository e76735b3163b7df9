use leptos::prelude::*;
use leptos_use::{use_window_scroll, use_window_size, UseWindowSizeReturn};
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::content::Section;
use crate::scroll::{active_section, back_to_top_visible, progress_percent};

/// Window vertical scroll offset, shared by every scroll observer.
#[derive(Clone, Copy)]
pub struct ScrollPosition {
    pub y: Signal<f64>,
}

pub fn provide_scroll_position() {
    let (_, y) = use_window_scroll();
    provide_context(ScrollPosition { y });
}

pub fn use_scroll_position() -> ScrollPosition {
    expect_context::<ScrollPosition>()
}

/// Tracks which of `sections` is currently under the navbar.
pub fn use_active_section(sections: &'static [Section]) -> ReadSignal<Option<&'static str>> {
    let scroll = use_scroll_position();
    let (active, set_active) = signal(None::<&'static str>);

    // effects only run in the browser, so the DOM is there
    Effect::new(move |_| {
        let y = scroll.y.get();
        let doc = document();
        let tops = sections
            .iter()
            .filter_map(|s| {
                let el = doc.get_element_by_id(s.id)?;
                Some((s.id, el.get_bounding_client_rect().top() + y))
            })
            .collect::<Vec<_>>();
        let current = active_section(&tops, y);
        if current != active.get_untracked() {
            set_active.set(current);
        }
    });

    active
}

#[component]
pub fn ScrollProgress() -> impl IntoView {
    let scroll = use_scroll_position();
    let UseWindowSizeReturn { height, .. } = use_window_size();
    let (percent, set_percent) = signal(0.0_f64);

    Effect::new(move |_| {
        let y = scroll.y.get();
        let viewport = height.get();
        let page = document()
            .document_element()
            .map(|el| el.scroll_height() as f64)
            .unwrap_or_default();
        set_percent.set(progress_percent(y, page, viewport));
    });

    view! {
        <div class="fixed top-0 left-0 h-1 w-full z-[60] bg-border">
            <div
                class="h-full bg-primary transition-all duration-150"
                style=move || format!("width: {}%", percent.get())
            ></div>
        </div>
    }
}

fn scroll_to_top() {
    let opts = ScrollToOptions::new();
    opts.set_top(0.0);
    opts.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&opts);
}

#[component]
pub fn BackToTop() -> impl IntoView {
    let scroll = use_scroll_position();
    let visible = Memo::new(move |_| back_to_top_visible(scroll.y.get()));

    view! {
        <Show when=move || visible.get()>
            <button
                on:click=move |_| scroll_to_top()
                class="fixed bottom-8 right-8 p-3 rounded-full bg-primary text-primary-foreground shadow-lg hover:scale-110 transition-transform z-50 border border-border"
                aria-label="Back to top"
            >
                "↑"
            </button>
        </Show>
    }
}
