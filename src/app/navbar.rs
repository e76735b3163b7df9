use leptos::prelude::*;

use crate::content::{NAV_SECTIONS, OWNER_NAME, SOCIAL_LINKS};
use crate::scroll::nav_elevated;

use super::scroll::{use_active_section, use_scroll_position};
use super::theme::use_theme_store;

#[component]
pub fn Navbar() -> impl IntoView {
    let theme = use_theme_store();
    let scroll = use_scroll_position();
    let elevated = Memo::new(move |_| nav_elevated(scroll.y.get()));
    let active = use_active_section(NAV_SECTIONS);

    // theme is only known client side; render the toggle after hydration
    let (mounted, set_mounted) = signal(false);
    Effect::new(move |_| set_mounted.set(true));

    let links = NAV_SECTIONS
        .iter()
        .map(|s| {
            let id = s.id;
            let is_active = move || active.get() == Some(id);
            view! {
                <a
                    href=format!("#{id}")
                    class="nav-link"
                    class:active=is_active
                    aria-current=move || is_active().then_some("true")
                >
                    {s.label}
                </a>
            }
        })
        .collect_view();

    let socials = SOCIAL_LINKS
        .iter()
        .filter(|l| l.show_in_nav)
        .map(|l| {
            let external = l.is_external();
            view! {
                <a
                    href=l.href
                    target=external.then_some("_blank")
                    rel=external.then_some("noopener noreferrer")
                    class="nav-link"
                    aria-label=l.label
                >
                    <i class=l.icon></i>
                </a>
            }
        })
        .collect_view();

    view! {
        <nav class=move || {
            if elevated.get() {
                "fixed w-full bg-background/80 backdrop-blur-sm border-b z-50 transition-all duration-300 shadow-lg"
            } else {
                "fixed w-full bg-background/80 backdrop-blur-sm border-b z-50 transition-all duration-300"
            }
        }>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <a
                        href="#"
                        class="text-2xl font-bold bg-gradient-to-r from-primary to-secondary bg-clip-text text-transparent"
                    >
                        {OWNER_NAME}
                    </a>
                    <div class="hidden md:flex items-center gap-8">{links}</div>
                    <div class="flex items-center gap-4">
                        <Show when=move || mounted.get()>
                            <button
                                on:click=move |_| theme.toggle()
                                class="nav-link"
                                aria-label="Toggle dark mode"
                            >
                                {move || if theme.theme().get().is_dark() { "☀" } else { "☾" }}
                            </button>
                        </Show>
                        {socials}
                    </div>
                </div>
            </div>
        </nav>
    }
}
