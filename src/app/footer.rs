use leptos::prelude::*;

use crate::content::{copyright_year, NAV_SECTIONS, OWNER_NAME, OWNER_SUMMARY, SOCIAL_LINKS};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-card border-t border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 py-8 sm:py-12">
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-8">
                    <div>
                        <h3 class="text-lg sm:text-xl font-bold mb-3">{OWNER_NAME}</h3>
                        <p class="text-sm text-muted leading-relaxed">{OWNER_SUMMARY}</p>
                    </div>
                    <div>
                        <h4 class="font-semibold mb-3">"Quick Links"</h4>
                        <ul class="space-y-2">
                            {NAV_SECTIONS
                                .iter()
                                .map(|s| {
                                    view! {
                                        <li>
                                            <a
                                                href=format!("#{}", s.id)
                                                class="text-sm text-muted hover:text-primary transition-colors"
                                            >
                                                {s.label}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                    <div>
                        <h4 class="font-semibold mb-3">"Connect"</h4>
                        <div class="flex gap-3">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|l| {
                                    let external = l.is_external();
                                    view! {
                                        <a
                                            href=l.href
                                            target=external.then_some("_blank")
                                            rel=external.then_some("noopener noreferrer")
                                            class="p-2 rounded-lg bg-muted/20 hover:bg-primary hover:text-primary-foreground transition-colors"
                                            aria-label=l.label
                                        >
                                            <i class=l.icon></i>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
                <div class="mt-8 pt-6 border-t border-border flex flex-col sm:flex-row justify-between items-center gap-4">
                    <p class="text-xs sm:text-sm text-muted">
                        {format!("© {} {}. All rights reserved.", copyright_year(), OWNER_NAME)}
                    </p>
                    <p class="text-xs sm:text-sm text-muted">
                        "Built with " <span class="text-red">"♥"</span>
                        " using Rust, Leptos & Tailwind CSS"
                    </p>
                </div>
            </div>
        </footer>
    }
}
