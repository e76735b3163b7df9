mod contact_form;
mod footer;
mod homepage;
mod navbar;
mod scroll;
mod theme;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{
    person_json_ld, OG_IMAGE, OWNER_NAME, OWNER_TITLE, SITE_DESCRIPTION, SITE_KEYWORDS, SITE_URL,
    TWITTER_HANDLE,
};

use footer::Footer;
use homepage::HomePage;
use navbar::Navbar;
use scroll::{provide_scroll_position, BackToTop, ScrollProgress};
use theme::provide_theme_store;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let json_ld = person_json_ld().to_string();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <script type="application/ld+json" inner_html=json_ld></script>
                <MetaTags />
            </head>
            <body class="font-sans bg-background text-foreground">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_theme_store();
    provide_scroll_position();

    view! {
        <Title formatter=|title| format!("{OWNER_NAME} - {title}") />
        <SiteMeta />
        <Router>
            <ScrollProgress />
            <Navbar />
            <main class="pt-16">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <Footer />
            <BackToTop />
        </Router>
    }
}

/// Search and social card metadata.
#[component]
fn SiteMeta() -> impl IntoView {
    let title = format!("{OWNER_NAME} - {OWNER_TITLE}");
    view! {
        <Meta name="description" content=SITE_DESCRIPTION />
        <Meta name="keywords" content=SITE_KEYWORDS />
        <Meta name="author" content=OWNER_NAME />
        <Meta name="robots" content="index, follow" />
        <Meta name="format-detection" content="telephone=no, email=no, address=no" />
        <Link rel="canonical" href=SITE_URL />
        <Meta property="og:title" content=title.clone() />
        <Meta property="og:description" content=SITE_DESCRIPTION />
        <Meta property="og:url" content=SITE_URL />
        <Meta property="og:site_name" content=format!("{OWNER_NAME} Portfolio") />
        <Meta property="og:image" content=format!("{SITE_URL}{OG_IMAGE}") />
        <Meta property="og:locale" content="en_US" />
        <Meta property="og:type" content="website" />
        <Meta name="twitter:card" content="summary_large_image" />
        <Meta name="twitter:title" content=title />
        <Meta name="twitter:description" content=SITE_DESCRIPTION />
        <Meta name="twitter:creator" content=TWITTER_HANDLE />
        <Meta name="twitter:image" content=format!("{SITE_URL}{OG_IMAGE}") />
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
        resp.set_status(http::StatusCode::NOT_FOUND);
    }

    view! {
        <Title text="Page Not Found" />
        <div class="flex flex-col items-center justify-center min-h-screen px-6">
            <h1 class="text-6xl font-bold mb-4">"404"</h1>
            <p class="text-xl text-muted mb-8">"The page you're looking for doesn't exist."</p>
            <a href="/" class="btn-primary inline-flex items-center gap-2">
                "← Go Home"
            </a>
        </div>
    }
}
