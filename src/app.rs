//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::LoginConfig;
use crate::pages::admin_login::AdminLoginPage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(LoginConfig::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/admin-login.css"/>
        <Title text="Admin Login"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=(StaticSegment("admin"), StaticSegment("login")) view=AdminLoginPage/>
            </Routes>
        </Router>
    }
}
