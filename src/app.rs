//! Root application component and page shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{announcer_region::AnnouncerRegion, toast_host::ToastHost};
use crate::config::UiConfig;
use crate::pages::upload::UploadPage;
use crate::state::{announcer::Announcer, notifier::Notifier};

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
///
/// Owns the page singletons: one `Notifier` with its `ToastHost` container
/// and one `Announcer` with its live region. Children reach them through
/// context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = UiConfig::default();
    let notifier = Notifier::new(&config);
    let announcer = Announcer::new();

    provide_context(config);
    provide_context(notifier);
    provide_context(announcer);

    view! {
        <Stylesheet id="leptos" href="/pkg/studysync-ui.css"/>
        <Title text="StudySync"/>

        <Router>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=UploadPage/>
                    <Route path=StaticSegment("upload") view=UploadPage/>
                </Routes>
            </main>
        </Router>

        <ToastHost/>
        <AnnouncerRegion/>
    }
}
