//! Visually hidden polite live region for screen-reader announcements.

use leptos::prelude::*;

use crate::consts::ANNOUNCER_ID;
use crate::state::announcer::Announcer;

/// Rendered once by `App`; `Announcer::announce` replaces its text.
#[component]
pub fn AnnouncerRegion() -> impl IntoView {
    let state = expect_context::<Announcer>().state();

    view! {
        <div id=ANNOUNCER_ID class="sr-only" aria-live="polite" aria-atomic="true">
            {move || state.with(|s| s.message.clone())}
        </div>
    }
}
