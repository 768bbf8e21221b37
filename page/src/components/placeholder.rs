//! The placeholder view itself.

use crate::content::{BODY_LINES, HEADING, LINK_HREF, LINK_LABEL, LINK_REL, LINK_TARGET};
use crate::styles;
use leptos::prelude::*;

/// Centered heading, two lines of copy and an outbound link.
///
/// Takes no props and reads no state, so every render yields the same tree.
#[component]
pub fn PlaceholderPage() -> impl IntoView {
    view! {
        <div class=styles::CONTAINER.class_name()>
            <h1 class=styles::HEADING.class_name()>{HEADING}</h1>
            <p class=styles::PARAGRAPH.class_name()>
                {BODY_LINES[0]}
                <br />
                {BODY_LINES[1]}
            </p>
            <div class=styles::ACTIONS.class_name()>
                <a
                    href=LINK_HREF
                    target=LINK_TARGET
                    rel=LINK_REL
                    class=styles::LINK.class_name()
                >
                    {LINK_LABEL}
                </a>
            </div>
        </div>
    }
}
