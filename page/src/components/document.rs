//! Root document component - the complete HTML page around the placeholder.

use super::PlaceholderPage;
use crate::PageOptions;
use crate::styles::page_stylesheet;
use leptos::prelude::*;

/// The complete HTML document
#[component]
pub fn PageDocument(options: PageOptions) -> impl IntoView {
    let PageOptions {
        title,
        lang,
        inline_styles,
    } = options;

    view! {
        <html lang=lang>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="color-scheme" content="light dark" />
                <title>{title}</title>
                {inline_styles.then(|| view! { <style>{page_stylesheet()}</style> })}
            </head>
            <body>
                <PlaceholderPage />
            </body>
        </html>
    }
}
