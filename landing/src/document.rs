//! Root document component - the complete pre-rendered HTML page.

use crate::content::PAGE_TITLE;
use crate::pages::Home;
use crate::styles::{CSP, LANDING_CSS, MOTION_SCRIPT};
use leptos::prelude::*;

/// The complete HTML document for the static export.
///
/// The title is part of the markup, so a pre-rendered page carries it from
/// the first byte and never assigns it again.
#[component]
pub fn LandingDocument() -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <title>{PAGE_TITLE}</title>
                <style>{LANDING_CSS}</style>
            </head>
            <body>
                <Home />
                <script>{MOTION_SCRIPT}</script>
            </body>
        </html>
    }
}
