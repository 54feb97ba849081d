use leptos::prelude::*;

use crate::content::{COPYRIGHT, FOOTER_LINKS};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer" data-section="footer">
            <p class="footer-copyright">{COPYRIGHT}</p>
            <div class="footer-links">
                {FOOTER_LINKS
                    .iter()
                    .map(|&(label, href)| view! { <a href=href class="footer-link">{label}</a> })
                    .collect_view()}
            </div>
        </footer>
    }
}
