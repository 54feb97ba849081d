use leptos::prelude::*;

use super::line_breaks;
use crate::content::{ABOUT, ABOUT_TITLE};

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section class="about" data-section="about">
            <h2 class="section-title">{ABOUT_TITLE}</h2>
            <p class="about-body">{line_breaks(ABOUT)}</p>
        </section>
    }
}
