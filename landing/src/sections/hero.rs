use leptos::prelude::*;

use crate::content::{BRAND, HERO_TAGLINE};
use crate::motion::{Motion, VisualState};

const TITLE_MOTION: Motion = Motion::on_mount(VisualState::hidden().offset_y(-50)).duration(1000);

// Tagline waits for the title to land.
const TAGLINE_MOTION: Motion = Motion::on_mount(VisualState::hidden())
    .duration(1000)
    .delay(1000);

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section class="hero" data-section="hero">
            <h1
                class="hero-title"
                style=TITLE_MOTION.initial_style()
                data-motion=TITLE_MOTION.trigger_attr()
                data-motion-to=TITLE_MOTION.target_style()
                data-motion-delay=TITLE_MOTION.delay_attr()
            >
                {BRAND}
            </h1>
            <p
                class="hero-tagline"
                style=TAGLINE_MOTION.initial_style()
                data-motion=TAGLINE_MOTION.trigger_attr()
                data-motion-to=TAGLINE_MOTION.target_style()
                data-motion-delay=TAGLINE_MOTION.delay_attr()
            >
                {HERO_TAGLINE}
            </p>
        </section>
    }
}
