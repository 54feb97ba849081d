use leptos::prelude::*;

use crate::content::BRAND;
use crate::motion::{Motion, VisualState};

const BRAND_MOTION: Motion = Motion::on_mount(VisualState::hidden().offset_y(-20)).duration(1000);

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <header class="navbar" data-section="navbar">
            <h1
                class="navbar-brand"
                style=BRAND_MOTION.initial_style()
                data-motion=BRAND_MOTION.trigger_attr()
                data-motion-to=BRAND_MOTION.target_style()
                data-motion-delay=BRAND_MOTION.delay_attr()
            >
                {BRAND}
            </h1>
        </header>
    }
}
