use leptos::prelude::*;

use super::line_breaks;
use crate::content::{MANIFESTO, MANIFESTO_TITLE};
use crate::motion::{Motion, VisualState};

const TITLE_MOTION: Motion = Motion::in_view(VisualState::hidden().offset_y(50)).duration(1000);
const BODY_MOTION: Motion = Motion::in_view(VisualState::hidden())
    .duration(1000)
    .delay(500);

#[component]
pub fn ManifestoSection() -> impl IntoView {
    let stanzas = MANIFESTO
        .iter()
        .enumerate()
        .map(|(i, stanza)| {
            view! {
                {(i > 0).then(|| view! { <br /><br /> })}
                {line_breaks(*stanza)}
            }
        })
        .collect_view();

    view! {
        <section class="manifesto" data-section="manifesto">
            <h2
                class="section-title manifesto-title"
                style=TITLE_MOTION.initial_style()
                data-motion=TITLE_MOTION.trigger_attr()
                data-motion-to=TITLE_MOTION.target_style()
                data-motion-delay=TITLE_MOTION.delay_attr()
            >
                {MANIFESTO_TITLE}
            </h2>
            <p
                class="manifesto-body"
                style=BODY_MOTION.initial_style()
                data-motion=BODY_MOTION.trigger_attr()
                data-motion-to=BODY_MOTION.target_style()
                data-motion-delay=BODY_MOTION.delay_attr()
            >
                {stanzas}
            </p>
        </section>
    }
}
