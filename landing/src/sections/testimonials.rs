use leptos::prelude::*;

use crate::content::{TESTIMONIALS, TESTIMONIALS_TITLE};
use crate::motion::{Motion, VisualState};

const QUOTE_MOTION: Motion = Motion::in_view(VisualState::hidden().offset_y(30));

/// Quotes reveal one after another, [`crate::motion::STAGGER_STEP_MS`] apart.
#[component]
pub fn TestimonialsSection() -> impl IntoView {
    let quotes = TESTIMONIALS
        .iter()
        .enumerate()
        .map(|(i, quote)| {
            let motion = QUOTE_MOTION.staggered(i);
            view! {
                <blockquote
                    class="testimonial"
                    data-index=i.to_string()
                    style=motion.initial_style()
                    data-motion=motion.trigger_attr()
                    data-motion-to=motion.target_style()
                    data-motion-delay=motion.delay_attr()
                >
                    {format!("“{quote}”")}
                </blockquote>
            }
        })
        .collect_view();

    view! {
        <section class="testimonials" data-section="testimonials">
            <h2 class="section-title testimonials-title">{TESTIMONIALS_TITLE}</h2>
            <div class="testimonials-grid">{quotes}</div>
        </section>
    }
}
