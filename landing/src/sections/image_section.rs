use leptos::prelude::*;

use crate::content::PANEL_IMAGE_ALT;
use crate::layout::{Pane, SplitLayout};
use crate::motion::{Motion, VisualState};

/// Image paired with a headline and body text.
///
/// `mirrored` puts the text pane first and makes it slide in from the
/// opposite side. Empty strings are rendered as empty elements.
#[component]
pub fn ImageSection(
    #[prop(into)] image: String,
    #[prop(into)] headline: String,
    #[prop(into)] text: String,
    #[prop(optional)] mirrored: bool,
) -> impl IntoView {
    let layout = SplitLayout::new(mirrored);
    let image_motion = Motion::in_view(VisualState::hidden().scaled(0.9)).duration(1000);
    let text_motion =
        Motion::in_view(VisualState::hidden().offset_x(layout.text_offset_x)).duration(1000);

    let panes = layout
        .panes
        .into_iter()
        .map(|pane| match pane {
            Pane::Image => view! {
                <img
                    class="pane pane-image"
                    data-pane=pane.as_str()
                    src=image.clone()
                    alt=PANEL_IMAGE_ALT
                    style=image_motion.initial_style()
                    data-motion=image_motion.trigger_attr()
                    data-motion-to=image_motion.target_style()
                    data-motion-delay=image_motion.delay_attr()
                />
            }
            .into_any(),
            Pane::Text => view! {
                <div
                    class="pane pane-text"
                    data-pane=pane.as_str()
                    style=text_motion.initial_style()
                    data-motion=text_motion.trigger_attr()
                    data-motion-to=text_motion.target_style()
                    data-motion-delay=text_motion.delay_attr()
                >
                    <h2 class="panel-headline">{headline.clone()}</h2>
                    <p class="panel-text">{text.clone()}</p>
                </div>
            }
            .into_any(),
        })
        .collect_view();

    view! {
        <section class=layout.class() data-section="image" data-mirrored=mirrored.to_string()>
            {panes}
        </section>
    }
}
