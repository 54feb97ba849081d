//! Rendering contract of the landing page, checked on server-rendered HTML.

#![cfg(feature = "ssr")]

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use pretty_assertions::assert_eq;

use zeve_landing::content::{
    ABOUT, COPYRIGHT, FOOTER_LINKS, PAGE_TITLE, REBELLION_PANEL, STANDARD_PANEL, TESTIMONIALS,
};
use zeve_landing::motion::STAGGER_STEP_MS;
use zeve_landing::pages::Home;
use zeve_landing::render_page;
use zeve_landing::sections::{
    AboutSection, Footer, HeroSection, ImageSection, ManifestoSection, Navbar, TestimonialsSection,
};

const SECTION_MARK: &str = "data-section=\"";

/// Section markers in document order.
fn section_order(html: &str) -> Vec<&str> {
    let mut order = Vec::new();
    let mut rest = html;
    while let Some(start) = rest.find(SECTION_MARK) {
        let tail = &rest[start + SECTION_MARK.len()..];
        let end = tail.find('"').unwrap();
        order.push(&tail[..end]);
        rest = &tail[end..];
    }
    order
}

/// HTML of each `data-section="image"` block, up to the next section.
fn image_sections(html: &str) -> Vec<&str> {
    let marker = "data-section=\"image\"";
    let mut blocks = Vec::new();
    let mut rest = html;
    while let Some(start) = rest.find(marker) {
        let tail = &rest[start..];
        let end = tail.find("</section>").unwrap();
        blocks.push(&tail[..end]);
        rest = &tail[end..];
    }
    blocks
}

/// Values of every `data-motion` attribute in order.
fn triggers(html: &str) -> Vec<&str> {
    let marker = "data-motion=\"";
    html.match_indices(marker)
        .map(|(idx, _)| {
            let tail = &html[idx + marker.len()..];
            &tail[..tail.find('"').unwrap()]
        })
        .collect()
}

fn pane_order(block: &str) -> (usize, usize) {
    let image = block.find("data-pane=\"image\"").unwrap();
    let text = block.find("data-pane=\"text\"").unwrap();
    (image, text)
}

/// Values of every `data-motion-delay` attribute in order.
fn delays(html: &str) -> Vec<u32> {
    let marker = "data-motion-delay=\"";
    html.match_indices(marker)
        .map(|(idx, _)| {
            let tail = &html[idx + marker.len()..];
            tail[..tail.find('"').unwrap()].parse().unwrap()
        })
        .collect()
}

#[test]
fn home_renders_sections_in_fixed_order() {
    let html = view! { <Home /> }.to_html();

    assert_eq!(
        section_order(&html),
        vec![
            "navbar",
            "hero",
            "image",
            "image",
            "manifesto",
            "about",
            "testimonials",
            "footer",
        ]
    );
}

#[test]
fn only_second_image_section_is_mirrored() {
    let html = view! { <Home /> }.to_html();
    let blocks = image_sections(&html);
    assert_eq!(blocks.len(), 2);

    assert!(blocks[0].contains("data-mirrored=\"false\""));
    assert!(blocks[1].contains("data-mirrored=\"true\""));
    assert!(blocks[0].contains(STANDARD_PANEL.image));
    assert!(blocks[1].contains(REBELLION_PANEL.image));

    let (image, text) = pane_order(blocks[0]);
    assert!(image < text, "first section shows the image first");
    let (image, text) = pane_order(blocks[1]);
    assert!(text < image, "mirrored section shows the text first");
}

#[test]
fn mirrored_text_slides_from_the_other_side() {
    let html = view! { <Home /> }.to_html();
    let blocks = image_sections(&html);

    assert!(blocks[0].contains("translate(50px,0px)"));
    assert!(blocks[1].contains("translate(-50px,0px)"));
}

#[test]
fn testimonials_render_three_staggered_quotes() {
    let html = view! { <TestimonialsSection /> }.to_html();

    assert_eq!(html.matches("<blockquote").count(), 3);

    let positions: Vec<usize> = TESTIMONIALS
        .iter()
        .map(|quote| html.find(quote).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));

    let expected: Vec<u32> = (0..3).map(|i| i * STAGGER_STEP_MS).collect();
    assert_eq!(delays(&html), expected);
}

#[test]
fn page_title_rendered_once() {
    let html = render_page();
    assert_eq!(html.matches("<title>").count(), 1);
    assert!(html.contains(&format!("<title>{PAGE_TITLE}</title>")));
}

#[test]
fn empty_image_section_keeps_its_structure() {
    let html = view! { <ImageSection image="" headline="" text="" /> }.to_html();

    assert!(html.contains("data-section=\"image\""));
    assert!(html.contains("data-pane=\"image\""));
    assert!(html.contains("data-pane=\"text\""));
    assert!(html.contains("<h2 class=\"panel-headline\">"));
    assert!(html.contains("<p class=\"panel-text\">"));
}

#[test]
fn rendered_page_has_no_side_channels() {
    let html = render_page();

    for needle in [
        "<script src",
        "<link",
        "fetch(",
        "XMLHttpRequest",
        "sendBeacon",
        "localStorage",
        "sessionStorage",
        "console.",
    ] {
        assert!(!html.contains(needle), "page contains {needle}");
    }
}

#[test]
fn every_animated_element_has_a_target() {
    let html = render_page();
    let triggers = html.matches("data-motion=\"").count();
    let targets = html.matches("data-motion-to=\"").count();

    // navbar 1, hero 2, image sections 2 x 2, manifesto 2, testimonials 3
    assert_eq!(triggers, 12);
    assert_eq!(triggers, targets);
    assert_eq!(html.matches("data-motion=\"mount\"").count(), 3);
}

#[test]
fn navbar_brand_drops_in_on_mount() {
    let html = view! { <Navbar /> }.to_html();

    assert_eq!(triggers(&html), vec!["mount"]);
    assert_eq!(delays(&html), vec![0]);
    assert!(html.contains("opacity:0;transform:translate(0px,-20px) scale(1)"));
    assert!(html.contains("1000ms ease-out 0ms"));
}

#[test]
fn hero_tagline_waits_for_title() {
    let html = view! { <HeroSection /> }.to_html();

    assert_eq!(triggers(&html), vec!["mount", "mount"]);
    assert_eq!(delays(&html), vec![0, 1000]);
    assert!(html.contains("translate(0px,-50px)"));
    assert!(html.contains("1000ms ease-out 1000ms"));
}

#[test]
fn manifesto_reveals_in_view() {
    let html = view! { <ManifestoSection /> }.to_html();

    assert_eq!(triggers(&html), vec!["in-view", "in-view"]);
    assert_eq!(delays(&html), vec![0, 500]);
    assert!(html.contains("translate(0px,50px)"));
    assert!(html.contains("1000ms ease-out 500ms"));
}

#[test]
fn manifesto_keeps_stanza_break() {
    let html = view! { <ManifestoSection /> }.to_html();

    assert!(html.contains("step.<br><br>This is your new beginning."));
    assert!(html.contains("This is your new beginning.<br>This is Zeve."));
    assert!(!html.contains("This is Zeve.<br>"));
}

#[test]
fn about_renders_every_line_without_motion() {
    let html = view! { <AboutSection /> }.to_html();

    for line in ABOUT {
        assert!(html.contains(line), "missing about line: {line}");
    }
    assert_eq!(html.matches("<br>").count(), ABOUT.len() - 1);
    assert!(triggers(&html).is_empty());
}

#[test]
fn footer_lists_copyright_and_links_in_order() {
    let html = view! { <Footer /> }.to_html();

    assert!(html.contains(COPYRIGHT));
    let positions: Vec<usize> = FOOTER_LINKS
        .iter()
        .map(|(label, _)| html.find(&format!(">{label}</a>")).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(html.matches("class=\"footer-link\"").count(), 3);
    assert!(triggers(&html).is_empty());
}
