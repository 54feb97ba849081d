//! Literal page content.
//!
//! Everything the page says lives here so the section components only deal
//! with markup and motion.

/// Brand name shown in the navbar, hero and footer.
pub const BRAND: &str = "Zeve Veylsn";

/// Document title assigned once by the hosting shell.
pub const PAGE_TITLE: &str = "Zeve Veylsn | Elegance Reimagined";

pub const HERO_TAGLINE: &str = "Elegance redefined. Power reborn.";

/// Content for one two-pane image section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelContent {
    pub image: &'static str,
    pub headline: &'static str,
    pub text: &'static str,
}

pub const STANDARD_PANEL: PanelContent = PanelContent {
    image: "/luxury1.jpg",
    headline: "The Zeve Standard",
    text: "Not just fashion. This is transformation — a revolt against the ordinary. \
           Gold-stamped elegance with razor-edge rebellion.",
};

pub const REBELLION_PANEL: PanelContent = PanelContent {
    image: "/luxury2.jpg",
    headline: "Unleash the Rebellion",
    text: "Zeve Veylsn dares to dominate runways and minds. \
           Crafted silhouettes for the chosen few who lead, not follow.",
};

/// Alt text shared by both panel images.
pub const PANEL_IMAGE_ALT: &str = "luxury";

pub const MANIFESTO_TITLE: &str = "The Zeve Manifesto";

/// Manifesto body as stanzas of lines; stanzas are separated by a blank line.
pub const MANIFESTO: &[&[&str]] = &[
    &[
        "We don’t follow trends. We spark revolutions.",
        "Zeve Veylsn exists for those who refuse to be average — the leaders, the visionaries, the beautifully untamed.",
        "This is not fashion. This is armor.",
        "For those who carry gold in their soul and fire in their step.",
    ],
    &["This is your new beginning.", "This is Zeve."],
];

pub const ABOUT_TITLE: &str = "About Zeve";

pub const ABOUT: &[&str] = &[
    "Founded at the intersection of raw ambition and refined taste, Zeve Veylsn is more than a label — it’s a legacy in motion.",
    "Born to redefine how elegance feels, our collections are designed to provoke presence, power, and prestige in every step.",
    "Every piece is a statement. Every release, a revelation.",
];

pub const TESTIMONIALS_TITLE: &str = "Whispers of Power";

pub const TESTIMONIALS: [&str; 3] = [
    "Wearing Zeve is like stepping into a new skin — bold, refined, unstoppable.",
    "People don’t just notice you. They remember you.",
    "Zeve is the only brand that matches the fire in me.",
];

pub const COPYRIGHT: &str = "© 2025 Zeve Veylsn. Elegance is power.";

/// Footer links as (label, href).
pub const FOOTER_LINKS: [(&str, &str); 3] = [
    ("Instagram", "#"),
    ("Contact", "#"),
    ("Careers", "#"),
];
