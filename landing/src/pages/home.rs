// Home page - every section in fixed order
use crate::content::{REBELLION_PANEL, STANDARD_PANEL};
use crate::sections::{
    AboutSection, Footer, HeroSection, ImageSection, ManifestoSection, Navbar,
    TestimonialsSection,
};
use leptos::prelude::*;

/// Composition root of the landing page.
///
/// Rendering is pure. The document title is assigned by the hosting shell
/// through [`crate::title::TitleOnce`].
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <main class="page">
            <Navbar />
            <HeroSection />
            <ImageSection
                image=STANDARD_PANEL.image
                headline=STANDARD_PANEL.headline
                text=STANDARD_PANEL.text
            />
            <ImageSection
                image=REBELLION_PANEL.image
                headline=REBELLION_PANEL.headline
                text=REBELLION_PANEL.text
                mirrored=true
            />
            <ManifestoSection />
            <AboutSection />
            <TestimonialsSection />
            <Footer />
        </main>
    }
}
