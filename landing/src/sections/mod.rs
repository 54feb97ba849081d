use leptos::prelude::*;

mod about;
mod footer;
mod hero;
mod image_section;
mod manifesto;
mod navbar;
mod testimonials;

pub use about::AboutSection;
pub use footer::Footer;
pub use hero::HeroSection;
pub use image_section::ImageSection;
pub use manifesto::ManifestoSection;
pub use navbar::Navbar;
pub use testimonials::TestimonialsSection;

/// Lines separated by `<br />`, without a trailing break.
fn line_breaks(lines: &'static [&'static str]) -> impl IntoView {
    let last = lines.len().saturating_sub(1);
    lines
        .iter()
        .enumerate()
        .map(move |(i, line)| {
            view! {
                {*line}
                {(i < last).then(|| view! { <br /> })}
            }
        })
        .collect_view()
}
