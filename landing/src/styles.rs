//! Stylesheet, playback script and CSP for the landing page.
//!
//! Black, white and gold. Display type uses the serif stack
//! (`Playfair Display`, `Cinzel`), body copy stays on the system sans stack.
//!
//! # Customization
//!
//! ```rust
//! use zeve_landing::styles::LANDING_CSS;
//!
//! let my_css = ".hero-title { letter-spacing: 0.1em; }";
//! let combined = format!("{}\n{}", LANDING_CSS, my_css);
//! assert!(combined.contains("--gold"));
//! ```

/// Complete CSS for the page.
///
/// Split sections stack on small screens with the image first and go
/// side by side from 768px, following DOM pane order.
pub const LANDING_CSS: &str = r#"
:root {
    --gold: #D4AF37;
    --black: #000000;
    --white: #ffffff;
    --white-80: rgba(255, 255, 255, 0.8);
    --white-70: rgba(255, 255, 255, 0.7);
    --white-50: rgba(255, 255, 255, 0.5);
    --white-10: rgba(255, 255, 255, 0.1);
    --white-5: rgba(255, 255, 255, 0.05);
    --font-serif: 'Playfair Display', 'Cinzel', Georgia, serif;
    --font-sans: ui-sans-serif, system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
}

*, *::before, *::after { box-sizing: border-box; }

html, body {
    margin: 0;
    padding: 0;
    background: var(--black);
    color: var(--white);
    font-family: var(--font-sans);
}

.page {
    background: var(--black);
    color: var(--white);
    overflow-x: hidden;
}

/* Navbar */
.navbar {
    position: fixed;
    top: 0;
    left: 0;
    width: 100%;
    z-index: 50;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 1rem 2rem;
    background: rgba(0, 0, 0, 0.7);
    backdrop-filter: blur(12px);
    -webkit-backdrop-filter: blur(12px);
    border-bottom: 1px solid var(--white-10);
}

.navbar-brand {
    margin: 0;
    font-family: var(--font-serif);
    font-size: 1.5rem;
    font-weight: 400;
    text-transform: uppercase;
    letter-spacing: 0.35em;
    color: var(--gold);
}

.navbar-brand:hover { text-decoration: underline; }

/* Hero */
.hero {
    min-height: 100vh;
    display: flex;
    flex-direction: column;
    justify-content: center;
    align-items: center;
    text-align: center;
    padding: 8rem 1.5rem 0;
}

.hero-title {
    margin: 0;
    font-family: var(--font-serif);
    font-size: 3.75rem;
    font-weight: 400;
    letter-spacing: 0.025em;
    color: var(--gold);
}

.hero-tagline {
    margin: 1.5rem 0 0;
    max-width: 42rem;
    font-size: 1.25rem;
    color: var(--white-70);
}

/* Shared */
.section-title {
    margin: 0 0 1.5rem;
    font-family: var(--font-serif);
    font-size: 2.25rem;
    font-weight: 400;
    color: var(--gold);
}

/* Image sections */
.image-section {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 3rem;
    padding: 8rem 1.5rem;
}

.image-section .pane-image { order: -1; }

.pane-image {
    width: 100%;
    border-radius: 1.5rem;
    object-fit: cover;
    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.6);
}

.panel-headline {
    margin: 0 0 1.5rem;
    font-family: var(--font-serif);
    font-size: 2.25rem;
    font-weight: 400;
    color: var(--gold);
}

.panel-text {
    margin: 0;
    max-width: 36rem;
    font-size: 1.125rem;
    line-height: 1.625;
    color: var(--white-80);
}

/* Manifesto */
.manifesto {
    padding: 8rem 1.5rem;
    text-align: center;
}

.manifesto-title { margin-bottom: 2rem; }

.manifesto-body {
    max-width: 48rem;
    margin: 0 auto;
    font-size: 1.125rem;
    line-height: 1.625;
    color: var(--white-70);
}

/* About */
.about {
    display: flex;
    flex-direction: column;
    align-items: center;
    padding: 8rem 1.5rem;
}

.about-body {
    max-width: 42rem;
    margin: 0;
    text-align: center;
    font-size: 1.125rem;
    line-height: 2;
    color: var(--white-70);
}

/* Testimonials */
.testimonials {
    padding: 8rem 1.5rem;
    text-align: center;
}

.testimonials-title { margin-bottom: 2.5rem; }

.testimonials-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 3rem;
    max-width: 64rem;
    margin: 0 auto;
}

.testimonial {
    margin: 0;
    padding: 1.5rem;
    border-radius: 1rem;
    background: var(--white-5);
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.4);
    color: var(--white-80);
    font-style: italic;
}

/* Footer */
.footer {
    padding: 4rem 0;
    text-align: center;
    font-size: 0.875rem;
    border-top: 1px solid var(--white-10);
}

.footer-copyright {
    margin: 0;
    color: var(--white-50);
}

.footer-links {
    margin-top: 1rem;
    display: flex;
    justify-content: center;
    gap: 1.5rem;
}

.footer-link {
    color: var(--gold);
    text-decoration: none;
}

.footer-link:hover { text-decoration: underline; }

@media (min-width: 768px) {
    .navbar-brand { font-size: 1.875rem; }
    .hero-title { font-size: 6rem; }
    .hero-tagline { font-size: 1.5rem; }
    .manifesto .section-title { font-size: 3rem; }

    .image-section { flex-direction: row; }
    .image-section .pane-image { order: 0; }
    .pane-image, .pane-text { width: 50%; }

    .testimonials-grid { grid-template-columns: repeat(3, 1fr); }
}

@media (prefers-reduced-motion: reduce) {
    [data-motion] { transition: none !important; }
}
"#;

/// Motion playback for the static export.
///
/// Mirrors the browser build's `playback` module: mount triggers reveal after
/// two animation frames, in-view triggers reveal on enter and conceal on
/// leave.
pub const MOTION_SCRIPT: &str = r#"
(function () {
    const reveal = (el) => el.setAttribute('style', el.dataset.motionTo);
    const conceal = (el) => el.setAttribute('style', el.dataset.motionFrom);

    const init = () => {
        const observer = 'IntersectionObserver' in window
            ? new IntersectionObserver((entries) => {
                entries.forEach((entry) => {
                    if (entry.isIntersecting) {
                        reveal(entry.target);
                    } else {
                        conceal(entry.target);
                    }
                });
            }, { threshold: 0.1 })
            : null;

        const mounted = [];
        document.querySelectorAll('[data-motion]').forEach((el) => {
            el.dataset.motionFrom = el.getAttribute('style') || '';
            if (el.dataset.motion === 'in-view' && observer) {
                observer.observe(el);
            } else {
                mounted.push(el);
            }
        });

        requestAnimationFrame(() => requestAnimationFrame(() => mounted.forEach(reveal)));
    };

    if (document.readyState === 'loading') {
        document.addEventListener('DOMContentLoaded', init);
    } else {
        init();
    }
})();
"#;

/// Content security policy for the exported page: same-origin images, inline
/// style and script only, no outbound connections.
pub const CSP: &str = "default-src 'self'; img-src 'self' data:; style-src 'self' 'unsafe-inline'; script-src 'self' 'unsafe-inline'; connect-src 'none'; font-src 'self' data:;";
