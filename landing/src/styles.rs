//! CSS for the landing page.
//!
//! The stylesheet is inlined into `<head>`, so the rendered document needs
//! nothing but its images to display correctly.
//!
//! # Customization
//!
//! ```rust
//! use binay_landing::styles::LANDING_CSS;
//!
//! let themed = format!("{}\n:root {{ --primary: #0f766e; }}", LANDING_CSS);
//! assert!(themed.ends_with("}"));
//! ```

/// Content-Security-Policy for the static page: inline styles only, no
/// scripts, images from this origin and the Play Store badge host.
pub const CSP: &str = "default-src 'self'; img-src 'self' https://play.google.com; style-src 'unsafe-inline'; script-src 'none'; base-uri 'none'; form-action 'none'";

/// Complete stylesheet for the page - light theme, neutral palette.
///
/// Layout follows the page structure:
/// - Sticky header with brand, anchor nav and outlined CTA
/// - Centered hero with badge, headline and CTA pair
/// - Four-column stats strip (two columns on small screens)
/// - Three-column feature cards
/// - Two-column benefits split
/// - Centered download card with star rating
/// - Four-column footer
pub const LANDING_CSS: &str = r#"
:root {
    --background: #ffffff;
    --foreground: #0a0a0a;
    --muted: #f5f5f5;
    --muted-foreground: #737373;
    --card: #ffffff;
    --card-foreground: #0a0a0a;
    --primary: #171717;
    --primary-soft: rgba(23, 23, 23, 0.1);
    --accent: #f5f5f5;
    --accent-foreground: #171717;
    --border: #e5e5e5;
    --radius: 10px;
    --container-max: 1200px;
    --font-sans: system-ui, -apple-system, Segoe UI, Roboto, sans-serif;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: auto;
}

body {
    margin: 0;
    min-height: 100vh;
    font-family: var(--font-sans);
    background: var(--background);
    color: var(--foreground);
    line-height: 1.5;
}

img {
    max-width: 100%;
    height: auto;
}

a {
    color: inherit;
    text-decoration: none;
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 16px;
}

.rounded {
    border-radius: var(--radius);
}

.rounded-xl {
    border-radius: 16px;
}

/* Buttons */
.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 8px;
    border-radius: var(--radius);
    font-weight: 500;
    font-size: 14px;
    transition: background 0.15s ease, color 0.15s ease;
}

.btn-md {
    height: 36px;
    padding: 0 16px;
}

.btn-lg {
    height: 44px;
    padding: 0 28px;
}

.btn-primary {
    background: var(--primary);
    color: var(--background);
}

.btn-outline {
    background: transparent;
    border: 1px solid var(--border);
    color: var(--foreground);
}

.btn-outline:hover {
    background: var(--accent);
}

.btn-icon {
    width: 20px;
    height: 20px;
}

/* Card */
.card {
    background: var(--card);
    color: var(--card-foreground);
    border: 1px solid var(--border);
    border-radius: calc(var(--radius) + 4px);
    padding: 32px;
}

/* Header */
.site-header {
    border-bottom: 1px solid var(--border);
}

.nav-inner {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding-top: 16px;
    padding-bottom: 16px;
}

.nav-brand {
    display: flex;
    align-items: center;
    gap: 8px;
}

.nav-title {
    font-size: 20px;
    font-weight: 600;
}

.nav-links {
    display: none;
    align-items: center;
    gap: 32px;
}

.nav-link {
    font-size: 14px;
    color: var(--muted-foreground);
    transition: color 0.15s ease;
}

.nav-link:hover {
    color: var(--foreground);
}

.nav-cta {
    display: none;
}

/* Hero */
.hero {
    padding: 96px 0;
}

.hero-content {
    max-width: 896px;
    margin: 0 auto;
    text-align: center;
}

.hero-logo {
    display: flex;
    justify-content: center;
    margin-bottom: 32px;
}

.hero-badge {
    display: inline-block;
    margin-bottom: 24px;
    padding: 8px 16px;
    border-radius: 999px;
    background: var(--accent);
    color: var(--accent-foreground);
    font-size: 14px;
}

.hero-title {
    font-size: 48px;
    font-weight: 700;
    line-height: 1.1;
    margin: 0 0 24px;
    text-wrap: balance;
}

.hero-description {
    font-size: 20px;
    color: var(--muted-foreground);
    max-width: 672px;
    margin: 0 auto 32px;
    line-height: 1.625;
    text-wrap: pretty;
}

.hero-actions,
.download-actions {
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    gap: 16px;
}

.hero-fine-print {
    margin-top: 24px;
    font-size: 14px;
    color: var(--muted-foreground);
}

.store-badge img {
    transition: opacity 0.15s ease;
}

.store-badge:hover img {
    opacity: 0.8;
}

/* Stats */
.stats {
    border-top: 1px solid var(--border);
    border-bottom: 1px solid var(--border);
}

.stats-grid {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 32px;
    padding-top: 64px;
    padding-bottom: 64px;
}

.stat {
    text-align: center;
}

.stat-value {
    font-size: 36px;
    font-weight: 700;
    margin-bottom: 8px;
}

.stat-label {
    font-size: 14px;
    color: var(--muted-foreground);
}

/* Sections */
.features,
.download {
    padding: 96px 0;
}

.section-header {
    text-align: center;
    margin-bottom: 64px;
}

.section-title {
    font-size: 36px;
    font-weight: 700;
    margin: 0 0 16px;
    text-wrap: balance;
}

.section-description {
    font-size: 18px;
    color: var(--muted-foreground);
    max-width: 672px;
    margin: 0 auto 32px;
    text-wrap: pretty;
}

.features-grid {
    display: grid;
    gap: 32px;
}

.feature-card {
    transition: box-shadow 0.15s ease;
}

.feature-card:hover {
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
}

.feature-icon {
    width: 48px;
    height: 48px;
    border-radius: var(--radius);
    background: var(--primary-soft);
    color: var(--primary);
    display: flex;
    align-items: center;
    justify-content: center;
    margin-bottom: 24px;
}

.feature-title {
    font-size: 24px;
    font-weight: 700;
    margin: 0 0 12px;
}

.feature-description {
    color: var(--muted-foreground);
    line-height: 1.625;
    margin: 0;
}

/* Benefits */
.benefits {
    background: rgba(245, 245, 245, 0.3);
    padding: 96px 0;
}

.benefits-grid {
    display: grid;
    gap: 64px;
    align-items: center;
}

.benefits-copy .section-description {
    margin-left: 0;
}

.benefit-list {
    list-style: none;
    padding: 0;
    margin: 0;
    display: flex;
    flex-direction: column;
    gap: 16px;
}

.benefit {
    display: flex;
    align-items: flex-start;
    gap: 12px;
}

.benefit-check {
    flex-shrink: 0;
    margin-top: 4px;
    color: var(--primary);
}

.benefit-title {
    font-weight: 600;
    margin-bottom: 4px;
}

.benefit-description {
    color: var(--muted-foreground);
}

.showcase-frame {
    aspect-ratio: 1 / 1;
    border-radius: var(--radius);
    background: linear-gradient(135deg, var(--primary-soft), var(--accent));
    display: flex;
    align-items: center;
    justify-content: center;
}

/* Download */
.download-card {
    padding: 48px;
    text-align: center;
}

.rating {
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 4px;
    margin-top: 24px;
    color: var(--primary);
}

.rating-label {
    margin-left: 8px;
    font-size: 14px;
    color: var(--muted-foreground);
}

/* Footer */
.footer {
    border-top: 1px solid var(--border);
    padding: 48px 0;
}

.footer-grid {
    display: grid;
    gap: 32px;
    margin-bottom: 32px;
}

.footer-brand-row {
    display: flex;
    align-items: center;
    gap: 8px;
    margin-bottom: 16px;
}

.footer-title,
.footer-group-title {
    font-weight: 600;
}

.footer-group-title {
    margin: 0 0 16px;
    font-size: 16px;
}

.footer-blurb,
.footer-links {
    font-size: 14px;
    color: var(--muted-foreground);
}

.footer-links {
    list-style: none;
    padding: 0;
    margin: 0;
    display: flex;
    flex-direction: column;
    gap: 8px;
}

.footer-link:hover {
    color: var(--foreground);
}

.footer-copyright {
    padding-top: 32px;
    margin: 0;
    border-top: 1px solid var(--border);
    text-align: center;
    font-size: 14px;
    color: var(--muted-foreground);
}

@media (min-width: 640px) {
    .hero-actions,
    .download-actions {
        flex-direction: row;
    }
}

@media (min-width: 768px) {
    .nav-links,
    .nav-cta {
        display: flex;
    }

    .hero {
        padding: 128px 0;
    }

    .hero-title {
        font-size: 72px;
    }

    .section-title {
        font-size: 48px;
    }

    .stats-grid {
        grid-template-columns: repeat(4, 1fr);
    }

    .features-grid {
        grid-template-columns: repeat(3, 1fr);
    }

    .benefits-grid {
        grid-template-columns: repeat(2, 1fr);
    }

    .download-card {
        padding: 64px;
    }

    .footer-grid {
        grid-template-columns: repeat(4, 1fr);
    }
}
"#;
