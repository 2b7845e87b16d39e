//! Landing page sections, one component per content region.
//!
//! [`crate::document::LandingDocument`] places them in this order:
//! header, hero, stats, features, benefits, download, footer.

mod benefits;
mod download;
mod features;
mod footer;
mod header;
mod hero;
mod stats;

pub use benefits::BenefitsSplit;
pub use download::DownloadCta;
pub use features::FeaturesGrid;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use stats::StatsStrip;
