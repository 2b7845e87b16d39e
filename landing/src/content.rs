//! Static content model for the landing page.
//!
//! Every record here is authored at build time and never mutated. Sequences
//! are fixed-size arrays, so the number of stats, features, benefits and
//! footer groups is part of the type, and display order is array order.
//!
//! The one content set the page renders is [`CONTENT`].
//!
//! ```rust
//! use binay_landing::content::CONTENT;
//!
//! assert_eq!(CONTENT.brand.name, "Binay Tech");
//! assert_eq!(CONTENT.stats.len(), 4);
//! ```

use serde::Serialize;

/// Play Store listing for the app. Every outbound CTA points here.
pub const STORE_URL: &str = "https://play.google.com/store/apps/details?id=com.binaytech.app";

/// Locally hosted app icon, reused at several sizes.
pub const ICON_SRC: &str = "/assets/construction-icon.webp";

/// Remotely hosted "Get it on Google Play" badge.
pub const STORE_BADGE_SRC: &str =
    "https://play.google.com/intl/en_us/badges/static/images/badges/en_badge_web_generic.png";

/// An image reference with fixed intrinsic dimensions and alt text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImageRef {
    pub src: &'static str,
    pub alt: &'static str,
    pub width: u32,
    pub height: u32,
}

/// A link that leaves the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExternalLink {
    pub url: &'static str,
    /// Open in a new browsing context (with `noopener noreferrer`).
    pub new_tab: bool,
}

/// An in-page link to a section identifier (without the leading `#`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnchorLink {
    pub label: &'static str,
    pub target: &'static str,
}

impl AnchorLink {
    /// The `href` value, e.g. `#features`.
    pub fn href(&self) -> String {
        format!("#{}", self.target)
    }
}

/// Brand name and logo, reused in header, hero and footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BrandIdentity {
    pub name: &'static str,
    /// Logo source; each placement supplies its own size and alt text.
    pub logo_src: &'static str,
}

impl BrandIdentity {
    /// The logo as a square image of `size` pixels.
    pub const fn logo(&self, alt: &'static str, size: u32) -> ImageRef {
        ImageRef {
            src: self.logo_src,
            alt,
            width: size,
            height: size,
        }
    }
}

/// Header: brand, nav anchors and the outbound "Get Started" CTA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeaderContent {
    pub nav: [AnchorLink; 3],
    pub cta_label: &'static str,
    pub cta: ExternalLink,
}

/// The top-of-page banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeroContent {
    pub logo: ImageRef,
    pub eyebrow: &'static str,
    pub headline: &'static str,
    pub subheadline: &'static str,
    /// Store badge link.
    pub primary_cta: ExternalLink,
    /// "Learn More" jump into the page.
    pub secondary_cta: AnchorLink,
    pub fine_print: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatItem {
    pub value: &'static str,
    pub description: &'static str,
}

/// Icon shown on a feature card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureIcon {
    Lightning,
    Mobile,
    Users,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureItem {
    pub icon: FeatureIcon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BenefitItem {
    pub title: &'static str,
    pub description: &'static str,
}

/// Heading and lead paragraph shared by the content sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionIntro {
    /// Section identifier used as an anchor target.
    pub id: &'static str,
    pub title: &'static str,
    pub lead: &'static str,
}

/// Static star rating shown under the download CTA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rating {
    pub value: &'static str,
    pub out_of: usize,
}

impl Rating {
    /// Human-readable label, e.g. `4.8 out of 5 stars`.
    pub fn label(&self) -> String {
        format!("{} out of {} stars", self.value, self.out_of)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FooterLinkGroup {
    pub title: &'static str,
    pub links: [FooterLink; 3],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FooterContent {
    pub blurb: &'static str,
    pub groups: [FooterLinkGroup; 3],
    pub copyright: &'static str,
}

/// The complete content set of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LandingContent {
    pub brand: BrandIdentity,
    /// Store listing behind every outbound CTA.
    pub store: ExternalLink,
    pub header: HeaderContent,
    pub hero: HeroContent,
    pub store_badge: ImageRef,
    pub stats: [StatItem; 4],
    pub features_intro: SectionIntro,
    pub features: [FeatureItem; 3],
    pub benefits_intro: SectionIntro,
    pub benefits: [BenefitItem; 3],
    /// App image shown beside the benefit list.
    pub showcase: ImageRef,
    pub download_intro: SectionIntro,
    pub rating: Rating,
    pub footer: FooterContent,
}

const STORE: ExternalLink = ExternalLink {
    url: STORE_URL,
    new_tab: true,
};

const fn footer_link(label: &'static str) -> FooterLink {
    FooterLink { label, href: "#" }
}

pub const CONTENT: LandingContent = LandingContent {
    brand: BrandIdentity {
        name: "Binay Tech",
        logo_src: ICON_SRC,
    },
    store: STORE,
    header: HeaderContent {
        nav: [
            AnchorLink {
                label: "Features",
                target: "features",
            },
            AnchorLink {
                label: "Benefits",
                target: "benefits",
            },
            AnchorLink {
                label: "Download",
                target: "download",
            },
        ],
        cta_label: "Get Started",
        cta: STORE,
    },
    hero: HeroContent {
        logo: ImageRef {
            src: ICON_SRC,
            alt: "Binay Tech Construction",
            width: 120,
            height: 120,
        },
        eyebrow: "Now Available on Android",
        headline: "The Complete Platform for Your Mobile Needs",
        subheadline: "Experience the power of modern technology with Binay Tech. Build, deploy, and scale your digital presence with our innovative mobile application.",
        primary_cta: STORE,
        secondary_cta: AnchorLink {
            label: "Learn More",
            target: "features",
        },
        fine_print: "Free to download. No credit card required.",
    },
    store_badge: ImageRef {
        src: STORE_BADGE_SRC,
        alt: "Get it on Google Play",
        width: 200,
        height: 60,
    },
    stats: [
        StatItem {
            value: "50K+",
            description: "Active Users",
        },
        StatItem {
            value: "98%",
            description: "Satisfaction Rate",
        },
        StatItem {
            value: "4.8★",
            description: "App Store Rating",
        },
        StatItem {
            value: "24/7",
            description: "Support Available",
        },
    ],
    features_intro: SectionIntro {
        id: "features",
        title: "Everything You Need in One Place",
        lead: "Powerful features designed to streamline your workflow and enhance productivity.",
    },
    features: [
        FeatureItem {
            icon: FeatureIcon::Lightning,
            title: "Lightning Fast",
            description: "Optimized performance ensures smooth operation and instant response times for all your tasks.",
        },
        FeatureItem {
            icon: FeatureIcon::Mobile,
            title: "Mobile First",
            description: "Built from the ground up for mobile devices, providing the best possible experience on any screen.",
        },
        FeatureItem {
            icon: FeatureIcon::Users,
            title: "Team Collaboration",
            description: "Work together seamlessly with powerful collaboration tools designed for modern teams.",
        },
    ],
    benefits_intro: SectionIntro {
        id: "benefits",
        title: "Built for Innovation and Growth",
        lead: "Transform the way you work with cutting-edge technology that adapts to your needs.",
    },
    benefits: [
        BenefitItem {
            title: "Seamless Integration",
            description: "Connect with your favorite tools and services effortlessly.",
        },
        BenefitItem {
            title: "Advanced Security",
            description: "Enterprise-grade security to keep your data safe and protected.",
        },
        BenefitItem {
            title: "Regular Updates",
            description: "Continuous improvements and new features delivered regularly.",
        },
    ],
    showcase: ImageRef {
        src: ICON_SRC,
        alt: "Binay Tech App",
        width: 300,
        height: 300,
    },
    download_intro: SectionIntro {
        id: "download",
        title: "Ready to Get Started?",
        lead: "Join thousands of users who are already experiencing the future of mobile technology.",
    },
    rating: Rating {
        value: "4.8",
        out_of: 5,
    },
    footer: FooterContent {
        blurb: "Building the future of mobile technology.",
        groups: [
            FooterLinkGroup {
                title: "Product",
                links: [
                    footer_link("Features"),
                    footer_link("Pricing"),
                    footer_link("Updates"),
                ],
            },
            FooterLinkGroup {
                title: "Company",
                links: [
                    footer_link("About"),
                    footer_link("Blog"),
                    footer_link("Contact"),
                ],
            },
            FooterLinkGroup {
                title: "Legal",
                links: [
                    footer_link("Privacy"),
                    footer_link("Terms"),
                    footer_link("Security"),
                ],
            },
        ],
        copyright: "© 2025 Binay Tech. All rights reserved.",
    },
};
