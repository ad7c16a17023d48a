//! Static festival content shown by the page sections.

use once_cell::sync::Lazy;

use super::item::{Category, Item, SponsorTier};

pub static MEMORIES: Lazy<Vec<Item>> = Lazy::new(|| {
    vec![
        Item::new(
            1,
            "Opening Ceremony",
            "https://images.unsplash.com/photo-1540575467063-178a50c2df87?w=800&q=80",
            "The grand beginning of ZION 2025",
            Category::Memory,
        )
        .with_overlay("https://images.unsplash.com/photo-1511632765486-a01980e01a18?w=400&q=80"),
        Item::new(
            2,
            "Night Concert",
            "https://images.unsplash.com/photo-1470229722913-7c0e2dbbafd3?w=800&q=80",
            "Unforgettable musical performances",
            Category::Memory,
        )
        .with_overlay("https://images.unsplash.com/photo-1523580494863-6f3031224c94?w=400&q=80"),
        Item::new(
            3,
            "Hackathon Arena",
            "https://images.unsplash.com/photo-1504384308090-c894fdcc538d?w=800&q=80",
            "Coding challenges and innovation",
            Category::Memory,
        )
        .with_overlay("https://images.unsplash.com/photo-1514525253161-7a46d19cd819?w=400&q=80"),
    ]
});

pub static SPONSORS: Lazy<Vec<Item>> = Lazy::new(|| {
    let sponsor = |id: u32, name: &str, tier: SponsorTier, description: &str| {
        Item::new(id, name, "", description, Category::Sponsor(tier))
    };
    vec![
        sponsor(
            1,
            "TechCorp Industries",
            SponsorTier::Platinum,
            "Leading technology solutions provider empowering innovation",
        ),
        sponsor(
            2,
            "InnovateLabs",
            SponsorTier::Platinum,
            "Pioneering research and development in AI and robotics",
        ),
        sponsor(
            3,
            "CloudNine Systems",
            SponsorTier::Gold,
            "Cloud infrastructure and digital transformation experts",
        ),
        sponsor(
            4,
            "DataFlow Analytics",
            SponsorTier::Gold,
            "Big data analytics and business intelligence solutions",
        ),
        sponsor(
            5,
            "CyberShield Security",
            SponsorTier::Silver,
            "Enterprise cybersecurity and threat protection",
        ),
        sponsor(
            6,
            "CodeCraft Studios",
            SponsorTier::Silver,
            "Software development and digital experience design",
        ),
        sponsor(
            7,
            "FutureTech Solutions",
            SponsorTier::Bronze,
            "Emerging technology consulting and implementation",
        ),
        sponsor(
            8,
            "DevOps Masters",
            SponsorTier::Bronze,
            "CI/CD pipeline automation and infrastructure management",
        ),
    ]
});
