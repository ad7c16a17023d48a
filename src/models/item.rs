//! Carousel entries: gallery memories and tiered sponsor cards.

use std::fmt;

/// Sponsorship level shown on a sponsor card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SponsorTier {
    Platinum,
    Gold,
    Silver,
    Bronze,
}

impl SponsorTier {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Platinum => "Platinum",
            Self::Gold => "Gold",
            Self::Silver => "Silver",
            Self::Bronze => "Bronze",
        }
    }

    /// Accent colour family used when the card is highlighted.
    pub fn accent(&self) -> &'static str {
        match self {
            Self::Platinum => "slate",
            Self::Gold => "amber",
            Self::Silver => "gray",
            Self::Bronze => "orange",
        }
    }
}

impl fmt::Display for SponsorTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Category tag of a display item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Memory,
    Sponsor(SponsorTier),
}

impl Category {
    pub fn tier(&self) -> Option<SponsorTier> {
        match self {
            Self::Sponsor(tier) => Some(*tier),
            Self::Memory => None,
        }
    }
}

/// One entry of a carousel. Immutable for the lifetime of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: u32,
    pub title: String,
    pub image: String,
    pub description: String,
    pub category: Category,
    /// Secondary round image drawn over the corner of gallery cards.
    pub overlay_image: Option<String>,
}

impl Item {
    /// Create a new Item with just the essential display fields
    pub fn new(
        id: u32,
        title: impl Into<String>,
        image: impl Into<String>,
        description: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            image: image.into(),
            description: description.into(),
            category,
            overlay_image: None,
        }
    }

    pub fn with_overlay(mut self, image: impl Into<String>) -> Self {
        self.overlay_image = Some(image.into());
        self
    }

    /// Short label shown above a gallery card, e.g. "Memory 02".
    pub fn ordinal_label(&self, position: usize) -> String {
        match self.category {
            Category::Memory => format!("Memory {:02}", position + 1),
            Category::Sponsor(tier) => format!("{} Partner", tier),
        }
    }
}
