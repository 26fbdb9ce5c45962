use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Industry niches offered by the niche selector, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    #[serde(rename = "E-Commerce")]
    ECommerce,
    Marketing,
    Sales,
    Coaching,
    #[serde(rename = "Real-Estate")]
    RealEstate,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category: {0:?}")]
pub struct ParseCategoryError(pub String);

impl Category {
    pub const ALL: [Category; 5] = [
        Category::ECommerce,
        Category::Marketing,
        Category::Sales,
        Category::Coaching,
        Category::RealEstate,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// Zero-based position of the category in the selector track.
    pub const fn index(self) -> usize {
        match self {
            Self::ECommerce => 0,
            Self::Marketing => 1,
            Self::Sales => 2,
            Self::Coaching => 3,
            Self::RealEstate => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ECommerce => "E-Commerce",
            Self::Marketing => "Marketing",
            Self::Sales => "Sales",
            Self::Coaching => "Coaching",
            Self::RealEstate => "Real-Estate",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

/// Icon shown at the top of a content card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardIcon {
    ShoppingCart,
    Users,
    TrendingUp,
    Megaphone,
    Home,
}

/// A feature card displayed under the selected niche.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentCard {
    pub icon: CardIcon,
    pub title: String,
    pub description: String,
}
