//! Support center content and FAQ search

pub mod content;
pub mod faq;

pub use content::{ContactOption, Resource, ResourceDetail, SupportCategory};
pub use faq::{filter_faqs, results_summary, search, FAQS};

use crate::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaqCategory {
    Setup,
    Troubleshooting,
    Features,
    Technical,
}

impl FaqCategory {
    pub const ALL: [FaqCategory; 4] = [
        FaqCategory::Setup,
        FaqCategory::Troubleshooting,
        FaqCategory::Features,
        FaqCategory::Technical,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            FaqCategory::Setup => "setup",
            FaqCategory::Troubleshooting => "troubleshooting",
            FaqCategory::Features => "features",
            FaqCategory::Technical => "technical",
        }
    }
}

impl fmt::Display for FaqCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Category selection on the support page; `All` disables the category check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(FaqCategory),
}

impl CategoryFilter {
    pub fn id(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.id(),
        }
    }

    pub fn matches(&self, category: FaqCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        let tag = s.trim().to_lowercase();
        if tag == "all" {
            return Ok(CategoryFilter::All);
        }
        FaqCategory::ALL
            .into_iter()
            .find(|c| c.id() == tag)
            .map(CategoryFilter::Only)
            .ok_or_else(|| CoreError::UnknownCategory(s.to_string()))
    }
}

/// A compiled-in question and answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    pub category: FaqCategory,
    pub question: &'static str,
    pub answer: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category_filter() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            " Setup ".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(FaqCategory::Setup)
        );
        assert_eq!(
            "billing".parse::<CategoryFilter>(),
            Err(CoreError::UnknownCategory("billing".to_string()))
        );
    }

    #[test]
    fn test_filter_ids_round_trip() {
        for category in FaqCategory::ALL {
            let filter = CategoryFilter::Only(category);
            assert_eq!(filter.id().parse::<CategoryFilter>().unwrap(), filter);
        }
        assert_eq!(CategoryFilter::default().id(), "all");
    }
}
