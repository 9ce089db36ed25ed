//! Static support center content

use super::{CategoryFilter, FaqCategory};
use serde::Serialize;

/// Sidebar entry; `count` is the advertised article count, not the FAQ count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SupportCategory {
    pub filter: CategoryFilter,
    pub name: &'static str,
    pub count: u32,
}

pub static SUPPORT_CATEGORIES: [SupportCategory; 5] = [
    SupportCategory { filter: CategoryFilter::All, name: "All Topics", count: 24 },
    SupportCategory { filter: CategoryFilter::Only(FaqCategory::Setup), name: "Setup & Installation", count: 8 },
    SupportCategory { filter: CategoryFilter::Only(FaqCategory::Troubleshooting), name: "Troubleshooting", count: 12 },
    SupportCategory { filter: CategoryFilter::Only(FaqCategory::Features), name: "Features & Settings", count: 6 },
    SupportCategory { filter: CategoryFilter::Only(FaqCategory::Technical), name: "Technical Issues", count: 5 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContactOption {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub availability: &'static str,
    pub response_time: &'static str,
    pub action: &'static str,
}

pub static CONTACT_OPTIONS: [ContactOption; 3] = [
    ContactOption {
        title: "Live Chat",
        description: "Get instant help from our support team",
        icon: "💬",
        availability: "24/7",
        response_time: "< 2 minutes",
        action: "Start Chat",
    },
    ContactOption {
        title: "Phone Support",
        description: "Speak directly with a technical expert",
        icon: "📞",
        availability: "Mon-Fri 8AM-8PM EST",
        response_time: "< 5 minutes",
        action: "Call Now",
    },
    ContactOption {
        title: "Email Support",
        description: "Send detailed questions and get comprehensive answers",
        icon: "📧",
        availability: "24/7",
        response_time: "< 4 hours",
        action: "Send Email",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ResourceDetail {
    Size(&'static str),
    Duration(&'static str),
    Platforms(&'static str),
}

impl ResourceDetail {
    pub fn describe(&self) -> String {
        match self {
            ResourceDetail::Size(size) => format!("Size: {}", size),
            ResourceDetail::Duration(duration) => format!("Duration: {}", duration),
            ResourceDetail::Platforms(platforms) => platforms.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resource {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub kind: &'static str,
    pub detail: ResourceDetail,
}

pub static RESOURCES: [Resource; 4] = [
    Resource {
        title: "Quick Start Guide",
        description: "Step-by-step setup instructions",
        icon: "📘",
        kind: "PDF",
        detail: ResourceDetail::Size("2.3 MB"),
    },
    Resource {
        title: "Video Tutorials",
        description: "Watch setup and troubleshooting videos",
        icon: "🎬",
        kind: "Video",
        detail: ResourceDetail::Duration("15 min"),
    },
    Resource {
        title: "Mobile Setup App",
        description: "Download our app for easy configuration",
        icon: "📲",
        kind: "App",
        detail: ResourceDetail::Platforms("iOS & Android"),
    },
    Resource {
        title: "Advanced Configuration Guide",
        description: "In-depth settings and optimization",
        icon: "🔧",
        kind: "PDF",
        detail: ResourceDetail::Size("5.1 MB"),
    },
];

pub const SUPPORT_REQUEST_SUBMITTED: &str =
    "Support request submitted! We'll get back to you within 4 hours.";

pub const SUPPORT_PHONE: &str = "1-800-WIFI-PRO (1-800-943-4776)";
pub const SUPPORT_EMAIL: &str = "support@wifiextenderpro.com";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_cover_every_faq_category() {
        assert_eq!(SUPPORT_CATEGORIES[0].filter, CategoryFilter::All);
        for category in FaqCategory::ALL {
            assert!(SUPPORT_CATEGORIES
                .iter()
                .any(|c| c.filter == CategoryFilter::Only(category)));
        }
    }

    #[test]
    fn test_resource_details() {
        assert_eq!(RESOURCES[0].detail.describe(), "Size: 2.3 MB");
        assert_eq!(RESOURCES[1].detail.describe(), "Duration: 15 min");
        assert_eq!(RESOURCES[2].detail.describe(), "iOS & Android");
    }
}
