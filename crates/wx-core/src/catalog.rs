//! Product line, comparison table and use cases for the solutions page

use crate::{CoreError, CoreResult};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Home,
    Business,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 2] = [ProductCategory::Home, ProductCategory::Business];

    pub fn id(&self) -> &'static str {
        match self {
            ProductCategory::Home => "home",
            ProductCategory::Business => "business",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ProductCategory::Home => "Home Solutions",
            ProductCategory::Business => "Business Solutions",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ProductCategory::Home => "Perfect for residential use",
            ProductCategory::Business => "Enterprise-grade performance",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ProductCategory::Home => "🏠",
            ProductCategory::Business => "🏢",
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProductCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "home" => Ok(ProductCategory::Home),
            "business" => Ok(ProductCategory::Business),
            _ => Err(CoreError::UnknownCategory(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Product {
    pub category: ProductCategory,
    pub name: &'static str,
    pub price: &'static str,
    pub coverage: &'static str,
    pub speeds: &'static str,
    pub devices: &'static str,
    pub features: [&'static str; 4],
    pub best_for: &'static str,
    pub rating: f32,
    pub popular: bool,
}

pub static PRODUCTS: [Product; 5] = [
    Product {
        category: ProductCategory::Home,
        name: "Wi-Fi Extender Basic",
        price: "$49",
        coverage: "Up to 1,500 sq ft",
        speeds: "Up to 300 Mbps",
        devices: "15+ devices",
        features: ["Easy setup", "WPA3 security", "Ethernet port", "LED indicators"],
        best_for: "Small homes, apartments",
        rating: 4.5,
        popular: false,
    },
    Product {
        category: ProductCategory::Home,
        name: "Wi-Fi Extender Pro",
        price: "$89",
        coverage: "Up to 3,000 sq ft",
        speeds: "Up to 1200 Mbps",
        devices: "30+ devices",
        features: ["Dual-band", "MU-MIMO", "Beamforming", "Smart roaming"],
        best_for: "Medium to large homes",
        rating: 4.8,
        popular: true,
    },
    Product {
        category: ProductCategory::Home,
        name: "Mesh Network System",
        price: "$149",
        coverage: "Up to 5,000 sq ft",
        speeds: "Up to 2400 Mbps",
        devices: "50+ devices",
        features: ["Tri-band", "AI optimization", "Parental controls", "Guest network"],
        best_for: "Large homes, smart homes",
        rating: 4.9,
        popular: false,
    },
    Product {
        category: ProductCategory::Business,
        name: "Enterprise Wi-Fi System",
        price: "$299",
        coverage: "Up to 10,000 sq ft",
        speeds: "Up to 6000 Mbps",
        devices: "100+ devices",
        features: ["Wi-Fi 6E", "Network analytics", "Cloud management", "24/7 support"],
        best_for: "Small offices",
        rating: 4.7,
        popular: false,
    },
    Product {
        category: ProductCategory::Business,
        name: "Commercial Mesh Network",
        price: "$599",
        coverage: "Up to 25,000 sq ft",
        speeds: "Up to 9600 Mbps",
        devices: "200+ devices",
        features: ["Scalable architecture", "Advanced security", "Load balancing", "VPN support"],
        best_for: "Medium businesses",
        rating: 4.8,
        popular: false,
    },
];

pub fn products_in(category: ProductCategory) -> impl Iterator<Item = &'static Product> {
    PRODUCTS.iter().filter(move |p| p.category == category)
}

pub fn find_product(name: &str) -> Option<&'static Product> {
    PRODUCTS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureHighlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static FEATURE_HIGHLIGHTS: [FeatureHighlight; 4] = [
    FeatureHighlight {
        icon: "⚡",
        title: "Instant Setup",
        description: "Get connected in under 5 minutes with our guided setup app",
    },
    FeatureHighlight {
        icon: "🛡️",
        title: "Advanced Security",
        description: "WPA3 encryption and automatic security updates",
    },
    FeatureHighlight {
        icon: "🎯",
        title: "Smart Placement",
        description: "AI-powered recommendations for optimal extender positioning",
    },
    FeatureHighlight {
        icon: "📈",
        title: "Performance Monitoring",
        description: "Real-time analytics and automatic optimization",
    },
];

/// One row of the Basic / Pro / Mesh comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComparisonRow {
    pub feature: &'static str,
    pub basic: &'static str,
    pub pro: &'static str,
    pub mesh: &'static str,
}

const fn row(feature: &'static str, basic: &'static str, pro: &'static str, mesh: &'static str) -> ComparisonRow {
    ComparisonRow { feature, basic, pro, mesh }
}

pub static COMPARISON: [ComparisonRow; 13] = [
    row("Coverage Area", "1,500 sq ft", "3,000 sq ft", "5,000 sq ft"),
    row("Max Speed", "300 Mbps", "1200 Mbps", "2400 Mbps"),
    row("Concurrent Devices", "15", "30", "50+"),
    row("Dual Band", "❌", "✅", "✅"),
    row("Tri Band", "❌", "❌", "✅"),
    row("MU-MIMO", "❌", "✅", "✅"),
    row("Beamforming", "❌", "✅", "✅"),
    row("Smart Roaming", "❌", "✅", "✅"),
    row("Parental Controls", "❌", "Basic", "Advanced"),
    row("Guest Network", "❌", "✅", "✅"),
    row("Mobile App", "Basic", "Advanced", "Premium"),
    row("Cloud Management", "❌", "❌", "✅"),
    row("Warranty", "1 year", "2 years", "3 years"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UseCase {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub requirements: [&'static str; 3],
    /// Name of a product in [`PRODUCTS`]
    pub recommendation: &'static str,
}

pub static USE_CASES: [UseCase; 4] = [
    UseCase {
        title: "Remote Work Setup",
        description: "Ensure stable connectivity for video calls and file uploads",
        icon: "💻",
        requirements: ["Low latency", "Stable connection", "Upload optimization"],
        recommendation: "Wi-Fi Extender Pro",
    },
    UseCase {
        title: "Smart Home Integration",
        description: "Connect multiple IoT devices without performance degradation",
        icon: "🏠",
        requirements: ["High device capacity", "Network segmentation", "Always-on connectivity"],
        recommendation: "Mesh Network System",
    },
    UseCase {
        title: "Streaming & Gaming",
        description: "Eliminate buffering and reduce lag for entertainment",
        icon: "📺",
        requirements: ["High bandwidth", "QoS prioritization", "Low latency"],
        recommendation: "Wi-Fi Extender Pro",
    },
    UseCase {
        title: "Large Family Home",
        description: "Support multiple users across different rooms simultaneously",
        icon: "👪",
        requirements: ["Wide coverage", "Device prioritization", "Parental controls"],
        recommendation: "Mesh Network System",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_split() {
        assert_eq!(products_in(ProductCategory::Home).count(), 3);
        assert_eq!(products_in(ProductCategory::Business).count(), 2);
    }

    #[test]
    fn test_single_popular_product() {
        let popular: Vec<_> = PRODUCTS.iter().filter(|p| p.popular).collect();
        assert_eq!(popular.len(), 1);
        assert_eq!(popular[0].name, "Wi-Fi Extender Pro");
    }

    #[test]
    fn test_use_cases_recommend_real_products() {
        for use_case in &USE_CASES {
            assert!(
                find_product(use_case.recommendation).is_some(),
                "{} recommends an unknown product",
                use_case.title
            );
        }
    }

    #[test]
    fn test_comparison_table() {
        assert_eq!(COMPARISON.len(), 13);
        assert_eq!(COMPARISON[12].mesh, "3 years");
    }

    #[test]
    fn test_parse_category() {
        assert_eq!("Business".parse::<ProductCategory>().unwrap(), ProductCategory::Business);
        assert!(matches!(
            "garden".parse::<ProductCategory>(),
            Err(CoreError::UnknownCategory(_))
        ));
    }
}
