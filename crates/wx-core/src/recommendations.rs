//! Optimization advice derived from a metrics snapshot
//!
//! Each [`Advisory`] is an independent threshold check. [`recommend`] runs
//! them in declaration order and emits one [`Recommendation`] per check that
//! fires. Output order is evaluation order, not priority order.

use crate::metrics::{FrequencyBand, NetworkMetrics, SecurityType};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::High => write!(f, "High"),
            Priority::Medium => write!(f, "Medium"),
            Priority::Low => write!(f, "Low"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Advisory {
    Coverage,
    BandwidthUpgrade,
    BandSwitch,
    ChannelInterference,
    DeviceManagement,
    Latency,
    SecurityUpgrade,
}

impl Advisory {
    /// Evaluation order
    pub const ALL: [Advisory; 7] = [
        Advisory::Coverage,
        Advisory::BandwidthUpgrade,
        Advisory::BandSwitch,
        Advisory::ChannelInterference,
        Advisory::DeviceManagement,
        Advisory::Latency,
        Advisory::SecurityUpgrade,
    ];

    pub fn applies(&self, m: &NetworkMetrics) -> bool {
        match self {
            Advisory::Coverage => m.signal_strength < 70,
            Advisory::BandwidthUpgrade => m.download_speed < 25,
            Advisory::BandSwitch => {
                m.frequency == FrequencyBand::TwoPointFourGhz && m.congestion > 60
            }
            Advisory::ChannelInterference => m.congestion > 70,
            Advisory::DeviceManagement => m.connected_devices > 15,
            Advisory::Latency => m.latency > 30,
            Advisory::SecurityUpgrade => m.security_type != SecurityType::Wpa3,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Advisory::Coverage => "Signal Strength Optimization",
            Advisory::BandwidthUpgrade => "Bandwidth Upgrade Needed",
            Advisory::BandSwitch => "Switch to 5 GHz Band",
            Advisory::ChannelInterference => "Channel Interference Detected",
            Advisory::DeviceManagement => "High Device Count Management",
            Advisory::Latency => "Latency Optimization",
            Advisory::SecurityUpgrade => "Security Upgrade",
        }
    }

    pub fn priority(&self) -> Priority {
        match self {
            Advisory::Coverage | Advisory::BandwidthUpgrade => Priority::High,
            Advisory::SecurityUpgrade => Priority::Low,
            _ => Priority::Medium,
        }
    }

    pub fn impact(&self) -> &'static str {
        match self {
            Advisory::Coverage => "Coverage",
            Advisory::BandwidthUpgrade => "Performance",
            Advisory::BandSwitch => "Speed",
            Advisory::ChannelInterference | Advisory::DeviceManagement => "Stability",
            Advisory::Latency => "Gaming/Video Calls",
            Advisory::SecurityUpgrade => "Security",
        }
    }

    pub fn solution(&self) -> &'static str {
        match self {
            Advisory::Coverage => "Wi-Fi Extender + Router Repositioning",
            Advisory::BandwidthUpgrade => "Internet Plan Upgrade",
            Advisory::BandSwitch => "Dual-Band Configuration",
            Advisory::ChannelInterference => "Automatic Channel Selection",
            Advisory::DeviceManagement => "Mesh Network + QoS",
            Advisory::Latency => "QoS Configuration",
            Advisory::SecurityUpgrade => "WPA3 Upgrade",
        }
    }

    pub fn describe(&self, m: &NetworkMetrics) -> String {
        match self {
            Advisory::Coverage => format!(
                "Your signal strength is at {}%. Consider repositioning your router to a central \
                 location or adding a Wi-Fi extender in weak coverage areas.",
                m.signal_strength
            ),
            Advisory::BandwidthUpgrade => format!(
                "Current download speed of {} Mbps may be insufficient for modern usage. Consider \
                 upgrading your internet plan or optimizing your network configuration.",
                m.download_speed
            ),
            Advisory::BandSwitch => format!(
                "High congestion ({}%) detected on {}. Switching to 5 GHz band will provide better \
                 performance for nearby devices.",
                m.congestion, m.frequency
            ),
            Advisory::ChannelInterference => format!(
                "Current channel {} shows {}% congestion. Switching to a less crowded channel will \
                 improve performance.",
                m.channel, m.congestion
            ),
            Advisory::DeviceManagement => format!(
                "{} devices connected. Consider implementing QoS rules and upgrading to a mesh \
                 network for better device management.",
                m.connected_devices
            ),
            Advisory::Latency => format!(
                "High latency of {}ms detected. Optimize your network settings and consider QoS \
                 prioritization for real-time applications.",
                m.latency
            ),
            Advisory::SecurityUpgrade => format!(
                "Your network is using {}. Upgrading to WPA3 will provide enhanced security \
                 features and better protection.",
                m.security_type
            ),
        }
    }

    fn recommendation(&self, m: &NetworkMetrics) -> Recommendation {
        Recommendation {
            advisory: *self,
            title: self.title(),
            description: self.describe(m),
            priority: self.priority(),
            impact: self.impact(),
            solution: self.solution(),
        }
    }
}

/// One advisory emitted for the current snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub advisory: Advisory,
    pub title: &'static str,
    pub description: String,
    pub priority: Priority,
    pub impact: &'static str,
    pub solution: &'static str,
}

/// Shown under the advisory list regardless of the outcome
pub const EXTENDER_PITCH_TITLE: &str = "Professional Wi-Fi Extender Recommendation";
pub const EXTENDER_PITCH: &str = "Based on your analysis, our Wi-Fi Extender Pro system would provide \
optimal coverage for your home. Consider upgrading to eliminate dead zones and boost overall \
performance by up to 300%.";

/// Run every check against `m`. An empty result means no action is needed.
pub fn recommend(m: &NetworkMetrics) -> Vec<Recommendation> {
    Advisory::ALL
        .iter()
        .filter(|advisory| advisory.applies(m))
        .map(|advisory| advisory.recommendation(m))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::ChannelWidth;

    fn snapshot(
        signal: u32,
        download: u32,
        frequency: FrequencyBand,
        congestion: u32,
        devices: u32,
        latency: u32,
        security: SecurityType,
    ) -> NetworkMetrics {
        NetworkMetrics {
            signal_strength: signal,
            download_speed: download,
            upload_speed: 15,
            latency,
            jitter: 3,
            packet_loss: 1.2,
            connected_devices: devices,
            network_name: "HomeNetwork_512".to_string(),
            frequency,
            channel: 11,
            security_type: security,
            bandwidth: ChannelWidth::Mhz40,
            congestion,
            uptime: 100,
        }
    }

    fn kinds(recs: &[Recommendation]) -> Vec<Advisory> {
        recs.iter().map(|r| r.advisory).collect()
    }

    #[test]
    fn test_struggling_network() {
        let m = snapshot(65, 20, FrequencyBand::TwoPointFourGhz, 65, 10, 35, SecurityType::Wpa2);
        let recs = recommend(&m);

        assert_eq!(
            kinds(&recs),
            vec![
                Advisory::Coverage,
                Advisory::BandwidthUpgrade,
                Advisory::BandSwitch,
                Advisory::Latency,
                Advisory::SecurityUpgrade,
            ]
        );
        assert_eq!(recs[0].priority, Priority::High);
        assert!(recs[0].description.contains("65%"));
        assert!(recs[1].description.contains("20 Mbps"));
        assert!(recs[3].description.contains("35ms"));
        assert!(recs[4].description.contains("WPA2"));
        assert_eq!(recs[4].priority, Priority::Low);
    }

    #[test]
    fn test_healthy_network_needs_nothing() {
        let m = snapshot(90, 80, FrequencyBand::FiveGhz, 10, 5, 5, SecurityType::Wpa3);
        assert!(recommend(&m).is_empty());
    }

    #[test]
    fn test_congested_crowded_network() {
        let m = snapshot(85, 60, FrequencyBand::FiveGhz, 75, 18, 20, SecurityType::Wpa3);
        let recs = recommend(&m);

        assert_eq!(
            kinds(&recs),
            vec![Advisory::ChannelInterference, Advisory::DeviceManagement]
        );
        assert!(recs[0].description.contains("channel 11"));
        assert!(recs[0].description.contains("75%"));
        assert!(recs[1].description.starts_with("18 devices"));
    }

    #[test]
    fn test_thresholds_are_strict() {
        let m = snapshot(70, 25, FrequencyBand::TwoPointFourGhz, 60, 15, 30, SecurityType::Wpa3);
        assert!(recommend(&m).is_empty());
    }

    #[test]
    fn test_deterministic() {
        let m = snapshot(50, 10, FrequencyBand::TwoPointFourGhz, 79, 22, 49, SecurityType::Wpa2);
        let first = recommend(&m);
        assert_eq!(first.len(), Advisory::ALL.len());
        assert_eq!(first, recommend(&m));
    }
}
