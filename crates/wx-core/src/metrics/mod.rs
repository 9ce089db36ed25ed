//! Mock network metrics and their generators

pub mod generator;
pub mod quality;

pub use generator::{generate_metrics, generate_speed_history, visible_devices};

use serde::{Deserialize, Serialize};
use std::fmt;

/// One randomly generated set of network metrics for a single analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkMetrics {
    /// Signal strength (percent)
    pub signal_strength: u32,
    /// Download speed (Mbps)
    pub download_speed: u32,
    /// Upload speed (Mbps)
    pub upload_speed: u32,
    /// Round-trip latency (ms)
    pub latency: u32,
    /// Jitter (ms)
    pub jitter: u32,
    /// Packet loss (percent, fractional)
    pub packet_loss: f64,
    pub connected_devices: u32,
    pub network_name: String,
    pub frequency: FrequencyBand,
    pub channel: u32,
    pub security_type: SecurityType,
    pub bandwidth: ChannelWidth,
    /// Channel congestion (percent)
    pub congestion: u32,
    /// Router uptime (hours)
    pub uptime: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrequencyBand {
    #[serde(rename = "2.4 GHz")]
    TwoPointFourGhz,
    #[serde(rename = "5 GHz")]
    FiveGhz,
}

impl fmt::Display for FrequencyBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrequencyBand::TwoPointFourGhz => write!(f, "2.4 GHz"),
            FrequencyBand::FiveGhz => write!(f, "5 GHz"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SecurityType {
    #[serde(rename = "WPA2")]
    Wpa2,
    #[serde(rename = "WPA3")]
    Wpa3,
}

impl fmt::Display for SecurityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SecurityType::Wpa2 => write!(f, "WPA2"),
            SecurityType::Wpa3 => write!(f, "WPA3"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChannelWidth {
    #[serde(rename = "40 MHz")]
    Mhz40,
    #[serde(rename = "80 MHz")]
    Mhz80,
}

impl fmt::Display for ChannelWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelWidth::Mhz40 => write!(f, "40 MHz"),
            ChannelWidth::Mhz80 => write!(f, "80 MHz"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceKind {
    Mobile,
    Laptop,
    SmartTv,
    Iot,
    Tablet,
}

impl DeviceKind {
    pub fn label(&self) -> &'static str {
        match self {
            DeviceKind::Mobile => "Mobile",
            DeviceKind::Laptop => "Laptop",
            DeviceKind::SmartTv => "Smart TV",
            DeviceKind::Iot => "IoT",
            DeviceKind::Tablet => "Tablet",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            DeviceKind::Mobile | DeviceKind::Tablet => "📱",
            DeviceKind::Laptop => "💻",
            DeviceKind::SmartTv => "📺",
            DeviceKind::Iot => "🔌",
        }
    }
}

/// A device seen on the mock network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInfo {
    pub name: String,
    pub kind: DeviceKind,
    pub ip: String,
    /// Human readable connection time, e.g. "2h 15m"
    pub connected: String,
    /// Bandwidth share (Mbps)
    pub bandwidth: u32,
}

/// One synthetic hourly sample for the 24-hour history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeedSample {
    pub timestamp: String,
    pub download: u32,
    pub upload: u32,
    pub ping: u32,
}

/// The fixed set of example devices, in display order
pub fn device_catalog() -> Vec<DeviceInfo> {
    const DEVICES: [(&str, DeviceKind, &str, &str, u32); 5] = [
        ("iPhone 15", DeviceKind::Mobile, "192.168.1.101", "2h 15m", 45),
        ("MacBook Pro", DeviceKind::Laptop, "192.168.1.102", "5h 30m", 78),
        ("Samsung TV", DeviceKind::SmartTv, "192.168.1.103", "12h 5m", 25),
        ("Echo Dot", DeviceKind::Iot, "192.168.1.104", "3d 2h", 2),
        ("iPad Air", DeviceKind::Tablet, "192.168.1.105", "1h 45m", 32),
    ];

    DEVICES
        .iter()
        .map(|(name, kind, ip, connected, bandwidth)| DeviceInfo {
            name: name.to_string(),
            kind: *kind,
            ip: ip.to_string(),
            connected: connected.to_string(),
            bandwidth: *bandwidth,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_wire_names() {
        assert_eq!(FrequencyBand::TwoPointFourGhz.to_string(), "2.4 GHz");
        assert_eq!(
            serde_json::to_string(&FrequencyBand::FiveGhz).unwrap(),
            "\"5 GHz\""
        );
        assert_eq!(
            serde_json::to_string(&SecurityType::Wpa3).unwrap(),
            format!("\"{}\"", SecurityType::Wpa3)
        );
        assert_eq!(ChannelWidth::Mhz80.to_string(), "80 MHz");
    }

    #[test]
    fn test_device_catalog() {
        let devices = device_catalog();
        assert_eq!(devices.len(), 5);
        assert_eq!(devices[0].name, "iPhone 15");
        assert_eq!(devices[3].kind.label(), "IoT");
        assert_eq!(devices[4].ip, "192.168.1.105");
    }
}
