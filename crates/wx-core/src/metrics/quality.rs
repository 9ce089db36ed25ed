//! Threshold ladders mapping metrics to qualitative tiers

use super::NetworkMetrics;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display colour family of a tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Green,
    Blue,
    Yellow,
    Red,
    Gray,
}

impl Tone {
    pub fn name(&self) -> &'static str {
        match self {
            Tone::Green => "green",
            Tone::Blue => "blue",
            Tone::Yellow => "yellow",
            Tone::Red => "red",
            Tone::Gray => "gray",
        }
    }
}

/// Ordered from worst to best
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SignalQuality {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl SignalQuality {
    pub fn from_strength(strength: u32) -> Self {
        match strength {
            s if s >= 80 => SignalQuality::Excellent,
            s if s >= 60 => SignalQuality::Good,
            s if s >= 40 => SignalQuality::Fair,
            _ => SignalQuality::Poor,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SignalQuality::Excellent => "Excellent",
            SignalQuality::Good => "Good",
            SignalQuality::Fair => "Fair",
            SignalQuality::Poor => "Poor",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            SignalQuality::Excellent => Tone::Green,
            SignalQuality::Good => Tone::Blue,
            SignalQuality::Fair => Tone::Yellow,
            SignalQuality::Poor => Tone::Red,
        }
    }
}

impl fmt::Display for SignalQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered from worst to best
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SpeedQuality {
    Slow,
    Fair,
    Good,
    Fast,
}

impl SpeedQuality {
    pub fn from_mbps(speed: u32) -> Self {
        match speed {
            s if s >= 50 => SpeedQuality::Fast,
            s if s >= 25 => SpeedQuality::Good,
            s if s >= 10 => SpeedQuality::Fair,
            _ => SpeedQuality::Slow,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SpeedQuality::Fast => "Fast",
            SpeedQuality::Good => "Good",
            SpeedQuality::Fair => "Fair",
            SpeedQuality::Slow => "Slow",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            SpeedQuality::Fast => Tone::Green,
            SpeedQuality::Good => Tone::Blue,
            SpeedQuality::Fair => Tone::Yellow,
            SpeedQuality::Slow => Tone::Red,
        }
    }
}

impl fmt::Display for SpeedQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HealthTier {
    Unknown,
    Poor,
    Fair,
    Good,
    Excellent,
}

impl HealthTier {
    fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            HealthTier::Excellent
        } else if score >= 60.0 {
            HealthTier::Good
        } else if score >= 40.0 {
            HealthTier::Fair
        } else {
            HealthTier::Poor
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HealthTier::Unknown => "Unknown",
            HealthTier::Poor => "Poor",
            HealthTier::Fair => "Fair",
            HealthTier::Good => "Good",
            HealthTier::Excellent => "Excellent",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            HealthTier::Unknown => Tone::Gray,
            HealthTier::Poor => Tone::Red,
            HealthTier::Fair => Tone::Yellow,
            HealthTier::Good => Tone::Blue,
            HealthTier::Excellent => Tone::Green,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            HealthTier::Excellent => "✅",
            HealthTier::Good => "📈",
            HealthTier::Fair | HealthTier::Unknown => "📶",
            HealthTier::Poor => "⚠️",
        }
    }
}

impl fmt::Display for HealthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Overall assessment of a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NetworkHealth {
    pub tier: HealthTier,
    /// Weighted score in [0, 100]; absent before any analysis has run
    pub score: Option<f64>,
}

impl NetworkHealth {
    pub fn assess(metrics: Option<&NetworkMetrics>) -> Self {
        match metrics {
            None => Self {
                tier: HealthTier::Unknown,
                score: None,
            },
            Some(m) => {
                let score = health_score(m);
                Self {
                    tier: HealthTier::from_score(score),
                    score: Some(score),
                }
            }
        }
    }
}

/// 30% signal, 30% download (capped at 100 Mbps), 20% latency headroom,
/// 20% congestion headroom, scaled to 0..=100.
pub fn health_score(m: &NetworkMetrics) -> f64 {
    let signal = f64::from(m.signal_strength.min(100)) / 100.0;
    let download = f64::from(m.download_speed.min(100)) / 100.0;
    let latency = f64::from(100u32.saturating_sub(m.latency)) / 100.0;
    let congestion = f64::from(100u32.saturating_sub(m.congestion)) / 100.0;

    let score = (signal * 0.3 + download * 0.3 + latency * 0.2 + congestion * 0.2) * 100.0;
    score.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{ChannelWidth, FrequencyBand, SecurityType};

    fn metrics(signal: u32, download: u32, latency: u32, congestion: u32) -> NetworkMetrics {
        NetworkMetrics {
            signal_strength: signal,
            download_speed: download,
            upload_speed: 20,
            latency,
            jitter: 2,
            packet_loss: 0.5,
            connected_devices: 10,
            network_name: "HomeNetwork_1".to_string(),
            frequency: FrequencyBand::FiveGhz,
            channel: 6,
            security_type: SecurityType::Wpa3,
            bandwidth: ChannelWidth::Mhz80,
            congestion,
            uptime: 48,
        }
    }

    #[test]
    fn test_signal_boundaries() {
        assert_eq!(SignalQuality::from_strength(100), SignalQuality::Excellent);
        assert_eq!(SignalQuality::from_strength(80), SignalQuality::Excellent);
        assert_eq!(SignalQuality::from_strength(79), SignalQuality::Good);
        assert_eq!(SignalQuality::from_strength(60), SignalQuality::Good);
        assert_eq!(SignalQuality::from_strength(59), SignalQuality::Fair);
        assert_eq!(SignalQuality::from_strength(40), SignalQuality::Fair);
        assert_eq!(SignalQuality::from_strength(39), SignalQuality::Poor);
        assert_eq!(SignalQuality::from_strength(0), SignalQuality::Poor);
    }

    #[test]
    fn test_signal_quality_monotone() {
        let mut previous = SignalQuality::from_strength(0);
        for s in 1..=120 {
            let current = SignalQuality::from_strength(s);
            assert!(current >= previous, "quality dropped at {}", s);
            previous = current;
        }
    }

    #[test]
    fn test_speed_boundaries() {
        assert_eq!(SpeedQuality::from_mbps(50), SpeedQuality::Fast);
        assert_eq!(SpeedQuality::from_mbps(49), SpeedQuality::Good);
        assert_eq!(SpeedQuality::from_mbps(25), SpeedQuality::Good);
        assert_eq!(SpeedQuality::from_mbps(24), SpeedQuality::Fair);
        assert_eq!(SpeedQuality::from_mbps(10), SpeedQuality::Fair);
        assert_eq!(SpeedQuality::from_mbps(9), SpeedQuality::Slow);
        assert_eq!(SpeedQuality::from_mbps(9).tone(), Tone::Red);
    }

    #[test]
    fn test_health_without_snapshot_is_unknown() {
        let health = NetworkHealth::assess(None);
        assert_eq!(health.tier, HealthTier::Unknown);
        assert!(health.score.is_none());
        assert_eq!(health.tier.tone(), Tone::Gray);
    }

    #[test]
    fn test_perfect_network_is_excellent() {
        let m = metrics(100, 100, 0, 0);
        let health = NetworkHealth::assess(Some(&m));
        assert_eq!(health.tier, HealthTier::Excellent);
        assert!((health.score.unwrap() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_health_score_tiers() {
        // 0.3*0.65 + 0.3*0.2 + 0.2*0.65 + 0.2*0.35 = 0.455
        let m = metrics(65, 20, 35, 65);
        assert!((health_score(&m) - 45.5).abs() < 1e-9);
        assert_eq!(NetworkHealth::assess(Some(&m)).tier, HealthTier::Fair);

        let m = metrics(0, 0, 200, 200);
        assert_eq!(health_score(&m), 0.0);
        assert_eq!(NetworkHealth::assess(Some(&m)).tier, HealthTier::Poor);
    }

    #[test]
    fn test_health_score_bounded() {
        for signal in [0, 50, 100, 250] {
            for download in [0, 60, 100, 900] {
                for latency in [0, 30, 100, 400] {
                    for congestion in [0, 45, 100, 150] {
                        let score = health_score(&metrics(signal, download, latency, congestion));
                        assert!((0.0..=100.0).contains(&score));
                    }
                }
            }
        }
    }
}
