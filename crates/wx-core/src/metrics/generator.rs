//! Uniform random generation of mock metrics
//!
//! Every draw is independent. Integer ranges are half-open, so
//! `SIGNAL_RANGE = 60..100` yields 60 through 99.

use super::{device_catalog, ChannelWidth, DeviceInfo, FrequencyBand, NetworkMetrics, SecurityType, SpeedSample};
use rand::Rng;
use std::ops::Range;

pub const SIGNAL_RANGE: Range<u32> = 60..100;
pub const DOWNLOAD_RANGE: Range<u32> = 20..100;
pub const UPLOAD_RANGE: Range<u32> = 10..40;
pub const LATENCY_RANGE: Range<u32> = 10..50;
pub const JITTER_RANGE: Range<u32> = 1..11;
pub const PACKET_LOSS_RANGE: Range<f64> = 0.0..3.0;
pub const DEVICE_COUNT_RANGE: Range<u32> = 8..23;
pub const NETWORK_SUFFIX_RANGE: Range<u32> = 0..1000;
pub const CHANNEL_RANGE: Range<u32> = 1..12;
pub const CONGESTION_RANGE: Range<u32> = 20..80;
pub const UPTIME_RANGE: Range<u32> = 24..744;

pub const FIVE_GHZ_PROBABILITY: f64 = 0.4;
pub const WPA3_PROBABILITY: f64 = 0.3;
pub const WIDE_CHANNEL_PROBABILITY: f64 = 0.5;

pub const HISTORY_HOURS: usize = 24;
pub const HISTORY_DOWNLOAD_RANGE: Range<u32> = 30..80;
pub const HISTORY_UPLOAD_RANGE: Range<u32> = 15..40;
pub const HISTORY_PING_RANGE: Range<u32> = 15..45;

/// Draw a fresh snapshot
pub fn generate_metrics<R: Rng + ?Sized>(rng: &mut R) -> NetworkMetrics {
    NetworkMetrics {
        signal_strength: rng.gen_range(SIGNAL_RANGE),
        download_speed: rng.gen_range(DOWNLOAD_RANGE),
        upload_speed: rng.gen_range(UPLOAD_RANGE),
        latency: rng.gen_range(LATENCY_RANGE),
        jitter: rng.gen_range(JITTER_RANGE),
        packet_loss: rng.gen_range(PACKET_LOSS_RANGE),
        connected_devices: rng.gen_range(DEVICE_COUNT_RANGE),
        network_name: format!("HomeNetwork_{}", rng.gen_range(NETWORK_SUFFIX_RANGE)),
        frequency: if rng.gen_bool(FIVE_GHZ_PROBABILITY) {
            FrequencyBand::FiveGhz
        } else {
            FrequencyBand::TwoPointFourGhz
        },
        channel: rng.gen_range(CHANNEL_RANGE),
        security_type: if rng.gen_bool(WPA3_PROBABILITY) {
            SecurityType::Wpa3
        } else {
            SecurityType::Wpa2
        },
        bandwidth: if rng.gen_bool(WIDE_CHANNEL_PROBABILITY) {
            ChannelWidth::Mhz80
        } else {
            ChannelWidth::Mhz40
        },
        congestion: rng.gen_range(CONGESTION_RANGE),
        uptime: rng.gen_range(UPTIME_RANGE),
    }
}

/// Hourly samples, newest first ("23:00" down to "0:00")
pub fn generate_speed_history<R: Rng + ?Sized>(rng: &mut R) -> Vec<SpeedSample> {
    (0..HISTORY_HOURS)
        .map(|i| SpeedSample {
            timestamp: format!("{}:00", HISTORY_HOURS - 1 - i),
            download: rng.gen_range(HISTORY_DOWNLOAD_RANGE),
            upload: rng.gen_range(HISTORY_UPLOAD_RANGE),
            ping: rng.gen_range(HISTORY_PING_RANGE),
        })
        .collect()
}

/// Prefix of the device catalog bounded by the reported device count and `cap`
pub fn visible_devices(connected_devices: u32, cap: usize) -> Vec<DeviceInfo> {
    let shown = (connected_devices as usize).min(cap);
    device_catalog().into_iter().take(shown).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generated_metrics_within_ranges() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..500 {
            let m = generate_metrics(&mut rng);
            assert!(SIGNAL_RANGE.contains(&m.signal_strength));
            assert!(DOWNLOAD_RANGE.contains(&m.download_speed));
            assert!(UPLOAD_RANGE.contains(&m.upload_speed));
            assert!(LATENCY_RANGE.contains(&m.latency));
            assert!(JITTER_RANGE.contains(&m.jitter));
            assert!(PACKET_LOSS_RANGE.contains(&m.packet_loss));
            assert!(DEVICE_COUNT_RANGE.contains(&m.connected_devices));
            assert!(CHANNEL_RANGE.contains(&m.channel));
            assert!(CONGESTION_RANGE.contains(&m.congestion));
            assert!(UPTIME_RANGE.contains(&m.uptime));
            assert!(m.network_name.starts_with("HomeNetwork_"));
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = generate_metrics(&mut StdRng::seed_from_u64(42));
        let b = generate_metrics(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_speed_history_shape() {
        let history = generate_speed_history(&mut StdRng::seed_from_u64(1));
        assert_eq!(history.len(), HISTORY_HOURS);
        assert_eq!(history[0].timestamp, "23:00");
        assert_eq!(history[23].timestamp, "0:00");
        assert!(history.iter().all(|s| HISTORY_PING_RANGE.contains(&s.ping)));
    }

    #[test]
    fn test_visible_devices_bounded_by_catalog() {
        assert_eq!(visible_devices(3, 8).len(), 3);
        assert_eq!(visible_devices(12, 8).len(), 5);
        assert_eq!(visible_devices(0, 8).len(), 0);
        assert_eq!(visible_devices(12, 2).len(), 2);
    }
}
