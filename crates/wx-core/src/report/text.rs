//! Plain text report generation

use super::AnalysisSummary;
use crate::metrics::quality::{SignalQuality, SpeedQuality};
use crate::metrics::SpeedSample;
use crate::recommendations::{EXTENDER_PITCH, EXTENDER_PITCH_TITLE};
use crate::{CoreError, CoreResult};
use std::fmt::{self, Write};

pub fn generate(summary: &AnalysisSummary<'_>) -> CoreResult<String> {
    let mut out = String::new();
    write_report(&mut out, summary).map_err(|e| CoreError::Serialization(e.to_string()))?;
    Ok(out)
}

fn write_report(out: &mut impl Write, summary: &AnalysisSummary<'_>) -> fmt::Result {
    let m = &summary.report.metrics;
    let rule = "=".repeat(50);

    writeln!(out, "\nNetwork Analysis Report\n{}", rule)?;
    writeln!(out, "Generated: {}", summary.report.generated_at.to_rfc3339())?;
    match summary.health.score {
        Some(score) => {
            writeln!(out, "Network Health: {} ({:.1}/100)", summary.health.tier, score)?;
        }
        None => {
            writeln!(out, "Network Health: {}", summary.health.tier)?;
        }
    }

    writeln!(out, "\nNetwork Information")?;
    writeln!(out, "  Name:       {}", m.network_name)?;
    writeln!(out, "  Band:       {} (channel {}, {})", m.frequency, m.channel, m.bandwidth)?;
    writeln!(out, "  Security:   {}", m.security_type)?;
    writeln!(out, "  Uptime:     {}h", m.uptime)?;

    writeln!(out, "\nPerformance")?;
    writeln!(
        out,
        "  Signal:     {}% ({})",
        m.signal_strength,
        SignalQuality::from_strength(m.signal_strength)
    )?;
    writeln!(
        out,
        "  Download:   {} Mbps ({})",
        m.download_speed,
        SpeedQuality::from_mbps(m.download_speed)
    )?;
    writeln!(
        out,
        "  Upload:     {} Mbps ({})",
        m.upload_speed,
        SpeedQuality::from_mbps(m.upload_speed)
    )?;
    writeln!(out, "  Latency:    {}ms", m.latency)?;
    writeln!(out, "  Jitter:     {}ms", m.jitter)?;
    writeln!(out, "  Loss:       {:.1}%", m.packet_loss)?;
    writeln!(out, "  Congestion: {}%", m.congestion)?;

    writeln!(out, "\nConnected Devices ({} of {})", summary.report.devices.len(), m.connected_devices)?;
    for device in &summary.report.devices {
        writeln!(
            out,
            "  {} {:<12} {:<14} {:>3} Mbps  connected {}",
            device.kind.icon(),
            device.name,
            device.ip,
            device.bandwidth,
            device.connected
        )?;
    }

    let history = &summary.report.speed_history;
    if !history.is_empty() {
        writeln!(out, "\n{}-Hour History (averages)", history.len())?;
        writeln!(
            out,
            "  Download {:.1} Mbps | Upload {:.1} Mbps | Ping {:.1}ms",
            average(history, |s| s.download),
            average(history, |s| s.upload),
            average(history, |s| s.ping)
        )?;
    }

    writeln!(out, "\nRecommendations\n{}", rule)?;
    if summary.recommendations.is_empty() {
        writeln!(out, "Outstanding Network Performance! No immediate optimizations are needed.")?;
    }
    for rec in &summary.recommendations {
        writeln!(out, "\n[{} Priority] {}", rec.priority, rec.title)?;
        writeln!(out, "  {}", rec.description)?;
        writeln!(out, "  Impact: {} | Solution: {}", rec.impact, rec.solution)?;
    }

    writeln!(out, "\n{}\n  {}", EXTENDER_PITCH_TITLE, EXTENDER_PITCH)
}

fn average(history: &[SpeedSample], field: fn(&SpeedSample) -> u32) -> f64 {
    history.iter().map(|s| f64::from(field(s))).sum::<f64>() / history.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequencer::AnalysisReport;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_text_report_sections() {
        let report = AnalysisReport::generate(&mut StdRng::seed_from_u64(8), 8);
        let summary = AnalysisSummary::new(&report);
        let text = generate(&summary).unwrap();

        assert!(text.contains("Network Health: "));
        assert!(text.contains(&report.metrics.network_name));
        assert!(text.contains("24-Hour History"));
        assert!(text.contains(EXTENDER_PITCH_TITLE));
        for rec in &summary.recommendations {
            assert!(text.contains(rec.title));
        }
    }

    #[test]
    fn test_text_report_sections_in_order() {
        let report = AnalysisReport::generate(&mut StdRng::seed_from_u64(4), 8);
        let text = generate(&AnalysisSummary::new(&report)).unwrap();

        let positions: Vec<usize> = [
            "Network Analysis Report",
            "Network Information",
            "Performance",
            "Connected Devices",
            "Recommendations",
            EXTENDER_PITCH_TITLE,
        ]
        .iter()
        .map(|heading| text.find(heading).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(text.trim_end().ends_with(EXTENDER_PITCH));
    }
}
