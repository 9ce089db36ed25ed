//! Mock analysis sequencer
//!
//! A run walks a fixed list of phases. The owner calls
//! [`AnalysisSequencer::advance`] once per timer tick, after pausing
//! [`AnalysisConfig::phase_interval`]. The last tick synthesizes the
//! [`AnalysisReport`] and returns the sequencer to rest. A run cannot be
//! cancelled, and [`AnalysisSequencer::start`] refuses to begin a second run
//! while one is active.

use crate::config::AnalysisConfig;
use crate::metrics::quality::NetworkHealth;
use crate::metrics::{
    generate_metrics, generate_speed_history, visible_devices, DeviceInfo, NetworkMetrics, SpeedSample,
};
use crate::recommendations::{recommend, Recommendation};
use crate::{CoreError, CoreResult};
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A labelled step of the mock analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnalysisPhase {
    pub progress: u8,
    pub message: &'static str,
    pub name: &'static str,
}

pub static PHASES: [AnalysisPhase; 7] = [
    AnalysisPhase { progress: 15, message: "Discovering network devices...", name: "Device Discovery" },
    AnalysisPhase { progress: 30, message: "Testing connection speeds...", name: "Speed Testing" },
    AnalysisPhase { progress: 45, message: "Analyzing signal strength patterns...", name: "Signal Analysis" },
    AnalysisPhase { progress: 60, message: "Evaluating network congestion...", name: "Congestion Analysis" },
    AnalysisPhase { progress: 75, message: "Checking security configuration...", name: "Security Scan" },
    AnalysisPhase { progress: 90, message: "Generating recommendations...", name: "AI Analysis" },
    AnalysisPhase { progress: 100, message: "Analysis complete!", name: "Complete" },
];

pub const COMPLETION_MESSAGE: &str = "Comprehensive network analysis completed!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeLevel {
    Info,
    Success,
}

/// A transient, fire-and-forget notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Info, message: message.into() }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Success, message: message.into() }
    }
}

/// Somewhere to surface notices. Delivery is one-way.
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

impl<F: Fn(Notice)> Notifier for F {
    fn notify(&self, notice: Notice) {
        self(notice)
    }
}

/// Results of one completed run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub generated_at: DateTime<Utc>,
    pub metrics: NetworkMetrics,
    pub devices: Vec<DeviceInfo>,
    pub speed_history: Vec<SpeedSample>,
}

impl AnalysisReport {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, max_devices: usize) -> Self {
        let metrics = generate_metrics(rng);
        let devices = visible_devices(metrics.connected_devices, max_devices);
        let speed_history = generate_speed_history(rng);

        Self {
            generated_at: Utc::now(),
            metrics,
            devices,
            speed_history,
        }
    }

    pub fn health(&self) -> NetworkHealth {
        NetworkHealth::assess(Some(&self.metrics))
    }

    pub fn recommendations(&self) -> Vec<Recommendation> {
        recommend(&self.metrics)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerState {
    Idle,
    Running { next_phase: usize },
    Complete,
}

#[derive(Debug, Clone)]
pub struct AnalysisSequencer {
    state: SequencerState,
    progress: u8,
    phase: Option<&'static AnalysisPhase>,
    report: Option<AnalysisReport>,
    max_devices: usize,
}

impl AnalysisSequencer {
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            state: SequencerState::Idle,
            progress: 0,
            phase: None,
            report: None,
            max_devices: config.max_listed_devices,
        }
    }

    /// Clear previous results and begin a run
    pub fn start(&mut self) -> CoreResult<()> {
        if self.is_running() {
            return Err(CoreError::AnalysisInProgress);
        }

        debug!("Starting mock network analysis");
        self.state = SequencerState::Running { next_phase: 0 };
        self.progress = 0;
        self.phase = None;
        self.report = None;
        Ok(())
    }

    /// Apply the next phase. Returns `true` while more ticks are needed.
    pub fn advance<R, N>(&mut self, rng: &mut R, notifier: &N) -> bool
    where
        R: Rng + ?Sized,
        N: Notifier + ?Sized,
    {
        let SequencerState::Running { next_phase } = self.state else {
            return false;
        };

        let phase = &PHASES[next_phase];
        self.progress = phase.progress;
        self.phase = Some(phase);
        debug!(progress = phase.progress, phase = phase.name, "Analysis phase");
        notifier.notify(Notice::info(phase.message));

        if next_phase + 1 < PHASES.len() {
            self.state = SequencerState::Running { next_phase: next_phase + 1 };
            return true;
        }

        let report = AnalysisReport::generate(rng, self.max_devices);
        debug!(
            devices = report.devices.len(),
            signal = report.metrics.signal_strength,
            "Analysis report generated"
        );
        self.report = Some(report);
        self.state = SequencerState::Complete;
        notifier.notify(Notice::success(COMPLETION_MESSAGE));
        false
    }

    pub fn state(&self) -> SequencerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, SequencerState::Running { .. })
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    /// Name of the most recently applied phase, empty before the first tick
    pub fn phase_label(&self) -> &'static str {
        self.phase.map(|p| p.name).unwrap_or("")
    }

    pub fn report(&self) -> Option<&AnalysisReport> {
        self.report.as_ref()
    }

    pub fn health(&self) -> NetworkHealth {
        NetworkHealth::assess(self.report.as_ref().map(|r| &r.metrics))
    }
}

impl Default for AnalysisSequencer {
    fn default() -> Self {
        Self::new(&AnalysisConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::quality::HealthTier;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder(RefCell<Vec<Notice>>);

    impl Notifier for Recorder {
        fn notify(&self, notice: Notice) {
            self.0.borrow_mut().push(notice);
        }
    }

    fn run_to_completion(seq: &mut AnalysisSequencer, rng: &mut StdRng, notes: &Recorder) -> usize {
        let mut ticks = 1;
        while seq.advance(rng, notes) {
            ticks += 1;
        }
        ticks
    }

    #[test]
    fn test_phase_table() {
        assert_eq!(PHASES.len(), 7);
        assert!(PHASES.windows(2).all(|w| w[0].progress < w[1].progress));
        assert_eq!(PHASES[6].progress, 100);
    }

    #[test]
    fn test_idle_sequencer() {
        let seq = AnalysisSequencer::default();
        assert_eq!(seq.state(), SequencerState::Idle);
        assert_eq!(seq.progress(), 0);
        assert_eq!(seq.phase_label(), "");
        assert!(seq.report().is_none());
        assert_eq!(seq.health().tier, HealthTier::Unknown);
    }

    #[test]
    fn test_full_run() {
        let mut seq = AnalysisSequencer::default();
        let mut rng = StdRng::seed_from_u64(3);
        let notes = Recorder::default();

        seq.start().unwrap();
        assert!(seq.is_running());

        let ticks = run_to_completion(&mut seq, &mut rng, &notes);
        assert_eq!(ticks, PHASES.len());

        assert_eq!(seq.state(), SequencerState::Complete);
        assert!(!seq.is_running());
        assert_eq!(seq.progress(), 100);
        assert_eq!(seq.phase_label(), "Complete");

        let report = seq.report().expect("report after completion");
        let expected = (report.metrics.connected_devices as usize).min(8).min(5);
        assert_eq!(report.devices.len(), expected);
        assert_eq!(report.speed_history.len(), 24);
        assert_ne!(seq.health().tier, HealthTier::Unknown);

        let notes = notes.0.into_inner();
        assert_eq!(notes.len(), PHASES.len() + 1);
        assert!(notes[..PHASES.len()].iter().all(|n| n.level == NoticeLevel::Info));
        assert_eq!(notes[0].message, "Discovering network devices...");
        assert_eq!(notes.last().unwrap(), &Notice::success(COMPLETION_MESSAGE));
    }

    #[test]
    fn test_progress_follows_phases() {
        let mut seq = AnalysisSequencer::default();
        let mut rng = StdRng::seed_from_u64(11);
        let sink = |_: Notice| {};

        seq.start().unwrap();
        for phase in &PHASES[..PHASES.len() - 1] {
            assert!(seq.advance(&mut rng, &sink));
            assert_eq!(seq.progress(), phase.progress);
            assert_eq!(seq.phase_label(), phase.name);
            assert!(seq.report().is_none());
        }
        assert!(!seq.advance(&mut rng, &sink));
        assert!(seq.report().is_some());
    }

    #[test]
    fn test_restart_rejected_while_running() {
        let mut seq = AnalysisSequencer::default();
        let mut rng = StdRng::seed_from_u64(5);

        seq.start().unwrap();
        seq.advance(&mut rng, &|_: Notice| {});
        assert_eq!(seq.start(), Err(CoreError::AnalysisInProgress));
        assert_eq!(seq.progress(), 15);
    }

    #[test]
    fn test_restart_after_completion_resets() {
        let mut seq = AnalysisSequencer::default();
        let mut rng = StdRng::seed_from_u64(9);
        let notes = Recorder::default();

        seq.start().unwrap();
        run_to_completion(&mut seq, &mut rng, &notes);
        assert!(seq.report().is_some());

        seq.start().unwrap();
        assert_eq!(seq.progress(), 0);
        assert_eq!(seq.phase_label(), "");
        assert!(seq.report().is_none());
    }

    #[test]
    fn test_advance_when_idle_is_noop() {
        let mut seq = AnalysisSequencer::default();
        let notes = Recorder::default();
        assert!(!seq.advance(&mut StdRng::seed_from_u64(1), &notes));
        assert!(notes.0.borrow().is_empty());
        assert_eq!(seq.state(), SequencerState::Idle);
    }

    #[test]
    fn test_device_cap_from_config() {
        let config = AnalysisConfig {
            max_listed_devices: 2,
            ..Default::default()
        };
        let mut seq = AnalysisSequencer::new(&config);
        let mut rng = StdRng::seed_from_u64(21);

        seq.start().unwrap();
        while seq.advance(&mut rng, &|_: Notice| {}) {}
        assert_eq!(seq.report().unwrap().devices.len(), 2);
    }
}
