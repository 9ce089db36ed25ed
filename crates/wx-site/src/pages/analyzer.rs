//! Network analyzer page

use leptos::*;
use std::cell::RefCell;
use std::time::Duration;
use wx_core::recommendations::{EXTENDER_PITCH, EXTENDER_PITCH_TITLE};
use wx_core::{
    AnalysisConfig, AnalysisReport, AnalysisSequencer, Notice, Notifier, SignalQuality, SpeedQuality,
};
use crate::components::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResultsTab {
    Overview,
    Performance,
    Devices,
    Recommendations,
}

impl ResultsTab {
    const ALL: [ResultsTab; 4] = [
        ResultsTab::Overview,
        ResultsTab::Performance,
        ResultsTab::Devices,
        ResultsTab::Recommendations,
    ];

    fn label(&self) -> &'static str {
        match self {
            ResultsTab::Overview => "Overview",
            ResultsTab::Performance => "Performance",
            ResultsTab::Devices => "Devices",
            ResultsTab::Recommendations => "Recommendations",
        }
    }
}

/// Wait one phase interval, then advance the run. Reschedules itself until
/// the sequencer reports completion.
fn schedule_tick(sequencer: RwSignal<AnalysisSequencer>, toaster: Toaster, interval: Duration) {
    set_timeout(
        move || {
            // Toasts are raised after the sequencer update has been released
            let pending = RefCell::new(Vec::new());
            let mut more = false;
            sequencer.update(|s| {
                more = s.advance(&mut rand::thread_rng(), &|n: Notice| pending.borrow_mut().push(n));
            });
            for notice in pending.into_inner() {
                toaster.notify(notice);
            }
            if more {
                schedule_tick(sequencer, toaster, interval);
            }
        },
        interval,
    );
}

#[component]
pub fn AnalyzerPage() -> impl IntoView {
    let config = expect_context::<AnalysisConfig>();
    let toaster = use_toaster();
    let interval = config.phase_interval();
    let sequencer = create_rw_signal(AnalysisSequencer::new(&config));

    let is_running = move || sequencer.with(|s| s.is_running());
    let report = move || sequencer.with(|s| s.report().cloned());
    let progress = Signal::derive(move || sequencer.with(|s| f64::from(s.progress())));

    let start = move |_| {
        let mut started = Ok(());
        sequencer.update(|s| started = s.start());
        match started {
            Ok(()) => {
                tracing::info!("Network analysis started");
                schedule_tick(sequencer, toaster, interval);
            }
            Err(err) => tracing::warn!(%err, "Ignoring analysis request"),
        }
    };

    view! {
        <div class="min-h-screen bg-gradient-to-br from-indigo-50 via-white to-blue-50">
            <PageHeader title="Network Analyzer" subtitle="Comprehensive Wi-Fi performance analysis">
                <button
                    class="px-6 py-3 bg-indigo-600 hover:bg-indigo-700 disabled:opacity-60 text-white font-semibold rounded-lg transition"
                    disabled=is_running
                    on:click=start
                >
                    {move || if is_running() { "Analyzing..." } else { "Start Analysis" }}
                </button>
            </PageHeader>

            <div class="container mx-auto px-4 py-8 space-y-8">
                <Show when=is_running>
                    <div class="bg-white rounded-xl shadow-lg p-6">
                        <h2 class="text-lg font-semibold text-gray-900 mb-4">"Analysis in Progress"</h2>
                        <ProgressBar value=progress height="h-3"/>
                        <div class="flex justify-between mt-3 text-sm text-gray-600">
                            <span>"Current Phase: " {move || sequencer.with(|s| s.phase_label())}</span>
                            <span>{move || format!("{}% complete", sequencer.with(|s| s.progress()))}</span>
                        </div>
                    </div>
                </Show>

                {move || report().map(|report| view! { <AnalysisResults report=report/> })}

                <Show when=move || !is_running() && report().is_none()>
                    <GettingStarted/>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn GettingStarted() -> impl IntoView {
    let steps = [
        ("📡", "Discover", "Find every device sharing your network"),
        ("⚡", "Measure", "Test speeds, latency and signal strength"),
        ("🧠", "Advise", "Get prioritized fixes for what we find"),
    ];

    view! {
        <div class="bg-white rounded-xl shadow-lg p-12 text-center">
            <div class="text-6xl mb-4">"📶"</div>
            <h2 class="text-2xl font-bold text-gray-900 mb-2">"Ready to Analyze Your Network"</h2>
            <p class="text-gray-600 max-w-xl mx-auto mb-8">
                "Click Start Analysis to scan your Wi-Fi. The analysis takes a few seconds "
                "and runs entirely in your browser."
            </p>
            <div class="grid md:grid-cols-3 gap-6 max-w-3xl mx-auto">
                {steps.into_iter().map(|(icon, title, description)| {
                    view! { <FeatureHighlight icon=icon title=title description=description/> }
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn AnalysisResults(report: AnalysisReport) -> impl IntoView {
    let (tab, set_tab) = create_signal(ResultsTab::Overview);
    let health = report.health();
    let m = report.metrics.clone();
    let report = store_value(report);

    view! {
        <div class="space-y-6">
            // Health overview
            <div class="bg-white rounded-xl shadow-lg p-6">
                <div class="flex items-center justify-between mb-6">
                    <div>
                        <h2 class="text-xl font-semibold text-gray-900">"Network Health"</h2>
                        <p class="text-gray-500">{m.network_name.clone()}</p>
                    </div>
                    <div class="text-right">
                        <div class=format!("text-3xl font-bold {}", tone_text(health.tier.tone()))>
                            {health.tier.icon()} " " {health.tier.label()}
                        </div>
                        <div class="text-sm text-gray-500">
                            {health.score.map(|s| format!("Score {:.0}/100", s)).unwrap_or_default()}
                        </div>
                    </div>
                </div>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                    <MetricTile icon="📶" value=format!("{}%", m.signal_strength) label="Signal Strength"/>
                    <MetricTile icon="⬇️" value=format!("{} Mbps", m.download_speed) label="Download"/>
                    <MetricTile icon="⏱️" value=format!("{}ms", m.latency) label="Latency"/>
                    <MetricTile icon="📱" value=m.connected_devices.to_string() label="Connected Devices"/>
                </div>
            </div>

            // Tabs
            <div class="bg-white rounded-xl shadow-lg">
                <div class="flex border-b px-4">
                    {ResultsTab::ALL.into_iter().map(|t| view! {
                        <TabButton
                            label=t.label()
                            active=Signal::derive(move || tab.get() == t)
                            on_select=move |_| set_tab.set(t)
                        />
                    }).collect_view()}
                </div>
                <div class="p-6">
                    {move || report.with_value(|report| match tab.get() {
                        ResultsTab::Overview => view! { <OverviewTab report=report.clone()/> }.into_view(),
                        ResultsTab::Performance => view! { <PerformanceTab report=report.clone()/> }.into_view(),
                        ResultsTab::Devices => view! { <DevicesTab report=report.clone()/> }.into_view(),
                        ResultsTab::Recommendations => view! { <RecommendationsTab report=report.clone()/> }.into_view(),
                    })}
                </div>
            </div>
        </div>
    }
}

#[component]
fn OverviewTab(report: AnalysisReport) -> impl IntoView {
    let m = report.metrics;
    let signal = SignalQuality::from_strength(m.signal_strength);
    let download = SpeedQuality::from_mbps(m.download_speed);
    let upload = SpeedQuality::from_mbps(m.upload_speed);

    let info = [
        ("Network Name", m.network_name.clone()),
        ("Frequency", m.frequency.to_string()),
        ("Channel", m.channel.to_string()),
        ("Security", m.security_type.to_string()),
        ("Channel Width", m.bandwidth.to_string()),
        ("Uptime", format!("{} hours", m.uptime)),
    ];

    view! {
        <div class="grid md:grid-cols-2 gap-8">
            <div>
                <h3 class="font-semibold text-gray-900 mb-4">"Network Information"</h3>
                <dl class="space-y-3">
                    {info.into_iter().map(|(label, value)| view! {
                        <div class="flex justify-between text-sm">
                            <dt class="text-gray-500">{label}</dt>
                            <dd class="font-medium text-gray-900">{value}</dd>
                        </div>
                    }).collect_view()}
                </dl>
            </div>
            <div>
                <h3 class="font-semibold text-gray-900 mb-4">"Quality Summary"</h3>
                <div class="space-y-3 text-sm">
                    <div class="flex justify-between">
                        <span class="text-gray-500">"Signal"</span>
                        <span class=tone_text(signal.tone())>{signal.label()}</span>
                    </div>
                    <div class="flex justify-between">
                        <span class="text-gray-500">"Download"</span>
                        <span class=tone_text(download.tone())>{download.label()}</span>
                    </div>
                    <div class="flex justify-between">
                        <span class="text-gray-500">"Upload"</span>
                        <span class=tone_text(upload.tone())>{upload.label()}</span>
                    </div>
                    <div class="flex justify-between">
                        <span class="text-gray-500">"Jitter"</span>
                        <span class="text-gray-900">{format!("{}ms", m.jitter)}</span>
                    </div>
                    <div class="flex justify-between">
                        <span class="text-gray-500">"Packet Loss"</span>
                        <span class="text-gray-900">{format!("{:.1}%", m.packet_loss)}</span>
                    </div>
                    <div class="flex justify-between">
                        <span class="text-gray-500">"Congestion"</span>
                        <span class="text-gray-900">{format!("{}%", m.congestion)}</span>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn PerformanceTab(report: AnalysisReport) -> impl IntoView {
    let m = report.metrics;
    let signal = SignalQuality::from_strength(m.signal_strength);
    // Download is scaled against 100 Mbps, upload against 50 Mbps
    let download_pct = f64::from(m.download_speed);
    let upload_pct = f64::from(m.upload_speed) * 2.0;
    let latency_pct = f64::from(100u32.saturating_sub(m.latency));

    view! {
        <div class="space-y-8">
            <div class="space-y-5">
                <MeterRow label="Signal Strength" reading=format!("{}% ({})", m.signal_strength, signal.label())>
                    <ProgressBar value=f64::from(m.signal_strength) bar_class=tone_bar(signal.tone())/>
                </MeterRow>
                <MeterRow label="Download Speed" reading=format!("{} Mbps", m.download_speed)>
                    <ProgressBar value=download_pct bar_class="bg-blue-500"/>
                </MeterRow>
                <MeterRow label="Upload Speed" reading=format!("{} Mbps", m.upload_speed)>
                    <ProgressBar value=upload_pct bar_class="bg-green-500"/>
                </MeterRow>
                <MeterRow label="Latency" reading=format!("{}ms", m.latency)>
                    <ProgressBar value=latency_pct bar_class="bg-purple-500"/>
                </MeterRow>
            </div>

            <div>
                <h3 class="font-semibold text-gray-900 mb-4">"24-Hour Speed History"</h3>
                <div class="overflow-x-auto max-h-72 overflow-y-auto border rounded-lg">
                    <table class="min-w-full divide-y divide-gray-200 text-sm">
                        <thead class="bg-gray-50">
                            <tr>
                                <th class="px-4 py-2 text-left text-xs font-medium text-gray-500 uppercase">"Time"</th>
                                <th class="px-4 py-2 text-left text-xs font-medium text-gray-500 uppercase">"Download"</th>
                                <th class="px-4 py-2 text-left text-xs font-medium text-gray-500 uppercase">"Upload"</th>
                                <th class="px-4 py-2 text-left text-xs font-medium text-gray-500 uppercase">"Ping"</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-gray-200">
                            {report.speed_history.into_iter().map(|sample| view! {
                                <tr>
                                    <td class="px-4 py-2 font-medium">{sample.timestamp}</td>
                                    <td class="px-4 py-2">{format!("{} Mbps", sample.download)}</td>
                                    <td class="px-4 py-2">{format!("{} Mbps", sample.upload)}</td>
                                    <td class="px-4 py-2">{format!("{}ms", sample.ping)}</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}

#[component]
fn MeterRow(label: &'static str, reading: String, children: Children) -> impl IntoView {
    view! {
        <div>
            <div class="flex justify-between text-sm mb-2">
                <span class="font-medium text-gray-700">{label}</span>
                <span class="text-gray-500">{reading}</span>
            </div>
            {children()}
        </div>
    }
}

#[component]
fn DevicesTab(report: AnalysisReport) -> impl IntoView {
    let total = report.metrics.connected_devices;
    let shown = report.devices.len();

    view! {
        <div>
            <p class="text-sm text-gray-500 mb-4">
                {format!("Showing {} of {} connected devices", shown, total)}
            </p>
            <div class="grid md:grid-cols-2 gap-4">
                {report.devices.into_iter().map(|device| view! {
                    <div class="flex items-center p-4 border rounded-lg">
                        <div class="text-3xl mr-4">{device.kind.icon()}</div>
                        <div class="flex-1">
                            <div class="font-medium text-gray-900">{device.name}</div>
                            <div class="text-sm text-gray-500">{device.kind.label()} " · " {device.ip}</div>
                        </div>
                        <div class="text-right text-sm">
                            <div class="font-medium text-gray-900">{format!("{} Mbps", device.bandwidth)}</div>
                            <div class="text-gray-500">{device.connected}</div>
                        </div>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn RecommendationsTab(report: AnalysisReport) -> impl IntoView {
    let recommendations = report.recommendations();

    let list = if recommendations.is_empty() {
        view! {
            <div class="text-center py-12">
                <div class="text-5xl mb-4">"🏆"</div>
                <h3 class="text-xl font-bold text-gray-900 mb-2">"Outstanding Network Performance!"</h3>
                <p class="text-gray-600">"Your network is performing excellently. No immediate optimizations are needed."</p>
            </div>
        }
        .into_view()
    } else {
        recommendations
            .into_iter()
            .map(|rec| view! {
                <div class="border rounded-lg p-5">
                    <div class="flex items-start justify-between mb-2">
                        <h4 class="font-semibold text-gray-900">{rec.title}</h4>
                        <PriorityBadge priority=rec.priority/>
                    </div>
                    <p class="text-sm text-gray-600 mb-3">{rec.description}</p>
                    <div class="flex flex-wrap gap-2 text-xs">
                        <Badge text=format!("Impact: {}", rec.impact) tone_class="bg-blue-50 text-blue-700"/>
                        <Badge text=format!("Solution: {}", rec.solution) tone_class="bg-green-50 text-green-700"/>
                    </div>
                </div>
            })
            .collect_view()
    };

    view! {
        <div class="space-y-4">
            {list}
            <div class="bg-indigo-50 border border-indigo-200 rounded-lg p-5">
                <h4 class="font-semibold text-indigo-900 mb-2">{EXTENDER_PITCH_TITLE}</h4>
                <p class="text-sm text-indigo-800 mb-4">{EXTENDER_PITCH}</p>
                <a href="/solutions" class="inline-block px-4 py-2 bg-indigo-600 hover:bg-indigo-700 text-white text-sm font-semibold rounded-lg transition">
                    "View Solutions"
                </a>
            </div>
        </div>
    }
}
