//! Landing page

use leptos::*;
use wx_core::catalog::FEATURE_HIGHLIGHTS;
use crate::components::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div>
            // Hero
            <section class="bg-gradient-to-br from-indigo-900 via-blue-900 to-indigo-800 text-white">
                <div class="container mx-auto px-4 py-24">
                    <div class="max-w-4xl mx-auto text-center">
                        <h1 class="text-5xl md:text-6xl font-bold mb-6">
                            "Wi-Fi That Reaches "
                            <span class="text-transparent bg-clip-text bg-gradient-to-r from-cyan-400 to-blue-400">
                                "Every Room"
                            </span>
                        </h1>
                        <p class="text-xl md:text-2xl text-gray-300 mb-8">
                            "Find the weak spots in your network, then fix them with extenders "
                            "and mesh systems built for how you actually live and work."
                        </p>
                        <div class="flex flex-col sm:flex-row gap-4 justify-center">
                            <a href="/analyzer" class="px-8 py-4 bg-cyan-500 hover:bg-cyan-400 text-white font-semibold rounded-lg transition">
                                "Analyze My Network"
                            </a>
                            <a href="/solutions" class="px-8 py-4 bg-white/10 hover:bg-white/20 text-white font-semibold rounded-lg border border-white/30 transition">
                                "Browse Solutions"
                            </a>
                        </div>
                    </div>
                </div>
            </section>

            // Highlights
            <section class="py-20 bg-gray-50">
                <div class="container mx-auto px-4">
                    <div class="grid md:grid-cols-4 gap-8">
                        {FEATURE_HIGHLIGHTS.iter().map(|f| view! {
                            <FeatureHighlight icon=f.icon title=f.title description=f.description/>
                        }).collect_view()}
                    </div>
                </div>
            </section>

            // Entry points
            <section class="py-20 bg-white">
                <div class="container mx-auto px-4">
                    <div class="grid md:grid-cols-3 gap-8 max-w-5xl mx-auto">
                        <EntryCard
                            href="/analyzer"
                            icon="📶"
                            title="Network Analyzer"
                            description="Measure signal, speed, latency and congestion, then get prioritized advice."
                            action="Start Analysis"
                        />
                        <EntryCard
                            href="/solutions"
                            icon="📡"
                            title="Solutions"
                            description="Compare extenders and mesh systems for homes and businesses."
                            action="View Products"
                        />
                        <EntryCard
                            href="/support"
                            icon="🛟"
                            title="Support Center"
                            description="Search answers, download guides, or talk to an expert."
                            action="Get Help"
                        />
                    </div>
                </div>
            </section>
        </div>
    }
}

#[component]
fn EntryCard(
    href: &'static str,
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    action: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow-lg p-8 border hover:shadow-xl transition">
            <div class="text-4xl mb-4">{icon}</div>
            <h3 class="text-xl font-semibold text-gray-900 mb-2">{title}</h3>
            <p class="text-gray-600 mb-6">{description}</p>
            <a href=href class="inline-block px-6 py-3 bg-indigo-600 hover:bg-indigo-700 text-white font-semibold rounded-lg transition">
                {action}
            </a>
        </div>
    }
}
