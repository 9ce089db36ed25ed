//! Main application component

use leptos::*;
use leptos_router::*;
use wx_core::AnalysisConfig;
use crate::pages::*;
use crate::components::*;

#[component]
pub fn App() -> impl IntoView {
    let config = AnalysisConfig::default();
    provide_context(Toaster::new(config.toast_lifetime()));
    provide_context(config);

    view! {
        <Router>
            <div class="min-h-screen bg-white">
                <MarketingNav/>
                <main>
                    <Routes>
                        <Route path="/" view=HomePage/>
                        <Route path="/analyzer" view=AnalyzerPage/>
                        <Route path="/solutions" view=SolutionsPage/>
                        <Route path="/support" view=SupportPage/>
                    </Routes>
                </main>
                <Footer/>
                <ToastRegion/>
            </div>
        </Router>
    }
}
