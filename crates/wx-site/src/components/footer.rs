//! Site footer

use leptos::*;
use wx_core::support::content::{SUPPORT_EMAIL, SUPPORT_PHONE};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-900 text-gray-400">
            <div class="container mx-auto px-4 py-12">
                <div class="grid md:grid-cols-3 gap-8">
                    <div>
                        <div class="flex items-center mb-4">
                            <span class="text-2xl mr-2">"📶"</span>
                            <span class="text-lg font-bold text-white">"Wi-Fi Extender Pro"</span>
                        </div>
                        <p class="text-sm">"Whole-home coverage without the dead zones."</p>
                    </div>
                    <div>
                        <h3 class="font-semibold text-white mb-3">"Explore"</h3>
                        <ul class="space-y-2 text-sm">
                            <li><a href="/solutions" class="hover:text-white">"Solutions"</a></li>
                            <li><a href="/analyzer" class="hover:text-white">"Network Analyzer"</a></li>
                            <li><a href="/support" class="hover:text-white">"Support Center"</a></li>
                        </ul>
                    </div>
                    <div>
                        <h3 class="font-semibold text-white mb-3">"Contact"</h3>
                        <ul class="space-y-2 text-sm">
                            <li>{SUPPORT_PHONE}</li>
                            <li>
                                <a href=format!("mailto:{}", SUPPORT_EMAIL) class="hover:text-white">{SUPPORT_EMAIL}</a>
                            </li>
                        </ul>
                    </div>
                </div>
                <div class="border-t border-gray-800 mt-8 pt-8 text-sm text-center">
                    "© Wi-Fi Extender Pro. All rights reserved."
                </div>
            </div>
        </footer>
    }
}
