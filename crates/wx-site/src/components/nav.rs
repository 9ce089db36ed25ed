//! Marketing navigation component

use leptos::*;

const LINKS: [(&str, &str); 3] = [
    ("/solutions", "Solutions"),
    ("/analyzer", "Network Analyzer"),
    ("/support", "Support"),
];

#[component]
pub fn MarketingNav() -> impl IntoView {
    let (mobile_open, set_mobile_open) = create_signal(false);

    view! {
        <nav class="bg-white shadow-sm sticky top-0 z-50">
            <div class="container mx-auto px-4">
                <div class="flex justify-between h-16">
                    // Logo
                    <div class="flex items-center">
                        <a href="/" class="flex items-center">
                            <span class="text-2xl mr-2">"📶"</span>
                            <span class="text-xl font-bold text-gray-900">"Wi-Fi Extender Pro"</span>
                        </a>
                    </div>

                    // Desktop Nav
                    <div class="hidden md:flex items-center space-x-8">
                        {LINKS.iter().map(|&(href, label)| view! {
                            <a href=href class="text-gray-600 hover:text-gray-900 transition">{label}</a>
                        }).collect_view()}
                        <a href="/analyzer" class="px-4 py-2 bg-indigo-600 hover:bg-indigo-700 text-white font-medium rounded-lg transition">
                            "Test Your Network"
                        </a>
                    </div>

                    // Mobile menu button
                    <div class="md:hidden flex items-center">
                        <button
                            class="p-2 rounded-md text-gray-600 hover:text-gray-900 hover:bg-gray-100"
                            on:click=move |_| set_mobile_open.update(|v| *v = !*v)
                        >
                            <Show
                                when=move || mobile_open.get()
                                fallback=|| view! {
                                    <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"/>
                                    </svg>
                                }
                            >
                                <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/>
                                </svg>
                            </Show>
                        </button>
                    </div>
                </div>
            </div>

            // Mobile menu
            <Show when=move || mobile_open.get()>
                <div class="md:hidden border-t border-gray-200">
                    <div class="px-4 py-4 space-y-3">
                        {LINKS.iter().map(|&(href, label)| view! {
                            <a
                                href=href
                                class="block text-gray-600 hover:text-gray-900"
                                on:click=move |_| set_mobile_open.set(false)
                            >
                                {label}
                            </a>
                        }).collect_view()}
                    </div>
                </div>
            </Show>
        </nav>
    }
}
