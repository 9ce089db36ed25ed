//! Product solutions page

use leptos::*;
use wx_core::catalog::{
    products_in, Product, ProductCategory, UseCase, COMPARISON, FEATURE_HIGHLIGHTS, USE_CASES,
};
use crate::components::*;

#[component]
pub fn SolutionsPage() -> impl IntoView {
    let (category, set_category) = create_signal(ProductCategory::Home);

    view! {
        <div>
            // Hero
            <section class="bg-gradient-to-br from-gray-900 to-gray-800 text-white py-20">
                <div class="container mx-auto px-4">
                    <div class="max-w-3xl mx-auto text-center mb-12">
                        <h1 class="text-4xl md:text-5xl font-bold mb-6">"Wi-Fi Solutions for Every Space"</h1>
                        <p class="text-xl text-gray-300">
                            "From apartments to offices, pick the coverage you need and forget about dead zones."
                        </p>
                    </div>
                    <div class="grid md:grid-cols-4 gap-8 text-gray-100">
                        {FEATURE_HIGHLIGHTS.iter().map(|f| view! {
                            <div class="text-center">
                                <div class="text-3xl mb-3">{f.icon}</div>
                                <h3 class="font-semibold mb-2">{f.title}</h3>
                                <p class="text-sm text-gray-400">{f.description}</p>
                            </div>
                        }).collect_view()}
                    </div>
                </div>
            </section>

            // Products
            <section class="py-20 bg-gray-50">
                <div class="container mx-auto px-4">
                    <div class="flex justify-center gap-4 mb-12">
                        {ProductCategory::ALL.into_iter().map(|c| view! {
                            <button
                                class=move || if category.get() == c {
                                    "px-6 py-3 rounded-lg font-semibold bg-indigo-600 text-white"
                                } else {
                                    "px-6 py-3 rounded-lg font-semibold bg-white text-gray-700 border hover:bg-gray-100"
                                }
                                on:click=move |_| set_category.set(c)
                            >
                                {c.icon()} " " {c.name()}
                            </button>
                        }).collect_view()}
                    </div>
                    <p class="text-center text-gray-600 mb-8">{move || category.get().description()}</p>
                    <div class="grid md:grid-cols-3 gap-8 max-w-6xl mx-auto">
                        {move || products_in(category.get())
                            .map(|product| view! { <ProductCard product=*product/> })
                            .collect_view()}
                    </div>
                </div>
            </section>

            // Use cases
            <section class="py-20 bg-white">
                <div class="container mx-auto px-4">
                    <h2 class="text-3xl font-bold text-gray-900 text-center mb-12">"Built for How You Connect"</h2>
                    <div class="grid md:grid-cols-2 gap-8 max-w-5xl mx-auto">
                        {USE_CASES.iter().map(|u| view! { <UseCaseCard use_case=*u/> }).collect_view()}
                    </div>
                </div>
            </section>

            // Comparison
            <section class="py-20 bg-gray-50">
                <div class="container mx-auto px-4">
                    <h2 class="text-3xl font-bold text-gray-900 text-center mb-12">"Compare Home Solutions"</h2>
                    <div class="overflow-x-auto max-w-5xl mx-auto bg-white rounded-xl shadow">
                        <table class="min-w-full divide-y divide-gray-200">
                            <thead class="bg-gray-50">
                                <tr>
                                    <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Feature"</th>
                                    <th class="px-6 py-3 text-center text-xs font-medium text-gray-500 uppercase">"Basic"</th>
                                    <th class="px-6 py-3 text-center text-xs font-medium text-indigo-600 uppercase">"Pro"</th>
                                    <th class="px-6 py-3 text-center text-xs font-medium text-gray-500 uppercase">"Mesh"</th>
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-gray-200">
                                {COMPARISON.iter().map(|row| view! {
                                    <tr>
                                        <td class="px-6 py-3 font-medium text-gray-900">{row.feature}</td>
                                        <td class="px-6 py-3 text-center text-gray-700">{row.basic}</td>
                                        <td class="px-6 py-3 text-center text-gray-700 bg-indigo-50/50">{row.pro}</td>
                                        <td class="px-6 py-3 text-center text-gray-700">{row.mesh}</td>
                                    </tr>
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                </div>
            </section>

            // CTA
            <section class="py-20 bg-indigo-600 text-white">
                <div class="container mx-auto px-4 text-center">
                    <h2 class="text-3xl font-bold mb-4">"Not Sure Which One You Need?"</h2>
                    <p class="text-xl text-indigo-100 mb-8">
                        "Run a free network analysis and we'll point you to the right fix."
                    </p>
                    <a href="/analyzer" class="inline-block px-8 py-4 bg-white text-indigo-600 font-semibold rounded-lg hover:bg-gray-100 transition">
                        "Analyze My Network"
                    </a>
                </div>
            </section>
        </div>
    }
}

#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let border = if product.popular {
        "border-2 border-indigo-500"
    } else {
        "border border-gray-200"
    };

    view! {
        <div class=format!("relative bg-white rounded-xl shadow-lg p-8 {}", border)>
            {product.popular.then(|| view! {
                <span class="absolute -top-3 left-1/2 -translate-x-1/2 px-3 py-1 bg-indigo-600 text-white text-xs font-semibold rounded-full">
                    "Most Popular"
                </span>
            })}
            <h3 class="text-xl font-semibold text-gray-900 mb-1">{product.name}</h3>
            <div class="flex items-center text-sm text-gray-500 mb-4">
                <span class="text-yellow-500 mr-1">"★"</span>
                {format!("{:.1}", product.rating)}
                <span class="mx-2">"·"</span>
                {product.best_for}
            </div>
            <div class="text-4xl font-bold text-gray-900 mb-6">{product.price}</div>
            <dl class="space-y-2 text-sm mb-6">
                <div class="flex justify-between">
                    <dt class="text-gray-500">"Coverage"</dt>
                    <dd class="font-medium">{product.coverage}</dd>
                </div>
                <div class="flex justify-between">
                    <dt class="text-gray-500">"Speed"</dt>
                    <dd class="font-medium">{product.speeds}</dd>
                </div>
                <div class="flex justify-between">
                    <dt class="text-gray-500">"Devices"</dt>
                    <dd class="font-medium">{product.devices}</dd>
                </div>
            </dl>
            <ul class="space-y-2 mb-8">
                {product.features.into_iter().map(|f| view! { <CheckItem text=f/> }).collect_view()}
            </ul>
            <a href="/support" class="block w-full py-3 text-center bg-indigo-600 hover:bg-indigo-700 text-white font-semibold rounded-lg transition">
                "Get Started"
            </a>
        </div>
    }
}

#[component]
fn UseCaseCard(use_case: UseCase) -> impl IntoView {
    view! {
        <div class="border rounded-xl p-6">
            <div class="flex items-center mb-3">
                <span class="text-3xl mr-3">{use_case.icon}</span>
                <h3 class="text-lg font-semibold text-gray-900">{use_case.title}</h3>
            </div>
            <p class="text-gray-600 mb-4">{use_case.description}</p>
            <ul class="space-y-1 mb-4">
                {use_case.requirements.into_iter().map(|r| view! { <CheckItem text=r/> }).collect_view()}
            </ul>
            <Badge text=format!("Recommended: {}", use_case.recommendation) tone_class="bg-indigo-100 text-indigo-800"/>
        </div>
    }
}
