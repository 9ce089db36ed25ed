//! Card and badge components shared by the pages

use leptos::*;
use wx_core::{Priority, Tone};

/// Text colour class for a tier tone
pub fn tone_text(tone: Tone) -> &'static str {
    match tone {
        Tone::Green => "text-green-600",
        Tone::Blue => "text-blue-600",
        Tone::Yellow => "text-yellow-600",
        Tone::Red => "text-red-600",
        Tone::Gray => "text-gray-600",
    }
}

/// Bar colour class for a tier tone
pub fn tone_bar(tone: Tone) -> &'static str {
    match tone {
        Tone::Green => "bg-green-500",
        Tone::Blue => "bg-blue-500",
        Tone::Yellow => "bg-yellow-500",
        Tone::Red => "bg-red-500",
        Tone::Gray => "bg-gray-400",
    }
}

#[component]
pub fn PageHeader(
    title: &'static str,
    subtitle: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="bg-white/95 backdrop-blur border-b">
            <div class="container mx-auto px-4 py-4">
                <div class="flex items-center justify-between">
                    <div class="flex items-center gap-4">
                        <a href="/" class="w-10 h-10 flex items-center justify-center border rounded-lg text-gray-600 hover:bg-gray-50">
                            "←"
                        </a>
                        <div>
                            <h1 class="text-2xl font-bold text-gray-900">{title}</h1>
                            <p class="text-gray-500">{subtitle}</p>
                        </div>
                    </div>
                    {children()}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn FeatureHighlight(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="text-center">
            <div class="text-3xl mb-3">{icon}</div>
            <h3 class="font-semibold text-gray-900 mb-2">{title}</h3>
            <p class="text-sm text-gray-600">{description}</p>
        </div>
    }
}

#[component]
pub fn MetricTile(
    icon: &'static str,
    value: String,
    label: &'static str,
) -> impl IntoView {
    view! {
        <div class="text-center p-4 rounded-lg bg-gray-50">
            <div class="text-3xl mb-2">{icon}</div>
            <div class="text-2xl font-bold text-gray-900">{value}</div>
            <div class="text-sm text-gray-500">{label}</div>
        </div>
    }
}

/// Horizontal bar filled to `value` percent
#[component]
pub fn ProgressBar(
    #[prop(into)] value: MaybeSignal<f64>,
    #[prop(default = "bg-indigo-600")] bar_class: &'static str,
    #[prop(default = "h-2")] height: &'static str,
) -> impl IntoView {
    let width = move || format!("width: {:.0}%", value.get().clamp(0.0, 100.0));

    view! {
        <div class=format!("w-full bg-gray-200 rounded-full overflow-hidden {}", height)>
            <div class=format!("{} {} rounded-full transition-all duration-500", bar_class, height) style=width></div>
        </div>
    }
}

#[component]
pub fn Badge(
    #[prop(into)] text: String,
    #[prop(default = "bg-gray-100 text-gray-800")] tone_class: &'static str,
) -> impl IntoView {
    view! {
        <span class=format!("inline-block px-2 py-1 text-xs font-medium rounded-full {}", tone_class)>
            {text}
        </span>
    }
}

#[component]
pub fn PriorityBadge(priority: Priority) -> impl IntoView {
    let tone_class = match priority {
        Priority::High => "bg-red-100 text-red-800",
        Priority::Medium => "bg-indigo-100 text-indigo-800",
        Priority::Low => "bg-gray-100 text-gray-800",
    };

    view! { <Badge text=format!("{} Priority", priority) tone_class=tone_class/> }
}

#[component]
pub fn CheckItem(#[prop(into)] text: String) -> impl IntoView {
    view! {
        <li class="flex items-center text-sm">
            <span class="text-green-500 mr-2 font-bold">"✓"</span>
            <span class="text-gray-700">{text}</span>
        </li>
    }
}

/// Underlined tab button; `active` decides the highlight
#[component]
pub fn TabButton(
    label: &'static str,
    #[prop(into)] active: Signal<bool>,
    #[prop(into)] on_select: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            class=move || if active.get() {
                "px-4 py-2 font-medium border-b-2 border-indigo-600 text-indigo-600"
            } else {
                "px-4 py-2 font-medium border-b-2 border-transparent text-gray-500 hover:text-gray-900"
            }
            on:click=move |_| on_select.call(())
        >
            {label}
        </button>
    }
}
