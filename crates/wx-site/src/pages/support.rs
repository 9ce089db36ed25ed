//! Support center page

use leptos::*;
use wx_core::support::content::{
    CONTACT_OPTIONS, RESOURCES, SUPPORT_CATEGORIES, SUPPORT_EMAIL, SUPPORT_PHONE, SUPPORT_REQUEST_SUBMITTED,
};
use wx_core::support::{results_summary, search, ContactOption};
use wx_core::{CategoryFilter, Notice};
use crate::components::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SupportTab {
    Faq,
    Resources,
    Contact,
}

impl SupportTab {
    const ALL: [SupportTab; 3] = [SupportTab::Faq, SupportTab::Resources, SupportTab::Contact];

    fn label(&self) -> &'static str {
        match self {
            SupportTab::Faq => "FAQ",
            SupportTab::Resources => "Resources",
            SupportTab::Contact => "Contact",
        }
    }
}

#[component]
pub fn SupportPage() -> impl IntoView {
    let (query, set_query) = create_signal(String::new());
    let (tab, set_tab) = create_signal(SupportTab::Faq);

    view! {
        <div>
            // Hero
            <section class="bg-gradient-to-br from-indigo-900 to-blue-800 text-white py-20">
                <div class="container mx-auto px-4">
                    <div class="max-w-3xl mx-auto text-center">
                        <h1 class="text-4xl md:text-5xl font-bold mb-6">"How Can We Help?"</h1>
                        <p class="text-xl text-gray-300 mb-8">
                            "Search our knowledge base or reach out to a Wi-Fi expert."
                        </p>
                        <input
                            type="text"
                            placeholder="Search for answers..."
                            class="w-full px-6 py-4 rounded-lg text-gray-900 focus:ring-2 focus:ring-cyan-400"
                            on:input=move |ev| set_query.set(event_target_value(&ev))
                            prop:value=query
                        />
                    </div>
                </div>
            </section>

            // Contact options
            <section class="py-12 bg-gray-50">
                <div class="container mx-auto px-4">
                    <div class="grid md:grid-cols-3 gap-6 max-w-5xl mx-auto">
                        {CONTACT_OPTIONS.iter().map(|o| view! { <ContactCard option=*o/> }).collect_view()}
                    </div>
                </div>
            </section>

            // Tabs
            <section class="py-12 bg-white">
                <div class="container mx-auto px-4 max-w-6xl">
                    <div class="flex border-b mb-8">
                        {SupportTab::ALL.into_iter().map(|t| view! {
                            <TabButton
                                label=t.label()
                                active=Signal::derive(move || tab.get() == t)
                                on_select=move |_| set_tab.set(t)
                            />
                        }).collect_view()}
                    </div>
                    {move || match tab.get() {
                        SupportTab::Faq => view! { <FaqPanel query=query set_query=set_query/> }.into_view(),
                        SupportTab::Resources => view! { <ResourcesPanel/> }.into_view(),
                        SupportTab::Contact => view! { <ContactPanel/> }.into_view(),
                    }}
                </div>
            </section>
        </div>
    }
}

#[component]
fn ContactCard(option: ContactOption) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow p-6 text-center">
            <div class="text-4xl mb-3">{option.icon}</div>
            <h3 class="text-lg font-semibold text-gray-900 mb-1">{option.title}</h3>
            <p class="text-sm text-gray-600 mb-4">{option.description}</p>
            <div class="text-xs text-gray-500 space-y-1 mb-4">
                <div>"Available: " {option.availability}</div>
                <div>"Response: " {option.response_time}</div>
            </div>
            <button class="w-full py-2 bg-indigo-600 hover:bg-indigo-700 text-white font-semibold rounded-lg transition">
                {option.action}
            </button>
        </div>
    }
}

#[component]
fn FaqPanel(query: ReadSignal<String>, set_query: WriteSignal<String>) -> impl IntoView {
    let (filter, set_filter) = create_signal(CategoryFilter::All);
    let (expanded, set_expanded) = create_signal(None::<&'static str>);

    let results = create_memo(move |_| query.with(|q| search(q, filter.get())));

    view! {
        <div class="grid md:grid-cols-4 gap-8">
            // Category sidebar
            <aside class="space-y-1">
                {SUPPORT_CATEGORIES.iter().map(|c| {
                    let c = *c;
                    view! {
                        <button
                            class=move || if filter.get() == c.filter {
                                "w-full flex justify-between px-4 py-2 rounded-lg bg-indigo-50 text-indigo-700 font-medium"
                            } else {
                                "w-full flex justify-between px-4 py-2 rounded-lg text-gray-700 hover:bg-gray-50"
                            }
                            on:click=move |_| set_filter.set(c.filter)
                        >
                            <span>{c.name}</span>
                            <span class="text-sm text-gray-400">{c.count}</span>
                        </button>
                    }
                }).collect_view()}
            </aside>

            <div class="md:col-span-3">
                <p class="text-sm text-gray-500 mb-4">
                    {move || query.with(|q| results_summary(results.with(Vec::len), q))}
                </p>
                <Show
                    when=move || results.with(|r| !r.is_empty())
                    fallback=move || view! {
                        <div class="text-center py-12">
                            <div class="text-5xl mb-4">"🔍"</div>
                            <h3 class="text-xl font-bold text-gray-900 mb-2">"No results found"</h3>
                            <p class="text-gray-600 mb-6">"Try different keywords or browse another category."</p>
                            <button
                                class="px-6 py-2 border rounded-lg text-gray-700 hover:bg-gray-50"
                                on:click=move |_| set_query.set(String::new())
                            >
                                "Clear Search"
                            </button>
                        </div>
                    }
                >
                    <div class="space-y-3">
                        {move || results.get().into_iter().map(|entry| {
                            let is_open = move || expanded.get() == Some(entry.question);
                            view! {
                                <div class="border rounded-lg">
                                    <button
                                        class="w-full flex justify-between items-center px-5 py-4 text-left font-medium text-gray-900"
                                        on:click=move |_| set_expanded.update(|open| {
                                            *open = if *open == Some(entry.question) { None } else { Some(entry.question) };
                                        })
                                    >
                                        {entry.question}
                                        <span class="text-gray-400">{move || if is_open() { "−" } else { "+" }}</span>
                                    </button>
                                    <Show when=is_open>
                                        <p class="px-5 pb-4 text-gray-600">{entry.answer}</p>
                                    </Show>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn ResourcesPanel() -> impl IntoView {
    view! {
        <div class="grid md:grid-cols-2 gap-6">
            {RESOURCES.iter().map(|r| view! {
                <div class="flex items-start border rounded-xl p-6">
                    <div class="text-4xl mr-4">{r.icon}</div>
                    <div class="flex-1">
                        <div class="flex items-center gap-2 mb-1">
                            <h3 class="font-semibold text-gray-900">{r.title}</h3>
                            <Badge text=r.kind/>
                        </div>
                        <p class="text-sm text-gray-600 mb-2">{r.description}</p>
                        <p class="text-xs text-gray-500">{r.detail.describe()}</p>
                    </div>
                    <button class="ml-4 px-4 py-2 border rounded-lg text-sm text-gray-700 hover:bg-gray-50">
                        "Download"
                    </button>
                </div>
            }).collect_view()}
        </div>
    }
}

#[component]
fn ContactPanel() -> impl IntoView {
    let toaster = use_toaster();
    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (subject, set_subject) = create_signal(String::new());
    let (message, set_message) = create_signal(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        tracing::info!(subject = %subject.get_untracked(), "Support request submitted");
        toaster.push(Notice::success(SUPPORT_REQUEST_SUBMITTED));
        set_name.set(String::new());
        set_email.set(String::new());
        set_subject.set(String::new());
        set_message.set(String::new());
    };

    view! {
        <div class="grid md:grid-cols-2 gap-12">
            <form on:submit=on_submit class="space-y-5">
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-2">"Name"</label>
                    <input
                        type="text"
                        required
                        class="w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-indigo-500"
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                        prop:value=name
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-2">"Email"</label>
                    <input
                        type="email"
                        required
                        class="w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-indigo-500"
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        prop:value=email
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-2">"Subject"</label>
                    <input
                        type="text"
                        required
                        class="w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-indigo-500"
                        on:input=move |ev| set_subject.set(event_target_value(&ev))
                        prop:value=subject
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-2">"Message"</label>
                    <textarea
                        rows="5"
                        required
                        class="w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-indigo-500"
                        placeholder="Describe your issue..."
                        on:input=move |ev| set_message.set(event_target_value(&ev))
                        prop:value=message
                    ></textarea>
                </div>
                <button
                    type="submit"
                    class="w-full py-4 bg-indigo-600 hover:bg-indigo-700 text-white font-semibold rounded-lg transition"
                >
                    "Submit Request"
                </button>
            </form>

            <div class="space-y-6">
                <h2 class="text-2xl font-bold text-gray-900">"Other Ways to Reach Us"</h2>
                <div class="flex items-start">
                    <div class="flex-shrink-0 w-12 h-12 bg-indigo-100 rounded-lg flex items-center justify-center">"📞"</div>
                    <div class="ml-4">
                        <h3 class="font-semibold text-gray-900">"Phone"</h3>
                        <p class="text-gray-600">{SUPPORT_PHONE}</p>
                    </div>
                </div>
                <div class="flex items-start">
                    <div class="flex-shrink-0 w-12 h-12 bg-indigo-100 rounded-lg flex items-center justify-center">"📧"</div>
                    <div class="ml-4">
                        <h3 class="font-semibold text-gray-900">"Email"</h3>
                        <p class="text-gray-600">{SUPPORT_EMAIL}</p>
                    </div>
                </div>
            </div>
        </div>
    }
}
