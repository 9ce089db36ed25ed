//! Frequently asked questions and the search over them

use super::{CategoryFilter, FaqCategory, FaqEntry};

pub static FAQS: [FaqEntry; 8] = [
    FaqEntry {
        category: FaqCategory::Setup,
        question: "How do I set up my Wi-Fi extender for the first time?",
        answer: "Setting up your Wi-Fi extender is simple: 1) Plug in the extender halfway between your router and the dead zone area. 2) Wait for the power LED to turn solid green. 3) Connect to the extender's setup network from your device. 4) Open your web browser and follow the setup wizard. 5) Choose your main network and enter the password. The entire process takes about 5 minutes.",
    },
    FaqEntry {
        category: FaqCategory::Setup,
        question: "Where should I place my Wi-Fi extender for optimal performance?",
        answer: "For best results, place your extender: 1) Halfway between your router and the area with poor coverage. 2) In an open area, not inside cabinets or behind furniture. 3) Away from interference sources like microwaves, baby monitors, or metal objects. 4) At a similar height to your router. 5) Use our mobile app's placement assistant for personalized recommendations.",
    },
    FaqEntry {
        category: FaqCategory::Troubleshooting,
        question: "My extender shows connected but I have no internet access. What should I do?",
        answer: "This usually indicates a connection issue between the extender and your main router: 1) Check that your main router has internet connectivity. 2) Move the extender closer to the router temporarily. 3) Restart both the router and extender. 4) Reset the extender and reconfigure it. 5) Check for interference from other devices. If the problem persists, contact our support team.",
    },
    FaqEntry {
        category: FaqCategory::Troubleshooting,
        question: "Why are my internet speeds slower when connected to the extender?",
        answer: "Some speed reduction is normal with extenders, but here's how to minimize it: 1) Ensure optimal placement (not too far from the router). 2) Use the 5 GHz band when possible for better speeds. 3) Update your extender's firmware. 4) Check for interference from other devices. 5) Consider upgrading to a mesh system for better performance. Our Pro models maintain up to 80% of original speeds.",
    },
    FaqEntry {
        category: FaqCategory::Features,
        question: "How do I enable guest network on my Wi-Fi extender?",
        answer: "To set up a guest network: 1) Connect to your extender's admin panel via web browser. 2) Navigate to Wireless Settings > Guest Network. 3) Enable the guest network feature. 4) Set a network name (SSID) and password. 5) Configure access restrictions if needed. 6) Save the settings. Guest networks provide secure access for visitors without sharing your main network password.",
    },
    FaqEntry {
        category: FaqCategory::Features,
        question: "Can I use multiple extenders with the same router?",
        answer: "Yes, you can use multiple extenders to cover larger areas: 1) Set up each extender individually. 2) Space them strategically to avoid overlap. 3) Use different channels if possible to reduce interference. 4) Monitor performance to ensure optimal coverage. For very large homes, consider our Mesh Network System which is specifically designed for seamless multi-device coverage.",
    },
    FaqEntry {
        category: FaqCategory::Technical,
        question: "How do I update my extender's firmware?",
        answer: "Keep your extender updated for best performance: 1) Connect to the extender's admin panel. 2) Go to Administration > Firmware Update. 3) Check current version and available updates. 4) Download and install updates (don't power off during update). 5) Many newer models support automatic updates. Check our website's support section for the latest firmware versions for your model.",
    },
    FaqEntry {
        category: FaqCategory::Technical,
        question: "What do the different LED indicators mean?",
        answer: "LED indicators show your extender's status: Power LED - Solid green: Ready, Blinking green: Starting up, Red: Error. Wi-Fi LED - Solid blue: Good connection to router, Blinking blue: Connecting, Red: Poor connection. Ethernet LED - Solid green: Active connection, Off: No connection. Refer to your model's manual for specific indicator meanings as they may vary.",
    },
];

/// Entries matching `filter` whose question or answer contains `query`,
/// ignoring case. An empty query matches everything. Source order is kept.
pub fn filter_faqs<'a>(entries: &'a [FaqEntry], query: &str, filter: CategoryFilter) -> Vec<&'a FaqEntry> {
    let needle = query.to_lowercase();

    entries
        .iter()
        .filter(|faq| filter.matches(faq.category))
        .filter(|faq| {
            needle.is_empty()
                || faq.question.to_lowercase().contains(&needle)
                || faq.answer.to_lowercase().contains(&needle)
        })
        .collect()
}

/// [`filter_faqs`] over the built-in list
pub fn search(query: &str, filter: CategoryFilter) -> Vec<&'static FaqEntry> {
    filter_faqs(&FAQS, query, filter)
}

/// Header line for a result list, e.g. `3 questions found for "router"`
pub fn results_summary(count: usize, query: &str) -> String {
    if query.is_empty() {
        format!("{} questions found", count)
    } else {
        format!("{} questions found for \"{}\"", count, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_category_without_query() {
        let results = search("", CategoryFilter::Only(FaqCategory::Setup));
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].question, FAQS[0].question);
        assert_eq!(results[1].question, FAQS[1].question);
    }

    #[test]
    fn test_all_without_query_returns_everything() {
        assert_eq!(search("", CategoryFilter::All).len(), FAQS.len());
    }

    #[test]
    fn test_firmware_query_is_case_insensitive() {
        let results = search("FirmWare", CategoryFilter::All);

        assert!(results
            .iter()
            .any(|f| f.question == "How do I update my extender's firmware?"));
        for faq in &results {
            let haystack = format!("{} {}", faq.question, faq.answer).to_lowercase();
            assert!(haystack.contains("firmware"));
        }
        // troubleshooting speeds entry mentions firmware in its answer
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].category, FaqCategory::Troubleshooting);
        assert_eq!(results[1].category, FaqCategory::Technical);
    }

    #[test]
    fn test_query_and_category_combine() {
        let results = search("firmware", CategoryFilter::Only(FaqCategory::Technical));
        assert_eq!(results.len(), 1);

        assert!(search("firmware", CategoryFilter::Only(FaqCategory::Features)).is_empty());
    }

    #[test]
    fn test_no_matches() {
        assert!(search("bluetooth pairing", CategoryFilter::All).is_empty());
    }

    #[test]
    fn test_results_summary() {
        assert_eq!(results_summary(8, ""), "8 questions found");
        assert_eq!(results_summary(0, "xyz"), "0 questions found for \"xyz\"");
    }
}
