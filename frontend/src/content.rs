//! Copy shown on the landing page. Everything here is fixed at compile time and
//! rendered in the order it is declared.

use crate::components::icons::Icon;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const CHORD_VARIATIONS: [&str; 26] = [
    "Major",
    "Minor",
    "7ths (Dominant)",
    "Maj7",
    "m7",
    "m7(b5)",
    "dim7",
    "sus4",
    "7sus4",
    "6ths",
    "m6",
    "9ths",
    "add9",
    "m9",
    "Maj9",
    "11ths",
    "m11",
    "13ths",
    "7(b9)",
    "7(#9)",
    "7(b5)",
    "7(#5)",
    "Maj7(#11)",
    "m(Maj7)",
    "dim",
    "aug",
];

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: Icon::Layers,
        title: "312 Detailed Diagrams",
        description: "Clear visualization of every position on the keyboard for immediate learning.",
    },
    Feature {
        icon: Icon::Music,
        title: "26 Variations per Key",
        description: "From basic triads to the most complex extensions (9ths, 11ths, 13ths).",
    },
    Feature {
        icon: Icon::Printer,
        title: "Print-Ready A4 Format",
        description: "Specifically designed for your physical music stand without complications.",
    },
    Feature {
        icon: Icon::Keyboard,
        title: "Virtual Keyboard Visualization",
        description: "Intuitive graphics that mimic the real view of a piano or keyboard.",
    },
];

pub const FAQS: &[FaqItem] = &[
    FaqItem {
        question: "How do I receive the material?",
        answer: "Immediately after your purchase, you will receive an email with the direct download link for the PDF. You can save it on any device.",
    },
    FaqItem {
        question: "Is it suitable for beginners?",
        answer: "Absolutely! The dictionary includes everything from the most basic to the most advanced chords, allowing you to grow at your own pace.",
    },
    FaqItem {
        question: "Can I print it?",
        answer: "Yes, the file is optimized in high-resolution A4 format so that the printing is sharp and professional.",
    },
    FaqItem {
        question: "What if I have questions about the chords?",
        answer: "The guide is purely visual and self-explanatory, designed to be a quick reference while you practice or compose.",
    },
];

pub const PROBLEM_POINTS: &[&str] = &[
    "Slow Google searches that cut your inspiration.",
    "Confusing or incorrect diagrams.",
    "Lack of organization by keys and variations.",
];

pub const SOLUTION_POINTS: &[&str] = &[
    "Instant access to 312 organized chords.",
    "Visual design optimized for fast learning.",
    "Physical material: Print and place on your stand.",
];

pub const PRICING_INCLUSIONS: &[&str] = &[
    "312 High-resolution diagrams",
    "26 Variations in all keys",
    "Print-ready A4 format",
    "Lifetime access",
    "Free updates",
];

/// Seeds for the placeholder avatars in the hero social-proof row.
pub const AVATAR_SEEDS: [u32; 3] = [11, 12, 13];

// Marketing claims, shown as written.
pub const SOCIAL_PROOF: &str = "+500 musicians already use it";
pub const EXPERIENCE_YEARS: &str = "10+";

/// Stars in the author rating. Always five.
pub const RATING_STARS: usize = 5;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn twenty_six_distinct_variations() {
        let unique: HashSet<_> = CHORD_VARIATIONS.iter().collect();
        assert_eq!(unique.len(), 26);
        assert_eq!(CHORD_VARIATIONS.first(), Some(&"Major"));
        assert_eq!(CHORD_VARIATIONS.last(), Some(&"aug"));
    }

    #[test]
    fn faq_starts_with_delivery_question() {
        assert_eq!(FAQS[0].question, "How do I receive the material?");
        assert!(FAQS.iter().all(|f| !f.answer.is_empty()));
    }

    #[test]
    fn feature_titles_match_variation_count() {
        let titled = format!("{} Variations per Key", CHORD_VARIATIONS.len());
        assert!(FEATURES.iter().any(|f| f.title == titled));
    }
}
