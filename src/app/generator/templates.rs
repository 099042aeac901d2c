//! Embedded snippet templates, grouped by content kind.

use crate::domain::ContentKind;

/// A structural template for one content kind.
#[derive(Debug, Clone, Copy)]
pub struct SnippetTemplate {
    pub name: &'static str,
    pub body: &'static str,
}

const PYTHON: &[SnippetTemplate] = &[
    SnippetTemplate { name: "accumulate", body: include_str!("templates/python_accumulate.tmpl") },
    SnippetTemplate {
        name: "comprehension",
        body: include_str!("templates/python_comprehension.tmpl"),
    },
    SnippetTemplate { name: "class", body: include_str!("templates/python_class.tmpl") },
];

const JAVASCRIPT: &[SnippetTemplate] = &[
    SnippetTemplate { name: "multiply", body: include_str!("templates/javascript_multiply.tmpl") },
    SnippetTemplate { name: "reduce", body: include_str!("templates/javascript_reduce.tmpl") },
    SnippetTemplate { name: "closure", body: include_str!("templates/javascript_closure.tmpl") },
];

const CPP: &[SnippetTemplate] = &[
    SnippetTemplate { name: "loop", body: include_str!("templates/cpp_loop.tmpl") },
    SnippetTemplate { name: "vector", body: include_str!("templates/cpp_vector.tmpl") },
];

const JAVA: &[SnippetTemplate] = &[
    SnippetTemplate { name: "instance", body: include_str!("templates/java_instance.tmpl") },
    SnippetTemplate { name: "static", body: include_str!("templates/java_static.tmpl") },
];

const HTML: &[SnippetTemplate] = &[
    SnippetTemplate { name: "page", body: include_str!("templates/html_page.tmpl") },
    SnippetTemplate { name: "cards", body: include_str!("templates/html_cards.tmpl") },
];

/// Structural templates available for `kind`. Never empty.
pub fn templates_for(kind: ContentKind) -> &'static [SnippetTemplate] {
    match kind {
        ContentKind::Python => PYTHON,
        ContentKind::JavaScript => JAVASCRIPT,
        ContentKind::Cpp => CPP,
        ContentKind::Java => JAVA,
        ContentKind::Html => HTML,
    }
}

/// Routine / page names substituted for `{{name}}`.
pub fn names_for(kind: ContentKind) -> &'static [&'static str] {
    match kind {
        ContentKind::Python => &[
            "calculate_fibonacci",
            "binary_search",
            "bubble_sort",
            "factorial",
            "is_prime",
            "count_vowels",
            "find_max",
        ],
        ContentKind::JavaScript => &[
            "calculateSum",
            "findAverage",
            "reverseArray",
            "countOccurrences",
            "shuffleArray",
            "isPalindrome",
        ],
        ContentKind::Cpp => &[
            "calculatePower",
            "findGCD",
            "sumArray",
            "findMax",
            "countDigits",
            "reverseNumber",
        ],
        ContentKind::Java => {
            &["processData", "calculateResult", "computeTotal", "scaleValue", "foldInput"]
        }
        ContentKind::Html => {
            &["Auto-Generated Page", "Daily Snapshot", "Random Showcase", "Number Board"]
        }
    }
}

/// Class names substituted for `{{class}}` (Java only).
pub const CLASS_NAMES: &[&str] = &[
    "Calculator",
    "NumberUtils",
    "ArrayHelper",
    "MathOperations",
    "DataValidator",
    "SortingUtils",
];

/// Colours substituted for `{{color}}` (HTML only).
pub const COLORS: &[&str] = &["red", "blue", "green", "purple", "orange", "pink", "teal"];
