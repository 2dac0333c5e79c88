//! Built-in category rules for snippet auto-tagging.
//!
//! The catalogue is plain data: each rule pairs a label with the matchers
//! that trigger it. New categories are added by appending to
//! [`BUILTIN_RULES`], never by adding branches to the classifier.

/// ASCII word boundary. Letters, digits and `_` are word characters, so
/// `map` matches in `items.map(f)` but not in `mapping`.
pub(crate) const WORD_BOUNDARY: &str = r"(?-u:\b)";

/// A single text pattern belonging to a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher<'a> {
    /// Whole-word alternation of literal keywords.
    ///
    /// Keywords are escaped, so `http.get` only matches a literal dot.
    /// Whitespace inside a keyword (`do while`) matches one or more
    /// whitespace characters.
    Words {
        words: &'a [&'a str],
        ignore_case: bool,
    },
    /// Raw regular expression, matched anywhere in the text.
    Pattern { regex: &'a str, ignore_case: bool },
}

impl<'a> Matcher<'a> {
    pub const fn words(words: &'a [&'a str]) -> Self {
        Self::Words {
            words,
            ignore_case: false,
        }
    }

    pub const fn words_ignore_case(words: &'a [&'a str]) -> Self {
        Self::Words {
            words,
            ignore_case: true,
        }
    }

    pub const fn pattern(regex: &'a str) -> Self {
        Self::Pattern {
            regex,
            ignore_case: false,
        }
    }

    pub fn ignore_case(&self) -> bool {
        match self {
            Self::Words { ignore_case, .. } | Self::Pattern { ignore_case, .. } => *ignore_case,
        }
    }
}

/// A labelled rule. Fires when any matcher matches at least once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryRule<'a> {
    pub label: &'a str,
    pub matchers: &'a [Matcher<'a>],
}

/// The fixed catalogue, evaluated in order.
///
/// `map` appears under both `loop` and `array-operations`, so any `.map(...)`
/// call is tagged with both.
pub const BUILTIN_RULES: &[CategoryRule<'static>] = &[
    CategoryRule {
        label: "loop",
        matchers: &[Matcher::words(&[
            "for", "while", "do while", "forEach", "map",
        ])],
    },
    CategoryRule {
        label: "api",
        matchers: &[Matcher::words(&[
            "fetch",
            "axios",
            "XMLHttpRequest",
            "http.get",
            "http.post",
        ])],
    },
    CategoryRule {
        label: "error-handling",
        matchers: &[
            Matcher::words(&["try", "catch", "throw", "finally"]),
            Matcher::words_ignore_case(&["error"]),
        ],
    },
    CategoryRule {
        label: "array-operations",
        matchers: &[Matcher::words(&[
            "map",
            "filter",
            "reduce",
            "some",
            "every",
            "find",
            "findIndex",
        ])],
    },
    CategoryRule {
        label: "debugging",
        matchers: &[
            Matcher::pattern(r"console\.(?:log|error|warn|info|debug)"),
            Matcher::pattern("debugger"),
        ],
    },
    CategoryRule {
        label: "async",
        matchers: &[
            Matcher::words(&["async", "await", "Promise"]),
            Matcher::pattern(r"\.then(?-u:\b)"),
        ],
    },
    CategoryRule {
        label: "dom-manipulation",
        matchers: &[
            Matcher::pattern(r"document\.(?:getElementById|querySelector|createElement)"),
            Matcher::words(&["innerHTML", "appendChild", "removeChild"]),
        ],
    },
    CategoryRule {
        label: "state-management",
        matchers: &[
            Matcher::words(&["useState", "useReducer", "useContext"]),
            Matcher::words(&["setState", "getState"]),
        ],
    },
];

/// Build the regex source for a whole-word keyword alternation.
pub(crate) fn words_source<S: AsRef<str>>(words: &[S]) -> String {
    let alternation = words
        .iter()
        .map(|word| keyword_source(word.as_ref()))
        .collect::<Vec<_>>()
        .join("|");
    format!("{WORD_BOUNDARY}(?:{alternation}){WORD_BOUNDARY}")
}

fn keyword_source(keyword: &str) -> String {
    keyword
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+")
}
