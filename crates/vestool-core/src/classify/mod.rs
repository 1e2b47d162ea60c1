//! Rule-based category classification.
//!
//! Three tiers, each evaluated fully before falling to the next:
//! exact `app_id` overrides, ordered `app_id` pattern groups, then title
//! keywords. Anything left over is [`Category::Other`]. The result depends
//! only on `app_id` and `title`.

mod category;
pub mod rules;

pub use category::{Category, UnknownCategory};

use crate::model::AppRecord;
use rules::{ID_OVERRIDES, ID_PATTERN_GROUPS, TITLE_KEYWORDS};

/// Outcome of one classification tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleMatch {
    Matched(Category),
    NoMatch,
}

impl RuleMatch {
    /// Runs the next tier only if this one did not match.
    pub fn or_else(self, next: impl FnOnce() -> RuleMatch) -> RuleMatch {
        match self {
            RuleMatch::Matched(_) => self,
            RuleMatch::NoMatch => next(),
        }
    }

    pub fn unwrap_or(self, default: Category) -> Category {
        match self {
            RuleMatch::Matched(c) => c,
            RuleMatch::NoMatch => default,
        }
    }
}

impl From<Option<Category>> for RuleMatch {
    fn from(found: Option<Category>) -> Self {
        found.map_or(RuleMatch::NoMatch, RuleMatch::Matched)
    }
}

/// Assigns exactly one category to an app.
pub fn classify(app: &AppRecord) -> Category {
    classify_parts(&app.app_id, app.title.as_deref())
}

/// Classifies from the two inputs that matter.
pub fn classify_parts(app_id: &str, title: Option<&str>) -> Category {
    let id = app_id.to_lowercase();
    match_override(&id)
        .or_else(|| match_id_patterns(&id))
        .or_else(|| title.map_or(RuleMatch::NoMatch, |t| match_title(&t.to_lowercase())))
        .unwrap_or(Category::Other)
}

/// Tier 1: exact lower-cased id.
pub fn match_override(id: &str) -> RuleMatch {
    ID_OVERRIDES
        .iter()
        .find(|(known, _)| *known == id)
        .map(|(_, category)| *category)
        .into()
}

/// Tier 2: first group with any matching pattern.
pub fn match_id_patterns(id: &str) -> RuleMatch {
    ID_PATTERN_GROUPS
        .iter()
        .find(|group| group.patterns.iter().any(|p| p.matches(id)))
        .map(|group| group.category)
        .into()
}

/// Tier 3: first category with a keyword contained in the lower-cased title.
pub fn match_title(title: &str) -> RuleMatch {
    TITLE_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| title.contains(k)))
        .map(|(category, _)| *category)
        .into()
}
