//! Sibling ordering shared by every tree view.

use std::cmp::Ordering;

use depot_model::Category;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Collation flavor used for label comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collation {
    /// Language-aware: case- and diacritic-insensitive.
    Language,
    /// Locale-neutral: case-insensitive only. Chosen when neither label
    /// starts with a word character, so punctuation-led names group
    /// predictably instead of following language tailoring.
    Default,
}

impl Collation {
    /// Pick the collation for a label pair.
    pub fn for_labels(a: &str, b: &str) -> Self {
        if starts_with_word_char(a) || starts_with_word_char(b) {
            Collation::Language
        } else {
            Collation::Default
        }
    }
}

fn starts_with_word_char(label: &str) -> bool {
    label
        .chars()
        .next()
        .is_some_and(|c| c.is_alphanumeric() || c == '_')
}

/// Case fold plus combining-mark removal, so "Café" and "cafe" compare
/// equal under the language collation.
fn fold_language(label: &str) -> String {
    label
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn fold_default(label: &str) -> String {
    label.to_lowercase()
}

/// Compare two display labels under the collation picked for the pair.
pub fn compare_labels(a: &str, b: &str) -> Ordering {
    match Collation::for_labels(a, b) {
        Collation::Language => fold_language(a).cmp(&fold_language(b)),
        Collation::Default => fold_default(a).cmp(&fold_default(b)),
    }
}

/// Total order over sibling nodes.
///
/// Dates and revisions are history entries, listed most recent first;
/// filesystem entries keep the folders-before-files convention
/// regardless of label text.
pub fn compare_nodes(
    category_a: Category,
    label_a: &str,
    category_b: Category,
    label_b: &str,
) -> Ordering {
    let text = compare_labels(label_a, label_b);
    if (category_a == Category::Date && category_b == Category::Date)
        || (category_a == Category::Revision && category_b == Category::Revision)
    {
        return text.reverse();
    }
    match (category_a.is_directory(), category_b.is_directory()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => text,
    }
}
