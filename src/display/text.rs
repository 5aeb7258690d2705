//! Text normalization for product descriptions and category labels.

use std::sync::LazyLock;

use regex::Regex;

/// Separator between levels of a category path.
pub const CATEGORY_SEPARATOR: &str = " >> ";

/// Category labels longer than this are truncated for display.
const MAX_CATEGORY_LABEL: usize = 30;

/// Placeholder phrases that carry no product information, in French and
/// English.
static GENERIC_PHRASES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)marque\s+non\s+spécifiée|brand\s+not\s+specified|non\s+spécifié|not\s+specified|non\s+disponible|not\s+available|à\s+définir|to\s+be\s+defined|non\s+renseigné|not\s+provided",
    )
    .expect("Invalid generic phrase regex")
});

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// Removes placeholder phrases such as "brand not specified" and collapses
/// whitespace.
pub fn clean_generic_text(text: &str) -> String {
    let stripped = GENERIC_PHRASES.replace_all(text, "");
    WHITESPACE.replace_all(&stripped, " ").trim().to_string()
}

/// Joins the product fields into the text sent for classification.
pub fn compose_description(
    name: &str,
    brand: &str,
    description: &str,
    specifications: &str,
) -> String {
    clean_generic_text(&format!("{name} {brand} {description} {specifications}"))
}

/// Flattens tabs and newlines and keeps the first two sentences.
pub fn summarize_description(text: &str) -> String {
    let flat = text.replace(['\n', '\t'], " ");
    let flat = flat.trim();
    let sentences: Vec<&str> = flat.split(". ").collect();
    if sentences.len() > 2 {
        format!("{}.", sentences[..2].join(". "))
    } else {
        flat.to_string()
    }
}

/// Short label for a category: its top level, or a truncated name.
pub fn shorten_category_name(category: &str) -> String {
    if let Some((top, _)) = category.split_once(CATEGORY_SEPARATOR) {
        return top.to_string();
    }
    if category.chars().count() > MAX_CATEGORY_LABEL {
        let head: String = category.chars().take(MAX_CATEGORY_LABEL - 3).collect();
        return format!("{head}...");
    }
    category.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_placeholders_case_insensitively() {
        assert_eq!(
            clean_generic_text("Watch  Brand NOT specified\tanalog   dial"),
            "Watch analog dial"
        );
        assert_eq!(clean_generic_text("Montre marque non spécifiée"), "Montre");
        assert_eq!(clean_generic_text("price not available"), "price");
    }

    #[test]
    fn compose_joins_and_cleans() {
        let text = compose_description("Escort Watch", "not provided", "Analog watch.", "");
        assert_eq!(text, "Escort Watch Analog watch.");
    }

    #[test]
    fn summary_keeps_two_sentences() {
        let text = "First line.\nSecond part. Third\tpart. Fourth.";
        assert_eq!(summarize_description(text), "First line. Second part.");
    }

    #[test]
    fn short_summary_is_unchanged() {
        assert_eq!(summarize_description("  One. Two  "), "One. Two");
        assert_eq!(summarize_description(""), "");
    }

    #[test]
    fn category_uses_top_level() {
        assert_eq!(
            shorten_category_name("Watches >> Wrist Watches >> Men"),
            "Watches"
        );
    }

    #[test]
    fn long_category_is_truncated() {
        let long = "Home Decor & Festive Needs With Lights";
        let short = shorten_category_name(long);
        assert_eq!(short, "Home Decor & Festive Needs ...");
        assert_eq!(short.chars().count(), 30);
        assert_eq!(shorten_category_name("Baby Care"), "Baby Care");
    }
}
