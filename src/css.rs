//! Minimal CSS text assembly.
//!
//! Style fragments describe their rules with [`Rule`] values and write them
//! into a [`StyleSheet`]. Every declaration is emitted with `!important`
//! because the injected rules must win over the host framework's own
//! stylesheet.

use std::fmt::{self, Write};

/// A single CSS rule: a selector list and its declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    selectors: Vec<&'static str>,
    declarations: Vec<(&'static str, String)>,
}

impl Rule {
    /// Starts a rule matching any of `selectors`.
    pub fn new(selectors: &[&'static str]) -> Self {
        Self {
            selectors: selectors.to_vec(),
            declarations: Vec::new(),
        }
    }

    /// Adds a `property: value` declaration.
    pub fn decl(mut self, property: &'static str, value: impl fmt::Display) -> Self {
        self.declarations.push((property, value.to_string()));
        self
    }

    /// Returns the selectors of this rule.
    pub fn selectors(&self) -> &[&'static str] {
        &self.selectors
    }

    /// Returns the value declared for `property`, if any.
    pub fn value_of(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {{", self.selectors.join(",\n"))?;
        for (property, value) in &self.declarations {
            writeln!(f, "    {property}: {value} !important;")?;
        }
        f.write_str("}\n")
    }
}

/// Ordered CSS text built from comments and rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleSheet {
    text: String,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a `/* ... */` comment line.
    pub fn comment(&mut self, text: &str) -> &mut Self {
        // Writing into a String cannot fail.
        let _ = writeln!(self.text, "/* {text} */");
        self
    }

    /// Appends a rule followed by a blank line.
    pub fn rule(&mut self, rule: Rule) -> &mut Self {
        let _ = writeln!(self.text, "{rule}");
        self
    }

    /// Appends every rule in order.
    pub fn rules(&mut self, rules: impl IntoIterator<Item = Rule>) -> &mut Self {
        for rule in rules {
            self.rule(rule);
        }
        self
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_renders_selectors_and_important_declarations() {
        let rule = Rule::new(&["h1", ".title"])
            .decl("color", "#ffffff")
            .decl("font-size", "2rem");

        assert_eq!(
            rule.to_string(),
            "h1,\n.title {\n    color: #ffffff !important;\n    font-size: 2rem !important;\n}\n"
        );
        assert_eq!(rule.value_of("font-size"), Some("2rem"));
        assert_eq!(rule.value_of("margin"), None);
    }

    #[test]
    fn stylesheet_keeps_insertion_order() {
        let mut sheet = StyleSheet::new();
        sheet
            .comment("header")
            .rule(Rule::new(&["a"]).decl("color", "red"))
            .rule(Rule::new(&["b"]).decl("color", "blue"));

        let text = sheet.as_str();
        let header = text.find("/* header */").unwrap();
        let a = text.find("a {").unwrap();
        let b = text.find("b {").unwrap();
        assert!(header < a && a < b);
    }

    #[test]
    fn empty_stylesheet() {
        let sheet = StyleSheet::new();
        assert!(sheet.is_empty());
        assert_eq!(sheet.into_string(), "");
    }
}
