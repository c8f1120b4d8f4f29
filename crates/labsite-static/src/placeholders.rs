//! `{{TOKEN}}` substitution for component fragments.
//!
//! Substitution is a single left-to-right pass over the template. Text
//! inserted from a value is never rescanned, so a value that happens to
//! contain `{{OTHER}}` comes out verbatim.

use std::sync::LazyLock;

use regex::Regex;

static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([A-Za-z0-9_]+)\}\}").expect("valid token pattern"));

/// Ordered mapping from token name to replacement value.
///
/// A `None` value renders as the empty string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Placeholders {
    entries: Vec<(String, Option<String>)>,
}

impl Placeholders {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value, builder style.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, Some(value.into()));
        self
    }

    /// Add a value that may be absent, builder style.
    pub fn with_optional<V: Into<String>>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        self.insert(key, value.map(Into::into));
        self
    }

    /// Set a key. An existing key keeps its position and takes the new value.
    pub fn insert(&mut self, key: impl Into<String>, value: Option<String>) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Replacement text for a key, or `None` if the key is not mapped.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_deref().unwrap_or(""))
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

/// Replace every `{{KEY}}` in `template` whose key is mapped.
///
/// Unmapped tokens are left as they are. Values are inserted without
/// escaping.
pub fn replace_placeholders(template: &str, placeholders: &Placeholders) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        output.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];

        let resolved = after_open
            .find("}}")
            .and_then(|end| placeholders.value(&after_open[..end]).map(|v| (v, end)));

        match resolved {
            Some((value, end)) => {
                output.push_str(value);
                rest = &after_open[end + 2..];
            }
            None => {
                // Keep one brace and rescan, so `{{{KEY}}` still matches at the next byte.
                output.push('{');
                rest = &rest[start + 1..];
            }
        }
    }

    output.push_str(rest);
    output
}

/// Names of `{{TOKEN}}` placeholders still present in `text`, in order of
/// first appearance.
pub fn unresolved_placeholders(text: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();

    for caps in TOKEN_PATTERN.captures_iter(text) {
        let name = &caps[1];
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }

    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn replaces_every_occurrence() {
        let placeholders = Placeholders::new().with("NAME", "Ada");

        let html = replace_placeholders("<p>{{NAME}}</p><img alt=\"{{NAME}}\">", &placeholders);

        assert_eq!(html, "<p>Ada</p><img alt=\"Ada\">");
    }

    #[test]
    fn renders_absent_value_as_empty() {
        let placeholders = Placeholders::new()
            .with("NAME", "Ada")
            .with_optional("IMAGE_STYLE", None::<String>);

        let html = replace_placeholders("<img style=\"{{IMAGE_STYLE}}\">{{NAME}}", &placeholders);

        assert_eq!(html, "<img style=\"\">Ada");
    }

    #[test]
    fn leaves_unmapped_tokens_verbatim() {
        let placeholders = Placeholders::new().with("NAME", "Ada");

        let html = replace_placeholders("{{NAME}} {{TITLE}} {{name}}", &placeholders);

        assert_eq!(html, "Ada {{TITLE}} {{name}}");
    }

    #[test]
    fn does_not_expand_tokens_inside_values() {
        let placeholders = Placeholders::new()
            .with("A", "{{B}}")
            .with("B", "bee");

        let html = replace_placeholders("{{A}}|{{B}}", &placeholders);

        assert_eq!(html, "{{B}}|bee");
    }

    #[test]
    fn result_does_not_depend_on_key_order() {
        let forward = Placeholders::new().with("A", "{{B}}").with("B", "x");
        let backward = Placeholders::new().with("B", "x").with("A", "{{B}}");

        assert_eq!(
            replace_placeholders("{{A}}{{B}}", &forward),
            replace_placeholders("{{A}}{{B}}", &backward)
        );
    }

    #[test]
    fn handles_stray_braces() {
        let placeholders = Placeholders::new().with("KEY", "v");

        assert_eq!(replace_placeholders("{{{KEY}}}", &placeholders), "{v}");
        assert_eq!(replace_placeholders("{{ {{KEY}}", &placeholders), "{{ v");
        assert_eq!(replace_placeholders("{{KEY", &placeholders), "{{KEY");
        assert_eq!(replace_placeholders("}}{{", &placeholders), "}}{{");
    }

    #[test]
    fn leaves_no_mapped_token_behind() {
        let placeholders = Placeholders::new()
            .with("TITLE", "News")
            .with("DATE", "2024")
            .with_optional("IMAGE_PATH", Some("../img/x.png"));
        let templates = [
            "",
            "{{TITLE}}",
            "{{TITLE}}{{TITLE}}{{DATE}}",
            "<h1>{{TITLE}}</h1>\n<img src=\"{{IMAGE_PATH}}\">{{MISSING}}",
            "{{{{DATE}}}}",
        ];

        for template in templates {
            let html = replace_placeholders(template, &placeholders);
            let leftover = unresolved_placeholders(&html);
            for key in placeholders.keys() {
                assert!(
                    !leftover.iter().any(|n| n == key),
                    "{key} left in {html:?}"
                );
            }
        }
    }

    #[test]
    fn insert_overwrites_in_place() {
        let mut placeholders = Placeholders::new().with("A", "1").with("B", "2");

        placeholders.insert("A", Some("3".to_string()));

        assert_eq!(placeholders.keys().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(placeholders.value("A"), Some("3"));
    }

    #[test]
    fn lists_unresolved_tokens_once() {
        let names = unresolved_placeholders("{{HEADER}} {{FOOTER}} {{HEADER}} {{not a token}}");

        assert_eq!(names, vec!["HEADER".to_string(), "FOOTER".to_string()]);
    }
}
