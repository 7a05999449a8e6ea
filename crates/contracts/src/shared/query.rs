//! Query-string building for list filters.
//!
//! A filter key reaches the server only when it carries a value: `None`,
//! blank text and the `"ALL"` sentinel are dropped, so the server applies
//! its own defaults for everything left unset.

use std::fmt::Display;

/// Sentinel used by selects meaning "no restriction"
pub const ALL: &str = "ALL";

/// Wire code of an enumerated filter value
pub trait QueryValue {
    fn code(&self) -> &'static str;
}

/// Enumerated filter that may be left unrestricted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Choice<T> {
    All,
    Only(T),
}

impl<T> Default for Choice<T> {
    fn default() -> Self {
        Choice::All
    }
}

impl<T: QueryValue> Choice<T> {
    /// Value to send, `None` for [`Choice::All`].
    pub fn value(&self) -> Option<&'static str> {
        match self {
            Choice::All => None,
            Choice::Only(v) => Some(v.code()),
        }
    }

    /// Code to show in a `<select>`, `"ALL"` when unrestricted.
    pub fn code(&self) -> &'static str {
        self.value().unwrap_or(ALL)
    }

    /// Parses a select value; `"ALL"` and unknown codes mean no restriction.
    pub fn parse(code: &str, from_code: impl Fn(&str) -> Option<T>) -> Self {
        if code == ALL {
            return Choice::All;
        }
        from_code(code).map(Choice::Only).unwrap_or(Choice::All)
    }
}

impl<T> Choice<T> {
    pub fn only(&self) -> Option<&T> {
        match self {
            Choice::All => None,
            Choice::Only(v) => Some(v),
        }
    }
}

/// Ordered list of `key=value` pairs, percent-encoded on output
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &'static str, value: impl Display) -> &mut Self {
        self.pairs.push((key, value.to_string()));
        self
    }

    pub fn push_opt<V: Display>(&mut self, key: &'static str, value: Option<V>) -> &mut Self {
        if let Some(v) = value {
            self.push(key, v);
        }
        self
    }

    /// Free text: skipped when absent, blank or equal to `"ALL"`.
    pub fn push_text(&mut self, key: &'static str, value: Option<&str>) -> &mut Self {
        if let Some(v) = value {
            let trimmed = v.trim();
            if !trimmed.is_empty() && trimmed != ALL {
                self.push(key, trimmed);
            }
        }
        self
    }

    pub fn push_choice<T: QueryValue>(&mut self, key: &'static str, choice: &Choice<T>) -> &mut Self {
        self.push_opt(key, choice.value())
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn keys(&self) -> Vec<&'static str> {
        self.pairs.iter().map(|(k, _)| *k).collect()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// `a=1&b=2`, without a leading `?`.
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// `path?query`, or just `path` when no parameter is set.
    pub fn append_to(&self, path: &str) -> String {
        if self.is_empty() {
            path.to_string()
        } else {
            format!("{}?{}", path, self.to_query_string())
        }
    }
}

/// Filter structs of list endpoints
pub trait ListFilters {
    fn to_query(&self) -> QueryParams;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Color {
        Red,
    }

    impl QueryValue for Color {
        fn code(&self) -> &'static str {
            "RED"
        }
    }

    fn color_from_code(code: &str) -> Option<Color> {
        (code == "RED").then_some(Color::Red)
    }

    #[test]
    fn test_skips_unset_values() {
        let mut q = QueryParams::new();
        q.push_opt::<u32>("page", None)
            .push_text("search", Some("   "))
            .push_text("status", Some("ALL"))
            .push_choice("color", &Choice::<Color>::All);
        assert!(q.is_empty());
        assert_eq!(q.append_to("/api/x"), "/api/x");
    }

    #[test]
    fn test_keeps_order_and_encodes() {
        let mut q = QueryParams::new();
        q.push_choice("color", &Choice::Only(Color::Red))
            .push("page", 2)
            .push_text("search", Some("ana maría"));
        assert_eq!(
            q.append_to("/api/x"),
            "/api/x?color=RED&page=2&search=ana%20mar%C3%ADa"
        );
        assert_eq!(q.keys(), vec!["color", "page", "search"]);
    }

    #[test]
    fn test_choice_parse() {
        assert_eq!(Choice::parse("RED", color_from_code), Choice::Only(Color::Red));
        assert_eq!(Choice::parse("ALL", color_from_code), Choice::All);
        assert_eq!(Choice::parse("BLUE", color_from_code), Choice::All);
        assert_eq!(Choice::Only(Color::Red).code(), "RED");
        assert_eq!(Choice::<Color>::All.code(), "ALL");
    }
}
