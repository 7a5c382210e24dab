use std::collections::HashSet;

/// Day of the week as stored in availability lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    /// Parse a day token, case-insensitively. Returns None for anything
    /// that is not one of the seven known tokens.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "mon" => Some(Weekday::Mon),
            "tue" => Some(Weekday::Tue),
            "wed" => Some(Weekday::Wed),
            "thu" => Some(Weekday::Thu),
            "fri" => Some(Weekday::Fri),
            "sat" => Some(Weekday::Sat),
            "sun" => Some(Weekday::Sun),
            _ => None,
        }
    }
}

/// Parse a raw serialized day list into a set of weekdays.
///
/// The marketplace stores availability as a JSON-encoded array of day
/// tokens (e.g. `["Mon","Wed"]`). Stored values are not guaranteed to be
/// well-formed, so parsing is all-or-nothing: a missing value, invalid
/// JSON, a non-array shape, or an unknown token all yield `None` rather
/// than an error. An empty array parses to an empty set.
pub fn parse_day_set(raw: Option<&str>) -> Option<HashSet<Weekday>> {
    let raw = raw?;
    let tokens: Vec<String> = serde_json::from_str(raw).ok()?;

    tokens
        .iter()
        .map(|token| Weekday::from_token(token))
        .collect()
}

/// Whether two availability sets share at least one day.
#[inline]
pub fn days_overlap(a: &HashSet<Weekday>, b: &HashSet<Weekday>) -> bool {
    !a.is_disjoint(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_day_list() {
        let days = parse_day_set(Some(r#"["Mon","Wed","Fri"]"#)).unwrap();
        assert_eq!(days.len(), 3);
        assert!(days.contains(&Weekday::Mon));
        assert!(days.contains(&Weekday::Wed));
        assert!(days.contains(&Weekday::Fri));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        let days = parse_day_set(Some(r#"["mon","TUE","Sat"]"#)).unwrap();
        assert!(days.contains(&Weekday::Mon));
        assert!(days.contains(&Weekday::Tue));
        assert!(days.contains(&Weekday::Sat));
    }

    #[test]
    fn test_parse_empty_array_is_empty_set() {
        let days = parse_day_set(Some("[]")).unwrap();
        assert!(days.is_empty());
    }

    #[test]
    fn test_parse_missing_is_none() {
        assert!(parse_day_set(None).is_none());
    }

    #[test]
    fn test_parse_malformed_json_is_none() {
        assert!(parse_day_set(Some("not json at all")).is_none());
        assert!(parse_day_set(Some(r#"{"Mon": true}"#)).is_none());
        assert!(parse_day_set(Some(r#"["Mon""#)).is_none());
    }

    #[test]
    fn test_parse_unknown_token_is_none() {
        assert!(parse_day_set(Some(r#"["Mon","Funday"]"#)).is_none());
    }

    #[test]
    fn test_days_overlap() {
        let a = parse_day_set(Some(r#"["Mon","Wed"]"#)).unwrap();
        let b = parse_day_set(Some(r#"["Wed","Fri"]"#)).unwrap();
        let c = parse_day_set(Some(r#"["Sat","Sun"]"#)).unwrap();

        assert!(days_overlap(&a, &b));
        assert!(!days_overlap(&a, &c));
    }
}
