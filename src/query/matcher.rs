use log::warn;
use regex::Regex;

pub const WILDCARD: char = '*';

/// A compiled wildcard tag pattern.
///
/// `*` stands for any run of characters, everything else is literal. The
/// pattern is tested against the whole whitespace-joined tag string and must
/// line up with token boundaries on both ends, so `fo*` matches `fox canine`
/// while `o*` does not. Because `*` also crosses whitespace, `fox*canine`
/// matches the same string.
///
/// A pattern too large to compile never matches.
#[derive(Debug, Clone)]
pub struct TagMatcher {
    pattern: String,
    regex: Option<Regex>,
}

impl TagMatcher {
    pub fn new(pattern: &str) -> Self {
        let body = pattern
            .split(WILDCARD)
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(".*");
        let regex = match Regex::new(&format!(r"(?s)(?:^|\s){}(?:\s|$)", body)) {
            Ok(regex) => Some(regex),
            Err(e) => {
                warn!("Tag pattern {:?} never matches: {}", pattern, e);
                None
            }
        };

        Self {
            pattern: pattern.to_string(),
            regex,
        }
    }

    pub fn matches(&self, tags: &str) -> bool {
        self.regex
            .as_ref()
            .map(|regex| regex.is_match(tags))
            .unwrap_or(false)
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Whether the pattern compiled into a usable matcher.
    pub fn is_usable(&self) -> bool {
        self.regex.is_some()
    }

    pub fn is_wildcard(pattern: &str) -> bool {
        pattern.contains(WILDCARD)
    }
}

impl PartialEq for TagMatcher {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
    }
}

impl Eq for TagMatcher {}
