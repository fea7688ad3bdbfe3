use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ordered keyword records for project descriptions.
pub const PROJECT_KEYWORDS: &[(Category, &str)] = &[
    (
        Category::Emphasis,
        r"(featured|robust|dynamic|custom|responsive|feature-rich|advanced|real-time|interactive|secure|scalable|comprehensive|full-featured|full-stack|seamless|efficient|optimized|dual)",
    ),
    (
        Category::Technical,
        r"(MERN|React|Express|MongoDB|Node\.js|TailwindCSS|Framer|JWT|authentication|Recharts|Nodemailer|AWS|S3|OAuth|Time|tracking|visualization|workflow|Cloudinary|Mongoose|Golang|Gin|GORM|PostgreSQL|RESTful|APIs|backend|frontend|rich-text|bcrypt|encryption|architecture|integration|database)",
    ),
];

/// Ordered keyword records for game descriptions.
pub const GAME_KEYWORDS: &[(Category, &str)] = &[
    (
        Category::Emphasis,
        r"(Challenge|Test|Improve|Practice|Classic|Race|Match|Track|View|Skills|Time|Progress|Performance|Puzzle|Logic|Strategy|Memory|Pattern|Focus|Recognition)",
    ),
    (
        Category::Technical,
        r"(RGB|Color|Theory|Reaction|Speed|WPM|Accuracy|Statistics|Sliding|Tile|Spatial|Reasoning|Metrics|Passages)",
    ),
];

pub static PROJECT_RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new(PROJECT_KEYWORDS).expect("project keyword patterns should compile")
});
pub static GAME_RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new(GAME_KEYWORDS).expect("game keyword patterns should compile")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Emphasis,
    Technical,
}

impl Category {
    /// Tailwind classes used to render a word of this category.
    pub fn classes(self, is_dark: bool) -> &'static str {
        match (self, is_dark) {
            (Category::Emphasis, true) => "font-semibold text-indigo-400",
            (Category::Emphasis, false) => "font-semibold text-indigo-600",
            (Category::Technical, true) => "font-mono text-blue-400",
            (Category::Technical, false) => "font-mono text-blue-600",
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum HighlightError {
    #[error("Invalid keyword pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

#[derive(Debug, Clone)]
pub struct HighlightRule {
    category: Category,
    pattern: Regex,
}

impl HighlightRule {
    pub fn new(category: Category, pattern: &str) -> Result<Self, HighlightError> {
        // ASCII-only case folding, as browser regexes without the `u` flag do
        let pattern = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .unicode(false)
            .build()
            .map_err(|source| HighlightError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;
        Ok(Self { category, pattern })
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Substring match, so a rule for "React" also tags "Reactor".
    pub fn matches(&self, word: &str) -> bool {
        self.pattern.is_match(word)
    }
}

/// An ordered list of keyword rules, compiled once and shared by every render.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<HighlightRule>,
}

impl RuleSet {
    pub fn new(records: &[(Category, &str)]) -> Result<Self, HighlightError> {
        let rules = records
            .iter()
            .map(|(category, pattern)| HighlightRule::new(*category, pattern))
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!("compiled {} highlight rules", rules.len());
        Ok(Self { rules })
    }

    pub fn rules(&self) -> &[HighlightRule] {
        &self.rules
    }

    /// First rule in priority order that matches `word`.
    pub fn categorize(&self, word: &str) -> Option<Category> {
        self.rules
            .iter()
            .find(|rule| rule.matches(word))
            .map(HighlightRule::category)
    }

    pub fn highlight(&self, text: &str) -> Vec<HighlightedToken> {
        if text.is_empty() {
            return Vec::new();
        }
        text.split(' ')
            .map(|word| HighlightedToken {
                text: format!("{word} "),
                category: self.categorize(word),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightedToken {
    /// The word followed by its delimiting space.
    pub text: String,
    pub category: Option<Category>,
}

impl HighlightedToken {
    pub fn word(&self) -> &str {
        self.text.strip_suffix(' ').unwrap_or(&self.text)
    }

    pub fn is_plain(&self) -> bool {
        self.category.is_none()
    }
}

/// Split `text` on single spaces and tag each word with the first matching rule.
pub fn highlight(text: &str, rules: &RuleSet) -> Vec<HighlightedToken> {
    rules.highlight(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn concat(tokens: &[HighlightedToken]) -> String {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_empty_text() {
        assert!(highlight("", &PROJECT_RULES).is_empty());
        assert!(highlight("", &GAME_RULES).is_empty());
    }

    #[test]
    fn test_reconstruction() {
        let inputs = [
            "A robust full-stack app built with React and MongoDB",
            "two  spaces",
            " leading and trailing ",
            "single",
            "ünïcödé wörds, punctuation! (React)",
        ];
        for input in inputs {
            let tokens = highlight(input, &PROJECT_RULES);
            assert_eq!(concat(&tokens), format!("{input} "));
            let words = tokens.iter().map(|t| t.word()).collect::<Vec<_>>();
            assert_eq!(words.join(" "), input);
        }
    }

    #[test]
    fn test_trailing_space_kept_on_last_word() {
        let tokens = highlight("Speed Test", &GAME_RULES);
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].text, "Test ");
    }

    #[test]
    fn test_plain_when_no_keyword() {
        let tokens = highlight("a plain sentence about nothing", &PROJECT_RULES);
        assert_eq!(tokens.len(), 5);
        assert!(tokens.iter().all(HighlightedToken::is_plain));
    }

    #[test]
    fn test_project_categories() {
        let tokens = highlight("A robust app using React", &PROJECT_RULES);
        let cats = tokens.iter().map(|t| t.category).collect::<Vec<_>>();
        assert_eq!(
            cats,
            vec![
                None,
                Some(Category::Emphasis),
                None,
                None,
                Some(Category::Technical)
            ]
        );
    }

    #[test]
    fn test_case_insensitive() {
        let tokens = highlight("MONGODB react Robust", &PROJECT_RULES);
        assert_eq!(tokens[0].category, Some(Category::Technical));
        assert_eq!(tokens[1].category, Some(Category::Technical));
        assert_eq!(tokens[2].category, Some(Category::Emphasis));
    }

    #[test]
    fn test_case_folding_is_ascii_only() {
        // long s and the Kelvin sign only fold to ASCII letters under Unicode rules
        let tokens = highlight("\u{17F}ecure wor\u{212A}flow tracking", &PROJECT_RULES);
        assert!(tokens[0].is_plain());
        assert!(tokens[1].is_plain());
        assert_eq!(tokens[2].category, Some(Category::Technical));

        let tokens = highlight("SECURE ſecure", &PROJECT_RULES);
        assert_eq!(tokens[0].category, Some(Category::Emphasis));
        assert!(tokens[1].is_plain());
    }

    #[test]
    fn test_partial_word_match() {
        let tokens = highlight("Reactor timer", &PROJECT_RULES);
        assert_eq!(tokens[0].category, Some(Category::Technical));
        // "Time" inside "timer"
        assert_eq!(tokens[1].category, Some(Category::Technical));
    }

    #[test]
    fn test_first_rule_wins() {
        // matches "Time" (emphasis) and "Speed" (technical)
        let tokens = highlight("TimeSpeed", &GAME_RULES);
        assert_eq!(tokens[0].category, Some(Category::Emphasis));

        let reversed = RuleSet::new(&[
            (Category::Technical, "speed"),
            (Category::Emphasis, "time"),
        ])
        .unwrap();
        let tokens = reversed.highlight("TimeSpeed");
        assert_eq!(tokens[0].category, Some(Category::Technical));
    }

    #[test]
    fn test_game_rules() {
        let tokens = highlight("Improve your RGB Color Theory", &GAME_RULES);
        let cats = tokens.iter().map(|t| t.category).collect::<Vec<_>>();
        assert_eq!(
            cats,
            vec![
                Some(Category::Emphasis),
                None,
                Some(Category::Technical),
                Some(Category::Technical),
                Some(Category::Technical)
            ]
        );
    }

    #[test]
    fn test_rule_sets_are_independent() {
        let project = highlight("MongoDB Speed", &PROJECT_RULES);
        let game = highlight("MongoDB Speed", &GAME_RULES);
        assert_eq!(project[0].category, Some(Category::Technical));
        assert!(project[1].is_plain());
        assert!(game[0].is_plain());
        assert_eq!(game[1].category, Some(Category::Technical));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = RuleSet::new(&[(Category::Emphasis, "(unclosed")]).unwrap_err();
        assert!(matches!(err, HighlightError::InvalidPattern { ref pattern, .. } if pattern == "(unclosed"));
    }

    #[test]
    fn test_empty_rule_set() {
        let tokens = RuleSet::default().highlight("React robust");
        assert!(tokens.iter().all(HighlightedToken::is_plain));
    }

    #[test]
    fn test_category_classes() {
        let tokens = highlight("robust React plain", &PROJECT_RULES);
        let classes = tokens
            .iter()
            .map(|t| t.category.map(|c| c.classes(true)))
            .collect::<Vec<_>>();
        assert_eq!(
            classes,
            vec![
                Some("font-semibold text-indigo-400"),
                Some("font-mono text-blue-400"),
                None
            ]
        );
        assert_eq!(Category::Technical.classes(false), "font-mono text-blue-600");
    }

    #[test]
    fn test_serialize_token() {
        let tokens = highlight("robust", &PROJECT_RULES);
        let json = serde_json::to_string(&tokens[0]).unwrap();
        assert_eq!(json, r#"{"text":"robust ","category":"emphasis"}"#);
    }
}
