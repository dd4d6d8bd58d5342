//! The rule table: field identifier → validity test + error message.
//!
//! Rules are immutable and the table is built once, then passed to whatever
//! validates fields. A field without a rule is always valid.

use crate::enums::FieldId;
use regex::Regex;
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

// ─── Cached regexes ─────────────────────────────────────────────────────────

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z\s]+$").unwrap());

static MOBILE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[6-9][0-9]{9}$").unwrap());

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

static PASSWORD_CHARSET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9@$!%*?&]{8,}$").unwrap());

static LOWERCASE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-z]").unwrap());

static UPPERCASE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Z]").unwrap());

static DIGIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]").unwrap());

static SYMBOL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[@$!%*?&]").unwrap());

// ─── Messages ───────────────────────────────────────────────────────────────

pub const NAME_MESSAGE: &str = "Name should only contain letters.";
pub const MOBILE_MESSAGE: &str = "Must be 10 digits starting with 6, 7, 8, or 9.";
pub const EMAIL_MESSAGE: &str = "Email is invalid.";
pub const PASSWORD_MESSAGE: &str =
    "Invalid password: Min 8 chars, uppercase, lowercase, number and symbol.";
pub const ADDRESS_MESSAGE: &str = "The address should be multiline.";
pub const OTHER_HOBBY_MESSAGE: &str = "Please specify your other hobby.";

/// Single-line addresses longer than this many trimmed characters pass.
pub const ADDRESS_SINGLE_LINE_MIN: usize = 30;

/// How a rule decides validity.
#[derive(Clone)]
pub enum RuleCheck {
    /// The whole value must match.
    Pattern(Regex),
    /// Every pattern must match.
    AllOf(Vec<Regex>),
    Predicate(fn(&str) -> bool),
}

impl RuleCheck {
    pub fn test(&self, value: &str) -> bool {
        match self {
            RuleCheck::Pattern(re) => re.is_match(value),
            RuleCheck::AllOf(patterns) => patterns.iter().all(|re| re.is_match(value)),
            RuleCheck::Predicate(f) => f(value),
        }
    }
}

impl fmt::Debug for RuleCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleCheck::Pattern(re) => f.debug_tuple("Pattern").field(&re.as_str()).finish(),
            RuleCheck::AllOf(patterns) => f
                .debug_tuple("AllOf")
                .field(&patterns.iter().map(Regex::as_str).collect::<Vec<_>>())
                .finish(),
            RuleCheck::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Rule {
    pub field: FieldId,
    pub check: RuleCheck,
    pub message: String,
}

impl Rule {
    pub fn new(field: FieldId, check: RuleCheck, message: impl Into<String>) -> Self {
        Rule {
            field,
            check,
            message: message.into(),
        }
    }

    pub fn test(&self, value: &str) -> bool {
        self.check.test(value)
    }
}

/// A line break, or a single line long enough to pass as a full address.
pub fn is_multiline_address(value: &str) -> bool {
    value.contains('\n') || value.trim().chars().count() > ADDRESS_SINGLE_LINE_MIN
}

pub fn is_specified(value: &str) -> bool {
    !value.trim().is_empty()
}

#[derive(Clone, Debug, Default)]
pub struct RuleTable {
    rules: HashMap<FieldId, Rule>,
}

impl RuleTable {
    /// Build a table from rules; a later rule for the same field replaces an earlier one.
    pub fn new(rules: impl IntoIterator<Item = Rule>) -> Self {
        RuleTable {
            rules: rules.into_iter().map(|r| (r.field, r)).collect(),
        }
    }

    /// The fixed registration-form rules.
    pub fn standard() -> Self {
        RuleTable::new([
            Rule::new(
                FieldId::Name,
                RuleCheck::Pattern(NAME_RE.clone()),
                NAME_MESSAGE,
            ),
            Rule::new(
                FieldId::Mobile,
                RuleCheck::Pattern(MOBILE_RE.clone()),
                MOBILE_MESSAGE,
            ),
            Rule::new(
                FieldId::Email,
                RuleCheck::Pattern(EMAIL_RE.clone()),
                EMAIL_MESSAGE,
            ),
            Rule::new(
                FieldId::Password,
                RuleCheck::AllOf(vec![
                    PASSWORD_CHARSET_RE.clone(),
                    LOWERCASE_RE.clone(),
                    UPPERCASE_RE.clone(),
                    DIGIT_RE.clone(),
                    SYMBOL_RE.clone(),
                ]),
                PASSWORD_MESSAGE,
            ),
            Rule::new(
                FieldId::Address,
                RuleCheck::Predicate(is_multiline_address),
                ADDRESS_MESSAGE,
            ),
            Rule::new(
                FieldId::OtherText,
                RuleCheck::Predicate(is_specified),
                OTHER_HOBBY_MESSAGE,
            ),
        ])
    }

    pub fn get(&self, field: FieldId) -> Option<&Rule> {
        self.rules.get(&field)
    }

    /// A copy of this table with the rule for `field` removed.
    pub fn without(&self, field: FieldId) -> Self {
        let mut rules = self.rules.clone();
        rules.remove(&field);
        RuleTable { rules }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
