//! Keyword predicates used by the find commands.

use crate::domain::{Athlete, Contract, Organization};

/// Whole-word, case-insensitive keyword match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordPredicate {
    keywords: Vec<String>,
}

impl KeywordPredicate {
    /// `None` when `raw` holds no keywords.
    pub fn from_args(raw: &str) -> Option<Self> {
        let keywords: Vec<String> = raw.split_whitespace().map(str::to_string).collect();
        if keywords.is_empty() {
            return None;
        }
        Some(Self { keywords })
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    fn matches_words<'a>(&self, mut words: impl Iterator<Item = &'a str>) -> bool {
        words.any(|word| {
            self.keywords
                .iter()
                .any(|keyword| keyword.eq_ignore_ascii_case(word))
        })
    }

    pub fn matches_athlete(&self, athlete: &Athlete) -> bool {
        self.matches_words(athlete.name().words())
    }

    pub fn matches_organization(&self, organization: &Organization) -> bool {
        self.matches_words(organization.name().words())
    }

    /// Contracts match on either party's name.
    pub fn matches_contract(&self, contract: &Contract) -> bool {
        self.matches_words(contract.athlete_name().words())
            || self.matches_words(contract.organization().words())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Age, Email, Name, Phone, Sport};

    #[test]
    fn empty_args_have_no_predicate() {
        assert!(KeywordPredicate::from_args("   ").is_none());
    }

    #[test]
    fn matches_whole_words_ignoring_case() {
        let athlete = Athlete::new(
            Name::parse("Lionel Messi").unwrap(),
            Sport::parse("Football").unwrap(),
            Age::parse("36").unwrap(),
            Phone::parse("91234567").unwrap(),
            Email::parse("messi@x.com").unwrap(),
        );
        assert!(KeywordPredicate::from_args("messi").unwrap().matches_athlete(&athlete));
        assert!(KeywordPredicate::from_args("ronaldo LIONEL")
            .unwrap()
            .matches_athlete(&athlete));
        assert!(!KeywordPredicate::from_args("mess").unwrap().matches_athlete(&athlete));
    }
}
