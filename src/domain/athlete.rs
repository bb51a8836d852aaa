//! Athlete entity.

use super::values::{Age, Email, Name, Phone, Sport};
use std::fmt;

/// Identity of an athlete: the (name, sport) pair.
///
/// One person playing two sports is two athletes. Matching ignores case.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AthleteKey {
    pub name: Name,
    pub sport: Sport,
}

impl AthleteKey {
    pub fn new(name: Name, sport: Sport) -> Self {
        Self { name, sport }
    }

    pub fn matches(&self, other: &AthleteKey) -> bool {
        self.name.matches(&other.name) && self.sport.matches(&other.sport)
    }
}

impl fmt::Display for AthleteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.sport)
    }
}

/// A client athlete. Never mutated in place once stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Athlete {
    name: Name,
    sport: Sport,
    age: Age,
    phone: Phone,
    email: Email,
}

impl Athlete {
    pub fn new(name: Name, sport: Sport, age: Age, phone: Phone, email: Email) -> Self {
        Self {
            name,
            sport,
            age,
            phone,
            email,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn sport(&self) -> &Sport {
        &self.sport
    }

    pub fn age(&self) -> Age {
        self.age
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn key(&self) -> AthleteKey {
        AthleteKey::new(self.name.clone(), self.sport.clone())
    }

    /// True when `key` names this athlete.
    pub fn has_key(&self, key: &AthleteKey) -> bool {
        self.name.matches(&key.name) && self.sport.matches(&key.sport)
    }

    /// Identity check used for duplicate detection.
    pub fn is_same_athlete(&self, other: &Athlete) -> bool {
        self.has_key(&other.key())
    }
}

impl fmt::Display for Athlete {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Sport: {}; Age: {}; Phone: {}; Email: {}",
            self.name, self.sport, self.age, self.phone, self.email
        )
    }
}
