//! Organization entity.

use super::values::{Email, OrganizationName, Phone};
use std::fmt;

/// A counterparty organization, identified by its name (case-insensitive).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Organization {
    name: OrganizationName,
    phone: Phone,
    email: Email,
}

impl Organization {
    pub fn new(name: OrganizationName, phone: Phone, email: Email) -> Self {
        Self { name, phone, email }
    }

    pub fn name(&self) -> &OrganizationName {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn has_name(&self, name: &OrganizationName) -> bool {
        self.name.matches(name)
    }

    pub fn is_same_organization(&self, other: &Organization) -> bool {
        self.has_name(&other.name)
    }
}

impl fmt::Display for Organization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}",
            self.name, self.phone, self.email
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn organization(name: &str, phone: &str) -> Organization {
        Organization::new(
            OrganizationName::parse(name).unwrap(),
            Phone::parse(phone).unwrap(),
            Email::parse("ops@im.com").unwrap(),
        )
    }

    #[test]
    fn identity_is_case_insensitive_name() {
        let a = organization("Inter Miami", "98765432");
        let b = organization("inter miami", "11111111");
        let c = organization("Inter Milan", "98765432");
        assert!(a.is_same_organization(&b));
        assert!(!a.is_same_organization(&c));
    }

    #[test]
    fn display() {
        let a = organization("Inter Miami", "98765432");
        assert_eq!(a.to_string(), "Inter Miami; Phone: 98765432; Email: ops@im.com");
    }
}
