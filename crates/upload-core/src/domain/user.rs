use crate::domain::email::{is_valid_email, normalize_email};
use crate::domain::name::normalize_name;
use serde::{Deserialize, Serialize};

/// One user as read from a CSV row: `[name, surname, email]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub name: String,
    pub surname: String,
    pub email: String,
}

impl UserRecord {
    pub fn new(
        name: impl Into<String>,
        surname: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            email: email.into(),
        }
    }

    /// Takes fields positionally; missing positions are empty and anything
    /// past the third field is ignored.
    pub fn from_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut fields = fields.into_iter();
        let mut next = || {
            fields
                .next()
                .map(|field| field.as_ref().to_string())
                .unwrap_or_default()
        };
        let name = next();
        let surname = next();
        let email = next();
        Self {
            name,
            surname,
            email,
        }
    }

    pub fn format(&mut self) {
        self.name = normalize_name(&self.name);
        self.surname = normalize_name(&self.surname);
        self.email = normalize_email(&self.email);
    }

    pub fn formatted(mut self) -> Self {
        self.format();
        self
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname).trim().to_string()
    }

    pub fn is_email_valid(&self) -> bool {
        is_valid_email(&self.email)
    }
}
