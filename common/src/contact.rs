use crate::auth::is_valid_email;
use std::fmt;

/// The subjects offered on the support page.

pub const SUBJECTS: &[&str] = &[
    "General question",
    "Vendor account",
    "Billing",
    "Technical problem",
    "Feedback",
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum ContactError {
    Missing(ContactField),
    InvalidEmail,
}

impl fmt::Display for ContactError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ContactError::Missing(field) => write!(f, "{} is required", field.label()),
            ContactError::InvalidEmail => write!(f, "Please enter a valid email address"),
        }
    }
}

/// The support page's message form. Submissions stay on the page.

#[derive(Clone, Default, PartialEq, Debug)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn with(mut self, field: ContactField, value: impl Into<String>) -> Self {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
        self
    }

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        let fields = [ContactField::Name, ContactField::Email, ContactField::Subject, ContactField::Message];
        if let Some(field) = fields.into_iter().find(|field| self.get(*field).trim().is_empty()) {
            return Err(ContactError::Missing(field));
        }
        if !is_valid_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }
}
