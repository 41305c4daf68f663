//! The contact form and the mail-client redirect it produces.

use crate::site::ContactConfig;

/// A form field that must be filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Inquiry,
}

impl ContactField {
    /// All fields in form order.
    pub fn all() -> &'static [ContactField] {
        &[ContactField::Name, ContactField::Email, ContactField::Inquiry]
    }

    /// The form control name.
    pub fn name(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Inquiry => "inquiry",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ContactError {
    MissingField(ContactField),
}

impl std::fmt::Display for ContactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContactError::MissingField(field) => {
                write!(f, "The contact form field `{}` is empty", field.name())?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ContactError {}

/// The submitted form values, trimmed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub inquiry: String,
}

impl ContactForm {
    /// Collect the raw field values.
    pub fn new(name: &str, email: &str, inquiry: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            inquiry: inquiry.trim().to_string(),
        }
    }

    /// Check every field is filled.
    pub fn validate(&self) -> Result<(), ContactError> {
        let fields = [
            (ContactField::Name, &self.name),
            (ContactField::Email, &self.email),
            (ContactField::Inquiry, &self.inquiry),
        ];
        match fields.iter().find(|(_, value)| value.is_empty()) {
            Some((field, _)) => Err(ContactError::MissingField(*field)),
            None => Ok(()),
        }
    }

    /// The message subject.
    pub fn subject(&self, prefix: &str) -> String {
        format!("{} — {}", prefix, self.name)
    }

    /// The message body.
    pub fn body(&self) -> String {
        format!("Name: {}\nEmail: {}\n\n{}", self.name, self.email, self.inquiry)
    }
}

/// Builds the URL that hands the message over to the user's mail client.
#[derive(Debug, Clone, PartialEq)]
pub struct MailRedirect {
    target: String,
    subject_prefix: String,
}

impl MailRedirect {
    /// Redirect to an arbitrary base target.
    ///
    /// The target may already carry a query string.
    pub fn new(target: impl Into<String>, subject_prefix: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            subject_prefix: subject_prefix.into(),
        }
    }

    /// Redirect to a `mailto:` link for the configured address.
    pub fn from_config(config: &ContactConfig) -> Self {
        Self::new(
            format!("mailto:{}", config.address.trim()),
            config.subject_prefix.as_str(),
        )
    }

    /// Validate the form and build the redirect URL.
    pub fn to_url(&self, form: &ContactForm) -> Result<String, ContactError> {
        form.validate()?;
        let separator = if self.target.contains('?') { '&' } else { '?' };
        Ok(format!(
            "{}{}subject={}&body={}",
            self.target,
            separator,
            urlencoding::encode(&form.subject(&self.subject_prefix)),
            urlencoding::encode(&form.body()),
        ))
    }
}
