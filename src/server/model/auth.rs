//! The authenticated principal handed over by the external security filter.

use serde::{Deserialize, Serialize};

/// Attribute name carrying the email address in an OpenID assertion.
pub const OPENID_EMAIL_ATTRIBUTE: &str = "email";

/// Who an authenticated request belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Principal {
    /// Authenticated by an external OpenID identity provider
    OpenId(OpenIdAssertion),
    /// Authenticated with a username and password
    Username(String),
}

impl Principal {
    /// Identity URL for OpenID principals, the username otherwise.
    pub fn name(&self) -> &str {
        match self {
            Self::OpenId(assertion) => &assertion.identity_url,
            Self::Username(username) => username,
        }
    }
}

/// Identity assertion returned by an OpenID provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenIdAssertion {
    /// Identity URL uniquely naming the person at the provider
    pub identity_url: String,
    /// Attributes exchanged alongside the assertion
    pub attributes: Vec<OpenIdAttribute>,
}

/// A named, possibly multi-valued attribute of an OpenID assertion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenIdAttribute {
    /// Attribute name, e.g. `email`
    pub name: String,
    /// Attribute values in provider order
    pub values: Vec<String>,
}

impl OpenIdAssertion {
    /// An assertion for the identity without any attributes.
    pub fn new(identity_url: impl Into<String>) -> Self {
        Self {
            identity_url: identity_url.into(),
            attributes: Vec::new(),
        }
    }

    /// Appends an attribute to the assertion.
    pub fn with_attribute(mut self, name: impl Into<String>, values: Vec<String>) -> Self {
        self.attributes.push(OpenIdAttribute {
            name: name.into(),
            values,
        });
        self
    }

    /// Values of every attribute with the given name, in assertion order.
    pub fn attribute_values(&self, name: &str) -> Vec<&str> {
        self.attributes
            .iter()
            .filter(|attribute| attribute.name == name)
            .flat_map(|attribute| attribute.values.iter().map(String::as_str))
            .collect()
    }

    /// The first email address supplied by the provider, if any.
    pub fn email(&self) -> Option<&str> {
        self.attribute_values(OPENID_EMAIL_ATTRIBUTE)
            .into_iter()
            .next()
    }
}
