//! Generated user record types.
//!
//! The record shape mirrors the user representation accepted by a Keycloak
//! realm import, so the serialized output can be dropped straight into a
//! scaffolded identity provider.

use serde::Serialize;

/// Domain appended to every generated username to form an email address.
pub const EMAIL_DOMAIN: &str = "example.com";

/// Gender assigned to a generated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Assigned to even positions in the dataset.
    Male,
    /// Assigned to odd positions in the dataset.
    Female,
}

impl Gender {
    /// Returns the gender for the record at `index`.
    ///
    /// Even positions are male and odd positions are female.
    ///
    /// # Examples
    ///
    /// ```
    /// use demo_users::Gender;
    ///
    /// assert_eq!(Gender::for_position(0), Gender::Male);
    /// assert_eq!(Gender::for_position(1), Gender::Female);
    /// assert_eq!(Gender::for_position(98), Gender::Male);
    /// ```
    #[must_use]
    pub const fn for_position(index: usize) -> Self {
        if index.rem_euclid(2) == 0 {
            Self::Male
        } else {
            Self::Female
        }
    }
}

/// A fabricated identity-provider user.
///
/// Serializes with camelCase keys in the order `username`, `firstName`,
/// `lastName`, `email`, `enabled`, `gender`, `roles`.
///
/// # Example
///
/// ```
/// use demo_users::{DemoUser, Gender};
///
/// let user = DemoUser::new("Juan", "Garcia", Gender::Male, "admin");
///
/// assert_eq!(user.username(), "juan.garcia");
/// assert_eq!(user.email(), "juan.garcia@example.com");
/// assert!(user.enabled());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoUser {
    username: String,
    first_name: String,
    last_name: String,
    email: String,
    enabled: bool,
    gender: Gender,
    roles: Vec<String>,
}

impl DemoUser {
    /// Builds a user from its names, gender and single role.
    ///
    /// The username, email and enabled flag are derived; they cannot be set
    /// independently.
    #[must_use]
    pub fn new(first_name: &str, last_name: &str, gender: Gender, role: &str) -> Self {
        let username = username_for(first_name, last_name);
        let email = format!("{username}@{EMAIL_DOMAIN}");
        Self {
            username,
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            email,
            enabled: true,
            gender,
            roles: vec![role.to_owned()],
        }
    }

    /// Login name, `first.last` in lowercase.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Given name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Family name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Email address at [`EMAIL_DOMAIN`].
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Whether the account is enabled. Always `true`.
    #[must_use]
    pub const fn enabled(&self) -> bool {
        self.enabled
    }

    /// Assigned gender.
    #[must_use]
    pub const fn gender(&self) -> Gender {
        self.gender
    }

    /// Realm roles; always exactly one entry.
    #[must_use]
    pub fn roles(&self) -> &[String] {
        &self.roles
    }
}

/// Derives a username as `lowercase(first).lowercase(last)` with spaces
/// removed.
///
/// # Examples
///
/// ```
/// use demo_users::username_for;
///
/// assert_eq!(username_for("Maria", "Garcia"), "maria.garcia");
/// assert_eq!(username_for("Ana Sofia", "De La Cruz"), "anasofia.delacruz");
/// ```
#[must_use]
pub fn username_for(first_name: &str, last_name: &str) -> String {
    format!("{}.{}", first_name.to_lowercase(), last_name.to_lowercase())
        .chars()
        .filter(|c| *c != ' ')
        .collect()
}
