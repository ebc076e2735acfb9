//! Auth Models

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Why an OTP is being requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OtpPurpose {
    /// Sign in an existing user.
    Login,
    /// Create a new user.
    Register,
}

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User identifier.
    pub uuid: Uuid,
    /// Verified phone number, ten digits.
    pub phone: String,
    /// Display name.
    pub name: String,
    /// Contact email, if one was provided.
    pub email: Option<String>,
    /// Item identifiers the user watches for price drops.
    pub saved_items: Vec<String>,
    /// When the user registered.
    pub created_at: Timestamp,
    /// When the user last signed in.
    pub last_login: Timestamp,
}

/// A successful OTP verification: the signed-in user and their bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    /// Opaque bearer token for subsequent requests.
    pub token: String,
    /// The authenticated user.
    pub user: User,
}

/// A partial profile update; absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    /// New display name.
    pub name: Option<String>,
    /// New contact email.
    pub email: Option<String>,
    /// Replacement watched-item list.
    pub saved_items: Option<Vec<String>>,
}
