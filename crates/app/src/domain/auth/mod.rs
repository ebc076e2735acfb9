//! Auth domain: phone/OTP login, bearer sessions and user profiles.

pub mod errors;
pub mod models;
pub mod otp;
pub mod service;

pub use errors::AuthServiceError;
pub use models::{AuthSession, OtpPurpose, ProfileUpdate, User};
pub use otp::{LogOtpSender, MockOtpSender, OtpSender};
pub use service::{AuthService, InMemoryAuthService, MockAuthService};
