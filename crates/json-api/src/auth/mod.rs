//! Auth routes: OTP issue/verify, sessions and profile management.

pub(crate) mod errors;
pub(crate) mod handlers;
pub(crate) mod middleware;

pub(crate) use handlers::{logout, profile, send_otp, update_profile, verify_otp};
