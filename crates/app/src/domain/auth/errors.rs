//! Auth errors.

use thiserror::Error;

/// Failures of the auth service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthServiceError {
    /// The phone number is not ten digits starting with 6-9.
    #[error("invalid phone number")]
    InvalidPhone,

    /// The OTP is not a six-digit code.
    #[error("invalid OTP format")]
    InvalidOtp,

    /// An OTP was already sent for this phone within the cooldown window.
    #[error("please wait {retry_after} seconds before requesting a new OTP")]
    RateLimited {
        /// Seconds until a new OTP may be requested.
        retry_after: u64,
    },

    /// Login was requested for a phone with no account.
    #[error("no account found for this phone number")]
    UserNotFound,

    /// Registration was requested for a phone that already has an account.
    #[error("an account already exists for this phone number")]
    UserAlreadyExists,

    /// The registration name is missing or shorter than two characters.
    #[error("name must be at least 2 characters")]
    InvalidName,

    /// No outstanding OTP challenge for this phone.
    #[error("no OTP was requested for this phone number")]
    ChallengeNotFound,

    /// The OTP challenge expired before it was verified.
    #[error("OTP has expired, request a new one")]
    OtpExpired,

    /// The submitted code does not match the challenge.
    #[error("incorrect OTP, {remaining} attempts remaining")]
    OtpMismatch {
        /// Verification attempts left before the challenge locks.
        remaining: u8,
    },

    /// The challenge was attempted too many times.
    #[error("too many incorrect attempts, request a new OTP")]
    TooManyAttempts,

    /// The bearer token does not name a live session.
    #[error("invalid or expired session")]
    Unauthorized,

    /// The watchlist already contains the item.
    #[error("item is already in the watchlist")]
    DuplicateWatchlistItem,
}
