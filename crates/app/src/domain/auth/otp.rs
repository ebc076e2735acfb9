//! OTP delivery.
//!
//! Delivery is a capability seam: the default sender writes the SMS line to
//! the log, which is where the code is read from during development.

use mockall::automock;
use rand::Rng;
use tracing::info;

/// Sends one-time passwords to a phone number.
#[automock]
pub trait OtpSender: Send + Sync {
    /// Delivers `code` to `phone`.
    fn send(&self, phone: &str, code: &str);
}

/// An [`OtpSender`] that logs the SMS instead of delivering it.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogOtpSender;

impl OtpSender for LogOtpSender {
    fn send(&self, phone: &str, code: &str) {
        info!(phone, code, "OTP issued");
    }
}

/// Draws a six-digit OTP code.
pub fn generate_code<R: Rng>(rng: &mut R) -> String {
    rng.gen_range(100_000..1_000_000_u32).to_string()
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn codes_are_six_digits() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let code = generate_code(&mut rng);

            assert_eq!(code.len(), 6, "code {code} is not six digits");
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }
}
