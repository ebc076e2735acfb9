//! Auth service.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::{Arc, Mutex, PoisonError},
};

use async_trait::async_trait;
use jiff::{SignedDuration, Timestamp};
use mockall::automock;
use rand::{Rng, SeedableRng, distributions::Alphanumeric, rngs::StdRng};
use rustc_hash::FxHashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::auth::{
    errors::AuthServiceError,
    models::{AuthSession, OtpPurpose, ProfileUpdate, User},
    otp::{self, OtpSender},
};

/// How long an OTP stays verifiable.
const OTP_TTL: SignedDuration = SignedDuration::from_secs(5 * 60);

/// Minimum gap between two OTPs for the same phone.
const OTP_COOLDOWN: SignedDuration = SignedDuration::from_secs(60);

/// Wrong codes tolerated before the challenge locks.
const MAX_OTP_ATTEMPTS: u8 = 3;

/// Length of a bearer session token.
const SESSION_TOKEN_LEN: usize = 48;

/// An outstanding OTP for one phone number.
#[derive(Debug, Clone)]
struct OtpChallenge {
    code: String,
    purpose: OtpPurpose,
    issued_at: Timestamp,
    expires_at: Timestamp,
    attempts: u8,
}

/// Users, OTP challenges and sessions held in process memory.
///
/// Users are keyed by phone number; one phone is one account. Session tokens
/// are opaque random strings and survive until logout.
pub struct InMemoryAuthService {
    users: RwLock<FxHashMap<String, User>>,
    challenges: RwLock<FxHashMap<String, OtpChallenge>>,
    sessions: RwLock<FxHashMap<String, Uuid>>,
    sender: Arc<dyn OtpSender>,
    rng: Mutex<StdRng>,
}

impl InMemoryAuthService {
    /// An empty auth store delivering OTPs through `sender`.
    #[must_use]
    pub fn new(sender: Arc<dyn OtpSender>) -> Self {
        Self::with_rng(sender, StdRng::from_entropy())
    }

    /// A store with a deterministic code and token sequence.
    #[must_use]
    pub fn seeded(sender: Arc<dyn OtpSender>, seed: u64) -> Self {
        Self::with_rng(sender, StdRng::seed_from_u64(seed))
    }

    fn with_rng(sender: Arc<dyn OtpSender>, rng: StdRng) -> Self {
        Self {
            users: RwLock::new(FxHashMap::default()),
            challenges: RwLock::new(FxHashMap::default()),
            sessions: RwLock::new(FxHashMap::default()),
            sender,
            rng: Mutex::new(rng),
        }
    }

    fn generate_code(&self) -> String {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);

        otp::generate_code(&mut *rng)
    }

    fn generate_token(&self) -> String {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);

        (&mut *rng)
            .sample_iter(Alphanumeric)
            .take(SESSION_TOKEN_LEN)
            .map(char::from)
            .collect()
    }
}

impl Debug for InMemoryAuthService {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("InMemoryAuthService").finish_non_exhaustive()
    }
}

/// An Indian mobile number: ten digits, leading digit 6-9.
fn valid_phone(phone: &str) -> bool {
    phone.len() == 10
        && phone.starts_with(['6', '7', '8', '9'])
        && phone.chars().all(|c| c.is_ascii_digit())
}

fn valid_code(code: &str) -> bool {
    code.len() == 6 && code.chars().all(|c| c.is_ascii_digit())
}

fn valid_name(name: Option<&str>) -> Option<String> {
    let trimmed = name?.trim();

    (trimmed.chars().count() >= 2).then(|| trimmed.to_string())
}

#[async_trait]
impl AuthService for InMemoryAuthService {
    async fn send_otp(&self, phone: &str, purpose: OtpPurpose) -> Result<(), AuthServiceError> {
        if !valid_phone(phone) {
            return Err(AuthServiceError::InvalidPhone);
        }

        let registered = self.users.read().await.contains_key(phone);

        match purpose {
            OtpPurpose::Login if !registered => return Err(AuthServiceError::UserNotFound),
            OtpPurpose::Register if registered => {
                return Err(AuthServiceError::UserAlreadyExists);
            }
            OtpPurpose::Login | OtpPurpose::Register => {}
        }

        let now = Timestamp::now();
        let mut challenges = self.challenges.write().await;

        if let Some(existing) = challenges.get(phone) {
            let elapsed = now.duration_since(existing.issued_at);

            if elapsed < OTP_COOLDOWN {
                let retry_after =
                    u64::try_from((OTP_COOLDOWN - elapsed).as_secs().max(1)).unwrap_or(1);

                return Err(AuthServiceError::RateLimited { retry_after });
            }
        }

        let code = self.generate_code();

        challenges.insert(
            phone.to_string(),
            OtpChallenge {
                code: code.clone(),
                purpose,
                issued_at: now,
                expires_at: now + OTP_TTL,
                attempts: 0,
            },
        );
        drop(challenges);

        self.sender.send(phone, &code);

        Ok(())
    }

    async fn verify_otp(
        &self,
        phone: &str,
        code: &str,
        purpose: OtpPurpose,
        name: Option<String>,
    ) -> Result<AuthSession, AuthServiceError> {
        if !valid_phone(phone) {
            return Err(AuthServiceError::InvalidPhone);
        }

        if !valid_code(code) {
            return Err(AuthServiceError::InvalidOtp);
        }

        // For registration the name gate runs before the challenge is
        // consumed, so a typo does not burn the code.
        let name = match purpose {
            OtpPurpose::Register => {
                Some(valid_name(name.as_deref()).ok_or(AuthServiceError::InvalidName)?)
            }
            OtpPurpose::Login => None,
        };

        let now = Timestamp::now();
        let mut challenges = self.challenges.write().await;

        let challenge = challenges
            .get_mut(phone)
            .filter(|challenge| challenge.purpose == purpose)
            .ok_or(AuthServiceError::ChallengeNotFound)?;

        if now > challenge.expires_at {
            challenges.remove(phone);

            return Err(AuthServiceError::OtpExpired);
        }

        if challenge.attempts >= MAX_OTP_ATTEMPTS {
            return Err(AuthServiceError::TooManyAttempts);
        }

        if challenge.code != code {
            challenge.attempts += 1;

            let remaining = MAX_OTP_ATTEMPTS - challenge.attempts;

            return Err(if remaining == 0 {
                AuthServiceError::TooManyAttempts
            } else {
                AuthServiceError::OtpMismatch { remaining }
            });
        }

        challenges.remove(phone);
        drop(challenges);

        let mut users = self.users.write().await;

        let user = match purpose {
            OtpPurpose::Register => {
                if users.contains_key(phone) {
                    return Err(AuthServiceError::UserAlreadyExists);
                }

                let user = User {
                    uuid: Uuid::now_v7(),
                    phone: phone.to_string(),
                    name: name.unwrap_or_default(),
                    email: None,
                    saved_items: Vec::new(),
                    created_at: now,
                    last_login: now,
                };

                users.insert(phone.to_string(), user.clone());

                user
            }
            OtpPurpose::Login => {
                let user = users.get_mut(phone).ok_or(AuthServiceError::UserNotFound)?;

                user.last_login = now;

                user.clone()
            }
        };
        drop(users);

        let token = self.generate_token();

        self.sessions.write().await.insert(token.clone(), user.uuid);

        Ok(AuthSession { token, user })
    }

    async fn authenticate_bearer(&self, token: &str) -> Result<Uuid, AuthServiceError> {
        self.sessions
            .read()
            .await
            .get(token)
            .copied()
            .ok_or(AuthServiceError::Unauthorized)
    }

    async fn profile(&self, user: Uuid) -> Result<User, AuthServiceError> {
        self.users
            .read()
            .await
            .values()
            .find(|candidate| candidate.uuid == user)
            .cloned()
            .ok_or(AuthServiceError::Unauthorized)
    }

    async fn update_profile(
        &self,
        user: Uuid,
        update: ProfileUpdate,
    ) -> Result<User, AuthServiceError> {
        let mut users = self.users.write().await;

        let user = users
            .values_mut()
            .find(|candidate| candidate.uuid == user)
            .ok_or(AuthServiceError::Unauthorized)?;

        if let Some(name) = update.name {
            user.name = valid_name(Some(&name)).ok_or(AuthServiceError::InvalidName)?;
        }

        if let Some(email) = update.email {
            user.email = Some(email);
        }

        if let Some(saved_items) = update.saved_items {
            user.saved_items = saved_items;
        }

        Ok(user.clone())
    }

    async fn add_watchlist_item(
        &self,
        user: Uuid,
        item_id: &str,
    ) -> Result<User, AuthServiceError> {
        let mut users = self.users.write().await;

        let user = users
            .values_mut()
            .find(|candidate| candidate.uuid == user)
            .ok_or(AuthServiceError::Unauthorized)?;

        if user.saved_items.iter().any(|saved| saved == item_id) {
            return Err(AuthServiceError::DuplicateWatchlistItem);
        }

        user.saved_items.push(item_id.to_string());

        Ok(user.clone())
    }

    async fn logout(&self, token: &str) -> Result<(), AuthServiceError> {
        self.sessions.write().await.remove(token);

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Issues an OTP to a phone number for the given purpose.
    async fn send_otp(&self, phone: &str, purpose: OtpPurpose) -> Result<(), AuthServiceError>;

    /// Verifies an OTP, creating or signing in the user and opening a
    /// session.
    async fn verify_otp(
        &self,
        phone: &str,
        code: &str,
        purpose: OtpPurpose,
        name: Option<String>,
    ) -> Result<AuthSession, AuthServiceError>;

    /// Resolves a bearer token to its user.
    async fn authenticate_bearer(&self, token: &str) -> Result<Uuid, AuthServiceError>;

    /// Retrieves a user's profile.
    async fn profile(&self, user: Uuid) -> Result<User, AuthServiceError>;

    /// Applies a partial profile update.
    async fn update_profile(
        &self,
        user: Uuid,
        update: ProfileUpdate,
    ) -> Result<User, AuthServiceError>;

    /// Adds an item to the user's watchlist.
    async fn add_watchlist_item(
        &self,
        user: Uuid,
        item_id: &str,
    ) -> Result<User, AuthServiceError>;

    /// Closes the session behind a bearer token.
    async fn logout(&self, token: &str) -> Result<(), AuthServiceError>;
}
