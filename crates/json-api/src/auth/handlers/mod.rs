//! Auth Handlers

pub(crate) mod logout;
pub(crate) mod profile;
pub(crate) mod send_otp;
pub(crate) mod update_profile;
pub(crate) mod verify_otp;
