//! Signup configuration and shared handler state.

use std::sync::Arc;

use super::hasher::PasswordHasher;
use super::otp::OtpDispatcher;
use super::store::UserStore;

const DEFAULT_BCRYPT_COST: u32 = 10;
const DEFAULT_MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Clone, Debug)]
pub struct SignupConfig {
    bcrypt_cost: u32,
    min_password_length: usize,
}

impl SignupConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            bcrypt_cost: DEFAULT_BCRYPT_COST,
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
        }
    }

    #[must_use]
    pub fn with_bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }

    #[must_use]
    pub fn with_min_password_length(mut self, length: usize) -> Self {
        self.min_password_length = length;
        self
    }

    #[must_use]
    pub fn bcrypt_cost(&self) -> u32 {
        self.bcrypt_cost
    }

    #[must_use]
    pub fn min_password_length(&self) -> usize {
        self.min_password_length
    }
}

impl Default for SignupConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared state for the signup handler: configuration plus the store,
/// hasher, and dispatcher seams.
pub struct SignupState {
    config: SignupConfig,
    store: Arc<dyn UserStore>,
    hasher: Arc<dyn PasswordHasher>,
    otp: Arc<dyn OtpDispatcher>,
}

impl SignupState {
    #[must_use]
    pub fn new(
        config: SignupConfig,
        store: Arc<dyn UserStore>,
        hasher: Arc<dyn PasswordHasher>,
        otp: Arc<dyn OtpDispatcher>,
    ) -> Self {
        Self {
            config,
            store,
            hasher,
            otp,
        }
    }

    #[must_use]
    pub fn config(&self) -> &SignupConfig {
        &self.config
    }

    pub(super) fn store(&self) -> &dyn UserStore {
        self.store.as_ref()
    }

    pub(super) fn hasher(&self) -> &dyn PasswordHasher {
        self.hasher.as_ref()
    }

    pub(super) fn otp(&self) -> &dyn OtpDispatcher {
        self.otp.as_ref()
    }
}
