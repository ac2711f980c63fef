//! Account identification.
//!
//! Every token owner is an `AccountId`. The zero id is reserved as the null
//! identity: it can never own, mint, or receive tokens. Transfers targeting
//! it are rejected with `InvalidRecipient`.

use serde::{Deserialize, Serialize};

/// Unique identifier for an account.
///
/// Accounts are opaque to the engine; callers assign meaning (wallet,
/// session, test fixture). `AccountId::NULL` is reserved and can never
/// hold tokens.
///
/// ```
/// use ace_arena::AccountId;
///
/// let owner = AccountId::new(7);
/// assert!(!owner.is_null());
/// assert!(AccountId::NULL.is_null());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AccountId(pub u64);

impl AccountId {
    /// The reserved null identity.
    pub const NULL: AccountId = AccountId(0);

    /// Create a new account ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Check whether this is the reserved null identity.
    #[must_use]
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Account({})", self.0)
    }
}

impl From<u64> for AccountId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}
