//! Event history.
//!
//! Every committed transaction appends exactly one `GameEvent`; rejected
//! calls append nothing. The history is append-only and never trimmed - it
//! is the observable record external callers would consume as emitted
//! events.

use serde::{Deserialize, Serialize};

use crate::battle::RoundOutcome;
use crate::characters::{TemplateId, TokenId};
use crate::core::AccountId;

/// One committed transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A token was minted.
    CharacterMinted {
        /// The minting account (and first owner).
        owner: AccountId,
        /// The new token.
        token: TokenId,
        /// Template it was minted from.
        template: TemplateId,
    },

    /// A token changed hands.
    CharacterTransferred {
        /// Previous owner.
        from: AccountId,
        /// New owner.
        to: AccountId,
        /// The token that moved.
        token: TokenId,
    },

    /// A battle round resolved.
    RoundFought(RoundOutcome),
}
