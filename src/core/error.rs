//! Error type for rejected transactions.
//!
//! Every failing operation aborts without mutating state and reports one of
//! these kinds. Nothing here is fatal: a `GameError` is a rejected
//! transaction the caller may inspect and retry.

use crate::characters::{TemplateId, TokenId};

use super::account::AccountId;

/// Every way an operation can be rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameError {
    /// Mint or construction referenced a template index outside the catalog.
    InvalidTemplate(TemplateId),
    /// Catalog lookup past the end of the template list.
    OutOfRange(TemplateId),
    /// The caller does not hold the named token.
    NotOwner {
        /// The token the caller tried to act on.
        token: TokenId,
        /// The account that made the call.
        caller: AccountId,
    },
    /// The target account cannot receive tokens (null identity).
    InvalidRecipient(AccountId),
    /// The attacking character is at zero health.
    CharacterDefeated(TokenId),
    /// The boss is already at zero health.
    BossAlreadyDefeated,
    /// Construction column arrays differ in length.
    ColumnMismatch {
        /// Length of the name column.
        names: usize,
        /// Length of the image column.
        images: usize,
        /// Length of the health column.
        hps: usize,
        /// Length of the attack column.
        attacks: usize,
    },
    /// A health or attack value that must be positive was zero.
    InvalidStats {
        /// Which stat was rejected.
        stat: &'static str,
    },
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::InvalidTemplate(template) => {
                write!(f, "no such character template: {}", template)
            }
            GameError::OutOfRange(template) => {
                write!(f, "catalog index out of range: {}", template)
            }
            GameError::NotOwner { token, caller } => {
                write!(f, "{} does not own {}", caller, token)
            }
            GameError::InvalidRecipient(account) => {
                write!(f, "{} cannot receive tokens", account)
            }
            GameError::CharacterDefeated(token) => {
                write!(f, "{} is defeated and cannot attack", token)
            }
            GameError::BossAlreadyDefeated => {
                write!(f, "the boss is already defeated")
            }
            GameError::ColumnMismatch {
                names,
                images,
                hps,
                attacks,
            } => {
                write!(
                    f,
                    "template columns differ in length: {} names, {} images, {} hps, {} attacks",
                    names, images, hps, attacks
                )
            }
            GameError::InvalidStats { stat } => {
                write!(f, "{} must be positive", stat)
            }
        }
    }
}

impl std::error::Error for GameError {}
