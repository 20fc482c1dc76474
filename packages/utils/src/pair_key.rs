use cosmwasm_schema::cw_serde;
use thiserror::Error;

use crate::token::Token;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PairKeyError {
    #[error("Pair needs two distinct tokens, got {0} twice")]
    IdenticalTokens(Token),
}

/// Order independent identifier of a trading pair.
///
/// The two tokens are kept sorted, so `TokenPairKey::new(a, b)` and
/// `TokenPairKey::new(b, a)` are equal and map onto the same storage key.
#[cw_serde]
#[derive(Eq, PartialOrd, Ord, Hash)]
pub struct TokenPairKey {
    first: Token,
    second: Token,
}

impl TokenPairKey {
    pub fn new(token_a: Token, token_b: Token) -> Result<Self, PairKeyError> {
        match token_a.cmp(&token_b) {
            std::cmp::Ordering::Less => Ok(Self {
                first: token_a,
                second: token_b,
            }),
            std::cmp::Ordering::Greater => Ok(Self {
                first: token_b,
                second: token_a,
            }),
            std::cmp::Ordering::Equal => Err(PairKeyError::IdenticalTokens(token_a)),
        }
    }

    pub fn first(&self) -> &Token {
        &self.first
    }

    pub fn second(&self) -> &Token {
        &self.second
    }

    /// Whether `token` is one of the two sides of the pair.
    pub fn contains(&self, token: &Token) -> bool {
        &self.first == token || &self.second == token
    }

    /// Storage key in ascending order, suitable for `Map<(Vec<u8>, Vec<u8>), _>`.
    pub fn as_key(&self) -> (Vec<u8>, Vec<u8>) {
        (self.first.storage_key(), self.second.storage_key())
    }
}
