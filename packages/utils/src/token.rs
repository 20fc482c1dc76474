use cosmwasm_std::{Api, StdResult, Uint128};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::coin::Coin;

use std::fmt;

/// Universal token type which is either a native token, or cw20 token
#[derive(
    Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema, PartialOrd, Ord, Hash,
)]
pub enum Token {
    /// Native token of given name
    Native(String),
    /// Cw20 token with its cw20 contract address
    Cw20(String),
}

impl Token {
    pub fn new_native(denom: &str) -> Self {
        Self::Native(denom.to_owned())
    }

    pub fn new_cw20(denom: &str) -> Self {
        Self::Cw20(denom.to_owned())
    }

    /// Storage key of the token: a variant tag followed by the denom or address, so a
    /// native denom never shares a key with a cw20 address of the same name.
    /// Byte order matches the derived `Ord`.
    pub fn storage_key(&self) -> Vec<u8> {
        let (tag, name) = match self {
            Token::Native(denom) => (0u8, denom),
            Token::Cw20(addr) => (1u8, addr),
        };
        let mut key = Vec::with_capacity(name.len() + 1);
        key.push(tag);
        key.extend_from_slice(name.as_bytes());
        key
    }

    /// Cw20 tokens have to point at a valid contract address.
    pub fn validate(&self, api: &dyn Api) -> StdResult<()> {
        if let Token::Cw20(addr) = self {
            api.addr_validate(addr)?;
        }
        Ok(())
    }

    pub fn amount(&self, amount: impl Into<Uint128>) -> Coin {
        Coin {
            amount: amount.into(),
            denom: self.clone(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Native(s) => write!(f, "{}", s),
            Token::Cw20(s) => write!(f, "{}", s),
        }
    }
}
