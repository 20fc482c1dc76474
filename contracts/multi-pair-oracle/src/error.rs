use cosmwasm_std::{Addr, StdError};
use cw_utils::PaymentError;
use thiserror::Error;
use utils::{pair_key::PairKeyError, token::Token, window::WindowError};

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("{0}")]
    PairKey(#[from] PairKeyError),

    #[error("{0}")]
    Window(#[from] WindowError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("Factory has no pair for {token_a} and {token_b}")]
    PairNotFound { token_a: Token, token_b: Token },

    #[error("Pair {0} is already registered")]
    PairAlreadyRegistered(Addr),

    #[error("No registered pair for {token_a} and {token_b}")]
    PairNotRegistered { token_a: Token, token_b: Token },

    #[error("Invalid path length {0}, at least two tokens are required")]
    InvalidPathLength(usize),

    #[error("{token_a}-{token_b} pair does not exist")]
    PairDoesNotExist { token_a: Token, token_b: Token },
}
