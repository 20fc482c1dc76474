use cosmwasm_std::StdError;
use thiserror::Error;
use utils::{pair_key::PairKeyError, token::Token, window::WindowError};

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    PairKey(#[from] PairKeyError),

    #[error("{0}")]
    Window(#[from] WindowError),

    #[error("Factory has no pair for {token_a} and {token_b}")]
    PairNotFound { token_a: Token, token_b: Token },
}
