use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;

use crate::token::Token;

/// Amount of a universal [`Token`], native or cw20.
#[cw_serde]
pub struct Coin {
    pub denom: Token,
    pub amount: Uint128,
}
