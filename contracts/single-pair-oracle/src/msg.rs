use crate::state::Config;

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;
use utils::{token::Token, window::PriceWindow};

#[cw_serde]
pub struct InstantiateMsg {
    /// Factory contract resolving the tokens to a pair address
    pub factory: String,
    /// Tracked tokens, in any order
    pub token_a: Token,
    pub token_b: Token,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Close the current window and start a new one.
    /// Fails unless a full day passed since the window was opened.
    Update {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Returns the oracle configuration.
    #[returns(Config)]
    Config {},
    /// Returns the tracked pair's price window
    #[returns(PriceWindow)]
    PriceWindow {},
    /// Converts `amount_in` of `token` into the other token at the average price.
    #[returns(ConsultResponse)]
    Consult { token: Token, amount_in: Uint128 },
}

#[cw_serde]
pub struct ConsultResponse {
    pub amount_out: Uint128,
}
