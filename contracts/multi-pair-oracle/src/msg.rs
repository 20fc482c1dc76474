use crate::state::Config;

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};
use utils::{token::Token, window::PriceWindow};

#[cw_serde]
pub struct InstantiateMsg {
    /// Factory contract resolving token pairs to pair addresses
    pub factory: String,
    /// Address allowed to manage registered pairs, defaults to the sender
    pub owner: Option<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Start tracking the pair of given tokens. Only callable by the owner.
    /// The order of tokens doesn't matter.
    AddPair { token_a: Token, token_b: Token },
    /// Stop tracking the pair of given tokens. Only callable by the owner.
    RemovePair { token_a: Token, token_b: Token },
    /// Refresh the average price of every pair whose window is at least a day old.
    /// Pairs updated more recently are skipped.
    Update {},
    /// Hand over pair management. Only callable by the owner.
    TransferOwnership { new_owner: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Returns the oracle configuration.
    #[returns(Config)]
    Config {},
    /// Returns registered pair's address for a given pair of tokens
    #[returns(PairResponse)]
    Pair { token_a: Token, token_b: Token },
    /// Returns the price window of a registered pair
    #[returns(Option<PriceWindow>)]
    Oracle { pair: String },
    #[returns(AllPairsLengthResponse)]
    AllPairsLength {},
    /// Lists registered pairs in registration order
    #[returns(AllPairsResponse)]
    AllPairs {
        start_after: Option<String>,
        limit: Option<u32>,
    },
    /// Converts `amount_in` of `path[0]` into the last token of the path, hop by hop,
    /// at the average prices of registered pairs.
    #[returns(ConsultResponse)]
    Consult { path: Vec<Token>, amount_in: Uint128 },
}

#[cw_serde]
pub struct PairResponse {
    /// `None` if the pair is not registered
    pub pair: Option<Addr>,
}

#[cw_serde]
pub struct AllPairsLengthResponse {
    pub length: u64,
}

#[cw_serde]
pub struct AllPairsResponse {
    pub pairs: Vec<Addr>,
}

#[cw_serde]
pub struct ConsultResponse {
    pub amount_out: Uint128,
}
