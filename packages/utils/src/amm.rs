// Query interface of a Uniswap-V2 style constant product pair and its factory.
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, QuerierWrapper, StdResult, Uint128, Uint256};

use crate::token::Token;

#[cw_serde]
#[derive(QueryResponses)]
pub enum PairQueryMsg {
    /// Tokens traded by the pair, in the order used by its reserves and accumulators.
    #[returns(PairInfoResponse)]
    PairInfo {},
    /// Current reserves and the (truncated) block time of the last reserves sync.
    #[returns(ReservesResponse)]
    Reserves {},
    /// Price accumulators as of the last reserves sync.
    #[returns(CumulativePricesResponse)]
    CumulativePrices {},
}

#[cw_serde]
pub struct PairInfoResponse {
    pub token0: Token,
    pub token1: Token,
}

#[cw_serde]
pub struct ReservesResponse {
    pub reserve0: Uint128,
    pub reserve1: Uint128,
    /// Block time in seconds modulo 2^32
    pub block_timestamp_last: u32,
}

#[cw_serde]
pub struct CumulativePricesResponse {
    /// Sum of `reserve1 / reserve0` (Q112.112) over every second since pair creation,
    /// wrapping on overflow.
    pub price0_cumulative_last: Uint256,
    /// Sum of `reserve0 / reserve1` (Q112.112), wrapping on overflow.
    pub price1_cumulative_last: Uint256,
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum FactoryQueryMsg {
    /// Address of the pair trading the two tokens, in any order.
    #[returns(FactoryPairResponse)]
    Pair { token_a: Token, token_b: Token },
}

#[cw_serde]
pub struct FactoryPairResponse {
    pub pair: Option<Addr>,
}

pub fn query_pair_info(querier: &QuerierWrapper, pair: &Addr) -> StdResult<PairInfoResponse> {
    querier.query_wasm_smart(pair, &PairQueryMsg::PairInfo {})
}

pub fn query_reserves(querier: &QuerierWrapper, pair: &Addr) -> StdResult<ReservesResponse> {
    querier.query_wasm_smart(pair, &PairQueryMsg::Reserves {})
}

pub fn query_cumulative_prices(
    querier: &QuerierWrapper,
    pair: &Addr,
) -> StdResult<CumulativePricesResponse> {
    querier.query_wasm_smart(pair, &PairQueryMsg::CumulativePrices {})
}

pub fn query_factory_pair(
    querier: &QuerierWrapper,
    factory: &Addr,
    token_a: &Token,
    token_b: &Token,
) -> StdResult<Option<Addr>> {
    let response: FactoryPairResponse = querier.query_wasm_smart(
        factory,
        &FactoryQueryMsg::Pair {
            token_a: token_a.clone(),
            token_b: token_b.clone(),
        },
    )?;
    Ok(response.pair)
}
