use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdError, StdResult, Uint128,
    Uint256,
};
use cw_storage_plus::Item;

use utils::{
    amm::{CumulativePricesResponse, PairInfoResponse, PairQueryMsg, ReservesResponse},
    coin::Coin,
    cumulative::{block_timestamp, elapsed_since},
    fixed_point::fraction,
    pair_key::TokenPairKey,
    token::Token,
};

const PAIR_INFO: Item<PairInfoResponse> = Item::new("pair_info");
const RESERVES: Item<ReservesResponse> = Item::new("reserves");
const CUMULATIVE_PRICES: Item<CumulativePricesResponse> = Item::new("cumulative_prices");

#[cw_serde]
pub struct InstantiateMsg {
    pub token_a: Token,
    pub token_b: Token,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Replaces the reserves, as a mint, burn or swap would.
    /// Prices are accumulated for the time the old reserves were in place.
    Sync { reserves: Vec<Coin> },
}

pub fn instantiate(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> StdResult<Response> {
    let key = TokenPairKey::new(msg.token_a, msg.token_b)
        .map_err(|err| StdError::generic_err(err.to_string()))?;
    PAIR_INFO.save(
        deps.storage,
        &PairInfoResponse {
            token0: key.first().clone(),
            token1: key.second().clone(),
        },
    )?;
    RESERVES.save(
        deps.storage,
        &ReservesResponse {
            reserve0: Uint128::zero(),
            reserve1: Uint128::zero(),
            block_timestamp_last: block_timestamp(&env.block.time),
        },
    )?;
    CUMULATIVE_PRICES.save(
        deps.storage,
        &CumulativePricesResponse {
            price0_cumulative_last: Uint256::zero(),
            price1_cumulative_last: Uint256::zero(),
        },
    )?;

    Ok(Response::new())
}

pub fn execute(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    msg: ExecuteMsg,
) -> StdResult<Response> {
    match msg {
        ExecuteMsg::Sync { reserves } => sync(deps, env, reserves),
    }
}

fn reserve_of(reserves: &[Coin], token: &Token) -> StdResult<Uint128> {
    reserves
        .iter()
        .find(|coin| &coin.denom == token)
        .map(|coin| coin.amount)
        .ok_or_else(|| StdError::generic_err(format!("Missing reserve of {}", token)))
}

fn sync(deps: DepsMut, env: Env, new_reserves: Vec<Coin>) -> StdResult<Response> {
    let info = PAIR_INFO.load(deps.storage)?;
    let mut reserves = RESERVES.load(deps.storage)?;
    let mut prices = CUMULATIVE_PRICES.load(deps.storage)?;

    let now = block_timestamp(&env.block.time);
    let elapsed = elapsed_since(reserves.block_timestamp_last, now);
    if elapsed > 0 && !reserves.reserve0.is_zero() && !reserves.reserve1.is_zero() {
        let elapsed = Uint256::from(u128::from(elapsed));
        prices.price0_cumulative_last = prices
            .price0_cumulative_last
            .wrapping_add(fraction(reserves.reserve1, reserves.reserve0)?.wrapping_mul(elapsed));
        prices.price1_cumulative_last = prices
            .price1_cumulative_last
            .wrapping_add(fraction(reserves.reserve0, reserves.reserve1)?.wrapping_mul(elapsed));
    }

    reserves.reserve0 = reserve_of(&new_reserves, &info.token0)?;
    reserves.reserve1 = reserve_of(&new_reserves, &info.token1)?;
    reserves.block_timestamp_last = now;

    RESERVES.save(deps.storage, &reserves)?;
    CUMULATIVE_PRICES.save(deps.storage, &prices)?;

    Ok(Response::new()
        .add_attribute("action", "sync")
        .add_attribute("reserve0", reserves.reserve0)
        .add_attribute("reserve1", reserves.reserve1))
}

pub fn query(deps: Deps, _env: Env, msg: PairQueryMsg) -> StdResult<Binary> {
    match msg {
        PairQueryMsg::PairInfo {} => to_binary(&PAIR_INFO.load(deps.storage)?),
        PairQueryMsg::Reserves {} => to_binary(&RESERVES.load(deps.storage)?),
        PairQueryMsg::CumulativePrices {} => to_binary(&CUMULATIVE_PRICES.load(deps.storage)?),
    }
}
