use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, QuerierWrapper, StdResult, Timestamp, Uint256};

use crate::amm::{
    query_cumulative_prices, query_reserves, CumulativePricesResponse, ReservesResponse,
};
use crate::fixed_point::fraction;

/// Point in time read of a pair's price accumulators.
#[cw_serde]
#[derive(Eq)]
pub struct CumulativeSnapshot {
    pub price0_cumulative: Uint256,
    pub price1_cumulative: Uint256,
    /// Block time in seconds modulo 2^32
    pub timestamp: u32,
}

/// Block time truncated to 32 bits, the same way pairs record it.
pub fn block_timestamp(time: &Timestamp) -> u32 {
    (time.seconds() % (1u64 << 32)) as u32
}

/// Seconds between two truncated timestamps. Wraps around 2^32.
pub fn elapsed_since(earlier: u32, later: u32) -> u32 {
    later.wrapping_sub(earlier)
}

/// Reads the pair's accumulators as they would be if the pair synced at `now`.
///
/// Pairs only accumulate when their reserves change, so a pair without recent activity
/// reports stale sums. The missing part is extrapolated from the current reserves.
pub fn current_cumulative_prices(
    querier: &QuerierWrapper,
    pair: &Addr,
    now: &Timestamp,
) -> StdResult<CumulativeSnapshot> {
    let prices = query_cumulative_prices(querier, pair)?;
    let reserves = query_reserves(querier, pair)?;
    extrapolate(&prices, &reserves, block_timestamp(now))
}

/// Adds `price * (now - block_timestamp_last)` to the stored accumulators.
pub fn extrapolate(
    prices: &CumulativePricesResponse,
    reserves: &ReservesResponse,
    now: u32,
) -> StdResult<CumulativeSnapshot> {
    let mut snapshot = CumulativeSnapshot {
        price0_cumulative: prices.price0_cumulative_last,
        price1_cumulative: prices.price1_cumulative_last,
        timestamp: now,
    };

    // an empty pair does not accumulate
    if reserves.block_timestamp_last != now
        && !reserves.reserve0.is_zero()
        && !reserves.reserve1.is_zero()
    {
        let elapsed = Uint256::from(u128::from(elapsed_since(
            reserves.block_timestamp_last,
            now,
        )));
        let price0 = fraction(reserves.reserve1, reserves.reserve0)?;
        let price1 = fraction(reserves.reserve0, reserves.reserve1)?;
        snapshot.price0_cumulative = snapshot
            .price0_cumulative
            .wrapping_add(price0.wrapping_mul(elapsed));
        snapshot.price1_cumulative = snapshot
            .price1_cumulative
            .wrapping_add(price1.wrapping_mul(elapsed));
    }

    Ok(snapshot)
}
