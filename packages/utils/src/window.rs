use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, QuerierWrapper, StdError, Uint128, Uint256};
use thiserror::Error;

use crate::amm::{query_cumulative_prices, query_pair_info, query_reserves};
use crate::cumulative::{elapsed_since, CumulativeSnapshot};
use crate::fixed_point::mul_decode;
use crate::pair_key::TokenPairKey;
use crate::token::Token;

/// Minimal time between two price window updates, in seconds.
pub const PERIOD: u32 = 24 * 60 * 60;

#[derive(Error, Debug, PartialEq)]
pub enum WindowError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Period not elapsed: {elapsed}s passed since last update, {period}s required")]
    PeriodNotElapsed { elapsed: u32, period: u32 },

    #[error("Unknown token {token}, pair trades {token0} and {token1}")]
    UnknownToken {
        token: Token,
        token0: Token,
        token1: Token,
    },

    #[error("No average price for pair {0} yet, it has to be updated first")]
    NoAverage(Addr),

    #[error("Pair {0} has no reserves")]
    NoReserves(Addr),

    #[error("Pair {pair} trades {token0} and {token1}, not the requested tokens")]
    UnexpectedTokens {
        pair: Addr,
        token0: Token,
        token1: Token,
    },
}

/// Time weighted average prices as Q112.112.
#[cw_serde]
#[derive(Eq)]
pub struct AveragePrices {
    /// Price of token0 denominated in token1
    pub price0: Uint256,
    /// Price of token1 denominated in token0
    pub price1: Uint256,
}

/// Average price of a single pair over the last completed window.
#[cw_serde]
pub struct PriceWindow {
    pub pair: Addr,
    pub token0: Token,
    pub token1: Token,
    /// Accumulators at the start of the current window
    pub last: CumulativeSnapshot,
    /// `None` until the first window completes
    pub average: Option<AveragePrices>,
}

impl PriceWindow {
    pub fn new(pair: Addr, token0: Token, token1: Token, seed: CumulativeSnapshot) -> Self {
        Self {
            pair,
            token0,
            token1,
            last: seed,
            average: None,
        }
    }

    /// Starts tracking `pair`, which must trade the two tokens of `tokens`.
    ///
    /// The window starts at the pair's last reserves sync, with the accumulators the pair
    /// stored then. The first update is due one period after that sync.
    pub fn open(
        querier: &QuerierWrapper,
        pair: &Addr,
        tokens: &TokenPairKey,
    ) -> Result<Self, WindowError> {
        let info = query_pair_info(querier, pair)?;
        if !tokens.contains(&info.token0) || !tokens.contains(&info.token1) {
            return Err(WindowError::UnexpectedTokens {
                pair: pair.clone(),
                token0: info.token0,
                token1: info.token1,
            });
        }
        let reserves = query_reserves(querier, pair)?;
        if reserves.reserve0.is_zero() || reserves.reserve1.is_zero() {
            return Err(WindowError::NoReserves(pair.clone()));
        }
        let prices = query_cumulative_prices(querier, pair)?;
        let seed = CumulativeSnapshot {
            price0_cumulative: prices.price0_cumulative_last,
            price1_cumulative: prices.price1_cumulative_last,
            timestamp: reserves.block_timestamp_last,
        };
        Ok(Self::new(pair.clone(), info.token0, info.token1, seed))
    }

    pub fn elapsed(&self, current: &CumulativeSnapshot) -> u32 {
        elapsed_since(self.last.timestamp, current.timestamp)
    }

    pub fn is_due(&self, current: &CumulativeSnapshot) -> bool {
        self.elapsed(current) >= PERIOD
    }

    /// Closes the window at `current` and starts the next one.
    ///
    /// The average covers the whole window, so a reserves shock lasting a few blocks is
    /// diluted by the window length.
    pub fn update(&mut self, current: CumulativeSnapshot) -> Result<AveragePrices, WindowError> {
        let elapsed = self.elapsed(&current);
        if elapsed < PERIOD {
            return Err(WindowError::PeriodNotElapsed {
                elapsed,
                period: PERIOD,
            });
        }

        let elapsed = Uint256::from(u128::from(elapsed));
        let average = AveragePrices {
            price0: current
                .price0_cumulative
                .wrapping_sub(self.last.price0_cumulative)
                .checked_div(elapsed)
                .map_err(StdError::from)?,
            price1: current
                .price1_cumulative
                .wrapping_sub(self.last.price1_cumulative)
                .checked_div(elapsed)
                .map_err(StdError::from)?,
        };

        self.last = current;
        self.average = Some(average.clone());
        Ok(average)
    }

    /// Converts `amount_in` of `token` into the other token of the pair at the average price.
    pub fn consult(&self, token: &Token, amount_in: Uint128) -> Result<Uint128, WindowError> {
        let price = {
            let average = self
                .average
                .as_ref()
                .ok_or_else(|| WindowError::NoAverage(self.pair.clone()))?;
            if token == &self.token0 {
                average.price0
            } else if token == &self.token1 {
                average.price1
            } else {
                return Err(WindowError::UnknownToken {
                    token: token.clone(),
                    token0: self.token0.clone(),
                    token1: self.token1.clone(),
                });
            }
        };
        Ok(mul_decode(price, amount_in)?)
    }
}
