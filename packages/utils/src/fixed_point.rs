//! Unsigned Q112.112 fixed point numbers.
//!
//! A value `x` is stored as the integer `x * 2^112` inside a [`Uint256`]. Reserves are at
//! most 128 bits wide, so an encoded price always fits in 240 bits. Products with token
//! amounts are taken in [`Uint512`] before shifting the fraction back out.

use cosmwasm_std::{StdError, StdResult, Uint128, Uint256, Uint512};

/// Number of fractional bits.
pub const RESOLUTION: u32 = 112;

/// `1.0` in Q112.112.
pub fn q112() -> Uint256 {
    Uint256::from_u128(1u128 << RESOLUTION)
}

/// Encodes an integer as Q112.112.
pub fn encode(value: Uint128) -> Uint256 {
    Uint256::from(value) << RESOLUTION
}

/// `numerator / denominator` as Q112.112, rounded down.
pub fn fraction(numerator: Uint128, denominator: Uint128) -> StdResult<Uint256> {
    Ok(encode(numerator).checked_div(Uint256::from(denominator))?)
}

/// Multiplies a Q112.112 number by an integer and truncates the result to an integer.
///
/// Fails if the decoded result does not fit into [`Uint128`].
pub fn mul_decode(price: Uint256, amount: Uint128) -> StdResult<Uint128> {
    let product = Uint512::from(price) * Uint512::from(amount);
    let decoded = Uint256::try_from(product >> RESOLUTION)?;
    Uint128::try_from(decoded).map_err(|_| {
        StdError::generic_err(format!(
            "Overflow: {} * {} does not fit into Uint128",
            decode_lossy(price),
            amount
        ))
    })
}

/// Integer part of a Q112.112 number, for display purposes.
pub fn decode_lossy(price: Uint256) -> Uint256 {
    price >> RESOLUTION
}
