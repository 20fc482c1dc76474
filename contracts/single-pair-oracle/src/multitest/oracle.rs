use super::suite::{SuiteBuilder, E18, SECONDS_PER_DAY};

use cosmwasm_std::{Uint128, Uint256};

use crate::ContractError;
use utils::{
    fixed_point::{fraction, q112},
    token::Token,
    window::{WindowError, PERIOD},
};

#[test]
fn instantiate_opens_window() {
    let suite = SuiteBuilder::new().build();

    let config = suite.query_config().unwrap();
    assert_eq!(config.pair, suite.pair);
    assert_eq!(config.factory, suite.amm.factory.address);

    let window = suite.query_price_window().unwrap();
    assert_eq!(window.pair, suite.pair);
    assert_eq!(window.token0, suite.token_a);
    assert_eq!(window.token1, suite.token_b);
    assert_eq!(window.average, None);
    assert_eq!(
        window.last.timestamp,
        suite.app.block_info().time.seconds() as u32
    );
}

#[test]
fn window_starts_at_pair_sync() {
    let mut suite = SuiteBuilder::new().with_instantiate_delay(10).build();
    let synced_at = suite.app.block_info().time.seconds() as u32 - 10;

    let window = suite.query_price_window().unwrap();
    assert_eq!(window.last.timestamp, synced_at);
    let prices = suite
        .amm
        .query_cumulative_prices(&suite.app, &suite.pair)
        .unwrap();
    assert_eq!(window.last.price0_cumulative, prices.price0_cumulative_last);
    assert_eq!(window.last.price1_cumulative, prices.price1_cumulative_last);

    // due one period after the sync, not after the instantiation
    suite.advance_seconds(SECONDS_PER_DAY - 11);
    suite.update("keeper").unwrap_err();
    suite.advance_seconds(1);
    suite.update("keeper").unwrap();

    let a = suite.token_a.clone();
    assert_eq!(suite.consult(&a, E18).unwrap(), Uint128::new(E18 / 2));
}

#[test]
fn instantiate_with_reversed_tokens() {
    let suite = SuiteBuilder::new()
        .with_tokens(Token::new_native("token_b"), Token::new_native("token_a"))
        .build();

    let window = suite.query_price_window().unwrap();
    assert_eq!(window.token0, Token::new_native("token_a"));
    assert_eq!(window.token1, Token::new_native("token_b"));
}

#[test]
fn instantiate_unlisted_pair() {
    let err = SuiteBuilder::new().unlisted().try_build().err().unwrap();
    assert_eq!(
        ContractError::PairNotFound {
            token_a: Token::new_native("token_a"),
            token_b: Token::new_native("token_b"),
        },
        err.downcast().unwrap()
    );
}

#[test]
fn instantiate_without_reserves() {
    let err = SuiteBuilder::new().without_reserves().try_build().err().unwrap();
    match err.downcast::<ContractError>().unwrap() {
        ContractError::Window(WindowError::NoReserves(_)) => {}
        err => panic!("unexpected error: {}", err),
    }

    let err = SuiteBuilder::new()
        .with_reserves(100 * E18, 0)
        .try_build()
        .err()
        .unwrap();
    match err.downcast::<ContractError>().unwrap() {
        ContractError::Window(WindowError::NoReserves(_)) => {}
        err => panic!("unexpected error: {}", err),
    }
}

#[test]
fn update_requires_full_period() {
    let mut suite = SuiteBuilder::new().build();

    suite.advance_seconds(23 * 60 * 60);
    let err = suite.update("keeper").unwrap_err();
    assert_eq!(
        ContractError::Window(WindowError::PeriodNotElapsed {
            elapsed: 23 * 60 * 60,
            period: PERIOD,
        }),
        err.downcast().unwrap()
    );

    suite.advance_seconds(60 * 60 - 1);
    suite.update("keeper").unwrap_err();

    suite.advance_seconds(1);
    suite.update("keeper").unwrap();

    let average = suite.query_price_window().unwrap().average.unwrap();
    assert_eq!(average.price0, q112() >> 1);
    assert_eq!(average.price1, q112() << 1);
}

#[test]
fn consult_after_full_period() {
    let mut suite = SuiteBuilder::new().build();
    let (a, b) = (suite.token_a.clone(), suite.token_b.clone());

    suite.advance_seconds(SECONDS_PER_DAY);
    suite.update("keeper").unwrap();

    assert_eq!(suite.consult(&a, 100 * E18).unwrap(), Uint128::new(50 * E18));
    assert_eq!(suite.consult(&b, 50 * E18).unwrap(), Uint128::new(100 * E18));
    assert_eq!(suite.consult(&a, E18).unwrap(), Uint128::new(E18 / 2));
    assert_eq!(suite.consult(&b, E18 / 2).unwrap(), Uint128::new(E18));
    assert_eq!(suite.consult(&a, 0).unwrap(), Uint128::zero());
}

#[test]
fn consult_before_first_update() {
    let suite = SuiteBuilder::new().build();

    let err = suite.consult(&suite.token_a, E18).unwrap_err();
    assert!(err
        .to_string()
        .contains(&format!("No average price for pair {} yet", suite.pair)));
}

#[test]
fn consult_unknown_token() {
    let mut suite = SuiteBuilder::new().build();
    suite.advance_seconds(SECONDS_PER_DAY);
    suite.update("keeper").unwrap();

    let err = suite
        .consult(&Token::new_cw20("some_cw20"), E18)
        .unwrap_err();
    assert!(err.to_string().contains("Unknown token"), "{}", err);
}

#[test]
fn reserve_change_keeps_period() {
    let mut suite = SuiteBuilder::new().build();
    let a = suite.token_a.clone();

    suite.advance_seconds(SECONDS_PER_DAY);
    suite.update("keeper").unwrap();

    // reserves move to 1:1 right after the update, the window must still wait
    suite.set_reserves(150 * E18, 150 * E18).unwrap();
    suite.advance_seconds(1);
    let err = suite.update("keeper").unwrap_err();
    assert_eq!(
        ContractError::Window(WindowError::PeriodNotElapsed {
            elapsed: 1,
            period: PERIOD,
        }),
        err.downcast().unwrap()
    );
    assert_eq!(suite.consult(&a, E18).unwrap(), Uint128::new(E18 / 2));

    suite.advance_seconds(SECONDS_PER_DAY - 1);
    suite.update("keeper").unwrap();

    let average = suite.query_price_window().unwrap().average.unwrap();
    assert_eq!(average.price0, q112());
    assert_eq!(average.price1, q112());
    assert_eq!(suite.consult(&a, E18).unwrap(), Uint128::new(E18));
}

#[test]
fn short_spike_is_diluted() {
    let mut suite = SuiteBuilder::new().build();
    let a = suite.token_a.clone();

    // token_a is worth ten times more for a single hour of the window
    suite.advance_seconds(SECONDS_PER_DAY - 3600);
    suite.set_reserves(100 * E18, 500 * E18).unwrap();
    suite.advance_seconds(3600);
    suite.update("keeper").unwrap();

    let half = fraction(Uint128::new(50), Uint128::new(100)).unwrap();
    let fivefold = fraction(Uint128::new(500), Uint128::new(100)).unwrap();
    let day = u128::from(SECONDS_PER_DAY);
    let expected = (half * Uint256::from(day - 3600) + fivefold * Uint256::from(3600u128))
        / Uint256::from(day);

    let average = suite.query_price_window().unwrap().average.unwrap();
    assert_eq!(average.price0, expected);

    let out = suite.consult(&a, E18).unwrap();
    assert!(out > Uint128::new(E18 / 2));
    assert!(out < Uint128::new(E18));
}

#[test]
fn update_across_timestamp_wraparound() {
    let mut suite = SuiteBuilder::new().build();
    let a = suite.token_a.clone();

    // move right below the point where block timestamps wrap around
    let now = suite.app.block_info().time.seconds();
    suite.advance_seconds((1u64 << 32) - 3600 - now);
    suite.update("keeper").unwrap();
    let before = suite.query_price_window().unwrap();
    assert_eq!(before.last.timestamp, u32::MAX - 3599);

    suite.advance_seconds(SECONDS_PER_DAY - 1);
    suite.update("keeper").unwrap_err();

    suite.advance_seconds(1);
    suite.update("keeper").unwrap();

    let window = suite.query_price_window().unwrap();
    assert!(window.last.timestamp < before.last.timestamp);
    assert_eq!(window.average.unwrap().price0, q112() >> 1);
    assert_eq!(suite.consult(&a, E18).unwrap(), Uint128::new(E18 / 2));
}

#[test]
fn anyone_can_update() {
    let mut suite = SuiteBuilder::new().build();

    for (day, sender) in ["keeper", "trader", "admin"].into_iter().enumerate() {
        suite.advance_seconds(SECONDS_PER_DAY);
        suite.update(sender).unwrap();
        let window = suite.query_price_window().unwrap();
        assert!(window.average.is_some(), "day {}", day);
    }
}
