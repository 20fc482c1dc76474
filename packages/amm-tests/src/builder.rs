use anyhow::Result as AnyResult;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Empty, StdResult, Uint128};
use cw_multi_test::{App, AppResponse, Contract, ContractWrapper, Executor};

use utils::{
    amm::{CumulativePricesResponse, PairInfoResponse, PairQueryMsg, ReservesResponse},
    token::Token,
};

use crate::{mock_factory, mock_pair};

// -------------------------------------------------------------------------------------------------
// Contracts
// -------------------------------------------------------------------------------------------------

/// Contract code of a constant product pair.
fn contract_pair() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new_with_empty(
        mock_pair::execute,
        mock_pair::instantiate,
        mock_pair::query,
    );

    Box::new(contract)
}

fn contract_factory() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new_with_empty(
        mock_factory::execute,
        mock_factory::instantiate,
        mock_factory::query,
    );

    Box::new(contract)
}

// -------------------------------------------------------------------------------------------------
// SuiteBuilder
// -------------------------------------------------------------------------------------------------

/// Stores a contract info.
#[cw_serde]
pub struct ContractInfo {
    pub address: Addr,
    pub code_id: u64,
}

/// Structure to be imported in a multitest environment to have access to AMM contracts.
pub struct AmmSuiteBuilder {
    pub owner: Addr,
}

impl AmmSuiteBuilder {
    pub fn init_amm(self, app: &mut App) -> AmmSuite {
        let pair_code_id = app.store_code(contract_pair());
        let factory_code_id = app.store_code(contract_factory());

        let factory_addr = app
            .instantiate_contract(
                factory_code_id,
                self.owner.clone(),
                &Empty {},
                &[],
                "AMM Factory",
                None,
            )
            .unwrap();

        AmmSuite {
            owner: self.owner,
            pair_code_id,
            factory: ContractInfo {
                address: factory_addr,
                code_id: factory_code_id,
            },
        }
    }
}

/// Stores information related to an AMM deployment.
pub struct AmmSuite {
    pub owner: Addr,
    pub pair_code_id: u64,
    pub factory: ContractInfo,
}

impl AmmSuite {
    /// Instantiates an empty pair and registers it in the factory. Returns the address of the
    /// newly created pair.
    pub fn create_pair(&mut self, app: &mut App, tokens: &[Token; 2]) -> Addr {
        let pair = self.create_unlisted_pair(app, tokens);
        self.register_pair(app, tokens, &pair).unwrap();

        pair
    }

    /// Lists `pair` in the factory under the given tokens.
    pub fn register_pair(
        &mut self,
        app: &mut App,
        tokens: &[Token; 2],
        pair: &Addr,
    ) -> AnyResult<AppResponse> {
        app.execute_contract(
            self.owner.clone(),
            self.factory.address.clone(),
            &mock_factory::ExecuteMsg::RegisterPair {
                token_a: tokens[0].clone(),
                token_b: tokens[1].clone(),
                pair: pair.to_string(),
            },
            &[],
        )
    }

    /// Instantiates a pair the factory does not know about.
    pub fn create_unlisted_pair(&mut self, app: &mut App, tokens: &[Token; 2]) -> Addr {
        app.instantiate_contract(
            self.pair_code_id,
            self.owner.clone(),
            &mock_pair::InstantiateMsg {
                token_a: tokens[0].clone(),
                token_b: tokens[1].clone(),
            },
            &[],
            format!("AMM Pair {}-{}", tokens[0], tokens[1]),
            None,
        )
        .unwrap()
    }

    /// Sets the reserves of the pair, accumulating prices for the time since the last change.
    pub fn set_reserves(
        &mut self,
        app: &mut App,
        pair: &Addr,
        reserves: &[(&Token, u128); 2],
    ) -> AnyResult<AppResponse> {
        app.execute_contract(
            self.owner.clone(),
            pair.clone(),
            &mock_pair::ExecuteMsg::Sync {
                reserves: reserves
                    .iter()
                    .map(|(token, amount)| token.amount(Uint128::new(*amount)))
                    .collect(),
            },
            &[],
        )
    }

    pub fn query_pair_info(&self, app: &App, pair: &Addr) -> StdResult<PairInfoResponse> {
        app.wrap()
            .query_wasm_smart(pair, &PairQueryMsg::PairInfo {})
    }

    pub fn query_reserves(&self, app: &App, pair: &Addr) -> StdResult<ReservesResponse> {
        app.wrap().query_wasm_smart(pair, &PairQueryMsg::Reserves {})
    }

    pub fn query_cumulative_prices(
        &self,
        app: &App,
        pair: &Addr,
    ) -> StdResult<CumulativePricesResponse> {
        app.wrap()
            .query_wasm_smart(pair, &PairQueryMsg::CumulativePrices {})
    }
}
