use anyhow::Result as AnyResult;

use cosmwasm_std::{Addr, Coin, StdResult, Uint128};

use cw_multi_test::{App, AppResponse, ContractWrapper, Executor};

use amm_tests::builder::{AmmSuite, AmmSuiteBuilder};
use utils::{token::Token, window::PriceWindow};

use crate::{
    msg::{
        AllPairsLengthResponse, AllPairsResponse, ConsultResponse, ExecuteMsg, InstantiateMsg,
        PairResponse, QueryMsg,
    },
    state::Config,
};

pub const SECONDS_PER_DAY: u64 = 24 * 60 * 60;
pub const E18: u128 = 1_000_000_000_000_000_000;

fn store_oracle(app: &mut App) -> u64 {
    let contract = Box::new(ContractWrapper::new_with_empty(
        crate::contract::execute,
        crate::contract::instantiate,
        crate::contract::query,
    ));

    app.store_code(contract)
}

#[derive(Debug)]
pub struct SuiteBuilder {
    funds: Vec<(Addr, Vec<Coin>)>,
    owner: String,
}

#[allow(dead_code)]
impl SuiteBuilder {
    pub fn new() -> Self {
        Self {
            funds: vec![],
            owner: "owner".to_owned(),
        }
    }

    pub fn with_funds(mut self, addr: &str, funds: &[Coin]) -> Self {
        self.funds.push((Addr::unchecked(addr), funds.into()));
        self
    }

    pub fn with_owner(mut self, name: &str) -> Self {
        self.owner = name.to_owned();
        self
    }

    #[track_caller]
    pub fn build(self) -> Suite {
        let mut app = App::default();
        let admin = Addr::unchecked("admin");

        // initialize AMM test dependencies.
        let amm_builder = AmmSuiteBuilder {
            owner: admin.clone(),
        };
        let amm_suite = amm_builder.init_amm(&mut app);

        let oracle_id = store_oracle(&mut app);
        let oracle = app
            .instantiate_contract(
                oracle_id,
                admin.clone(),
                &InstantiateMsg {
                    factory: amm_suite.factory.address.to_string(),
                    owner: Some(self.owner.clone()),
                },
                &[],
                "Multi Pair Oracle",
                None,
            )
            .unwrap();

        let funds = self.funds;
        app.init_modules(|router, _, storage| -> AnyResult<()> {
            for (addr, coin) in funds {
                router.bank.init_balance(storage, &addr, coin)?;
            }
            Ok(())
        })
        .unwrap();

        Suite {
            owner: self.owner,
            app,
            amm: amm_suite,
            oracle,
        }
    }
}

pub struct Suite {
    pub owner: String,
    pub app: App,
    pub amm: AmmSuite,
    pub oracle: Addr,
}

#[allow(dead_code)]
impl Suite {
    pub fn advance_seconds(&mut self, seconds: u64) {
        self.app.update_block(|block| {
            block.time = block.time.plus_seconds(seconds);
            block.height += std::cmp::max(1, seconds / 5); // block time
        });
    }

    /// Creates a pair listed in the factory and sets its reserves.
    pub fn create_pair(&mut self, reserves: &[(&Token, u128); 2]) -> Addr {
        let pair = self
            .amm
            .create_pair(&mut self.app, &[reserves[0].0.clone(), reserves[1].0.clone()]);
        self.set_reserves(&pair, reserves).unwrap();
        pair
    }

    pub fn set_reserves(
        &mut self,
        pair: &Addr,
        reserves: &[(&Token, u128); 2],
    ) -> AnyResult<AppResponse> {
        self.amm.set_reserves(&mut self.app, pair, reserves)
    }

    pub fn add_pair(
        &mut self,
        sender: &str,
        token_a: &Token,
        token_b: &Token,
    ) -> AnyResult<AppResponse> {
        self.add_pair_with_funds(sender, token_a, token_b, &[])
    }

    pub fn add_pair_with_funds(
        &mut self,
        sender: &str,
        token_a: &Token,
        token_b: &Token,
        funds: &[Coin],
    ) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            Addr::unchecked(sender),
            self.oracle.clone(),
            &ExecuteMsg::AddPair {
                token_a: token_a.clone(),
                token_b: token_b.clone(),
            },
            funds,
        )
    }

    pub fn remove_pair(
        &mut self,
        sender: &str,
        token_a: &Token,
        token_b: &Token,
    ) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            Addr::unchecked(sender),
            self.oracle.clone(),
            &ExecuteMsg::RemovePair {
                token_a: token_a.clone(),
                token_b: token_b.clone(),
            },
            &[],
        )
    }

    pub fn update(&mut self, sender: &str) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            Addr::unchecked(sender),
            self.oracle.clone(),
            &ExecuteMsg::Update {},
            &[],
        )
    }

    pub fn transfer_ownership(&mut self, sender: &str, new_owner: &str) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            Addr::unchecked(sender),
            self.oracle.clone(),
            &ExecuteMsg::TransferOwnership {
                new_owner: new_owner.to_owned(),
            },
            &[],
        )
    }

    pub fn query_config(&self) -> StdResult<Config> {
        self.app
            .wrap()
            .query_wasm_smart(self.oracle.clone(), &QueryMsg::Config {})
    }

    pub fn query_pair(&self, token_a: &Token, token_b: &Token) -> StdResult<Option<Addr>> {
        let response: PairResponse = self.app.wrap().query_wasm_smart(
            self.oracle.clone(),
            &QueryMsg::Pair {
                token_a: token_a.clone(),
                token_b: token_b.clone(),
            },
        )?;
        Ok(response.pair)
    }

    pub fn query_oracle(&self, pair: &Addr) -> StdResult<Option<PriceWindow>> {
        self.app.wrap().query_wasm_smart(
            self.oracle.clone(),
            &QueryMsg::Oracle {
                pair: pair.to_string(),
            },
        )
    }

    pub fn query_all_pairs_length(&self) -> StdResult<u64> {
        let response: AllPairsLengthResponse = self
            .app
            .wrap()
            .query_wasm_smart(self.oracle.clone(), &QueryMsg::AllPairsLength {})?;
        Ok(response.length)
    }

    pub fn query_all_pairs(
        &self,
        start_after: Option<&Addr>,
        limit: Option<u32>,
    ) -> StdResult<Vec<Addr>> {
        let response: AllPairsResponse = self.app.wrap().query_wasm_smart(
            self.oracle.clone(),
            &QueryMsg::AllPairs {
                start_after: start_after.map(|addr| addr.to_string()),
                limit,
            },
        )?;
        Ok(response.pairs)
    }

    pub fn consult(&self, path: &[&Token], amount_in: u128) -> StdResult<Uint128> {
        let response: ConsultResponse = self.app.wrap().query_wasm_smart(
            self.oracle.clone(),
            &QueryMsg::Consult {
                path: path.iter().map(|token| (*token).clone()).collect(),
                amount_in: Uint128::new(amount_in),
            },
        )?;
        Ok(response.amount_out)
    }
}
