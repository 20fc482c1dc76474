#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::state::{Config, CONFIG, WINDOW};
use utils::{amm::query_factory_pair, pair_key::TokenPairKey, window::PriceWindow};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:single-pair-oracle";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let factory = deps.api.addr_validate(&msg.factory)?;
    msg.token_a.validate(deps.api)?;
    msg.token_b.validate(deps.api)?;
    let key = TokenPairKey::new(msg.token_a, msg.token_b)?;

    let pair = query_factory_pair(&deps.querier, &factory, key.first(), key.second())?
        .ok_or_else(|| ContractError::PairNotFound {
            token_a: key.first().clone(),
            token_b: key.second().clone(),
        })?;
    let window = PriceWindow::open(&deps.querier, &pair, &key)?;

    CONFIG.save(
        deps.storage,
        &Config {
            factory,
            pair: pair.clone(),
        },
    )?;
    WINDOW.save(deps.storage, &window)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("sender", info.sender)
        .add_attribute("pair", pair)
        .add_attribute("token0", window.token0.to_string())
        .add_attribute("token1", window.token1.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Update {} => execute::update(deps, env, info),
    }
}

mod execute {
    use utils::cumulative::current_cumulative_prices;

    use super::*;

    pub fn update(deps: DepsMut, env: Env, info: MessageInfo) -> Result<Response, ContractError> {
        let mut window = WINDOW.load(deps.storage)?;
        let current = current_cumulative_prices(&deps.querier, &window.pair, &env.block.time)?;
        let average = window.update(current)?;
        WINDOW.save(deps.storage, &window)?;

        Ok(Response::new()
            .add_attribute("action", "update")
            .add_attribute("sender", info.sender)
            .add_attribute("price0_average", average.price0.to_string())
            .add_attribute("price1_average", average.price1.to_string()))
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    let res = match msg {
        QueryMsg::Config {} => to_binary(&query::config(deps)?)?,
        QueryMsg::PriceWindow {} => to_binary(&query::price_window(deps)?)?,
        QueryMsg::Consult { token, amount_in } => {
            to_binary(&query::consult(deps, token, amount_in)?)?
        }
    };
    Ok(res)
}

mod query {
    use cosmwasm_std::Uint128;
    use utils::token::Token;

    use crate::msg::ConsultResponse;

    use super::*;

    pub fn config(deps: Deps) -> StdResult<Config> {
        CONFIG.load(deps.storage)
    }

    pub fn price_window(deps: Deps) -> StdResult<PriceWindow> {
        WINDOW.load(deps.storage)
    }

    pub fn consult(
        deps: Deps,
        token: Token,
        amount_in: Uint128,
    ) -> Result<ConsultResponse, ContractError> {
        let window = WINDOW.load(deps.storage)?;
        let amount_out = window.consult(&token, amount_in)?;
        Ok(ConsultResponse { amount_out })
    }
}
