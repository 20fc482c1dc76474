#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::state::{Config, ALL_PAIRS, CONFIG, ORACLES, PAIRS};
use utils::{pair_key::TokenPairKey, token::Token, window::PriceWindow};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:multi-pair-oracle";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = match msg.owner {
        Some(owner) => deps.api.addr_validate(&owner)?,
        None => info.sender.clone(),
    };
    let cfg = Config {
        owner,
        factory: deps.api.addr_validate(&msg.factory)?,
    };
    CONFIG.save(deps.storage, &cfg)?;
    ALL_PAIRS.save(deps.storage, &vec![])?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", cfg.owner)
        .add_attribute("sender", info.sender))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    use ExecuteMsg::*;
    match msg {
        AddPair { token_a, token_b } => execute::add_pair(deps, info, token_a, token_b),
        RemovePair { token_a, token_b } => execute::remove_pair(deps, info, token_a, token_b),
        Update {} => execute::update(deps, env),
        TransferOwnership { new_owner } => execute::transfer_ownership(deps, info, new_owner),
    }
}

mod execute {
    use cosmwasm_std::{ensure, ensure_eq};
    use cw_utils::nonpayable;
    use utils::{amm::query_factory_pair, cumulative::current_cumulative_prices};

    use super::*;

    fn ensure_owner(cfg: &Config, info: &MessageInfo) -> Result<(), ContractError> {
        ensure_eq!(info.sender, cfg.owner, ContractError::Unauthorized {});
        Ok(())
    }

    pub fn add_pair(
        deps: DepsMut,
        info: MessageInfo,
        token_a: Token,
        token_b: Token,
    ) -> Result<Response, ContractError> {
        nonpayable(&info)?;
        let cfg = CONFIG.load(deps.storage)?;
        ensure_owner(&cfg, &info)?;

        token_a.validate(deps.api)?;
        token_b.validate(deps.api)?;
        let key = TokenPairKey::new(token_a, token_b)?;

        let pair = query_factory_pair(&deps.querier, &cfg.factory, key.first(), key.second())?
            .ok_or_else(|| ContractError::PairNotFound {
                token_a: key.first().clone(),
                token_b: key.second().clone(),
            })?;
        if let Some(registered) = PAIRS.may_load(deps.storage, key.as_key())? {
            return Err(ContractError::PairAlreadyRegistered(registered));
        }
        ensure!(
            !ORACLES.has(deps.storage, &pair),
            ContractError::PairAlreadyRegistered(pair)
        );

        let window = PriceWindow::open(&deps.querier, &pair, &key)?;
        PAIRS.save(deps.storage, key.as_key(), &pair)?;
        ORACLES.save(deps.storage, &pair, &window)?;
        ALL_PAIRS.update(deps.storage, |mut pairs| -> StdResult<_> {
            pairs.push(pair.clone());
            Ok(pairs)
        })?;

        Ok(Response::new()
            .add_attribute("action", "add_pair")
            .add_attribute("sender", info.sender)
            .add_attribute("pair", pair)
            .add_attribute("token0", window.token0.to_string())
            .add_attribute("token1", window.token1.to_string()))
    }

    pub fn remove_pair(
        deps: DepsMut,
        info: MessageInfo,
        token_a: Token,
        token_b: Token,
    ) -> Result<Response, ContractError> {
        nonpayable(&info)?;
        let cfg = CONFIG.load(deps.storage)?;
        ensure_owner(&cfg, &info)?;

        let key = TokenPairKey::new(token_a, token_b)?;
        let pair = PAIRS
            .may_load(deps.storage, key.as_key())?
            .ok_or_else(|| ContractError::PairNotRegistered {
                token_a: key.first().clone(),
                token_b: key.second().clone(),
            })?;

        PAIRS.remove(deps.storage, key.as_key());
        ORACLES.remove(deps.storage, &pair);
        ALL_PAIRS.update(deps.storage, |mut pairs| -> StdResult<_> {
            if let Some(index) = pairs.iter().position(|p| p == &pair) {
                pairs.swap_remove(index);
            }
            Ok(pairs)
        })?;

        Ok(Response::new()
            .add_attribute("action", "remove_pair")
            .add_attribute("sender", info.sender)
            .add_attribute("pair", pair))
    }

    pub fn update(deps: DepsMut, env: Env) -> Result<Response, ContractError> {
        let pairs = ALL_PAIRS.load(deps.storage)?;

        let mut updated = vec![];
        for pair in &pairs {
            let mut window = ORACLES.load(deps.storage, pair)?;
            let current = current_cumulative_prices(&deps.querier, pair, &env.block.time)?;
            // windows opened or refreshed less than a period ago are left for a later call
            if !window.is_due(&current) {
                continue;
            }
            window.update(current)?;
            ORACLES.save(deps.storage, pair, &window)?;
            updated.push(pair);
        }

        Ok(Response::new()
            .add_attribute("action", "update")
            .add_attribute("updated", updated.len().to_string())
            .add_attribute("skipped", (pairs.len() - updated.len()).to_string())
            .add_attributes(updated.into_iter().map(|pair| ("pair", pair.to_string()))))
    }

    pub fn transfer_ownership(
        deps: DepsMut,
        info: MessageInfo,
        new_owner: String,
    ) -> Result<Response, ContractError> {
        nonpayable(&info)?;
        let mut cfg = CONFIG.load(deps.storage)?;
        ensure_owner(&cfg, &info)?;

        cfg.owner = deps.api.addr_validate(&new_owner)?;
        CONFIG.save(deps.storage, &cfg)?;

        Ok(Response::new()
            .add_attribute("action", "transfer_ownership")
            .add_attribute("sender", info.sender)
            .add_attribute("owner", cfg.owner))
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    use QueryMsg::*;
    let res = match msg {
        Config {} => to_binary(&query::config(deps)?)?,
        Pair { token_a, token_b } => to_binary(&query::pair(deps, token_a, token_b)?)?,
        Oracle { pair } => to_binary(&query::oracle(deps, pair)?)?,
        AllPairsLength {} => to_binary(&query::all_pairs_length(deps)?)?,
        AllPairs { start_after, limit } => {
            to_binary(&query::all_pairs(deps, start_after, limit)?)?
        }
        Consult { path, amount_in } => to_binary(&query::consult(deps, path, amount_in)?)?,
    };
    Ok(res)
}

mod query {
    use cosmwasm_std::Uint128;

    use crate::msg::{AllPairsLengthResponse, AllPairsResponse, ConsultResponse, PairResponse};

    use super::*;

    const DEFAULT_LIMIT: u32 = 10;
    const MAX_LIMIT: u32 = 30;

    pub fn config(deps: Deps) -> StdResult<Config> {
        CONFIG.load(deps.storage)
    }

    pub fn pair(deps: Deps, token_a: Token, token_b: Token) -> StdResult<PairResponse> {
        let pair = match TokenPairKey::new(token_a, token_b) {
            Ok(key) => PAIRS.may_load(deps.storage, key.as_key())?,
            Err(_) => None,
        };
        Ok(PairResponse { pair })
    }

    pub fn oracle(deps: Deps, pair: String) -> StdResult<Option<PriceWindow>> {
        let pair = deps.api.addr_validate(&pair)?;
        ORACLES.may_load(deps.storage, &pair)
    }

    pub fn all_pairs_length(deps: Deps) -> StdResult<AllPairsLengthResponse> {
        let length = ALL_PAIRS.load(deps.storage)?.len() as u64;
        Ok(AllPairsLengthResponse { length })
    }

    pub fn all_pairs(
        deps: Deps,
        start_after: Option<String>,
        limit: Option<u32>,
    ) -> StdResult<AllPairsResponse> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
        let pairs = ALL_PAIRS.load(deps.storage)?;
        let start = match start_after {
            Some(addr) => {
                let addr = deps.api.addr_validate(&addr)?;
                pairs
                    .iter()
                    .position(|pair| pair == &addr)
                    .map_or(pairs.len(), |index| index + 1)
            }
            None => 0,
        };

        Ok(AllPairsResponse {
            pairs: pairs.into_iter().skip(start).take(limit).collect(),
        })
    }

    pub fn consult(
        deps: Deps,
        path: Vec<Token>,
        amount_in: Uint128,
    ) -> Result<ConsultResponse, ContractError> {
        if path.len() < 2 {
            return Err(ContractError::InvalidPathLength(path.len()));
        }

        let mut amount = amount_in;
        for hop in path.windows(2) {
            let (offer, ask) = (&hop[0], &hop[1]);
            let pair = TokenPairKey::new(offer.clone(), ask.clone())
                .ok()
                .map(|key| PAIRS.may_load(deps.storage, key.as_key()))
                .transpose()?
                .flatten()
                .ok_or_else(|| ContractError::PairDoesNotExist {
                    token_a: offer.clone(),
                    token_b: ask.clone(),
                })?;
            let window = ORACLES.load(deps.storage, &pair)?;
            amount = window.consult(offer, amount)?;
        }

        Ok(ConsultResponse { amount_out: amount })
    }
}
