use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_binary, Addr, Binary, Deps, DepsMut, Empty, Env, MessageInfo, Response, StdResult,
};
use cw_storage_plus::Map;

use utils::{
    amm::{FactoryPairResponse, FactoryQueryMsg},
    pair_key::TokenPairKey,
    token::Token,
};

const PAIRS: Map<(Vec<u8>, Vec<u8>), Addr> = Map::new("pairs");

#[cw_serde]
pub enum ExecuteMsg {
    /// Makes an already instantiated pair discoverable.
    RegisterPair {
        token_a: Token,
        token_b: Token,
        pair: String,
    },
}

pub fn instantiate(
    _deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    _msg: Empty,
) -> StdResult<Response> {
    Ok(Response::new())
}

pub fn execute(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: ExecuteMsg,
) -> StdResult<Response> {
    match msg {
        ExecuteMsg::RegisterPair {
            token_a,
            token_b,
            pair,
        } => {
            let pair = deps.api.addr_validate(&pair)?;
            if let Ok(key) = TokenPairKey::new(token_a, token_b) {
                PAIRS.save(deps.storage, key.as_key(), &pair)?;
            }
            Ok(Response::new().add_attribute("action", "register_pair"))
        }
    }
}

pub fn query(deps: Deps, _env: Env, msg: FactoryQueryMsg) -> StdResult<Binary> {
    match msg {
        FactoryQueryMsg::Pair { token_a, token_b } => {
            let pair = match TokenPairKey::new(token_a, token_b) {
                Ok(key) => PAIRS.may_load(deps.storage, key.as_key())?,
                Err(_) => None,
            };
            to_binary(&FactoryPairResponse { pair })
        }
    }
}
