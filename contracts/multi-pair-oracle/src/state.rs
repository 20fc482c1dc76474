use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};
use utils::window::PriceWindow;

#[cw_serde]
pub struct Config {
    /// The only address allowed to add and remove pairs
    pub owner: Addr,
    /// Factory used to look up pair addresses
    pub factory: Addr,
}

pub const CONFIG: Item<Config> = Item::new("config");
/// Registered pair address for each trading pair. Keyed by `TokenPairKey::as_key`
pub const PAIRS: Map<(Vec<u8>, Vec<u8>), Addr> = Map::new("pairs");
/// Price window of every registered pair
pub const ORACLES: Map<&Addr, PriceWindow> = Map::new("oracles");
/// Registered pairs in order of registration. Removal swaps the last entry into the gap.
pub const ALL_PAIRS: Item<Vec<Addr>> = Item::new("all_pairs");
