use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::Item;
use utils::window::PriceWindow;

#[cw_serde]
pub struct Config {
    /// Factory the pair was resolved with
    pub factory: Addr,
    pub pair: Addr,
}

pub const CONFIG: Item<Config> = Item::new("config");
pub const WINDOW: Item<PriceWindow> = Item::new("window");
