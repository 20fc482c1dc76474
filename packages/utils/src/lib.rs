//! Building blocks shared by the pair oracles: token identifiers, Q112.112 fixed point
//! math, the AMM pair interface and the price window state machine.

pub mod amm;
pub mod coin;
pub mod cumulative;
pub mod fixed_point;
pub mod pair_key;
pub mod token;
pub mod window;
