//! Domain layer: money, coins, products, the catalog and the ports the
//! controller talks through.

pub mod catalog;
pub mod coin;
pub mod money;
pub mod ports;
pub mod product;
