//! Fruit inventory domain module.
//!
//! Business rules for the fruit stock, implemented as deterministic domain
//! logic: the store decides and records what happened, [`report`] turns it
//! into text. Nothing here writes to stdout.

pub mod fruit;
pub mod report;
pub mod stock;

pub use fruit::{FruitRecord, SeedFruit};
pub use stock::{
    DeleteFruit, FruitCreated, FruitRestocked, FruitSold, FruitStock, FruitsDeleted, RestockFruit,
    SellFruit, StockChange, StockCommand, StockError, StockEvent,
};
