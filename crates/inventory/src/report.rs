//! Presentation of stock state and operation outcomes as text lines.
//!
//! The store only exposes data; these helpers own the wording.

use crate::fruit::FruitRecord;
use crate::stock::{FruitSold, FruitsDeleted, StockError};

/// `Fruit : {name} | Quantity : {quantity}`
pub fn stock_line(record: &FruitRecord) -> String {
    format!("Fruit : {} | Quantity : {}", record.name(), record.quantity())
}

/// One line per record, in the order given.
pub fn stock_lines<'a>(records: impl IntoIterator<Item = &'a FruitRecord>) -> Vec<String> {
    records.into_iter().map(stock_line).collect()
}

pub fn sale_line(sold: &FruitSold) -> String {
    format!("{} {} sold", sold.quantity, sold.name)
}

/// Success or failure line for a sale attempt.
pub fn sale_outcome_line(outcome: &Result<FruitSold, StockError>) -> String {
    match outcome {
        Ok(sold) => sale_line(sold),
        Err(err) => err.to_string(),
    }
}

pub fn deletion_line(deleted: &FruitsDeleted) -> String {
    format!("{} deleted from stock", deleted.name)
}
