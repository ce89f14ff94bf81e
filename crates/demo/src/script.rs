//! The fixed demo sequence.

use std::io::{self, Write};

use fruitstock_inventory::{FruitStock, StockEvent, report};

/// Print the current stock, one line per fruit.
pub fn display(stock: &FruitStock, out: &mut impl Write) -> io::Result<()> {
    for line in report::stock_lines(stock.records()) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Restock Pomme, add Citron, sell two Ananas, display, delete Ananas, display.
///
/// Returns the events applied to `stock`, in order. A rejected sale adds none.
pub fn run(stock: &mut FruitStock, out: &mut impl Write) -> io::Result<Vec<StockEvent>> {
    let mut events: Vec<StockEvent> = Vec::new();

    events.push(stock.restock_or_create("Pomme", 5).into());
    events.push(stock.restock_or_create("Citron", 10).into());

    let sale = stock.sell("Ananas", 2);
    writeln!(out, "{}", report::sale_outcome_line(&sale))?;
    if let Ok(sold) = sale {
        events.push(StockEvent::FruitSold(sold));
    }

    display(stock, out)?;

    let deleted = stock.delete("Ananas");
    writeln!(out, "{}", report::deletion_line(&deleted))?;
    events.push(StockEvent::FruitsDeleted(deleted));

    display(stock, out)?;
    Ok(events)
}
