use serde::{Deserialize, Serialize};

use fruitstock_core::{Aggregate, AggregateRoot, DomainError, DomainResult, Event, FruitId};

use crate::fruit::{FruitRecord, SeedFruit};

/// Failure of a sale. Both variants print the same message.
pub type StockError = DomainError;

/// Command: restock an existing fruit, or create it when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestockFruit {
    pub name: String,
    pub quantity: i64,
}

/// Command: take stock out of the first record with this name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellFruit {
    pub name: String,
    pub quantity: i64,
}

/// Command: remove every record with this name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteFruit {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockCommand {
    Restock(RestockFruit),
    Sell(SellFruit),
    Delete(DeleteFruit),
}

/// Event: a record was appended with a fresh id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FruitCreated {
    pub fruit_id: FruitId,
    pub name: String,
    pub quantity: i64,
}

/// Event: quantity was added to the first matching record. `quantity_after` is the new stock level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FruitRestocked {
    pub fruit_id: FruitId,
    pub name: String,
    pub quantity: i64,
    pub quantity_after: i64,
}

/// Event: stock left the first matching record. `remaining` is what is left.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FruitSold {
    pub fruit_id: FruitId,
    pub name: String,
    pub quantity: i64,
    pub remaining: i64,
}

/// Event: every record with this name was removed. Emitted even when `removed` is zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FruitsDeleted {
    pub name: String,
    pub removed: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockEvent {
    FruitCreated(FruitCreated),
    FruitRestocked(FruitRestocked),
    FruitSold(FruitSold),
    FruitsDeleted(FruitsDeleted),
}

impl Event for StockEvent {
    fn event_type(&self) -> &'static str {
        match self {
            StockEvent::FruitCreated(_) => "fruitstock.fruit.created",
            StockEvent::FruitRestocked(_) => "fruitstock.fruit.restocked",
            StockEvent::FruitSold(_) => "fruitstock.fruit.sold",
            StockEvent::FruitsDeleted(_) => "fruitstock.fruit.deleted",
        }
    }

    fn version(&self) -> u32 {
        1
    }
}

/// Outcome of [`FruitStock::restock_or_create`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StockChange {
    Created(FruitCreated),
    Restocked(FruitRestocked),
}

impl From<StockChange> for StockEvent {
    fn from(change: StockChange) -> Self {
        match change {
            StockChange::Created(e) => StockEvent::FruitCreated(e),
            StockChange::Restocked(e) => StockEvent::FruitRestocked(e),
        }
    }
}

/// The fruit inventory: an ordered list of records.
///
/// Insertion order is display order. Names are treated as unique but this is
/// not enforced; lookups always resolve to the first record with a name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FruitStock {
    records: Vec<FruitRecord>,
    version: u64,
}

impl FruitStock {
    /// Stock with no records.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a stock from seed entries, numbering them 1..=n in order.
    ///
    /// Duplicate names are accepted as given.
    pub fn seeded(seed: impl IntoIterator<Item = SeedFruit>) -> Self {
        let records = seed
            .into_iter()
            .enumerate()
            .map(|(pos, s)| FruitRecord::new(FruitId::for_position(pos), s.name, s.quantity))
            .collect();
        Self {
            records,
            version: 0,
        }
    }

    /// Pomme=10, Poire=5, Ananas=8.
    pub fn default_seed() -> Vec<SeedFruit> {
        vec![
            SeedFruit::new("Pomme", 10),
            SeedFruit::new("Poire", 5),
            SeedFruit::new("Ananas", 8),
        ]
    }

    pub fn with_default_seed() -> Self {
        Self::seeded(Self::default_seed())
    }

    /// Current records, in display order.
    pub fn records(&self) -> &[FruitRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &FruitRecord> {
        self.records.iter()
    }

    /// Owned copy of the current records.
    pub fn snapshot(&self) -> Vec<FruitRecord> {
        self.records.clone()
    }

    /// First record with exactly this name.
    pub fn get(&self, name: &str) -> Option<&FruitRecord> {
        self.records.iter().find(|r| r.name() == name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Add `quantity` to the first record named `name`, or append a new one.
    ///
    /// Never fails. A negative quantity is applied as given.
    pub fn restock_or_create(&mut self, name: impl Into<String>, quantity: i64) -> StockChange {
        let cmd = RestockFruit {
            name: name.into(),
            quantity,
        };
        let change = self.decide_restock(&cmd);
        self.apply(&StockEvent::from(change.clone()));
        tracing::debug!(name = %cmd.name, quantity, ?change, "restock applied");
        change
    }

    /// Take `quantity` out of the first record named `name`.
    ///
    /// Fails without touching the stock when the fruit is unknown or holds
    /// less than `quantity`. Selling the exact amount on hand leaves zero.
    pub fn sell(&mut self, name: impl Into<String>, quantity: i64) -> Result<FruitSold, StockError> {
        let cmd = SellFruit {
            name: name.into(),
            quantity,
        };
        match self.decide_sell(&cmd) {
            Ok(sold) => {
                self.apply(&StockEvent::FruitSold(sold.clone()));
                tracing::debug!(fruit_id = %sold.fruit_id, name = %sold.name, quantity, remaining = sold.remaining, "sale applied");
                Ok(sold)
            }
            Err(err) => {
                tracing::debug!(name = %cmd.name, quantity, error = ?err, "sale rejected");
                Err(err)
            }
        }
    }

    /// Remove every record named `name`. Succeeds even when none match.
    pub fn delete(&mut self, name: impl Into<String>) -> FruitsDeleted {
        let cmd = DeleteFruit { name: name.into() };
        let deleted = self.decide_delete(&cmd);
        self.apply(&StockEvent::FruitsDeleted(deleted.clone()));
        tracing::debug!(name = %deleted.name, removed = deleted.removed, "delete applied");
        deleted
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name() == name)
    }

    fn decide_restock(&self, cmd: &RestockFruit) -> StockChange {
        match self.get(&cmd.name) {
            Some(existing) => StockChange::Restocked(FruitRestocked {
                fruit_id: existing.id_typed(),
                name: cmd.name.clone(),
                quantity: cmd.quantity,
                quantity_after: existing.quantity().saturating_add(cmd.quantity),
            }),
            None => StockChange::Created(FruitCreated {
                fruit_id: FruitId::for_position(self.records.len()),
                name: cmd.name.clone(),
                quantity: cmd.quantity,
            }),
        }
    }

    fn decide_sell(&self, cmd: &SellFruit) -> DomainResult<FruitSold> {
        let fruit = self
            .get(&cmd.name)
            .ok_or_else(|| DomainError::not_found(cmd.name.clone()))?;

        if fruit.quantity() < cmd.quantity {
            return Err(DomainError::insufficient_stock(
                cmd.name.clone(),
                cmd.quantity,
                fruit.quantity(),
            ));
        }

        Ok(FruitSold {
            fruit_id: fruit.id_typed(),
            name: cmd.name.clone(),
            quantity: cmd.quantity,
            // Negative sale quantities are not rejected; clamp like restock does.
            remaining: fruit.quantity().saturating_sub(cmd.quantity),
        })
    }

    fn decide_delete(&self, cmd: &DeleteFruit) -> FruitsDeleted {
        FruitsDeleted {
            name: cmd.name.clone(),
            removed: self.records.iter().filter(|r| r.name() == cmd.name).count(),
        }
    }

    fn replace_first(&mut self, name: &str, quantity: i64) {
        if let Some(pos) = self.position(name) {
            self.records[pos] = self.records[pos].with_quantity(quantity);
        }
    }
}

impl AggregateRoot for FruitStock {
    fn version(&self) -> u64 {
        self.version
    }
}

impl Aggregate for FruitStock {
    type Command = StockCommand;
    type Event = StockEvent;
    type Error = StockError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            StockEvent::FruitCreated(e) => {
                self.records
                    .push(FruitRecord::new(e.fruit_id, e.name.clone(), e.quantity));
            }
            StockEvent::FruitRestocked(e) => self.replace_first(&e.name, e.quantity_after),
            StockEvent::FruitSold(e) => self.replace_first(&e.name, e.remaining),
            StockEvent::FruitsDeleted(e) => {
                self.records.retain(|r| r.name() != e.name);
            }
        }

        // +1 per applied event.
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            StockCommand::Restock(cmd) => Ok(vec![self.decide_restock(cmd).into()]),
            StockCommand::Sell(cmd) => Ok(vec![StockEvent::FruitSold(self.decide_sell(cmd)?)]),
            StockCommand::Delete(cmd) => Ok(vec![StockEvent::FruitsDeleted(self.decide_delete(cmd))]),
        }
    }
}
