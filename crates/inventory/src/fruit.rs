use serde::{Deserialize, Serialize};

use fruitstock_core::{Entity, FruitId, ValueObject};

/// One inventory entry.
///
/// Records are never edited in place from the outside: the stock replaces a
/// record with [`FruitRecord::with_quantity`] when its quantity changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FruitRecord {
    id: FruitId,
    name: String,
    quantity: i64,
}

impl FruitRecord {
    pub fn new(id: FruitId, name: impl Into<String>, quantity: i64) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
        }
    }

    pub fn id_typed(&self) -> FruitId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Same identity and name, new quantity.
    pub fn with_quantity(&self, quantity: i64) -> Self {
        Self {
            id: self.id,
            name: self.name.clone(),
            quantity,
        }
    }
}

impl Entity for FruitRecord {
    type Id = FruitId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Initial stock entry; ids are assigned by position when seeding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedFruit {
    pub name: String,
    pub quantity: i64,
}

impl SeedFruit {
    pub fn new(name: impl Into<String>, quantity: i64) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

impl ValueObject for SeedFruit {}
