//! Per-player resource counters.

use std::ops::Index;

use ants_shared::{Field, FIELD_COUNT};
use serde::{Deserialize, Serialize};

/// Largest value a counter can hold; the panels show three digits.
pub const MAX_RESOURCE: u16 = 999;

/// One player's eight counters, indexed by [`Field`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resources([u16; FIELD_COUNT]);

impl Resources {
    /// Creates counters from panel-ordered values, clamped to [`MAX_RESOURCE`].
    #[must_use]
    pub fn new(values: [u16; FIELD_COUNT]) -> Self {
        Self(values.map(|v| v.min(MAX_RESOURCE)))
    }

    /// Value of one counter.
    #[inline]
    #[must_use]
    pub fn get(&self, field: Field) -> u16 {
        self.0[field.index()]
    }

    /// Overwrites one counter, clamped to [`MAX_RESOURCE`].
    #[inline]
    pub fn set(&mut self, field: Field, value: u16) {
        self.0[field.index()] = value.min(MAX_RESOURCE);
    }

    /// Adds to a counter, saturating at [`MAX_RESOURCE`].
    #[inline]
    pub fn add(&mut self, field: Field, amount: u16) {
        self.set(field, self.get(field).saturating_add(amount));
    }

    /// Subtracts from a counter, stopping at zero.
    #[inline]
    pub fn subtract(&mut self, field: Field, amount: u16) {
        self.0[field.index()] = self.get(field).saturating_sub(amount);
    }

    /// Raises a counter to at least `floor`.
    #[inline]
    pub fn floor(&mut self, field: Field, floor: u16) {
        if self.get(field) < floor {
            self.set(field, floor);
        }
    }

    /// Applies `damage`: the fence absorbs what it can, the castle takes
    /// the rest.
    pub fn take_damage(&mut self, damage: u16) {
        let fence = self.get(Field::Fence);
        if fence >= damage {
            self.subtract(Field::Fence, damage);
            return;
        }
        self.set(Field::Fence, 0);
        self.subtract(Field::Castle, damage - fence);
    }

    /// Start-of-turn production: every producer adds to its stock.
    pub fn produce(&mut self) {
        for producer in Field::ALL {
            if let Some(stock) = producer.produces() {
                self.add(stock, self.get(producer));
            }
        }
    }

    /// Counters in panel order.
    #[inline]
    #[must_use]
    pub fn values(&self) -> [u16; FIELD_COUNT] {
        self.0
    }
}

impl Index<Field> for Resources {
    type Output = u16;

    fn index(&self, field: Field) -> &u16 {
        &self.0[field.index()]
    }
}
