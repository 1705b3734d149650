//! Category -> colour assignment.
//!
//! Colours are handed out in registration order from a fixed 14-slot
//! palette. The palette never wraps: the 15th distinct category flips the
//! whole map into single-colour mode for good.

use std::collections::HashMap;

use crate::core::{color::AnsiCode, constants::PALETTE_SIZE};

/// SGR foreground codes, in the order they are assigned.
const SLOTS: [u8; PALETTE_SIZE] = [31, 32, 33, 34, 35, 36, 37, 90, 91, 92, 93, 94, 95, 96];

/// Colour handed out for a category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorId {
    /// Index into the 14-slot palette.
    Slot(u8),
    /// Shared colour once the palette ran out.
    Overflow,
}

impl ColorId {
    #[must_use]
    pub fn ansi(self) -> AnsiCode {
        match self {
            Self::Slot(i) => AnsiCode::sgr(SLOTS[usize::from(i) % PALETTE_SIZE]),
            Self::Overflow => AnsiCode::red(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CategoryPalette {
    slots: HashMap<String, u8>,
    order: Vec<String>,
    overflowed: bool,
}

impl CategoryPalette {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Colour for `category`, registering it on first sight.
    pub fn color_for(&mut self, category: &str) -> ColorId {
        if !self.slots.contains_key(category) {
            if self.order.len() < PALETTE_SIZE {
                let slot = self.order.len() as u8;
                self.slots.insert(category.to_owned(), slot);
                self.order.push(category.to_owned());
            } else {
                if !self.overflowed {
                    tracing::debug!(
                        category,
                        "more than {PALETTE_SIZE} categories, switching to a single colour"
                    );
                }
                self.overflowed = true;
                self.order.push(category.to_owned());
                // keep the name for the intro listing; colour is irrelevant now
                self.slots.insert(category.to_owned(), 0);
            }
        }
        self.lookup(category)
    }

    /// Read-only lookup. Unknown categories get the overflow colour.
    #[must_use]
    pub fn lookup(&self, category: &str) -> ColorId {
        if self.overflowed {
            return ColorId::Overflow;
        }
        self.slots
            .get(category)
            .map_or(ColorId::Overflow, |&slot| ColorId::Slot(slot))
    }

    #[inline]
    #[must_use]
    pub fn overflowed(&self) -> bool {
        self.overflowed
    }

    /// Distinct categories seen so far.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Categories with their effective colour, in registration order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, ColorId)> + '_ {
        self.order.iter().map(|c| (c.as_str(), self.lookup(c)))
    }
}
