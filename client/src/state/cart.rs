//! Client-side garage (cart) state.
//!
//! DESIGN
//! ======
//! Transitions are a pure `reduce(state, action)` so the drawer, the navbar
//! badge, and the detail overlay all dispatch the same actions and tests need
//! no rendering environment. Nothing is persisted; checkout is inert.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use super::catalog::Car;

/// A catalog item paired with a requested quantity (always >= 1).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CartLine {
    pub car: Car,
    pub quantity: u32,
}

impl CartLine {
    #[must_use]
    pub fn subtotal(&self) -> u64 {
        self.car.price * u64::from(self.quantity)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CartState {
    /// Lines in insertion order, unique by car id.
    pub lines: Vec<CartLine>,
    /// Whether the drawer is open.
    pub open: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CartAction {
    /// Merge into an existing line or append a new one, then open the drawer.
    Add(Car),
    /// Drop the line for this car id; absent ids are ignored.
    Remove(String),
    Open,
    Close,
}

/// Apply one action and return the next state.
#[must_use]
pub fn reduce(mut state: CartState, action: CartAction) -> CartState {
    match action {
        CartAction::Add(car) => {
            if let Some(line) = state.lines.iter_mut().find(|line| line.car.id == car.id) {
                line.quantity = line.quantity.saturating_add(1);
            } else {
                state.lines.push(CartLine { car, quantity: 1 });
            }
            state.open = true;
        }
        CartAction::Remove(id) => state.lines.retain(|line| line.car.id != id),
        CartAction::Open => state.open = true,
        CartAction::Close => state.open = false,
    }
    state
}

impl CartState {
    /// In-place convenience for `RwSignal::update`.
    pub fn dispatch(&mut self, action: CartAction) {
        *self = reduce(std::mem::take(self), action);
    }

    /// Total units across all lines (navbar badge).
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Sum of `price * quantity` in rupees.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
