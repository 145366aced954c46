//! The +/- quantity stepper policy.
//!
//! A pure function of the line's current quantity and the button
//! pressed; it has no state beyond what is in the cart store.

/// Which stepper button was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepAction {
    Increment,
    Decrement,
}

/// The cart mutation a stepper press maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartCommand {
    /// Add the item (insert with quantity 1, or increment by 1).
    Add,
    /// Set the line to this absolute quantity.
    SetQuantity(u32),
    /// Remove the line; the stepper reverts to an "add" affordance.
    Remove,
    /// Nothing to do.
    None,
}

/// Map a stepper press on a line with `current_quantity` to a command.
pub fn step(current_quantity: Option<u32>, action: StepAction) -> CartCommand {
    match (action, current_quantity) {
        // "+" always goes through add: insert-or-increment either way.
        (StepAction::Increment, _) => CartCommand::Add,
        (StepAction::Decrement, Some(quantity)) if quantity > 1 => {
            CartCommand::SetQuantity(quantity - 1)
        }
        (StepAction::Decrement, Some(_)) => CartCommand::Remove,
        (StepAction::Decrement, None) => CartCommand::None,
    }
}
