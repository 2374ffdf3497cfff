use crate::domain::{CartLine, MenuItem};

/// Custom actions for Session entities.
///
/// Every cart mutation goes through one of these so that it is applied by
/// the session actor, never by a caller holding a stale copy.
#[derive(Debug, Clone)]
pub enum SessionAction {
    /// Merges `quantity` of `item` into the cart.
    ///
    /// # Errors
    /// Fails if `quantity` is zero.
    AddItem { item: MenuItem, quantity: u32 },
    ClearCart,
    /// Empties the cart and returns the lines it held (checkout).
    TakeCart,
    /// Marks the user as preferring spoken replies.
    PreferVoice,
}

/// Results from SessionActions - variants match 1:1 with SessionAction
#[derive(Debug, Clone, PartialEq)]
pub enum SessionActionResult {
    /// Quantity on the merged line after the add
    AddItem(u32),
    ClearCart(()),
    TakeCart(Vec<CartLine>),
    PreferVoice(()),
}
