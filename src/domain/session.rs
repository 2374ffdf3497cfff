use serde::Serialize;

use super::{MenuItem, Price};

/// One menu item and its accumulated quantity within a session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLine {
    pub item_id: String,
    pub name: String,
    /// Copied from the menu when the line was first added.
    pub price: Price,
    pub quantity: u32,
}

impl CartLine {
    pub fn subtotal(&self) -> Price {
        self.price * self.quantity
    }
}

/// Per-user conversation state. Lives for the lifetime of the process.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user_id: String,
    pub cart: Vec<CartLine>,
    pub voice_preferred: bool,
}

/// Payload for lazily creating a session on first contact.
#[derive(Debug, Clone, Default)]
pub struct SessionCreate {
    pub voice_preferred: bool,
}

impl Session {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            cart: Vec::new(),
            voice_preferred: false,
        }
    }

    /// Adds `quantity` of `item`, merging into an existing line for the same id.
    /// Returns the line's quantity after the merge.
    pub fn add_item(&mut self, item: &MenuItem, quantity: u32) -> Result<u32, String> {
        if quantity == 0 {
            return Err(format!("Quantity must be at least 1 for {}", item.id));
        }
        match self.cart.iter_mut().find(|line| line.item_id == item.id) {
            Some(line) => {
                line.quantity = line
                    .quantity
                    .checked_add(quantity)
                    .ok_or_else(|| format!("Quantity overflow for {}", item.id))?;
                Ok(line.quantity)
            }
            None => {
                self.cart.push(CartLine {
                    item_id: item.id.clone(),
                    name: item.name.clone(),
                    price: item.price,
                    quantity,
                });
                Ok(quantity)
            }
        }
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    /// Empties the cart, handing its lines to the caller.
    pub fn take_cart(&mut self) -> Vec<CartLine> {
        std::mem::take(&mut self.cart)
    }
}

pub fn cart_total(lines: &[CartLine]) -> Price {
    lines.iter().map(CartLine::subtotal).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MenuCatalog;

    #[test]
    fn test_re_adding_accumulates_on_one_line() {
        let menu = MenuCatalog::restaurant();
        let pizza = menu.find("M1").unwrap();
        let mut session = Session::new("whatsapp:+15550001");

        assert_eq!(session.add_item(pizza, 2), Ok(2));
        assert_eq!(session.add_item(pizza, 3), Ok(5));
        assert_eq!(session.cart.len(), 1);
        assert_eq!(cart_total(&session.cart).to_string(), "$84.95");
    }

    #[test]
    fn test_zero_quantity_is_rejected() {
        let menu = MenuCatalog::restaurant();
        let mut session = Session::new("u");
        assert!(session.add_item(menu.find("D2").unwrap(), 0).is_err());
        assert!(session.cart.is_empty());
    }

    #[test]
    fn test_take_cart_leaves_session_empty() {
        let menu = MenuCatalog::restaurant();
        let mut session = Session::new("u");
        session.add_item(menu.find("DR3").unwrap(), 2).unwrap();
        session.add_item(menu.find("D1").unwrap(), 1).unwrap();

        let lines = session.take_cart();
        assert_eq!(lines.len(), 2);
        assert_eq!(cart_total(&lines), Price::from_cents(349 * 2 + 799));
        assert!(session.cart.is_empty());
    }
}
