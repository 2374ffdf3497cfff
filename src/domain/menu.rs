use serde::Serialize;

use super::Price;

/// Menu sections, in the order they are listed to customers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Starter,
    Main,
    Dessert,
    Drink,
}

impl Category {
    pub const ALL: [Category; 4] = [Category::Starter, Category::Main, Category::Dessert, Category::Drink];

    /// The word a customer types to list this section.
    pub fn keyword(self) -> &'static str {
        match self {
            Category::Starter => "starters",
            Category::Main => "mains",
            Category::Dessert => "desserts",
            Category::Drink => "drinks",
        }
    }

    pub fn from_keyword(word: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.keyword() == word)
    }

    pub fn title(self) -> &'static str {
        match self {
            Category::Starter => "Starters",
            Category::Main => "Main Courses",
            Category::Dessert => "Desserts",
            Category::Drink => "Drinks",
        }
    }

    /// Sample phrasing shown under a single-section listing.
    pub fn ordering_example(self) -> &'static str {
        match self {
            Category::Starter => "Add two spring rolls",
            Category::Main => "I want one margherita pizza",
            Category::Dessert => "Add chocolate cake",
            Category::Drink => "I want two cokes",
        }
    }
}

/// Represents a purchasable dish or drink.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub price: Price,
    pub description: String,
    pub category: Category,
    /// Lower-case spoken shorthands ("coke", "pizza") matched by voice ordering.
    #[serde(skip)]
    pub aliases: Vec<String>,
}

impl MenuItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price_cents: u64,
        description: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price: Price::from_cents(price_cents),
            description: description.into(),
            category,
            aliases: Vec::new(),
        }
    }

    pub fn with_aliases(mut self, aliases: &[&str]) -> Self {
        self.aliases = aliases.iter().map(|a| a.to_lowercase()).collect();
        self
    }
}

/// Immutable catalog loaded at startup.
#[derive(Debug, Clone)]
pub struct MenuCatalog {
    items: Vec<MenuItem>,
}

impl MenuCatalog {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// The house menu of Delicious Bites.
    pub fn restaurant() -> Self {
        use Category::*;
        Self::new(vec![
            MenuItem::new("S1", "Spring Rolls", 899, "Crispy vegetable spring rolls (4 pcs)", Starter)
                .with_aliases(&["spring roll"]),
            MenuItem::new("S2", "Chicken Wings", 1299, "Spicy buffalo wings (8 pcs)", Starter)
                .with_aliases(&["wing"]),
            MenuItem::new("S3", "Garlic Bread", 699, "Homemade garlic bread with herbs", Starter),
            MenuItem::new("M1", "Margherita Pizza", 1699, "Fresh tomato, mozzarella, basil", Main)
                .with_aliases(&["pizza"]),
            MenuItem::new("M2", "Chicken Burger", 1499, "Grilled chicken with lettuce, tomato", Main)
                .with_aliases(&["burger"]),
            MenuItem::new("M3", "Pasta Carbonara", 1899, "Creamy pasta with bacon and parmesan", Main)
                .with_aliases(&["carbonara", "pasta"]),
            MenuItem::new("M4", "Fish & Chips", 1999, "Beer battered cod with crispy fries", Main)
                .with_aliases(&["fish and chips"]),
            MenuItem::new("D1", "Chocolate Cake", 799, "Rich chocolate cake with vanilla ice cream", Dessert)
                .with_aliases(&["cake"]),
            MenuItem::new("D2", "Tiramisu", 899, "Classic Italian dessert", Dessert),
            MenuItem::new("DR1", "Coca Cola", 399, "Classic soft drink", Drink).with_aliases(&["coke", "cola"]),
            MenuItem::new("DR2", "Fresh Orange Juice", 499, "Freshly squeezed orange juice", Drink)
                .with_aliases(&["orange juice"]),
            MenuItem::new("DR3", "Coffee", 349, "Freshly brewed coffee", Drink),
        ])
    }

    /// All items in listing order (starters, mains, desserts, drinks).
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &MenuItem> {
        self.items.iter().filter(move |item| item.category == category)
    }

    /// Case-insensitive id lookup.
    pub fn find(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id.eq_ignore_ascii_case(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_ignores_case() {
        let menu = MenuCatalog::restaurant();
        assert_eq!(menu.find("m1").map(|i| i.name.as_str()), Some("Margherita Pizza"));
        assert_eq!(menu.find("dr1").map(|i| i.price), Some(Price::from_cents(399)));
        assert!(menu.find("X9").is_none());
    }

    #[test]
    fn test_categories_partition_the_menu() {
        let menu = MenuCatalog::restaurant();
        let counted: usize = Category::ALL.iter().map(|c| menu.in_category(*c).count()).sum();
        assert_eq!(counted, menu.items().len());
        assert_eq!(menu.in_category(Category::Main).count(), 4);
        assert_eq!(Category::from_keyword("desserts"), Some(Category::Dessert));
        assert_eq!(Category::from_keyword("dessert"), None);
    }
}
