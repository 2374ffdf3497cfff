use crate::domain::Category;

/// A canonical command, as understood by the interpreter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Greeting,
    Menu,
    Category(Category),
    FullMenu,
    /// `add <id> <qty>`. `quantity` is `None` when the token is not a positive integer.
    Add { item_id: String, quantity: Option<u32> },
    /// `add` with fewer than two arguments.
    AddIncomplete,
    Cart,
    Clear,
    Checkout,
    /// `track [order] <id>`. `None` when no id was given.
    Track(Option<String>),
    Help,
    Farewell,
    Unrecognized,
}

impl Command {
    /// Classifies a canonical command string. Rules are tried in priority
    /// order and the first one that matches wins.
    pub fn parse(input: &str) -> Command {
        let text = input.trim().to_lowercase();
        let text = text.as_str();

        if text.contains("hello") || text.contains("hi") || text == "start" {
            return Command::Greeting;
        }
        if text == "menu" {
            return Command::Menu;
        }
        if let Some(category) = Category::from_keyword(text) {
            return Command::Category(category);
        }
        if text == "full" {
            return Command::FullMenu;
        }
        if let Some(args) = text.strip_prefix("add ") {
            return parse_add(args);
        }
        match text {
            "cart" => return Command::Cart,
            "clear" => return Command::Clear,
            "checkout" => return Command::Checkout,
            _ => {}
        }
        if let Some(args) = text.strip_prefix("track ") {
            return Command::Track(parse_order_id(args));
        }
        if text == "help" {
            return Command::Help;
        }
        if text.contains("bye") || text.contains("goodbye") {
            return Command::Farewell;
        }
        Command::Unrecognized
    }

    /// Whether executing this command may change session or order state.
    pub fn is_mutating(&self) -> bool {
        matches!(self, Command::Add { .. } | Command::Clear | Command::Checkout)
    }
}

fn parse_add(args: &str) -> Command {
    let mut tokens = args.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(item_id), Some(quantity)) => Command::Add {
            item_id: item_id.to_uppercase(),
            quantity: quantity.parse::<u32>().ok().filter(|q| *q > 0),
        },
        _ => Command::AddIncomplete,
    }
}

// "track order ORD123" and "track ORD123" both name the same order.
fn parse_order_id(args: &str) -> Option<String> {
    let tokens: Vec<&str> = args.split_whitespace().collect();
    let id = match tokens.as_slice() {
        ["order", id, ..] => id,
        [id, ..] => id,
        [] => return None,
    };
    Some(id.to_uppercase())
}
