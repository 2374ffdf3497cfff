//! Renders menu, cart and order views as chat text.
//!
//! Everything here is a pure function of its arguments.

use chrono::{DateTime, Local, Utc};

use crate::domain::{cart_total, CartLine, Category, MenuCatalog, MenuItem, Order};

pub const WELCOME: &str = "*Welcome to Delicious Bites Restaurant!*

I can understand both text and voice messages!

*Available Commands:*
- Say \"menu\" or \"show menu\" - Browse our full menu
- Say \"cart\" or \"my cart\" - View your current order
- Say \"help\" - Get assistance
- Say \"track order [ID]\" - Track your order

To order, you can say things like:
- \"I want two pizzas\"
- \"Add one chicken burger\"
- \"Show starters\"

Ready to order? Say \"menu\" to get started!";

pub const MENU_PROMPT: &str = "*OUR MENU*

Which category would you like to explore?

- Say \"starters\" for appetizers
- Say \"mains\" for main courses
- Say \"desserts\" for sweet treats
- Say \"drinks\" for beverages

Or say \"full\" to see everything";

pub const HELP: &str = "*HELP & VOICE COMMANDS*

*Voice Orders:*
Just speak naturally! Say things like:
- \"I want two pizzas\"
- \"Add one chicken burger\"
- \"Show desserts\"
- \"Show my cart\"

*Text Commands:*
- \"menu\" - Browse our menu
- \"add [item id] [quantity]\" - Add items, e.g. \"add M1 2\"
- \"cart\" - View your current order
- \"checkout\" - Place your order
- \"clear\" - Empty your cart

*Order Tracking:*
Say \"track order [ID]\" to check status

*Restaurant Hours:*
Monday - Sunday: 11:00 AM - 11:00 PM

*Contact:*
For urgent queries, call: (555) 123-4567

I understand both voice and text!";

pub const FAREWELL: &str = "Thank you for visiting Delicious Bites!

We hope to serve you again soon. Have a wonderful day!

Send a message or voice note anytime to start a new order!";

pub const UNRECOGNIZED: &str = "I didn't quite understand that.

*Try saying:*
- \"Show menu\"
- \"I want a pizza\"
- \"Show my cart\"
- \"Help\"

*Or type:*
- \"menu\" - Browse our menu
- \"cart\" - View your order
- \"help\" - Get assistance

I can understand both voice and text!";

pub const ADD_INVALID: &str = "Sorry, I couldn't find that item or the quantity is invalid. \
Please try again or say \"menu\" to browse our options.";

pub const ADD_INCOMPLETE: &str = "Please specify both the item and quantity. \
For example, say \"Add two pizzas\" or type \"add M1 2\".";

pub const CART_CLEARED: &str = "Your cart has been cleared.\n\nSay \"menu\" to start shopping again!";

pub const CHECKOUT_EMPTY: &str = "Your cart is empty! Say \"menu\" to browse our delicious options.";

pub const ORDER_NOT_FOUND: &str = "Order not found. Please check your order ID and try again.";

pub const EMPTY_MESSAGE: &str = "Please send a message or voice note to place your order!";

pub const VOICE_NOT_UNDERSTOOD: &str = "Sorry, I couldn't understand your voice message. \
Please try again or send a text message.

You can also type your order using commands like:
- \"menu\" - to see our menu
- \"add M1 2\" - to add items
- \"cart\" - to view your order";

/// Caption sent alongside a synthesized voice reply.
pub const VOICE_CAPTION: &str = "Voice response:";

pub const SERVICE_UNAVAILABLE: &str = "Sorry, we're having trouble taking orders right now. Please try again in a moment.";

pub fn menu_item(item: &MenuItem) -> String {
    format!("{}. {} - {}\n   {}", item.id, item.name, item.price, item.description)
}

pub fn category(menu: &MenuCatalog, category: Category) -> String {
    let mut message = format!("*{}*\n\n", category.title().to_uppercase());
    for item in menu.in_category(category) {
        message.push_str(&menu_item(item));
        message.push_str("\n\n");
    }
    message
}

/// A single section followed by a hint on how to order from it.
pub fn category_listing(menu: &MenuCatalog, section: Category) -> String {
    format!(
        "{}\nTo add an item, say: \"Add [item name]\" or \"I want [quantity] [item name]\"\nExample: \"{}\"",
        category(menu, section),
        section.ordering_example()
    )
}

pub fn full_menu(menu: &MenuCatalog) -> String {
    let mut message: String = Category::ALL.iter().map(|c| category(menu, *c)).collect();
    message.push_str("\nTo add an item, say the item name with quantity or use: add [item_id] [quantity]");
    message
}

pub fn item_added(item: &MenuItem, quantity: u32) -> String {
    format!(
        "Added {}x {} to your cart!\n\nSay \"cart\" to view your order or \"menu\" to continue shopping.",
        quantity, item.name
    )
}

pub fn cart_line(line: &CartLine) -> String {
    format!("{} x{} — {}", line.name, line.quantity, line.subtotal())
}

pub fn cart(lines: &[CartLine]) -> String {
    if lines.is_empty() {
        return "Your cart is empty.\n\nSay \"menu\" or type \"menu\" to browse our menu!".to_string();
    }

    let mut message = String::from("*YOUR CART*\n\n");
    for line in lines {
        message.push_str(&cart_line(line));
        message.push('\n');
    }
    message.push_str(&format!("\n*Total: {}*\n\n", cart_total(lines)));
    message.push_str("Say \"checkout\" to place your order\n");
    message.push_str("Say \"clear cart\" to empty cart\n");
    message.push_str("Say \"menu\" to continue shopping");
    message
}

pub fn order_confirmed(order: &Order) -> String {
    format!(
        "*ORDER CONFIRMED!*

Order ID: *{id}*
Total: *{total}*

Your delicious meal will be prepared and delivered in approximately 25-30 minutes.

Please have {total} ready for cash payment upon delivery.

Track your order by saying: \"track order {id}\"

Thank you for choosing Delicious Bites!",
        id = order.id,
        total = order.total
    )
}

pub fn tracking(order: &Order, now: DateTime<Utc>) -> String {
    let elapsed = order.minutes_elapsed(now);
    let footer = if elapsed < crate::domain::DELIVERY_ESTIMATE_MINUTES {
        format!("Estimated delivery: {}", clock_time(order.estimated_delivery_time))
    } else {
        "Delivered! We hope you enjoyed your meal!".to_string()
    };

    format!(
        "*ORDER TRACKING*

Order ID: {}
Status: {}
Total: {}
Order Time: {}

{}",
        order.id,
        order.stage_at(now).label(),
        order.total,
        clock_time(order.order_time),
        footer
    )
}

fn clock_time(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%-I:%M:%S %p").to_string()
}
