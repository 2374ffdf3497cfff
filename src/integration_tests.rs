#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{DateTime, Duration, Utc};

    use crate::actor_framework::{Entity, FrameworkError};
    use crate::app_system::BotSystem;
    use crate::clients::{OrderClient, SessionClient};
    use crate::commands::{format, normalize, Command, InterpretError, Interpreter};
    use crate::domain::{CartLine, MenuCatalog, Order, Session};
    use crate::order_actor::OrderError;
    use crate::mock_framework::{create_mock_client, expect_action, expect_create, expect_get, expect_get_or_create};
    use crate::session_actor::{SessionAction, SessionActionResult, SessionError};

    async fn say(interpreter: &Interpreter, user: &str, text: &str, now: DateTime<Utc>) -> String {
        let canonical = normalize(text, false, interpreter.menu());
        interpreter.execute(user, Command::parse(&canonical), now).await.unwrap()
    }

    fn pizza_line(quantity: u32) -> CartLine {
        let menu = MenuCatalog::restaurant();
        let pizza = menu.find("M1").unwrap();
        CartLine {
            item_id: pizza.id.clone(),
            name: pizza.name.clone(),
            price: pizza.price,
            quantity,
        }
    }

    #[tokio::test]
    async fn test_checkout_flow() {
        // 1. Setup Mocks
        let (session_inner, mut session_rx) = create_mock_client::<Session>(10);
        let (order_inner, mut order_rx) = create_mock_client::<Order>(10);
        let interpreter = Interpreter::new(
            Arc::new(MenuCatalog::restaurant()),
            SessionClient::new(session_inner),
            OrderClient::new(order_inner),
        );
        let now = Utc::now();

        // 2. Execute checkout in background
        let checkout = tokio::spawn(async move { interpreter.execute("u1", Command::Checkout, now).await });

        // 3. Verify Interactions

        // Expect session lookup
        let (user_id, _params, responder) = expect_get_or_create(&mut session_rx).await.expect("Expected session open");
        assert_eq!(user_id, "u1");
        let mut session = Session::new("u1");
        session.cart.push(pizza_line(2));
        responder.send(Ok(session)).unwrap();

        // Expect the cart to be taken
        let (user_id, action, responder) = expect_action(&mut session_rx).await.expect("Expected TakeCart");
        assert_eq!(user_id, "u1");
        assert!(matches!(action, SessionAction::TakeCart));
        responder.send(Ok(SessionActionResult::TakeCart(vec![pizza_line(2)]))).unwrap();

        // Expect Order Create
        let (payload, responder) = expect_create(&mut order_rx).await.expect("Expected Order Create");
        assert_eq!(payload.user_id, "u1");
        assert_eq!(payload.items, vec![pizza_line(2)]);
        assert_eq!(payload.order_time, now);
        let order = Order::from_create_params("ORD000001".to_string(), payload.clone()).unwrap();
        responder.send(Ok("ORD000001".to_string())).unwrap();

        // Expect the stored order to be read back
        let (order_id, responder) = expect_get(&mut order_rx).await.expect("Expected Order Get");
        assert_eq!(order_id, "ORD000001");
        responder.send(Ok(Some(order))).unwrap();

        // 4. Verify Result
        let reply = checkout.await.unwrap().unwrap();
        assert!(reply.contains("Order ID: *ORD000001*"));
        assert!(reply.contains("Total: *$33.98*"));
    }

    #[tokio::test]
    async fn test_failed_order_returns_lines_to_cart() {
        let (session_inner, mut session_rx) = create_mock_client::<Session>(10);
        let (order_inner, mut order_rx) = create_mock_client::<Order>(10);
        let interpreter = Interpreter::new(
            Arc::new(MenuCatalog::restaurant()),
            SessionClient::new(session_inner),
            OrderClient::new(order_inner),
        );

        let checkout = tokio::spawn(async move { interpreter.execute("u1", Command::Checkout, Utc::now()).await });

        let (_, _, responder) = expect_get_or_create(&mut session_rx).await.expect("Expected session open");
        responder.send(Ok(Session::new("u1"))).unwrap();

        let (_, action, responder) = expect_action(&mut session_rx).await.expect("Expected TakeCart");
        assert!(matches!(action, SessionAction::TakeCart));
        responder.send(Ok(SessionActionResult::TakeCart(vec![pizza_line(2)]))).unwrap();

        let (_, responder) = expect_create(&mut order_rx).await.expect("Expected Order Create");
        responder.send(Err(FrameworkError::Rejected("store full".to_string()))).unwrap();

        // The taken line goes back into the session.
        let (user_id, action, responder) = expect_action(&mut session_rx).await.expect("Expected AddItem");
        assert_eq!(user_id, "u1");
        match action {
            SessionAction::AddItem { item, quantity } => {
                assert_eq!(item.id, "M1");
                assert_eq!(quantity, 2);
            }
            other => panic!("Unexpected action: {:?}", other),
        }
        responder.send(Ok(SessionActionResult::AddItem(2))).unwrap();

        let result = checkout.await.unwrap();
        assert_eq!(
            result,
            Err(InterpretError::Order(OrderError::ValidationError("store full".to_string())))
        );
    }

    #[tokio::test]
    async fn test_unreachable_store_is_an_error() {
        let (session_inner, session_rx) = create_mock_client::<Session>(1);
        let (order_inner, _order_rx) = create_mock_client::<Order>(1);
        drop(session_rx);

        let interpreter = Interpreter::new(
            Arc::new(MenuCatalog::restaurant()),
            SessionClient::new(session_inner),
            OrderClient::new(order_inner),
        );
        let result = interpreter.execute("u1", Command::Cart, Utc::now()).await;

        assert!(matches!(
            result,
            Err(InterpretError::Session(SessionError::ActorCommunicationError(_)))
        ));
    }

    #[tokio::test]
    async fn test_repeated_adds_merge_into_one_line() {
        let system = BotSystem::new(MenuCatalog::restaurant(), 8);
        let interpreter = system.interpreter();
        let now = Utc::now();

        say(&interpreter, "u1", "add M1 2", now).await;
        say(&interpreter, "u1", "add M1 3", now).await;
        let cart = say(&interpreter, "u1", "cart", now).await;

        assert!(cart.contains("Margherita Pizza x5 — $84.95"));
        assert!(cart.contains("*Total: $84.95*"));
        assert_eq!(cart.matches("Margherita Pizza").count(), 1);
    }

    #[tokio::test]
    async fn test_checkout_empties_cart_and_stores_order() {
        let system = BotSystem::new(MenuCatalog::restaurant(), 8);
        let interpreter = system.interpreter();
        let now = Utc::now();

        say(&interpreter, "u1", "add M1 2", now).await;
        say(&interpreter, "u1", "add DR1 1", now).await;
        let confirmation = say(&interpreter, "u1", "checkout", now).await;
        assert!(confirmation.contains("ORDER CONFIRMED"));
        assert!(confirmation.contains("$37.97"));

        assert_eq!(say(&interpreter, "u1", "cart", now).await, format::cart(&[]));

        let orders = system.order_client.list_orders().await.unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].user_id, "u1");
        assert_eq!(orders[0].items.len(), 2);
        assert!(confirmation.contains(&orders[0].id));
    }

    #[tokio::test]
    async fn test_empty_checkout_creates_no_order() {
        let system = BotSystem::new(MenuCatalog::restaurant(), 8);
        let interpreter = system.interpreter();

        let reply = say(&interpreter, "u1", "checkout", Utc::now()).await;

        assert_eq!(reply, format::CHECKOUT_EMPTY);
        assert!(system.order_client.list_orders().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_adds_leave_cart_untouched() {
        let system = BotSystem::new(MenuCatalog::restaurant(), 8);
        let interpreter = system.interpreter();
        let now = Utc::now();

        for input in ["add X9 2", "add M1 0", "add M1 two", "add M1 -1"] {
            assert_eq!(say(&interpreter, "u1", input, now).await, format::ADD_INVALID, "{input}");
        }
        assert_eq!(say(&interpreter, "u1", "add M1", now).await, format::ADD_INCOMPLETE);

        let session = system.session_client.open_session("u1".into()).await.unwrap();
        assert!(session.cart.is_empty());
    }

    #[tokio::test]
    async fn test_overflowing_add_is_rejected_without_mutation() {
        let system = BotSystem::new(MenuCatalog::restaurant(), 8);
        let interpreter = system.interpreter();
        let now = Utc::now();

        let first = say(&interpreter, "u1", "add m1 4294967295", now).await;
        assert!(first.contains("Margherita Pizza"));

        assert_eq!(say(&interpreter, "u1", "add m1 1", now).await, format::ADD_INVALID);

        let session = system.session_client.open_session("u1".into()).await.unwrap();
        assert_eq!(session.cart.len(), 1);
        assert_eq!(session.cart[0].quantity, u32::MAX);
    }

    #[tokio::test]
    async fn test_carts_are_per_user() {
        let system = BotSystem::new(MenuCatalog::restaurant(), 8);
        let interpreter = system.interpreter();
        let now = Utc::now();

        say(&interpreter, "alice", "add M2 1", now).await;
        say(&interpreter, "bob", "clear", now).await;

        let alice = system.session_client.open_session("alice".into()).await.unwrap();
        assert_eq!(alice.cart.len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_adds_are_not_lost() {
        let system = BotSystem::new(MenuCatalog::restaurant(), 4);
        let interpreter = system.interpreter();
        let now = Utc::now();

        let tasks: Vec<_> = (0..20)
            .map(|_| {
                let interpreter = interpreter.clone();
                tokio::spawn(async move { say(&interpreter, "u1", "add M1 1", now).await })
            })
            .collect();
        for task in tasks {
            task.await.unwrap();
        }

        let session = system.session_client.open_session("u1".into()).await.unwrap();
        assert_eq!(session.cart.len(), 1);
        assert_eq!(session.cart[0].quantity, 20);
    }

    #[tokio::test]
    async fn test_tracking_follows_elapsed_time() {
        let system = BotSystem::new(MenuCatalog::restaurant(), 8);
        let interpreter = system.interpreter();
        let placed = Utc::now();

        say(&interpreter, "u1", "add S1 1", placed).await;
        say(&interpreter, "u1", "checkout", placed).await;
        let order_id = system.order_client.list_orders().await.unwrap()[0].id.clone();
        let track = format!("track order {}", order_id.to_lowercase());

        let early = say(&interpreter, "u1", &track, placed + Duration::seconds(299)).await;
        assert!(early.contains("Status: preparing"));
        assert!(early.contains("Estimated delivery:"));

        let boundary = say(&interpreter, "u1", &track, placed + Duration::minutes(5)).await;
        assert!(boundary.contains("Status: cooking"));

        let late = say(&interpreter, "u1", &track, placed + Duration::minutes(30)).await;
        assert!(late.contains("Status: delivered"));
        assert!(late.contains("Delivered! We hope you enjoyed your meal!"));
    }

    #[tokio::test]
    async fn test_tracking_unknown_order() {
        let system = BotSystem::new(MenuCatalog::restaurant(), 8);
        let interpreter = system.interpreter();

        let reply = say(&interpreter, "u1", "track ORD999999", Utc::now()).await;
        assert_eq!(reply, format::ORDER_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_shutdown_after_clients_drop() {
        let system = BotSystem::new(MenuCatalog::restaurant(), 8);
        let interpreter = system.interpreter();
        say(&interpreter, "u1", "menu", Utc::now()).await;
        drop(interpreter);

        assert_eq!(system.shutdown().await, Ok(()));
    }
}
