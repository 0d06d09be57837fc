//! Demonstrates using an OrderedBag behind a ServiceLocator.
//!
//! - Plain values are settings, read back as stored
//! - Plain callables are factories, invoked on every resolve
//! - Singletons are built once and shared
//! - Protected callables are handed back to the caller uninvoked
//!
//! Run with: cargo run --example service_locator

use sovran_bag::{BagError, PropertyAccess, ServiceLocator, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

fn main() -> Result<(), BagError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut services = ServiceLocator::new();

    // Settings
    services.set("app.name", "MyApp");
    services.set("app.debug", true);
    services.set_property("db.host", "localhost");
    services.set_property("db.port", 5432);

    // A fresh request id every time
    let next_id = Arc::new(AtomicU64::new(1));
    services.factory("request.id", move || {
        Value::from(format!("req-{}", next_id.fetch_add(1, Ordering::SeqCst)))
    });

    // One shared logger
    services.singleton("logger", || Value::object(Logger::new("app")));

    // An error handler the caller invokes itself
    services.protect("on_error", |args| {
        let message = args.first().and_then(Value::as_str).unwrap_or("unknown");
        Value::from(format!("handled: {message}"))
    });

    let user_service = UserService { services: &services };
    user_service.create_user("alice")?;
    user_service.create_user("bob")?;

    let on_error = services.require("on_error")?;
    println!("{:?}", on_error.call(&[Value::from("disk full")])?);

    println!("\nRegistered keys:");
    for (key, value) in services.bag() {
        println!("  {key} ({})", value.kind());
    }

    Ok(())
}

#[derive(Debug)]
struct Logger {
    prefix: String,
}

impl Logger {
    fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
        }
    }

    fn log(&self, message: &str) {
        println!("[{}] {}", self.prefix, message);
    }
}

struct UserService<'a> {
    services: &'a ServiceLocator,
}

impl UserService<'_> {
    fn create_user(&self, username: &str) -> Result<(), BagError> {
        let logger = self.services.require("logger")?;
        let request_id = self.services.resolve("request.id");

        if let Some(logger) = logger.downcast_ref::<Logger>() {
            logger.log(&format!(
                "{} creating user {}",
                request_id.as_str().unwrap_or("-"),
                username
            ));
        }

        println!(
            "  -> Would insert into users on {}:{}",
            self.services.property("db.host").as_str().unwrap_or("?"),
            self.services.property("db.port").as_i64().unwrap_or_default()
        );

        if self.services.resolve("app.debug").as_bool() == Some(true) {
            println!("  -> [DEBUG] User {username} created successfully");
        }

        Ok(())
    }
}
