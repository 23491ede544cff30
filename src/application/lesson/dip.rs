//! Dependency Inversion: high-level policy depends on traits, wired once.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::domain::Principle;
use crate::port::{Lesson, Narrator};

/// An order placed by a customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: u32,
    pub customer: String,
    pub total: Decimal,
}

/// The violation: the processor builds its own concrete collaborators.
pub mod bad {
    use super::{Narrator, Order};

    #[derive(Debug, Default)]
    pub struct MySqlDatabase;

    impl MySqlDatabase {
        pub fn insert(&self, order: &Order, out: &mut dyn Narrator) {
            out.effect(&format!("MySQL: INSERT INTO orders VALUES ({})", order.id));
        }
    }

    #[derive(Debug, Default)]
    pub struct SmtpMailer;

    impl SmtpMailer {
        pub fn send(&self, to: &str, body: &str, out: &mut dyn Narrator) {
            out.effect(&format!("SMTP: to {to}: {body}"));
        }
    }

    /// Tied to MySQL and SMTP; neither can be swapped or faked.
    #[derive(Debug)]
    pub struct OrderProcessor {
        database: MySqlDatabase,
        mailer: SmtpMailer,
    }

    impl OrderProcessor {
        #[must_use]
        pub fn new() -> Self {
            Self {
                database: MySqlDatabase,
                mailer: SmtpMailer,
            }
        }

        pub fn process(&self, order: &Order, out: &mut dyn Narrator) {
            self.database.insert(order, out);
            self.mailer.send(
                &order.customer,
                &format!("order {} confirmed", order.id),
                out,
            );
        }
    }

    impl Default for OrderProcessor {
        fn default() -> Self {
            Self::new()
        }
    }
}

/// The fix: the service owns abstractions; a composition root picks
/// implementations.
pub mod good {
    use super::{Narrator, Order};

    pub trait OrderStore {
        fn save(&mut self, order: &Order, out: &mut dyn Narrator);
        fn count(&self) -> usize;
    }

    pub trait OrderNotifier {
        fn notify(&self, order: &Order, out: &mut dyn Narrator);
    }

    pub trait AuditLog {
        fn record(&self, message: &str, out: &mut dyn Narrator);
    }

    /// Persists through SQL; here it only reports the statement.
    #[derive(Debug, Default)]
    pub struct SqlOrderStore {
        saved: usize,
    }

    impl OrderStore for SqlOrderStore {
        fn save(&mut self, order: &Order, out: &mut dyn Narrator) {
            out.effect(&format!("SQL: INSERT INTO orders VALUES ({})", order.id));
            self.saved += 1;
        }

        fn count(&self) -> usize {
            self.saved
        }
    }

    #[derive(Debug, Default)]
    pub struct InMemoryOrderStore {
        orders: Vec<Order>,
    }

    impl OrderStore for InMemoryOrderStore {
        fn save(&mut self, order: &Order, out: &mut dyn Narrator) {
            out.effect(&format!("memory: stored order {}", order.id));
            self.orders.push(order.clone());
        }

        fn count(&self) -> usize {
            self.orders.len()
        }
    }

    #[derive(Debug, Default, Clone, Copy)]
    pub struct EmailNotifier;

    impl OrderNotifier for EmailNotifier {
        fn notify(&self, order: &Order, out: &mut dyn Narrator) {
            out.effect(&format!("email to {}: order {} confirmed", order.customer, order.id));
        }
    }

    #[derive(Debug, Default, Clone, Copy)]
    pub struct SmsNotifier;

    impl OrderNotifier for SmsNotifier {
        fn notify(&self, order: &Order, out: &mut dyn Narrator) {
            out.effect(&format!("sms to {}: order {} confirmed", order.customer, order.id));
        }
    }

    #[derive(Debug, Default, Clone, Copy)]
    pub struct ConsoleAuditLog;

    impl AuditLog for ConsoleAuditLog {
        fn record(&self, message: &str, out: &mut dyn Narrator) {
            out.effect(&format!("[audit] {message}"));
        }
    }

    /// High-level order policy. Knows nothing about SQL, email or SMS.
    pub struct OrderService {
        store: Box<dyn OrderStore>,
        notifier: Box<dyn OrderNotifier>,
        audit: Box<dyn AuditLog>,
    }

    impl OrderService {
        #[must_use]
        pub fn new(
            store: Box<dyn OrderStore>,
            notifier: Box<dyn OrderNotifier>,
            audit: Box<dyn AuditLog>,
        ) -> Self {
            Self {
                store,
                notifier,
                audit,
            }
        }

        pub fn place(&mut self, order: &Order, out: &mut dyn Narrator) {
            self.store.save(order, out);
            self.notifier.notify(order, out);
            self.audit
                .record(&format!("order {} placed for {}", order.id, order.total), out);
        }

        #[must_use]
        pub fn stored(&self) -> usize {
            self.store.count()
        }
    }

    /// Which implementations a composition root should wire together.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Wiring {
        Production,
        Lightweight,
    }

    /// Composition root: the one place that names concrete types.
    #[must_use]
    pub fn compose(wiring: Wiring) -> OrderService {
        match wiring {
            Wiring::Production => OrderService::new(
                Box::new(SqlOrderStore::default()),
                Box::new(EmailNotifier),
                Box::new(ConsoleAuditLog),
            ),
            Wiring::Lightweight => OrderService::new(
                Box::new(InMemoryOrderStore::default()),
                Box::new(SmsNotifier),
                Box::new(ConsoleAuditLog),
            ),
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DependencyInversionLesson;

impl Lesson for DependencyInversionLesson {
    fn principle(&self) -> Principle {
        Principle::DependencyInversion
    }

    fn run(&self, out: &mut dyn Narrator) {
        let order = Order {
            id: 42,
            customer: "ada@example.com".to_string(),
            total: dec!(99.90),
        };

        out.section("Bad: OrderProcessor builds MySqlDatabase and SmtpMailer");
        bad::OrderProcessor::new().process(&order, out);
        out.explain("Switching databases or faking mail in a test means rewriting OrderProcessor.");

        out.section("Good: OrderService depends on OrderStore, OrderNotifier, AuditLog");
        for (label, wiring) in [
            ("production wiring", good::Wiring::Production),
            ("lightweight wiring", good::Wiring::Lightweight),
        ] {
            out.explain(&format!("Composed with the {label}:"));
            let mut service = good::compose(wiring);
            service.place(&order, out);
            out.outcome("orders stored", &service.stored().to_string());
        }
        out.explain("The same OrderService code ran against two sets of implementations.");
    }
}

#[cfg(test)]
mod tests {
    use super::good::*;
    use super::*;
    use crate::port::NullNarrator;
    use std::cell::Cell;
    use std::rc::Rc;

    struct CountingNotifier(Rc<Cell<usize>>);

    impl OrderNotifier for CountingNotifier {
        fn notify(&self, _order: &Order, _out: &mut dyn Narrator) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn order() -> Order {
        Order {
            id: 1,
            customer: "grace@example.com".to_string(),
            total: dec!(10),
        }
    }

    #[test]
    fn test_compose_wirings_store_orders() {
        for wiring in [Wiring::Production, Wiring::Lightweight] {
            let mut service = compose(wiring);
            service.place(&order(), &mut NullNarrator);
            service.place(&order(), &mut NullNarrator);
            assert_eq!(service.stored(), 2);
        }
    }

    #[test]
    fn test_service_accepts_substitute_notifier() {
        let sent = Rc::new(Cell::new(0));
        let mut service = OrderService::new(
            Box::new(InMemoryOrderStore::default()),
            Box::new(CountingNotifier(Rc::clone(&sent))),
            Box::new(ConsoleAuditLog),
        );
        service.place(&order(), &mut NullNarrator);
        assert_eq!(sent.get(), 1);
    }
}
