//! Open/Closed: add discount categories without editing dispatch.

use std::sync::Arc;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::application::discount::{PercentageDiscount, StrategyRegistry};
use crate::domain::{DiscountQuote, Principle};
use crate::port::{Lesson, Narrator};

/// The violation: every new category is another match arm.
pub mod bad {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[derive(Debug, Default, Clone, Copy)]
    pub struct DiscountCalculator;

    impl DiscountCalculator {
        #[must_use]
        pub fn calculate(&self, category: &str, amount: Decimal) -> Decimal {
            match category {
                "regular" => amount * dec!(0.05),
                "premium" => amount * dec!(0.10),
                "vip" => amount * dec!(0.15),
                _ => Decimal::ZERO,
            }
        }
    }
}

/// Runs the open/closed demonstration against `registry`.
///
/// The registry is passed in rather than built here so the CLI can hand over
/// one assembled from configuration.
#[derive(Clone)]
pub struct OpenClosedLesson {
    registry: Arc<StrategyRegistry>,
}

impl OpenClosedLesson {
    #[must_use]
    pub fn new(registry: Arc<StrategyRegistry>) -> Self {
        Self { registry }
    }

    fn quote(&self, category: &str, amount: Decimal, out: &mut dyn Narrator) {
        let label = format!("{category} on {amount}");
        match self.registry.quote(category, amount) {
            DiscountQuote::Matched { discount, .. } => {
                out.outcome(&label, &discount.normalize().to_string());
            }
            DiscountQuote::NoMatchingStrategy => {
                out.outcome(&label, "0 (no matching strategy)");
            }
        }
    }
}

impl Default for OpenClosedLesson {
    fn default() -> Self {
        Self::new(Arc::new(StrategyRegistry::with_builtin()))
    }
}

impl Lesson for OpenClosedLesson {
    fn principle(&self) -> Principle {
        Principle::OpenClosed
    }

    fn run(&self, out: &mut dyn Narrator) {
        out.section("Bad: DiscountCalculator matches on category names");
        let calculator = bad::DiscountCalculator;
        for (category, amount) in [("regular", dec!(100)), ("vip", dec!(100))] {
            let discount = calculator.calculate(category, amount);
            out.outcome(&format!("{category} on {amount}"), &discount.normalize().to_string());
        }
        out.explain(
            "Supporting a student discount means opening DiscountCalculator and adding \
             another arm to its match.",
        );

        out.section("Good: strategies registered by category");
        out.explain("The registry looks up a strategy by category and delegates to it.");
        self.quote("regular", dec!(100), out);
        self.quote("premium", dec!(200), out);
        self.quote("VIP", dec!(100), out);
        self.quote("unknown", dec!(100), out);

        out.explain("Registering a student strategy at runtime. The lookup code is untouched.");
        match self
            .registry
            .register("student", Arc::new(PercentageDiscount::student()))
        {
            Ok(()) => out.effect("registered student (20%)"),
            Err(err) => out.fault(&err.to_string()),
        }
        self.quote("student", dec!(100), out);
    }
}
