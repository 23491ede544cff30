//! Handler for the `discount` command group.

use rust_decimal::Decimal;
use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::command::{ComputeArgs, OptionalConfigArg};
use crate::adapter::inbound::cli::operator;
use crate::adapter::output;
use crate::domain::DiscountQuote;
use crate::error::Result;
use crate::port::inbound::operator::discount::DiscountRequest;

/// Amount used for the sample column of `discount list`.
const SAMPLE_AMOUNT: Decimal = Decimal::ONE_HUNDRED;

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Strategy")]
    strategy: String,
    #[tabled(rename = "Discount on 100")]
    sample: Decimal,
}

/// Execute `discount list`.
pub fn list(args: &OptionalConfigArg) -> Result<()> {
    let config_toml = operator::read_optional_config_toml(args.config.as_deref())?;
    let views = operator::operator()?.list_categories(config_toml.as_deref(), SAMPLE_AMOUNT)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "discount.list",
            "categories": views,
        }));
        return Ok(());
    }

    if output::is_quiet() {
        return Ok(());
    }

    output::section("Registered categories");
    if views.is_empty() {
        output::note("(none)");
        output::hint("enable discounts.builtin or add [[discounts.categories]]");
        return Ok(());
    }

    let rows: Vec<CategoryRow> = views
        .into_iter()
        .map(|view| CategoryRow {
            category: view.category,
            strategy: view.strategy,
            sample: view.sample_discount,
        })
        .collect();
    output::lines(&Table::new(rows).to_string());
    Ok(())
}

/// Execute `discount compute`.
pub fn compute(args: &ComputeArgs) -> Result<()> {
    let request = DiscountRequest {
        config_toml: operator::read_optional_config_toml(args.config.as_deref())?,
        category: args.category.clone(),
        amount: args.amount,
    };
    let report = operator::operator()?.compute_discount(&request)?;
    let discount = report.quote.discount_or_zero().normalize();

    if output::is_json() {
        output::json_output(json!({
            "command": "discount.compute",
            "category": args.category,
            "amount": args.amount,
            "quote": report.quote,
            "discount": discount,
        }));
        return Ok(());
    }

    if output::is_quiet() {
        println!("{discount}");
        return Ok(());
    }

    output::field("Category", &args.category);
    output::field("Amount", args.amount);
    output::field("Discount", output::highlight(discount));
    match &report.quote {
        DiscountQuote::Matched { category, .. } => {
            output::note(&format!("matched strategy for {category}"));
        }
        DiscountQuote::NoMatchingStrategy => {
            output::note("no matching strategy");
            output::hint(&format!(
                "known categories: {}",
                report.known_categories.join(", ")
            ));
        }
    }
    Ok(())
}
