//! Handler for the `config` command group.

use std::path::Path;

use rust_decimal::Decimal;

use crate::adapter::inbound::cli::operator;
use crate::adapter::output;
use crate::error::Result;

/// Execute `config show`.
pub fn execute_show(path: &Path) -> Result<()> {
    let config_toml = operator::read_config_toml(path)?;
    let view = operator::operator()?.show_config(&config_toml)?;

    if output::is_json() {
        output::json_output(serde_json::to_value(&view)?);
        return Ok(());
    }

    output::section("Effective Configuration");
    output::field("Path", path.display());

    output::section("Logging");
    output::field("Level", &view.log_level);
    output::field("Format", &view.log_format);

    output::section("Discounts");
    output::field("Built-in categories", view.builtin_discounts);
    if view.categories.is_empty() {
        output::note("(no extra categories)");
    } else {
        for category in &view.categories {
            let percent = (category.rate * Decimal::ONE_HUNDRED).normalize();
            output::field(&category.key, format!("{percent}%"));
        }
    }

    output::section("Runner");
    output::field("Pause", view.pause);
    let lessons = if view.lessons.is_empty() {
        "all".to_string()
    } else {
        view.lessons.join(", ")
    };
    output::field("Lessons", lessons);
    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(path: &Path) -> Result<()> {
    let config_toml = operator::read_config_toml(path)?;
    let report = operator::operator()?.validate_config(&config_toml)?;

    if output::is_json() {
        output::json_output(serde_json::json!({
            "command": "config.validate",
            "valid": true,
            "path": path.display().to_string(),
            "registered_categories": report.registered_categories,
            "warnings": report.warnings,
        }));
        return Ok(());
    }

    output::success(&format!("{} is valid", path.display()));
    output::field("Categories", report.registered_categories);
    for warning in &report.warnings {
        output::warning(warning);
    }
    Ok(())
}
