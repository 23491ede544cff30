//! Lesson listing and explanation.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::output;
use crate::domain::Principle;
use crate::error::Result;

#[derive(Tabled)]
struct LessonRow {
    #[tabled(rename = "Key")]
    key: &'static str,
    #[tabled(rename = "Principle")]
    title: &'static str,
    #[tabled(rename = "In one line")]
    summary: &'static str,
}

/// What the bad and the good scenario of each lesson show.
fn walkthrough(principle: Principle) -> &'static str {
    match principle {
        Principle::SingleResponsibility => {
            "Bad:  UserManager validates, stores, mails and logs in one type.
      A missing name raises an error nothing inside the type handles.

Good: UserValidator, UserRepository and WelcomeMailer each do one job.
      UserService composes them; the caller reports validation errors."
        }
        Principle::OpenClosed => {
            "Bad:  DiscountCalculator matches on \"regular\", \"premium\", \"vip\".
      A student discount means editing the match.

Good: a registry maps categories to strategies (case-insensitive).
      regular 100 -> 5, premium 200 -> 20, vip 100 -> 15, unknown -> 0.
      Registering \"student\" at runtime gives student 100 -> 20
      without touching the lookup code."
        }
        Principle::LiskovSubstitution => {
            "Bad:  Square implements Resizable by keeping its sides equal.
      Code that sets width 5 and height 4 expects 20 and gets 16.

Good: Rectangle and Square are separate types behind Shape::area,
      a contract both can keep."
        }
        Principle::InterfaceSegregation => {
            "Bad:  a fat Worker trait makes Robot implement eat, rest and
      write_code, which can only fail at runtime.

Good: Workable, Feedable, Restable and Coder are separate traits.
      Robot implements Workable only; asking it to eat does not compile."
        }
        Principle::DependencyInversion => {
            "Bad:  OrderProcessor constructs MySqlDatabase and SmtpMailer itself.

Good: OrderService takes an OrderStore, an OrderNotifier and an AuditLog.
      A composition root wires SQL + email or in-memory + SMS;
      the service code is the same for both."
        }
    }
}

/// List available lessons.
pub fn list() -> Result<()> {
    if output::is_quiet() && !output::is_json() {
        return Ok(());
    }

    if output::is_json() {
        let lessons: Vec<_> = Principle::ALL
            .iter()
            .map(|p| {
                json!({
                    "key": p.key(),
                    "title": p.title(),
                    "summary": p.summary(),
                })
            })
            .collect();
        output::json_output(json!({
            "command": "lessons.list",
            "lessons": lessons,
        }));
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Available lessons");

    let rows: Vec<LessonRow> = Principle::ALL
        .iter()
        .map(|p| LessonRow {
            key: p.key(),
            title: p.title(),
            summary: p.summary(),
        })
        .collect();

    let table = Table::new(rows).to_string();
    output::lines(&table);

    output::hint(&format!(
        "run {} for details",
        output::highlight("solid-lessons lessons explain <key>")
    ));

    Ok(())
}

/// Explain a specific lesson.
pub fn explain(name: &str) -> Result<()> {
    if output::is_quiet() && !output::is_json() {
        return Ok(());
    }

    let principle = name.parse::<Principle>();
    let available: Vec<&str> = Principle::ALL.iter().map(|p| p.key()).collect();

    if output::is_json() {
        let payload = match principle {
            Ok(p) => json!({
                "command": "lessons.explain",
                "lesson": p.key(),
                "title": p.title(),
                "summary": p.summary(),
                "walkthrough": walkthrough(p),
            }),
            Err(_) => json!({
                "command": "lessons.explain",
                "status": "unknown_lesson",
                "requested": name,
                "available": available,
            }),
        };
        output::json_output(payload);
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));

    match principle {
        Ok(p) => {
            output::section(p.title());
            output::note(p.summary());
            output::lines("");
            output::lines(walkthrough(p));
            output::hint(&format!(
                "run {} to see it",
                output::highlight(format!("solid-lessons run --lesson {}", p.key()))
            ));
        }
        Err(_) => {
            output::error(&format!("Unknown lesson: {name}"));
            output::hint(&format!("available lessons: {}", available.join(", ")));
        }
    }

    Ok(())
}
