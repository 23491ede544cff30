//! Handler for the `run` command.

use std::io::{self, BufRead};

use crate::adapter::inbound::cli::command::RunArgs;
use crate::adapter::inbound::cli::{banner, operator};
use crate::adapter::output;
use crate::adapter::outbound::console::ConsoleNarrator;
use crate::domain::Principle;
use crate::error::Result;
use crate::port::inbound::operator::runtime::{RunPlan, RunRequest};

/// Execute the run command.
pub fn execute(args: &RunArgs, color: bool) -> Result<()> {
    let request = RunRequest {
        config_toml: operator::read_optional_config_toml(args.config.as_deref())?,
        log_level: args.log_level.clone(),
        lessons: args.lesson.clone(),
        pause: args.pause,
    };
    let plan = operator::operator()?.prepare_run(&request)?;

    let interactive = !output::is_json() && !output::is_quiet();
    if !args.no_banner && interactive {
        banner::print_banner(color);
    }
    output::header(env!("CARGO_PKG_VERSION"));
    display_plan(&plan);

    let pause = plan.pause && interactive;
    if pause {
        wait_for_enter("Press Enter to start...")?;
    } else {
        output::note("Starting.");
    }

    operator::operator()?.execute_run(&request, &mut ConsoleNarrator)?;

    if pause {
        wait_for_enter("Press Enter to exit...")?;
    } else {
        output::note("Finished.");
    }
    Ok(())
}

fn display_plan(plan: &RunPlan) {
    if output::verbosity() == 0 {
        return;
    }
    output::field("Lessons", lessons_label(&plan.lessons));
    output::field("Categories", plan.categories.join(", "));
}

fn lessons_label(selected: &[Principle]) -> String {
    if selected.len() == Principle::ALL.len() {
        return "all".to_string();
    }
    selected.iter().map(|p| p.key()).collect::<Vec<_>>().join(", ")
}

fn wait_for_enter(prompt: &str) -> Result<()> {
    output::note(prompt);
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(())
}
