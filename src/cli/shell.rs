//! Interactive shell
//!
//! Reads one command per line from stdin, dispatches it against the session,
//! and prints the result. Recoverable errors (bad input, unknown positions)
//! are reported inline and never end the session; only `quit`/`exit` or EOF
//! leave the loop.

use crate::application::{goals, habits, journal};
use crate::cli::commands::{
    GoalAction, HabitAction, JournalAction, QuoteAction, ShellCommand, ShellLine,
};
use crate::cli::output;
use crate::domain::{Quote, Session};
use crate::error::Result;
use crate::infrastructure::Config;
use chrono::NaiveDate;
use clap::Parser;
use std::io::{self, BufRead, Write};

/// What the loop does after one dispatched command
#[derive(Debug)]
enum Step {
    /// Print this text and keep reading
    Render(String),
    /// Leave the loop
    Quit,
}

/// One interactive session: the store, the quote deck, and the fixed
/// session date
pub struct Shell {
    session: Session,
    quotes: Vec<Quote>,
    today: NaiveDate,
}

impl Shell {
    pub fn new(config: &Config, today: NaiveDate) -> Self {
        Shell {
            session: Session::with_habits(&config.habit_names()),
            quotes: config.quote_deck(),
            today,
        }
    }

    /// Run the prompt loop until quit or EOF
    pub fn run(&mut self) -> Result<()> {
        println!("{}", output::banner(self.today));
        println!();
        println!("{}", output::format_quote(self.current_quote()));

        let mut reader = io::stdin().lock();
        let mut line = String::new();

        loop {
            print!("mindtrack> ");
            io::stdout().flush()?;

            line.clear();
            if reader.read_line(&mut line)? == 0 {
                // EOF ends the session like quit
                println!();
                break;
            }

            let input = line.trim();
            if input.is_empty() {
                continue;
            }

            match ShellLine::try_parse_from(input.split_whitespace()) {
                Ok(parsed) => match self.dispatch(parsed.command) {
                    Ok(Step::Render(text)) => println!("{}", text),
                    Ok(Step::Quit) => break,
                    Err(e) => eprintln!("Error: {}", e.display_with_suggestions()),
                },
                // Unknown command or bad arguments; clap picks the stream
                Err(e) => e.print()?,
            }
        }

        println!("{}", output::goodbye());
        Ok(())
    }

    fn dispatch(&mut self, command: ShellCommand) -> Result<Step> {
        match command {
            ShellCommand::Quote { action } => {
                if matches!(action, Some(QuoteAction::Next)) {
                    self.session.next_quote(self.quotes.len());
                }
                Ok(Step::Render(output::format_quote(self.current_quote())))
            }

            ShellCommand::Journal { action } => match action {
                JournalAction::Add { on, text } => {
                    let text = text.join(" ");
                    journal::add_entry(&mut self.session, on.as_deref(), &text, self.today)?;
                    Ok(Step::Render("Journal entry saved!".to_string()))
                }
                JournalAction::List => Ok(Step::Render(output::format_journal(
                    &self.session.journal_newest_first(),
                ))),
            },

            ShellCommand::Goal { action } => match action {
                GoalAction::Add {
                    target,
                    category,
                    text,
                } => {
                    let text = text.join(" ");
                    goals::add_goal(&mut self.session, &text, &target, &category, self.today)?;
                    Ok(Step::Render("Goal added!".to_string()))
                }
                GoalAction::List { all } => Ok(Step::Render(output::format_goals(
                    self.session.goals(),
                    self.today,
                    all,
                ))),
                GoalAction::Done { position } => {
                    let goal = goals::complete_goal(&mut self.session, position)?;
                    Ok(Step::Render(format!("Goal completed: {}", goal.description)))
                }
            },

            ShellCommand::Habit { action } => match action {
                HabitAction::List => {
                    Ok(Step::Render(output::format_habits(self.session.habits())))
                }
                HabitAction::Done { position } => {
                    let (habit, update) =
                        habits::complete_habit(&mut self.session, position, self.today)?;
                    Ok(Step::Render(output::format_streak_update(&habit, update)))
                }
            },

            ShellCommand::Insights => Ok(Step::Render(output::format_insights(&self.session))),

            ShellCommand::Resources => Ok(Step::Render(output::resources_text().to_string())),

            ShellCommand::Dashboard => Ok(Step::Render(output::format_dashboard(
                &self.session,
                self.today,
            ))),

            ShellCommand::Quit => Ok(Step::Quit),
        }
    }

    // The deck is never empty and the cursor always stays within it
    fn current_quote(&self) -> &Quote {
        &self.quotes[self.session.quote_cursor()]
    }
}
