//! Interactive session: enter budget, transport and items, then ask for a plan

use std::io::{BufRead, Write};

use anyhow::Result;
use cashia_config::Config;
use cashia_engine::Planner;
use cashia_session::Session;
use tracing::debug;

use crate::render;

const HELP: &str = "\
Commands:
  budget AMOUNT              set the total budget
  transport AMOUNT           set the transport cost
  item RATING PRICE NAME...  add a food item (rating 0-10)
  remove N                   remove the N-th item
  items                      show the budget overview
  plan                       recommend purchases (alias: output)
  clear                      start over
  help                       show this help
  quit                       leave the shell";

#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell {
    session: Session,
    planner: Planner,
    currency: String,
}

impl Shell {
    pub fn new(config: &Config) -> Self {
        Self {
            session: Session::new(),
            planner: Planner::with_max_capacity(config.max_capacity)
                .with_max_table_cells(config.max_table_cells),
            currency: config.currency.clone(),
        }
    }

    /// Run one line of input. Rejected input is reported, never fatal.
    pub fn execute(&mut self, line: &str, out: &mut impl Write) -> Result<Flow> {
        match self.dispatch(line, out) {
            Ok(flow) => Ok(flow),
            Err(e) => {
                writeln!(out, "Error: {}", e)?;
                Ok(Flow::Continue)
            }
        }
    }

    fn dispatch(&mut self, line: &str, out: &mut impl Write) -> Result<Flow> {
        let line = line.trim();
        let (command, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        match command {
            "" => {}
            "budget" => {
                let budget = self.session.submit_budget(rest)?;
                writeln!(out, "Budget Entry\n  Budget: {}{}", self.currency, budget)?;
            }
            "transport" => {
                let transport = self.session.submit_transport(rest)?;
                writeln!(
                    out,
                    "Transport Cost Entry\n  Cost: {}{}",
                    self.currency, transport
                )?;
            }
            "item" => {
                let mut parts = rest.splitn(3, char::is_whitespace);
                let rating = parts.next().unwrap_or("");
                let price = parts.next().unwrap_or("");
                let name = parts.next().unwrap_or("");

                let entry = self.session.submit_item(name, rating, price)?;
                let item = &entry.item;
                writeln!(
                    out,
                    "Food Entry\n  Food: {}\n  Rating: {}\n  Price: {}{}",
                    item.name, item.rating, self.currency, item.price
                )?;
            }
            "remove" => {
                let position: usize = rest
                    .parse()
                    .map_err(|_| anyhow::anyhow!("Usage: remove N"))?;
                let id = position
                    .checked_sub(1)
                    .and_then(|index| self.session.entries().get(index))
                    .map(|entry| entry.id.clone())
                    .ok_or_else(|| anyhow::anyhow!("No item at position {}", position))?;

                let removed = self.session.remove_item(&id)?;
                writeln!(out, "Removed {}", removed.item.name)?;
            }
            "items" | "overview" => {
                render::write_overview(
                    out,
                    &self.session.overview(),
                    self.session.entries(),
                    &self.currency,
                )?;
            }
            "plan" | "output" => match self.planner.plan(&self.session.snapshot()) {
                Ok(plan) => render::write_plan(out, &plan, &self.currency)?,
                Err(e) => match render::notice(&e) {
                    Some((title, message)) => render::write_notice(out, title, message)?,
                    None => return Err(e.into()),
                },
            },
            "clear" => {
                self.session.clear();
                writeln!(out, "Session cleared.")?;
            }
            "help" => writeln!(out, "{}", HELP)?,
            "quit" | "exit" => return Ok(Flow::Quit),
            other => {
                writeln!(out, "Unknown command '{}'. Type 'help' for commands.", other)?;
            }
        }

        Ok(Flow::Continue)
    }
}

pub fn handle(config: &Config) -> Result<()> {
    let mut shell = Shell::new(config);
    debug!(session = %shell.session.id(), "shell started");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "cashia shell - type 'help' for commands")?;
    let mut lines = stdin.lock().lines();

    loop {
        write!(out, "cashia> ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };

        if shell.execute(&line?, &mut out)? == Flow::Quit {
            break;
        }
    }

    Ok(())
}
