//! Line-oriented interactive session.
//!
//! Likes, cart counts and profile drafts live only as long as the process, so the shell is
//! where they can be exercised across several commands. Each line is parsed with the
//! multicall [`ShellLine`] parser; errors are printed and the loop keeps going.

use super::commands::{parse_field, parse_item_id};
use super::render::{print_messages, print_result};
use super::setup::{parse_shell_line, ShellCommand, ShellLine};
use clap::CommandFactory;
use colored::Colorize;
use showcase::api::{CmdMessage, CmdResult, ShowcaseApi};
use showcase::error::Result;
use showcase::store::CatalogSource;
use std::io::{BufRead, IsTerminal, Write};
use tracing::debug;

enum Flow {
    Continue,
    Quit,
}

pub(super) fn run<S: CatalogSource, R: BufRead>(api: &mut ShowcaseApi<S>, input: R) -> Result<()> {
    let interactive = std::io::stdin().is_terminal();
    let first = if api.current_view().is_catalog() {
        api.list()?
    } else {
        api.show_profile()?
    };
    print_result(&first);

    let mut lines = input.lines();
    loop {
        if interactive {
            print!("{}> ", api.current_view().as_str().cyan());
            std::io::stdout().flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        let command = match parse_shell_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                let line_one = e.to_string();
                let line_one = line_one.lines().next().unwrap_or_default().to_string();
                print_messages(&[CmdMessage::error(line_one)]);
                continue;
            }
        };
        debug!(?command, "shell command");

        match dispatch(api, command) {
            Ok((result, Flow::Continue)) => print_result(&result),
            Ok((_, Flow::Quit)) => break,
            Err(e) => print_messages(&[CmdMessage::error(e.to_string())]),
        }
    }
    Ok(())
}

fn dispatch<S: CatalogSource>(
    api: &mut ShowcaseApi<S>,
    command: ShellCommand,
) -> Result<(CmdResult, Flow)> {
    let result = match command {
        ShellCommand::List => api.list()?,
        ShellCommand::Category { name } => api.select_category(&name)?,
        ShellCommand::Search { query } => api.search(&query)?,
        ShellCommand::Clear => api.clear_filters()?,
        ShellCommand::Like { id } => api.toggle_like(parse_item_id(&id)?)?,
        ShellCommand::Liked => api.liked()?,
        ShellCommand::Cart { id } => api.add_to_cart(parse_item_id(&id)?)?,
        ShellCommand::Categories => api.categories()?,
        ShellCommand::Open { view } => api.open_view(view.parse()?)?,
        ShellCommand::Edit => api.begin_edit()?,
        ShellCommand::Set { field, value } => {
            api.set_field(parse_field(&field)?, &value)?
        }
        ShellCommand::Save => api.save_profile()?,
        ShellCommand::Cancel => api.cancel_edit()?,
        ShellCommand::Profile => api.show_profile()?,
        ShellCommand::Help => help(),
        ShellCommand::Quit => return Ok((CmdResult::default(), Flow::Quit)),
    };
    Ok((result, Flow::Continue))
}

fn help() -> CmdResult {
    let mut result = CmdResult::default();
    for sub in ShellLine::command().get_subcommands() {
        let about = sub.get_about().map(|a| a.to_string()).unwrap_or_default();
        result.add_message(CmdMessage::info(format!("{:<12}{}", sub.get_name(), about)));
    }
    result
}
