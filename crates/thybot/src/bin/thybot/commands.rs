//! Parsing of the lines typed into the shell.
use std::path::PathBuf;

use thybot::types::style::ResponseStyle;

pub const HELP: &str = "\
Type a question to chat about thyroid health. Commands:
  /profile                 create or edit the patient profile
  /show                    show the saved profile
  /style concise|detailed  set the response style
  /clear                   clear the general chat history
  /upload <path>           load a PDF, DOCX or TXT document
  /ask <question>          ask about the loaded document
  /end                     end the document chat
  /meal add <dish>         add a dish to the meal
  /meal remove <n>         remove the n-th dish
  /meal list               list the planned dishes
  /meal clear              remove every dish
  /meal dishes [filter]    browse the nutrition table
  /meal analyze            analyse the meal for the profile
  /help                    show this help
  /quit                    leave ThyBot";

#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    Chat(String),
    Profile,
    Show,
    Style(ResponseStyle),
    Clear,
    Upload(PathBuf),
    Ask(String),
    End,
    MealAdd(String),
    /// 1-based position as shown by `/meal list`.
    MealRemove(usize),
    MealList,
    MealClear,
    MealDishes(Option<String>),
    MealAnalyze,
    Help,
    Quit,
    Empty,
}

impl ShellCommand {
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Self::Empty);
        }
        let Some(command) = line.strip_prefix('/') else {
            return Ok(Self::Chat(line.to_owned()));
        };

        let (name, rest) = split_word(command);
        match name {
            "profile" => Ok(Self::Profile),
            "show" => Ok(Self::Show),
            "style" => rest
                .parse::<ResponseStyle>()
                .map(Self::Style)
                .map_err(|_| "usage: /style concise|detailed".to_owned()),
            "clear" => Ok(Self::Clear),
            "upload" => required(rest, "usage: /upload <path>").map(|p| Self::Upload(p.into())),
            "ask" => required(rest, "usage: /ask <question>").map(|q| Self::Ask(q.to_owned())),
            "end" => Ok(Self::End),
            "meal" => parse_meal(rest),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(format!("unknown command `/{other}`, try /help")),
        }
    }
}

fn parse_meal(args: &str) -> Result<ShellCommand, String> {
    let (action, rest) = split_word(args);
    match action {
        "add" => required(rest, "usage: /meal add <dish>").map(|d| ShellCommand::MealAdd(d.to_owned())),
        "remove" | "rm" => rest
            .parse::<usize>()
            .ok()
            .filter(|n| *n > 0)
            .map(ShellCommand::MealRemove)
            .ok_or_else(|| "usage: /meal remove <n> (n starts at 1)".to_owned()),
        "list" | "" => Ok(ShellCommand::MealList),
        "clear" => Ok(ShellCommand::MealClear),
        "dishes" => Ok(ShellCommand::MealDishes(
            Some(rest.to_owned()).filter(|f| !f.is_empty()),
        )),
        "analyze" | "analyse" => Ok(ShellCommand::MealAnalyze),
        other => Err(format!("unknown meal action `{other}`, try /help")),
    }
}

fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim();
    match s.split_once(char::is_whitespace) {
        Some((head, tail)) => (head, tail.trim()),
        None => (s, ""),
    }
}

fn required<'a>(value: &'a str, usage: &str) -> Result<&'a str, String> {
    if value.is_empty() {
        Err(usage.to_owned())
    } else {
        Ok(value)
    }
}
