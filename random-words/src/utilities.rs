use std::io::{self, Write};

pub fn prompt(prompt: &str) -> io::Result<()> {
    print!("{prompt}");
    io::stdout().flush()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    /// Show the words of the current list longer than five letters.
    Long,
    /// Show how many words the current list holds.
    Count,
    /// Show a single word (1-based) and its length.
    Word(usize),
    /// Anything else is a count to request, passed on as typed.
    Fetch(String),
    Empty,
}

pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let mut parts = line.split_ascii_whitespace();
    match parts.next() {
        None => Command::Empty,
        Some("exit" | "quit" | "q") => Command::Quit,
        Some("long") => Command::Long,
        Some("count") => Command::Count,
        Some("word") => match parts.next().map(str::parse::<usize>) {
            Some(Ok(index)) => Command::Word(index),
            _ => Command::Fetch(line.to_owned()),
        },
        Some(_) => Command::Fetch(line.to_owned()),
    }
}
