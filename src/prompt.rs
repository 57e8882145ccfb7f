use console::style;
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Skip,
    /// 1-based number of the chosen suggestion, as typed by the operator.
    Choice(usize),
}

/// Asks the operator which suggestion should replace a misspelled word.
pub trait Prompter {
    fn select(&mut self, word: &str, suggestions: &[String]) -> Selection;
}

/// Line-oriented prompt on a terminal or any reader/writer pair.
pub struct ConsolePrompter<R, W> {
    input: R,
    output: W,
}

impl ConsolePrompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        ConsolePrompter::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsolePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        ConsolePrompter { input, output }
    }

    fn ask(&mut self, word: &str, suggestions: &[String]) -> io::Result<Selection> {
        write!(self.output, "\nIncorrect word \"{}\". ", style(word).red().bold())?;
        if suggestions.is_empty() {
            writeln!(self.output, "No suggestions.")?;
            return Ok(Selection::Skip);
        }

        writeln!(self.output, "Please select the suggestion:")?;
        writeln!(self.output, "0/Enter: Skip word.")?;
        for (i, suggestion) in suggestions.iter().enumerate() {
            writeln!(self.output, "{}: {}", i + 1, suggestion)?;
        }
        write!(self.output, "> ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(Selection::Skip); // EOF
        }
        Ok(parse_selection(&line))
    }
}

impl<R: BufRead, W: Write> Prompter for ConsolePrompter<R, W> {
    fn select(&mut self, word: &str, suggestions: &[String]) -> Selection {
        self.ask(word, suggestions).unwrap_or_else(|e| {
            log::warn!("Could not read a selection for \"{}\": {}", word, e);
            Selection::Skip
        })
    }
}

/// Blank, zero and anything that is not a non-negative integer mean skip.
pub fn parse_selection(line: &str) -> Selection {
    match line.trim().parse::<usize>() {
        Ok(0) | Err(_) => Selection::Skip,
        Ok(n) => Selection::Choice(n),
    }
}
