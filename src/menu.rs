use std::io::{self, BufRead, Write};

use anyhow::Result;

use crate::duration;
use crate::error::Error;
use crate::youtube::SearchResult;

/// What the user picked from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Zero-based index into the result list.
    Play(usize),
    Quit,
}

/// Render the numbered menu, one line per result in original order.
pub fn render(results: &[SearchResult], durations: &[String]) -> String {
    let mut out = String::new();
    for (i, r) in results.iter().enumerate() {
        let token = durations.get(i).map(String::as_str).unwrap_or("PT0S");
        out.push_str(&format!(
            "{:2}) {} - {} ({})\n",
            i + 1,
            r.title,
            r.channel,
            duration::format_token(token)
        ));
    }
    out
}

/// Interpret one line of input against a menu of `len` entries. `q`/`quit`
/// quits; anything that is not an in-range number is an error, there is no
/// second chance.
pub fn parse_selection(input: &str, len: usize) -> Result<Selection, Error> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
        return Ok(Selection::Quit);
    }
    match input.parse::<usize>() {
        Ok(n) if (1..=len).contains(&n) => Ok(Selection::Play(n - 1)),
        _ => Err(Error::InvalidSelection(input.to_string())),
    }
}

/// Read the user's pick. Quiet mode takes the first entry without touching
/// stdin.
pub fn select(len: usize, quiet: bool) -> Result<Selection> {
    if quiet {
        return Ok(Selection::Play(0));
    }
    print!("Select [1-{len}, q to quit]: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(parse_selection(&line, len)?)
}
