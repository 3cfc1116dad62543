use crate::params::IndexParams;
use mindex_config::Settings;
use mindex_engine::layout::{self, LayoutError};
use std::io::{self, Write};

/// Prints `message` and reads one trimmed line from stdin.
pub fn line(message: &str) -> io::Result<String> {
    print!("{message}");
    io::stdout().flush()?;

    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
    }
    Ok(buf.trim().to_string())
}

pub fn pause() -> io::Result<()> {
    line("(press Enter to continue) ")?;
    Ok(())
}

/// Anything starting with `y` or `Y` counts as yes.
pub fn yes_no(message: &str) -> io::Result<bool> {
    let answer = line(message)?;
    Ok(answer.to_lowercase().starts_with('y'))
}

/// Asks for one page dimension until the reply passes layout validation.
pub fn page_dimension(axis: &str, paper_max: f64, min_margin: f64) -> io::Result<f64> {
    loop {
        let reply = line(&format!(
            "{axis} dimension of the finished index (inches): "
        ))?;

        let value: f64 = match reply.parse() {
            Ok(value) => value,
            Err(_) => {
                println!("Please enter a number (decimals are okay).");
                continue;
            }
        };

        match layout::check_dimension(value, paper_max, min_margin) {
            Ok(value) => return Ok(value),
            Err(LayoutError::ExceedsPaper { paper, .. }) => {
                println!("I can't print an index larger than the paper ({paper:.1} inches)!");
            }
            Err(LayoutError::NotPositive(_)) => {
                println!(
                    "Think you're being smart, huh? \
                     These are supposed to be *positive* numbers."
                );
            }
            Err(LayoutError::MarginTooSmall { .. }) => {
                println!(
                    "Please provide at least half an inch of margin to \
                     ensure the printer prints all of the page."
                );
            }
        }
    }
}

/// Gathers the title and page dimensions needed before the first render.
pub fn basic_params(settings: &Settings) -> io::Result<IndexParams> {
    println!("I just need a few parameters before we get started.");

    let title = line("Title of this index: ")?;
    let width = page_dimension("X", settings.paper_width, settings.min_margin)?;
    let height = page_dimension("Y", settings.paper_height, settings.min_margin)?;

    Ok(IndexParams::new(title, width, height, settings))
}
