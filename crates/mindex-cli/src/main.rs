use anyhow::Result;
use log::debug;
use mindex_config::Settings;
use mindex_engine::typeset::{DocumentViewer, TypesetError, Typesetter};
use mindex_engine::{RejectedLine, format_index, io, parse_entries, render_document, sort_entries};
use std::{env, path::PathBuf, process};

mod latex;
mod menu;
mod params;
mod prompt;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} FILENAME", args[0]);
        process::exit(1);
    }

    let entry_file = PathBuf::from(&args[1]);
    if !entry_file.is_file() {
        eprintln!("Usage: {} FILENAME", args[0]);
        eprintln!("(The file you specified does not exist.)");
        process::exit(2);
    }

    let settings = match Settings::load() {
        Ok(Some(settings)) => settings,
        Ok(None) => Settings::default(),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    splash();
    let mut params = prompt::basic_params(&settings)?;
    debug!("layout parameters: {params:?}");

    let raw = io::read_entry_file(&entry_file)?;
    let mut outcome = parse_entries(&raw);
    debug!(
        "parsed {} entries, rejected {} lines",
        outcome.entries.len(),
        outcome.rejected.len()
    );
    report_rejected(&outcome.rejected)?;

    sort_entries(&mut outcome.entries);
    let content = format_index(&outcome.entries);

    let typesetter = latex::PdfLatex::new(settings.tex_command.clone())?;
    let viewer = latex::PlatformViewer;

    let source = render_document(&params.document_params(&content));
    render_and_open(&typesetter, &viewer, &source)?;

    if prompt::yes_no("Would you like to tweak the output (y/n)? ")? {
        menu::tweak_loop(&mut params, &content, &settings, &typesetter, &viewer)?;
    }

    Ok(())
}

fn splash() {
    println!(
        "Mindex {} - the automatic miniature index printer",
        env!("CARGO_PKG_VERSION")
    );
    println!("Copyright Mindex contributors. See LICENSE for details.");
    println!();
}

/// Prints the post-parse diagnostics block when any lines were rejected.
fn report_rejected(rejected: &[RejectedLine]) -> std::io::Result<()> {
    if rejected.is_empty() {
        return Ok(());
    }

    println!();
    println!("The following lines are invalid and were ignored:");
    println!("----- BEGIN MINDEX FILE ERRORS -----");
    for line in rejected {
        println!("line {}: {:?}", line.line_number, line.fields);
    }
    println!("----- END MINDEX FILE ERRORS -----");
    prompt::pause()
}

/// Runs the typesetter and, on success, hands the document to the viewer.
///
/// Tool failures are reported and the session continues; the user can adjust
/// and retry from the tweaks menu.
pub(crate) fn render_and_open(
    typesetter: &impl Typesetter,
    viewer: &impl DocumentViewer,
    source: &str,
) -> Result<()> {
    match typesetter.render_document(source) {
        Ok(document) => {
            if let Err(e) = viewer.open_document(&document) {
                println!("Unable to automatically open the output ({e}).");
                println!("Please browse manually to {}.", document.display());
            }
        }
        Err(TypesetError::Failed { output, .. }) => {
            println!("An error occurred while compiling your index.");
            if prompt::yes_no("Would you like to see the TeX output (y/n)? ")? {
                println!("----- BEGIN pdfLaTeX OUTPUT -----");
                println!("{output}");
                println!("----- END pdfLaTeX OUTPUT -----");
                prompt::pause()?;
            }
        }
        Err(e) => {
            println!("An error occurred while compiling your index: {e}");
            prompt::pause()?;
        }
    }
    Ok(())
}
