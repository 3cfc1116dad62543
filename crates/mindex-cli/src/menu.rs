use crate::params::IndexParams;
use crate::prompt;
use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use mindex_config::Settings;
use mindex_engine::render_document;
use mindex_engine::typeset::{DocumentViewer, Typesetter};
use std::io;

/// Interactive tweak-and-rerender loop.
///
/// Shows the current layout knobs, applies one change per pass, and reruns
/// the typesetter after every pass. `0` returns to the caller.
pub fn tweak_loop(
    params: &mut IndexParams,
    content: &str,
    settings: &Settings,
    typesetter: &impl Typesetter,
    viewer: &impl DocumentViewer,
) -> Result<()> {
    loop {
        clear_screen()?;
        println!("Mindex Tweaks Menu");
        println!("Num\tOption\t\t\tCurrent Value");
        println!("---------------------------------------------");
        println!("(1)\tTextblock Width\t\t{:.2} in", params.width);
        println!("(2)\tTextblock Height\t{:.2} in", params.height);
        println!("(3)\tNumber of Columns\t{}", params.cols);
        println!("(4)\tTitle\t\t\t{}", params.title);
        println!("(5)\tFooter\t\t\t{}", params.closing);
        println!("(6)\tGutter Width\t\t{}", params.gutter);
        println!("(7)\tIndent Width\t\t{}", params.indent);
        println!("(0)\tQuit Mindex");

        let choice = prompt::line(">>> ")?;
        match choice.as_str() {
            "0" => return Ok(()),
            "1" => {
                params.width =
                    prompt::page_dimension("X", settings.paper_width, settings.min_margin)?;
                params.recompute_margins(settings);
            }
            "2" => {
                params.height =
                    prompt::page_dimension("Y", settings.paper_height, settings.min_margin)?;
                params.recompute_margins(settings);
            }
            "3" => match prompt::line("New number of columns: ")?.parse::<u32>() {
                Ok(cols) => params.cols = cols,
                Err(_) => {
                    println!("Number of columns must be an integer.");
                    prompt::pause()?;
                }
            },
            "4" => params.title = prompt::line("New title: ")?,
            "5" => params.closing = prompt::line("New footer: ")?,
            "6" => params.gutter = prompt::line("New gutter width (include unit): ")?,
            "7" => params.indent = prompt::line("New indent width (include unit): ")?,
            _ => {}
        }

        println!("Rerunning LaTeX...");
        let source = render_document(&params.document_params(content));
        crate::render_and_open(typesetter, viewer, &source)?;
    }
}

fn clear_screen() -> io::Result<()> {
    // the display can end up off by a line without a fresh newline first
    println!();
    execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))
}
