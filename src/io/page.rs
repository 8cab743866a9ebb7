//! Self-contained HTML page around a rendered figure.
//!
//! The page mirrors a wide dashboard layout: a side panel with the three
//! configurations (the active one highlighted, the others linked to their own
//! pages), a centered heading, the figure in the middle of a 1:3:1 column
//! split, and a small gray footer caption.

use std::io::{self, Write};

use crate::presets::Configuration;

/// Heading shown above the figure.
pub const PAGE_HEADING: &str = "Electric field - Parallel-plate capacitor";
/// Title of the side panel.
pub const SIDEBAR_HEADER: &str = "Configuration";
/// Prompt above the configuration list.
pub const SIDEBAR_PROMPT: &str = "Choose a configuration";
/// Footer caption shown under every figure.
pub const PAGE_CAPTION: &str = "© Domenico Sapone, Camila Montecinos";

const STYLE: &str = "\
body { margin: 0; font-family: sans-serif; display: flex; min-height: 100vh; }
nav { width: 16rem; padding: 1.5rem; background: #f0f2f6; box-sizing: border-box; }
nav h2 { margin-top: 0; font-size: 1.2rem; }
nav ul { list-style: none; padding: 0; }
nav li { margin: 0.4rem 0; }
nav a { color: inherit; text-decoration: none; }
nav li.active { font-weight: bold; }
nav li.active::before { content: \"\\25C9  \"; }
nav li:not(.active)::before { content: \"\\25CB  \"; }
main { flex: 1; padding: 1rem 2rem; }
.heading { text-align: center; font-size: 30px; font-weight: bold; }
.columns { display: grid; grid-template-columns: 1fr 3fr 1fr; }
.figure { grid-column: 2; text-align: center; }
.caption { text-align: center; color: gray; font-size: 12px; }
";

/// File name of the page rendered for `configuration`.
#[must_use]
pub fn page_file_name(configuration: Configuration) -> String {
    format!("configuration-{}.html", configuration.slug())
}

/// Writes the complete HTML page for `active`, inlining `figure_svg`.
pub fn write_page<W: Write>(mut writer: W, active: Configuration, figure_svg: &str) -> io::Result<()> {
    writeln!(writer, "<!DOCTYPE html>")?;
    writeln!(writer, "<html lang=\"en\">")?;
    writeln!(writer, "<head>")?;
    writeln!(writer, "<meta charset=\"utf-8\">")?;
    writeln!(writer, "<title>Electric field: parallel plates</title>")?;
    writeln!(writer, "<style>\n{STYLE}</style>")?;
    writeln!(writer, "</head>")?;
    writeln!(writer, "<body>")?;

    writeln!(writer, "<nav>")?;
    writeln!(writer, "<h2>{SIDEBAR_HEADER}</h2>")?;
    writeln!(writer, "<p>{SIDEBAR_PROMPT}</p>")?;
    writeln!(writer, "<ul>")?;
    for configuration in Configuration::ALL {
        if configuration == active {
            writeln!(writer, "<li class=\"active\">{configuration}</li>")?;
        } else {
            writeln!(
                writer,
                "<li><a href=\"{}\">{configuration}</a></li>",
                page_file_name(configuration)
            )?;
        }
    }
    writeln!(writer, "</ul>")?;
    writeln!(writer, "</nav>")?;

    writeln!(writer, "<main>")?;
    writeln!(writer, "<div class=\"heading\">{PAGE_HEADING}</div>")?;
    writeln!(writer, "<div class=\"columns\">")?;
    writeln!(writer, "<div class=\"figure\">")?;
    writeln!(writer, "{figure_svg}")?;
    writeln!(writer, "</div>")?;
    writeln!(writer, "</div>")?;
    writeln!(writer, "<div class=\"caption\">{PAGE_CAPTION}</div>")?;
    writeln!(writer, "</main>")?;

    writeln!(writer, "</body>")?;
    writeln!(writer, "</html>")?;
    Ok(())
}
