//! I/O helpers for exporting figures and pages.

pub mod page;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;

use crate::errors::Result;
use crate::presets::Configuration;

pub use page::*;

/// Writes a standalone SVG figure to `path`.
pub fn write_svg_file(path: &Path, figure_svg: &str) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(figure_svg.as_bytes())?;
    writer.flush()?;
    info!("wrote figure to {}", path.display());
    Ok(())
}

/// Writes the HTML page for `active` to `path`.
pub fn write_page_file(path: &Path, active: Configuration, figure_svg: &str) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_page(&mut writer, active, figure_svg)?;
    writer.flush()?;
    info!("wrote {} page to {}", active, path.display());
    Ok(())
}
