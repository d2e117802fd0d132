//! Text input and output.
//!
//! - [`parse_input`]: tool and sample records into a validated [`Instance`]
//! - [`format_output`] / [`write_output`]: one line per tool
//! - [`parse_output`]: reads the output format back
//! - [`solve_file`]: read, assign, write in one call

mod input;
mod output;

use std::fs;
use std::path::Path;

use tracing::info;

pub use input::parse_input;
pub use output::{format_output, parse_output, write_output};

use crate::error::{Error, Result};
use crate::greedy::{AssignConfig, Assignment, GreedyAssigner};
use crate::model::Instance;

/// Reads and validates an input file.
pub fn read_instance(path: &Path) -> Result<Instance> {
    let text = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_input(&text)
}

/// Writes an assignment to a file, replacing its contents.
pub fn write_output_file(path: &Path, assignment: &Assignment) -> Result<()> {
    fs::write(path, format_output(assignment)).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads `input`, runs the greedy assigner, writes `output`.
pub fn solve_file(input: &Path, output: &Path, config: &AssignConfig) -> Result<Assignment> {
    let instance = read_instance(input)?;
    info!(
        path = %input.display(),
        tools = instance.tool_count(),
        samples = instance.sample_count(),
        "loaded instance"
    );

    let assignment = GreedyAssigner::run(&instance, config)?;
    write_output_file(output, &assignment)?;
    info!(path = %output.display(), "output written");
    Ok(assignment)
}
