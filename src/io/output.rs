//! Output text format.
//!
//! One line per tool, tools sorted by id, placements best fit first:
//!
//! ```text
//! T0: M5(161) M11(154)
//! T1:
//! ```

use std::fmt::Write as _;
use std::io::{self, Write};

use crate::error::ParseError;
use crate::greedy::{Assignment, Placement, ToolAssignment};

/// Renders an assignment in the output text format.
pub fn format_output(assignment: &Assignment) -> String {
    let mut out = String::new();
    for entry in &assignment.tools {
        out.push_str(&entry.tool_id);
        out.push(':');
        for p in &entry.placements {
            // Writing to a String cannot fail.
            let _ = write!(out, " {}({})", p.sample_id, p.score);
        }
        out.push('\n');
    }
    out
}

/// Writes an assignment in the output text format.
pub fn write_output<W: Write>(mut writer: W, assignment: &Assignment) -> io::Result<()> {
    writer.write_all(format_output(assignment).as_bytes())?;
    writer.flush()
}

/// Reads the output text format back into per-tool placements.
///
/// ```
/// use u_assign::io::parse_output;
///
/// let tools = parse_output("T0: M5(161) M11(154)\nT1:\n").unwrap();
/// assert_eq!(tools[0].placements[1].sample_id, "M11");
/// assert!(tools[1].placements.is_empty());
/// ```
pub fn parse_output(text: &str) -> Result<Vec<ToolAssignment>, ParseError> {
    let mut tools = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        if raw.trim().is_empty() {
            continue;
        }
        let malformed = || ParseError::MalformedOutput {
            line,
            text: raw.to_string(),
        };

        let (tool_id, rest) = raw.split_once(':').ok_or_else(malformed)?;
        let tool_id = tool_id.trim();
        if tool_id.is_empty() {
            return Err(malformed());
        }

        let placements = rest
            .split_whitespace()
            .map(|token| parse_placement(line, raw, token))
            .collect::<Result<Vec<_>, _>>()?;

        tools.push(ToolAssignment {
            tool_id: tool_id.to_string(),
            placements,
        });
    }
    Ok(tools)
}

fn parse_placement(line: usize, raw: &str, token: &str) -> Result<Placement, ParseError> {
    let (sample_id, score) = token
        .strip_suffix(')')
        .and_then(|t| t.rsplit_once('('))
        .filter(|(id, _)| !id.is_empty())
        .ok_or_else(|| ParseError::MalformedOutput {
            line,
            text: raw.to_string(),
        })?;
    let score = score.parse().map_err(|source| ParseError::InvalidInteger {
        line,
        value: score.to_string(),
        source,
    })?;
    Ok(Placement {
        sample_id: sample_id.to_string(),
        score,
    })
}
