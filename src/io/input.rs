//! Input text format.
//!
//! One record per line, whitespace-separated:
//!
//! ```text
//! T <tool id> S:<int> A:<int> C:<int>
//! M <sample id> S:<int> A:<int> C:<int> <tool id>><tool id>>...
//! ```
//!
//! Metric tokens may appear in any order but each metric exactly once.
//! The preference token is the only sample token without a `:`.

use crate::error::{Error, ParseError};
use crate::model::{Instance, Metric, MetricVector, Sample, Tool};

const PREFERENCE_SEPARATOR: char = '>';

enum Record {
    Tool(Tool),
    Sample(Sample),
}

/// Parses and validates a full input document.
///
/// Blank lines are skipped. Any malformed line aborts the parse.
///
/// ```
/// use u_assign::io::parse_input;
///
/// let instance = parse_input("T T1 S:1 A:2 C:3\nM M1 S:1 A:1 C:1 T1\n").unwrap();
/// assert_eq!(instance.tool_count(), 1);
/// assert_eq!(instance.samples()[0].preferences, vec!["T1"]);
/// ```
pub fn parse_input(text: &str) -> Result<Instance, Error> {
    let mut tools = Vec::new();
    let mut samples = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        match parse_record(idx + 1, raw)? {
            Some(Record::Tool(tool)) => tools.push(tool),
            Some(Record::Sample(sample)) => samples.push(sample),
            None => {}
        }
    }

    Ok(Instance::new(tools, samples)?)
}

fn parse_record(line: usize, raw: &str) -> Result<Option<Record>, ParseError> {
    let mut tokens = raw.split_whitespace();
    let Some(tag) = tokens.next() else {
        return Ok(None);
    };

    match tag {
        "T" => {
            let id = tokens.next().ok_or(ParseError::MissingId { line })?;
            let metrics = parse_metrics(line, tokens)?;
            Ok(Some(Record::Tool(Tool::new(id, metrics))))
        }
        "M" => {
            let id = tokens.next().ok_or(ParseError::MissingId { line })?;
            let mut rest = tokens.peekable();
            let mut need_tokens = Vec::new();
            while let Some(token) = rest.next_if(|t| t.contains(':')) {
                need_tokens.push(token);
            }
            let needs = parse_metrics(line, need_tokens.into_iter())?;

            let pref = rest.next().ok_or_else(|| ParseError::MissingPreferences {
                line,
                sample: id.to_string(),
            })?;
            if let Some(extra) = rest.next() {
                return Err(ParseError::TrailingToken {
                    line,
                    token: extra.to_string(),
                });
            }
            let preferences = parse_preferences(line, pref)?;
            Ok(Some(Record::Sample(Sample::new(id, needs, preferences))))
        }
        other => Err(ParseError::UnknownTag {
            line,
            tag: other.to_string(),
        }),
    }
}

fn parse_metrics<'a>(
    line: usize,
    tokens: impl Iterator<Item = &'a str>,
) -> Result<MetricVector, ParseError> {
    let mut vector = MetricVector::default();
    let mut seen = [false; Metric::ALL.len()];

    for token in tokens {
        let (name, value) = token
            .split_once(':')
            .ok_or_else(|| ParseError::MalformedMetric {
                line,
                token: token.to_string(),
            })?;
        let metric = Metric::from_symbol(name).ok_or_else(|| ParseError::UnknownMetric {
            line,
            name: name.to_string(),
        })?;
        if std::mem::replace(&mut seen[metric as usize], true) {
            return Err(ParseError::DuplicateMetric { line, metric });
        }
        vector[metric] = value
            .parse()
            .map_err(|source| ParseError::InvalidInteger {
                line,
                value: value.to_string(),
                source,
            })?;
    }

    if let Some(metric) = Metric::ALL.into_iter().find(|&m| !seen[m as usize]) {
        return Err(ParseError::MissingMetric { line, metric });
    }
    Ok(vector)
}

fn parse_preferences(line: usize, token: &str) -> Result<Vec<String>, ParseError> {
    token
        .split(PREFERENCE_SEPARATOR)
        .map(|id| {
            if id.is_empty() {
                Err(ParseError::EmptyPreference {
                    line,
                    token: token.to_string(),
                })
            } else {
                Ok(id.to_string())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InstanceError;

    fn parse_err(text: &str) -> ParseError {
        match parse_input(text) {
            Err(Error::Parse(e)) => e,
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_tools_and_samples() {
        let text = "T T1 S:1 A:2 C:3\nT T2 C:1 A:2 S:3\n\nM M1 S:1 A:1 C:1 T2>T1\n";
        let instance = parse_input(text).unwrap();

        assert_eq!(instance.tool_count(), 2);
        assert_eq!(instance.tools()[1].metrics, MetricVector::new(3, 2, 1));
        let m1 = &instance.samples()[0];
        assert_eq!(m1.needs, MetricVector::new(1, 1, 1));
        assert_eq!(m1.preferences, vec!["T2", "T1"]);
    }

    #[test]
    fn test_negative_values_accepted() {
        let instance = parse_input("T T1 S:-1 A:0 C:2\nM M1 S:1 A:-4 C:1 T1\n").unwrap();
        assert_eq!(instance.tools()[0].metrics.speed, -1);
        assert_eq!(instance.samples()[0].needs.accuracy, -4);
    }

    #[test]
    fn test_unknown_tag() {
        let err = parse_err("X T1 S:1 A:1 C:1\n");
        assert!(matches!(err, ParseError::UnknownTag { line: 1, ref tag } if tag == "X"));
    }

    #[test]
    fn test_missing_id() {
        assert!(matches!(parse_err("T\n"), ParseError::MissingId { line: 1 }));
    }

    #[test]
    fn test_missing_separator() {
        let err = parse_err("T T1 S1 A:1 C:1\n");
        assert!(matches!(err, ParseError::MalformedMetric { .. }));
    }

    #[test]
    fn test_unknown_metric() {
        let err = parse_err("T T1 S:1 A:1 X:1\n");
        assert!(matches!(err, ParseError::UnknownMetric { ref name, .. } if name == "X"));
    }

    #[test]
    fn test_bad_integer() {
        let err = parse_err("T T1 S:1 A:one C:1\n");
        assert!(matches!(err, ParseError::InvalidInteger { ref value, .. } if value == "one"));
    }

    #[test]
    fn test_duplicate_and_missing_metric() {
        let dup = parse_err("T T1 S:1 S:2 C:1\n");
        assert!(matches!(
            dup,
            ParseError::DuplicateMetric {
                metric: Metric::Speed,
                ..
            }
        ));

        let missing = parse_err("T T1 S:1 C:1\n");
        assert!(matches!(
            missing,
            ParseError::MissingMetric {
                metric: Metric::Accuracy,
                ..
            }
        ));
    }

    #[test]
    fn test_sample_without_preferences() {
        let err = parse_err("T T1 S:1 A:1 C:1\nM M1 S:1 A:1 C:1\n");
        assert!(matches!(err, ParseError::MissingPreferences { line: 2, .. }));
    }

    #[test]
    fn test_trailing_token() {
        let err = parse_err("T T1 S:1 A:1 C:1\nM M1 S:1 A:1 C:1 T1 T1\n");
        assert!(matches!(err, ParseError::TrailingToken { line: 2, .. }));
    }

    #[test]
    fn test_empty_preference_segment() {
        let err = parse_err("T T1 S:1 A:1 C:1\nM M1 S:1 A:1 C:1 T1>\n");
        assert!(matches!(err, ParseError::EmptyPreference { .. }));
    }

    #[test]
    fn test_unknown_tool_fails_validation() {
        let result = parse_input("T T1 S:1 A:1 C:1\nM M1 S:1 A:1 C:1 T1>T7\n");
        assert!(matches!(
            result,
            Err(Error::Instance(InstanceError::UnknownTool { .. }))
        ));
    }

    #[test]
    fn test_overflowing_score_fails_validation() {
        let result = parse_input("T T1 S:9223372036854775807 A:1 C:1\nM M1 S:2 A:1 C:1 T1\n");
        assert!(matches!(
            result,
            Err(Error::Instance(InstanceError::ScoreOverflow { ref tool, ref sample }))
                if tool == "T1" && sample == "M1"
        ));
    }

    #[test]
    fn test_extreme_values_that_fit_are_accepted() {
        let instance =
            parse_input("T T1 S:9223372036854775807 A:0 C:0\nM M1 S:1 A:5 C:-5 T1\n").unwrap();
        assert_eq!(instance.tools()[0].metrics.speed, i64::MAX);
    }

    #[test]
    fn test_empty_document() {
        let instance = parse_input("\n\n").unwrap();
        assert!(instance.is_empty());
        assert_eq!(instance.tool_count(), 0);
    }
}
