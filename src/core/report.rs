use crate::core::pesel::validate;
use crate::domain::model::ValidationResult;
use crate::utils::error::{Result, ToolError};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// One validated number as printed by the `pesel` command.
#[derive(Debug, Serialize)]
pub struct PeselLine<'a> {
    pub pesel: &'a str,
    #[serde(flatten)]
    pub result: ValidationResult,
}

impl<'a> PeselLine<'a> {
    pub fn new(pesel: &'a str) -> Self {
        Self {
            pesel,
            result: validate(pesel),
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string(self)?),
            OutputFormat::Text => Ok(match self.result.into_result() {
                Ok(details) => format!(
                    "{}: valid, born {}, {}",
                    self.pesel, details.birth_date, details.gender
                ),
                Err(error) => format!("{}: invalid ({})", self.pesel, error),
            }),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub invalid: usize,
}

impl BatchSummary {
    /// 0 when every number was valid, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.invalid > 0 {
            1
        } else {
            0
        }
    }
}

/// Splits piped input into codes, one per line. Empty lines are skipped;
/// other lines are kept as-is so stray whitespace is reported as a format error.
pub fn code_lines(input: &str) -> Vec<String> {
    input
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Validates every code and writes one rendered line per code to `out`.
pub fn validate_batch<W: Write>(
    codes: &[String],
    format: OutputFormat,
    out: &mut W,
) -> Result<BatchSummary> {
    if codes.is_empty() {
        return Err(ToolError::EmptyInputError {
            message: "No PESEL numbers to validate".to_string(),
        });
    }

    let mut summary = BatchSummary::default();
    for code in codes {
        let line = PeselLine::new(code);
        summary.total += 1;
        if !line.result.valid() {
            summary.invalid += 1;
        }
        writeln!(out, "{}", line.render(format)?)?;
    }

    tracing::info!(
        "Validated {} PESEL numbers, {} invalid",
        summary.total,
        summary.invalid
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(codes: &[&str], format: OutputFormat) -> (BatchSummary, String) {
        let codes: Vec<String> = codes.iter().map(|c| c.to_string()).collect();
        let mut out = Vec::new();
        let summary = validate_batch(&codes, format, &mut out).unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_text_lines() {
        let (summary, output) = run(&["44051401458", "44051401459", "123"], OutputFormat::Text);

        assert_eq!(
            output,
            "44051401458: valid, born 1944-05-14, Male\n\
             44051401459: invalid (Invalid checksum)\n\
             123: invalid (Invalid PESEL format)\n"
        );
        assert_eq!(summary, BatchSummary { total: 3, invalid: 2 });
        assert_eq!(summary.exit_code(), 1);
    }

    #[test]
    fn test_json_line_flattens_result() {
        let (summary, output) = run(&["44051401458", "99999999999"], OutputFormat::Json);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(
            lines[0],
            r#"{"pesel":"44051401458","valid":true,"birth_date":"1944-05-14","gender":"Male","error":null}"#
        );
        assert_eq!(
            lines[1],
            r#"{"pesel":"99999999999","valid":false,"birth_date":null,"gender":null,"error":"Invalid birth date"}"#
        );
        assert_eq!(summary.invalid, 1);
    }

    #[test]
    fn test_all_valid_exits_zero() {
        let (summary, _) = run(&["44051401458", "02070803628"], OutputFormat::Text);
        assert_eq!(summary.exit_code(), 0);
    }

    #[test]
    fn test_empty_batch_is_an_input_error() {
        let mut out = Vec::new();
        let err = validate_batch(&[], OutputFormat::Text, &mut out).unwrap_err();

        assert!(matches!(err, ToolError::EmptyInputError { .. }));
        assert_eq!(err.exit_code(), 2);
        assert!(out.is_empty());
    }

    #[test]
    fn test_code_lines_skip_empty_lines() {
        let codes = code_lines("44051401458\r\n\n 02070803628\n\n");
        assert_eq!(codes, vec!["44051401458", " 02070803628"]);
        assert!(code_lines("").is_empty());
    }
}
