use std::io::{BufRead, Write};

/// Writes `message` without a newline and reads one line back.
/// Returns `None` once input is exhausted.
pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> std::io::Result<Option<String>> {
    write!(output, "{}", message)?;
    output.flush()?;
    read_line(input)
}

pub fn read_line<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed_len);
    Ok(Some(line))
}

/// True when `input`, ignoring surrounding whitespace and case, is `token`.
pub fn is_sentinel(input: &str, token: &str) -> bool {
    input.trim().to_lowercase() == token
}

/// Whole numbers keep one decimal place (`95.0`); everything else uses the
/// shortest representation that round-trips.
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

pub fn format_average(average: Option<f64>) -> String {
    average.map(format_number).unwrap_or_else(|| "N/A".to_string())
}
