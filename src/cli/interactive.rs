//! Interactive prompt session
//!
//! Reads a single position from the input, prints its Fibonacci number and
//! then counts from 1 to 10. The prompt and range are fixed; no file or
//! environment setting changes them. Generic over the reader and writer so
//! the whole session can be driven from memory.

use std::io::{BufRead, Write};

use crate::common::{Error, Result};
use crate::sequence::{fibonacci, DEFAULT_COUNT};

/// Prompt written before the position is read
pub const PROMPT: &str = "Enter the position of Fibonacci number: ";

/// Parse a position typed by the user
///
/// Surrounding whitespace is ignored; an optional sign and base-10 digits
/// are accepted.
pub fn parse_index(line: &str) -> Result<i64> {
    let text = line.trim();
    text.parse::<i64>().map_err(|e| Error::input_format(text, e))
}

/// Format the answer line for position `n`
pub fn answer_line(n: i64) -> String {
    let value = fibonacci(n);
    tracing::debug!(n, bits = value.bits(), "computed fibonacci number");
    format!("The {}th Fibonacci number is: {}", n, value)
}

/// Write the counting loop, one number per line
pub fn write_count<W: Write>(output: &mut W, start: i64, end: i64) -> Result<()> {
    for i in start..=end {
        writeln!(output, "{i}")?;
    }
    Ok(())
}

/// Run the full interactive session
///
/// On a parse failure nothing beyond the prompt is written.
pub fn run<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<()> {
    write!(output, "{PROMPT}")?;
    output.flush()?;

    let mut line = String::new();
    let read = input.read_line(&mut line)?;
    if read == 0 {
        tracing::debug!("end of input before a position was entered");
    }

    let n = parse_index(&line)?;
    tracing::debug!(n, "parsed position");

    writeln!(output, "{}", answer_line(n))?;
    write_count(output, *DEFAULT_COUNT.start(), *DEFAULT_COUNT.end())?;
    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(input: &str) -> (Result<()>, String) {
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut out = Vec::new();
        let result = run(&mut reader, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_index_accepts_signed_and_padded() {
        assert_eq!(parse_index("7\n").unwrap(), 7);
        assert_eq!(parse_index("  42  ").unwrap(), 42);
        assert_eq!(parse_index("-5\r\n").unwrap(), -5);
        assert_eq!(parse_index("+3").unwrap(), 3);
        assert_eq!(parse_index("007").unwrap(), 7);
    }

    #[test]
    fn test_parse_index_rejects_garbage() {
        for bad in ["abc", "", "\n", "1.5", "7 8", "99999999999999999999"] {
            let err = parse_index(bad).unwrap_err();
            assert!(matches!(err, Error::InputFormat { .. }), "input {bad:?}");
        }
    }

    #[test]
    fn test_answer_line_keeps_th_suffix() {
        assert_eq!(answer_line(1), "The 1th Fibonacci number is: 1");
        assert_eq!(answer_line(2), "The 2th Fibonacci number is: 1");
        assert_eq!(answer_line(11), "The 11th Fibonacci number is: 89");
        assert_eq!(answer_line(-5), "The -5th Fibonacci number is: 0");
    }

    #[test]
    fn test_session_with_seven() {
        let (result, out) = session("7\n");
        result.unwrap();

        let mut expected = String::from(
            "Enter the position of Fibonacci number: The 7th Fibonacci number is: 13\n",
        );
        for i in 1..=10 {
            expected.push_str(&format!("{i}\n"));
        }
        assert_eq!(out, expected);
    }

    #[test]
    fn test_session_with_invalid_input() {
        let (result, out) = session("abc\n");
        assert!(matches!(result, Err(Error::InputFormat { .. })));
        assert_eq!(out, "Enter the position of Fibonacci number: ");
    }

    #[test]
    fn test_session_with_empty_input() {
        let (result, out) = session("");
        assert!(matches!(result, Err(Error::InputFormat { .. })));
        assert!(!out.contains("Fibonacci number is"));
    }

    #[test]
    fn test_write_count_empty_range() {
        let mut out = Vec::new();
        write_count(&mut out, 3, 1).unwrap();
        assert!(out.is_empty());
    }
}
