//! Positional record reader.
//!
//! Each schema line reads `<label> <value...>`. The label token is discarded
//! unread and the remainder is parsed according to the declared arity; the
//! schema's positional order is the only source of truth and labels are never
//! inspected for correctness. A malformed numeric token silently parses to
//! zero, matching the contract of the producing tool.

use super::LoadError;
use crate::Point;
use std::io::BufRead;

pub struct RecordReader<R> {
    input: R,
    line: String,
}

impl<R: BufRead> RecordReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            line: String::new(),
        }
    }

    /// Reads the next raw line, failing on end of stream.
    fn next_line(&mut self) -> Result<&str, LoadError> {
        self.line.clear();
        let n = self.input.read_line(&mut self.line)?;
        if n == 0 {
            return Err(LoadError::UnexpectedEof);
        }
        Ok(self.line.trim_end())
    }

    /// Discards one line.
    pub fn skip_line(&mut self) -> Result<(), LoadError> {
        self.next_line().map(|_| ())
    }

    /// Discards the two heading lines that precede a composite section.
    pub fn skip_headings(&mut self) -> Result<(), LoadError> {
        self.skip_line()?;
        self.skip_line()
    }

    /// Reads a labeled string field.
    pub fn str_field(&mut self) -> Result<String, LoadError> {
        let line = self.next_line()?;
        Ok(line.split_whitespace().nth(1).unwrap_or("").to_string())
    }

    /// Reads a labeled real field; a malformed token yields 0.0.
    pub fn real_field(&mut self) -> Result<f64, LoadError> {
        let line = self.next_line()?;
        Ok(parse_or_zero(line.split_whitespace().nth(1)))
    }

    /// Reads a labeled integer field; a malformed token yields 0.
    pub fn int_field(&mut self) -> Result<i64, LoadError> {
        let line = self.next_line()?;
        Ok(line
            .split_whitespace()
            .nth(1)
            .and_then(|t| t.parse::<i64>().ok())
            .unwrap_or(0))
    }

    /// Reads a labeled count field; malformed or negative counts yield 0.
    pub fn count_field(&mut self) -> Result<usize, LoadError> {
        Ok(self.int_field()?.max(0) as usize)
    }

    /// Reads a labeled fixed-width vector of reals; malformed or missing
    /// tokens yield 0.0.
    pub fn real_array<const N: usize>(&mut self) -> Result<[f64; N], LoadError> {
        let line = self.next_line()?;
        let mut out = [0.0; N];
        let mut tokens = line.split_whitespace().skip(1);
        for slot in out.iter_mut() {
            *slot = parse_or_zero(tokens.next());
        }
        Ok(out)
    }

    /// Reads a labeled coordinate triple.
    pub fn point_field(&mut self) -> Result<Point, LoadError> {
        let [x, y, z] = self.real_array::<3>()?;
        Ok(Point::new(x, y, z))
    }
}

fn parse_or_zero(token: Option<&str>) -> f64 {
    token.and_then(|t| t.parse::<f64>().ok()).unwrap_or(0.0)
}
