use std::{fmt, io};

pub struct REPL {}

impl REPL {
    /// Reads one trimmed line from stdin, `None` once input is exhausted.
    pub fn read_line(&self) -> Result<Option<String>, io::Error> {
        let mut buffer = String::new();
        let stdin = std::io::stdin();
        if stdin.read_line(&mut buffer)? == 0 {
            return Ok(None);
        }
        let buffer = buffer.trim().to_string();
        Ok(Some(buffer))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAddressError(pub String);

impl fmt::Display for ParseAddressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a valid logical address", self.0)
    }
}

impl std::error::Error for ParseAddressError {}

/// Parses whitespace or comma separated non-negative addresses.
pub fn parse_addresses(input: &str) -> Result<Vec<usize>, ParseAddressError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<usize>()
                .map_err(|_| ParseAddressError(token.to_string()))
        })
        .collect()
}
