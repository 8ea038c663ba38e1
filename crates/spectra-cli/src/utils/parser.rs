use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid window '{0}'. Expected 'start:stop:step' (e.g., '16500:17500:1').")]
    InvalidWindowFormat(String),

    #[error("Invalid number '{value}' in '{input}'.")]
    InvalidNumber { input: String, value: String },

    #[error("Invalid size list '{0}'. Expected 'A..B', 'A..=B' or 'A,B,C' (e.g., '2..=20').")]
    InvalidSizesFormat(String),

    #[error("Size range '{0}' is empty.")]
    EmptyRange(String),

    #[error("Empty value list. Expected comma-separated numbers (e.g., '17000,17050').")]
    EmptyList,
}

/// Parses a frequency window written as `start:stop:step`.
pub fn parse_window(input: &str) -> Result<(f64, f64, f64), ParseError> {
    let parts: Vec<&str> = input.split(':').map(str::trim).collect();
    let [start, stop, step] = parts.as_slice() else {
        return Err(ParseError::InvalidWindowFormat(input.to_string()));
    };
    let number = |value: &str| {
        value.parse::<f64>().map_err(|_| ParseError::InvalidNumber {
            input: input.to_string(),
            value: value.to_string(),
        })
    };
    Ok((number(*start)?, number(*stop)?, number(*step)?))
}

/// Parses a comma-separated list of per-site values, e.g. `17000, 17050.5`.
pub fn parse_values(input: &str) -> Result<Vec<f64>, ParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseError::EmptyList);
    }
    let number = |value: &str| {
        value.trim().parse::<f64>().map_err(|_| ParseError::InvalidNumber {
            input: input.to_string(),
            value: value.trim().to_string(),
        })
    };
    input.split(',').map(number).collect()
}

/// Parses chain lengths: `A..B` (exclusive), `A..=B` (inclusive) or `A,B,C`.
pub fn parse_sizes(input: &str) -> Result<Vec<usize>, ParseError> {
    let input = input.trim();
    let number = |value: &str| {
        value.trim().parse::<usize>().map_err(|_| ParseError::InvalidNumber {
            input: input.to_string(),
            value: value.trim().to_string(),
        })
    };

    let sizes: Vec<usize> = if let Some((lo, hi)) = input.split_once("..=") {
        (number(lo)?..=number(hi)?).collect()
    } else if let Some((lo, hi)) = input.split_once("..") {
        (number(lo)?..number(hi)?).collect()
    } else if input.is_empty() {
        return Err(ParseError::InvalidSizesFormat(input.to_string()));
    } else {
        input.split(',').map(number).collect::<Result<_, _>>()?
    };

    if sizes.is_empty() {
        return Err(ParseError::EmptyRange(input.to_string()));
    }
    Ok(sizes)
}
