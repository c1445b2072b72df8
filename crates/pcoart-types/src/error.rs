/// Address parsing error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    InvalidLength(usize),
    InvalidHex,
}

impl std::fmt::Display for AddressError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLength(len) => write!(f, "expected 40 hex characters, got {len}"),
            Self::InvalidHex => write!(f, "invalid hex character in address"),
        }
    }
}

impl std::error::Error for AddressError {}

/// Native-amount parsing error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    Empty,
    InvalidCharacter,
    TooManyDecimals(usize),
    Overflow,
}

impl std::fmt::Display for AmountError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty amount"),
            Self::InvalidCharacter => write!(f, "amount must be a non-negative decimal number"),
            Self::TooManyDecimals(n) => {
                write!(f, "amount has {n} decimal places, maximum is 18")
            }
            Self::Overflow => write!(f, "amount does not fit in 256 bits"),
        }
    }
}

impl std::error::Error for AmountError {}
