//! Well-known Data Matrix encodation codes.
//!
//! The default-encodation hint stores a plain integer; these are the codes
//! the Data Matrix encoder understands. Any other integer is stored as-is and
//! rejected (or not) by the encoder.

pub const ASCII: i32 = 0;
pub const C40: i32 = 1;
pub const TEXT: i32 = 2;
pub const X12: i32 = 3;
pub const EDIFACT: i32 = 4;
pub const BASE256: i32 = 5;

/// Returns the mode name for a known code.
pub fn name(code: i32) -> Option<&'static str> {
    match code {
        ASCII => Some("ASCII"),
        C40 => Some("C40"),
        TEXT => Some("TEXT"),
        X12 => Some("X12"),
        EDIFACT => Some("EDIFACT"),
        BASE256 => Some("BASE256"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(name(ASCII), Some("ASCII"));
        assert_eq!(name(BASE256), Some("BASE256"));
        assert_eq!(name(42), None);
    }
}
