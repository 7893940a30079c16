use regex::Regex;

/// Board addresses are one row letter A-P plus one column number 1-30,
/// matched case-insensitively. Nothing else ever reaches the submission
/// service.
const COORDINATE_PATTERN: &str = r"^(?i)[A-P]([1-9]|[12][0-9]|30)$";

/// Validates and normalizes coordinate input from the participant.
#[derive(Debug)]
pub struct CoordinateValidator {
    pattern: Regex,
}

impl CoordinateValidator {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(COORDINATE_PATTERN).expect("coordinate pattern compiles"),
        }
    }

    /// Check whether the input names a cell on the 16x30 board.
    pub fn is_valid(&self, input: &str) -> bool {
        self.pattern.is_match(input.trim())
    }

    /// Canonical form: trimmed and uppercased, e.g. "h15" -> "H15".
    pub fn normalize(&self, input: &str) -> String {
        input.trim().to_uppercase()
    }
}

impl Default for CoordinateValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_coordinates() {
        let validator = CoordinateValidator::new();

        assert!(validator.is_valid("A1"));
        assert!(validator.is_valid("A30"));
        assert!(validator.is_valid("P1"));
        assert!(validator.is_valid("P30"));
        assert!(validator.is_valid("H15"));
        assert!(validator.is_valid("B29"));
    }

    #[test]
    fn test_case_insensitive_and_whitespace() {
        let validator = CoordinateValidator::new();

        assert!(validator.is_valid("h15"));
        assert!(validator.is_valid("p30"));
        assert!(validator.is_valid("  A1  "));
        assert_eq!(validator.normalize(" h15 "), "H15");
        assert_eq!(validator.normalize("P30"), "P30");
    }

    #[test]
    fn test_invalid_coordinates() {
        let validator = CoordinateValidator::new();

        assert!(!validator.is_valid("Q1")); // row out of range
        assert!(!validator.is_valid("A31")); // column too high
        assert!(!validator.is_valid("A0")); // column too low
        assert!(!validator.is_valid("15A")); // reversed
        assert!(!validator.is_valid("A"));
        assert!(!validator.is_valid("15"));
        assert!(!validator.is_valid("A015"));
        assert!(!validator.is_valid("AA5"));
        assert!(!validator.is_valid(""));
        assert!(!validator.is_valid("z5"));
    }

    #[test]
    fn test_full_column_range() {
        let validator = CoordinateValidator::new();
        for column in 1..=30 {
            assert!(validator.is_valid(&format!("A{column}")));
        }
        assert!(!validator.is_valid("A31"));
    }
}
