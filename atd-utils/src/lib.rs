//! Shared utility functions for ATD crates.

/// Number formatting for chart labels
pub mod numbers {
    /// Format an integer with comma thousands separators: 1234567 -> "1,234,567"
    pub fn format_thousands(value: u64) -> String {
        let digits = value.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        out
    }

    /// Format a latitude or longitude with 4 decimal places: 25.79 -> "25.7900"
    pub fn format_coordinate(value: f64) -> String {
        format!("{:.4}", value)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_format_thousands() {
            assert_eq!(format_thousands(0), "0");
            assert_eq!(format_thousands(999), "999");
            assert_eq!(format_thousands(1000), "1,000");
            assert_eq!(format_thousands(12345), "12,345");
            assert_eq!(format_thousands(1234567), "1,234,567");
            assert_eq!(format_thousands(100000), "100,000");
        }

        #[test]
        fn test_format_coordinate() {
            assert_eq!(format_coordinate(25.79), "25.7900");
            assert_eq!(format_coordinate(-80.29), "-80.2900");
            assert_eq!(format_coordinate(33.63666), "33.6367");
        }
    }
}
