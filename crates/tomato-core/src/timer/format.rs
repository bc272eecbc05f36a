//! Remaining-time formatting.

/// Format a millisecond count as clock time.
///
/// Floors to whole seconds (never rounds), zero-pads minutes and seconds to
/// two digits, and prepends an unpadded hour figure only when nonzero:
/// `00:42`, `25:00`, `1:01:01`.
pub fn format_ms(ms: u64) -> String {
    let total_secs = ms / 1000;
    let seconds = total_secs % 60;
    let minutes = (total_secs / 60) % 60;
    let hours = total_secs / 3600;

    if hours != 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes:02}:{seconds:02}")
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn zero_is_padded() {
        assert_eq!(format_ms(0), "00:00");
    }

    #[test]
    fn hours_are_unpadded() {
        assert_eq!(format_ms(3_661_000), "1:01:01");
    }

    #[test]
    fn default_work_shift() {
        assert_eq!(format_ms(25 * 60_000), "25:00");
    }

    #[test]
    fn floors_partial_seconds() {
        assert_eq!(format_ms(999), "00:00");
        assert_eq!(format_ms(1_001), "00:01");
        assert_eq!(format_ms(59_999), "00:59");
    }

    #[test]
    fn hour_boundary() {
        assert_eq!(format_ms(3_599_000), "59:59");
        assert_eq!(format_ms(3_600_000), "1:00:00");
    }

    proptest! {
        /// Re-parsing the formatted string reconstructs floor(ms / 1000).
        #[test]
        fn round_trips_to_whole_seconds(ms in 0u64..=1_000_000_000_000) {
            let formatted = format_ms(ms);
            let secs = formatted
                .split(':')
                .map(|part| part.parse::<u64>().unwrap())
                .fold(0u64, |acc, part| acc * 60 + part);
            prop_assert_eq!(secs, ms / 1000);
        }

        /// Minutes and seconds fields are always two digits.
        #[test]
        fn tail_fields_are_zero_padded(ms in 0u64..=1_000_000_000_000) {
            let formatted = format_ms(ms);
            let parts: Vec<&str> = formatted.split(':').collect();
            prop_assert!(parts.len() == 2 || parts.len() == 3);
            for part in &parts[parts.len() - 2..] {
                prop_assert_eq!(part.len(), 2);
            }
        }
    }
}
