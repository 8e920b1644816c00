//! Property tests for peak parsing and rendering

use msp2mgf::mgf::format_value;
use msp2mgf::msp::{parse_entry, parse_peak_line};
use msp2mgf::MspToMgfConverter;
use proptest::prelude::*;

proptest! {
    /// Rendered peak values parse back to the same float
    #[test]
    fn test_rendered_values_round_trip(value in any::<f64>().prop_filter("finite", |v| v.is_finite())) {
        let text = format_value(value);
        let parsed: f64 = text.parse().unwrap();
        prop_assert_eq!(parsed.to_bits(), value.to_bits());
    }

    /// Integral values always carry a decimal point or an exponent
    #[test]
    fn test_integral_values_look_like_floats(value in -1_000_000i64..1_000_000) {
        let text = format_value(value as f64);
        prop_assert!(text.ends_with(".0"));
    }

    /// Valid peak lines survive parsing exactly
    #[test]
    fn test_peak_line_parses(
        mz in 0.0f64..5000.0,
        intensity in 0.0f64..1e9,
        sep in "[ \t]{1,4}",
    ) {
        let line = format!("{}{}{}", mz, sep, intensity);
        let peak = parse_peak_line(&line).unwrap();
        prop_assert_eq!(peak.mz, mz);
        prop_assert_eq!(peak.intensity, intensity);
    }

    /// The number of emitted peak lines equals the number of valid peak lines
    #[test]
    fn test_peak_line_count(
        lines in prop::collection::vec(
            prop_oneof![
                (0.0f64..2000.0, 0.0f64..1e6).prop_map(|(a, b)| (format!("{} {}", a, b), true)),
                "[g-m]{1,8}( [g-m]{1,8}){0,2}".prop_map(|s| (s, false)),
                (0.0f64..2000.0).prop_map(|a| (format!("{}", a), false)),
                (0.0f64..2000.0, 0.0f64..1e6, 0.0f64..1.0)
                    .prop_map(|(a, b, c)| (format!("{} {} {}", a, b, c), false)),
            ],
            0..40,
        )
    ) {
        let valid = lines.iter().filter(|(_, ok)| *ok).count();
        let block = lines.iter().map(|(l, _)| l.as_str()).collect::<Vec<_>>().join("\n");

        let record = parse_entry(&block);
        prop_assert_eq!(record.peak_count(), valid);

        let (mgf, stats) = MspToMgfConverter::new().convert_str(&block).unwrap();
        prop_assert_eq!(stats.peaks_written, valid);
        let peak_lines = mgf.lines().filter(|l| l.contains('\t')).count();
        prop_assert_eq!(peak_lines, valid);
    }
}
