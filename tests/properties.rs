// tests/properties.rs
use proptest::prelude::*;

use water_trends::config::options::SourceOrder;
use water_trends::extract::{extract_series, parse_numeric_or_zero, Measurement, SeriesSet};

fn data_row() -> impl Strategy<Value = Vec<String>> {
    (
        "[0-9]{4}-[0-9]{2}-[0-9]{2}",
        prop::collection::vec(
            prop_oneof![
                (0.0f64..1000.0).prop_map(|v| v.to_string()),
                "[a-z/ ]{0,6}",
            ],
            8,
        ),
        prop::collection::vec("[A-Za-z]{0,5}", 1..3),
    )
        .prop_map(|(label, values, tail)| {
            let mut row = vec![label];
            row.extend(values);
            row.extend(tail);
            row
        })
}

fn short_row() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[0-9.]{0,4}", 0..10)
}

proptest! {
    #[test]
    fn n_valid_rows_give_n_samples(rows in prop::collection::vec(data_row(), 0..30)) {
        let mut table = vec![vec!["header".to_string()]];
        table.extend(rows.iter().cloned());
        let set = SeriesSet::from_rows(&table);
        prop_assert_eq!(set.len(), rows.len());
        for (_, values) in set.iter() {
            prop_assert_eq!(values.len(), rows.len());
        }
    }

    #[test]
    fn output_index_zero_is_last_source_row(rows in prop::collection::vec(data_row(), 1..20)) {
        let mut table = vec![vec!["header".to_string()]];
        table.extend(rows.iter().cloned());
        let set = SeriesSet::from_rows(&table);
        let last = rows.last().unwrap();
        prop_assert_eq!(&set.labels()[0], &last[0]);
        prop_assert_eq!(set.values(Measurement::Ph)[0], parse_numeric_or_zero(&last[1]));
    }

    #[test]
    fn short_rows_contribute_nothing(
        rows in prop::collection::vec(data_row(), 0..10),
        shorts in prop::collection::vec(short_row(), 0..10),
    ) {
        let mut table = vec![vec!["header".to_string()]];
        table.extend(rows.iter().cloned());
        table.extend(shorts.iter().cloned());
        let ex = extract_series(&table, SourceOrder::NewestFirst, None);
        prop_assert_eq!(ex.set.len(), rows.len());
        prop_assert_eq!(ex.stats.skipped_short, shorts.len());
    }

    #[test]
    fn letters_only_parse_to_zero(s in "[a-zA-Z/ ]*") {
        prop_assert_eq!(parse_numeric_or_zero(&s), 0.0);
    }

    #[test]
    fn displayed_numbers_parse_back(v in -1.0e6f64..1.0e6) {
        prop_assert_eq!(parse_numeric_or_zero(&v.to_string()), v);
    }

    #[test]
    fn parse_never_returns_non_finite(s in "\\PC{0,12}") {
        prop_assert!(parse_numeric_or_zero(&s).is_finite());
    }
}
