use linechart::api::{Form, YColumnSelection};
use linechart::core::{Column, ColumnMeta, Table, column_meta_map, d3_tick_format};
use proptest::prelude::*;

fn optional_values(len: usize) -> impl Strategy<Value = Vec<Option<f64>>> {
    proptest::collection::vec(proptest::option::of(-1_000.0f64..1_000.0), len)
}

proptest! {
    #[test]
    fn record_count_matches_rows_with_both_x_and_y(
        (xs, ys1, ys2) in (2usize..64).prop_flat_map(|len| {
            (optional_values(len), optional_values(len), optional_values(len))
        })
    ) {
        let table = Table::from_columns([
            ("A", Column::Number(xs.clone())),
            ("B", Column::Number(ys1.clone())),
            ("C", Column::Number(ys2.clone())),
        ])
        .expect("table");
        let columns = column_meta_map([
            ColumnMeta::number("A", "{:,}"),
            ColumnMeta::number("B", "{:,}"),
            ColumnMeta::number("C", "{:,}"),
        ]);
        let form = Form {
            x_column: "A".to_owned(),
            y_columns: vec![
                YColumnSelection::new("B", "#111111"),
                YColumnSelection::new("C", "#222222"),
            ],
            ..Form::default()
        };

        let Ok(chart) = form.make_chart(&table, &columns) else {
            // Rejected inputs are covered by the validation tests.
            return Ok(());
        };

        let expected = xs
            .iter()
            .zip(ys1.iter().zip(ys2.iter()))
            .filter(|(x, _)| x.is_some())
            .map(|(_, (b, c))| usize::from(b.is_some()) + usize::from(c.is_some()))
            .sum::<usize>();
        let records = chart.to_vega_data_values();
        prop_assert_eq!(records.len(), expected);
        for record in &records {
            prop_assert!(record["x"].is_number());
            prop_assert!(record["y"].is_number());
        }
    }

    #[test]
    fn tick_format_always_ends_in_a_type_code(
        spec in "[,.0-9<>^=+ -]{0,6}[bcdoxXneEfFgG%]?",
    ) {
        let translated = d3_tick_format(&format!("{{:{spec}}}"));
        let last = translated.chars().last().expect("non-empty specifier");
        prop_assert!("bcdoxXneEfFgG%r".contains(last));
        prop_assert!(translated.starts_with(spec.as_str()));
    }
}
