use plotprep_records::Point;
use plotprep_records::QueryOptions;
use plotprep_records::RawRecord;
use plotprep_records::RecordType;
use plotprep_records::TimeRange;
use plotprep_vis::NormalizedSeries;
use plotprep_vis::SeriesPoints;
use plotprep_vis::SeriesTransformer;
use plotprep_vis::ViewConfiguration;
use plotprep_vis::XAxisMode;
use plotprep_vis::XAxisValue;
use plotprep_vis::error::VisError;
use serde_json::json;

fn window(from: i64) -> TimeRange {
    TimeRange::from_timestamps_millis(from, from + 3_600_000).expect("valid time range")
}

fn options(data_list: Vec<RawRecord>, from: i64) -> QueryOptions {
    QueryOptions::new(data_list, window(from))
}

fn config(mode: XAxisMode) -> ViewConfiguration {
    ViewConfiguration::default().with_mode(mode)
}

fn categories(name: &str, points: &[(f64, &str)]) -> RawRecord {
    let points = points
        .iter()
        .map(|(value, label)| Point::sample(*value, *label))
        .collect();

    RawRecord::new(name, RecordType::Timeseries, points)
}

fn aligned_values(series: &NormalizedSeries) -> &[(f64, f64)] {
    match &series.points {
        SeriesPoints::NonSeries(points) => &points.aligned_values,
        SeriesPoints::Samples(_) => panic!("expected non-series points"),
    }
}

#[test]
fn explicit_modes_survive_timeseries_input() -> Result<(), VisError> {
    let transformer = SeriesTransformer::default();
    let records = vec![RawRecord::timeseries("a", [(1.0, 1000.0)])];

    for mode in [XAxisMode::Series, XAxisMode::NonSeries, XAxisMode::Histogram] {
        let mut config = config(mode);
        config.show_points = true;

        let transformed = transformer.transform(&config, &options(records.clone(), 0))?;

        assert_eq!(transformed.config.x_axis_mode, mode);
        assert_eq!(transformed.config, config, "no defaults are reapplied in {mode}");
    }

    Ok(())
}

#[test]
fn docs_switch_to_field_mode() {
    let transformer = SeriesTransformer::default();
    let records = vec![RawRecord::docs("logs", [json!({ "a": 1 })])];

    let result = transformer.transform(&config(XAxisMode::Series), &options(records, 0));

    assert!(matches!(result, Err(VisError::Configuration(_))));
}

#[test]
fn configuration_survives_a_failed_field_mode() -> Result<(), VisError> {
    let transformer = SeriesTransformer::default();
    let mut config = config(XAxisMode::Series);
    config.alias_colors.insert(String::from("a"), String::from("#FF0000"));
    let before = config.clone();
    let docs = vec![RawRecord::docs("logs", [json!({ "a": 1 })])];

    let result = transformer.transform(&config, &options(docs, 0));

    assert!(matches!(result, Err(VisError::Configuration(_))));
    assert_eq!(config, before);

    let records = vec![RawRecord::timeseries("a", [(1.0, 1000.0)])];
    let transformed = transformer.transform(&config, &options(records, 0))?;

    assert_eq!(transformed.config, before);
    assert_eq!(transformed.series[0].color, "#FF0000");

    Ok(())
}

#[test]
fn null_values_keep_their_timestamp_and_category() -> Result<(), Box<dyn std::error::Error>> {
    let transformer = SeriesTransformer::default();
    let stale: Vec<RawRecord> =
        serde_json::from_value(json!([{ "target": "cpu", "datapoints": [[1, 1000], [null, 2000]] }]))?;

    let transformed = transformer.transform(&ViewConfiguration::default(), &options(stale, 100_000))?;

    assert!(transformed.series[0].is_outside_range);

    let categorized: Vec<RawRecord> = serde_json::from_value(json!([
        { "target": "a", "datapoints": [[1, "x"], [null, "y"], [3, "z"]] },
        { "target": "b", "datapoints": [[5, "y"]] }
    ]))?;

    let transformed = transformer.transform(&config(XAxisMode::NonSeries), &options(categorized, 0))?;
    let aliases: Vec<&str> = transformed.series.iter().map(|s| s.alias.as_str()).collect();

    assert_eq!(aliases, vec!["x", "y", "z"]);
    assert_eq!(aligned_values(&transformed.series[1]), &[(1.0, 0.0), (2.0, 5.0)]);

    Ok(())
}

#[test]
fn field_mode_with_field_name_yields_no_series() -> Result<(), VisError> {
    let transformer = SeriesTransformer::default();
    let config = ViewConfiguration {
        x_axis_field_name: Some(String::from("a")),
        ..ViewConfiguration::default()
    };
    let records = vec![RawRecord::new("rows", RecordType::Table, Vec::new())];

    let transformed = transformer.transform(&config, &options(records, 0))?;

    assert_eq!(transformed.config.x_axis_mode, XAxisMode::Field);
    assert!(transformed.series.is_empty());

    Ok(())
}

#[test]
fn field_mode_error_message() {
    let transformer = SeriesTransformer::default();
    let records = vec![RawRecord::docs("logs", [json!({ "a": 1 })])];

    let error = transformer
        .transform(&ViewConfiguration::default(), &options(records, 0))
        .expect_err("field mode without a field name");

    assert_eq!(
        error.to_string(),
        "vis error: configuration error: no field name specified to use for x-axis, check your axes settings"
    );
}

#[test]
fn switching_to_time_applies_time_defaults() -> Result<(), VisError> {
    let transformer = SeriesTransformer::default();
    let config = ViewConfiguration {
        x_axis_mode: XAxisMode::Field,
        show_bars: true,
        show_lines: false,
        legend_visible: false,
        x_axis_values: vec![String::from("total")],
        ..ViewConfiguration::default()
    };
    let records = vec![RawRecord::timeseries("a", [(1.0, 1000.0)])];

    let transformed = transformer.transform(&config, &options(records, 0))?;

    assert_eq!(transformed.config, ViewConfiguration::default());

    Ok(())
}

#[test]
fn non_series_alignment_is_complete() -> Result<(), VisError> {
    let transformer = SeriesTransformer::default();
    let records = vec![
        categories("web", &[(3.0, "eu"), (4.0, "us")]),
        categories("db", &[(1.0, "eu"), (2.0, "us"), (5.0, "ap")]),
        categories("cache", &[(7.0, "ap")]),
        categories("queue", &[]),
    ];

    let transformed = transformer.transform(&config(XAxisMode::NonSeries), &options(records, 0))?;
    let aliases: Vec<&str> = transformed.series.iter().map(|s| s.alias.as_str()).collect();

    assert_eq!(aliases, vec!["eu", "us", "ap"]);

    for series in &transformed.series {
        let values = aligned_values(series);
        let ordinals: Vec<f64> = values.iter().map(|(ordinal, _)| *ordinal).collect();

        assert_eq!(ordinals, vec![1.0, 2.0, 3.0, 4.0]);
        assert!(!series.is_outside_range);
    }

    assert_eq!(
        aligned_values(&transformed.series[0]),
        &[(1.0, 3.0), (2.0, 1.0), (3.0, 0.0), (4.0, 0.0)]
    );
    assert_eq!(
        aligned_values(&transformed.series[2]),
        &[(1.0, 0.0), (2.0, 5.0), (3.0, 7.0), (4.0, 0.0)]
    );

    Ok(())
}

#[test]
fn non_series_does_not_mutate_the_input() -> Result<(), VisError> {
    let transformer = SeriesTransformer::default();
    let options = options(
        vec![
            categories("a", &[(1.0, "x"), (2.0, "y")]),
            categories("b", &[(2.0, "y")]),
        ],
        0,
    );
    let before = options.clone();

    let transformed = transformer.transform(&config(XAxisMode::NonSeries), &options)?;

    assert_eq!(options, before);
    match &transformed.series[0].points {
        SeriesPoints::NonSeries(points) => {
            assert_eq!(
                points.source_records[1].points,
                vec![Point::sample(0.0, "x"), Point::sample(2.0, "y")]
            );
        }
        SeriesPoints::Samples(_) => panic!("expected non-series points"),
    }

    Ok(())
}

#[test]
fn outside_range_boundary_is_exclusive() -> Result<(), VisError> {
    let transformer = SeriesTransformer::default();
    let from = 1_700_000_000_000;
    let records = vec![
        RawRecord::timeseries("at-slack", [(1.0, (from - 10_000) as f64)]),
        RawRecord::timeseries("past-slack", [(1.0, (from - 10_001) as f64)]),
    ];

    let transformed = transformer.transform(&ViewConfiguration::default(), &options(records, from))?;

    assert!(!transformed.series[0].is_outside_range);
    assert!(transformed.series[1].is_outside_range);

    Ok(())
}

#[test]
fn single_timeseries_round_trip() -> Result<(), VisError> {
    let transformer = SeriesTransformer::default();
    let record = RawRecord::timeseries("cpu", [(10.0, 1000.0), (20.0, 2000.0)]);

    let transformed = transformer.transform(&ViewConfiguration::default(), &options(vec![record.clone()], 0))?;

    assert_eq!(transformed.series.len(), 1);

    let series = &transformed.series[0];
    assert_eq!(series.alias, "cpu");
    assert_eq!(series.points, SeriesPoints::Samples(record.points));
    assert_eq!(series.color, "#7EB26D");
    assert!(!series.is_outside_range);

    Ok(())
}

#[test]
fn histogram_flattens_all_points() -> Result<(), VisError> {
    let transformer = SeriesTransformer::default();
    let records = vec![
        RawRecord::timeseries("a", [(1.0, 1000.0), (2.0, 2000.0)]),
        RawRecord::timeseries("b", [(3.0, 1000.0), (4.0, 2000.0), (5.0, 3000.0)]),
        RawRecord::timeseries("c", [(6.0, 1000.0)]),
    ];

    let transformed = transformer.transform(&config(XAxisMode::Histogram), &options(records, 0))?;

    assert_eq!(transformed.series.len(), 1);
    assert_eq!(transformed.series[0].alias, "count");
    assert_eq!(transformed.series[0].len(), 6);

    Ok(())
}

#[test]
fn empty_input_changes_nothing() -> Result<(), VisError> {
    let transformer = SeriesTransformer::default();
    let config = ViewConfiguration {
        x_axis_mode: XAxisMode::Field,
        ..ViewConfiguration::default()
    };

    let transformed = transformer.transform(&config, &options(Vec::new(), 0))?;

    assert!(transformed.series.is_empty());
    assert_eq!(transformed.config, config);

    Ok(())
}

#[test]
fn series_mode_reduces_to_the_selected_value() -> Result<(), VisError> {
    let transformer = SeriesTransformer::default();
    let records = vec![
        RawRecord::timeseries("a", [(1.0, 1000.0), (5.0, 2000.0)]),
        RawRecord::timeseries("b", [(2.0, 1000.0)]),
    ];

    let transformed = transformer.transform(&config(XAxisMode::Series), &options(records, 0))?;
    let selector = transformed.config.x_axis_value();
    let values: Vec<Option<f64>> = transformed
        .series
        .iter()
        .map(|series| selector.and_then(|s| series.stats().value(s)))
        .collect();

    assert_eq!(selector, Some(XAxisValue::Total));
    assert_eq!(values, vec![Some(6.0), Some(2.0)]);

    Ok(())
}
