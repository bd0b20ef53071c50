use stolpekart::{
    ScreenPoint,
    chart::{BarChartLayout, Datum},
    color::assign_colors,
    config::{ChartConfigPatch, Margin, compute_dimensions},
    geo::{DEFAULT_SCALE_FACTOR, LatLng, MapMarker, MapViewport, MockMapLayout, project_marker},
    scale::{DEFAULT_PADDING, compute_band_scale, compute_linear_scale},
};

fn demo_config() -> ChartConfigPatch {
    ChartConfigPatch {
        width: Some(600.0),
        height: Some(400.0),
        margin: Some(Margin::new(20.0, 30.0, 40.0, 60.0)),
        ..Default::default()
    }
}

#[test]
fn two_bar_dataset_end_to_end() {
    let data = vec![
        Datum::new("1", 30.0, "First", "A"),
        Datum::new("2", 60.0, "Second", "B"),
    ];

    let dims = compute_dimensions(&demo_config());
    assert_eq!(dims.inner_width, 510.0);
    assert_eq!(dims.inner_height, 340.0);

    let x = compute_band_scale(["A", "B"], dims.inner_width, DEFAULT_PADDING);
    assert_eq!(x.band("A").map(|b| b.width), Some(229.5));
    assert_eq!(x.band("B").map(|b| b.width), Some(229.5));

    let y = compute_linear_scale(60.0, dims.inner_height);
    assert_eq!(y.y(30.0), 170.0);
    assert_eq!(y.y(60.0), 0.0);

    let layout = BarChartLayout::compute(&data, &demo_config());
    assert_eq!(layout.bars.len(), 2);
    assert_eq!(layout.bars[0].end.y, 170.0);
    assert_eq!(layout.bars[0].end.height, 170.0);
    assert_eq!(layout.bars[1].end.y, 0.0);
    assert_eq!(layout.bars[1].end.height, 340.0);
    assert_eq!(layout.x_axis.ticks.len(), 2);
    assert_eq!(layout.y_axis.ticks.first().map(|t| t.label.as_str()), Some("0"));
    assert_eq!(layout.y_axis.ticks.last().map(|t| t.label.as_str()), Some("60"));

    let mut clicks = Vec::new();
    layout.dispatch_click(ScreenPoint::new(100.0, 300.0), |d| clicks.push(d.id.clone()));
    assert_eq!(clicks, vec!["1".to_string()]);
}

#[test]
fn colour_assignment_cycles() {
    let colors = assign_colors(["a", "b", "c"], &["red", "blue"]);
    let pairs: Vec<_> = colors.iter().collect();

    assert_eq!(pairs, vec![("a", "red"), ("b", "blue"), ("c", "red")]);
}

#[test]
fn marker_north_of_center() {
    let p = project_marker(
        LatLng::new(40.8128, -74.006),
        LatLng::new(40.7128, -74.006),
        DEFAULT_SCALE_FACTOR,
    );

    assert_eq!(p.left_percent, 50.0);
    assert!((p.top_percent - 40.0).abs() < 1e-9);
}

#[test]
fn mock_map_from_json_config() {
    let config = stolpekart::config::MapConfig::from_json(r#"{ "zoom": 12 }"#).unwrap();
    let markers: Vec<MapMarker> = serde_json::from_str(
        r#"[
            { "id": "1", "position": { "lat": 40.7128, "lng": -74.006 }, "title": "Center" },
            { "id": "2", "position": { "lat": 40.7580, "lng": -73.9855 } }
        ]"#,
    )
    .unwrap();

    let layout = MockMapLayout::compute(MapViewport::from(&config), &markers);

    assert_eq!(layout.center_label, "40.7128, -74.0060");
    assert_eq!(layout.status_label, "Zoom: 12 | Markers: 2");
    assert_eq!(layout.placed[0].projection.left_percent, 50.0);
    assert!(layout.placed[1].projection.left_percent > 50.0);
    assert!(layout.placed[1].projection.top_percent < 50.0);
}

#[test]
fn negative_bar_is_clickable_below_baseline() {
    let data = vec![Datum::new("a", 60.0, "Up", "A"), Datum::new("b", -30.0, "Down", "B")];
    let layout = BarChartLayout::compute(&data, &demo_config());

    assert_eq!(layout.bars[1].end.y, 510.0);
    assert_eq!(layout.bars[1].end.height, -170.0);

    let mut clicks = Vec::new();
    layout.dispatch_click(ScreenPoint::new(440.0, 420.0), |d| clicks.push(d.id.clone()));
    assert_eq!(clicks, vec!["b".to_string()]);
}

#[test]
fn zero_zoom_shows_default_zoom() {
    let config = stolpekart::config::MapConfig::from_json(r#"{ "zoom": 0 }"#).unwrap();
    let layout = MockMapLayout::compute(MapViewport::from(&config), &[]);

    assert_eq!(layout.status_label, "Zoom: 10 | Markers: 0");
}
