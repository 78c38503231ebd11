use pretty_assertions::assert_eq;
use serde_json::json;

use gridstyle_model::charts::{Chart, ChartKind, ChartText};
use gridstyle_model::{
    Alignment, Border, Color, Font, NamedStyle, Style, StyleSheet, VerticalAlignment,
};

#[test]
fn default_models_serialize_without_noise() {
    // Only deviations from documented defaults are represented.
    assert_eq!(
        serde_json::to_value(Style::default()).unwrap(),
        json!({})
    );
    assert_eq!(
        serde_json::to_value(Font::default()).unwrap(),
        json!({})
    );
    assert_eq!(
        serde_json::to_value(Border::default()).unwrap(),
        json!({})
    );
}

#[test]
fn customized_fields_appear_and_round_trip() {
    let style = Style {
        font: Some(Font {
            bold: true,
            size_100pt: 1400,
            color: Some(Color::from_rgb(0xFF, 0, 0)),
            ..Default::default()
        }),
        alignment: Some(Alignment {
            vertical: VerticalAlignment::Top,
            wrap_text: true,
            ..Default::default()
        }),
        ..Default::default()
    };

    let value = serde_json::to_value(&style).unwrap();
    assert_eq!(
        value,
        json!({
            "font": {
                "size_100pt": 1400,
                "bold": true,
                "color": "#FFFF0000"
            },
            "alignment": {
                "horizontal": "general",
                "vertical": "top",
                "wrap_text": true
            }
        })
    );

    let back: Style = serde_json::from_value(value).unwrap();
    assert_eq!(back, style);
}

#[test]
fn chart_json_uses_camel_case() {
    let mut chart = Chart::new("Sales", ChartKind::Pie);
    chart.title = Some(ChartText::plain("Share"));
    chart.vary_colors = true;

    let value = serde_json::to_value(&chart).unwrap();
    assert_eq!(
        value,
        json!({
            "name": "Sales",
            "kind": "pie",
            "title": { "text": "Share" },
            "varyColors": true
        })
    );
}

#[test]
fn stylesheet_rejects_duplicate_names_on_deserialize() {
    let duplicated = json!([
        { "name": "Base" },
        { "name": "Base" }
    ]);
    assert!(serde_json::from_value::<StyleSheet>(duplicated).is_err());
}

#[test]
fn stylesheet_round_trip_preserves_declaration_order() {
    let mut sheet = StyleSheet::new();
    sheet
        .insert(NamedStyle::new("Base", Style::default()).unwrap())
        .unwrap();
    sheet
        .insert(
            NamedStyle::new("Header", Style::default())
                .unwrap()
                .with_inherits("Base")
                .unwrap(),
        )
        .unwrap();

    let json = serde_json::to_string(&sheet).unwrap();
    let back: StyleSheet = serde_json::from_str(&json).unwrap();

    let names: Vec<&str> = back.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["Base", "Header"]);
}
