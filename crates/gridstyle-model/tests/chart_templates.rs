use gridstyle_model::charts::{
    Axis, Chart, ChartError, ChartKind, ChartText, Legend, LegendPosition, LineStyle, Series,
    ShapeFill, ShapeStyle,
};
use gridstyle_model::{Color, Inherit, Scope, ScopeError, SheetRange};

fn template() -> Chart {
    let mut chart = Chart::new("ReportTemplate", ChartKind::Line);
    chart.title = Some(ChartText::plain("Untitled"));
    chart.legend = Some(Legend {
        position: LegendPosition::Bottom,
        ..Default::default()
    });
    chart.axes = vec![
        Axis {
            key: "category".into(),
            ..Default::default()
        },
        Axis {
            key: "value".into(),
            kind: gridstyle_model::charts::AxisKind::Value,
            major_gridlines: true,
            gridline_style: Some(LineStyle {
                color: Some(Color::from_rgb(0xDD, 0xDD, 0xDD)),
                ..Default::default()
            }),
            ..Default::default()
        },
    ];
    chart.series = vec![
        Series {
            name: "actual".into(),
            values: Some(SheetRange::from_a1("Data!B2:B13").unwrap()),
            style: Some(ShapeStyle {
                fill: Some(ShapeFill::Solid {
                    color: Color::from_rgb(0x31, 0x6F, 0xB5),
                }),
                ..Default::default()
            }),
            ..Default::default()
        },
        Series {
            name: "forecast".into(),
            values: Some(SheetRange::from_a1("Data!C2:C13").unwrap()),
            smooth: true,
            ..Default::default()
        },
    ];
    chart
}

fn template_scope() -> Scope<Chart> {
    let mut scope = Scope::new();
    scope.insert(template()).unwrap();
    scope
}

#[test]
fn unnamed_chart_refuses_to_resolve() {
    let scope = template_scope();
    let mut chart = Chart::default();
    chart.inherits = Some("ReportTemplate".into());
    let snapshot = chart.clone();

    assert_eq!(chart.resolve_template(&scope), Err(ChartError::MissingName));
    assert_eq!(chart, snapshot);
}

#[test]
fn dangling_template_link_is_a_lookup_error() {
    let scope = template_scope();
    let mut chart = Chart::new("Sales", ChartKind::Column);
    chart.inherits = Some("NoSuchTemplate".into());
    let snapshot = chart.clone();

    assert_eq!(
        chart.resolve_template(&scope),
        Err(ChartError::Template(ScopeError::NotFound(
            "NoSuchTemplate".into()
        )))
    );
    assert_eq!(chart, snapshot);
}

#[test]
fn chart_without_a_link_is_left_as_is() {
    let scope = template_scope();
    let mut chart = Chart::new("Sales", ChartKind::Column);
    let snapshot = chart.clone();
    chart.resolve_template(&scope).unwrap();
    assert_eq!(chart, snapshot);
}

#[test]
fn template_fills_gaps_but_keeps_customizations() {
    let scope = template_scope();
    let mut chart = Chart::new("Sales", ChartKind::Column);
    chart.inherits = Some("ReportTemplate".into());
    chart.title = Some(ChartText::plain("Sales 2026"));

    chart.resolve_template(&scope).unwrap();

    // Identity and link are never merged.
    assert_eq!(chart.name, "Sales");
    assert_eq!(chart.inherits.as_deref(), Some("ReportTemplate"));
    // Explicit kind and title survive.
    assert_eq!(chart.kind, ChartKind::Column);
    assert_eq!(chart.title.as_ref().unwrap().text, "Sales 2026");
    // Everything still default is adopted.
    assert_eq!(
        chart.legend.as_ref().unwrap().position,
        LegendPosition::Bottom
    );
    assert_eq!(chart.axes.len(), 2);
    assert_eq!(chart.series.len(), 2);
}

#[test]
fn series_merge_by_name_then_adopt_the_rest() {
    let mut chart = Chart::new("Sales", ChartKind::Line);
    chart.series = vec![Series {
        name: "actual".into(),
        style: Some(ShapeStyle {
            fill: Some(ShapeFill::Solid {
                color: Color::from_rgb(0xAA, 0x11, 0x11),
            }),
            ..Default::default()
        }),
        ..Default::default()
    }];

    chart.inherit_from(&template());

    // Same-keyed element keeps its customization, fills its gaps.
    assert_eq!(chart.series.len(), 2);
    assert_eq!(chart.series[0].name, "actual");
    assert_eq!(
        chart.series[0].style.as_ref().unwrap().fill,
        Some(ShapeFill::Solid {
            color: Color::from_rgb(0xAA, 0x11, 0x11)
        })
    );
    assert_eq!(
        chart.series[0].values,
        Some(SheetRange::from_a1("Data!B2:B13").unwrap())
    );
    // Unmatched reference element is adopted after the target's own.
    assert_eq!(chart.series[1].name, "forecast");
    assert!(chart.series[1].smooth);
}

#[test]
fn empty_axis_list_adopts_the_template_axes_in_order() {
    let mut chart = Chart::new("Sales", ChartKind::Line);
    chart.inherit_from(&template());

    let keys: Vec<&str> = chart.axes.iter().map(|a| a.key.as_str()).collect();
    assert_eq!(keys, ["category", "value"]);
    assert!(chart.axes[1].major_gridlines);
}
