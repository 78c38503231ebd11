use gridstyle_model::charts::{Chart, ChartKind, ChartText, Legend, LegendPosition};
use gridstyle_model::{
    Color, Document, DocumentError, Fill, Font, NamedStyle, ScopeError, SheetSettings, Style,
};

fn document_with_styles_and_charts() -> Document {
    let mut doc = Document::new();
    doc.properties.author = "reporting-service".into();
    doc.sheets.push(SheetSettings::new("Data"));

    let base = Style {
        font: Some(Font {
            name: Some("Arial".into()),
            ..Default::default()
        }),
        fill: Some(Fill::solid(Color::from_rgb(0xFA, 0xFA, 0xFA))),
        ..Default::default()
    };
    doc.styles
        .insert(NamedStyle::new("Base", base).unwrap())
        .unwrap();
    let header = Style {
        font: Some(Font {
            bold: true,
            ..Default::default()
        }),
        ..Default::default()
    };
    doc.styles
        .insert(
            NamedStyle::new("Header", header)
                .unwrap()
                .with_inherits("Base")
                .unwrap(),
        )
        .unwrap();

    let mut template = Chart::new("Template", ChartKind::Line);
    template.legend = Some(Legend {
        position: LegendPosition::Bottom,
        ..Default::default()
    });
    doc.charts.insert(template).unwrap();

    let mut sales = Chart::new("Sales", ChartKind::Column);
    sales.inherits = Some("Template".into());
    sales.title = Some(ChartText::plain("Sales"));
    doc.charts.insert(sales).unwrap();

    doc
}

#[test]
fn resolve_finalizes_styles_and_charts() {
    let mut doc = document_with_styles_and_charts();
    doc.resolve().unwrap();

    let header = &doc.styles.get("Header").unwrap().style;
    assert!(header.font.as_ref().unwrap().bold);
    assert_eq!(header.font.as_ref().unwrap().name.as_deref(), Some("Arial"));

    let sales = doc.charts.get("Sales").unwrap();
    assert_eq!(sales.kind, ChartKind::Column);
    assert_eq!(
        sales.legend.as_ref().unwrap().position,
        LegendPosition::Bottom
    );
}

#[test]
fn resolve_surfaces_dangling_style_links() {
    let mut doc = Document::new();
    doc.styles
        .insert(
            NamedStyle::new("Orphan", Style::default())
                .unwrap()
                .with_inherits("Gone")
                .unwrap(),
        )
        .unwrap();

    assert_eq!(
        doc.resolve(),
        Err(DocumentError::Styles(ScopeError::NotFound("Gone".into())))
    );
}

#[test]
fn resolve_names_the_failing_chart() {
    let mut doc = Document::new();
    let mut chart = Chart::new("Sales", ChartKind::Column);
    chart.inherits = Some("Gone".into());
    doc.charts.insert(chart).unwrap();

    match doc.resolve() {
        Err(DocumentError::Chart { name, .. }) => assert_eq!(name, "Sales"),
        other => panic!("expected chart error, got {other:?}"),
    }
}

#[test]
fn template_document_round_trip_through_json() {
    let mut doc = document_with_styles_and_charts();
    doc.resolve().unwrap();

    let json = serde_json::to_string(&doc).unwrap();
    let back: Document = serde_json::from_str(&json).unwrap();
    assert_eq!(back, doc);
}

#[test]
fn template_application_composes_with_resolution() {
    let mut doc = Document::new();
    doc.sheets.push(SheetSettings::new("Data"));

    let template = document_with_styles_and_charts();
    doc.apply_template(&template);

    // Adopted the template's registries wholesale (nothing was registered
    // locally), then resolution works on the adopted entries.
    doc.resolve().unwrap();
    assert!(doc.styles.get("Header").is_some());
    assert_eq!(doc.sheets.len(), 1);
    assert_eq!(doc.properties.author, "reporting-service");
}
