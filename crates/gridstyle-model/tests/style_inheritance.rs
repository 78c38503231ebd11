use pretty_assertions::assert_eq;

use gridstyle_model::{
    Border, BorderEdge, BorderStyle, Color, Defaulted, Fill, Font, Inherit, Style,
};

fn custom_style() -> Style {
    Style {
        font: Some(Font {
            name: Some("Calibri".into()),
            bold: true,
            ..Default::default()
        }),
        fill: Some(Fill::solid(Color::from_rgb(0xEE, 0xEE, 0xEE))),
        number_format: Some("#,##0.00".into()),
        ..Default::default()
    }
}

#[test]
fn merging_a_clone_of_itself_changes_nothing() {
    // All-default model.
    let mut style = Style::default();
    let reference = style.clone();
    style.inherit_from(&reference);
    assert_eq!(style, Style::default());

    // Customized model: its own values win over identical reference values.
    let mut style = custom_style();
    let reference = style.clone();
    style.inherit_from(&reference);
    assert_eq!(style, custom_style());
}

#[test]
fn default_target_takes_everything_from_the_reference() {
    let mut target = Style::default();
    assert!(target.is_default());

    let reference = custom_style();
    target.inherit_from(&reference);

    assert_eq!(target, reference);
    assert_eq!(target.is_default(), reference.is_default());
}

#[test]
fn non_default_properties_survive_the_merge() {
    let mut target = Style::default();
    target
        .font
        .get_or_insert_with(Font::default)
        .set_size_100pt(900)
        .unwrap();

    let reference = Style {
        font: Some(Font {
            size_100pt: 1400,
            bold: true,
            ..Default::default()
        }),
        ..Default::default()
    };

    target.inherit_from(&reference);

    let font = target.font.as_ref().unwrap();
    // Customized size kept, still-default boldness filled in.
    assert_eq!(font.size_100pt, 900);
    assert!(font.bold);
}

#[test]
fn border_scenario_fills_and_preserves() {
    // A border still at its defaults takes the reference's edge wholesale.
    let mut border = Border::default();
    let reference = Border::uniform(BorderEdge::new(
        BorderStyle::Thin,
        Color::from_rgb(0xFF, 0, 0),
    ));
    border.inherit_from(&reference);
    assert_eq!(border, reference);

    // A border with an explicit color keeps it and only fills the rest.
    let mut border = Border::default();
    border.top.color = Some(Color::from_rgb(0, 0, 0xFF));
    border.inherit_from(&reference);
    assert_eq!(border.top.style, BorderStyle::Thin);
    assert_eq!(border.top.color, Some(Color::from_rgb(0, 0, 0xFF)));
    assert_eq!(border.bottom, reference.bottom);
}

#[test]
fn missing_reference_children_are_nothing_to_inherit() {
    let mut target = custom_style();
    let snapshot = target.clone();

    // The reference has no border/alignment children at all.
    let reference = Style::default();
    target.inherit_from(&reference);

    assert_eq!(target, snapshot);
}

#[test]
fn clones_are_independent() {
    let original = custom_style();
    let mut copy = original.clone();

    copy.font.as_mut().unwrap().bold = false;
    copy.fill.as_mut().unwrap().foreground = Some(Color::BLACK);

    assert!(original.font.as_ref().unwrap().bold);
    assert_eq!(
        original.fill.as_ref().unwrap().foreground,
        Some(Color::from_rgb(0xEE, 0xEE, 0xEE))
    );

    let mut original = original;
    original.font.as_mut().unwrap().italic = true;
    assert!(!copy.font.as_ref().unwrap().italic);
}

#[test]
fn is_default_is_recomputed_from_current_state() {
    let mut style = Style::default();
    assert!(style.is_default());

    style.font = Some(Font {
        bold: true,
        ..Default::default()
    });
    assert!(!style.is_default());

    // Reverting the property restores defaultness; nothing is cached.
    style.font.as_mut().unwrap().bold = false;
    style.font = None;
    assert!(style.is_default());
}
