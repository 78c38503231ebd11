use gridstyle_model::{
    Alignment, AlignmentPatch, ApplyPatch, Color, Font, FontPatch, HorizontalAlignment, Style,
    StyleError, StylePatch,
};

#[test]
fn present_fields_win_even_over_customized_targets() {
    let mut font = Font {
        bold: true,
        color: Some(Color::BLACK),
        ..Default::default()
    };

    let patch = FontPatch {
        bold: Some(false),
        color: Some(Color::from_rgb(0xFF, 0, 0)),
        ..Default::default()
    };
    font.apply_patch(&patch).unwrap();

    assert!(!font.bold);
    assert_eq!(font.color, Some(Color::from_rgb(0xFF, 0, 0)));
}

#[test]
fn absent_fields_leave_the_target_untouched() {
    let mut font = Font {
        name: Some("Calibri".into()),
        italic: true,
        ..Default::default()
    };
    let snapshot = font.clone();

    font.apply_patch(&FontPatch::default()).unwrap();
    assert_eq!(font, snapshot);
}

#[test]
fn empty_nested_patch_still_materializes_the_child() {
    let mut style = Style::default();
    assert!(style.alignment.is_none());

    let patch = StylePatch {
        alignment: Some(AlignmentPatch::default()),
        ..Default::default()
    };
    style.apply_patch(&patch).unwrap();

    // Recursion happened: a default child now exists.
    assert_eq!(style.alignment, Some(Alignment::default()));
}

#[test]
fn patched_values_go_through_the_same_validation_as_direct_sets() {
    let mut style = Style::default();
    let patch = StylePatch {
        font: Some(FontPatch {
            size_100pt: Some(50_000),
            ..Default::default()
        }),
        ..Default::default()
    };

    assert_eq!(
        style.apply_patch(&patch),
        Err(StyleError::FontSize { value: 50_000 })
    );
}

#[test]
fn rotation_patch_out_of_range_is_rejected() {
    let mut alignment = Alignment::default();
    let patch = AlignmentPatch {
        horizontal: Some(HorizontalAlignment::Center),
        text_rotation: Some(180),
        ..Default::default()
    };

    assert_eq!(
        alignment.apply_patch(&patch),
        Err(StyleError::TextRotation { value: 180 })
    );
    // The pass stops at the failure; fields applied before it stay applied.
    assert_eq!(alignment.horizontal, HorizontalAlignment::Center);
    assert_eq!(alignment.text_rotation, 0);
}

#[test]
fn patches_deserialize_sparsely_from_json() {
    let patch: StylePatch = serde_json::from_str(
        r#"{ "font": { "bold": true }, "number_format": "0%" }"#,
    )
    .unwrap();

    let mut style = Style::default();
    style.apply_patch(&patch).unwrap();

    assert!(style.font.as_ref().unwrap().bold);
    assert_eq!(style.number_format.as_deref(), Some("0%"));
    assert!(style.fill.is_none());
}
