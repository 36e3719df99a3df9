use super::*;

#[test]
fn defaults_match_the_published_palette() {
    let c = RenderConfig::default();
    assert!(c.background_enabled && c.manta_enabled && c.text_enabled);
    assert!(!c.horizontal);
    assert_eq!(c.width, None);
    assert_eq!(c.background_color, Color::rgb8(255, 255, 255));
    assert_eq!(c.manta_color, Color::rgb8(0, 131, 186));
    assert_eq!(c.border_color, Color::rgb8(0, 131, 186));
    assert_eq!(c.text_color, Color::rgb8(102, 102, 102));
    assert_eq!(c.eyes_color, Color::rgb8(255, 255, 255));
    assert_eq!(c.sizing_policy, SizingPolicy::Contain);
    assert_eq!(c.alignment, Alignment::Center);
    assert_eq!(c.background_size, BackgroundSize::Contain);
    assert_eq!(c.pixel_ratio, 1.0);
    assert_eq!(c.variant(), Variant::VerticalIsologotype);
}

#[test]
fn merge_is_last_write_wins_per_field() {
    let base = RenderConfig::default();
    let first = base.merged(&RenderOptions {
        width: Some(300.0),
        text_enabled: Some(false),
        ..RenderOptions::default()
    });
    let second = first.merged(&RenderOptions {
        width: Some(450.0),
        ..RenderOptions::default()
    });

    assert_eq!(second.width, Some(450.0));
    assert!(!second.text_enabled);
    assert_eq!(second.height, None);
    assert_eq!(base, RenderConfig::default());
}

#[test]
fn empty_options_leave_config_untouched() {
    let c = RenderConfig::default();
    assert_eq!(c.merged(&RenderOptions::default()), c);
}

#[test]
fn options_parse_camel_case_json() {
    let o = RenderOptions::from_json_str(
        r##"{
            "mantaEnabled": false,
            "backgroundEnabled": false,
            "width": 600,
            "marginLeft": 12.5,
            "textColor": "#0000ff",
            "sizingPolicy": "cover",
            "alignment": "none",
            "backgroundSize": "cover",
            "pixelRatio": 2,
            "backgroundNoise": true
        }"##,
    )
    .unwrap();
    assert_eq!(o.manta_enabled, Some(false));
    assert_eq!(o.background_enabled, Some(false));
    assert_eq!(o.width, Some(600.0));
    assert_eq!(o.margin_left, Some(12.5));
    assert_eq!(o.text_color, Some(Color::rgb8(0, 0, 255)));
    assert_eq!(o.sizing_policy, Some(SizingPolicy::Cover));
    assert_eq!(o.alignment, Some(Alignment::None));
    assert_eq!(o.background_size, Some(BackgroundSize::Cover));
    assert_eq!(o.pixel_ratio, Some(2.0));
    assert_eq!(o.background_noise, Some(true));
    assert_eq!(o.height, None);
}

#[test]
fn unknown_keys_are_rejected() {
    let err = RenderOptions::from_json_str(r#"{"mantaColour": "red"}"#).unwrap_err();
    assert!(matches!(err, LogoError::Serde(_)));
}

#[test]
fn bad_color_is_a_serde_error() {
    let err = RenderOptions::from_json_str(r##"{"textColor": "#zzz"}"##).unwrap_err();
    assert!(matches!(err, LogoError::Serde(_)));
}

#[test]
fn options_merge_prefers_the_overlay() {
    let a = RenderOptions {
        width: Some(100.0),
        horizontal: Some(true),
        ..RenderOptions::default()
    };
    let b = RenderOptions {
        width: Some(200.0),
        ..RenderOptions::default()
    };
    let m = a.merge(&b);
    assert_eq!(m.width, Some(200.0));
    assert_eq!(m.horizontal, Some(true));
}

#[test]
fn background_occupies_the_mark_slot() {
    let c = RenderConfig::default().merged(&RenderOptions {
        manta_enabled: Some(false),
        ..RenderOptions::default()
    });
    assert!(c.mark_slot());
    assert_eq!(c.variant(), Variant::VerticalIsologotype);

    let text_only = c.merged(&RenderOptions {
        background_enabled: Some(false),
        ..RenderOptions::default()
    });
    assert_eq!(text_only.variant(), Variant::Logotype);

    let horizontal = RenderConfig::default().merged(&RenderOptions {
        horizontal: Some(true),
        ..RenderOptions::default()
    });
    assert_eq!(horizontal.variant(), Variant::HorizontalIsologotype);
}

#[test]
fn missing_options_file_is_a_config_error() {
    let err = RenderOptions::from_path("/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, LogoError::Config(_)));
}
