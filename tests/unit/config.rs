use super::*;

#[test]
fn defaults_are_valid() {
    BrushSettings::default().validate().unwrap();
}

#[test]
fn intensity_is_tracked_per_effect() {
    let mut s = BrushSettings::default();
    s.set_intensity(EffectKind::Noise, 80.0);
    assert_eq!(s.intensity_for(EffectKind::Noise), 80.0);
    assert_eq!(s.intensity_for(EffectKind::Pixelate), 12.0);

    let b = s.brush_at(EffectKind::Noise, Point::new(3.0, 4.0));
    assert_eq!(b, Brush::new(3.0, 4.0, 24.0, 80.0));
}

#[test]
fn settings_reject_non_positive_values() {
    let s = BrushSettings {
        radius: 0.0,
        ..BrushSettings::default()
    };
    assert!(s.validate().is_err());

    let s = BrushSettings {
        blur_intensity: -1.0,
        ..BrushSettings::default()
    };
    let err = s.validate().unwrap_err();
    assert!(err.to_string().contains("blur intensity"));
}

#[test]
fn script_parses_with_defaults_and_overrides() {
    let script = StrokeScript::from_json(
        r#"{
            "effect": "noise",
            "settings": { "radius": 16 },
            "strokes": [
                { "points": [[1, 2], [3, 4]] },
                { "effect": "blur", "intensity": 20, "radius": 5, "points": [[9, 9]] }
            ]
        }"#,
    )
    .unwrap();

    assert_eq!(script.seed, 0);
    assert_eq!(script.settings.radius, 16.0);
    assert_eq!(script.settings.pixelate_intensity, 12.0);

    let first = &script.strokes[0];
    assert_eq!(script.effect_for(first), EffectKind::Noise);
    assert_eq!(script.settings_for(first).radius, 16.0);

    let second = &script.strokes[1];
    assert_eq!(script.effect_for(second), EffectKind::Blur);
    let s = script.settings_for(second);
    assert_eq!(s.radius, 5.0);
    assert_eq!(s.blur_intensity, 20.0);
    assert_eq!(s.noise_intensity, 40.0);
}

#[test]
fn script_rejects_empty_strokes_and_bad_overrides() {
    let err = StrokeScript::from_json(r#"{ "strokes": [ { "points": [] } ] }"#).unwrap_err();
    assert!(matches!(err, BrushError::Validation(_)));

    let err =
        StrokeScript::from_json(r#"{ "strokes": [ { "radius": -2, "points": [[0, 0]] } ] }"#)
            .unwrap_err();
    assert!(err.to_string().contains("stroke 0"));

    let err = StrokeScript::from_json(r#"{ "strokes": "nope" }"#).unwrap_err();
    assert!(matches!(err, BrushError::Serde(_)));
}

#[test]
fn script_json_round_trips() {
    let script = StrokeScript {
        effect: EffectKind::Blur,
        settings: BrushSettings::default(),
        seed: 3,
        strokes: vec![ScriptStroke {
            effect: None,
            radius: Some(7.5),
            intensity: None,
            points: vec![[1.0, 1.0], [2.0, 3.0]],
        }],
    };
    let text = script.to_json().unwrap();
    assert_eq!(StrokeScript::from_json(&text).unwrap(), script);
}
