use super::*;
use crate::{random::FixedUniform, raster::buffer::RasterBuffer};

fn settings() -> BrushSettings {
    BrushSettings {
        radius: 2.0,
        pixelate_intensity: 4.0,
        noise_intensity: 40.0,
        blur_intensity: 8.0,
    }
}

fn session(effect: EffectKind) -> StrokeSession<FixedUniform> {
    StrokeSession::new(effect, settings(), FixedUniform::constant(1.0))
}

#[test]
fn full_lifecycle_counts_dabs() {
    let mut buf = RasterBuffer::new(16, 16, [100, 100, 100, 255]).unwrap();
    let mut s = session(EffectKind::Noise);
    assert_eq!(s.state(), StrokeState::Idle);

    assert_eq!(
        s.handle(StrokeEvent::Start(Point::new(3.0, 3.0)), &mut buf),
        StrokeOutcome::Started
    );
    assert!(s.is_active());
    assert_eq!(
        s.handle(StrokeEvent::Dab(Point::new(12.0, 12.0)), &mut buf),
        StrokeOutcome::Dabbed
    );
    assert_eq!(s.state(), StrokeState::Active { dabs: 2 });
    assert_eq!(
        s.handle(StrokeEvent::End, &mut buf),
        StrokeOutcome::Completed { dabs: 2 }
    );
    assert_eq!(s.state(), StrokeState::Idle);

    assert_eq!(buf.pixel(3, 3), Some([130, 130, 130, 255]));
    assert_eq!(buf.pixel(12, 12), Some([130, 130, 130, 255]));
    assert_eq!(buf.pixel(8, 8), Some([100, 100, 100, 255]));
}

#[test]
fn events_while_idle_are_ignored_without_touching_pixels() {
    let mut buf = RasterBuffer::new(8, 8, [100, 100, 100, 255]).unwrap();
    let before = buf.clone();
    let mut s = session(EffectKind::Noise);

    assert_eq!(
        s.handle(StrokeEvent::Dab(Point::new(4.0, 4.0)), &mut buf),
        StrokeOutcome::Ignored
    );
    assert_eq!(s.handle(StrokeEvent::End, &mut buf), StrokeOutcome::Ignored);
    assert_eq!(s.handle(StrokeEvent::Cancel, &mut buf), StrokeOutcome::Ignored);
    assert_eq!(buf, before);
}

#[test]
fn cancel_keeps_applied_dabs() {
    let mut buf = RasterBuffer::new(8, 8, [100, 100, 100, 255]).unwrap();
    let mut s = session(EffectKind::Noise);
    s.handle(StrokeEvent::Start(Point::new(4.0, 4.0)), &mut buf);
    assert_eq!(
        s.handle(StrokeEvent::Cancel, &mut buf),
        StrokeOutcome::Completed { dabs: 1 }
    );
    assert_eq!(buf.pixel(4, 4), Some([130, 130, 130, 255]));
}

#[test]
fn second_start_while_active_is_one_more_dab() {
    let mut buf = RasterBuffer::new(8, 8, [100, 100, 100, 255]).unwrap();
    let mut s = session(EffectKind::Noise);
    s.handle(StrokeEvent::Start(Point::new(4.0, 4.0)), &mut buf);
    assert_eq!(
        s.handle(StrokeEvent::Start(Point::new(4.0, 4.0)), &mut buf),
        StrokeOutcome::Dabbed
    );
    assert_eq!(buf.pixel(4, 4), Some([160, 160, 160, 255]));
}

#[test]
fn dabs_see_the_previous_dab_result() {
    // Second dab re-averages the cell the first dab already flattened
    // inside the circle, so order matters.
    let mut buf = RasterBuffer::new(4, 4, [0, 0, 0, 255]).unwrap();
    buf.put_pixel(0, 0, [160, 0, 0, 255]);
    let mut s = StrokeSession::new(
        EffectKind::Pixelate,
        BrushSettings {
            radius: 0.5,
            ..settings()
        },
        FixedUniform::constant(0.0),
    );

    s.handle(StrokeEvent::Start(Point::new(1.5, 1.5)), &mut buf);
    // Average of the 4x4 cell is 10; only (1,1) is inside the circle.
    assert_eq!(buf.pixel(1, 1), Some([10, 0, 0, 255]));
    s.handle(StrokeEvent::Dab(Point::new(2.5, 2.5)), &mut buf);
    // (160 + 10) / 16 = 10 again, written at (2,2).
    assert_eq!(buf.pixel(2, 2), Some([10, 0, 0, 255]));
    assert_eq!(buf.pixel(0, 0), Some([160, 0, 0, 255]));
}

#[test]
fn settings_and_effect_changes_apply_to_next_dab() {
    let mut buf = RasterBuffer::new(8, 8, [100, 100, 100, 255]).unwrap();
    let mut s = session(EffectKind::Pixelate);
    s.set_effect(EffectKind::Noise);
    s.settings_mut().noise_intensity = 20.0;
    assert_eq!(s.effect(), EffectKind::Noise);
    assert_eq!(s.settings().noise_intensity, 20.0);

    s.handle(StrokeEvent::Start(Point::new(4.0, 4.0)), &mut buf);
    assert_eq!(buf.pixel(4, 4), Some([115, 115, 115, 255]));
}
