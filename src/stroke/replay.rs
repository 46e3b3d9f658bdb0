use crate::{
    config::StrokeScript,
    foundation::core::Point,
    random::SeededUniform,
    raster::store::PixelStore,
    stroke::session::{StrokeEvent, StrokeOutcome, StrokeSession},
};

/// Totals from a [`replay`] run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReplayStats {
    /// Strokes completed.
    pub strokes: usize,
    /// Dabs applied across all strokes.
    pub dabs: usize,
}

/// Replay every stroke of a script through a [`StrokeSession`].
///
/// `on_stroke_end` runs after each completed stroke, when the store is safe
/// to snapshot.
#[tracing::instrument(skip_all, fields(strokes = script.strokes.len(), seed = script.seed))]
pub fn replay<S, F>(script: &StrokeScript, store: &mut S, mut on_stroke_end: F) -> ReplayStats
where
    S: PixelStore + ?Sized,
    F: FnMut(&S),
{
    let mut session = StrokeSession::new(
        script.effect,
        script.settings,
        SeededUniform::new(script.seed),
    );
    let mut stats = ReplayStats::default();

    for stroke in &script.strokes {
        session.set_effect(script.effect_for(stroke));
        *session.settings_mut() = script.settings_for(stroke);

        let mut points = stroke.points.iter().map(|&[x, y]| Point::new(x, y));
        let Some(first) = points.next() else {
            continue;
        };
        session.handle(StrokeEvent::Start(first), store);
        for at in points {
            session.handle(StrokeEvent::Dab(at), store);
        }
        if let StrokeOutcome::Completed { dabs } = session.handle(StrokeEvent::End, store) {
            stats.strokes += 1;
            stats.dabs += dabs;
            on_stroke_end(store);
        }
    }

    tracing::debug!(strokes = stats.strokes, dabs = stats.dabs, "replay finished");
    stats
}

#[cfg(test)]
#[path = "../../tests/unit/stroke/replay.rs"]
mod tests;
