use crate::{
    config::BrushSettings,
    effects::{EffectKind, apply_dab},
    foundation::core::Point,
    random::UniformSource,
    raster::store::PixelStore,
};

/// Stroke lifecycle state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrokeState {
    /// No pointer held.
    Idle,
    /// A stroke is in progress.
    Active {
        /// Dabs applied so far in this stroke.
        dabs: usize,
    },
}

/// Input-device independent stroke messages.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StrokeEvent {
    /// Brush down at a point; applies the first dab.
    Start(Point),
    /// Brush moved while held; applies one dab.
    Dab(Point),
    /// Brush up or left the surface.
    End,
    /// Gesture cancelled. Applied dabs stay applied.
    Cancel,
}

/// What [`StrokeSession::handle`] did with an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrokeOutcome {
    /// Event not valid in the current state; nothing happened.
    Ignored,
    /// Stroke started and its first dab applied.
    Started,
    /// One more dab applied.
    Dabbed,
    /// Stroke finished; the buffer holds every dab and is safe to snapshot.
    Completed {
        /// Dabs applied in the finished stroke.
        dabs: usize,
    },
}

/// Drives one effect over a pixel store from discrete stroke events.
///
/// Each dab builds a fresh brush from the current settings and runs to
/// completion before `handle` returns.
pub struct StrokeSession<R> {
    effect: EffectKind,
    settings: BrushSettings,
    rng: R,
    state: StrokeState,
}

impl<R: UniformSource> StrokeSession<R> {
    /// Idle session painting `effect`.
    pub fn new(effect: EffectKind, settings: BrushSettings, rng: R) -> Self {
        Self {
            effect,
            settings,
            rng,
            state: StrokeState::Idle,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> StrokeState {
        self.state
    }

    /// Return `true` while a stroke is in progress.
    pub fn is_active(&self) -> bool {
        matches!(self.state, StrokeState::Active { .. })
    }

    /// Effect applied by upcoming dabs.
    pub fn effect(&self) -> EffectKind {
        self.effect
    }

    /// Switch effect; takes effect from the next dab.
    pub fn set_effect(&mut self, effect: EffectKind) {
        self.effect = effect;
    }

    /// Brush settings used for upcoming dabs.
    pub fn settings(&self) -> &BrushSettings {
        &self.settings
    }

    /// Mutable brush settings; changes apply from the next dab.
    pub fn settings_mut(&mut self) -> &mut BrushSettings {
        &mut self.settings
    }

    /// Feed one event. Dabs are applied synchronously in receipt order.
    #[tracing::instrument(level = "trace", skip(self, store), fields(effect = %self.effect))]
    pub fn handle<S: PixelStore + ?Sized>(
        &mut self,
        event: StrokeEvent,
        store: &mut S,
    ) -> StrokeOutcome {
        match (self.state, event) {
            (StrokeState::Idle, StrokeEvent::Start(at)) => {
                self.dab(store, at);
                self.state = StrokeState::Active { dabs: 1 };
                StrokeOutcome::Started
            }
            (StrokeState::Active { dabs }, StrokeEvent::Start(at) | StrokeEvent::Dab(at)) => {
                self.dab(store, at);
                self.state = StrokeState::Active { dabs: dabs + 1 };
                StrokeOutcome::Dabbed
            }
            (StrokeState::Active { dabs }, StrokeEvent::End | StrokeEvent::Cancel) => {
                self.state = StrokeState::Idle;
                tracing::debug!(dabs, "stroke completed");
                StrokeOutcome::Completed { dabs }
            }
            (StrokeState::Idle, StrokeEvent::Dab(_) | StrokeEvent::End | StrokeEvent::Cancel) => {
                tracing::trace!(?event, "ignored while idle");
                StrokeOutcome::Ignored
            }
        }
    }

    fn dab<S: PixelStore + ?Sized>(&mut self, store: &mut S, at: Point) {
        let brush = self.settings.brush_at(self.effect, at);
        apply_dab(self.effect, store, &brush, &mut self.rng);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stroke/session.rs"]
mod tests;
