use crate::{
    foundation::error::{BrushError, BrushResult},
    raster::buffer::RasterBuffer,
};

/// Full-buffer undo/redo history, one snapshot per completed stroke.
///
/// Restoring is a plain overwrite of the whole buffer.
#[derive(Clone, Debug)]
pub struct SnapshotHistory {
    initial: RasterBuffer,
    base: RasterBuffer,
    undo: Vec<RasterBuffer>,
    redo: Vec<RasterBuffer>,
    capacity: Option<usize>,
}

impl SnapshotHistory {
    /// Unbounded history rooted at the freshly loaded image.
    pub fn new(initial: &RasterBuffer) -> Self {
        Self {
            initial: initial.clone(),
            base: initial.clone(),
            undo: Vec::new(),
            redo: Vec::new(),
            capacity: None,
        }
    }

    /// Keep at most `capacity` undoable strokes; older ones are folded into
    /// the base state.
    pub fn with_capacity(initial: &RasterBuffer, capacity: usize) -> Self {
        Self {
            capacity: Some(capacity.max(1)),
            ..Self::new(initial)
        }
    }

    /// Snapshot the buffer after a completed stroke. Clears redo.
    pub fn record(&mut self, buffer: &RasterBuffer) {
        self.undo.push(buffer.clone());
        self.redo.clear();
        if let Some(cap) = self.capacity {
            while self.undo.len() > cap {
                self.base = self.undo.remove(0);
            }
        }
    }

    /// Step back one stroke.
    pub fn undo(&mut self, buffer: &mut RasterBuffer) -> BrushResult<()> {
        let Some(top) = self.undo.pop() else {
            return Err(BrushError::state("nothing to undo"));
        };
        let prev = self.undo.last().unwrap_or(&self.base);
        if let Err(err) = buffer.restore_from(prev) {
            self.undo.push(top);
            return Err(err);
        }
        self.redo.push(top);
        Ok(())
    }

    /// Re-apply the most recently undone stroke.
    pub fn redo(&mut self, buffer: &mut RasterBuffer) -> BrushResult<()> {
        let Some(next) = self.redo.pop() else {
            return Err(BrushError::state("nothing to redo"));
        };
        if let Err(err) = buffer.restore_from(&next) {
            self.redo.push(next);
            return Err(err);
        }
        self.undo.push(next);
        Ok(())
    }

    /// Return the buffer to the loaded image and forget all history.
    pub fn reset(&mut self, buffer: &mut RasterBuffer) -> BrushResult<()> {
        buffer.restore_from(&self.initial)?;
        self.base = self.initial.clone();
        self.undo.clear();
        self.redo.clear();
        Ok(())
    }

    /// Return `true` when [`Self::undo`] would succeed.
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    /// Return `true` when [`Self::redo`] would succeed.
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stroke/history.rs"]
mod tests;
