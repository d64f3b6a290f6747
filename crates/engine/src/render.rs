//! Renderer seam: the engine hands every frame to one of these.

use std::sync::{Arc, Mutex};

use anyhow::Result;

use crate::core::FrameUpdate;

/// Consumer of frame updates.
///
/// Called outside the state lock but in state-lock order, so frames arrive
/// in the order the transitions happened.
pub trait Renderer: Send {
    fn render(&mut self, frame: &FrameUpdate) -> Result<()>;
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(&mut self, frame: &FrameUpdate) -> Result<()> {
        (**self).render(frame)
    }
}

/// Discards every frame (headless sessions, benches)
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _frame: &FrameUpdate) -> Result<()> {
        Ok(())
    }
}

/// Keeps every frame it receives; clones share the same log.
#[derive(Debug, Default, Clone)]
pub struct RecordingRenderer {
    frames: Arc<Mutex<Vec<FrameUpdate>>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> Vec<FrameUpdate> {
        crate::lock_or_recover(&self.frames).clone()
    }

    pub fn len(&self) -> usize {
        crate::lock_or_recover(&self.frames).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, frame: &FrameUpdate) -> Result<()> {
        crate::lock_or_recover(&self.frames).push(frame.clone());
        Ok(())
    }
}
