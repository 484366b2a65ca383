//! Registry of live sliders, addressed by id.
//!
//! Host code sets a value on any registered slider with
//! [`SliderRegistry::set_value`]. Removing a slider with
//! [`SliderRegistry::unregister`] drops every reference to it.

use crate::error::{Error, Result};
use crate::slider::{ArcSlider, ChangeEvent, SliderId};

/// Sliders in registration order.
#[derive(Debug, Default)]
pub struct SliderRegistry {
    sliders: Vec<ArcSlider>,
}

impl SliderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a slider. Ids must be unique.
    pub fn register(&mut self, slider: ArcSlider) -> Result<SliderId> {
        let id = slider.id().clone();
        if self.contains(&id) {
            return Err(Error::DuplicateSlider(id.to_string()));
        }

        tracing::debug!(slider = %id, "Registered slider");
        self.sliders.push(slider);
        Ok(id)
    }

    /// Remove a slider, returning it if it was registered.
    pub fn unregister(&mut self, id: &SliderId) -> Option<ArcSlider> {
        let index = self.sliders.iter().position(|s| s.id() == id)?;
        tracing::debug!(slider = %id, "Unregistered slider");
        Some(self.sliders.remove(index))
    }

    pub fn contains(&self, id: &SliderId) -> bool {
        self.sliders.iter().any(|s| s.id() == id)
    }

    pub fn get(&self, id: &SliderId) -> Option<&ArcSlider> {
        self.sliders.iter().find(|s| s.id() == id)
    }

    pub fn get_mut(&mut self, id: &SliderId) -> Option<&mut ArcSlider> {
        self.sliders.iter_mut().find(|s| s.id() == id)
    }

    /// Set the value of the slider with `id`.
    ///
    /// Out of range values are rejected by the slider and yield `Ok(None)`.
    pub fn set_value(&mut self, id: &SliderId, value: f64) -> Result<Option<ChangeEvent>> {
        let slider = self
            .get_mut(id)
            .ok_or_else(|| Error::UnknownSlider(id.to_string()))?;
        Ok(slider.set_value(value))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ArcSlider> {
        self.sliders.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &SliderId> {
        self.sliders.iter().map(ArcSlider::id)
    }

    pub fn len(&self) -> usize {
        self.sliders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sliders.is_empty()
    }
}
