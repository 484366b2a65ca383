//! Arc slider storybook application.

use iced::{Element, Task, Theme};

use arc_slider_core::{ArcSlider, ChangeEvent, Size, SliderId, SliderRegistry, svg};

use crate::config::{AppTheme, StorybookConfig};
use crate::message::{Message, SliderEvent};
use crate::view::arc_slider::ArcSliderStyle;
use crate::view::storybook::storybook_view;
use crate::view::theme::{iced_theme, slider_style};

/// A story: a named slider in the registry.
#[derive(Debug, Clone)]
pub struct Story {
    pub name: String,
    pub slider: SliderId,
}

/// The storybook application.
pub struct Storybook {
    /// All sliders, addressable by id.
    registry: SliderRegistry,
    stories: Vec<Story>,
    selected: usize,
    /// Contents of the external value field.
    external_input: String,
    last_event: Option<ChangeEvent>,
    /// Feedback for the last host action.
    status: Option<String>,
    theme: AppTheme,
}

impl Storybook {
    /// Build the storybook from configuration. Stories whose slider
    /// configuration is invalid are skipped.
    pub fn new(config: StorybookConfig) -> Self {
        let mut registry = SliderRegistry::new();
        let mut stories = Vec::new();
        let arc = ArcSliderStyle::default().arc_rect();

        for story in config.stories {
            let mut slider = match ArcSlider::new(story.slider) {
                Ok(slider) => slider,
                Err(e) => {
                    tracing::warn!(story = %story.name, error = %e, "Skipping invalid story");
                    continue;
                }
            };
            slider.set_rendered_size(Size::new(arc.width, arc.height));

            match registry.register(slider) {
                Ok(id) => stories.push(Story {
                    name: story.name,
                    slider: id,
                }),
                Err(e) => {
                    tracing::warn!(story = %story.name, error = %e, "Skipping story");
                }
            }
        }

        tracing::info!(stories = stories.len(), "Storybook ready");

        Self {
            registry,
            stories,
            selected: 0,
            external_input: String::new(),
            last_event: None,
            status: None,
            theme: config.theme,
        }
    }

    /// Boot the storybook (called by iced::application).
    pub fn boot(config: StorybookConfig) -> (Self, Task<Message>) {
        (Self::new(config), Task::none())
    }

    /// Get the window title.
    pub fn title(&self) -> String {
        match self.selected_story() {
            Some(story) => format!("Arc Slider - {}", story.name),
            None => "Arc Slider".to_string(),
        }
    }

    /// Handle incoming messages.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Slider(id, event) => {
                self.handle_slider_event(&id, event);
            }
            Message::InputChanged(id, value) => {
                let event = self
                    .registry
                    .get_mut(&id)
                    .and_then(|slider| slider.input_changed(value));
                self.record(event);
            }
            Message::SelectStory(index) => {
                self.select_story(index);
            }
            Message::ExternalValueChanged(input) => {
                self.external_input = input;
            }
            Message::ApplyExternalValue => {
                self.apply_external_value();
            }
            Message::ExportSvg => {
                self.export_svg();
            }
            Message::ToggleTheme => {
                self.theme = self.theme.toggled();
                tracing::debug!(theme = self.theme.label(), "Theme changed");
            }
        }

        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        storybook_view(self)
    }

    pub fn theme(&self) -> Theme {
        iced_theme(self.theme)
    }

    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_story(&self) -> Option<&Story> {
        self.stories.get(self.selected)
    }

    pub fn selected_slider(&self) -> Option<&ArcSlider> {
        self.selected_story()
            .and_then(|story| self.registry.get(&story.slider))
    }

    pub fn registry(&self) -> &SliderRegistry {
        &self.registry
    }

    pub fn external_input(&self) -> &str {
        &self.external_input
    }

    pub fn last_event(&self) -> Option<&ChangeEvent> {
        self.last_event.as_ref()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn app_theme(&self) -> AppTheme {
        self.theme
    }

    /// Slider metrics for the current theme.
    pub fn slider_style(&self) -> ArcSliderStyle {
        slider_style(&self.theme())
    }

    fn handle_slider_event(&mut self, id: &SliderId, event: SliderEvent) {
        let Some(slider) = self.registry.get_mut(id) else {
            tracing::warn!(slider = %id, "Event for unknown slider");
            return;
        };

        let change = match event {
            SliderEvent::PointerDown {
                x,
                path_bounds,
                target,
            } => slider.pointer_down(x, path_bounds, target),
            SliderEvent::PointerMove { x, path_bounds } => slider.pointer_move(x, path_bounds),
            SliderEvent::PointerUp => {
                slider.pointer_up();
                None
            }
        };

        self.record(change);
    }

    fn select_story(&mut self, index: usize) {
        if index >= self.stories.len() {
            return;
        }

        // A drag never carries over to another story
        if let Some(story) = self.stories.get(self.selected) {
            if let Some(slider) = self.registry.get_mut(&story.slider) {
                slider.pointer_up();
            }
        }

        self.selected = index;
        self.external_input.clear();
        self.status = None;
        tracing::info!(story = %self.stories[index].name, "Selected story");
    }

    fn apply_external_value(&mut self) {
        let Some(id) = self.selected_story().map(|story| story.slider.clone()) else {
            return;
        };

        let input = self.external_input.trim();
        let value = match input.parse::<f64>() {
            Ok(value) if value.is_finite() => value,
            _ => {
                self.status = Some(format!("\"{}\" is not a number", input));
                return;
            }
        };

        self.status = match self.registry.get(&id).map(|slider| slider.range()) {
            Some(range) if !range.contains(value) => Some(format!(
                "{} is outside {} to {}",
                value,
                range.min(),
                range.max()
            )),
            _ => None,
        };

        match self.registry.set_value(&id, value) {
            Ok(event) => self.record(event),
            Err(e) => {
                tracing::warn!(slider = %id, error = %e, "Failed to set value");
                self.status = Some(e.to_string());
            }
        }
    }

    fn export_svg(&mut self) {
        let Some(slider) = self.selected_slider() else {
            return;
        };

        let markup = svg::render(&slider.scene());
        tracing::info!(slider = %slider.id(), svg = %markup, "Exported slider");
        self.status = Some(format!("Exported {} bytes of SVG to the log", markup.len()));
    }

    /// Keep and log a change event.
    fn record(&mut self, event: Option<ChangeEvent>) {
        let Some(event) = event else {
            return;
        };

        match event.to_json() {
            Ok(json) => tracing::info!(event = %json, "Slider changed"),
            Err(e) => tracing::warn!(error = %e, "Failed to serialize change event"),
        }
        self.last_event = Some(event);
    }
}
