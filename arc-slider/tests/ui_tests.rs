//! UI tests using iced_test Simulator.
//!
//! These tests render the storybook without opening a window.

use iced_test::simulator;

use arc_slider::config::{StoryConfig, StorybookConfig};
use arc_slider::{Message, Storybook};
use arc_slider_core::{ChangeOrigin, SliderConfig};

fn storybook() -> Storybook {
    Storybook::new(StorybookConfig::default())
}

/// The sidebar lists every story and the first one is shown.
#[test]
fn test_storybook_lists_stories() {
    let app = storybook();
    let mut ui = simulator(app.view());

    assert!(ui.find("Regular").is_ok());
    assert!(ui.find("Custom colors").is_ok());
    assert!(ui.find("Custom range").is_ok());
    assert!(ui.find("Disabled").is_ok());
    assert!(ui.find("Value: 50").is_ok());
    assert!(ui.find("No changes yet").is_ok());
}

/// Clicking a story in the sidebar selects it.
#[test]
fn test_select_story_button() {
    let mut app = storybook();

    let messages: Vec<Message> = {
        let mut ui = simulator(app.view());
        let _ = ui.click("Custom range");
        ui.into_messages().collect()
    };

    assert!(
        messages
            .iter()
            .any(|m| matches!(m, Message::SelectStory(2)))
    );

    for message in messages {
        let _ = app.update(message);
    }

    let mut ui = simulator(app.view());
    assert!(ui.find("Temperature").is_ok());
    assert!(ui.find("Value: 10").is_ok());
    assert!(ui.find("Range: -40 to 40, step 5").is_ok());
}

/// The host can set a value through the text field and button.
#[test]
fn test_set_value_button() {
    let mut app = storybook();
    let _ = app.update(Message::ExternalValueChanged("42".to_string()));

    let messages: Vec<Message> = {
        let mut ui = simulator(app.view());
        let _ = ui.click("Set value");
        ui.into_messages().collect()
    };

    assert!(
        messages
            .iter()
            .any(|m| matches!(m, Message::ApplyExternalValue))
    );

    for message in messages {
        let _ = app.update(message);
    }

    assert_eq!(app.selected_slider().unwrap().value(), 42.0);
    assert_eq!(
        app.last_event().map(|e| e.origin),
        Some(ChangeOrigin::External)
    );

    let mut ui = simulator(app.view());
    assert!(ui.find("Value: 42").is_ok());
    assert!(ui.find("Last change: regular = 42 (external)").is_ok());
}

/// Out-of-range host values show an error and leave the slider alone.
#[test]
fn test_out_of_range_value_shows_status() {
    let mut app = storybook();
    let _ = app.update(Message::ExternalValueChanged("150".to_string()));
    let _ = app.update(Message::ApplyExternalValue);

    let mut ui = simulator(app.view());
    assert!(ui.find("150 is outside 0 to 100").is_ok());
    assert!(ui.find("Value: 50").is_ok());
}

/// Disabled stories are marked as such.
#[test]
fn test_disabled_story() {
    let mut app = storybook();
    let _ = app.update(Message::SelectStory(3));

    let mut ui = simulator(app.view());
    assert!(ui.find("Value: 30").is_ok());
    assert!(ui.find("Disabled").is_ok());
}

/// Clicking the theme toggle emits the toggle message.
#[test]
fn test_theme_toggle_button() {
    let app = storybook();
    let mut ui = simulator(app.view());

    let _ = ui.click("Theme: Dark");

    let messages: Vec<Message> = ui.into_messages().collect();
    assert!(messages.iter().any(|m| matches!(m, Message::ToggleTheme)));
}

/// An empty story list still renders.
#[test]
fn test_no_stories() {
    let config = StorybookConfig {
        stories: Vec::new(),
        ..StorybookConfig::default()
    };
    let app = Storybook::new(config);
    let mut ui = simulator(app.view());

    assert!(ui.find("No stories configured").is_ok());
}

/// Stories from configuration show their custom colors.
#[test]
fn test_configured_story_colors() {
    let config = StorybookConfig {
        stories: vec![StoryConfig::new(
            "Mint",
            SliderConfig::default()
                .with_id("mint")
                .with_colors("#0f8", "rgb(0 0 0)"),
        )],
        ..StorybookConfig::default()
    };
    let app = Storybook::new(config);
    let mut ui = simulator(app.view());

    assert!(ui.find("Colors: #00FF88 to #000000").is_ok());
}
