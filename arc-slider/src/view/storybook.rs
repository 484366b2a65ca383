//! Storybook layout: a story list and the selected slider.

use iced::widget::{column, container, row, rule, scrollable, slider, text, text_input};
use iced::{Alignment, Element, Length, Theme};
use iced_anim::widget::button;

use arc_slider_core::ArcSlider;

use crate::app::Storybook;
use crate::message::Message;
use crate::view::arc_slider::{ArcSliderStyle, ArcSliderWidget};
use crate::view::theme::{colors, panel};

/// Render the whole storybook.
pub fn storybook_view(app: &Storybook) -> Element<'_, Message> {
    let main = match app.selected_slider() {
        Some(slider) => story_panel(app, slider),
        None => container(text("No stories configured").size(16))
            .padding(40)
            .into(),
    };

    row![sidebar(app), rule::vertical(1), main]
        .height(Length::Fill)
        .into()
}

fn sidebar(app: &Storybook) -> Element<'_, Message> {
    let mut stories = column![text("Arc Slider").size(20)].spacing(8);

    for (index, story) in app.stories().iter().enumerate() {
        let btn = button(text(story.name.as_str()).size(14))
            .on_press(Message::SelectStory(index))
            .style(if index == app.selected() {
                iced::widget::button::primary
            } else {
                iced::widget::button::secondary
            });
        stories = stories.push(btn);
    }

    let theme_btn = button(text(format!("Theme: {}", app.app_theme().label())).size(12))
        .on_press(Message::ToggleTheme)
        .style(iced::widget::button::text);

    column![scrollable(stories).height(Length::Fill), theme_btn]
        .spacing(10)
        .padding(15)
        .width(Length::Fixed(180.0))
        .into()
}

fn story_panel<'a>(app: &'a Storybook, arc: &'a ArcSlider) -> Element<'a, Message> {
    let style = app.slider_style();
    let name = app.selected_story().map(|s| s.name.as_str()).unwrap_or_default();

    let header = column![
        text(name).size(24),
        text(arc.label().to_string()).size(14).style(muted),
    ]
    .spacing(4);

    let widget = container(ArcSliderWidget::new(arc, style))
        .padding(20)
        .style(panel);

    let content = column![
        header,
        widget,
        range_input(arc, &style),
        details(arc),
        rule::horizontal(1),
        host_controls(app),
        last_event(app),
    ]
    .spacing(15)
    .padding(20);

    container(scrollable(content))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Linear input mirroring the arc, for keyboard and assistive use.
fn range_input<'a>(arc: &'a ArcSlider, style: &ArcSliderStyle) -> Element<'a, Message> {
    let input = arc.scene().input;
    let id = arc.id().clone();

    slider(input.min..=input.max, input.value, move |value| {
        Message::InputChanged(id.clone(), value)
    })
    .step(input.step)
    .width(Length::Fixed(style.canvas_size().width))
    .into()
}

fn details(arc: &ArcSlider) -> Element<'_, Message> {
    let range = arc.range();
    let (color1, color2) = arc.colors();

    let mut info = row![
        text(format!("Value: {}", arc.display_value())).size(14),
        text(format!(
            "Range: {} to {}, step {}",
            range.min(),
            range.max(),
            range.step()
        ))
        .size(14)
        .style(muted),
        text(format!("Colors: {} to {}", color1.to_hex(), color2.to_hex()))
            .size(14)
            .style(muted),
    ]
    .spacing(20);

    if arc.is_disabled() {
        info = info.push(text("Disabled").size(14).style(danger));
    }

    info.into()
}

fn host_controls(app: &Storybook) -> Element<'_, Message> {
    let value_input = text_input("External value", app.external_input())
        .on_input(Message::ExternalValueChanged)
        .on_submit(Message::ApplyExternalValue)
        .padding(8)
        .width(Length::Fixed(160.0));

    let set_button = button(text("Set value").size(14))
        .on_press(Message::ApplyExternalValue)
        .style(iced::widget::button::primary);

    let export_button = button(text("Export SVG").size(14))
        .on_press(Message::ExportSvg)
        .style(iced::widget::button::secondary);

    let controls = row![value_input, set_button, export_button]
        .spacing(10)
        .align_y(Alignment::Center);

    match app.status() {
        Some(status) => column![controls, text(status.to_string()).size(13).style(danger)]
            .spacing(6)
            .into(),
        None => controls.into(),
    }
}

fn last_event(app: &Storybook) -> Element<'_, Message> {
    let content = match app.last_event() {
        Some(event) => format!(
            "Last change: {} = {} ({})",
            event.id, event.value, event.origin
        ),
        None => "No changes yet".to_string(),
    };

    text(content).size(13).style(muted).into()
}

fn muted(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(colors(theme).text_muted()),
    }
}

fn danger(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(colors(theme).danger()),
    }
}
