//! Theme-aware colors for the storybook and the slider chrome.

use iced::widget::container;
use iced::{Border, Color, Theme};

use crate::config::AppTheme;
use crate::view::arc_slider::ArcSliderStyle;

/// Map the configured theme to an iced theme.
pub fn iced_theme(theme: AppTheme) -> Theme {
    match theme {
        AppTheme::Dark => Theme::Dark,
        AppTheme::Light => Theme::Light,
    }
}

/// Semantic colors read from the theme's extended palette.
pub struct ThemeColors<'a> {
    theme: &'a Theme,
}

impl<'a> ThemeColors<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    fn palette(&self) -> &iced::theme::palette::Extended {
        self.theme.extended_palette()
    }

    pub fn background(&self) -> Color {
        self.palette().background.base.color
    }

    /// Sidebar and panel surfaces.
    pub fn background_weak(&self) -> Color {
        self.palette().background.weak.color
    }

    pub fn text(&self) -> Color {
        self.palette().background.base.text
    }

    pub fn text_muted(&self) -> Color {
        let text = self.text();
        let bg = self.background();
        Color::from_rgb(
            text.r * 0.6 + bg.r * 0.4,
            text.g * 0.6 + bg.g * 0.4,
            text.b * 0.6 + bg.b * 0.4,
        )
    }

    pub fn danger(&self) -> Color {
        self.palette().danger.base.color
    }

    pub fn border(&self) -> Color {
        if self.is_dark() {
            Color::from_rgb(0.25, 0.25, 0.3)
        } else {
            Color::from_rgb(0.8, 0.8, 0.82)
        }
    }

    /// Value bubble background: inverted against the page.
    pub fn bubble(&self) -> Color {
        if self.is_dark() {
            Color::from_rgb8(0xF4, 0xF4, 0xF6)
        } else {
            Color::from_rgb8(0x2B, 0x2D, 0x33)
        }
    }

    pub fn bubble_text(&self) -> Color {
        if self.is_dark() {
            Color::from_rgb8(0x1C, 0x1D, 0x21)
        } else {
            Color::WHITE
        }
    }

    pub fn thumb_ring(&self) -> Color {
        if self.is_dark() {
            Color::from_rgb8(0xE6, 0xE6, 0xEA)
        } else {
            Color::WHITE
        }
    }

    pub fn is_dark(&self) -> bool {
        self.palette().is_dark
    }
}

pub fn colors(theme: &Theme) -> ThemeColors<'_> {
    ThemeColors::new(theme)
}

/// Slider metrics with colors taken from `theme`.
pub fn slider_style(theme: &Theme) -> ArcSliderStyle {
    let colors = colors(theme);
    ArcSliderStyle {
        bubble_color: colors.bubble(),
        bubble_text_color: colors.bubble_text(),
        thumb_ring_color: colors.thumb_ring(),
        ..ArcSliderStyle::default()
    }
}

/// Bordered panel around a story.
pub fn panel(theme: &Theme) -> container::Style {
    let colors = colors(theme);
    container::Style {
        background: Some(colors.background_weak().into()),
        border: Border {
            color: colors.border(),
            width: 1.0,
            radius: 8.0.into(),
        },
        ..container::Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bubble_contrasts_with_theme() {
        let dark = colors(&Theme::Dark);
        let light = colors(&Theme::Light);

        assert!(dark.is_dark());
        assert!(!light.is_dark());
        assert_ne!(dark.bubble(), light.bubble());
        assert_ne!(dark.bubble(), dark.bubble_text());
    }

    #[test]
    fn test_slider_style_follows_theme() {
        let style = slider_style(&Theme::Light);

        assert_eq!(style.bubble_text_color, Color::WHITE);
        assert_eq!(style.arc_width, ArcSliderStyle::default().arc_width);
    }

    #[test]
    fn test_iced_theme_mapping() {
        assert_eq!(iced_theme(AppTheme::Dark), Theme::Dark);
        assert_eq!(iced_theme(AppTheme::Light), Theme::Light);
    }
}
