// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::widget::button::Status;
    use iced::Background;
    use iced_notify::presenter::Presenter;
    use iced_notify::ui::design_tokens::{opacity, palette, sizing, spacing};
    use iced_notify::ui::notifications::Category;
    use iced_notify::ui::styles::{self, StyleRegistry, Stylesheet};
    use iced_notify::ui::theming::{ColorScheme, ThemeMode};

    #[test]
    fn all_style_functions_are_callable() {
        let surfaces = Stylesheet::new().surfaces(false);

        let _ = styles::toast::card(&surfaces, palette::INFO_500, 1.0);
        let _ = styles::toast::progress_track(&surfaces, 1.0);
        let _ = styles::toast::progress_bar(palette::INFO_500, 1.0);
        let _ = styles::toast::close_button(&surfaces, Status::Pressed, 1.0);
        let _ = styles::dialog::backdrop(&surfaces, 1.0);
        let _ = styles::dialog::card(&surfaces, 1.0);
        let _ = styles::dialog::primary_button(&surfaces, Status::Disabled, 1.0);
        let _ = styles::dialog::secondary_button(&surfaces, Status::Active, 1.0);
    }

    #[test]
    fn design_tokens_are_accessible() {
        assert!(spacing::MD > 0.0);
        assert!(sizing::TOAST_WIDTH > 0.0);
        assert!(opacity::OVERLAY_MEDIUM > 0.0);
        let _ = palette::WHITE;
    }

    #[test]
    fn category_accents_match_palette() {
        assert_eq!(Category::Success.color(), palette::SUCCESS_500);
        assert_eq!(Category::Error.color(), palette::ERROR_500);
        assert_eq!(Category::Warning.color(), palette::WARNING_500);
        assert_eq!(Category::Info.color(), palette::INFO_500);
    }

    #[test]
    fn toast_card_takes_category_accent() {
        let surfaces = Stylesheet::new().surfaces(true);
        for category in Category::ALL {
            let style = styles::toast::card(&surfaces, category.color(), 1.0);
            assert_eq!(style.border.color, category.color());
        }
    }

    #[test]
    fn hidden_dialog_has_invisible_backdrop() {
        let surfaces = Stylesheet::new().surfaces(false);
        let style = styles::dialog::backdrop(&surfaces, 0.0);
        assert_eq!(
            style.background,
            Some(Background::Color(iced::Color {
                a: 0.0,
                ..ColorScheme::light().overlay_background
            }))
        );
    }

    #[test]
    fn registry_builds_sheet_once() {
        let mut registry = StyleRegistry::new();
        for _ in 0..3 {
            registry.ensure();
        }
        assert_eq!(registry.registrations(), 1);
    }

    #[test]
    fn presenter_registers_styles_once() {
        let mut presenter = Presenter::default();
        presenter.info("first", None);
        presenter.info("second", None);
        let _pending = presenter.confirm("third?");
        assert_eq!(presenter.styles_registered(), 1);
    }

    #[test]
    fn theme_modes_resolve() {
        assert!(ThemeMode::Dark.is_dark());
        assert!(!ThemeMode::Light.is_dark());
    }
}
