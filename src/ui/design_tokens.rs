// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Design tokens for toasts and dialogs, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (4px steps)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_notify::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let backdrop = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.165, 0.165, 0.165); // #2a2a2a
    pub const GRAY_800: Color = Color::from_rgb(0.2, 0.2, 0.2); // #333
    pub const GRAY_700: Color = Color::from_rgb(0.235, 0.235, 0.235); // #3c3c3c
    pub const GRAY_500: Color = Color::from_rgb(0.4, 0.4, 0.4); // #666
    pub const GRAY_400: Color = Color::from_rgb(0.6, 0.6, 0.6); // #999
    pub const GRAY_300: Color = Color::from_rgb(0.69, 0.69, 0.69); // #b0b0b0
    pub const GRAY_200: Color = Color::from_rgb(0.878, 0.878, 0.878); // #e0e0e0
    pub const GRAY_100: Color = Color::from_rgb(0.961, 0.961, 0.961); // #f5f5f5

    // Brand accent (confirm buttons)
    pub const CLAY_500: Color = Color::from_rgb(0.757, 0.482, 0.42); // #c17b6b
    pub const CLAY_600: Color = Color::from_rgb(0.659, 0.42, 0.357); // #a86b5b

    // Semantic colors
    pub const SUCCESS_500: Color = Color::from_rgb(0.298, 0.686, 0.314); // #4caf50
    pub const ERROR_500: Color = Color::from_rgb(0.957, 0.263, 0.212); // #f44336
    pub const WARNING_500: Color = Color::from_rgb(1.0, 0.596, 0.0); // #ff9800
    pub const INFO_500: Color = Color::from_rgb(0.129, 0.588, 0.953); // #2196f3
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const TINT: f32 = 0.1;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OPAQUE: f32 = 1.0;

    /// Surface background - Toast cards over page content
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 20.0;
    pub const XL: f32 = 24.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_MD: f32 = 20.0;
    pub const ICON_XL: f32 = 48.0;

    pub const CLOSE_BUTTON: f32 = 24.0;

    pub const PROGRESS_HEIGHT: f32 = 3.0;

    pub const TOAST_WIDTH: f32 = 400.0;
    pub const DIALOG_WIDTH: f32 = 400.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Dialog title
    pub const TITLE_MD: f32 = 18.0;

    /// Toast title, dialog body and button labels
    pub const BODY: f32 = 14.0;

    /// Toast message
    pub const BODY_SM: f32 = 13.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;

    /// Toast accent border
    pub const WIDTH_ACCENT: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 12.0;
    pub const LG: f32 = 16.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// Toast card shadow.
    pub const MD: Shadow = Shadow {
        color: Color {
            a: 0.15,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 32.0,
    };

    /// Dialog card shadow.
    pub const LG: Shadow = Shadow {
        color: Color {
            a: 0.3,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 20.0 },
        blur_radius: 60.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::XL > spacing::LG);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(sizing::ICON_XL > sizing::ICON_MD);

    assert!(typography::TITLE_MD > typography::BODY);
    assert!(typography::BODY > typography::BODY_SM);

    assert!(border::WIDTH_ACCENT > border::WIDTH_SM);
};
