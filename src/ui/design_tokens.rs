// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Design constants shared by the dice game screens.

## Organization

- **Palette**: Base colors
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes (face boxes, dice image)
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_dice::ui::design_tokens::{palette, sizing, spacing};

let gap = spacing::LG; // 24px between face boxes
let face_box = sizing::FACE_BOX; // 72px square
assert!(face_box > gap);
let _ = palette::BLACK;
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
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

// ============================================================================
// Spacing Scale (8px grid)
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 8.0; // 1 unit
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    /// Side of one selectable number box.
    pub const FACE_BOX: f32 = 72.0;

    /// Side of the rendered dice image.
    pub const DICE_IMAGE: f32 = 250.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Face numbers, selector and dice labels.
    pub const TITLE_LG: f32 = 24.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Outline of a number box.
    pub const WIDTH_SM: f32 = 1.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::MD > spacing::XS);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::XXL > spacing::XL);

    // Sizing validation
    assert!(sizing::DICE_IMAGE > sizing::FACE_BOX);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
        assert_eq!(spacing::XXL, spacing::LG * 2.0);
    }

    #[test]
    fn face_box_is_a_multiple_of_the_grid() {
        assert_eq!(sizing::FACE_BOX % spacing::XS, 0.0);
    }
}
