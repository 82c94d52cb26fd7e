use crate::render::Color;

/// High-contrast series palette, cycled by series index.
pub const HIGH_CONTRAST_PALETTE: [Color; 12] = [
    Color::rgb(0.122, 0.467, 0.706),
    Color::rgb(1.000, 0.498, 0.055),
    Color::rgb(0.173, 0.627, 0.173),
    Color::rgb(0.839, 0.153, 0.157),
    Color::rgb(0.580, 0.404, 0.741),
    Color::rgb(0.549, 0.337, 0.294),
    Color::rgb(0.890, 0.467, 0.761),
    Color::rgb(0.498, 0.498, 0.498),
    Color::rgb(0.737, 0.741, 0.133),
    Color::rgb(0.090, 0.745, 0.812),
    Color::rgb(0.000, 0.318, 0.290),
    Color::rgb(0.502, 0.000, 0.502),
];

/// Number of base hues assigned to entities in the default palette.
pub const ENTITY_BASE_COLORS: usize = 9;

/// Shades per entity, from full hue to fully mixed into the background.
pub const BRIGHTNESS_LEVELS_PER_ENTITY: usize = 8;

#[must_use]
pub fn high_contrast_color(series_index: usize) -> Color {
    HIGH_CONTRAST_PALETTE[series_index % HIGH_CONTRAST_PALETTE.len()]
}

/// Entity hue shaded by parameter position: level 0 is the pure hue and each
/// further parameter mixes more of `background` in.
#[must_use]
pub fn entity_parameter_color(
    entity_index: usize,
    parameter_index: usize,
    background: Color,
) -> Color {
    let base = HIGH_CONTRAST_PALETTE[entity_index % ENTITY_BASE_COLORS];
    let level = parameter_index % BRIGHTNESS_LEVELS_PER_ENTITY;
    let weight = 1.0 - level as f64 / (BRIGHTNESS_LEVELS_PER_ENTITY - 1) as f64;
    base.mix(background, weight)
}
