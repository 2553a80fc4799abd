//! Display colors for stars and planets

use super::scale::PlanetType;
use super::units::GLOWING_TEMPERATURE_KELVIN;

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    // Solar system analogues for cool planets
    pub const MERCURY: Color = Color::rgb(177, 173, 173);
    pub const EARTH: Color = Color::rgb(6, 79, 64);
    pub const NEPTUNE: Color = Color::rgb(68, 102, 127);
    pub const JUPITER: Color = Color::rgb(209, 167, 127);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// `#rrggbb`, ignoring alpha
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// CSS color string: hex when opaque, `rgba(...)` otherwise
    pub fn to_css(&self) -> String {
        if self.is_opaque() {
            self.to_hex()
        } else {
            format!(
                "rgba({}, {}, {}, {:.2})",
                self.r,
                self.g,
                self.b,
                self.a as f64 / 255.0
            )
        }
    }
}

impl From<Color> for egui::Color32 {
    fn from(color: Color) -> Self {
        egui::Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
    }
}

/// Perceived color of a blackbody at `kelvin`.
///
/// Closed-form fit by Tanner Helland, as packaged in neilbartlett/color-temperature.
/// The coefficients are kept verbatim so output matches the published fit exactly.
pub fn color_from_temperature(kelvin: u32) -> Color {
    let t = kelvin as f64 / 100.0;

    let red = if t < 66.0 {
        255.0
    } else {
        let x = t - 55.0;
        351.97690566805693 + 0.114206453784165 * x - 40.25366309332127 * x.ln()
    };

    let green = if t < 66.0 {
        let x = t - 2.0;
        -155.25485562709179 - 0.44596950469579133 * x + 104.49216199393888 * x.ln()
    } else {
        let x = t - 50.0;
        325.4494125711974 + 0.07943456536662342 * x - 28.0852963507957 * x.ln()
    };

    let blue = if t >= 66.0 {
        255.0
    } else if t <= 20.0 {
        0.0
    } else {
        let x = t - 10.0;
        -254.76935184120902 + 0.8274096064007395 * x + 115.67994401066147 * x.ln()
    };

    Color::rgb(to_channel(red), to_channel(green), to_channel(blue))
}

/// Round to the nearest integer and clamp into a color channel
fn to_channel(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 255.0) as u8
}

/// Palette entry for a cool planet, by analogy with solar system bodies of its class
pub fn type_color(planet_type: PlanetType) -> Color {
    match planet_type {
        PlanetType::SubEarth => Color::MERCURY,
        PlanetType::Terrestrial | PlanetType::SuperEarth => Color::EARTH,
        PlanetType::IceGiant => Color::NEPTUNE,
        PlanetType::GasGiant => Color::JUPITER,
    }
}

/// Display color of a planet.
///
/// Hot planets glow and are colored like a star; cooler ones, whose temperature says
/// nothing visible, get their size class color.
pub fn planet_color(temperature: u32, earth_radii: f64) -> Color {
    if temperature > GLOWING_TEMPERATURE_KELVIN {
        return color_from_temperature(temperature);
    }
    type_color(PlanetType::from_earth_radii(earth_radii))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sun_color() {
        assert_eq!(color_from_temperature(5778), Color::rgb(255, 240, 232));
    }

    #[test]
    fn test_blackbody_reference_values() {
        assert_eq!(color_from_temperature(3000), Color::rgb(255, 180, 108));
        assert_eq!(color_from_temperature(6600), Color::rgb(255, 249, 255));
        assert_eq!(color_from_temperature(10000), Color::rgb(204, 220, 255));
    }

    #[test]
    fn test_blackbody_extremes_clamped() {
        // Channel formulas overshoot or undershoot at both ends
        assert_eq!(color_from_temperature(1000), Color::rgb(255, 58, 0));
        assert_eq!(color_from_temperature(40000), Color::rgb(156, 189, 255));
        assert_eq!(color_from_temperature(288), Color::rgb(255, 0, 0));

        // Below 200 K the green fit takes the log of a non-positive number
        assert_eq!(color_from_temperature(150), Color::rgb(255, 0, 0));
        assert_eq!(color_from_temperature(0), Color::rgb(255, 0, 0));
    }

    #[test]
    fn test_planet_color_hot_ignores_radius() {
        let blackbody = color_from_temperature(1500);
        assert_eq!(blackbody, Color::rgb(255, 107, 0));

        for earth_radii in [0.1, 0.75, 1.0, 2.0, 5.0, 8.0, 20.0] {
            assert_eq!(planet_color(1500, earth_radii), blackbody);
        }
    }

    #[test]
    fn test_planet_color_cool_uses_palette() {
        assert_eq!(planet_color(288, 0.5), Color::MERCURY);
        assert_eq!(planet_color(288, 1.0), Color::EARTH);
        assert_eq!(planet_color(288, 2.0), Color::EARTH);
        assert_eq!(planet_color(288, 4.0), Color::NEPTUNE);
        assert_eq!(planet_color(288, 11.2), Color::JUPITER);

        // Exactly 1000 K is not yet glowing
        assert_eq!(planet_color(1000, 1.0), Color::EARTH);
    }

    #[test]
    fn test_hex_and_css() {
        assert_eq!(Color::rgb(255, 240, 232).to_hex(), "#fff0e8");
        assert_eq!(Color::rgb(0, 195, 148).to_css(), "#00c394");
        assert_eq!(Color::BLACK.to_hex(), "#000000");
        assert_eq!(
            Color::rgba(255, 240, 240, 179).to_css(),
            "rgba(255, 240, 240, 0.70)"
        );
    }
}
