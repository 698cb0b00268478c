//! Conversions between the RGB and HSL notations.
//!
//! Both directions round into the integer domain of the target notation.
//! Converting to HSL quantizes saturation and lightness to whole percents, a
//! step worth about 2.5 channel units, so a round trip through HSL can move a
//! channel by a few units near the lightness extremes; lightness itself
//! always survives the trip. Hex→RGB→hex is exact.

use crate::color::{Component, Components};
use crate::{Hsl, Rgb};

impl Rgb {
    /// Convert this color from the RGB notation to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        let Components(hue, saturation, lightness) = util::rgb_to_hsl(&Components(
            Component::from(self.red) / 255.0,
            Component::from(self.green) / 255.0,
            Component::from(self.blue) / 255.0,
        ));

        Hsl::new(
            hue.round() as u16,
            (saturation * 100.0).round() as u8,
            (lightness * 100.0).round() as u8,
        )
    }
}

impl Hsl {
    /// Convert this color from the HSL notation to the RGB notation.
    pub fn to_rgb(&self) -> Rgb {
        let channels = util::hsl_to_rgb(&Components(
            Component::from(self.hue),
            Component::from(self.saturation) / 100.0,
            Component::from(self.lightness) / 100.0,
        ));

        let Components(red, green, blue) = channels.map(|v| (v * 255.0).round());
        Rgb::new(red as u8, green as u8, blue as u8)
    }
}

mod util {
    use crate::color::Components;

    /// Convert RGB channel fractions to a hue in degrees plus saturation and
    /// lightness fractions.
    pub fn rgb_to_hsl(from: &Components) -> Components {
        let Components(red, green, blue) = *from;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);

        let lightness = (max + min) / 2.0;
        let delta = max - min;

        if delta == 0.0 {
            // Achromatic: hue and saturation carry no information.
            return Components(0.0, 0.0, lightness);
        }

        let saturation = if lightness > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        let hue = 60.0
            * if max == red {
                ((green - blue) / delta).rem_euclid(6.0)
            } else if max == green {
                (blue - red) / delta + 2.0
            } else {
                (red - green) / delta + 4.0
            };

        Components(hue, saturation, lightness)
    }

    /// Convert a hue in degrees plus saturation and lightness fractions to
    /// RGB channel fractions.
    pub fn hsl_to_rgb(from: &Components) -> Components {
        let Components(hue, saturation, lightness) = *from;

        let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let x = chroma * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
        let m = lightness - chroma / 2.0;

        let (red, green, blue) = if hue < 60.0 {
            (chroma, x, 0.0)
        } else if hue < 120.0 {
            (x, chroma, 0.0)
        } else if hue < 180.0 {
            (0.0, chroma, x)
        } else if hue < 240.0 {
            (0.0, x, chroma)
        } else if hue < 300.0 {
            (x, 0.0, chroma)
        } else {
            (chroma, 0.0, x)
        };

        Components(red, green, blue).map(|v| v + m)
    }
}

#[cfg(test)]
mod tests {
    use super::util;
    use crate::assert_component_eq;
    use crate::color::{Component, Components};
    use crate::{Hsl, Rgb};

    #[test]
    fn rgb_to_hsl_matches_known_values() {
        #[rustfmt::skip]
        const TESTS: &[(u8, u8, u8, u16, u8, u8)] = &[
            (255,  87,  51,  11, 100,  60),
            (  0,   0,   0,   0,   0,   0),
            (255, 255, 255,   0,   0, 100),
            (  0, 255,   0, 120, 100,  50),
            (128, 128, 128,   0,   0,  50),
            (200, 100,  50,  20,  60,  49),
            ( 13,  27, 242, 236,  90,  50),
        ];

        for &(red, green, blue, hue, saturation, lightness) in TESTS {
            assert_eq!(
                Rgb::new(red, green, blue).to_hsl(),
                Hsl::new(hue, saturation, lightness),
                "rgb({red}, {green}, {blue})"
            );
        }
    }

    #[test]
    fn hsl_to_rgb_matches_known_values() {
        #[rustfmt::skip]
        const TESTS: &[(u16, u8, u8, u8, u8, u8)] = &[
            (  0, 100,  50, 255,   0,   0),
            (120, 100,  50,   0, 255,   0),
            (240, 100,  50,   0,   0, 255),
            (  0,   0,  50, 128, 128, 128),
            ( 11, 100,  60, 255,  88,  51),
            (300, 100,  25, 128,   0, 128),
            ( 39, 100,  50, 255, 166,   0),
            (  0,   0,   0,   0,   0,   0),
            (  0,   0, 100, 255, 255, 255),
            (216,  90,  50,  13, 105, 242),
        ];

        for &(hue, saturation, lightness, red, green, blue) in TESTS {
            assert_eq!(
                Hsl::new(hue, saturation, lightness).to_rgb(),
                Rgb::new(red, green, blue),
                "hsl({hue}, {saturation}%, {lightness}%)"
            );
        }
    }

    #[test]
    fn hue_that_rounds_to_a_full_turn_wraps_to_zero() {
        assert_eq!(Rgb::new(255, 0, 1).to_hsl(), Hsl::new(0, 100, 50));
    }

    #[test]
    fn round_trip_through_hsl_stays_close() {
        for red in (0..=255).step_by(5) {
            for green in (0..=255).step_by(5) {
                for blue in (0..=255).step_by(5) {
                    let rgb = Rgb::new(red as u8, green as u8, blue as u8);
                    let back = rgb.to_hsl().to_rgb();
                    for (a, b) in [
                        (rgb.red, back.red),
                        (rgb.green, back.green),
                        (rgb.blue, back.blue),
                    ] {
                        assert!(
                            (i16::from(a) - i16::from(b)).abs() <= 3,
                            "{rgb:?} came back as {back:?}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn round_trip_through_rgb_preserves_lightness() {
        for hue in (0..360).step_by(3) {
            for saturation in 1..=100 {
                for lightness in 1..100 {
                    let hsl = Hsl::new(hue, saturation, lightness);
                    let rgb = hsl.to_rgb();
                    if rgb.red == rgb.green && rgb.green == rgb.blue {
                        // Collapsed to a gray; hue and saturation are gone.
                        continue;
                    }
                    assert_eq!(rgb.to_hsl().lightness, lightness, "{hsl:?} via {rgb:?}");
                }
            }
        }
    }

    #[test]
    fn fractional_hsl_from_rgb() {
        let hsl = util::rgb_to_hsl(&Components(0.823529, 0.411765, 0.117647));
        assert_component_eq!(hsl.0, 25.0);
        assert_component_eq!(hsl.1, 0.75);
        assert_component_eq!(hsl.2, 0.470588);
    }

    #[test]
    fn fractional_rgb_from_hsl() {
        let rgb = util::hsl_to_rgb(&Components(25.0, 0.75, 0.470588));
        assert_component_eq!(rgb.0, 0.823529);
        assert_component_eq!(rgb.1, 0.411765);
        assert_component_eq!(rgb.2, 0.117647);
    }

    #[test]
    fn achromatic_channels_divide_nothing() {
        let hsl = util::rgb_to_hsl(&Components(0.5, 0.5, 0.5));
        assert_component_eq!(hsl.0, 0.0);
        assert_component_eq!(hsl.1, 0.0);
        assert_component_eq!(hsl.2, 0.5);
    }
}
