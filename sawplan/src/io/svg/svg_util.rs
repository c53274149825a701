use anyhow::ensure;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use svg::node::element::Path;
use svg::node::element::path::Data;

/// Number of distinct part colors before the palette wraps around
pub const N_PALETTE: usize = 10;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgPlanTheme,
    ///Draw the id of each part on top of it
    #[serde(default = "default_true")]
    pub part_labels: bool,
    ///Draw the side offcut of each row and the remnant of the block
    #[serde(default = "default_true")]
    pub draw_waste: bool,
}

fn default_true() -> bool {
    true
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgPlanTheme::default(),
            part_labels: true,
            draw_waste: true,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgPlanTheme {
    pub stroke_width_multiplier: f32,
    pub stock_fill: Color,
    pub kerf_fill: Color,
    pub waste_fill: Color,
    pub remnant_fill: Color,
    pub part_palette: [Color; N_PALETTE],
}

impl Default for SvgPlanTheme {
    fn default() -> Self {
        SvgPlanTheme::WORKSHOP
    }
}

impl SvgPlanTheme {
    pub const WORKSHOP: SvgPlanTheme = SvgPlanTheme {
        stroke_width_multiplier: 2.0,
        stock_fill: Color(0xF5, 0xE6, 0xC8),
        kerf_fill: Color(0x1A, 0x1A, 0x1A),
        waste_fill: Color(0xD6, 0x27, 0x28),
        remnant_fill: Color(0x1F, 0x77, 0xB4),
        part_palette: [
            Color(0x1F, 0x77, 0xB4), // BLUE
            Color(0xFF, 0x7F, 0x0E), // ORANGE
            Color(0x2C, 0xA0, 0x2C), // GREEN
            Color(0xD6, 0x27, 0x28), // RED
            Color(0x94, 0x67, 0xBD), // PURPLE
            Color(0x8C, 0x56, 0x4B), // BROWN
            Color(0xE3, 0x77, 0xC2), // PINK
            Color(0x7F, 0x7F, 0x7F), // GRAY
            Color(0xBC, 0xBD, 0x22), // OLIVE
            Color(0x17, 0xBE, 0xCF), // CYAN
        ],
    };

    pub const GRAY: SvgPlanTheme = SvgPlanTheme {
        stroke_width_multiplier: 2.5,
        stock_fill: Color(0xD3, 0xD3, 0xD3),
        kerf_fill: Color(0x2D, 0x2D, 0x2D),
        waste_fill: Color(0x63, 0x63, 0x63),
        remnant_fill: Color(0xA8, 0xA8, 0xA8),
        part_palette: [
            Color(0x7A, 0x7A, 0x7A),
            Color(0x7A, 0x7A, 0x7A),
            Color(0x7A, 0x7A, 0x7A),
            Color(0x7A, 0x7A, 0x7A),
            Color(0x7A, 0x7A, 0x7A),
            Color(0x7A, 0x7A, 0x7A),
            Color(0x7A, 0x7A, 0x7A),
            Color(0x7A, 0x7A, 0x7A),
            Color(0x7A, 0x7A, 0x7A),
            Color(0x7A, 0x7A, 0x7A),
        ],
    };

    /// Fill color for a part, cycling through the palette by id.
    /// Ids start at 1, so id 1 maps to the first palette entry.
    pub fn part_fill(&self, part_id: u64) -> Color {
        self.part_palette[(part_id as usize + N_PALETTE - 1) % N_PALETTE]
    }
}

pub fn change_brightness(color: Color, fraction: f32) -> Color {
    let Color(r, g, b) = color;

    let r = (r as f32 * fraction) as u8;
    let g = (g as f32 * fraction) as u8;
    let b = (b as f32 * fraction) as u8;
    Color(r, g, b)
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Color(u8, u8, u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl FromStr for Color {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        // The length guard also keeps the slices below on char boundaries
        ensure!(
            hex.len() == 6 && hex.is_ascii(),
            "expected a color in #RRGGBB format, got {s:?}"
        );
        let r = u8::from_str_radix(&hex[0..2], 16)?;
        let g = u8::from_str_radix(&hex[2..4], 16)?;
        let b = u8::from_str_radix(&hex[4..6], 16)?;
        Ok(Color(r, g, b))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<<S as Serializer>::Ok, <S as Serializer>::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&*format!("{self}"))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as Deserializer<'de>>::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::from_str(&s).map_err(serde::de::Error::custom)
    }
}

pub fn rect_data(x: f32, y: f32, width: f32, height: f32) -> Data {
    Data::new()
        .move_to((x, y))
        .line_to((x + width, y))
        .line_to((x + width, y + height))
        .line_to((x, y + height))
        .close()
}

pub fn data_to_path(data: Data, params: &[(&str, &str)]) -> Path {
    let mut path = Path::new();
    for param in params {
        path = path.set(param.0, param.1)
    }
    path.set("d", data)
}
