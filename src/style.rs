use egui::Color32;
use serde::{Deserialize, Serialize};

pub const DEFAULT_STROKE_WIDTH: f32 = 1.0;

/// The fixed set of colors offered by the Pen, Brush and Background menus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NamedColor {
    Blue,
    Green,
    Red,
    White,
    LightGray,
    Black,
}

impl NamedColor {
    pub const ALL: [NamedColor; 6] = [
        NamedColor::Blue,
        NamedColor::Green,
        NamedColor::Red,
        NamedColor::White,
        NamedColor::LightGray,
        NamedColor::Black,
    ];

    pub fn color32(self) -> Color32 {
        match self {
            NamedColor::Blue => Color32::BLUE,
            NamedColor::Green => Color32::GREEN,
            NamedColor::Red => Color32::RED,
            NamedColor::White => Color32::WHITE,
            NamedColor::LightGray => Color32::LIGHT_GRAY,
            NamedColor::Black => Color32::BLACK,
        }
    }

    /// Menu label
    pub fn label(self) -> &'static str {
        match self {
            NamedColor::Blue => "Blue",
            NamedColor::Green => "Green",
            NamedColor::Red => "Red",
            NamedColor::White => "White",
            NamedColor::LightGray => "Light Gray",
            NamedColor::Black => "Black",
        }
    }
}

/// Outline style of a shape (the "pen")
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Color32,
    pub width: f32,
}

impl StrokeStyle {
    pub fn new(color: Color32, width: f32) -> Self {
        Self { color, width }
    }

    pub fn named(color: NamedColor, width: f32) -> Self {
        Self::new(color.color32(), width)
    }

    pub fn to_egui(self) -> egui::Stroke {
        egui::Stroke::new(self.width, self.color)
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::named(NamedColor::Black, DEFAULT_STROKE_WIDTH)
    }
}

/// Interior style of a shape (the "brush")
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillStyle {
    pub color: Color32,
}

impl FillStyle {
    pub fn new(color: Color32) -> Self {
        Self { color }
    }

    pub fn named(color: NamedColor) -> Self {
        Self::new(color.color32())
    }
}

impl Default for FillStyle {
    fn default() -> Self {
        Self::named(NamedColor::Green)
    }
}
