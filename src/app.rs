use log::info;
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::input::InputHandler;
use crate::interaction::InteractionController;
use crate::panels::{self, MenuChoice};
use crate::shape::ShapeKind;
use crate::style::{FillStyle, NamedColor, StrokeStyle};
use crate::tools::ToolChange;

/// Menu selections that survive a restart. Shapes themselves are not saved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SavedTools {
    pub kind: ShapeKind,
    pub pen: NamedColor,
    pub brush: NamedColor,
    pub background: NamedColor,
}

impl Default for SavedTools {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

impl SavedTools {
    fn from_config(config: &AppConfig) -> Self {
        Self {
            kind: config.initial_kind,
            pen: config.pen,
            brush: config.brush,
            background: config.background,
        }
    }
}

pub struct DrawApp {
    controller: InteractionController,
    input: InputHandler,
    tools: SavedTools,
    stroke_width: f32,
}

impl DrawApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let saved = cc
            .storage
            .and_then(|storage| eframe::get_value::<SavedTools>(storage, eframe::APP_KEY));
        if saved.is_some() {
            info!("Restored tool selection from storage");
        }
        Self::with_tools(config, saved)
    }

    /// Build the app without an eframe context, optionally overriding the
    /// configured tools with a previously saved selection.
    pub fn with_tools(config: AppConfig, saved: Option<SavedTools>) -> Self {
        let tools = saved.unwrap_or_else(|| SavedTools::from_config(&config));
        let overridden = AppConfig {
            initial_kind: tools.kind,
            pen: tools.pen,
            brush: tools.brush,
            background: tools.background,
            ..config
        };

        Self {
            controller: InteractionController::new(overridden.tool_settings()),
            input: InputHandler::new(),
            tools,
            stroke_width: overridden.stroke_width,
        }
    }

    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    pub fn tools(&self) -> SavedTools {
        self.tools
    }

    pub fn background(&self) -> NamedColor {
        self.tools.background
    }

    /// Apply a menu selection and forward it to the controller
    pub fn choose(&mut self, choice: MenuChoice, ctx: &egui::Context) {
        let change = match choice {
            MenuChoice::Shape(kind) => {
                self.tools.kind = kind;
                ToolChange::Kind(kind)
            }
            MenuChoice::Pen(color) => {
                self.tools.pen = color;
                ToolChange::Stroke(StrokeStyle::named(color, self.stroke_width))
            }
            MenuChoice::Brush(color) => {
                self.tools.brush = color;
                ToolChange::Fill(FillStyle::named(color))
            }
            MenuChoice::Background(color) => {
                self.tools.background = color;
                ToolChange::Background(FillStyle::named(color))
            }
        };
        self.controller.tool_changed(change, ctx);
    }

    /// Feed this frame's pointer input to the controller
    pub fn handle_input(&mut self, ctx: &egui::Context, press_area: egui::Rect) {
        for event in self.input.process_input(ctx, press_area) {
            self.controller.handle_pointer_event(event, ctx);
        }
    }
}

impl eframe::App for DrawApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.tools);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::menu_bar(self, ctx);
        panels::status_bar(self, ctx);
        panels::central_panel(self, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saved_tools_override_config() {
        let saved = SavedTools {
            kind: ShapeKind::Ellipse,
            pen: NamedColor::Red,
            brush: NamedColor::White,
            background: NamedColor::Black,
        };
        let app = DrawApp::with_tools(AppConfig::default(), Some(saved));

        let settings = app.controller().settings();
        assert_eq!(settings.current_kind(), ShapeKind::Ellipse);
        assert_eq!(settings.current_stroke().color, NamedColor::Red.color32());
        assert_eq!(settings.current_fill().color, NamedColor::White.color32());
        assert_eq!(app.background(), NamedColor::Black);
    }

    #[test]
    fn test_menu_choices_reach_settings() {
        let ctx = egui::Context::default();
        let mut app = DrawApp::with_tools(AppConfig::default(), None);

        app.choose(MenuChoice::Shape(ShapeKind::Rectangle), &ctx);
        app.choose(MenuChoice::Pen(NamedColor::Blue), &ctx);
        app.choose(MenuChoice::Brush(NamedColor::Red), &ctx);
        app.choose(MenuChoice::Background(NamedColor::LightGray), &ctx);

        let settings = app.controller().settings();
        assert_eq!(settings.current_kind(), ShapeKind::Rectangle);
        assert_eq!(settings.current_stroke(), StrokeStyle::named(NamedColor::Blue, 1.0));
        assert_eq!(settings.current_fill(), FillStyle::named(NamedColor::Red));
        assert_eq!(app.background(), NamedColor::LightGray);
        assert_eq!(app.tools().kind, ShapeKind::Rectangle);
    }
}
