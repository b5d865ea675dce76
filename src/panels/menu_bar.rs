use crate::DrawApp;
use crate::shape::ShapeKind;
use crate::style::NamedColor;

/// A single item picked from one of the menus
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuChoice {
    Shape(ShapeKind),
    Pen(NamedColor),
    Brush(NamedColor),
    Background(NamedColor),
}

fn shape_hint(kind: ShapeKind) -> &'static str {
    match kind {
        ShapeKind::Line => "Select the line drawing tool.",
        ShapeKind::Ellipse => "Select the ellipse drawing tool.",
        ShapeKind::Rectangle => "Select the rectangle drawing tool.",
    }
}

pub fn menu_bar(app: &mut DrawApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            let tools = app.tools();

            ui.menu_button("Shape", |ui| {
                for kind in ShapeKind::ALL {
                    let clicked = ui
                        .selectable_label(tools.kind == kind, kind.name())
                        .on_hover_text(shape_hint(kind))
                        .clicked();
                    if clicked {
                        app.choose(MenuChoice::Shape(kind), ctx);
                        ui.close_menu();
                    }
                }
            });

            color_menu(ui, "Brush", "brush", tools.brush, |color| {
                app.choose(MenuChoice::Brush(color), ctx)
            });
            color_menu(ui, "Pen", "pen", tools.pen, |color| {
                app.choose(MenuChoice::Pen(color), ctx)
            });
            color_menu(ui, "Background", "background", tools.background, |color| {
                app.choose(MenuChoice::Background(color), ctx)
            });
        });
    });
}

fn color_menu(
    ui: &mut egui::Ui,
    title: &str,
    noun: &str,
    current: NamedColor,
    mut on_pick: impl FnMut(NamedColor),
) {
    ui.menu_button(title, |ui| {
        for color in NamedColor::ALL {
            let hint = format!("Select the {} {}.", color.label().to_lowercase(), noun);
            let clicked = ui
                .selectable_label(current == color, color.label())
                .on_hover_text(hint)
                .clicked();
            if clicked {
                log::info!("{} menu: {}", title, color.label());
                on_pick(color);
                ui.close_menu();
            }
        }
    });
}
