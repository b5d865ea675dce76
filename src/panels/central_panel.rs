use crate::DrawApp;
use crate::renderer::PainterTarget;

const STATUS_TEXT: &str = "Use the mouse to draw a shape.";

pub fn status_bar(app: &DrawApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(STATUS_TEXT);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let controller = app.controller();
                ui.label(format!(
                    "{} shapes | {}",
                    controller.shapes().len(),
                    controller.operation().name()
                ));
            });
        });
    });
}

pub fn central_panel(app: &mut DrawApp, ctx: &egui::Context) {
    let frame = egui::Frame::none().fill(app.background().color32());

    egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::drag());

        // Presses on an open menu that overlaps the canvas must not start a shape
        let press_area = if response.hovered() {
            response.rect
        } else {
            egui::Rect::NOTHING
        };
        app.handle_input(ctx, press_area);

        let mut target = PainterTarget::new(&painter);
        app.controller().paint(&mut target);
    });
}
