use crate::SketchApp;
use crate::command::Command;
use crate::tools::ToolKind;

pub fn tools_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(160.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            // Selectable buttons for each shape tool
            for &tool in ToolKind::all() {
                let is_selected = app.active_tool() == tool;
                if ui.selectable_label(is_selected, tool.label()).clicked() {
                    log::info!("Tool selected from UI: {}", tool.label());
                    app.set_active_tool(tool);
                }
            }

            ui.separator();

            // Color picker
            ui.horizontal(|ui| {
                ui.label("Color:");
                egui::color_picker::color_edit_button_srgba(
                    ui,
                    app.stroke_color_mut(),
                    egui::color_picker::Alpha::Opaque,
                );
            });

            ui.separator();

            if ui.button("Clear").clicked() {
                app.execute_command(Command::Clear);
            }

            ui.separator();
            ui.label(format!("Shapes: {}", app.document().len()));
        });
}
