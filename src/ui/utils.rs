use eframe::egui::{Color32, Context, Mesh, Painter, Rect, Shape, Ui, Visuals, pos2};

use crate::ui::config::UI_CONFIG;

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    visuals.window_fill = UI_CONFIG.colors.controls_panel;
    visuals.panel_fill = UI_CONFIG.colors.controls_panel;

    // Make the widgets stand out a bit more
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.selection.bg_fill = UI_CONFIG.colors.subsection_heading;

    ctx.set_visuals(visuals);
}

/// Creates a separator with standard spacing
pub fn spaced_separator(ui: &mut Ui) {
    ui.add_space(6.0);
    ui.separator();
    ui.add_space(6.0);
}

/// Fills `rect` with a three stop vertical gradient.
pub fn paint_vertical_gradient(
    painter: &Painter,
    rect: Rect,
    top: Color32,
    middle: Color32,
    bottom: Color32,
) {
    let mid_y = rect.center().y;
    let mut mesh = Mesh::default();

    // Two stacked quads: top->middle and middle->bottom
    for (y0, y1, c0, c1) in [
        (rect.top(), mid_y, top, middle),
        (mid_y, rect.bottom(), middle, bottom),
    ] {
        let base = mesh.vertices.len() as u32;
        mesh.colored_vertex(pos2(rect.left(), y0), c0);
        mesh.colored_vertex(pos2(rect.right(), y0), c0);
        mesh.colored_vertex(pos2(rect.right(), y1), c1);
        mesh.colored_vertex(pos2(rect.left(), y1), c1);
        mesh.add_triangle(base, base + 1, base + 2);
        mesh.add_triangle(base, base + 2, base + 3);
    }

    painter.add(Shape::mesh(mesh));
}
