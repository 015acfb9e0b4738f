use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Legend, Plot};

use crate::color::ColorMap;
use crate::view::RowView;

// ---------------------------------------------------------------------------
// Branch-count bar chart
// ---------------------------------------------------------------------------

/// Route count by branch for the under-threshold subset. One single-bar
/// series per branch so the legend names and colours each one.
pub fn branch_count_chart(ui: &mut Ui, branch_counts: &[(String, usize)]) {
    let colors = ColorMap::new(branch_counts.iter().map(|(b, _)| b.clone()));

    Plot::new("branch_chart")
        .legend(Legend::default())
        .x_axis_label("Branch")
        .y_axis_label("Routes below threshold")
        .height(260.0)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            for (i, (branch, count)) in branch_counts.iter().enumerate() {
                let bar = Bar::new(i as f64, *count as f64).width(0.6).name(branch);
                plot_ui.bar_chart(
                    BarChart::new(vec![bar])
                        .name(branch)
                        .color(colors.color_for(branch)),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Per-route EPKM bar chart
// ---------------------------------------------------------------------------

/// EPKM of every under-threshold record, one bar per record, coloured and
/// legend-grouped by route code.
pub fn route_epkm_chart(ui: &mut Ui, below: &[RowView<'_>]) {
    // Group bars by route so each code appears once in the legend.
    let mut series: Vec<(String, Vec<Bar>)> = Vec::new();
    for (pos, row) in below.iter().enumerate() {
        let route = &row.record.route_number;
        let bar = Bar::new(pos as f64, row.record.earning_per_km).width(0.6);
        match series.iter_mut().find(|(name, _)| name == route) {
            Some((_, bars)) => bars.push(bar),
            None => series.push((route.clone(), vec![bar])),
        }
    }

    let colors = ColorMap::new(series.iter().map(|(route, _)| route.clone()));

    Plot::new("route_chart")
        .legend(Legend::default())
        .x_axis_label("Route")
        .y_axis_label("EPKM (Rs.)")
        .height(260.0)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            for (route, bars) in series {
                let color = colors.color_for(&route);
                plot_ui.bar_chart(BarChart::new(bars).name(&route).color(color));
            }
        });
}
