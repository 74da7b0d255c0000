use egui_plot::{Bar, BarChart, GridMark, HLine, LineStyle, Plot, PlotBounds, PlotPoint, Text};

use crate::processing::chart_data::ChartData;
use crate::state::theme::{Theme, LOSS_BAR, REFERENCE_LINE};

const BAR_WIDTH: f64 = 0.7;

/// Draw the "Your Progress" card: header, summary line and bar chart.
pub fn show_weight_chart(ui: &mut egui::Ui, data: &ChartData, theme: &Theme, height: f32) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Your Progress");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new("\u{2139}").weak())
                        .on_hover_ui(|ui| {
                            ui.horizontal_wrapped(|ui| {
                                ui.colored_label(LOSS_BAR, "Green bars");
                                ui.label("indicate weight loss from the previous entry.");
                            });
                            ui.horizontal_wrapped(|ui| {
                                ui.colored_label(REFERENCE_LINE, "Red dashed lines");
                                ui.label("show \u{00b1}1 standard deviation from your average weight.");
                            });
                        });
                    if let Some(summary) = data.stats.summary() {
                        ui.label(egui::RichText::new(summary).weak());
                    }
                });
            });
            ui.add_space(6.0);
            draw_plot(ui, data, theme, height);
        });
}

fn draw_plot(ui: &mut egui::Ui, data: &ChartData, theme: &Theme, height: f32) {
    let (y_min, _) = data.y_domain;
    let (bounds_min, bounds_max) = plot_bounds(data.points.len(), data.y_domain);

    // Bars grow from the bottom of the Y domain instead of from zero.
    let bars: Vec<Bar> = data
        .points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            Bar::new(i as f64, p.value - y_min)
                .base_offset(y_min)
                .width(BAR_WIDTH)
                .fill(theme.bar_color(p.color_tag))
                .name(&p.label)
        })
        .collect();

    let tooltip_points: Vec<(String, f64)> =
        data.points.iter().map(|p| (p.label.clone(), p.value)).collect();
    let chart = BarChart::new("", bars)
        .name("Weight")
        .element_formatter(Box::new(move |bar: &Bar, _chart: &BarChart| {
            match tooltip_points.get(bar.argument.round() as usize) {
                Some((label, value)) => tooltip_text(label, *value),
                None => String::new(),
            }
        }));

    let axis_labels: Vec<String> = data.points.iter().map(|p| p.label.clone()).collect();
    let last_index = data.points.len().saturating_sub(1) as f64;

    Plot::new("weight_chart")
        .height(height)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .allow_double_click_reset(false)
        .show_x(false)
        .show_y(false)
        .x_axis_formatter(move |mark: GridMark, _range: &std::ops::RangeInclusive<f64>| {
            index_label(&axis_labels, mark.value)
        })
        .y_axis_formatter(|mark: GridMark, _range: &std::ops::RangeInclusive<f64>| {
            tick_label(mark.value)
        })
        .show(ui, |plot_ui| {
            // Reference lines outside the domain are clipped, not allowed to widen the axis.
            plot_ui.set_plot_bounds(PlotBounds::from_min_max(bounds_min, bounds_max));
            plot_ui.bar_chart(chart);

            if let Some(lines) = data.reference_lines {
                for (y, label) in [(lines.plus_one_sigma, "+1\u{03c3}"), (lines.minus_one_sigma, "-1\u{03c3}")] {
                    plot_ui.hline(
                        HLine::new("", y)
                            .color(REFERENCE_LINE)
                            .style(LineStyle::dashed_dense())
                            .name(label),
                    );
                    plot_ui.text(
                        Text::new(
                            "",
                            PlotPoint::new(last_index + BAR_WIDTH / 2.0, y),
                            egui::RichText::new(label).size(10.0).color(REFERENCE_LINE),
                        )
                        .anchor(egui::Align2::RIGHT_BOTTOM),
                    );
                }
            }
        });
}

/// Plot area as `(min, max)` corners: one slot per bar on X, the Y domain on Y.
fn plot_bounds(point_count: usize, y_domain: (f64, f64)) -> ([f64; 2], [f64; 2]) {
    let last_index = point_count.saturating_sub(1) as f64;
    ([-0.5, y_domain.0], [last_index + 0.5, y_domain.1])
}

fn tooltip_text(label: &str, value: f64) -> String {
    format!("{label}: {value:.1} kg")
}

/// Y tick text such as `78kg` or `78.5kg`.
fn tick_label(value: f64) -> String {
    let text = format!("{value:.1}");
    let text = text.strip_suffix(".0").unwrap_or(&text);
    format!("{text}kg")
}

/// X tick text: the point label for whole-number positions, nothing otherwise.
fn index_label(labels: &[String], position: f64) -> String {
    if position < 0.0 || (position - position.round()).abs() > 1e-6 {
        return String::new();
    }
    labels.get(position.round() as usize).cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::entry::WeightEntry;
    use crate::processing::chart_data::derive_chart_data;

    #[test]
    fn bounds_stay_on_domain_when_sigma_lines_fall_outside() {
        let entries = vec![
            WeightEntry::from_iso(1, "2024-01-01", 70.0).unwrap(),
            WeightEntry::from_iso(2, "2024-01-02", 80.0).unwrap(),
        ];
        let data = derive_chart_data(&entries).unwrap().unwrap();
        let lines = data.reference_lines.unwrap();
        assert!(lines.plus_one_sigma > data.y_domain.1);
        assert!(lines.minus_one_sigma < data.y_domain.0);

        let (min, max) = plot_bounds(data.points.len(), data.y_domain);
        assert_eq!(min, [-0.5, 68.0]);
        assert_eq!(max, [1.5, 82.0]);
    }

    #[test]
    fn bounds_for_single_bar() {
        assert_eq!(plot_bounds(1, (70.0, 75.0)), ([-0.5, 70.0], [0.5, 75.0]));
    }

    #[test]
    fn tooltip_shows_label_and_weight() {
        assert_eq!(tooltip_text("Jan 5", 80.0), "Jan 5: 80.0 kg");
        assert_eq!(tooltip_text("Feb 29", 79.46), "Feb 29: 79.5 kg");
    }

    #[test]
    fn tick_labels_hide_float_noise() {
        assert_eq!(tick_label(78.60000000000001), "78.6kg");
        assert_eq!(tick_label(78.0), "78kg");
        assert_eq!(tick_label(77.99999999999999), "78kg");
    }

    #[test]
    fn ticks_only_label_whole_positions() {
        let labels = vec!["Jan 5".to_string(), "Jan 6".to_string()];
        assert_eq!(index_label(&labels, 0.0), "Jan 5");
        assert_eq!(index_label(&labels, 1.0), "Jan 6");
        assert_eq!(index_label(&labels, 0.5), "");
        assert_eq!(index_label(&labels, 2.0), "");
        assert_eq!(index_label(&labels, -1.0), "");
    }
}
