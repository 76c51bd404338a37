use eframe::egui::{self, Color32, RichText, Ui};
use egui_plot::{Bar, BarChart, Legend, Plot, PlotPoints, Points};

use crate::data::aggregate::{monthly_mean, totals, Measure, MonthlyMeans, Totals};
use crate::data::model::{Dimension, FleetDataset};
use crate::state::AppState;

/// Bar fill shared by both monthly charts.
const BAR_COLOR: Color32 = Color32::from_rgb(0x00, 0x83, 0xB8);

const PLOT_HEIGHT: f32 = 260.0;

// ---------------------------------------------------------------------------
// Central dashboard
// ---------------------------------------------------------------------------

/// Render the central panel: headline figures, the two monthly bar charts,
/// the monthly summary table, and the CO₂-over-fuel scatter.
pub fn central(ui: &mut Ui, state: &AppState) {
    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a data file to view the dashboard  (File → Open…)");
            });
            return;
        }
    };
    let indices = &state.visible_indices;

    ui.heading("Fuel Consumption and CO₂ Emissions Dashboard");
    ui.label(
        "Fuel consumption and CO₂ emissions of ship types operating in \
         Nigerian waterways over one year. Filter by ship type, fuel type, \
         and weather conditions to compare efficiency and environmental \
         impact across the fleet.",
    );
    ui.add_space(10.0);

    stat_row(ui, &totals(dataset, indices));
    ui.separator();

    // Each view below derives independently from the same filtered indices.
    let fuel_per_month = monthly_mean(dataset, indices, Measure::FuelConsumption);
    let co2_per_month = monthly_mean(dataset, indices, Measure::Co2Emissions);
    let efficiency_per_month = monthly_mean(dataset, indices, Measure::EngineEfficiency);

    egui::ScrollArea::vertical().show(ui, |ui: &mut Ui| {
        ui.columns(2, |cols: &mut [Ui]| {
            fuel_bar_chart(&mut cols[0], &fuel_per_month);
            monthly_table(
                &mut cols[1],
                &fuel_per_month,
                &co2_per_month,
                &efficiency_per_month,
            );
        });
        ui.add_space(10.0);
        ui.columns(2, |cols: &mut [Ui]| {
            co2_bar_chart(&mut cols[0], &co2_per_month);
            co2_over_fuel_scatter(&mut cols[1], state, dataset);
        });
    });
}

// ---------------------------------------------------------------------------
// Headline figures
// ---------------------------------------------------------------------------

fn stat_row(ui: &mut Ui, figures: &Totals) {
    ui.columns(3, |cols: &mut [Ui]| {
        stat_tile(
            &mut cols[0],
            "Total Fuel Consumption",
            &format!("{} L", group_thousands(figures.total_fuel)),
        );
        stat_tile(
            &mut cols[1],
            "Total Carbon Emissions",
            &format!("{} kg", group_thousands(figures.total_co2)),
        );
        // The mean is undefined over an empty view; show a dash, not 0.
        let efficiency = match figures.mean_efficiency {
            Some(v) => format!("{v:.2} %"),
            None => "—".to_string(),
        };
        stat_tile(&mut cols[2], "Average Engine Efficiency", &efficiency);
    });
}

fn stat_tile(ui: &mut Ui, title: &str, value: &str) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(RichText::new(title).strong());
        ui.label(RichText::new(value).size(22.0));
    });
}

/// 1234567 → "1,234,567".
fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

// ---------------------------------------------------------------------------
// Monthly bar charts
// ---------------------------------------------------------------------------

fn fuel_bar_chart(ui: &mut Ui, means: &MonthlyMeans) {
    ui.strong("Average Fuel Consumption (L) over each Month");

    let bars: Vec<Bar> = means
        .iter()
        .enumerate()
        .map(|(i, (month, mean))| Bar::new(i as f64, *mean).name(month).fill(BAR_COLOR))
        .collect();
    let labels: Vec<String> = means.iter().map(|(month, _)| month.clone()).collect();

    Plot::new("fuel_per_month")
        .height(PLOT_HEIGHT)
        .x_axis_formatter(move |mark, _range| month_tick(&labels, mark.value))
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

fn co2_bar_chart(ui: &mut Ui, means: &MonthlyMeans) {
    ui.strong("Average CO₂ Emissions (kg) over each Month");

    let bars: Vec<Bar> = means
        .iter()
        .enumerate()
        .map(|(i, (month, mean))| Bar::new(i as f64, *mean).name(month).fill(BAR_COLOR))
        .collect();
    let labels: Vec<String> = means.iter().map(|(month, _)| month.clone()).collect();

    Plot::new("co2_per_month")
        .height(PLOT_HEIGHT)
        .y_axis_formatter(move |mark, _range| month_tick(&labels, mark.value))
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).horizontal());
        });
}

/// Axis tick text for bar position `value`: the month label at integer
/// positions, nothing in between.
fn month_tick(labels: &[String], value: f64) -> String {
    let nearest = value.round();
    if (value - nearest).abs() > 0.05 || nearest < 0.0 {
        return String::new();
    }
    labels.get(nearest as usize).cloned().unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Monthly summary table
// ---------------------------------------------------------------------------

fn monthly_table(
    ui: &mut Ui,
    fuel: &MonthlyMeans,
    co2: &MonthlyMeans,
    efficiency: &MonthlyMeans,
) {
    ui.strong("Monthly Averages");

    egui::Grid::new("monthly_table")
        .striped(true)
        .num_columns(4)
        .show(ui, |ui: &mut Ui| {
            ui.strong("Month");
            ui.strong("Avg Fuel (L)");
            ui.strong("Avg CO₂ (kg)");
            ui.strong("Avg Efficiency (%)");
            ui.end_row();

            // The three aggregates come from the same view, so their month
            // sequences are identical.
            for (((month, fuel_mean), (_, co2_mean)), (_, eff_mean)) in
                fuel.iter().zip(co2.iter()).zip(efficiency.iter())
            {
                ui.label(month);
                ui.label(format!("{fuel_mean:.0}"));
                ui.label(format!("{co2_mean:.0}"));
                ui.label(format!("{eff_mean:.0}"));
                ui.end_row();
            }
        });
}

// ---------------------------------------------------------------------------
// CO₂ over fuel scatter
// ---------------------------------------------------------------------------

fn co2_over_fuel_scatter(ui: &mut Ui, state: &AppState, dataset: &FleetDataset) {
    ui.strong("CO₂ Emissions (kg) over Fuel Consumption (L)");

    Plot::new("co2_over_fuel")
        .height(PLOT_HEIGHT)
        .legend(Legend::default())
        .x_axis_label("fuel_consumption")
        .y_axis_label("CO2_emissions")
        .show(ui, |plot_ui| {
            // One series per ship type so the legend doubles as a key.
            for ship_type in dataset.distinct(Dimension::ShipType) {
                let points: PlotPoints = state
                    .visible_indices
                    .iter()
                    .map(|&i| &dataset.records[i])
                    .filter(|r| r.ship_type == *ship_type)
                    .map(|r| [r.fuel_consumption, r.co2_emissions])
                    .collect();

                let color = state
                    .ship_colors
                    .as_ref()
                    .map(|c| c.color_for(ship_type))
                    .unwrap_or(Color32::LIGHT_BLUE);

                plot_ui.points(Points::new(points).name(ship_type).color(color).radius(2.5));
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(-45678), "-45,678");
    }

    #[test]
    fn ticks_appear_only_at_integer_positions() {
        let labels = vec!["Jan".to_string(), "Feb".to_string()];
        assert_eq!(month_tick(&labels, 0.0), "Jan");
        assert_eq!(month_tick(&labels, 1.01), "Feb");
        assert_eq!(month_tick(&labels, 0.5), "");
        assert_eq!(month_tick(&labels, 5.0), "");
        assert_eq!(month_tick(&labels, -1.0), "");
    }
}
