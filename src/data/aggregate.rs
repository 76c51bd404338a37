use super::model::{FleetDataset, Record};

// ---------------------------------------------------------------------------
// Measure – which numeric column to aggregate
// ---------------------------------------------------------------------------

/// The numeric columns that can be averaged per month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measure {
    FuelConsumption,
    Co2Emissions,
    EngineEfficiency,
}

impl Measure {
    /// The record field this measure reads.
    pub fn value_of(self, record: &Record) -> f64 {
        match self {
            Measure::FuelConsumption => record.fuel_consumption,
            Measure::Co2Emissions => record.co2_emissions,
            Measure::EngineEfficiency => record.engine_efficiency,
        }
    }
}

// ---------------------------------------------------------------------------
// Totals – the headline figures above the charts
// ---------------------------------------------------------------------------

/// Summary figures over a filtered view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    /// Sum of fuel consumption in liters, truncated toward zero.
    pub total_fuel: i64,
    /// Sum of CO₂ emissions in kilograms, truncated toward zero.
    pub total_co2: i64,
    /// Mean engine efficiency in percent, rounded to 2 decimal places.
    /// `None` when the view is empty — the mean is undefined, not zero.
    pub mean_efficiency: Option<f64>,
}

/// Compute the headline figures over the records selected by `indices`.
pub fn totals(dataset: &FleetDataset, indices: &[usize]) -> Totals {
    let mut fuel = 0.0;
    let mut co2 = 0.0;
    let mut efficiency = 0.0;

    for &i in indices {
        let r = &dataset.records[i];
        fuel += r.fuel_consumption;
        co2 += r.co2_emissions;
        efficiency += r.engine_efficiency;
    }

    Totals {
        total_fuel: fuel as i64,
        total_co2: co2 as i64,
        mean_efficiency: if indices.is_empty() {
            None
        } else {
            Some(round2(efficiency / indices.len() as f64))
        },
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ---------------------------------------------------------------------------
// Monthly means
// ---------------------------------------------------------------------------

/// Per-month means of one measure: `(month label, mean)` pairs in
/// first-occurrence order of the months within the view.
pub type MonthlyMeans = Vec<(String, f64)>;

/// Group the selected records by month and average `measure` per group.
///
/// Months appear in the order they first occur in the filtered view, not
/// sorted. Filtering can remove a month's first occurrence, so this order may
/// differ from the unfiltered dataset's.
pub fn monthly_mean(dataset: &FleetDataset, indices: &[usize], measure: Measure) -> MonthlyMeans {
    // (month, running sum, count); months per year are few, linear scan is fine
    let mut groups: Vec<(String, f64, usize)> = Vec::new();

    for &i in indices {
        let r = &dataset.records[i];
        let value = measure.value_of(r);
        match groups.iter_mut().find(|(month, _, _)| *month == r.month) {
            Some(group) => {
                group.1 += value;
                group.2 += 1;
            }
            None => groups.push((r.month.clone(), value, 1)),
        }
    }

    groups
        .into_iter()
        .map(|(month, sum, count)| (month, sum / count as f64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{filtered_indices, Selection};

    fn rec(ship: &str, month: &str, fuel: f64, co2: f64, eff: f64) -> Record {
        Record {
            ship_type: ship.to_string(),
            fuel_type: "Diesel".to_string(),
            weather_conditions: "Calm".to_string(),
            month: month.to_string(),
            fuel_consumption: fuel,
            co2_emissions: co2,
            engine_efficiency: eff,
        }
    }

    fn all_indices(ds: &FleetDataset) -> Vec<usize> {
        (0..ds.len()).collect()
    }

    #[test]
    fn totals_sum_and_truncate() {
        let ds = FleetDataset::from_records(vec![
            rec("A", "Jan", 100.5, 49.9, 80.0),
            rec("A", "Jan", 200.25, 150.9, 60.0),
        ]);
        let t = totals(&ds, &all_indices(&ds));

        // 300.75 truncates to 300, 200.8 to 200 — truncation, not rounding.
        assert_eq!(t.total_fuel, 300);
        assert_eq!(t.total_co2, 200);
        assert_eq!(t.mean_efficiency, Some(70.0));
    }

    #[test]
    fn totals_on_empty_view() {
        let ds = FleetDataset::from_records(vec![rec("A", "Jan", 100.0, 50.0, 80.0)]);
        let t = totals(&ds, &[]);
        assert_eq!(t.total_fuel, 0);
        assert_eq!(t.total_co2, 0);
        assert_eq!(t.mean_efficiency, None);
    }

    #[test]
    fn mean_efficiency_rounds_to_two_decimals() {
        let ds = FleetDataset::from_records(vec![
            rec("A", "Jan", 0.0, 0.0, 80.0),
            rec("A", "Jan", 0.0, 0.0, 70.0),
            rec("A", "Jan", 0.0, 0.0, 75.5),
        ]);
        // mean = 75.1666… → 75.17
        let t = totals(&ds, &all_indices(&ds));
        assert_eq!(t.mean_efficiency, Some(75.17));
    }

    #[test]
    fn monthly_mean_has_one_entry_per_month() {
        let ds = FleetDataset::from_records(vec![
            rec("A", "Jan", 100.0, 0.0, 0.0),
            rec("A", "Feb", 300.0, 0.0, 0.0),
            rec("A", "Jan", 200.0, 0.0, 0.0),
        ]);
        let means = monthly_mean(&ds, &all_indices(&ds), Measure::FuelConsumption);
        assert_eq!(
            means,
            vec![("Jan".to_string(), 150.0), ("Feb".to_string(), 300.0)]
        );
    }

    #[test]
    fn month_order_follows_the_filtered_view() {
        // Unfiltered, Jan appears first. Filtering to ship "A" drops the
        // leading Jan row, so Feb becomes the first month of the view.
        let ds = FleetDataset::from_records(vec![
            rec("B", "Jan", 100.0, 0.0, 0.0),
            rec("A", "Feb", 300.0, 0.0, 0.0),
            rec("A", "Jan", 200.0, 0.0, 0.0),
        ]);
        let mut selection = Selection::all_of(&ds);
        selection.ship_types.remove("B");
        let view = filtered_indices(&ds, &selection);

        let means = monthly_mean(&ds, &view, Measure::FuelConsumption);
        assert_eq!(
            means,
            vec![("Feb".to_string(), 300.0), ("Jan".to_string(), 200.0)]
        );
    }

    #[test]
    fn monthly_mean_on_empty_view_is_empty() {
        let ds = FleetDataset::from_records(vec![rec("A", "Jan", 100.0, 50.0, 80.0)]);
        assert!(monthly_mean(&ds, &[], Measure::Co2Emissions).is_empty());
    }

    #[test]
    fn worked_example() {
        // rec() builds Diesel/Calm rows; the second row diverges on all
        // three dimensions.
        let r1 = rec("A", "Jan", 100.0, 50.0, 80.0);
        let mut r2 = rec("B", "Jan", 200.0, 150.0, 60.0);
        r2.fuel_type = "HFO".to_string();
        r2.weather_conditions = "Stormy".to_string();
        let ds = FleetDataset::from_records(vec![r1, r2]);

        let mut selection = Selection::default();
        selection.ship_types.insert("A".to_string());
        selection.fuel_types.insert("Diesel".to_string());
        selection.weather_conditions.insert("Calm".to_string());

        let view = filtered_indices(&ds, &selection);
        assert_eq!(view, vec![0]);

        let t = totals(&ds, &view);
        assert_eq!((t.total_fuel, t.total_co2), (100, 50));
        assert_eq!(t.mean_efficiency, Some(80.0));

        let means = monthly_mean(&ds, &view, Measure::FuelConsumption);
        assert_eq!(means, vec![("Jan".to_string(), 100.0)]);
    }
}
