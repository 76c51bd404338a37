use std::collections::BTreeSet;

use super::model::{Dimension, FleetDataset, Record};

// ---------------------------------------------------------------------------
// Selection: which values are admitted per dimension
// ---------------------------------------------------------------------------

/// Per-dimension selection state: the set of admitted values for each of the
/// three categorical columns.
///
/// A selection is an explicit allow-list. An empty set for a dimension admits
/// nothing — it never means "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub ship_types: BTreeSet<String>,
    pub fuel_types: BTreeSet<String>,
    pub weather_conditions: BTreeSet<String>,
}

impl Selection {
    /// Selection admitting every value observed in `dataset` (the sidebar
    /// default at load time).
    pub fn all_of(dataset: &FleetDataset) -> Self {
        let full = |dim| dataset.distinct(dim).iter().cloned().collect();
        Selection {
            ship_types: full(Dimension::ShipType),
            fuel_types: full(Dimension::FuelType),
            weather_conditions: full(Dimension::WeatherConditions),
        }
    }

    /// The admitted values for one dimension.
    pub fn selected(&self, dim: Dimension) -> &BTreeSet<String> {
        match dim {
            Dimension::ShipType => &self.ship_types,
            Dimension::FuelType => &self.fuel_types,
            Dimension::WeatherConditions => &self.weather_conditions,
        }
    }

    /// Mutable access to one dimension's admitted values.
    pub fn selected_mut(&mut self, dim: Dimension) -> &mut BTreeSet<String> {
        match dim {
            Dimension::ShipType => &mut self.ship_types,
            Dimension::FuelType => &mut self.fuel_types,
            Dimension::WeatherConditions => &mut self.weather_conditions,
        }
    }

    /// True when every categorical field of `record` is admitted (logical AND
    /// across the three dimensions).
    pub fn admits(&self, record: &Record) -> bool {
        Dimension::ALL
            .iter()
            .all(|&dim| self.selected(dim).contains(dim.value_of(record)))
    }
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Return indices of records that pass the current selection, in dataset
/// order.
///
/// Never fails: an empty result simply means no record matched. Deselecting
/// every value of any single dimension therefore empties the dashboard.
pub fn filtered_indices(dataset: &FleetDataset, selection: &Selection) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, r)| selection.admits(r))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    fn rec(ship: &str, fuel: &str, weather: &str, month: &str) -> Record {
        Record {
            ship_type: ship.to_string(),
            fuel_type: fuel.to_string(),
            weather_conditions: weather.to_string(),
            month: month.to_string(),
            fuel_consumption: 100.0,
            co2_emissions: 50.0,
            engine_efficiency: 80.0,
        }
    }

    fn sample() -> FleetDataset {
        FleetDataset::from_records(vec![
            rec("A", "Diesel", "Calm", "Jan"),
            rec("B", "HFO", "Stormy", "Jan"),
            rec("A", "HFO", "Calm", "Feb"),
            rec("B", "Diesel", "Calm", "Mar"),
        ])
    }

    fn sel(ships: &[&str], fuels: &[&str], weather: &[&str]) -> Selection {
        let to_set = |vals: &[&str]| vals.iter().map(|v| v.to_string()).collect();
        Selection {
            ship_types: to_set(ships),
            fuel_types: to_set(fuels),
            weather_conditions: to_set(weather),
        }
    }

    #[test]
    fn full_selection_is_identity() {
        let ds = sample();
        let all = Selection::all_of(&ds);
        assert_eq!(filtered_indices(&ds, &all), vec![0, 1, 2, 3]);
    }

    #[test]
    fn empty_selection_excludes_everything() {
        let ds = sample();
        // Any single empty dimension empties the result, even with the other
        // two fully selected.
        let cases = [
            sel(&[], &["Diesel", "HFO"], &["Calm", "Stormy"]),
            sel(&["A", "B"], &[], &["Calm", "Stormy"]),
            sel(&["A", "B"], &["Diesel", "HFO"], &[]),
            sel(&[], &[], &[]),
        ];
        for selection in &cases {
            assert!(filtered_indices(&ds, selection).is_empty());
        }
    }

    #[test]
    fn conjunction_across_dimensions() {
        let ds = sample();
        // "A" and "Diesel" each match two records, but only record 0 matches
        // both together with "Calm".
        let selection = sel(&["A"], &["Diesel"], &["Calm"]);
        assert_eq!(filtered_indices(&ds, &selection), vec![0]);
    }

    #[test]
    fn result_preserves_dataset_order() {
        let ds = sample();
        let selection = sel(&["A", "B"], &["Diesel", "HFO"], &["Calm"]);
        assert_eq!(filtered_indices(&ds, &selection), vec![0, 2, 3]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let ds = sample();
        let selection = sel(&["A", "B"], &["HFO"], &["Calm", "Stormy"]);

        let once: Vec<Record> = filtered_indices(&ds, &selection)
            .into_iter()
            .map(|i| ds.records[i].clone())
            .collect();

        // Re-filter the already-filtered rows with the same selection.
        let view = FleetDataset::from_records(once.clone());
        let twice: Vec<Record> = filtered_indices(&view, &selection)
            .into_iter()
            .map(|i| view.records[i].clone())
            .collect();

        assert_eq!(once, twice);
    }

    #[test]
    fn filtering_is_monotone() {
        let ds = sample();
        let narrow = sel(&["A"], &["Diesel", "HFO"], &["Calm"]);
        let wide = sel(&["A", "B"], &["Diesel", "HFO"], &["Calm", "Stormy"]);

        let narrow_hits = filtered_indices(&ds, &narrow);
        let wide_hits = filtered_indices(&ds, &wide);
        for idx in narrow_hits {
            assert!(wide_hits.contains(&idx));
        }
    }

    #[test]
    fn all_of_covers_every_observed_value() {
        let ds = sample();
        let all = Selection::all_of(&ds);
        assert_eq!(all.ship_types.len(), 2);
        assert_eq!(all.fuel_types.len(), 2);
        assert_eq!(all.weather_conditions.len(), 2);
        assert!(ds.records.iter().all(|r| all.admits(r)));
    }
}
