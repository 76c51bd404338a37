// ---------------------------------------------------------------------------
// Record – one row of the source table
// ---------------------------------------------------------------------------

/// A single voyage observation (one row of the source table).
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub ship_type: String,
    pub fuel_type: String,
    pub weather_conditions: String,
    /// Month label used as the grouping key. Kept as text, in source order.
    pub month: String,
    /// Liters.
    pub fuel_consumption: f64,
    /// Kilograms.
    pub co2_emissions: f64,
    /// Percent, expected range [0, 100].
    pub engine_efficiency: f64,
}

// ---------------------------------------------------------------------------
// Dimension – the categorical columns a user can filter on
// ---------------------------------------------------------------------------

/// The three categorical dimensions of the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    ShipType,
    FuelType,
    WeatherConditions,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [
        Dimension::ShipType,
        Dimension::FuelType,
        Dimension::WeatherConditions,
    ];

    /// Human-readable name, used for sidebar headers and widget ids.
    pub fn label(self) -> &'static str {
        match self {
            Dimension::ShipType => "Ship Type",
            Dimension::FuelType => "Fuel Type",
            Dimension::WeatherConditions => "Weather Conditions",
        }
    }

    /// The record field this dimension selects on.
    pub fn value_of(self, record: &Record) -> &str {
        match self {
            Dimension::ShipType => &record.ship_type,
            Dimension::FuelType => &record.fuel_type,
            Dimension::WeatherConditions => &record.weather_conditions,
        }
    }
}

// ---------------------------------------------------------------------------
// FleetDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed distinct values per dimension.
///
/// Loaded once per file open and never mutated afterwards; everything the
/// dashboard shows is derived from it on demand.
#[derive(Debug, Clone, Default)]
pub struct FleetDataset {
    /// All records (rows), in file order.
    pub records: Vec<Record>,
    ship_types: Vec<String>,
    fuel_types: Vec<String>,
    weather_conditions: Vec<String>,
}

impl FleetDataset {
    /// Build the per-dimension distinct-value lists from the loaded records.
    ///
    /// Distinct values keep first-occurrence order, so the sidebar options
    /// appear in the order the file introduces them.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut ship_types = Vec::new();
        let mut fuel_types = Vec::new();
        let mut weather_conditions = Vec::new();

        for r in &records {
            push_unique(&mut ship_types, &r.ship_type);
            push_unique(&mut fuel_types, &r.fuel_type);
            push_unique(&mut weather_conditions, &r.weather_conditions);
        }

        FleetDataset {
            records,
            ship_types,
            fuel_types,
            weather_conditions,
        }
    }

    /// Distinct values observed for a dimension, in first-occurrence order.
    pub fn distinct(&self, dim: Dimension) -> &[String] {
        match dim {
            Dimension::ShipType => &self.ship_types,
            Dimension::FuelType => &self.fuel_types,
            Dimension::WeatherConditions => &self.weather_conditions,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn push_unique(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|v| v == value) {
        values.push(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(ship: &str, fuel: &str, weather: &str, month: &str) -> Record {
        Record {
            ship_type: ship.to_string(),
            fuel_type: fuel.to_string(),
            weather_conditions: weather.to_string(),
            month: month.to_string(),
            fuel_consumption: 0.0,
            co2_emissions: 0.0,
            engine_efficiency: 0.0,
        }
    }

    #[test]
    fn distinct_values_keep_first_seen_order() {
        let ds = FleetDataset::from_records(vec![
            rec("Tanker Ship", "HFO", "Stormy", "January"),
            rec("Fishing Trawler", "Diesel", "Calm", "January"),
            rec("Tanker Ship", "Diesel", "Calm", "February"),
        ]);

        assert_eq!(
            ds.distinct(Dimension::ShipType),
            ["Tanker Ship", "Fishing Trawler"]
        );
        assert_eq!(ds.distinct(Dimension::FuelType), ["HFO", "Diesel"]);
        assert_eq!(
            ds.distinct(Dimension::WeatherConditions),
            ["Stormy", "Calm"]
        );
    }

    #[test]
    fn dimension_selects_the_matching_field() {
        let r = rec("Tanker Ship", "HFO", "Calm", "January");
        assert_eq!(Dimension::ShipType.value_of(&r), "Tanker Ship");
        assert_eq!(Dimension::FuelType.value_of(&r), "HFO");
        assert_eq!(Dimension::WeatherConditions.value_of(&r), "Calm");
    }
}
