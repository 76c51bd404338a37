/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// (ship type, base fuel burn per voyage in liters, base engine efficiency %)
const SHIPS: [(&str, f64, f64); 4] = [
    ("Oil Service Boat", 1400.0, 74.0),
    ("Surfer Boat", 350.0, 82.0),
    ("Fishing Trawler", 900.0, 70.0),
    ("Tanker Ship", 2200.0, 77.0),
];

const FUEL_TYPES: [&str; 2] = ["Diesel", "HFO"];

/// (condition, fuel burn multiplier)
const WEATHER: [(&str, f64); 3] = [("Calm", 1.0), ("Moderate", 1.15), ("Stormy", 1.35)];

/// Kilograms of CO₂ emitted per liter burned.
fn co2_per_liter(fuel_type: &str) -> f64 {
    match fuel_type {
        "Diesel" => 2.68,
        _ => 3.11,
    }
}

const VOYAGES_PER_MONTH: usize = 3;
const OUTPUT: &str = "ship_fuel_efficiency.csv";

fn main() {
    let mut rng = SimpleRng::new(42);

    let mut writer = csv::Writer::from_path(OUTPUT).expect("Failed to create output file");
    writer
        .write_record([
            "ship_type",
            "fuel_type",
            "weather_conditions",
            "month",
            "fuel_consumption",
            "CO2_emissions",
            "engine_efficiency",
        ])
        .expect("Failed to write header");

    let mut rows = 0usize;
    for &month in MONTHS.iter() {
        for &(ship_type, base_fuel, base_efficiency) in SHIPS.iter() {
            for _voyage in 0..VOYAGES_PER_MONTH {
                let fuel_type = FUEL_TYPES[(rng.next_u64() % 2) as usize];
                let (weather, burn_multiplier) = WEATHER[(rng.next_u64() % 3) as usize];

                let fuel = (base_fuel * burn_multiplier
                    + rng.gauss(0.0, base_fuel * 0.08))
                .max(50.0);
                let co2 = (fuel * co2_per_liter(fuel_type) + rng.gauss(0.0, fuel * 0.05)).max(0.0);
                let mut efficiency = base_efficiency + rng.gauss(0.0, 4.0);
                if weather == "Stormy" {
                    efficiency -= 6.0;
                }
                let efficiency = efficiency.clamp(0.0, 100.0);

                let fuel = format!("{fuel:.2}");
                let co2 = format!("{co2:.2}");
                let efficiency = format!("{efficiency:.2}");
                writer
                    .write_record([
                        ship_type,
                        fuel_type,
                        weather,
                        month,
                        fuel.as_str(),
                        co2.as_str(),
                        efficiency.as_str(),
                    ])
                    .expect("Failed to write record");
                rows += 1;
            }
        }
    }

    writer.flush().expect("Failed to flush output file");
    println!("Wrote {rows} voyage records to {OUTPUT}");
}
