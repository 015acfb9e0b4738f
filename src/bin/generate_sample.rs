use anyhow::{Context, Result};
use rust_xlsxwriter::Workbook;

use pos_dashboard::data::model::{REQUIRED_COLUMNS, SERIAL_COLUMN};

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

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    // Branch name, route prefix, mean EPKM (Rs.), depot code for vehicles.
    let branches = [
        ("Trichy", "TR", 32.5, "TN45"),
        ("Thanjavur", "TH", 28.0, "TN49"),
        ("Karur", "KA", 33.5, "TN47"),
        ("Pudukkottai", "PU", 26.5, "TN55"),
    ];
    let kinds = ["Express", "Town", "Ultra Deluxe"];

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    // Header row: serial column plus the canonical schema, so the output
    // exercises the loader's serial-discard path.
    sheet.write_string(0, 0, SERIAL_COLUMN)?;
    for (col, name) in REQUIRED_COLUMNS.iter().enumerate() {
        sheet.write_string(0, (col + 1) as u16, *name)?;
    }

    let mut row: u32 = 1;
    for (branch, prefix, mean_epkm, depot) in branches {
        for route_no in 1..=12 {
            let route_number = format!("{prefix}{route_no:02}");
            let vehicle_number = format!("{depot}N{:04}", rng.next_u64() % 10_000);
            let route_name = format!("{branch} - Route {route_no}");
            let kind = kinds[(rng.next_u64() % kinds.len() as u64) as usize];

            let opkm = rng.gauss(30.0, 3.0).clamp(20.0, 45.0) as i64;
            let epkm = (rng.gauss(mean_epkm, 4.0).clamp(12.0, 55.0) * 100.0).round() / 100.0;
            let remarks = if epkm < 22.0 { "Review route viability" } else { "" };

            sheet.write_number(row, 0, row as f64)?;
            sheet.write_string(row, 1, branch)?;
            sheet.write_string(row, 2, &route_number)?;
            sheet.write_string(row, 3, &vehicle_number)?;
            sheet.write_string(row, 4, &route_name)?;
            sheet.write_string(row, 5, kind)?;
            sheet.write_number(row, 6, opkm as f64)?;
            sheet.write_number(row, 7, epkm)?;
            sheet.write_string(row, 8, remarks)?;
            row += 1;
        }
    }

    let output_path = "sample_pos_data.xlsx";
    workbook.save(output_path).context("Failed to save workbook")?;

    println!(
        "Wrote {} records across {} branches to {output_path}",
        row - 1,
        branches.len()
    );
    Ok(())
}
