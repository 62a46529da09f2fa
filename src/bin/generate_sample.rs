use std::fs;
use std::io::Write;
use std::path::Path;

use image::{Rgb, RgbImage};

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

/// Logistic growth curve for per-capita consumption, kWh.
fn consumption_curve(year: i32) -> f64 {
    6000.0 / (1.0 + (-(year - 1970) as f64 / 18.0).exp())
}

fn write_electricity_csv(path: &Path, rng: &mut SimpleRng) -> usize {
    let mut file = fs::File::create(path).expect("Failed to create electricity CSV");
    writeln!(file, "Year,Electricity per capita (kWh)").expect("Failed to write header");

    let mut rows = 0;
    for year in 1880..=2020 {
        let value = (consumption_curve(year) + rng.gauss(0.0, 25.0)).max(0.0);
        writeln!(file, "{year},{value:.2}").expect("Failed to write row");
        rows += 1;
    }
    rows
}

/// One synthetic photo: mid-gray base with a channel spread that scales
/// with the target saturation, warm channels on top (sepia-ish).
fn generate_photo(rng: &mut SimpleRng, target_saturation: f64) -> RgbImage {
    RgbImage::from_fn(64, 64, |_, _| {
        let value = 0.3 + 0.5 * rng.next_f64();
        let spread = target_saturation * (0.6 + 0.4 * rng.next_f64());
        let max = value;
        let min = value * (1.0 - spread);
        let mid = min + (max - min) * rng.next_f64();
        Rgb([
            (max * 255.0) as u8,
            (mid * 255.0) as u8,
            (min * 255.0) as u8,
        ])
    })
}

fn write_photo_folders(root: &Path, rng: &mut SimpleRng) -> usize {
    let mut folders = 0;
    for decade in (1880..=2020).step_by(10) {
        let dir = root.join(decade.to_string());
        fs::create_dir_all(&dir).expect("Failed to create decade folder");

        // Saturation climbs from near-monochrome to modern color film.
        let progress = (decade - 1880) as f64 / 140.0;
        for i in 0..4 {
            let target = (0.05 + 0.75 * progress) * (0.9 + 0.2 * rng.next_f64());
            let img = generate_photo(rng, target.min(1.0));
            img.save(dir.join(format!("photo_{i}.png")))
                .expect("Failed to save photo");
        }
        folders += 1;
    }
    folders
}

fn main() {
    let mut rng = SimpleRng::new(42);

    fs::create_dir_all("data").expect("Failed to create data directory");

    let csv_path = Path::new("data/electricity.csv");
    let rows = write_electricity_csv(csv_path, &mut rng);

    let colors_root = Path::new("data/colors");
    let folders = write_photo_folders(colors_root, &mut rng);

    println!(
        "Wrote {rows} electricity rows to {} and {folders} decade folders under {}",
        csv_path.display(),
        colors_root.display()
    );
}
