use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// IEC 61966-2-1 exact formula: sRGB to linear, scaled to 0..100
fn srgb_to_linear_exact(srgb: f64) -> f64 {
    let linear = if srgb <= 0.040449936 {
        srgb / 12.92
    } else {
        ((srgb + 0.055) / 1.055).powf(2.4)
    };
    linear * 100.0
}

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("critical_planes.rs");
    let mut file = File::create(&dest_path).unwrap();

    // Generate CRITICAL_PLANES (255 entries)
    //
    // Entry i is the linear RGB coordinate (0..100) halfway between 8-bit
    // sRGB values i and i + 1. Crossing one of these planes changes the
    // rounded 8-bit channel value.
    writeln!(file, "/// Linear RGB coordinates of the planes between adjacent 8-bit sRGB values").unwrap();
    writeln!(file, "/// Index: lower 8-bit value, Value: linear coordinate of value + 0.5").unwrap();
    writeln!(file, "pub static CRITICAL_PLANES: [f64; 255] = [").unwrap();
    for i in 0..255 {
        let srgb = (i as f64 + 0.5) / 255.0;
        let linear = srgb_to_linear_exact(srgb);
        if i > 0 && i % 4 == 0 {
            writeln!(file).unwrap();
        }
        write!(file, "    {:?},", linear).unwrap();
    }
    writeln!(file, "\n];").unwrap();

    // Rerun if build.rs changes
    println!("cargo::rerun-if-changed=build.rs");
}
