use csv::Writer;
use freefall::config::bodies::Skydiver;
use freefall::models::FallModel;
use std::env;
use std::error::Error;
use std::fs::{self, File};
use std::path::Path;

fn main() -> Result<(), Box<dyn Error>> {
    // Release height in meters, optionally given on the command line
    let height: f64 = match env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => 1000.0,
    };

    let model = FallModel::from_body(&Skydiver)?;

    println!("Release from {} m:", height);
    for (label, value) in model.properties().as_map() {
        println!("  {} = {}", label, value);
    }
    match model.terminal_velocity() {
        Some(v_term) => println!("Terminal velocity: {:.2} m/s", v_term),
        None => println!("Terminal velocity: undefined (vacuum)"),
    }
    println!("Air time: {:.2} s", model.air_time(height)?);
    println!("Landing speed: {:.2} m/s", model.landing_speed(height)?);

    let profile = model.descent_profile(height)?;

    // Create output directory if it doesn't exist
    let output_dir = Path::new("output");
    fs::create_dir_all(output_dir)?;

    let file = File::create(output_dir.join("descent_profile.csv"))?;
    let mut writer = Writer::from_writer(file);

    // Write every 10th step plus the terminating step
    let last = profile.len() - 1;
    for (i, sample) in profile.iter().enumerate() {
        if i % 10 == 0 || i == last {
            writer.serialize(sample)?;
        }
    }
    writer.flush()?;
    println!("Descent profile has been written to output/descent_profile.csv");

    Ok(())
}
