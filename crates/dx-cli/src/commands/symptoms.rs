use std::error::Error;

use dx_core::SYMPTOM_NAMES;

pub fn run() -> Result<(), Box<dyn Error>> {
    for (slot, name) in SYMPTOM_NAMES.iter().enumerate() {
        println!("{slot:>2}\t{name}");
    }
    Ok(())
}
