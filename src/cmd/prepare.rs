//! Ensure the planner folder and today's note exist

use std::io;

use dayplan::notify::StderrNotify;
use dayplan::{PlannerFile, Settings, Vault};

pub fn run(vault: &Vault, settings: &Settings) -> io::Result<()> {
    let notify = StderrNotify;
    let planner = PlannerFile::new(vault, settings, &notify);

    planner.prepare_file()?;

    // Output the path for shell pipeline compatibility
    println!("{}", planner.today_file_path()?);
    Ok(())
}
