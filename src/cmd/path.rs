//! Print today's planner note path

use std::io;

use dayplan::notify::StderrNotify;
use dayplan::{PlannerFile, Settings, Vault};

pub fn run(vault: &Vault, settings: &Settings) -> io::Result<()> {
    let notify = StderrNotify;
    let planner = PlannerFile::new(vault, settings, &notify);
    println!("{}", planner.today_file_path()?);
    Ok(())
}
