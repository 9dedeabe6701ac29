//! Print today's planner note contents

use std::io;

use dayplan::notify::StderrNotify;
use dayplan::{PlannerFile, Settings, Vault};

pub fn run(vault: &Vault, settings: &Settings) -> io::Result<()> {
    let notify = StderrNotify;
    let planner = PlannerFile::new(vault, settings, &notify);

    let path = planner.today_file_path()?;
    let contents = planner.read_file(&path)?;
    print!("{}", contents);
    Ok(())
}
