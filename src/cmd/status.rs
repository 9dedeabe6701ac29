//! Report whether today's planner note exists

use std::io;

use dayplan::notify::StderrNotify;
use dayplan::{PlannerFile, Settings, Vault};

pub fn run(vault: &Vault, settings: &Settings, json: bool) -> io::Result<()> {
    let notify = StderrNotify;
    let planner = PlannerFile::new(vault, settings, &notify);

    let exists = planner.has_today_note()?;
    let path = planner.today_file_path().ok();

    if json {
        let status = serde_json::json!({
            "exists": exists,
            "path": path,
        });
        println!("{}", status);
        return Ok(());
    }

    match path {
        Some(path) if exists => println!("today's planner note: {}", path),
        Some(path) => println!("today's planner note (not created yet): {}", path),
        None => println!("no planner note registered for today"),
    }
    Ok(())
}
