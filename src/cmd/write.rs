//! Replace today's planner note contents

use std::io::{self, Read};

use dayplan::notify::StderrNotify;
use dayplan::{PlannerFile, Settings, Vault};

pub fn run(vault: &Vault, settings: &Settings, content: Option<String>) -> io::Result<()> {
    let notify = StderrNotify;
    let planner = PlannerFile::new(vault, settings, &notify);

    let path = planner.today_file_path()?;
    let contents = read_content(content)?;
    planner.write_file(&path, &contents)?;

    // Output the path for shell pipeline compatibility
    println!("{}", path);
    Ok(())
}

/// Read content from argument or stdin.
/// - Some("-") -> read from stdin
/// - Some(text) -> use the text directly
/// - None -> read from stdin (empty string if no data)
fn read_content(content: Option<String>) -> io::Result<String> {
    match content {
        Some(arg) if arg == "-" => read_from_stdin(),
        Some(text) => Ok(text),
        None => match read_from_stdin() {
            Ok(s) if !s.is_empty() => Ok(s),
            _ => Ok(String::new()),
        },
    }
}

fn read_from_stdin() -> io::Result<String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}
