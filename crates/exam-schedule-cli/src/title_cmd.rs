use std::path::Path;

use exam_schedule::set_title;

pub fn run(file: &Path, exam_name: &str, semester: &str) -> Result<(), i32> {
    if !file.exists() {
        eprintln!("Error: file not found: {}", file.display());
        return Err(1);
    }

    let update = set_title(file, exam_name, semester).map_err(|e| {
        eprintln!("Error: {e}");
        1
    })?;

    println!("Updated {} -> '{}'", update.path.display(), update.title);
    Ok(())
}
