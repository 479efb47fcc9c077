use rand::Rng;
use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};

const DEPARTMENTS: [(&str, &[&str]); 4] = [
    ("Engineering", &["Backend", "Frontend", "Platform", "QA"]),
    ("Sales", &["Enterprise", "SMB", "Partners"]),
    ("Marketing", &["Brand", "Growth"]),
    ("Finance", &["Accounting", "Payroll", "Treasury"]),
];

const POSITIONS: [&str; 5] = ["Junior", "Middle", "Senior", "Lead", "Head"];

/// Usage: data_generator [PATH] [ROWS]
fn main() -> std::io::Result<()> {
    let mut args = env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "data/staff.csv".to_string());
    let rows: usize = args.next().and_then(|r| r.parse().ok()).unwrap_or(10_000);

    let file = File::create(&path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "id;department;team;position;grade;salary")?;

    let mut rng = rand::rng();
    for i in 0..rows {
        let (department, teams) = DEPARTMENTS[rng.random_range(0..DEPARTMENTS.len())];
        let team = teams[rng.random_range(0..teams.len())];
        let grade = rng.random_range(0..POSITIONS.len());
        let salary = 50_000 + grade as i64 * 40_000 + rng.random_range(0..30_000);
        writeln!(
            writer,
            "{};{};{};{};{};{}",
            i + 1,
            department,
            team,
            POSITIONS[grade],
            grade + 1,
            salary
        )?;
    }
    writer.flush()?;

    println!("Sample CSV generated: {} ({} rows)", path, rows);
    Ok(())
}
