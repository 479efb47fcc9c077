use anyhow::{Context, Result};
use clap::Parser;
use department_report::{
    ColumnRef, MenuChoice, SchemaMapping, Table, build_hierarchy, build_report,
    menu::MENU_PROMPT,
    output::{export_report, write_hierarchy, write_report},
};
use dialoguer::Input;
use std::io::{self, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Department hierarchy and salary summaries from `;`-delimited employee files.
///
/// Any value not given on the command line is asked for interactively.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Input file name (`.csv` is appended when missing)
    #[arg(short, long)]
    input: Option<String>,

    /// Menu item: 1 = hierarchy, 2 = summary, 3 = save summary
    #[arg(short, long)]
    mode: Option<String>,

    /// Output file name for menu item 3
    #[arg(short, long)]
    output: Option<String>,

    /// Department column: index, `last`, or header name
    #[arg(long, default_value = "1")]
    department_column: ColumnRef,

    /// Division/team column: index, `last`, or header name
    #[arg(long, default_value = "2")]
    division_column: ColumnRef,

    /// Salary column: index, `last`, or header name
    #[arg(long, default_value = "last")]
    salary_column: ColumnRef,
}

fn prompt(text: &str) -> Result<String> {
    let answer: String = Input::new()
        .with_prompt(text)
        .interact_text()
        .with_context(|| format!("reading answer to {text:?}"))?;
    Ok(answer.trim().to_string())
}

fn main() -> Result<()> {
    // logs go to stderr so reports on stdout stay clean
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let input = match args.input {
        Some(name) => name,
        None => prompt("Enter the file name")?,
    };
    let mode = match args.mode {
        Some(mode) => mode,
        None => prompt(MENU_PROMPT)?,
    };
    let choice: MenuChoice = mode.parse()?;
    info!(%input, %choice, "starting");

    let table = Table::load_csv(&input).with_context(|| format!("loading {input}"))?;
    let mapping = SchemaMapping {
        department: args.department_column,
        division: args.division_column,
        salary: args.salary_column,
    };
    let schema = mapping.resolve(&table)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match choice {
        MenuChoice::Hierarchy => {
            let hierarchy = build_hierarchy(&table, &schema);
            write_hierarchy(&hierarchy, &mut out)?;
        }
        MenuChoice::Report => {
            let report = build_report(&table, &schema)?;
            write_report(&report, &mut out)?;
        }
        MenuChoice::ExportReport => {
            let report = build_report(&table, &schema)?;
            let name = match args.output {
                Some(name) => name,
                None => prompt("Enter the output file name")?,
            };
            let path =
                export_report(&report, &name).with_context(|| format!("writing {name}"))?;
            writeln!(out, "Report saved to {}", path.display())?;
        }
    }
    out.flush()?;

    Ok(())
}
