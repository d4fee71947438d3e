use clap::Parser;
mod cli;
use cli::Cli;
mod convert;
use convert::{dump_to_c_array, dump_to_c_array_strict};
mod errors;
mod report;
use report::{build_report, report_to_text};
mod utils;
use utils::highlight_c;
use std::fs;
use std::io::Read;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let dump = read_input(&cli.files)?;

    let fragment = if cli.strict {
        dump_to_c_array_strict(&dump, &cli.name)?
    } else {
        dump_to_c_array(&dump, &cli.name)
    };

    match &cli.output {
        Some(path) => {
            fs::write(path, format!("{}\n", fragment))?;
            println!("✅ Converted {} → {}", source_label(&cli.files), path);
        }
        None if cli.color => println!("{}", highlight_c(&fragment)),
        None => println!("{}", fragment),
    }

    if let Some(path) = &cli.report {
        let rep = build_report(&dump, &cli.name);
        let content = if cli.json {
            if cli.pretty {
                serde_json::to_string_pretty(&rep)?
            } else {
                serde_json::to_string(&rep)?
            }
        } else {
            report_to_text(&rep)
        };
        fs::write(path, content)?;
        println!("✅ Report written to {}", path);
    }

    Ok(())
}

fn read_input(files: &[String]) -> anyhow::Result<String> {
    let mut dump = String::new();
    if files.is_empty() {
        std::io::stdin().read_to_string(&mut dump)?;
    } else {
        for file in files {
            ensure_file_exists(file)?;
            dump.push_str(&fs::read_to_string(file)?);
            if !dump.ends_with('\n') {
                dump.push('\n');
            }
        }
    }
    Ok(dump)
}

fn source_label(files: &[String]) -> String {
    if files.is_empty() {
        "<stdin>".to_string()
    } else {
        files.join(", ")
    }
}

fn ensure_file_exists(path: &str) -> anyhow::Result<()> {
    if !std::path::Path::new(path).exists() {
        return Err(anyhow::anyhow!("Input file '{}' does not exist", path));
    }
    Ok(())
}
