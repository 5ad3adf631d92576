/// cli/src/report.rs
/// description: per-file results of a CLI run and the ways they are shown
/// (summary table, JSON, styled diagnostics).
use comfy_table::{Table, presets::UTF8_FULL};
use console::Style;
use mt22_core::{Mt22ErrorExt, Program, ProgramStats, generate_error_report};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ok,
    Failed,
}

#[derive(Debug, Serialize)]
pub struct FileReport {
    pub file: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<ProgramStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileReport {
    pub fn lowered(file: &str, program: &Program) -> Self {
        FileReport {
            file: file.to_string(),
            status: Status::Ok,
            stats: Some(ProgramStats::of(program)),
            error: None,
        }
    }

    pub fn failed(file: &str, error: &dyn Mt22ErrorExt) -> Self {
        FileReport {
            file: file.to_string(),
            status: Status::Failed,
            stats: None,
            error: Some(generate_error_report(error)),
        }
    }
}

/// A lowered program paired with the file it came from, for `build --format json`.
#[derive(Debug, Serialize)]
pub struct BuiltFile<'a> {
    pub file: &'a str,
    pub program: &'a Program,
}

pub fn summary_table(reports: &[FileReport]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "File",
        "Functions",
        "Globals",
        "Params",
        "Locals",
        "Statements",
        "Status",
    ]);

    for report in reports {
        let counts = match report.stats {
            Some(stats) => vec![
                stats.functions.to_string(),
                stats.globals.to_string(),
                stats.params.to_string(),
                stats.locals.to_string(),
                stats.statements.to_string(),
            ],
            None => vec!["-".to_string(); 5],
        };
        let status = match report.status {
            Status::Ok => "ok",
            Status::Failed => "failed",
        };

        let mut row = vec![report.file.clone()];
        row.extend(counts);
        row.push(status.to_string());
        table.add_row(row);
    }
    table
}

pub fn print_diagnostic(error: &dyn Mt22ErrorExt) {
    let style = match error.level() {
        mt22_core::Level::Critical | mt22_core::Level::Error => Style::new().red().bold(),
        mt22_core::Level::Warning => Style::new().yellow(),
        mt22_core::Level::Info => Style::new().cyan(),
    };
    eprintln!("{}", style.apply_to(generate_error_report(error)));
}
