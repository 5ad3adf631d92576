mod logger;
mod report;

use clap::{Arg, ArgAction, ArgMatches, Command};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use mt22_core::{Mt22ErrorExt, Program, Script, generate_ast_from_source};
use report::{BuiltFile, FileReport};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Command::new("mt22")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Lowers MT22 programs into their abstract syntax tree");

    let cli = setup_cli(cli);
    let matches = cli.get_matches();
    logger::init(matches.get_count("verbose"));
    dispatch_commands(&matches)
}

fn files_arg() -> Arg {
    Arg::new("files")
        .help("MT22 source files or glob patterns")
        .required(true)
        .num_args(1..)
        .index(1)
}

/// Sets up the CLI with subcommands and arguments.
fn setup_cli(cli: Command) -> Command {
    cli.arg(
        Arg::new("verbose")
            .help("Increase log output (-v info, -vv debug, -vvv trace)")
            .short('v')
            .long("verbose")
            .action(ArgAction::Count)
            .global(true),
    )
    .subcommand(
        Command::new("build")
            .about("Lower the given files and print their AST")
            .arg(files_arg())
            .arg(
                Arg::new("format")
                    .help("Output format")
                    .short('f')
                    .long("format")
                    .value_parser(["text", "json"])
                    .default_value("text")
                    .value_name("FORMAT"),
            )
            .arg(
                Arg::new("output")
                    .help("Write the AST to this file instead of stdout")
                    .short('o')
                    .long("output")
                    .value_parser(clap::value_parser!(String))
                    .value_name("FILE"),
            ),
    )
    .subcommand(
        Command::new("check")
            .about("Lower the given files and summarize the result")
            .arg(files_arg())
            .arg(
                Arg::new("format")
                    .help("Summary format")
                    .short('f')
                    .long("format")
                    .value_parser(["table", "json"])
                    .default_value("table")
                    .value_name("FORMAT"),
            ),
    )
}

/// Dispatches the command based on the parsed arguments.
fn dispatch_commands(matches: &ArgMatches) -> ExitCode {
    match matches.subcommand() {
        Some(("build", sub_m)) => run_build(sub_m),
        Some(("check", sub_m)) => run_check(sub_m),
        _ => {
            eprintln!("No valid subcommand was used. Use --help for more information.");
            ExitCode::FAILURE
        }
    }
}

fn run_build(sub_m: &ArgMatches) -> ExitCode {
    let scripts = match load_scripts(sub_m) {
        Ok(scripts) => scripts,
        Err(e) => {
            report::print_diagnostic(e.as_ref());
            return ExitCode::FAILURE;
        }
    };
    let results = lower_all(&scripts);

    let mut failed = false;
    let mut lowered = Vec::new();
    for (script, result) in scripts.iter().zip(&results) {
        match result {
            Ok(program) => lowered.push(BuiltFile {
                file: &script.name,
                program,
            }),
            Err(e) => {
                report::print_diagnostic(e.as_ref());
                failed = true;
            }
        }
    }

    let rendered = match sub_m.get_one::<String>("format").map(String::as_str) {
        Some("json") => match serde_json::to_string_pretty(&lowered) {
            Ok(json) => json,
            Err(e) => {
                eprintln!("Failed to serialize AST: {}", e);
                return ExitCode::FAILURE;
            }
        },
        _ => render_text(&lowered),
    };

    match sub_m.get_one::<String>("output") {
        Some(output_file) => {
            if let Err(e) = fs::write(output_file, &rendered) {
                eprintln!("Failed to write {}: {}", output_file, e);
                return ExitCode::FAILURE;
            }
            info!("wrote {}", output_file);
        }
        None => println!("{}", rendered),
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

fn run_check(sub_m: &ArgMatches) -> ExitCode {
    let scripts = match load_scripts(sub_m) {
        Ok(scripts) => scripts,
        Err(e) => {
            report::print_diagnostic(e.as_ref());
            return ExitCode::FAILURE;
        }
    };

    let reports = scripts
        .iter()
        .zip(lower_all(&scripts))
        .map(|(script, result)| match result {
            Ok(program) => FileReport::lowered(&script.name, &program),
            Err(e) => {
                report::print_diagnostic(e.as_ref());
                FileReport::failed(&script.name, e.as_ref())
            }
        })
        .collect::<Vec<_>>();

    match sub_m.get_one::<String>("format").map(String::as_str) {
        Some("json") => match serde_json::to_string_pretty(&reports) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to serialize report: {}", e);
                return ExitCode::FAILURE;
            }
        },
        _ => println!("{}", report::summary_table(&reports)),
    }

    if reports.iter().any(|r| r.status == report::Status::Failed) {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Plain paths are read directly; anything with glob metacharacters is expanded.
fn load_scripts(sub_m: &ArgMatches) -> Result<Vec<Script>, Box<dyn Mt22ErrorExt>> {
    let mut scripts = Vec::new();
    for file in sub_m.get_many::<String>("files").into_iter().flatten() {
        if file.contains(['*', '?', '[']) {
            scripts.extend(Script::discover(file)?);
        } else {
            scripts.push(Script::new(PathBuf::from(file))?);
        }
    }
    debug!("loaded {} script(s)", scripts.len());
    Ok(scripts)
}

fn lower_all(scripts: &[Script]) -> Vec<Result<Program, Box<dyn Mt22ErrorExt>>> {
    let progress = if scripts.len() > 1 {
        ProgressBar::new(scripts.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::with_template("{bar:30} {pos}/{len} {msg}") {
        progress.set_style(style);
    }

    let results = scripts
        .iter()
        .map(|script| {
            progress.set_message(script.name.clone());
            let result = generate_ast_from_source(script);
            progress.inc(1);
            result
        })
        .collect();

    progress.finish_and_clear();
    results
}

fn render_text(lowered: &[BuiltFile<'_>]) -> String {
    match lowered {
        [single] => single.program.to_string(),
        many => many
            .iter()
            .map(|built| format!("// {}\n{}", built.file, built.program))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}
