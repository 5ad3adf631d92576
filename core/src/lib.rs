pub mod ast;
pub mod error;
pub mod location;
pub mod lower;
pub mod script;
pub mod syntax;

pub use ast::{Program, ProgramStats};
pub use error::{Level, Mt22ErrorExt, Mt22Result};
pub use location::{Location, Span};
pub use lower::lower_program;
pub use script::Script;
pub use syntax::{Mt22Parser, parse_script};

pub fn generate_error_report<E: Mt22ErrorExt + ?Sized>(error: &E) -> String {
    let level = error.level();
    let location = match error.location() {
        Some(loc) => loc.to_string(),
        None => "unknown location".to_string(),
    };
    let message = error.message();

    format!("MT22 | {} | {} | {}", level, location, message)
}

/// Parses and lowers a script in one step.
pub fn generate_ast_from_source(script: &Script) -> Mt22Result<Program> {
    let program = parse_script(script)?;
    lower_program(program, script)
}
