use std::fs;
use std::path::PathBuf;

use mt22_core::{
    Level, ProgramStats, Script, generate_ast_from_source, generate_error_report, parse_script,
};
use tempfile::tempdir;

const SAMPLE: &str = "\
count: integer = 3;
main: function void(out n: integer) inherit base {
    i: integer;
    for (i = 0, i < count, i + 1) {
        if (i % 2 == 0) printInteger(i);
    }
    return;
}
";

#[test]
fn empty_script_is_rejected_before_parsing() {
    let script = Script::from_source("blank.mt22", "  \n\t ");
    let err = parse_script(&script).expect_err("blank scripts are empty");
    assert_eq!(err.level(), Level::Error);
    assert_eq!(err.message(), "The provided script is empty.");
    assert_eq!(err.location().map(|l| (l.line, l.column)), Some((1, 1)));
}

#[test]
fn syntax_errors_point_at_the_offending_line() {
    let script = Script::from_source("broken.mt22", "a: integer;\nb: integer = ;\n");
    let err = generate_ast_from_source(&script).expect_err("missing initializer");
    let location = err.location().expect("syntax errors are located");
    assert_eq!(location.file, "broken.mt22");
    assert_eq!(location.line, 2);
    assert_eq!(err.issuer(), "mt22.syntax.parse_script");
}

#[test]
fn error_report_format() {
    let script = Script::from_source("broken.mt22", "x integer;");
    let err = generate_ast_from_source(&script).expect_err("missing colon");
    let report = generate_error_report(err.as_ref());
    assert!(report.starts_with("MT22 | ERROR | broken.mt22:1:"), "{}", report);
    assert!(report.contains("Syntax error"));
}

#[test]
fn missing_file_is_reported() {
    let dir = tempdir().expect("tempdir");
    let err = Script::new(dir.path().join("absent.mt22")).expect_err("file does not exist");
    assert_eq!(err.issuer(), "mt22.script");
    assert!(err.message().starts_with("Missing script"));
}

#[test]
fn script_from_disk_keeps_its_file_name() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("one.mt22");
    fs::write(&path, "x: integer;").expect("write script");

    let script = Script::new(path.clone()).expect("script loads");
    assert_eq!(script.name, "one.mt22");
    assert_eq!(script.path, path);
    assert!(generate_ast_from_source(&script).is_ok());
}

#[test]
fn discover_loads_matching_scripts_in_path_order() {
    let dir = tempdir().expect("tempdir");
    for name in ["b.mt22", "a.mt22", "notes.txt"] {
        fs::write(dir.path().join(name), "x: integer;").expect("write file");
    }

    let pattern = dir.path().join("*.mt22");
    let scripts = Script::discover(&pattern.to_string_lossy()).expect("two scripts match");
    let names = scripts.iter().map(|s| s.name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, vec!["a.mt22", "b.mt22"]);
}

#[test]
fn discover_without_matches_is_an_error() {
    let dir = tempdir().expect("tempdir");
    let pattern: PathBuf = dir.path().join("*.mt22");
    let err = Script::discover(&pattern.to_string_lossy()).expect_err("nothing matches");
    assert!(err.message().starts_with("No script matches"));
}

#[test]
fn program_dump_uses_node_names() {
    let script = Script::from_source("dump.mt22", "x, y: integer = 1 + 2, -a;\nf: function void() {}");
    let program = generate_ast_from_source(&script).expect("lowers");
    assert_eq!(
        program.to_string(),
        "Program([\n\
         \tVarDecl(x, IntegerType, BinExpr(+, IntegerLit(1), IntegerLit(2)))\n\
         \tVarDecl(y, IntegerType, UnExpr(-, Id(a)))\n\
         \tFuncDecl(f, VoidType, [], None, BlockStmt([]))\n\
         ])"
    );
}

#[test]
fn statement_dump() {
    let script = Script::from_source("dump.mt22", SAMPLE);
    let program = generate_ast_from_source(&script).expect("lowers");
    let dump = program.to_string();
    assert!(dump.contains("FuncDecl(main, VoidType, [OutParam(n, IntegerType)], base, BlockStmt(["));
    assert!(dump.contains("VarDecl(i, IntegerType)"));
    assert!(dump.contains(
        "ForStmt(AssignStmt(Id(i), IntegerLit(0)), BinExpr(<, Id(i), Id(count)), BinExpr(+, Id(i), IntegerLit(1))"
    ));
    assert!(dump.contains(
        "IfStmt(BinExpr(==, BinExpr(%, Id(i), IntegerLit(2)), IntegerLit(0)), CallStmt(printInteger, [Id(i)]))"
    ));
    assert!(dump.contains("ReturnStmt()"));
}

#[test]
fn float_dump_keeps_the_fraction() {
    let script = Script::from_source("dump.mt22", "z: float = .e5;");
    let program = generate_ast_from_source(&script).expect("lowers");
    assert!(program.to_string().contains("FloatLit(0.0)"));
}

#[test]
fn ast_serializes_to_json() {
    let script = Script::from_source("json.mt22", "x: integer = 1 + 2;");
    let program = generate_ast_from_source(&script).expect("lowers");
    let value = serde_json::to_value(&program).expect("serializable");

    let var = &value["decls"][0]["Var"];
    assert_eq!(var["name"], "x");
    assert_eq!(var["ty"], "Integer");
    assert_eq!(var["init"]["BinExpr"]["op"], "+");
    assert_eq!(var["init"]["BinExpr"]["left"]["IntegerLit"], 1);
}

#[test]
fn stats_count_every_kind_of_node() {
    let script = Script::from_source("stats.mt22", SAMPLE);
    let program = generate_ast_from_source(&script).expect("lowers");
    assert_eq!(
        ProgramStats::of(&program),
        ProgramStats {
            functions: 1,
            globals: 1,
            params: 1,
            locals: 1,
            // for, its block, the if, the call and the return
            statements: 5,
        }
    );
}
