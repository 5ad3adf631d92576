use mt22_core::ast::{
    ArrayCell, Assign, BinaryOperator as B, Block, Call, Decl, Expr, Lvalue, Stmt, Type, VarDecl,
};
use mt22_core::{Mt22ErrorExt, Script, generate_ast_from_source};

fn lower_body(body_src: &str) -> Result<Vec<Stmt>, Box<dyn Mt22ErrorExt>> {
    let src = format!("main: function void() {{\n{}\n}}", body_src);
    let program = generate_ast_from_source(&Script::from_source("stmt.mt22", &src))?;
    match program.decls.into_iter().next() {
        Some(Decl::Func(func)) => Ok(func.body.body),
        other => panic!("expected a function, got {:?}", other),
    }
}

fn body(body_src: &str) -> Vec<Stmt> {
    lower_body(body_src).unwrap_or_else(|e| panic!("failed to lower {:?}: {}", body_src, e))
}

fn id(name: &str) -> Expr {
    Expr::id(name)
}

fn int(value: i64) -> Expr {
    Expr::IntegerLit(value)
}

fn assign(name: &str, value: Expr) -> Stmt {
    Stmt::Assign(Assign {
        target: Lvalue::Id(name.to_string()),
        value,
    })
}

fn local(name: &str, ty: Type, init: Option<Expr>) -> Stmt {
    Stmt::VarDecl(VarDecl {
        name: name.to_string(),
        ty,
        init,
    })
}

#[test]
fn local_groups_are_spliced_into_the_block() {
    let stmts = body("a, b: integer = 1, 2; a = b; c: float;");
    assert_eq!(
        stmts,
        vec![
            local("a", Type::Integer, Some(int(1))),
            local("b", Type::Integer, Some(int(2))),
            assign("a", id("b")),
            local("c", Type::Float, None),
        ]
    );
}

#[test]
fn nested_blocks_flatten_their_own_declarations() {
    let stmts = body("{ x, y: boolean; }");
    assert_eq!(
        stmts,
        vec![Stmt::Block(Block {
            body: vec![local("x", Type::Boolean, None), local("y", Type::Boolean, None)],
        })]
    );
}

#[test]
fn assignment_to_array_cell() {
    let stmts = body("m[i, 2] = 3;");
    assert_eq!(
        stmts,
        vec![Stmt::Assign(Assign {
            target: Lvalue::ArrayCell(ArrayCell {
                name: "m".to_string(),
                indices: vec![id("i"), int(2)],
            }),
            value: int(3),
        })]
    );
}

#[test]
fn if_with_and_without_else() {
    let stmts = body("if (a) x = 1; if (b) { x = 2; } else x = 3;");
    assert_eq!(
        stmts,
        vec![
            Stmt::If {
                condition: id("a"),
                then_branch: Box::new(assign("x", int(1))),
                else_branch: None,
            },
            Stmt::If {
                condition: id("b"),
                then_branch: Box::new(Stmt::Block(Block {
                    body: vec![assign("x", int(2))],
                })),
                else_branch: Some(Box::new(assign("x", int(3)))),
            },
        ]
    );
}

#[test]
fn dangling_else_binds_to_the_nearest_if() {
    let stmts = body("if (a) if (b) x = 1; else x = 2;");
    assert_eq!(
        stmts,
        vec![Stmt::If {
            condition: id("a"),
            then_branch: Box::new(Stmt::If {
                condition: id("b"),
                then_branch: Box::new(assign("x", int(1))),
                else_branch: Some(Box::new(assign("x", int(2)))),
            }),
            else_branch: None,
        }]
    );
}

#[test]
fn for_loop_has_four_parts() {
    let stmts = body("for (i = 0, i < 10, i + 1) sum = sum + i;");
    assert_eq!(
        stmts,
        vec![Stmt::For {
            init: Assign {
                target: Lvalue::Id("i".to_string()),
                value: int(0),
            },
            condition: Expr::binary(B::Lt, id("i"), int(10)),
            update: Expr::binary(B::Add, id("i"), int(1)),
            body: Box::new(assign("sum", Expr::binary(B::Add, id("sum"), id("i")))),
        }]
    );
}

#[test]
fn while_and_do_while() {
    let stmts = body("while (n > 0) n = n - 1; do { n = n + 1; } while (n < 5);");
    assert_eq!(
        stmts,
        vec![
            Stmt::While {
                condition: Expr::binary(B::Gt, id("n"), int(0)),
                body: Box::new(assign("n", Expr::binary(B::Sub, id("n"), int(1)))),
            },
            Stmt::DoWhile {
                body: Block {
                    body: vec![assign("n", Expr::binary(B::Add, id("n"), int(1)))],
                },
                condition: Expr::binary(B::Lt, id("n"), int(5)),
            },
        ]
    );
}

#[test]
fn do_while_body_must_be_a_block() {
    assert!(lower_body("do n = 1; while (n);").is_err());
}

#[test]
fn jumps_and_returns() {
    let stmts = body("break; continue; return; return a + 1;");
    assert_eq!(
        stmts,
        vec![
            Stmt::Break,
            Stmt::Continue,
            Stmt::Return(None),
            Stmt::Return(Some(Expr::binary(B::Add, id("a"), int(1)))),
        ]
    );
}

#[test]
fn call_statements() {
    let stmts = body("printInteger(4); tick();");
    assert_eq!(
        stmts,
        vec![
            Stmt::Call(Call {
                name: "printInteger".to_string(),
                args: vec![int(4)],
            }),
            Stmt::Call(Call {
                name: "tick".to_string(),
                args: vec![],
            }),
        ]
    );
}

#[test]
fn bare_expressions_are_not_statements() {
    assert!(lower_body("a + 1;").is_err());
    assert!(lower_body("x = 1").is_err());
}

#[test]
fn comments_are_ignored() {
    let stmts = body(
        "// line comment
         x = 1; /* block
         comment */ y = 2;",
    );
    assert_eq!(stmts, vec![assign("x", int(1)), assign("y", int(2))]);
}

#[test]
fn empty_body() {
    assert_eq!(body(""), vec![]);
}
