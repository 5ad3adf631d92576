//! Size summary of a lowered program, reported by `mt22 check`.

use serde::Serialize;

use super::decl::{Decl, Program};
use super::stmt::{Block, Stmt};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProgramStats {
    pub functions: usize,
    pub globals: usize,
    pub params: usize,
    pub locals: usize,
    pub statements: usize,
}

impl ProgramStats {
    pub fn of(program: &Program) -> Self {
        let mut stats = ProgramStats::default();
        for decl in &program.decls {
            match decl {
                Decl::Func(func) => {
                    stats.functions += 1;
                    stats.params += func.params.len();
                    stats.count_block(&func.body);
                }
                Decl::Var(_) => stats.globals += 1,
            }
        }
        stats
    }

    fn count_block(&mut self, block: &Block) {
        for stmt in &block.body {
            self.count_stmt(stmt);
        }
    }

    fn count_stmt(&mut self, stmt: &Stmt) {
        if let Stmt::VarDecl(_) = stmt {
            self.locals += 1;
            return;
        }

        self.statements += 1;
        match stmt {
            Stmt::Block(block) | Stmt::DoWhile { body: block, .. } => self.count_block(block),
            Stmt::If {
                then_branch,
                else_branch,
                ..
            } => {
                self.count_stmt(then_branch);
                if let Some(else_branch) = else_branch {
                    self.count_stmt(else_branch);
                }
            }
            Stmt::While { body, .. } | Stmt::For { body, .. } => self.count_stmt(body),
            _ => {}
        }
    }
}
