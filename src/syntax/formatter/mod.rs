//! Canonical formatter for SCL
//!
//! Prints a parsed [`Program`] back to source in one canonical layout: one
//! declaration per block, one statement or field per line, blocks indented
//! per [`FormatOptions`]. Comments are not part of the AST and are dropped.
//!
//! Formatting is a fixed point: parsing the output yields the same tree.

mod expr;
mod options;


pub use options::FormatOptions;

use crate::parser::ast::{
    Declaration, Field, NextCase, Program, StateDecl, Statement, StmtKind, TlaBinaryOp, TlaExpr,
    UseStmt,
};
use crate::parser::{ParseErrors, parse};

/// Format SCL source code
///
/// Returns the parse errors instead if the source does not parse.
pub fn format(source: &str, options: &FormatOptions) -> Result<String, ParseErrors> {
    let program = parse(source).into_result()?;
    Ok(format_program(&program, options))
}

/// Render a program in canonical layout
pub fn format_program(program: &Program, options: &FormatOptions) -> String {
    let mut printer = Printer::new(options);
    for (i, declaration) in program.declarations.iter().enumerate() {
        if i > 0 {
            printer.out.push('\n');
        }
        printer.declaration(declaration);
    }
    printer.out
}

struct Printer<'o> {
    options: &'o FormatOptions,
    out: String,
    level: usize,
}

impl<'o> Printer<'o> {
    fn new(options: &'o FormatOptions) -> Self {
        Self {
            options,
            out: String::new(),
            level: 0,
        }
    }

    fn line(&mut self, text: impl AsRef<str>) {
        self.out.push_str(&self.options.indent(self.level));
        self.out.push_str(text.as_ref());
        self.out.push('\n');
    }

    fn open(&mut self, header: impl AsRef<str>) {
        self.line(format!("{} {{", header.as_ref()));
        self.level += 1;
    }

    fn close(&mut self) {
        self.level = self.level.saturating_sub(1);
        self.line("}");
    }

    fn fields(&mut self, fields: &[Field]) {
        for field in fields {
            self.line(format!("{}: {};", field.name, field.ty));
        }
    }

    fn declaration(&mut self, declaration: &Declaration) {
        match declaration {
            Declaration::Type(decl) => {
                self.open(format!("type {}", decl.name));
                self.fields(&decl.fields);
                self.close();
            }
            Declaration::Context(decl) if decl.fields.is_empty() => {
                self.line(format!("context {} {{}}", decl.name));
            }
            Declaration::Context(decl) => {
                self.open(format!("context {}", decl.name));
                self.fields(&decl.fields);
                self.close();
            }
            Declaration::State(decl) => self.state(decl),
        }
    }

    fn state(&mut self, state: &StateDecl) {
        let uses: Vec<&str> = state.uses.iter().map(|name| name.as_str()).collect();
        self.open(format!("state {} uses {}", state.name, uses.join(", ")));

        for use_stmt in &state.use_stmts {
            match use_stmt {
                UseStmt::State { source, fields } => {
                    self.open(format!("use state {source}"));
                    self.fields(fields);
                    self.close();
                }
                UseStmt::Context { context } => self.line(format!("use context {context};")),
                UseStmt::Type { ty } => self.line(format!("use type {ty};")),
            }
        }

        if let Some(precondition) = &state.precondition {
            self.open(precondition.keyword.as_str());
            for condition in &precondition.conditions {
                self.line(format!("{condition};"));
            }
            self.close();
        }

        for statement in &state.body {
            self.statement(statement);
        }

        self.open("next");
        for case in &state.next.cases {
            self.next_case(case);
        }
        self.close();

        self.close();
    }

    fn statement(&mut self, statement: &Statement) {
        match &statement.kind {
            StmtKind::Let { name, ty, value } => self.line(format!("let {name}: {ty} = {value};")),
            StmtKind::Select {
                name,
                ty,
                entity,
                where_clause,
                limit,
            } => {
                let mut text = format!("select {name}: {ty} from {entity}");
                if let Some(condition) = where_clause {
                    text.push_str(&format!(" where {condition}"));
                }
                if let Some(limit) = limit {
                    text.push_str(&format!(" limit {limit}"));
                }
                text.push(';');
                self.line(text);
            }
            StmtKind::Foreach {
                item,
                item_type,
                collection,
                body,
            } => {
                self.open(format!("foreach {item}: {item_type} in {collection}"));
                for statement in body {
                    self.statement(statement);
                }
                self.close();
            }
            StmtKind::Update {
                entity,
                assignments,
                where_clause,
            } => {
                let assignments: Vec<String> = assignments
                    .iter()
                    .map(|a| format!("{} = {}", a.field, a.value))
                    .collect();
                let mut text = format!("update {entity} set {}", assignments.join(", "));
                if let Some(condition) = where_clause {
                    text.push_str(&format!(" where {condition}"));
                }
                text.push(';');
                self.line(text);
            }
            StmtKind::Insert {
                entity,
                columns,
                values,
            } => {
                let columns: Vec<&str> = columns.iter().map(|c| c.as_str()).collect();
                let values: Vec<String> = values.iter().map(|v| v.to_string()).collect();
                self.line(format!(
                    "insert into {entity} ({}) values ({});",
                    columns.join(", "),
                    values.join(", ")
                ));
            }
            StmtKind::Delete {
                entity,
                where_clause,
            } => match where_clause {
                Some(condition) => self.line(format!("delete from {entity} where {condition};")),
                None => self.line(format!("delete from {entity};")),
            },
            StmtKind::Assert { expr } => self.line(format!("assert {expr};")),
            StmtKind::Commit => self.line("commit;"),
        }
    }

    fn next_case(&mut self, case: &NextCase) {
        let mut text = match case {
            NextCase::When {
                condition, target, ..
            } => format!("when {} => {target}", guard(condition)),
            NextCase::Otherwise { target, .. } => format!("otherwise => {target}"),
        };
        if let Some(export) = case.export() {
            let fields: Vec<String> = export
                .fields
                .iter()
                .map(|field| format!("{}: {};", field.name, field.ty))
                .collect();
            text.push_str(&format!(" {{ export {} }}", fields.join(" ")));
        }
        self.line(text);
    }
}

/// A `when` guard ends at the first top-level `=>`, so an implication or a
/// quantifier (whose body could contain one) is wrapped in parentheses.
fn guard(condition: &TlaExpr) -> String {
    match condition {
        TlaExpr::Binary {
            op: TlaBinaryOp::Implies,
            ..
        }
        | TlaExpr::Quantifier { .. } => format!("({condition})"),
        _ => condition.to_string(),
    }
}
