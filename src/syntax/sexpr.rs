//! S-expression dump of the AST
//!
//! A compact, position-free rendering of the tree, for debugging and for
//! comparing parses structurally: two programs that differ only in source
//! layout produce the same dump.
//!
//! ```text
//! (program (type Acc (field bal int)))
//! (+ 1 (* 2 3))
//! (\E R x k (= (. x f) 1))
//! ```

use crate::parser::ast::{
    Declaration, Expr, Field, Literal, NextCase, Program, QualifiedName, StateDecl, Statement,
    StmtKind, TlaExpr, Type, UseStmt,
};

/// Dump a whole program
pub fn to_sexpr(program: &Program) -> String {
    let mut out = String::from("(program");
    for declaration in &program.declarations {
        out.push(' ');
        out.push_str(&declaration_to_sexpr(declaration));
    }
    out.push(')');
    out
}

pub fn declaration_to_sexpr(declaration: &Declaration) -> String {
    match declaration {
        Declaration::Type(decl) => list("type", decl.name.as_str(), fields(&decl.fields)),
        Declaration::Context(decl) => list("context", decl.name.as_str(), fields(&decl.fields)),
        Declaration::State(decl) => state_to_sexpr(decl),
    }
}

pub fn expr_to_sexpr(expr: &Expr) -> String {
    match expr {
        Expr::Binary { op, left, right } => format!(
            "({} {} {})",
            op.symbol(),
            expr_to_sexpr(left),
            expr_to_sexpr(right)
        ),
        Expr::Unary { op, operand } => format!("({} {})", op.symbol(), expr_to_sexpr(operand)),
        Expr::FieldAccess { object, field } => format!("(. {object} {field})"),
        Expr::StructLiteral { fields } => {
            let fields: Vec<String> = fields
                .iter()
                .map(|field| format!("({} {})", field.name, expr_to_sexpr(&field.value)))
                .collect();
            format!("(struct {})", fields.join(" "))
        }
        Expr::Identifier(name) => name.to_string(),
        Expr::Literal(Literal::Number(value)) => value.to_string(),
        Expr::Literal(Literal::String(raw)) => format!("\"{raw}\""),
        Expr::Literal(Literal::Boolean(value)) => value.to_string(),
        Expr::Literal(Literal::Null) => "null".to_string(),
    }
}

pub fn tla_to_sexpr(expr: &TlaExpr) -> String {
    match expr {
        TlaExpr::Binary { op, left, right } => format!(
            "({} {} {})",
            op.symbol(),
            tla_to_sexpr(left),
            tla_to_sexpr(right)
        ),
        TlaExpr::Unary { op, operand } => format!("({} {})", op.symbol(), tla_to_sexpr(operand)),
        TlaExpr::Quantifier {
            kind,
            relation,
            var,
            binding,
            body,
        } => format!(
            "({} {relation} {var} {} {})",
            kind.symbol(),
            expr_to_sexpr(binding),
            tla_to_sexpr(body)
        ),
        TlaExpr::Expr(expr) => expr_to_sexpr(expr),
    }
}

pub fn type_to_sexpr(ty: &Type) -> String {
    match ty {
        Type::Primitive(primitive) => primitive.keyword().to_string(),
        Type::Generic { base, param } => format!("({base} {})", type_to_sexpr(param)),
        Type::Named(name) => name.to_string(),
    }
}

fn state_to_sexpr(state: &StateDecl) -> String {
    let mut items = Vec::new();
    let uses: Vec<&str> = state.uses.iter().map(|name| name.as_str()).collect();
    items.push(format!("(uses {})", uses.join(" ")));

    for use_stmt in &state.use_stmts {
        items.push(match use_stmt {
            UseStmt::State { source, fields: use_fields } => {
                list("use-state", &qualified(source), fields(use_fields))
            }
            UseStmt::Context { context } => format!("(use-context {})", qualified(context)),
            UseStmt::Type { ty } => format!("(use-type {})", qualified(ty)),
        });
    }

    if let Some(precondition) = &state.precondition {
        let conditions: Vec<String> = precondition.conditions.iter().map(tla_to_sexpr).collect();
        items.push(format!("({} {})", precondition.keyword.as_str(), conditions.join(" ")));
    }

    items.extend(state.body.iter().map(statement_to_sexpr));

    let cases: Vec<String> = state.next.cases.iter().map(next_case_to_sexpr).collect();
    items.push(format!("(next {})", cases.join(" ")));

    list("state", state.name.as_str(), items)
}

pub fn statement_to_sexpr(statement: &Statement) -> String {
    match &statement.kind {
        StmtKind::Let { name, ty, value } => {
            format!("(let {name} {} {})", type_to_sexpr(ty), expr_to_sexpr(value))
        }
        StmtKind::Select {
            name,
            ty,
            entity,
            where_clause,
            limit,
        } => {
            let mut out = format!("(select {name} {} {entity}", type_to_sexpr(ty));
            if let Some(condition) = where_clause {
                out.push_str(&format!(" (where {})", expr_to_sexpr(condition)));
            }
            if let Some(limit) = limit {
                out.push_str(&format!(" (limit {limit})"));
            }
            out.push(')');
            out
        }
        StmtKind::Foreach {
            item,
            item_type,
            collection,
            body,
        } => {
            let body: Vec<String> = body.iter().map(statement_to_sexpr).collect();
            format!(
                "(foreach {item} {} {collection} (body{}))",
                type_to_sexpr(item_type),
                prefixed(&body)
            )
        }
        StmtKind::Update {
            entity,
            assignments,
            where_clause,
        } => {
            let assignments: Vec<String> = assignments
                .iter()
                .map(|a| format!("({} {})", a.field, expr_to_sexpr(&a.value)))
                .collect();
            let mut out = format!("(update {entity} (set {})", assignments.join(" "));
            if let Some(condition) = where_clause {
                out.push_str(&format!(" (where {})", expr_to_sexpr(condition)));
            }
            out.push(')');
            out
        }
        StmtKind::Insert {
            entity,
            columns,
            values,
        } => {
            let columns: Vec<&str> = columns.iter().map(|c| c.as_str()).collect();
            let values: Vec<String> = values.iter().map(expr_to_sexpr).collect();
            format!("(insert {entity} ({}) ({}))", columns.join(" "), values.join(" "))
        }
        StmtKind::Delete {
            entity,
            where_clause,
        } => match where_clause {
            Some(condition) => format!("(delete {entity} (where {}))", expr_to_sexpr(condition)),
            None => format!("(delete {entity})"),
        },
        StmtKind::Assert { expr } => format!("(assert {})", expr_to_sexpr(expr)),
        StmtKind::Commit => "(commit)".to_string(),
    }
}

fn next_case_to_sexpr(case: &NextCase) -> String {
    let mut out = match case {
        NextCase::When {
            condition, target, ..
        } => format!("(when {} {target}", tla_to_sexpr(condition)),
        NextCase::Otherwise { target, .. } => format!("(otherwise {target}"),
    };
    if let Some(export) = case.export() {
        out.push_str(&format!(" (export{})", prefixed(&fields(&export.fields))));
    }
    out.push(')');
    out
}

fn qualified(name: &QualifiedName) -> String {
    match &name.namespace {
        Some(namespace) => format!("\"{namespace}\"::{}", name.name),
        None => name.name.to_string(),
    }
}

fn fields(fields: &[Field]) -> Vec<String> {
    fields
        .iter()
        .map(|field| format!("(field {} {})", field.name, type_to_sexpr(&field.ty)))
        .collect()
}

/// `(head name item ...)`
fn list(head: &str, name: &str, items: Vec<String>) -> String {
    format!("({head} {name}{})", prefixed(&items))
}

/// Each item preceded by a space
fn prefixed(items: &[String]) -> String {
    items.iter().map(|item| format!(" {item}")).collect()
}
