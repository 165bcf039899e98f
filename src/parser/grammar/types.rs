//! Type annotations, qualified names and `name: type;` fields

use super::*;
use crate::parser::ast::{Field, PrimitiveType, QualifiedName, Type};
use smol_str::SmolStr;

/// Tokens that can begin a type
pub const TYPE_START: &[SyntaxKind] = &[
    SyntaxKind::INT_KW,
    SyntaxKind::BOOL_KW,
    SyntaxKind::STRING_KW,
    SyntaxKind::FLOAT_KW,
    SyntaxKind::IDENT,
];

/// `int | bool | string | float | Name | Name[Type]`
pub fn parse_type<P: SclParser>(p: &mut P) -> PResult<Type> {
    with_context(p, ParseContext::TypeAnnotation, |p| {
        let primitive = match p.current_kind() {
            SyntaxKind::INT_KW => Some(PrimitiveType::Int),
            SyntaxKind::BOOL_KW => Some(PrimitiveType::Bool),
            SyntaxKind::STRING_KW => Some(PrimitiveType::String),
            SyntaxKind::FLOAT_KW => Some(PrimitiveType::Float),
            _ => None,
        };
        if let Some(primitive) = primitive {
            p.bump();
            return Ok(Type::Primitive(primitive));
        }

        if !at_name(p) {
            return Err(p.unexpected(TYPE_START, ErrorCode::E0305).into());
        }
        let base = expect_name(p)?;
        if !p.eat(SyntaxKind::L_BRACKET) {
            return Ok(Type::Named(base));
        }
        let param = parse_type(p)?;
        p.expect(SyntaxKind::R_BRACKET)?;
        Ok(Type::generic(base, param))
    })
}

/// `ident | "namespace" :: ident`
pub fn parse_qualified_name<P: SclParser>(p: &mut P) -> PResult<QualifiedName> {
    match p.current_kind() {
        SyntaxKind::STRING => {
            let text = p.current_text();
            let namespace = SmolStr::new(
                text.strip_prefix('"')
                    .and_then(|s| s.strip_suffix('"'))
                    .unwrap_or(text),
            );
            p.bump();
            if !p.at(SyntaxKind::COLON_COLON) {
                let error = p
                    .unexpected(&[SyntaxKind::COLON_COLON], ErrorCode::E0502)
                    .with_hint("a namespaced name is written '\"namespace\"::Name'");
                return Err(error.into());
            }
            p.bump();
            let name = expect_name(p)?;
            Ok(QualifiedName::namespaced(namespace, name))
        }
        _ if at_name(p) => Ok(QualifiedName::simple(expect_name(p)?)),
        _ => Err(p
            .unexpected(&[SyntaxKind::IDENT, SyntaxKind::STRING], ErrorCode::E0502)
            .into()),
    }
}

/// `name: type;`
pub fn parse_field<P: SclParser>(p: &mut P) -> PResult<Field> {
    let name = expect_name(p)?;
    p.expect(SyntaxKind::COLON)?;
    let ty = parse_type(p)?;
    p.expect(SyntaxKind::SEMICOLON)?;
    Ok(Field { name, ty })
}

/// Fields up to the closing `}` (not consumed), recovering per field
pub fn parse_fields<P: SclParser>(p: &mut P) -> PResult<Vec<Field>> {
    let mut fields = Vec::new();
    while !p.at(SyntaxKind::R_BRACE) && !p.at_eof() {
        let item = p.checkpoint();
        match parse_field(p) {
            Ok(field) => fields.push(field),
            Err(abort) => p.recover(abort, item, &[])?,
        }
    }
    Ok(fields)
}
