//! Query-language sub-grammars the predefined rules build on.
//!
//! The predefined layer does not own the expression language. It borrows
//! names, literals, types, function signatures and inputs from a
//! [`QueryGrammar`]. [`QueryGrammar::standard`] supplies a small but complete
//! default; callers with a richer expression grammar can build their own
//! value and hand it to the predefined rules instead.

use crate::parser::combinators::{
    Parser, first, match_token, optional, required, rule2, rule3, text, token, zero_or_more,
};
use crate::parser::grammar::missing::{missing_expression, missing_name_reference};
use crate::parser::grammar::paths::qualified_path;
use crate::parser::symbol_match::SymbolMatch;
use crate::parser::syntax::{
    BracedName, BracketedName, ExpressionStatement, FunctionBody, FunctionParameter,
    FunctionParameters, LetStatement, LiteralExpression, LiteralKind, Name, NameDeclaration,
    NameReference, Separated, Statement, StatementList, SyntaxElement, SyntaxToken,
    TypeExpression,
};
use crate::parser::syntax_kind::SyntaxKind;

/// Scalar type names accepted by the default parameter-type rule.
pub const SCALAR_TYPES: &[&str] = &[
    "bool", "boolean", "date", "datetime", "decimal", "double", "dynamic", "guid", "int", "long",
    "real", "string", "time", "timespan",
];

/// Sub-grammars supplied to the predefined rules.
#[derive(Debug, Clone)]
pub struct QueryGrammar {
    /// `Foo`
    pub identifier_name: Parser<Name>,
    /// `['Foo']`
    pub bracketed_name: Parser<Name>,
    /// `{Foo}`
    pub braced_name: Parser<Name>,
    /// `Foo*`
    pub wildcarded_identifier: Parser<SyntaxToken>,
    pub string_literal: Parser<SyntaxElement>,
    /// Long, real, boolean, string and guid literals.
    pub literal: Parser<SyntaxElement>,
    pub param_type: Parser<SyntaxElement>,
    pub expression: Parser<SyntaxElement>,
    pub statement: Parser<Statement>,
    pub function_parameters: Parser<FunctionParameters>,
    pub function_body: Parser<FunctionBody>,
    /// A single expression
    pub query_input: Parser<SyntaxElement>,
    /// Statements separated by `;`
    pub script_input: Parser<SyntaxElement>,
}

impl QueryGrammar {
    pub fn standard() -> Self {
        let identifier_name =
            match_token(|t| t.kind.is_identifier_like()).map(Name::token);

        let bracketed_name = rule3(
            text("["),
            token(SyntaxKind::STRING_LITERAL),
            text("]"),
            |open_bracket, name, close_bracket| {
                Name::Bracketed(BracketedName {
                    open_bracket,
                    name,
                    close_bracket,
                })
            },
        );

        let braced_name = rule3(
            text("{"),
            match_token(|t| t.kind.is_identifier_like()),
            text("}"),
            |open_brace, name, close_brace| {
                Name::Braced(BracedName {
                    open_brace,
                    name,
                    close_brace,
                })
            },
        );

        let wildcarded_identifier = token(SyntaxKind::WILDCARDED_IDENTIFIER);

        let string_literal = literal_of(LiteralKind::String).with_tag("<string>");

        let literal = first(vec![
            literal_of(LiteralKind::Long),
            literal_of(LiteralKind::Real),
            literal_of(LiteralKind::Boolean),
            literal_of(LiteralKind::String),
            literal_of(LiteralKind::Guid),
        ])
        .with_tag("<literal>");

        let type_expression = match_token(|t| {
            t.kind == SyntaxKind::IDENTIFIER && SCALAR_TYPES.contains(&t.text.as_str())
        })
        .map(|token| TypeExpression { token });
        let param_type = type_expression.clone().map(SyntaxElement::from).with_tag("<type>");

        let name_reference = first(vec![identifier_name.clone(), bracketed_name.clone()])
            .map(|name| SyntaxElement::from(NameReference::new(name, SymbolMatch::ANY)));
        let dotted_reference = qualified_path(
            name_reference.clone(),
            name_reference,
            ".",
            missing_name_reference,
        );
        let expression = first(vec![literal.clone(), dotted_reference]).with_tag("<expression>");

        let name_declaration = identifier_name.clone().map(NameDeclaration::new);

        let let_statement = rule2(
            rule2(token(SyntaxKind::LET_KW), name_declaration.clone(), |k, n| (k, n)),
            rule2(
                text("="),
                required(expression.clone(), missing_expression),
                |e, x| (e, x),
            ),
            |(let_keyword, name), (equal, expression)| {
                Statement::Let(LetStatement {
                    let_keyword,
                    name,
                    equal,
                    expression,
                })
            },
        );
        let expression_statement = expression
            .clone()
            .map(|expression| Statement::Expression(ExpressionStatement { expression }));
        let statement = first(vec![let_statement, expression_statement]);

        let parameter = rule3(
            name_declaration,
            required(token(SyntaxKind::COLON), || {
                SyntaxToken::missing(SyntaxKind::COLON)
            }),
            required(type_expression, || TypeExpression {
                token: SyntaxToken::missing(SyntaxKind::IDENTIFIER),
            }),
            |name, colon, ty| FunctionParameter { name, colon, ty },
        );
        let function_parameters = rule3(
            token(SyntaxKind::OPEN_PAREN),
            separated_list(parameter, token(SyntaxKind::COMMA)),
            required(token(SyntaxKind::CLOSE_PAREN), || {
                SyntaxToken::missing(SyntaxKind::CLOSE_PAREN)
            }),
            |open_paren, parameters, close_paren| FunctionParameters {
                open_paren,
                parameters,
                close_paren,
            },
        )
        .with_tag("<function_parameters>");

        let terminated_statements = zero_or_more(rule2(
            statement.clone(),
            token(SyntaxKind::SEMICOLON),
            |element, separator| Separated::new(element, Some(separator)),
        ));
        let function_body = rule3(
            token(SyntaxKind::OPEN_BRACE),
            rule3(
                terminated_statements,
                optional(expression.clone()),
                optional(token(SyntaxKind::SEMICOLON)),
                |statements, expression, semicolon| (statements, expression, semicolon),
            ),
            required(token(SyntaxKind::CLOSE_BRACE), || {
                SyntaxToken::missing(SyntaxKind::CLOSE_BRACE)
            }),
            |open_brace, (statements, expression, semicolon), close_brace| FunctionBody {
                open_brace,
                statements,
                expression,
                semicolon,
                close_brace,
            },
        )
        .with_tag("<function_body>");

        let query_input = expression.clone();
        let script_input = zero_or_more(rule2(
            statement.clone(),
            optional(token(SyntaxKind::SEMICOLON)),
            Separated::new,
        ))
        .map(|statements| SyntaxElement::Statements(StatementList { statements }));

        Self {
            identifier_name,
            bracketed_name,
            braced_name,
            wildcarded_identifier,
            string_literal,
            literal,
            param_type,
            expression,
            statement,
            function_parameters,
            function_body,
            query_input,
            script_input,
        }
    }
}

fn literal_of(kind: LiteralKind) -> Parser<SyntaxElement> {
    token(kind.token_kind()).map(move |t| LiteralExpression::new(kind, t).into())
}

/// `element (separator element)*`, possibly empty, separators kept.
fn separated_list<T: 'static>(
    element: Parser<T>,
    separator: Parser<SyntaxToken>,
) -> Parser<Vec<Separated<T>>> {
    let rest = zero_or_more(rule2(separator, element.clone(), |sep, item| (sep, item)));
    optional(rule2(element, rest, |head, rest| (head, rest))).map(|list| {
        let Some((head, rest)) = list else {
            return Vec::new();
        };
        let mut items = Vec::with_capacity(rest.len() + 1);
        let mut current = head;
        for (separator, next) in rest {
            items.push(Separated::new(current, Some(separator)));
            current = next;
        }
        items.push(Separated::new(current, None));
        items
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::token_source::TokenSource;

    fn parse<T: 'static>(parser: &Parser<T>, input: &str) -> Option<(T, usize)> {
        parser.parse(&TokenSource::from_text(input), 0)
    }

    #[test]
    fn test_name_spellings() {
        let grammar = QueryGrammar::standard();
        let (name, _) = parse(&grammar.bracketed_name, "['My Table']").unwrap();
        assert_eq!(name.simple_name(), "My Table");
        let (name, _) = parse(&grammar.braced_name, "{x}").unwrap();
        assert_eq!(name.kind(), SyntaxKind::BRACED_NAME);
        assert!(parse(&grammar.bracketed_name, "[a.b]").is_none());
    }

    #[test]
    fn test_literals() {
        let grammar = QueryGrammar::standard();
        for (input, kind) in [
            ("42", LiteralKind::Long),
            ("4.5", LiteralKind::Real),
            ("true", LiteralKind::Boolean),
            ("'s'", LiteralKind::String),
            ("guid(00000000-0000-0000-0000-000000000000)", LiteralKind::Guid),
        ] {
            let (element, end) = parse(&grammar.literal, input).unwrap();
            assert_eq!(element.as_literal().unwrap().kind, kind, "{input}");
            assert_eq!(end, 1);
        }
    }

    #[test]
    fn test_param_type_rejects_unknown() {
        let grammar = QueryGrammar::standard();
        assert!(parse(&grammar.param_type, "string").is_some());
        assert!(parse(&grammar.param_type, "table").is_none());
    }

    #[test]
    fn test_function_parameters_keep_separators() {
        let grammar = QueryGrammar::standard();
        let (params, end) = parse(&grammar.function_parameters, "(a: string, b: long)").unwrap();
        assert_eq!(end, 9);
        assert_eq!(params.parameters.len(), 2);
        assert!(params.parameters[0].separator.is_some());
        assert!(params.parameters[1].separator.is_none());
        assert_eq!(params.parameters[1].element.name.simple_name(), "b");
    }

    #[test]
    fn test_function_body_statements_and_result() {
        let grammar = QueryGrammar::standard();
        let (body, _) = parse(&grammar.function_body, "{ let x = 1; x }").unwrap();
        assert_eq!(body.statements.len(), 1);
        assert_eq!(body.statements[0].element.kind(), SyntaxKind::LET_STATEMENT);
        assert!(body.expression.is_some());
        assert!(!body.close_brace.is_missing());
    }

    #[test]
    fn test_unclosed_body_is_recovered() {
        let grammar = QueryGrammar::standard();
        let (body, _) = parse(&grammar.function_body, "{ T").unwrap();
        assert!(body.close_brace.is_missing());
    }

    #[test]
    fn test_script_input() {
        let grammar = QueryGrammar::standard();
        let (script, end) = parse(&grammar.script_input, "let a = 1; a.b").unwrap();
        assert_eq!(end, 8);
        assert_eq!(script.as_statements().unwrap().statements.len(), 2);
    }
}
