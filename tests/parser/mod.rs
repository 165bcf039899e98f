mod tests_declarations;
mod tests_expressions;
mod tests_lexer;
mod tests_rule_parser;
mod tests_statements;
