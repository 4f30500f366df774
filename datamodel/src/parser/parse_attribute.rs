use super::{Pair, Rule, helpers::parsing_catch_all};

/// A field or block attribute, e.g. `@id` or
/// `@relation(fields: [authorId], references: [id])`.
#[derive(Debug)]
pub(super) struct Attribute {
    pub(super) name: String,
    /// `(argument name, value)` pairs; positional arguments have no name.
    pub(super) arguments: Vec<(Option<String>, Value)>,
}

#[derive(Debug, Clone, PartialEq)]
pub(super) enum Value {
    Constant(String),
    Text(String),
    Number(String),
    Array(Vec<Value>),
    Function(String, Vec<Value>),
}

impl Attribute {
    /// The identifiers of the array argument named `name`.
    pub(super) fn array_arg(&self, name: &str) -> Option<Vec<String>> {
        self.arguments
            .iter()
            .find(|(arg_name, _)| arg_name.as_deref() == Some(name))
            .and_then(|(_, value)| value.as_constant_array())
    }

    /// The identifiers of the first array argument, whether positional
    /// (`@@id([a, b])`) or named (`@@unique(fields: [a, b])`).
    pub(super) fn first_array_arg(&self) -> Option<Vec<String>> {
        self.arguments
            .iter()
            .find_map(|(_, value)| value.as_constant_array())
    }
}

impl Value {
    fn as_constant_array(&self) -> Option<Vec<String>> {
        match self {
            Value::Array(items) => Some(
                items
                    .iter()
                    .filter_map(|item| match item {
                        Value::Constant(name) => Some(name.clone()),
                        _ => None,
                    })
                    .collect(),
            ),
            _ => None,
        }
    }
}

pub(super) fn parse_attribute(pair: Pair<'_>) -> Attribute {
    let mut name: Option<String> = None;
    let mut arguments = Vec::new();

    for current in pair.into_inner() {
        match current.as_rule() {
            Rule::attribute_path => name = Some(current.as_str().to_owned()),
            Rule::arguments_list => {
                for argument in current.into_inner() {
                    arguments.push(parse_argument(argument));
                }
            }
            _ => parsing_catch_all(&current, "attribute"),
        }
    }

    Attribute {
        name: name.expect("an attribute always carries a name"),
        arguments,
    }
}

fn parse_argument(pair: Pair<'_>) -> (Option<String>, Value) {
    let mut name: Option<String> = None;
    let mut value: Option<Value> = None;

    for current in pair.into_inner() {
        match current.as_rule() {
            Rule::identifier => name = Some(current.as_str().to_owned()),
            Rule::expression => value = Some(parse_expression(current)),
            _ => parsing_catch_all(&current, "argument"),
        }
    }

    (name, value.expect("an argument always carries a value"))
}

fn parse_expression(pair: Pair<'_>) -> Value {
    let inner = pair
        .into_inner()
        .next()
        .expect("an expression always has exactly one alternative");

    match inner.as_rule() {
        Rule::path_expression => Value::Constant(inner.as_str().to_owned()),
        Rule::string_literal => {
            let content = inner
                .into_inner()
                .next()
                .map(|content| content.as_str().to_owned())
                .unwrap_or_default();
            Value::Text(content)
        }
        Rule::numeric_literal => Value::Number(inner.as_str().to_owned()),
        Rule::array_expression => Value::Array(inner.into_inner().map(parse_expression).collect()),
        Rule::function_call => {
            let mut name = String::new();
            let mut args = Vec::new();

            for current in inner.into_inner() {
                match current.as_rule() {
                    Rule::attribute_path => name = current.as_str().to_owned(),
                    Rule::arguments_list => {
                        args.extend(current.into_inner().map(|arg| parse_argument(arg).1));
                    }
                    _ => parsing_catch_all(&current, "function"),
                }
            }

            Value::Function(name, args)
        }
        _ => parsing_catch_all(&inner, "expression"),
    }
}
