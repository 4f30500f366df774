use std::fmt;

/// The kind of definition block being assembled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DefinitionKind {
    Type,
    Input,
    Enum,
}

impl fmt::Display for DefinitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self {
            DefinitionKind::Type => "type",
            DefinitionKind::Input => "input",
            DefinitionKind::Enum => "enum",
        };

        f.write_str(keyword)
    }
}

/// Assemble a definition block from already-rendered field lines.
///
/// No semantic validation happens here; malformed lines pass through
/// unchanged. A definition without fields renders as a bare header,
/// which keeps empty models grammatically valid.
pub fn format_definition(kind: DefinitionKind, name: &str, fields: &[String]) -> String {
    if fields.is_empty() {
        return format!("{kind} {name}\n\n");
    }

    let body: Vec<String> = fields.iter().map(|field| format!("  {field}")).collect();

    format!("{kind} {name} {{\n{}\n}}\n\n", body.join("\n"))
}
