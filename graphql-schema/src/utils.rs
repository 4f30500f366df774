/// Pascal-case a name for use in derived identifiers.
///
/// The first character is uppercased, the remainder lowercased, and any
/// hyphen or underscore is removed with the following character
/// uppercased: `user-name` becomes `UserName`, `ID` becomes `Id`.
pub fn format_pascal(input: &str) -> String {
    let mut chars = input.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut out: String = first.to_uppercase().collect();
    let mut upper_next = false;

    for ch in chars.as_str().to_lowercase().chars() {
        if ch == '-' || ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }

    out
}

/// Strip a single trailing non-null marker, if present.
pub fn remove_exclamation(s: &str) -> &str {
    s.strip_suffix('!').unwrap_or(s)
}
