/// Render a custom scalar declaration.
pub fn format_scalar(name: &str) -> String {
    format!("scalar {name}\n")
}
