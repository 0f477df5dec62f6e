// src/render.rs
//! Templating for the generated C/C++ source. Pure text, no I/O.

/// Symbol exposing the version string.
pub const VERSION_SYMBOL: &str = "RCPT_VERSION";
/// Symbol pointing one past the last character of the version string.
pub const VERSION_END_SYMBOL: &str = "RCPT_VERSION_END";

/// Renders the full generated source for `version`.
///
/// The version text is embedded verbatim between the quotes. If it contains
/// a double quote or backslash the output is not valid C; callers accept
/// that limitation. The end offset is the character count of `version`, so
/// `[RCPT_VERSION, RCPT_VERSION_END)` spans exactly the embedded text.
pub fn render_source(version: &str) -> String {
    let length = version.chars().count();
    let mut out = String::new();
    out.push_str("#ifdef __cplusplus\n");
    out.push_str("extern \"C\" {\n");
    out.push_str("#endif\n");
    out.push_str(&format!("extern const char* const {VERSION_SYMBOL};\n"));
    out.push_str(&format!("extern const char* const {VERSION_END_SYMBOL};\n"));
    out.push_str(&format!(
        "const char* const {VERSION_SYMBOL} = \"{version}\";\n"
    ));
    out.push_str(&format!(
        "const char* const {VERSION_END_SYMBOL} = {VERSION_SYMBOL} + {length};\n"
    ));
    out.push_str("#ifdef __cplusplus\n");
    out.push_str("}\n");
    out.push_str("#endif\n");
    out
}
