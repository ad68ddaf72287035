//! Editor language detection from file paths.
//!
//! Maps a path to the syntax id the browser editor understands. Well-known
//! file names (`Dockerfile`, `Makefile`, ...) are matched before extensions.

use crate::files::paths::file_name;

/// Syntax id used when nothing more specific matches.
pub const PLAIN_TEXT: &str = "plaintext";

/// Detect the editor language for a path.
pub fn language_by_path(path: &str) -> &'static str {
    let name = file_name(path);
    if let Some(language) = language_from_file_name(name) {
        return language;
    }

    match name.rsplit_once('.') {
        // ".bashrc" has no real extension, the dot only marks it hidden
        Some((stem, ext)) if !stem.is_empty() => language_from_extension(ext),
        _ => PLAIN_TEXT,
    }
}

/// Detect the editor language from a bare file name, case-insensitively.
fn language_from_file_name(name: &str) -> Option<&'static str> {
    let language = match name.to_lowercase().as_str() {
        "dockerfile" | "containerfile" => "dockerfile",
        "makefile" | "gnumakefile" => "makefile",
        ".bashrc" | ".bash_profile" | ".profile" | ".zshrc" => "shell",
        ".env" => "ini",
        ".gitignore" | ".dockerignore" => PLAIN_TEXT,
        _ => return None,
    };
    Some(language)
}

/// Detect the editor language from a file extension, case-insensitively.
pub fn language_from_extension(ext: &str) -> &'static str {
    match ext.to_lowercase().as_str() {
        "md" | "markdown" | "mdown" | "mkd" => "markdown",
        "json" | "jsonc" => "json",
        "yaml" | "yml" => "yaml",
        "toml" => "toml",
        "ini" | "cnf" | "conf" | "cfg" | "properties" => "ini",
        "xml" | "xsd" | "svg" => "xml",
        "html" | "htm" => "html",
        "css" => "css",
        "scss" => "scss",
        "less" => "less",
        "js" | "mjs" | "cjs" => "javascript",
        "ts" | "mts" | "cts" => "typescript",
        "vue" => "html",
        "php" => "php",
        "py" => "python",
        "go" => "go",
        "rs" => "rust",
        "java" => "java",
        "c" | "h" => "c",
        "cpp" | "cc" | "hpp" => "cpp",
        "sh" | "bash" | "zsh" => "shell",
        "sql" => "sql",
        "lua" => "lua",
        "rb" => "ruby",
        "pl" => "perl",
        _ => PLAIN_TEXT,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
