//! Language identification and detection
//!
//! Maps file extensions to language IDs. Documents without a recognised
//! extension (or without a path) have no language and display as plain text.

use std::path::Path;

/// Supported language identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LanguageId {
    Python,
    JavaScript,
    TypeScript,
    Java,
    C,
    Cpp,
    CSharp,
    Go,
    Rust,
    Html,
    Css,
    Json,
    Xml,
    Sql,
    Bash,
    Ruby,
    Php,
    Markdown,
    Yaml,
    Toml,
}

/// Static extension table, lowercase and without the leading dot
const EXTENSION_TABLE: &[(LanguageId, &[&str])] = &[
    (LanguageId::Python, &["py", "pyw", "pyi"]),
    (LanguageId::JavaScript, &["js", "jsx", "mjs", "cjs"]),
    (LanguageId::TypeScript, &["ts", "tsx"]),
    (LanguageId::Java, &["java"]),
    (LanguageId::C, &["c", "h"]),
    (LanguageId::Cpp, &["cpp", "cxx", "cc", "hpp", "hxx", "hh"]),
    (LanguageId::CSharp, &["cs"]),
    (LanguageId::Go, &["go"]),
    (LanguageId::Rust, &["rs"]),
    (LanguageId::Html, &["html", "htm", "xhtml"]),
    (LanguageId::Css, &["css", "scss", "sass", "less"]),
    (LanguageId::Json, &["json"]),
    (LanguageId::Xml, &["xml", "xsl", "xslt", "svg"]),
    (LanguageId::Sql, &["sql"]),
    (LanguageId::Bash, &["sh", "bash", "zsh"]),
    (LanguageId::Ruby, &["rb", "rake", "gemspec"]),
    (
        LanguageId::Php,
        &["php", "phtml", "php3", "php4", "php5", "phps"],
    ),
    (LanguageId::Markdown, &["md", "markdown", "mdown", "mkd"]),
    (LanguageId::Yaml, &["yml", "yaml"]),
    (LanguageId::Toml, &["toml"]),
];

impl LanguageId {
    /// Detect language from file extension (case-insensitive, no leading dot)
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.to_lowercase();
        EXTENSION_TABLE
            .iter()
            .find(|(_, exts)| exts.contains(&ext.as_str()))
            .map(|(lang, _)| *lang)
    }

    /// Detect language from file path
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Get display name for the language
    pub fn display_name(&self) -> &'static str {
        match self {
            LanguageId::Python => "Python",
            LanguageId::JavaScript => "JavaScript",
            LanguageId::TypeScript => "TypeScript",
            LanguageId::Java => "Java",
            LanguageId::C => "C",
            LanguageId::Cpp => "C++",
            LanguageId::CSharp => "C#",
            LanguageId::Go => "Go",
            LanguageId::Rust => "Rust",
            LanguageId::Html => "HTML",
            LanguageId::Css => "CSS",
            LanguageId::Json => "JSON",
            LanguageId::Xml => "XML",
            LanguageId::Sql => "SQL",
            LanguageId::Bash => "Bash",
            LanguageId::Ruby => "Ruby",
            LanguageId::Php => "PHP",
            LanguageId::Markdown => "Markdown",
            LanguageId::Yaml => "YAML",
            LanguageId::Toml => "TOML",
        }
    }
}

/// Language lookup used by the document registry
pub fn language_for(path: &Path) -> Option<LanguageId> {
    LanguageId::from_path(path)
}

/// Display name for an optional language, falling back to plain text
pub fn language_display_name(language: Option<LanguageId>) -> &'static str {
    language.map(|l| l.display_name()).unwrap_or("Plain Text")
}
