use std::fmt;

use chrono::NaiveDateTime;

/// Filename prefix for artifacts written without an explicit name.
pub const ARTIFACT_PREFIX: &str = "auto_generated_";

/// Timestamp layout embedded in artifact filenames (second precision).
pub const ARTIFACT_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Content families the generator can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Python,
    JavaScript,
    Cpp,
    Java,
    Html,
}

impl ContentKind {
    /// All kinds, in selection order.
    pub const ALL: [ContentKind; 5] = [
        ContentKind::Python,
        ContentKind::JavaScript,
        ContentKind::Cpp,
        ContentKind::Java,
        ContentKind::Html,
    ];

    /// File extension (without the dot).
    pub fn extension(&self) -> &'static str {
        match self {
            ContentKind::Python => "py",
            ContentKind::JavaScript => "js",
            ContentKind::Cpp => "cpp",
            ContentKind::Java => "java",
            ContentKind::Html => "html",
        }
    }

    /// Human-readable display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            ContentKind::Python => "Python",
            ContentKind::JavaScript => "JavaScript",
            ContentKind::Cpp => "C++",
            ContentKind::Java => "Java",
            ContentKind::Html => "HTML",
        }
    }

    /// Parse a kind from its file extension.
    pub fn from_extension(ext: &str) -> Option<ContentKind> {
        Self::ALL.into_iter().find(|kind| kind.extension() == ext.trim_start_matches('.'))
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Supported artifact extensions.
pub fn supported_extensions() -> [&'static str; 5] {
    ContentKind::ALL.map(|kind| kind.extension())
}

/// `auto_generated_<YYYYMMDD_HHMMSS>.<ext>`
pub fn artifact_file_name(at: &NaiveDateTime, extension: &str) -> String {
    format!("{}{}.{}", ARTIFACT_PREFIX, at.format(ARTIFACT_TIMESTAMP_FORMAT), extension)
}

/// True when `name` follows the unnamed-artifact naming scheme.
pub fn is_artifact_file_name(name: &str) -> bool {
    let Some(rest) = name.strip_prefix(ARTIFACT_PREFIX) else {
        return false;
    };
    let Some((stamp, ext)) = rest.split_once('.') else {
        return false;
    };
    stamp.len() == 15
        && ContentKind::from_extension(ext).is_some()
        && NaiveDateTime::parse_from_str(stamp, ARTIFACT_TIMESTAMP_FORMAT).is_ok()
}

/// A generated snippet, held only until it is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    pub content: String,
    pub kind: ContentKind,
    pub created_at: NaiveDateTime,
}

impl GeneratedArtifact {
    pub fn extension(&self) -> &'static str {
        self.kind.extension()
    }

    /// Filename derived from the creation timestamp and kind.
    pub fn file_name(&self) -> String {
        artifact_file_name(&self.created_at, self.extension())
    }

    /// `(text, extension)` view of the artifact.
    pub fn into_parts(self) -> (String, &'static str) {
        let ext = self.kind.extension();
        (self.content, ext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn stamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 10, 17).unwrap().and_hms_opt(18, 0, 31).unwrap()
    }

    #[test]
    fn extensions_are_the_fixed_set() {
        assert_eq!(supported_extensions(), ["py", "js", "cpp", "java", "html"]);
    }

    #[test]
    fn from_extension_accepts_leading_dot() {
        assert_eq!(ContentKind::from_extension(".java"), Some(ContentKind::Java));
        assert_eq!(ContentKind::from_extension("cpp"), Some(ContentKind::Cpp));
        assert_eq!(ContentKind::from_extension("rs"), None);
    }

    #[test]
    fn file_name_uses_second_precision_stamp() {
        assert_eq!(artifact_file_name(&stamp(), "java"), "auto_generated_20251017_180031.java");
    }

    #[test]
    fn recognizes_artifact_names() {
        assert!(is_artifact_file_name("auto_generated_20250930_113921.js"));
        assert!(!is_artifact_file_name("auto_generated_20250930_113921.rs"));
        assert!(!is_artifact_file_name("auto_generated_2025093_113921.js"));
        assert!(!is_artifact_file_name("notes_20250930_113921.js"));
        assert!(!is_artifact_file_name("auto_generator.log"));
    }
}
