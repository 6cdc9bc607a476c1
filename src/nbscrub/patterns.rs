//! The key-literal rewrite table.
//!
//! One vendor key shape is recognized: `sk-` followed by exactly 48
//! alphanumerics, enclosed in matching quotes. Anything else — other vendors,
//! other lengths — is silently ignored; that narrowness is deliberate.
//!
//! Rules are an ordered data table so adding another key shape is a data
//! change, not a code change. More specific rules come first: once the
//! assignment rule has consumed `api_key = "sk-..."`, the bare-literal rule
//! has nothing left to match at that spot.

use once_cell::sync::Lazy;
use regex::Regex;

/// One key-literal shape and its safe substitution.
pub struct RewriteRule {
    pub name: &'static str,
    pub pattern: &'static Lazy<Regex>,
    pub replacement: &'static str,
}

static RE_KEY_ASSIGN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"api_key\s*=\s*["']sk-[a-zA-Z0-9]{48}["']"#).unwrap());

static RE_KEY_MAPPING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"api_key\s*:\s*["']sk-[a-zA-Z0-9]{48}["']"#).unwrap());

static RE_KEY_BARE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"["']sk-[a-zA-Z0-9]{48}["']"#).unwrap());

pub static REWRITE_RULES: &[RewriteRule] = &[
    RewriteRule {
        name: "key_assignment",
        pattern: &RE_KEY_ASSIGN,
        replacement: r#"api_key=os.getenv("OPENAI_API_KEY")"#,
    },
    RewriteRule {
        name: "key_mapping",
        pattern: &RE_KEY_MAPPING,
        replacement: r#"api_key: os.getenv("OPENAI_API_KEY")"#,
    },
    RewriteRule {
        name: "bare_key_literal",
        pattern: &RE_KEY_BARE,
        replacement: r#"os.getenv("OPENAI_API_KEY")"#,
    },
];

/// Injected once per file so the rewritten `os.getenv` calls resolve when the
/// notebook runs.
pub const ENV_PREAMBLE: &str =
    "import os\nfrom dotenv import load_dotenv\n\nload_dotenv()  # Load environment variables\n\n";

/// Whether a cell already sets up environment access. Purely textual, and
/// scoped to the one cell it is given.
pub fn has_env_setup(text: &str) -> bool {
    text.contains("import os") || text.contains("from dotenv")
}
