//! Dotenv file settings source

use std::collections::HashMap;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use super::traits::{SettingsError, SettingsResult, SettingsSource};

/// Snapshot of a dotenv-style `KEY=VALUE` file
///
/// The file is parsed once, when the source is built; the process
/// environment is left untouched. Later assignments of the same key win.
///
/// A file that does not exist loads as an empty source, so resolution
/// reports the missing keys rather than an IO error. Parsing is lenient:
///
/// - a bare `$` is literal, only `${NAME}` is expanded
/// - a `KEY` line without `=` leaves the key absent
/// - any other statement that does not parse is skipped with a warning
///
/// # Example
///
/// ```no_run
/// use semkit_core::settings::{DotenvSource, SettingsSource};
///
/// let source = DotenvSource::load(".env").unwrap();
/// let key = source.get("OPENAI_API_KEY");
/// ```
#[derive(Debug, Clone, Default)]
pub struct DotenvSource {
    path: Option<PathBuf>,
    values: HashMap<String, String>,
}

impl DotenvSource {
    /// Read and parse the file at `path`
    pub fn load(path: impl AsRef<Path>) -> SettingsResult<Self> {
        let path = path.as_ref();
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                crate::debug_log!("no settings file at {}", path.display());
                return Ok(Self {
                    path: Some(path.to_path_buf()),
                    values: HashMap::new(),
                });
            }
            Err(err) => return Err(SettingsError::Io(err)),
        };

        let values = collect(&contents, Some(path))?;
        crate::debug_log!("loaded {} keys from {}", values.len(), path.display());

        Ok(Self {
            path: Some(path.to_path_buf()),
            values,
        })
    }

    /// Parse dotenv contents that did not come from a file
    pub fn parse(contents: &str) -> SettingsResult<Self> {
        let values = collect(contents, None)?;
        Ok(Self { path: None, values })
    }

    pub fn from_reader<R: Read>(mut reader: R) -> SettingsResult<Self> {
        let mut contents = String::new();
        reader.read_to_string(&mut contents)?;
        Self::parse(&contents)
    }

    /// File this source was loaded from
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Keys present in the file, in no particular order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

fn collect(contents: &str, path: Option<&Path>) -> SettingsResult<HashMap<String, String>> {
    let contents = contents.strip_prefix('\u{feff}').unwrap_or(contents);
    let escaped = escape_bare_dollars(contents);
    let origin = match path {
        Some(path) => path.display().to_string(),
        None => "dotenv contents".to_string(),
    };

    let mut values = HashMap::new();
    for item in dotenvy::from_read_iter(escaped.as_bytes()) {
        match item {
            Ok((key, value)) => {
                values.insert(key, value);
            }
            Err(dotenvy::Error::LineParse(statement, _)) => match bare_key(&statement) {
                Some(key) => {
                    values.remove(key);
                }
                // The statement is not echoed, it may hold a secret.
                None => crate::warn_log!("skipping unparseable statement in {}", origin),
            },
            Err(dotenvy::Error::Io(err)) => return Err(SettingsError::Io(err)),
            Err(other) => {
                return Err(SettingsError::Parse {
                    path: path.map(Path::to_path_buf).unwrap_or_default(),
                    message: other.to_string(),
                })
            }
        }
    }
    Ok(values)
}

/// Key of a statement that names a variable without assigning it
fn bare_key(statement: &str) -> Option<&str> {
    let statement = statement.trim();
    let key = statement
        .strip_prefix("export")
        .filter(|rest| rest.starts_with(char::is_whitespace))
        .map(str::trim_start)
        .unwrap_or(statement);

    let mut chars = key.chars();
    let first = chars.next()?;
    let valid = (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.');
    valid.then_some(key)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Quote {
    None,
    Single,
    Double,
}

/// Escape every `$` that does not open a `${NAME}` reference
///
/// dotenvy expands `$NAME` as well as `${NAME}`, which truncates secrets
/// that happen to contain a `$`. Single-quoted text and comments are left
/// alone since dotenvy never expands inside them.
fn escape_bare_dollars(contents: &str) -> String {
    let mut out = String::with_capacity(contents.len());
    let mut quote = Quote::None;
    let mut escaped = false;
    let mut comment = false;
    let mut after_space = true;

    let mut chars = contents.chars().peekable();
    while let Some(c) = chars.next() {
        if comment {
            out.push(c);
            if c == '\n' {
                comment = false;
                after_space = true;
            }
            continue;
        }
        if escaped {
            out.push(c);
            escaped = false;
            after_space = false;
            continue;
        }

        match quote {
            Quote::Single => {
                if c == '\'' {
                    quote = Quote::None;
                }
            }
            Quote::Double => match c {
                '\\' => escaped = true,
                '"' => quote = Quote::None,
                '$' if chars.peek() != Some(&'{') => out.push('\\'),
                _ => {}
            },
            Quote::None => match c {
                '#' if after_space => comment = true,
                '\\' => escaped = true,
                '\'' => quote = Quote::Single,
                '"' => quote = Quote::Double,
                '$' if chars.peek() != Some(&'{') => out.push('\\'),
                _ => {}
            },
        }
        out.push(c);
        after_space = quote == Quote::None && c.is_whitespace();
    }
    out
}

impl SettingsSource for DotenvSource {
    fn name(&self) -> &str {
        "dotenv"
    }

    fn describe(&self) -> String {
        match &self.path {
            Some(path) => format!("{} file", path.display()),
            None => "dotenv contents".to_string(),
        }
    }

    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}
