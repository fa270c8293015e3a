//! Documentation comments in values.yaml.
//!
//! A key is documented by a comment of the form `# <key> -- <text>` placed
//! above it. Following comment lines continue the description, and a
//! `# @default -- <text>` line overrides the default shown in the rendered
//! table:
//!
//! ```yaml
//! # image.tag -- The image tag to use,
//! # overrides the chart's appVersion
//! # @default -- the chart appVersion
//! image:
//!   tag: ""
//! ```
//!
//! The scanner is a two-state machine driven one line at a time. It never
//! looks at YAML structure; the key comes entirely from the comment.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::{HelmDocsError, Result};

/// `# <key> -- <description>`; the key stops at the first ` -- `.
static VALUES_DESCRIPTION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*# (.*?) -- (.*)$").unwrap());

/// `# @default -- <display default>`
static DEFAULT_VALUE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*# @default -- (.*)$").unwrap());

/// `# <more description>`
static COMMENT_CONTINUATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*# (.*)$").unwrap());

/// Documentation attached to a single values key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValueDescription {
    /// Description text, continuation lines joined with single spaces.
    pub description: String,
    /// Display default from an `@default` annotation.
    pub default: Option<String>,
}

/// Documentation records keyed by the key named in the comment.
pub type ValueDescriptions = HashMap<String, ValueDescription>;

/// Scanner state between two lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ScanState {
    /// Looking for a `# <key> -- <text>` line.
    #[default]
    Searching,
    /// Collecting the description of `key`.
    Accumulating { key: String, description: String },
}

impl ScanState {
    /// Feed one line and return the next state.
    ///
    /// Completed records are inserted into `out`; a later record for the
    /// same key replaces an earlier one.
    pub fn advance(self, line: &str, out: &mut ValueDescriptions) -> ScanState {
        match self {
            ScanState::Searching => match VALUES_DESCRIPTION_REGEX.captures(line) {
                Some(caps) => ScanState::Accumulating {
                    key: caps[1].to_string(),
                    description: caps[2].to_string(),
                },
                None => ScanState::Searching,
            },
            ScanState::Accumulating {
                key,
                mut description,
            } => {
                if let Some(caps) = DEFAULT_VALUE_REGEX.captures(line) {
                    out.insert(
                        key,
                        ValueDescription {
                            description,
                            default: Some(caps[1].to_string()),
                        },
                    );
                    return ScanState::Searching;
                }

                if let Some(caps) = COMMENT_CONTINUATION_REGEX.captures(line) {
                    description.push(' ');
                    description.push_str(&caps[1]);
                    return ScanState::Accumulating { key, description };
                }

                out.insert(
                    key,
                    ValueDescription {
                        description,
                        default: None,
                    },
                );
                ScanState::Searching
            }
        }
    }

    /// True while a description is still open.
    pub fn is_accumulating(&self) -> bool {
        matches!(self, ScanState::Accumulating { .. })
    }
}

/// Extract documentation records from in-memory lines.
///
/// A description still open when the input ends is discarded: only an
/// `@default` line or a non-comment line completes a record. Charts whose
/// values.yaml ends in a comment block lose that last key.
pub fn parse_values_comments<'a, I>(lines: I) -> ValueDescriptions
where
    I: IntoIterator<Item = &'a str>,
{
    let mut descriptions = ValueDescriptions::new();
    let mut state = ScanState::Searching;

    for line in lines {
        state = state.advance(line, &mut descriptions);
    }

    if let ScanState::Accumulating { key, .. } = state {
        log::trace!("Dropping unterminated description for key {}", key);
    }

    descriptions
}

/// Extract documentation records from a reader.
///
/// All lines are read before scanning, so a read error returns no records.
pub fn read_values_comments<R: BufRead>(reader: R) -> std::io::Result<ValueDescriptions> {
    let lines = reader.lines().collect::<std::io::Result<Vec<String>>>()?;
    Ok(parse_values_comments(lines.iter().map(String::as_str)))
}

/// Extract documentation records from a values file.
pub fn read_values_comments_file(path: &Path) -> Result<ValueDescriptions> {
    let file = File::open(path).map_err(|e| HelmDocsError::io(path, e))?;
    read_values_comments(BufReader::new(file)).map_err(|e| HelmDocsError::io(path, e))
}
