use serde::{Deserialize, Serialize};
use std::fmt;

/// One accelerator reported by the device-listing tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceRecord {
    /// Device index as printed by the tool (e.g. "0")
    pub id: String,
    /// "<name> (UUID: <uuid>)"
    pub display_name: String,
}

impl DeviceRecord {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }
}

/// A selectable value and its human-readable label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub value: String,
    pub label: String,
}

impl Choice {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Scalar stored in the settings collaborator.
///
/// Stores are loosely typed: a lookahead may come back as `"5"` and a toggle as
/// `1`, so readers go through the coercions below instead of matching variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl SettingValue {
    /// Integer view; numeric strings are accepted
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Str(s) => s.trim().parse().ok(),
            Self::Bool(_) => None,
        }
    }

    /// Strict boolean view used by validation
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::Str(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
            Self::Int(_) => None,
        }
    }

    /// Truthiness: empty strings, "0", "false", zero and `false` are unset
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Int(n) => *n != 0,
            Self::Str(s) => {
                let s = s.trim();
                !(s.is_empty() || s == "0" || s.eq_ignore_ascii_case("false"))
            }
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{}", b),
            Self::Int(n) => write!(f, "{}", n),
            Self::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for SettingValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Output of one compilation.
///
/// All three lists are literal command-line tokens; their order is significant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompiledArguments {
    /// Global/decode flags placed before `-i`
    pub pre_input_args: Vec<String>,
    /// Filter names to chain, e.g. for uploading frames to device memory
    pub filter_chain: Vec<String>,
    /// Flags for the output stream the compilation was made for
    pub stream_args: Vec<String>,
}

impl CompiledArguments {
    /// Assemble a complete ffmpeg invocation around the compiled arguments.
    ///
    /// The filter chain is only inserted when `with_filters` is set; deciding
    /// whether frames need uploading is up to the caller.
    pub fn command_line(
        &self,
        encoder: &str,
        input: &str,
        output: &str,
        stream_index: usize,
        with_filters: bool,
    ) -> Vec<String> {
        let mut parts = vec!["ffmpeg".to_string()];
        parts.extend(self.pre_input_args.iter().cloned());

        parts.push("-i".to_string());
        parts.push(input.to_string());

        if with_filters && !self.filter_chain.is_empty() {
            parts.push("-vf".to_string());
            parts.push(self.filter_chain.join(","));
        }

        parts.push(format!("-c:v:{}", stream_index));
        parts.push(encoder.to_string());
        parts.extend(self.stream_args.iter().cloned());
        parts.push(output.to_string());

        parts
    }
}

/// Join command tokens into a copy-pasteable shell line
pub fn format_command(parts: &[String]) -> String {
    shlex::try_join(parts.iter().map(String::as_str)).unwrap_or_else(|_| parts.join(" "))
}
