use super::VersionUpdater;
use crate::error::UpdaterError;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

const DEFAULT_INDENT: &str = "  ";

/// `package.json` style manifests with a top-level `version` field.
///
/// Lockfiles (`package-lock.json`, `npm-shrinkwrap.json`) also carry the
/// root package version under `packages[""]`, which is kept in step.
pub struct JsonUpdater;

impl Default for JsonUpdater {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonUpdater {
    pub fn new() -> Self {
        Self
    }

    fn parse(contents: &str) -> Result<Value, UpdaterError> {
        serde_json::from_str(contents).map_err(|e| UpdaterError::parse("json", e.to_string()))
    }
}

impl VersionUpdater for JsonUpdater {
    fn read_version(&self, contents: &str) -> Result<String, UpdaterError> {
        Self::parse(contents)?
            .get("version")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| UpdaterError::version_not_found("json"))
    }

    fn write_version(&self, contents: &str, version: &str) -> Result<String, UpdaterError> {
        let mut json = Self::parse(contents)?;
        let object = json
            .as_object_mut()
            .ok_or_else(|| UpdaterError::parse("json", "expected a top-level object"))?;

        object.insert("version".to_string(), Value::String(version.to_string()));

        if let Some(root) = object
            .get_mut("packages")
            .and_then(|packages| packages.get_mut(""))
            .and_then(Value::as_object_mut)
        {
            root.insert("version".to_string(), Value::String(version.to_string()));
        }

        stringify(&json, &detect_indent(contents), detect_newline(contents))
    }
}

fn stringify(value: &Value, indent: &str, newline: &str) -> Result<String, UpdaterError> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|e| UpdaterError::parse("json", e.to_string()))?;

    let mut output =
        String::from_utf8(buf).map_err(|e| UpdaterError::parse("json", e.to_string()))?;
    output.push('\n');

    if newline != "\n" {
        output = output.replace('\n', newline);
    }
    Ok(output)
}

/// Leading whitespace of the first indented line.
fn detect_indent(contents: &str) -> String {
    contents
        .lines()
        .skip(1)
        .map(|line| {
            line.chars()
                .take_while(|c| *c == ' ' || *c == '\t')
                .collect::<String>()
        })
        .find(|indent| !indent.is_empty())
        .unwrap_or_else(|| DEFAULT_INDENT.to_string())
}

fn detect_newline(contents: &str) -> &'static str {
    if contents.contains("\r\n") {
        "\r\n"
    } else {
        "\n"
    }
}
