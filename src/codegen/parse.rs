//! Line-pattern extraction of error codes and struct fields from Rust source text.
//!
//! Not a Rust parser: it expects the one-row-per-line catalog and one-field-per-line struct layout
//! used in this crate, and returns nothing when those shapes are absent.

use crate::case::to_camel_case;
use crate::error::CodegenError;
use regex::Regex;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorCodeDef {
    /// Enum variant, e.g. `ProductNotFound`.
    pub variant: String,
    /// Wire string, e.g. `PRODUCT_NOT_FOUND`.
    pub code: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDef {
    /// Name as serialized on the wire.
    pub name: String,
    pub ts_type: String,
}

/// Rows of the form `(ErrorCode::Variant, "WIRE", "message"),`. Later duplicates of a wire code are dropped.
pub fn parse_error_codes(src: &str) -> Result<Vec<ErrorCodeDef>, CodegenError> {
    let row = Regex::new(r#"\(\s*ErrorCode::(\w+)\s*,\s*"([A-Za-z0-9_]+)"\s*,\s*"((?:[^"\\]|\\.)*)"\s*\)"#)?;
    let mut out: Vec<ErrorCodeDef> = Vec::new();
    for line in src.lines() {
        let Some(caps) = row.captures(line) else {
            continue;
        };
        if out.iter().any(|d| d.code == caps[2]) {
            continue;
        }
        out.push(ErrorCodeDef {
            variant: caps[1].to_string(),
            code: caps[2].to_string(),
            message: unescape(&caps[3]),
        });
    }
    Ok(out)
}

/// `pub` fields of `pub struct <name> { ... }`, one per line. Field names are camelCased when the
/// struct carries `#[serde(rename_all = "camelCase")]`.
pub fn parse_struct_fields(src: &str, name: &str) -> Result<Vec<FieldDef>, CodegenError> {
    let start = Regex::new(&format!(r"^\s*pub\s+struct\s+{}\s*\{{", regex::escape(name)))?;
    let any_item = Regex::new(r"^\s*(pub(\([^)]*\))?\s+)?(struct|enum|fn|impl|mod)\b")?;
    let camel_attr = Regex::new(r#"rename_all\s*=\s*"camelCase""#)?;
    let field = Regex::new(r"^\s*pub\s+(r#)?(\w+)\s*:\s*(.+?)\s*,?\s*(//.*)?$")?;

    let mut camel = false;
    let mut in_struct = false;
    let mut out = Vec::new();
    for line in src.lines() {
        if !in_struct {
            if start.is_match(line) {
                in_struct = true;
            } else if any_item.is_match(line) {
                camel = false;
            } else if camel_attr.is_match(line) {
                camel = true;
            }
            continue;
        }
        if line.trim_start().starts_with('}') {
            break;
        }
        if let Some(caps) = field.captures(line) {
            let raw = &caps[2];
            out.push(FieldDef {
                name: if camel { to_camel_case(raw) } else { raw.to_string() },
                ts_type: ts_type(&caps[3]),
            });
        }
    }
    Ok(out)
}

/// Fields used when the Product struct cannot be found in the model source.
pub fn baseline_product_fields() -> Vec<FieldDef> {
    [
        ("id", "number"),
        ("code", "string"),
        ("price", "number"),
        ("createdAt", "string"),
        ("updatedAt", "string"),
        ("deletedAt", "string | null"),
    ]
    .into_iter()
    .map(|(name, ts_type)| FieldDef {
        name: name.to_string(),
        ts_type: ts_type.to_string(),
    })
    .collect()
}

/// Maps a Rust type expression to its JSON-facing TypeScript type.
pub fn ts_type(rust: &str) -> String {
    let t = rust.trim();
    if let Some(inner) = generic_arg(t, "Option") {
        return format!("{} | null", ts_type(inner));
    }
    if let Some(inner) = generic_arg(t, "Vec") {
        let item = ts_type(inner);
        return if item.contains(' ') {
            format!("({})[]", item)
        } else {
            format!("{}[]", item)
        };
    }
    let t = t.trim_start_matches('&').trim_start_matches("'static").trim();
    let head = t.split('<').next().unwrap_or(t);
    let head = head.rsplit("::").next().unwrap_or(head).trim();
    match head {
        "i8" | "i16" | "i32" | "i64" | "i128" | "isize" | "u8" | "u16" | "u32" | "u64" | "u128"
        | "usize" | "f32" | "f64" => "number",
        "String" | "str" | "char" | "DateTime" | "NaiveDateTime" | "NaiveDate" | "Uuid" => "string",
        "bool" => "boolean",
        "Value" => "any",
        _ => "unknown",
    }
    .to_string()
}

/// `Name<inner>` -> `inner`, accepting a path prefix such as `std::option::Option`.
fn generic_arg<'a>(t: &'a str, name: &str) -> Option<&'a str> {
    let open = t.find('<')?;
    let head = t[..open].trim();
    if head.rsplit("::").next() != Some(name) {
        return None;
    }
    t[open + 1..].strip_suffix('>')
}

fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG_SRC: &str = r#"
pub const CATALOG: &[(ErrorCode, &str, &str)] = &[
    (ErrorCode::InternalError, "INTERNAL_ERROR", "internal server error"),
    (ErrorCode::Quoted, "QUOTED", "say \"hi\""),
    (ErrorCode::InternalError, "INTERNAL_ERROR", "duplicate"),
];
"#;

    const MODEL_SRC: &str = r#"
#[derive(Serialize)]
pub struct Other {
    pub ignored: i32,
}

#[derive(Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub code: String,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>, // soft delete
    pub tags: Vec<String>,
    internal: bool,
}
"#;

    #[test]
    fn error_code_rows() {
        let codes = parse_error_codes(CATALOG_SRC).unwrap();
        assert_eq!(codes.len(), 2);
        assert_eq!(codes[0].variant, "InternalError");
        assert_eq!(codes[0].code, "INTERNAL_ERROR");
        assert_eq!(codes[0].message, "internal server error");
        assert_eq!(codes[1].message, "say \"hi\"");
    }

    #[test]
    fn no_rows_is_empty() {
        assert!(parse_error_codes("pub enum ErrorCode { A }").unwrap().is_empty());
    }

    #[test]
    fn product_fields() {
        let fields = parse_struct_fields(MODEL_SRC, "Product").unwrap();
        let pairs: Vec<(&str, &str)> = fields.iter().map(|f| (f.name.as_str(), f.ts_type.as_str())).collect();
        assert_eq!(
            pairs,
            vec![
                ("id", "number"),
                ("code", "string"),
                ("createdAt", "string"),
                ("deletedAt", "string | null"),
                ("tags", "string[]"),
            ]
        );
    }

    #[test]
    fn snake_case_kept_without_rename_attr() {
        let src = "pub struct Product {\n    pub created_at: String,\n}\n";
        let fields = parse_struct_fields(src, "Product").unwrap();
        assert_eq!(fields[0].name, "created_at");
    }

    #[test]
    fn missing_struct_is_empty() {
        assert!(parse_struct_fields(MODEL_SRC, "Order").unwrap().is_empty());
    }

    #[test]
    fn type_mapping() {
        assert_eq!(ts_type("u32"), "number");
        assert_eq!(ts_type("&'static str"), "string");
        assert_eq!(ts_type("chrono::DateTime<chrono::Utc>"), "string");
        assert_eq!(ts_type("std::option::Option<bool>"), "boolean | null");
        assert_eq!(ts_type("Vec<Option<i64>>"), "(number | null)[]");
        assert_eq!(ts_type("serde_json::Value"), "any");
        assert_eq!(ts_type("Widget"), "unknown");
    }

    #[test]
    fn baseline_has_six_fields() {
        let names: Vec<String> = baseline_product_fields().into_iter().map(|f| f.name).collect();
        assert_eq!(names, ["id", "code", "price", "createdAt", "updatedAt", "deletedAt"]);
    }
}
