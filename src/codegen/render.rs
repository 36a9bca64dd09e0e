//! TypeScript text for the generated frontend files.

use super::parse::{ErrorCodeDef, FieldDef};
use std::fmt::Write;

fn ts_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| format!("\"{}\"", s))
}

fn const_name(def: &ErrorCodeDef) -> String {
    format!("Code{}", def.variant)
}

/// `errorCodes.ts`: one constant per code, the message map, a code union, and a default export.
pub fn render_error_codes(codes: &[ErrorCodeDef]) -> String {
    let mut out = String::new();
    out.push_str("// GENERATED FROM the Rust error catalog (src/catalog.rs). Do not edit.\n");
    out.push_str("// Keep in sync with backend; used by frontend for error-code checks and messages.\n\n");

    for def in codes {
        let _ = writeln!(out, "export const {} = {};", const_name(def), ts_string(&def.code));
    }

    out.push_str("\nexport const ErrorMessages: Record<string, string> = {\n");
    for def in codes {
        let _ = writeln!(out, "  [{}]: {},", const_name(def), ts_string(&def.message));
    }
    out.push_str("};\n\n");

    if codes.is_empty() {
        out.push_str("export type ErrorCode = string;\n\n");
    } else {
        let union: Vec<String> = codes.iter().map(|d| format!("typeof {}", const_name(d))).collect();
        let _ = writeln!(out, "export type ErrorCode =\n  | {};\n", union.join("\n  | "));
    }

    out.push_str("export default {\n");
    for def in codes {
        let _ = writeln!(out, "  {},", const_name(def));
    }
    out.push_str("  ErrorMessages,\n};\n");
    out
}

/// `apiTypes.ts`: envelope shapes, pagination meta, and the Product interface.
pub fn render_api_types(product_fields: &[FieldDef]) -> String {
    let mut out = String::new();
    out.push_str("// GENERATED: API response types for frontend. Do not edit.\n\n");
    out.push_str(
        "export interface APIError {\n  code: string;\n  message: string;\n  details?: any;\n}\n\n",
    );
    out.push_str(
        "export interface ErrorEnvelope {\n  success: false;\n  status: number;\n  error: APIError;\n}\n\n",
    );
    out.push_str(
        "export interface SuccessEnvelope<T, M = Record<string, any>> {\n  success: true;\n  status: number;\n  data: T;\n  meta?: M;\n}\n\n",
    );
    out.push_str(
        "export interface PaginationMeta {\n  page: number;\n  per_page: number;\n  total: number;\n  total_pages: number;\n}\n\n",
    );

    out.push_str("export interface Product {\n");
    for field in product_fields {
        let _ = writeln!(out, "  {}: {};", field.name, field.ts_type);
    }
    out.push_str("}\n\n");

    out.push_str("export type ProductListResponse = SuccessEnvelope<Product[], PaginationMeta>;\n");
    out.push_str("export type ProductResponse = SuccessEnvelope<Product>;\n");
    out.push_str("export type APIFailure = ErrorEnvelope;\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::parse::baseline_product_fields;

    fn defs() -> Vec<ErrorCodeDef> {
        vec![
            ErrorCodeDef {
                variant: "InvalidId".into(),
                code: "INVALID_ID".into(),
                message: "invalid product id".into(),
            },
            ErrorCodeDef {
                variant: "PerPageTooLarge".into(),
                code: "PER_PAGE_TOO_LARGE".into(),
                message: "per_page exceeds maximum allowed".into(),
            },
        ]
    }

    #[test]
    fn error_codes_file() {
        let ts = render_error_codes(&defs());
        assert!(ts.contains("export const CodeInvalidId = \"INVALID_ID\";"));
        assert!(ts.contains("  [CodePerPageTooLarge]: \"per_page exceeds maximum allowed\","));
        assert!(ts.contains("export type ErrorCode =\n  | typeof CodeInvalidId\n  | typeof CodePerPageTooLarge;"));
        assert!(ts.ends_with("  CodeInvalidId,\n  CodePerPageTooLarge,\n  ErrorMessages,\n};\n"));
    }

    #[test]
    fn messages_are_escaped() {
        let ts = render_error_codes(&[ErrorCodeDef {
            variant: "Odd".into(),
            code: "ODD".into(),
            message: "say \"hi\"".into(),
        }]);
        assert!(ts.contains(r#"[CodeOdd]: "say \"hi\"","#));
    }

    #[test]
    fn empty_catalog_still_valid() {
        let ts = render_error_codes(&[]);
        assert!(ts.contains("export type ErrorCode = string;"));
        assert!(ts.contains("export const ErrorMessages: Record<string, string> = {\n};"));
    }

    #[test]
    fn api_types_file() {
        let ts = render_api_types(&baseline_product_fields());
        assert!(ts.contains("export interface Product {\n  id: number;\n  code: string;\n  price: number;\n"));
        assert!(ts.contains("  deletedAt: string | null;\n}"));
        assert!(ts.contains("export interface ErrorEnvelope {\n  success: false;"));
        assert!(ts.contains("export type ProductListResponse = SuccessEnvelope<Product[], PaginationMeta>;"));
    }
}
