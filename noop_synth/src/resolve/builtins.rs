//! Fixed defaults for well-known scalar type names.

use crate::expr::{Expr, Labeled};

use super::Resolution;

/// Literal used to construct `URL` placeholders.
pub const DEFAULT_PLACEHOLDER_URL: &str = "https://apple.com";

/// Default for the builtin scalar `name`, matched case-sensitively.
///
/// Returns [`Resolution::Unresolved`] for names outside the table.
#[must_use]
pub fn builtin_default(name: &str, placeholder_url: &str) -> Resolution {
    match name {
        "Int" | "UInt" | "Double" | "Float" | "CGFloat" | "TimeInterval" | "NSInteger"
        | "NSUInteger" => Resolution::Value(Expr::integer(0)),
        "String" | "NSString" => Resolution::Value(Expr::string("")),
        "Bool" => Resolution::Value(Expr::bool(false)),
        "Void" | "()" => Resolution::NoValue,
        "Date" | "Data" | "UUID" => Resolution::Value(Expr::construct(name)),
        "URL" => Resolution::Value(url_placeholder(placeholder_url)),
        _ => Resolution::Unresolved,
    }
}

fn url_placeholder(url: &str) -> Expr {
    Expr::ForceUnwrap {
        operand: Box::new(Expr::Construct {
            type_name: "URL".to_owned(),
            arguments: vec![Labeled {
                label: Some("string".to_owned()),
                value: Expr::string(url),
            }],
        }),
    }
}
