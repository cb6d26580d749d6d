//! # Types Subcommand
//!
//! Lists the document type codes accepted by `zkdoc hash --type`.

use anyhow::Result;

use zkdoc_core::DocumentKind;

/// Render the document type table.
pub fn render_types() -> String {
    let mut out = String::from("Document Types:\n");
    for kind in DocumentKind::all() {
        out.push_str(&format!("  {:<2} - {}\n", kind.code().value(), kind.display_name()));
    }
    out
}

/// Execute the types subcommand.
pub fn run_types() -> Result<u8> {
    print!("{}", render_types());
    Ok(0)
}
