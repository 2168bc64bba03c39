use crate::selection::Selection;
use crate::types::Kind;

/// Printed when nothing is selected, instead of an empty script.
pub const EMPTY_SELECTION_PLACEHOLDER: &str = "# Select components to generate install commands";

/// One install command for one id. Agent batches pass the joined id list
/// through the same shape.
pub fn install_line(kind: Kind, id: &str) -> String {
    format!("/{} install {}", kind.as_str(), id)
}

/// Renders the selection as install commands, grouped by kind in the fixed
/// order plugins, agents, commands, hooks. Within a kind, ids keep selection
/// order. Agents collapse to a single space-separated line; every other kind
/// gets one line per id. Ids are emitted verbatim, with no validation against
/// any registry.
pub fn generate(selection: &Selection) -> String {
    if selection.is_empty() {
        return EMPTY_SELECTION_PLACEHOLDER.to_string();
    }

    let mut lines: Vec<String> = Vec::new();
    for &kind in Kind::all() {
        match kind {
            Kind::Agent => {
                let ids: Vec<&str> = selection.ids_for(kind).collect();
                if !ids.is_empty() {
                    lines.push(install_line(kind, &ids.join(" ")));
                }
            }
            _ => {
                for id in selection.ids_for(kind) {
                    lines.push(install_line(kind, id));
                }
            }
        }
    }
    lines.join("\n")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
