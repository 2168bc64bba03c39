use souk_core::install;
use souk_core::selection::Selection;
use souk_core::types::Kind;

/// Builds a selection from the repeated per-kind flags and prints the
/// install commands for it. Toggle semantics apply, so naming the same id
/// twice deselects it again.
pub fn run(
    plugins: &[String],
    agents: &[String],
    commands: &[String],
    hooks: &[String],
) -> anyhow::Result<()> {
    let mut selection = Selection::new();
    for (kind, ids) in [
        (Kind::Plugin, plugins),
        (Kind::Agent, agents),
        (Kind::Command, commands),
        (Kind::Hook, hooks),
    ] {
        for id in ids {
            selection.toggle(kind, id.as_str());
        }
    }

    println!("{}", install::generate(&selection));
    Ok(())
}
