//! Rendering of the resolved options.

use crate::error::Result;
use colored::Colorize;
use gen_schema::{ResolvedValues, SchemaRegistry};

/// The resolved mapping as pretty-printed JSON (keys sorted).
pub fn to_json(resolved: &ResolvedValues) -> Result<String> {
    Ok(serde_json::to_string_pretty(resolved)?)
}

/// Prints a human summary, one line per registered option in
/// declaration order.
pub fn print_summary(registry: &SchemaRegistry, resolved: &ResolvedValues) {
    println!();
    println!("{}", "Resolved options:".bold());
    for (name, _) in registry.specs_in_order() {
        match resolved.get(name) {
            Some(value) => println!("  {}: {}", name.dimmed(), value.to_string().cyan()),
            None => println!("  {}: {}", name.dimmed(), "(unset)".dimmed()),
        }
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use gen_schema::OptionValue;

    #[test]
    fn test_to_json_is_a_flat_object() {
        let mut resolved = ResolvedValues::new();
        resolved.set("module", "primer-tabs");
        resolved.set("todo", true);
        resolved.set("dependents", OptionValue::list(["primer-css", "primer-core"]));

        let json = to_json(&resolved).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["module"], "primer-tabs");
        assert_eq!(parsed["todo"], true);
        assert_eq!(parsed["dependents"][1], "primer-core");
    }
}
