//! Flag spelling rules: canonical names, aliases, and negation.

use crate::input::{CliValues, RawFlag};
use gen_schema::{FlagSpec, OptionValue, ValueKind};

/// Canonical flag spelling for an option name: underscores rendered as
/// hyphens, so `module_type` is passed as `--module-type`.
pub fn flag_name(option: &str) -> String {
    option.replace('_', "-")
}

/// Spellings a flag answers to: the canonical hyphenated form, the raw
/// option name where it differs, and the single-character alias.
fn spellings(option: &str, spec: &FlagSpec) -> Vec<String> {
    let canonical = flag_name(option);
    let mut names = Vec::with_capacity(3);
    if canonical != option {
        names.push(canonical);
        names.push(option.to_string());
    } else {
        names.push(canonical);
    }
    if let Some(alias) = spec.alias {
        names.push(alias.to_string());
    }
    names
}

/// Looks `option` up in the raw input.
///
/// Boolean flags additionally answer to their `no-` spellings; a negated
/// form yields an explicit `false`. Either way the option counts as
/// flag-supplied, so its prompt is skipped. A supplied value whose shape
/// does not match the schema is ignored, the same as an absent flag.
pub(crate) fn lookup(option: &str, spec: &FlagSpec, input: &CliValues) -> Option<OptionValue> {
    for spelling in spellings(option, spec) {
        if let Some(raw) = input.flag(&spelling) {
            match coerce(spec.kind, raw) {
                Some(value) => return Some(value),
                None => {
                    tracing::debug!(flag = %spelling, "ignoring flag value of mismatched shape");
                }
            }
        }
    }

    if spec.kind == ValueKind::Bool {
        let canonical = flag_name(option);
        let mut negated = vec![format!("no-{canonical}")];
        if canonical != option {
            negated.push(format!("no-{option}"));
        }
        for spelling in negated {
            if let Some(RawFlag::Bool(enabled)) = input.flag(&spelling) {
                return Some(OptionValue::Bool(!enabled));
            }
        }
    }

    None
}

/// Reads a raw flag value in the shape the schema declares for it.
/// `None` for a mismatched shape: the value is treated as not supplied.
fn coerce(kind: ValueKind, raw: &RawFlag) -> Option<OptionValue> {
    match (kind, raw) {
        (ValueKind::Bool, RawFlag::Bool(enabled)) => Some(OptionValue::Bool(*enabled)),
        (ValueKind::Bool, RawFlag::Text(text)) => parse_bool(text),
        (ValueKind::Text, RawFlag::Text(text)) => Some(OptionValue::Text(text.clone())),
        (ValueKind::Text, RawFlag::Bool(_)) => None,
    }
}

/// Reads a positional argument in the shape the schema declares.
pub(crate) fn coerce_positional(kind: ValueKind, value: &str) -> Option<OptionValue> {
    match kind {
        ValueKind::Text => Some(OptionValue::from(value)),
        ValueKind::Bool => parse_bool(value),
    }
}

fn parse_bool(text: &str) -> Option<OptionValue> {
    match text {
        "true" => Some(OptionValue::Bool(true)),
        "false" => Some(OptionValue::Bool(false)),
        _ => None,
    }
}
