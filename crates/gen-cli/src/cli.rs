//! Command-line definition, generated from the schema registry.
//!
//! Every registered option contributes its argument and flag facets to
//! the clap command: positionals in declaration order, text flags with
//! their aliases, and boolean flags together with a hidden `no-`
//! spelling that the later occurrence wins over.

use clap::{Arg, ArgAction, ArgMatches, Command};
use gen_resolve::{flag_name, CliValues};
use gen_schema::{SchemaRegistry, ValueKind};

/// Builds the `primer-gen` command over the given registry.
pub fn build_command(registry: &SchemaRegistry) -> Command {
    let mut command = Command::new("primer-gen")
        .about("Scaffold a new Primer CSS module")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the resolved options as JSON")
                .action(ArgAction::SetTrue),
        );

    let mut positional = 0usize;
    for (name, spec) in registry.specs_in_order() {
        if let Some(argument) = &spec.argument {
            positional += 1;
            // Left optional here; the resolver enforces `required` so a
            // missing value reports through the same error path as
            // every other resolution failure.
            command = command.arg(
                Arg::new(positional_id(name))
                    .value_name(name.to_uppercase())
                    .help(argument.description.clone())
                    .index(positional)
                    .required(false),
            );
        }

        if let Some(flag) = &spec.flag {
            let long = flag_name(name);
            let mut arg = Arg::new(long.clone()).long(long.clone());
            if long != name {
                // The raw underscore spelling stays accepted.
                arg = arg.alias(name.to_string());
            }
            if let Some(description) = &flag.description {
                arg = arg.help(description.clone());
            }
            if let Some(alias) = flag.alias {
                arg = arg.short(alias);
            }
            match flag.kind {
                ValueKind::Text => {
                    command = command.arg(arg.action(ArgAction::Set));
                }
                ValueKind::Bool => {
                    let negated = negated_id(&long);
                    command = command
                        .arg(
                            arg.action(ArgAction::SetTrue)
                                .overrides_with(negated.clone()),
                        )
                        .arg(
                            Arg::new(negated.clone())
                                .long(negated)
                                .action(ArgAction::SetTrue)
                                .overrides_with(long.clone())
                                .hide(true),
                        );
                }
            }
        }
    }

    command
}

/// Lifts parsed matches into the resolver's input shape.
///
/// Negated boolean spellings are recorded as supplied under their own
/// `no-` name; the resolver turns them into explicit `false` values.
pub fn collect_input(matches: &ArgMatches, registry: &SchemaRegistry) -> CliValues {
    let mut input = CliValues::new();

    for (name, spec) in registry.specs_in_order() {
        if spec.argument.is_some() {
            if let Some(value) = matches.get_one::<String>(&positional_id(name)) {
                input = input.with_positional(value);
            }
        }

        if let Some(flag) = &spec.flag {
            let long = flag_name(name);
            match flag.kind {
                ValueKind::Text => {
                    if let Some(value) = matches.get_one::<String>(&long) {
                        input = input.with_flag(&long, value);
                    }
                }
                ValueKind::Bool => {
                    let negated = negated_id(&long);
                    if matches.get_flag(&long) {
                        input = input.with_bool_flag(&long, true);
                    } else if matches.get_flag(&negated) {
                        input = input.with_bool_flag(&negated, true);
                    }
                }
            }
        }
    }

    input
}

fn positional_id(name: &str) -> String {
    format!("arg-{name}")
}

fn negated_id(long: &str) -> String {
    format!("no-{long}")
}
