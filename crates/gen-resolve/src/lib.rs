//! Option resolution for the Primer module generator.
//!
//! Takes the pre-parsed command line plus a prompt engine and resolves
//! every registered option to a value: positional arguments first, then
//! flags (with aliases and `no-` negation), then interactive prompts,
//! then static defaults. Declaration order is honored throughout so
//! derived defaults and validators can read earlier answers.

pub mod engine;
pub mod error;
pub mod flags;
pub mod input;
pub mod resolver;

pub use engine::{PromptEngine, PromptRequest};
pub use error::{PromptError, ResolveError, Result};
pub use flags::flag_name;
pub use input::{CliValues, RawFlag};
pub use resolver::Resolver;
