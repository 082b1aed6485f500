//! Token-stream configuration for simulation profiles. Feed it `name=value`
//! tokens — from argv, text, or profile files — and bind the results into
//! your own fields.
//!
//! Simfig implements the option grammar used by simulation profile files:
//! whitespace-separated `name=value` tokens with `$(variable)` templates,
//! `#` comments, quoted values, and recursive file inclusion. Parsing and
//! interpretation are two separate layers, so a frontend can collect
//! everything first and decide later which subsystem owns which name.
//!
//! ```
//! use simfig::{Opt, OptionDb, parse_option};
//!
//! let mut db = OptionDb::new();
//! db.parse_args(&["$(race)=orc", "name=$(race)_warrior", "iterations=250"])?;
//!
//! let mut name = String::new();
//! let mut iterations = 0i64;
//! let mut options = [
//!     Opt::string("name", &mut name),
//!     Opt::int("iterations", &mut iterations),
//! ];
//! for recorded in db.options() {
//!     parse_option(&mut options, &recorded.name, &recorded.value)?;
//! }
//! drop(options);
//! assert_eq!(name, "orc_warrior");
//! assert_eq!(iterations, 250);
//! # Ok::<(), simfig::SimfigError>(())
//! ```
//!
//! # The two layers
//!
//! **Accumulation** — [`OptionDb`] walks tokens in order and records
//! `(section, name, value)` triples ([`OptionTuple`]), resolving templates
//! and inclusion as it goes. It keeps every assignment, duplicates included;
//! [`OptionDb::value_of`] answers "what won" for a single name. This is the
//! layer that understands files, `input=`, `$(var)=value`, and `-` for
//! standard input.
//!
//! **Binding** — [`Opt`] pairs an option name with a mutable borrow of one
//! destination: strings, integers with optional inclusive ranges, floats,
//! strict `0`/`1` booleans, durations in seconds, lists, dotted-key maps and
//! maps-of-lists, custom callbacks, and deprecated names that refuse with a
//! pointer at their replacement. [`parse_option`] offers one pair to a
//! binder slice (first claim wins); [`parse_options`] parses a whole batch
//! and insists every token is claimed.
//!
//! Applying the database to binders is one loop, as above. Nothing forces
//! the layers together: subsystems with their own token sources call the
//! binder layer directly, and frontends that only want the raw triples stop
//! at the database.
//!
//! # Template variables
//!
//! `$(name)=value` defines a variable; `$(name)` anywhere in a later token
//! expands to it, including inside option names and inside other variable
//! definitions. References nest (`$(stat$(slot))`) and chain through
//! substituted values, bounded by [`MAX_DEPTH`]. During an `input=`
//! inclusion the parser maintains `current_base_name` — the included file's
//! name up to its first dot — and restores the surrounding value when the
//! inclusion ends, so profiles can refer to "whatever file I am in" without
//! leaking that name to their includer.
//!
//! # Files and the auto path
//!
//! A token that is a bare file name, or an `input=file` assignment, resolves
//! against the auto path: a fixed, ordered list of profile directories (see
//! [`default_auto_path`]) tried before the literal name. Included files
//! parse with the same database, so their variables and triples land in the
//! same place; inclusion nests without a fixed limit. Lines starting with
//! `#` are comments, a UTF-8 BOM on the first line is ignored, and non-UTF-8
//! lines fall back to Latin-1.
//!
//! # Errors
//!
//! Every failure — an unterminated `$(`, an undefined variable, a value out
//! of range, a file that will not open, a token nothing claims — aborts the
//! parse with a [`SimfigError`] describing the offending text. There is no
//! per-token recovery: a profile either parses completely or not at all.
//!
//! The library logs resolution decisions (which auto-path candidate won,
//! variable definitions, inclusion scopes) through the [`log`] facade and
//! never installs a logger itself.

pub mod error;

mod db;
mod file;
mod numeric;
mod options;
mod template;
mod tokenize;

pub use db::{OptionDb, OptionTuple};
pub use error::SimfigError;
pub use file::default_auto_path;
pub use options::{
    Opt, OptFn, OptMap, OptMapList, parse_option, parse_options, parse_options_str,
};
pub use template::{MAX_DEPTH, VarMap, expand_variables};
pub use tokenize::{split, split_quoted};
