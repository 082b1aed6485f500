//! Template variable expansion.
//!
//! Option values (and names) may reference variables as `$(name)`. Expansion
//! rewrites a buffer in place against a [`VarMap`]: inner references resolve
//! before the reference that contains them (so `$(stat$(slot))` picks the
//! variable named by `slot` first), and a substituted value is itself
//! rescanned, so a variable whose value contains `$(other)` resolves all the
//! way down.
//!
//! Every resolution step consumes one unit of nesting depth, capped at
//! [`MAX_DEPTH`]. Exceeding the cap, a `$(` without a closing `)`, or a
//! reference to an undefined variable all abort with an error — expansion
//! never leaves a reference half-resolved.

use std::collections::BTreeMap;

use crate::error::SimfigError;

/// Variable mapping consulted by expansion, ordered for stable iteration.
pub type VarMap = BTreeMap<String, String>;

/// Maximum reference-resolution depth before expansion gives up.
pub const MAX_DEPTH: usize = 10;

/// Expand every `$(name)` reference in `text` in place.
///
/// On error the buffer may hold partially substituted text; callers treat
/// any error as fatal for the surrounding parse, so nothing reads it back.
pub fn expand_variables(vars: &VarMap, text: &mut String) -> Result<(), SimfigError> {
    let first = text.find("$(");
    do_replace(vars, text, first, 1)
}

fn do_replace(
    vars: &VarMap,
    text: &mut String,
    begin: Option<usize>,
    depth: usize,
) -> Result<(), SimfigError> {
    if depth > MAX_DEPTH {
        return Err(SimfigError::DepthExceeded { text: text.clone() });
    }
    let Some(begin) = begin else {
        return Ok(());
    };

    // Resolve any reference to the right (or nested inside) first, so this
    // one closes over fully substituted text.
    if let Some(next) = text[begin + 2..].find("$(") {
        do_replace(vars, text, Some(begin + 2 + next), depth + 1)?;
    }

    let Some(end) = text[begin + 2..].find(')') else {
        return Err(SimfigError::UnbalancedParenthesis { text: text.clone() });
    };
    let end = begin + 2 + end;

    let name = text[begin + 2..end].to_owned();
    let Some(value) = vars.get(&name) else {
        return Err(SimfigError::MissingVariable { name });
    };
    text.replace_range(begin..=end, value);

    // The spliced value may carry references of its own; rescan from the
    // splice point.
    if let Some(next) = text[begin..].find("$(") {
        do_replace(vars, text, Some(begin + next), depth + 1)?;
    }
    Ok(())
}
