//! Profile file discovery.
//!
//! A token that names a file instead of a `name=value` pair is resolved
//! against the **auto path**: an ordered list of directory prefixes built
//! once per [`OptionDb`](crate::OptionDb). Candidates are tried in order and
//! the first one that opens wins; the bare name relative to the working
//! directory is the final fallback. Nothing is checked at construction time,
//! so listing a directory that does not exist is harmless.
//!
//! The default list starts at `.`, then walks a fixed profile layout under
//! `./profiles` and `../profiles` (the tool is run both from the source root
//! and from a build subdirectory): the base itself, `Legendaries`, the two
//! `Tier19*_NH` folders, and `Tier{17..19}{B,M,H,N,P}`. A packaging build
//! can add one more base by setting `SIMFIG_SHARED_DATA` at compile time;
//! the default `..` is skipped since the relative entries already cover it.

use std::fs::File;
use std::path::{Path, PathBuf};

use log::debug;

const MIN_TIER: u32 = 17;
const MAX_TIER: u32 = 19;

/// Build the default auto-path prefix list, in search order.
pub fn default_auto_path() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(".")];

    let shared = option_env!("SIMFIG_SHARED_DATA").unwrap_or("..");
    let mut bases = vec!["./profiles", "../profiles"];
    if !shared.is_empty() && !shared.eq_ignore_ascii_case("..") {
        bases.push(shared);
    }

    for base in bases {
        let base = PathBuf::from(base);
        paths.push(base.clone());
        paths.push(base.join("Legendaries"));
        paths.push(base.join("Tier19H_NH"));
        paths.push(base.join("Tier19M_NH"));
        for tier in MIN_TIER..=MAX_TIER {
            for flavor in ["B", "M", "H", "N", "P"] {
                paths.push(base.join(format!("Tier{tier}{flavor}")));
            }
        }
    }
    paths
}

/// Open `name` under each prefix in order, then as a literal path.
///
/// Returns the open handle together with the path that actually matched, or
/// `None` when no candidate opens.
pub fn open_file(paths: &[PathBuf], name: &str) -> Option<(File, PathBuf)> {
    for prefix in paths {
        let candidate = prefix.join(name);
        if let Ok(file) = File::open(&candidate) {
            debug!("resolved '{name}' to {}", candidate.display());
            return Some((file, candidate));
        }
    }

    let literal = PathBuf::from(name);
    match File::open(&literal) {
        Ok(file) => {
            debug!("resolved '{name}' literally");
            Some((file, literal))
        }
        Err(_) => None,
    }
}

/// File name with the directory and everything from the first dot removed.
///
/// `profiles/Tier19P/warrior.T19P.simc` becomes `warrior`.
pub fn base_name(path: &Path) -> String {
    let Some(file_name) = path.file_name() else {
        return String::new();
    };
    let file_name = file_name.to_string_lossy();
    match file_name.find('.') {
        Some(dot) => file_name[..dot].to_string(),
        None => file_name.into_owned(),
    }
}
