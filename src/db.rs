//! The accumulating option database.
//!
//! [`OptionDb`] turns a stream of tokens — command-line arguments, inline
//! text, or profile files — into an ordered list of
//! `(section, name, value)` triples, resolving template variables and file
//! inclusion along the way. It records everything it is fed; deciding what
//! the names mean is the caller's business (typically via the binders in
//! [`Opt`](crate::Opt)).
//!
//! # Token grammar
//!
//! Each token is handled in order:
//!
//! 1. `-` reads standard input as file contents.
//! 2. A token without `=` is expanded first (a template reference may reveal
//!    an assignment); if still bare, it names a profile file to include via
//!    the auto path. A token that is neither is an error.
//! 3. `$(var)=value` defines a template variable. Both the variable name and
//!    the value are expanded first, so definitions can be built from other
//!    variables.
//! 4. `input=file` includes a profile file. For the duration of that parse
//!    the `current_base_name` variable holds the resolved file's base name;
//!    the previous value (or absence) is restored afterwards, so the child's
//!    name never leaks to tokens that follow the inclusion.
//! 5. Anything else records `("global", name, value)` with templates
//!    expanded in both parts.
//!
//! # Files
//!
//! Lines are split into whitespace-separated tokens with double-quote
//! grouping. A line whose first non-whitespace character is `#` is a
//! comment; blank lines are skipped. A UTF-8 byte-order mark on the first
//! line is dropped, and lines that are not valid UTF-8 are decoded as
//! Latin-1.
//!
//! Any error — template, syntax, or I/O — aborts the whole parse. There is
//! no per-token recovery.

use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use log::{debug, trace};
use serde::Serialize;

use crate::error::SimfigError;
use crate::file;
use crate::template::{self, VarMap};
use crate::tokenize;

/// One recorded option assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionTuple {
    pub section: String,
    pub name: String,
    pub value: String,
}

/// Token-stream parser and `(section, name, value)` accumulator.
#[derive(Debug)]
pub struct OptionDb {
    /// Template variables, including the inclusion-scoped
    /// `current_base_name`.
    pub var_map: VarMap,
    /// Directory prefixes consulted when a token names a profile file.
    pub auto_path: Vec<PathBuf>,
    options: Vec<OptionTuple>,
}

impl OptionDb {
    /// Empty database with the default auto path.
    pub fn new() -> Self {
        Self {
            var_map: VarMap::new(),
            auto_path: file::default_auto_path(),
            options: Vec::new(),
        }
    }

    /// Parse each argument as one token.
    pub fn parse_args<S: AsRef<str>>(&mut self, args: &[S]) -> Result<(), SimfigError> {
        for arg in args {
            self.parse_token(arg.as_ref())?;
        }
        Ok(())
    }

    /// Parse a chunk of line-oriented text.
    pub fn parse_text(&mut self, text: &str) -> Result<(), SimfigError> {
        for line in text.lines() {
            let line = line.trim_start();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            self.parse_line(line)?;
        }
        Ok(())
    }

    /// Parse one line of whitespace-separated tokens.
    pub fn parse_line(&mut self, line: &str) -> Result<(), SimfigError> {
        if line.starts_with('#') {
            return Ok(());
        }
        for token in tokenize::split_quoted(line) {
            self.parse_token(&token)?;
        }
        Ok(())
    }

    /// Parse a line-oriented reader. `origin` names the source in I/O
    /// errors.
    pub fn parse_stream<R: BufRead>(
        &mut self,
        mut reader: R,
        origin: &str,
    ) -> Result<(), SimfigError> {
        let mut raw = Vec::new();
        let mut first = true;
        loop {
            raw.clear();
            // read_until, not read_line: a Latin-1 line must still arrive.
            let n = reader
                .read_until(b'\n', &mut raw)
                .map_err(|source| SimfigError::Io {
                    origin: origin.to_owned(),
                    source,
                })?;
            if n == 0 {
                return Ok(());
            }

            let mut bytes = raw.as_slice();
            if first {
                first = false;
                if bytes.starts_with(&[0xEF, 0xBB, 0xBF]) {
                    bytes = &bytes[3..];
                }
            }

            let line = decode_line(bytes);
            let line = line.trim_start();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            self.parse_line(line)?;
        }
    }

    /// Read standard input as file contents (the `-` token).
    pub fn parse_stdin(&mut self) -> Result<(), SimfigError> {
        let stdin = std::io::stdin();
        self.parse_stream(stdin.lock(), "stdin")
    }

    /// Handle a single token.
    pub fn parse_token(&mut self, token: &str) -> Result<(), SimfigError> {
        if token == "-" {
            return self.parse_stdin();
        }

        let mut parsed = token.to_owned();
        let mut cut = parsed.find('=');

        // A bare word may still hide an assignment behind a template
        // reference.
        if cut.is_none() {
            template::expand_variables(&self.var_map, &mut parsed)?;
            cut = parsed.find('=');
        }

        let Some(cut) = cut else {
            // Still bare: the token names a profile file.
            let Some((f, path)) = file::open_file(&self.auto_path, &parsed) else {
                return Err(SimfigError::UnknownToken { token: parsed });
            };
            debug!("including profile {}", path.display());
            return self.parse_stream(BufReader::new(f), &path.display().to_string());
        };

        let mut name = parsed[..cut].to_owned();
        let mut value = parsed[cut + 1..].to_owned();
        template::expand_variables(&self.var_map, &mut value)?;

        if name.starts_with('$') {
            if name.len() < 3 || name.as_bytes()[1] != b'(' || !name.ends_with(')') {
                return Err(SimfigError::VariableSyntax { token: parsed });
            }
            let mut var_name = name[2..name.len() - 1].to_owned();
            template::expand_variables(&self.var_map, &mut var_name)?;
            debug!("template variable '{var_name}' = '{value}'");
            self.var_map.insert(var_name, value);
        } else if name == "input" {
            self.parse_input(&value)?;
        } else {
            template::expand_variables(&self.var_map, &mut name)?;
            self.add("global", name, value);
        }
        Ok(())
    }

    /// Record one triple.
    pub fn add(
        &mut self,
        section: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) {
        let tuple = OptionTuple {
            section: section.into(),
            name: name.into(),
            value: value.into(),
        };
        trace!("{}: {}={}", tuple.section, tuple.name, tuple.value);
        self.options.push(tuple);
    }

    /// Every recorded triple, in input order, duplicates included.
    pub fn options(&self) -> &[OptionTuple] {
        &self.options
    }

    /// The last recorded value for `name`; later assignments win.
    pub fn value_of(&self, name: &str) -> Option<&str> {
        self.options
            .iter()
            .rev()
            .find(|tuple| tuple.name == name)
            .map(|tuple| tuple.value.as_str())
    }

    fn parse_input(&mut self, value: &str) -> Result<(), SimfigError> {
        let previous = self.var_map.get("current_base_name").cloned();

        let Some((f, path)) = file::open_file(&self.auto_path, value) else {
            return Err(SimfigError::InputFileNotFound {
                path: PathBuf::from(value),
            });
        };
        let base = file::base_name(&path);
        debug!(
            "input {} scopes current_base_name='{base}'",
            path.display()
        );
        self.var_map.insert("current_base_name".to_owned(), base);

        let result = self.parse_stream(BufReader::new(f), &path.display().to_string());

        // Restore the includer's scope; a previously unset name stays unset.
        match previous {
            Some(prev) => {
                self.var_map.insert("current_base_name".to_owned(), prev);
            }
            None => {
                self.var_map.remove("current_base_name");
            }
        }
        result
    }
}

impl Default for OptionDb {
    fn default() -> Self {
        Self::new()
    }
}

fn decode_line(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_owned(),
        // Every byte maps to the Latin-1 code point of the same value.
        Err(_) => bytes.iter().map(|&b| char::from(b)).collect(),
    }
}
