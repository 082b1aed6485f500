//! Typed option binders and token dispatch.
//!
//! An [`Opt`] pairs an option name with a mutable borrow of one caller-owned
//! destination. Parsing walks a slice of binders with a `name`/`value` pair;
//! the first binder that recognizes the name converts the value and writes it
//! through, claiming the token. A binder that does not recognize the name
//! declines and the scan continues.
//!
//! Most kinds match the exact option name. The map kinds instead own a dotted
//! prefix: a binder named `items.` claims `items.head=x` and stores `x` under
//! the key `head`, while `items.head+=x` appends. The key is the segment
//! after the last dot, so `stat.head.gear` is not claimed by a `stat.`
//! binder.
//!
//! Conversion happens before anything is written, so a failed range check
//! leaves the destination untouched. Numeric conversion uses the C-style
//! leading-prefix policy (junk after the number is ignored, no number means
//! zero); booleans accept exactly `0` or `1`; durations are seconds,
//! non-negative.
//!
//! [`Display`](std::fmt::Display) renders a binder's current state back as
//! `name=value` lines that re-parse to the same state.

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use log::trace;

use crate::error::SimfigError;
use crate::numeric;
use crate::tokenize;

/// Map destination: `binder.key=v` replaces, `binder.key+=v` string-appends.
pub type OptMap = BTreeMap<String, String>;

/// Map-of-lists destination: `binder.key=v` resets the list, `+=` appends.
pub type OptMapList = BTreeMap<String, Vec<String>>;

/// Callback destination. Invoked once the name matches; returns whether the
/// token was claimed.
pub type OptFn<'a> = Box<dyn FnMut(&str, &str) -> Result<bool, SimfigError> + 'a>;

enum Kind<'a> {
    Str(&'a mut String),
    Append(&'a mut String),
    Int(&'a mut i64),
    IntRange {
        dest: &'a mut i64,
        min: i64,
        max: i64,
    },
    Uint(&'a mut u64),
    UintRange {
        dest: &'a mut u64,
        min: u64,
        max: u64,
    },
    Float(&'a mut f64),
    FloatRange {
        dest: &'a mut f64,
        min: f64,
        max: f64,
    },
    Bool(&'a mut bool),
    BoolInt(&'a mut i64),
    Duration(&'a mut Duration),
    DurationRange {
        dest: &'a mut Duration,
        min: Duration,
        max: Duration,
    },
    List(&'a mut Vec<String>),
    Map(&'a mut OptMap),
    MapList(&'a mut OptMapList),
    Func(OptFn<'a>),
    Deprecated(String),
}

/// A named binder over one destination.
pub struct Opt<'a> {
    name: String,
    kind: Kind<'a>,
}

impl<'a> Opt<'a> {
    fn new(name: impl Into<String>, kind: Kind<'a>) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Overwrite a string destination.
    pub fn string(name: impl Into<String>, dest: &'a mut String) -> Self {
        Self::new(name, Kind::Str(dest))
    }

    /// Concatenate onto a string destination on every claim.
    pub fn append(name: impl Into<String>, dest: &'a mut String) -> Self {
        Self::new(name, Kind::Append(dest))
    }

    pub fn int(name: impl Into<String>, dest: &'a mut i64) -> Self {
        Self::new(name, Kind::Int(dest))
    }

    /// Integer bound to the inclusive range `[min, max]`.
    pub fn int_range(name: impl Into<String>, dest: &'a mut i64, min: i64, max: i64) -> Self {
        Self::new(name, Kind::IntRange { dest, min, max })
    }

    pub fn uint(name: impl Into<String>, dest: &'a mut u64) -> Self {
        Self::new(name, Kind::Uint(dest))
    }

    pub fn uint_range(name: impl Into<String>, dest: &'a mut u64, min: u64, max: u64) -> Self {
        Self::new(name, Kind::UintRange { dest, min, max })
    }

    pub fn float(name: impl Into<String>, dest: &'a mut f64) -> Self {
        Self::new(name, Kind::Float(dest))
    }

    pub fn float_range(name: impl Into<String>, dest: &'a mut f64, min: f64, max: f64) -> Self {
        Self::new(name, Kind::FloatRange { dest, min, max })
    }

    /// Boolean accepting exactly `0` or `1`.
    pub fn bool(name: impl Into<String>, dest: &'a mut bool) -> Self {
        Self::new(name, Kind::Bool(dest))
    }

    /// Boolean stored as an integer, with the same `0`/`1` validation.
    pub fn bool_int(name: impl Into<String>, dest: &'a mut i64) -> Self {
        Self::new(name, Kind::BoolInt(dest))
    }

    /// Duration given as (fractional, non-negative) seconds.
    pub fn duration(name: impl Into<String>, dest: &'a mut Duration) -> Self {
        Self::new(name, Kind::Duration(dest))
    }

    pub fn duration_range(
        name: impl Into<String>,
        dest: &'a mut Duration,
        min: Duration,
        max: Duration,
    ) -> Self {
        Self::new(name, Kind::DurationRange { dest, min, max })
    }

    /// Push one element per claim, preserving order.
    pub fn list(name: impl Into<String>, dest: &'a mut Vec<String>) -> Self {
        Self::new(name, Kind::List(dest))
    }

    /// Dotted-prefix map; `name` must end with `.`.
    pub fn map(name: impl Into<String>, dest: &'a mut OptMap) -> Self {
        Self::new(name, Kind::Map(dest))
    }

    /// Dotted-prefix map of lists; `name` must end with `.`.
    pub fn map_list(name: impl Into<String>, dest: &'a mut OptMapList) -> Self {
        Self::new(name, Kind::MapList(dest))
    }

    /// Custom handler, called with the raw name and value once the name
    /// matches.
    pub fn func(
        name: impl Into<String>,
        f: impl FnMut(&str, &str) -> Result<bool, SimfigError> + 'a,
    ) -> Self {
        Self::new(name, Kind::Func(Box::new(f)))
    }

    /// Always fails with a pointer at the replacement option.
    pub fn deprecated(name: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self::new(name, Kind::Deprecated(replacement.into()))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Try to claim `name=value`. `Ok(false)` means this binder does not
    /// recognize the name and the caller should keep scanning.
    pub fn parse(&mut self, name: &str, value: &str) -> Result<bool, SimfigError> {
        // The dotted map kinds match on prefix; everything else is exact.
        if let Kind::Map(entries) = &mut self.kind {
            let Some((key, append)) = dotted_key(&self.name, name) else {
                return Ok(false);
            };
            let slot = entries.entry(key.to_owned()).or_default();
            if append {
                slot.push_str(value);
            } else {
                *slot = value.to_owned();
            }
            return Ok(true);
        }
        if let Kind::MapList(entries) = &mut self.kind {
            // An empty value declines so a later binder may claim the token.
            if value.is_empty() {
                return Ok(false);
            }
            let Some((key, append)) = dotted_key(&self.name, name) else {
                return Ok(false);
            };
            let slot = entries.entry(key.to_owned()).or_default();
            if !append {
                slot.clear();
            }
            slot.push(value.to_owned());
            return Ok(true);
        }

        if name != self.name {
            return Ok(false);
        }
        match &mut self.kind {
            Kind::Str(dest) => {
                **dest = value.to_owned();
                Ok(true)
            }
            Kind::Append(dest) => {
                dest.push_str(value);
                Ok(true)
            }
            Kind::Int(dest) => {
                **dest = numeric::parse_i64(value);
                Ok(true)
            }
            Kind::IntRange { dest, min, max } => {
                let parsed = numeric::parse_i64(value);
                if parsed < *min || parsed > *max {
                    return Err(out_of_range(&self.name, value, *min, *max));
                }
                **dest = parsed;
                Ok(true)
            }
            Kind::Uint(dest) => {
                **dest = numeric::parse_u64(value);
                Ok(true)
            }
            Kind::UintRange { dest, min, max } => {
                let parsed = numeric::parse_u64(value);
                if parsed < *min || parsed > *max {
                    return Err(out_of_range(&self.name, value, *min, *max));
                }
                **dest = parsed;
                Ok(true)
            }
            Kind::Float(dest) => {
                **dest = numeric::parse_f64(value);
                Ok(true)
            }
            Kind::FloatRange { dest, min, max } => {
                let parsed = numeric::parse_f64(value);
                if parsed < *min || parsed > *max {
                    return Err(out_of_range(&self.name, value, *min, *max));
                }
                **dest = parsed;
                Ok(true)
            }
            Kind::Bool(dest) => {
                **dest = parse_bool(&self.name, value)?;
                Ok(true)
            }
            Kind::BoolInt(dest) => {
                **dest = i64::from(parse_bool(&self.name, value)?);
                Ok(true)
            }
            Kind::Duration(dest) => {
                **dest = parse_duration(&self.name, value)?;
                Ok(true)
            }
            Kind::DurationRange { dest, min, max } => {
                let parsed = parse_duration(&self.name, value)?;
                if parsed < *min || parsed > *max {
                    return Err(out_of_range(
                        &self.name,
                        value,
                        min.as_secs_f64(),
                        max.as_secs_f64(),
                    ));
                }
                **dest = parsed;
                Ok(true)
            }
            Kind::List(dest) => {
                dest.push(value.to_owned());
                Ok(true)
            }
            Kind::Func(f) => f(name, value),
            Kind::Deprecated(replacement) => Err(SimfigError::Deprecated {
                name: self.name.clone(),
                replacement: replacement.clone(),
            }),
            // The dotted kinds return before the exact-name check; this arm
            // only keeps the match exhaustive.
            Kind::Map(_) | Kind::MapList(_) => Ok(false),
        }
    }
}

impl fmt::Display for Opt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            Kind::Str(dest) => writeln!(f, "{}={}", self.name, dest),
            Kind::Append(dest) => writeln!(f, "{}+={}", self.name, dest),
            Kind::Int(dest) | Kind::BoolInt(dest) => writeln!(f, "{}={}", self.name, dest),
            Kind::IntRange { dest, .. } => writeln!(f, "{}={}", self.name, dest),
            Kind::Uint(dest) => writeln!(f, "{}={}", self.name, dest),
            Kind::UintRange { dest, .. } => writeln!(f, "{}={}", self.name, dest),
            Kind::Float(dest) => writeln!(f, "{}={}", self.name, dest),
            Kind::FloatRange { dest, .. } => writeln!(f, "{}={}", self.name, dest),
            Kind::Bool(dest) => writeln!(f, "{}={}", self.name, u8::from(**dest)),
            Kind::Duration(dest) => writeln!(f, "{}={}", self.name, dest.as_secs_f64()),
            Kind::DurationRange { dest, .. } => {
                writeln!(f, "{}={}", self.name, dest.as_secs_f64())
            }
            Kind::List(dest) => {
                for item in dest.iter() {
                    writeln!(f, "{}={}", self.name, item)?;
                }
                Ok(())
            }
            Kind::Map(entries) => {
                for (key, value) in entries.iter() {
                    writeln!(f, "{}{}={}", self.name, key, value)?;
                }
                Ok(())
            }
            Kind::MapList(entries) => {
                for (key, values) in entries.iter() {
                    for (i, value) in values.iter().enumerate() {
                        let sep = if i == 0 { "=" } else { "+=" };
                        writeln!(f, "{}{}{}{}", self.name, key, sep, value)?;
                    }
                }
                Ok(())
            }
            Kind::Func(_) => writeln!(f, "function option: {}", self.name),
            Kind::Deprecated(replacement) => writeln!(
                f,
                "Option '{}' has been deprecated. Please use '{}'.",
                self.name, replacement
            ),
        }
    }
}

/// Split a dotted token name against a binder prefix ending in `.`.
///
/// Returns the key (segment after the last dot) and whether the token asked
/// to append via a trailing `+`.
fn dotted_key<'t>(binder: &str, token: &'t str) -> Option<(&'t str, bool)> {
    let (stem, append) = match token.strip_suffix('+') {
        Some(stem) => (stem, true),
        None => (token, false),
    };
    let dot = stem.rfind('.')?;
    if binder == &stem[..=dot] {
        Some((&stem[dot + 1..], append))
    } else {
        None
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool, SimfigError> {
    match value {
        "1" => Ok(true),
        "0" => Ok(false),
        _ => Err(SimfigError::InvalidBool {
            name: name.to_owned(),
        }),
    }
}

fn parse_duration(name: &str, value: &str) -> Result<Duration, SimfigError> {
    let seconds = numeric::parse_f64(value);
    Duration::try_from_secs_f64(seconds).map_err(|_| SimfigError::InvalidDuration {
        name: name.to_owned(),
        value: value.to_owned(),
    })
}

fn out_of_range(
    name: &str,
    value: &str,
    min: impl fmt::Display,
    max: impl fmt::Display,
) -> SimfigError {
    SimfigError::OutOfRange {
        name: name.to_owned(),
        value: value.to_owned(),
        min: min.to_string(),
        max: max.to_string(),
    }
}

/// Offer `name=value` to each binder in order; the first claim wins.
pub fn parse_option(
    options: &mut [Opt<'_>],
    name: &str,
    value: &str,
) -> Result<bool, SimfigError> {
    for option in options.iter_mut() {
        if option.parse(name, value)? {
            trace!("'{}' claimed by binder '{}'", name, option.name());
            return Ok(true);
        }
    }
    Ok(false)
}

/// Parse a batch of `name=value` tokens; every token must be claimed.
///
/// `context` names the caller (a profile name, an actor, a subsystem) in the
/// errors for malformed or unrecognized tokens.
pub fn parse_options<S: AsRef<str>>(
    context: &str,
    options: &mut [Opt<'_>],
    tokens: &[S],
) -> Result<(), SimfigError> {
    for token in tokens {
        let token = token.as_ref();
        let Some(eq) = token.find('=') else {
            return Err(SimfigError::MissingValue {
                context: context.to_owned(),
                token: token.to_owned(),
            });
        };
        let (name, value) = (&token[..eq], &token[eq + 1..]);
        if !parse_option(options, name, value)? {
            return Err(SimfigError::UnexpectedParameter {
                context: context.to_owned(),
                name: name.to_owned(),
            });
        }
    }
    Ok(())
}

/// Comma-packed convenience form of [`parse_options`].
pub fn parse_options_str(
    context: &str,
    options: &mut [Opt<'_>],
    text: &str,
) -> Result<(), SimfigError> {
    let tokens = tokenize::split(text, ',');
    parse_options(context, options, &tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_binder_overwrites() {
        let mut region = String::from("old");
        {
            let mut options = [Opt::string("region", &mut region)];
            assert!(parse_option(&mut options, "region", "us").unwrap());
            assert!(!parse_option(&mut options, "server", "x").unwrap());
        }
        assert_eq!(region, "us");
    }

    #[test]
    fn append_binder_concatenates() {
        let mut actions = String::new();
        {
            let mut options = [Opt::append("actions", &mut actions)];
            parse_option(&mut options, "actions", "/spell_a").unwrap();
            parse_option(&mut options, "actions", "/spell_b").unwrap();
        }
        assert_eq!(actions, "/spell_a/spell_b");
    }

    #[test]
    fn int_binder_uses_prefix_conversion() {
        let mut n = 0i64;
        {
            let mut options = [Opt::int("iterations", &mut n)];
            parse_option(&mut options, "iterations", "250x").unwrap();
        }
        assert_eq!(n, 250);
    }

    #[test]
    fn int_range_accepts_inside_and_bounds() {
        let mut n = 0i64;
        let mut options = [Opt::int_range("threads", &mut n, 1, 5)];
        for value in ["1", "3", "5"] {
            assert!(parse_option(&mut options, "threads", value).unwrap());
        }
    }

    #[test]
    fn int_range_rejects_outside_without_writing() {
        let mut n = 3i64;
        {
            let mut options = [Opt::int_range("threads", &mut n, 1, 5)];
            for value in ["0", "6"] {
                let err = parse_option(&mut options, "threads", value).unwrap_err();
                let msg = err.to_string();
                assert!(msg.contains("threads"), "{msg}");
                assert!(msg.contains("[1 - 5]"), "{msg}");
            }
        }
        assert_eq!(n, 3);
    }

    #[test]
    fn uint_binder_handles_sign_and_range() {
        let mut n = 7u64;
        {
            let mut options = [Opt::uint("seed", &mut n)];
            parse_option(&mut options, "seed", "-5").unwrap();
        }
        assert_eq!(n, 0);

        let mut stacks = 0u64;
        let mut options = [Opt::uint_range("stacks", &mut stacks, 1, 20)];
        assert!(parse_option(&mut options, "stacks", "20").unwrap());
        assert!(parse_option(&mut options, "stacks", "21").is_err());
    }

    #[test]
    fn float_binder_reads_a_decimal_prefix() {
        let mut haste = 0.0f64;
        {
            let mut options = [Opt::float("haste", &mut haste)];
            parse_option(&mut options, "haste", "0.15rating").unwrap();
        }
        assert_eq!(haste, 0.15);
    }

    #[test]
    fn float_range_is_inclusive() {
        let mut x = 0.0f64;
        let mut options = [Opt::float_range("confidence", &mut x, 0.0, 1.0)];
        assert!(parse_option(&mut options, "confidence", "0.95").unwrap());
        assert!(parse_option(&mut options, "confidence", "1.0").unwrap());
        assert!(parse_option(&mut options, "confidence", "1.01").is_err());
    }

    #[test]
    fn bool_accepts_exactly_zero_or_one() {
        let mut enabled = false;
        let mut options = [Opt::bool("optimal_raid", &mut enabled)];
        assert!(parse_option(&mut options, "optimal_raid", "1").unwrap());
        assert!(parse_option(&mut options, "optimal_raid", "0").unwrap());
        for bad in ["2", "true", ""] {
            let err = parse_option(&mut options, "optimal_raid", bad).unwrap_err();
            assert!(matches!(err, SimfigError::InvalidBool { .. }), "{bad:?}");
        }
    }

    #[test]
    fn bool_int_stores_integer() {
        let mut flag = 0i64;
        {
            let mut options = [Opt::bool_int("deterministic", &mut flag)];
            parse_option(&mut options, "deterministic", "1").unwrap();
        }
        assert_eq!(flag, 1);
    }

    #[test]
    fn duration_is_seconds() {
        let mut d = Duration::ZERO;
        {
            let mut options = [Opt::duration("max_time", &mut d)];
            parse_option(&mut options, "max_time", "2.5").unwrap();
        }
        assert_eq!(d, Duration::from_millis(2500));
    }

    #[test]
    fn negative_duration_is_rejected() {
        let mut d = Duration::ZERO;
        let mut options = [Opt::duration("max_time", &mut d)];
        let err = parse_option(&mut options, "max_time", "-1").unwrap_err();
        assert!(matches!(err, SimfigError::InvalidDuration { .. }));
    }

    #[test]
    fn duration_range_compares_in_seconds() {
        let mut d = Duration::ZERO;
        let mut options = [Opt::duration_range(
            "gcd",
            &mut d,
            Duration::from_millis(750),
            Duration::from_secs(2),
        )];
        assert!(parse_option(&mut options, "gcd", "1.5").unwrap());
        let err = parse_option(&mut options, "gcd", "0.5").unwrap_err();
        assert!(matches!(err, SimfigError::OutOfRange { .. }));
    }

    #[test]
    fn list_appends_and_claims() {
        let mut targets = Vec::new();
        {
            let mut options = [Opt::list("target", &mut targets)];
            assert!(parse_option(&mut options, "target", "Fluffy").unwrap());
            assert!(parse_option(&mut options, "target", "Patchwerk").unwrap());
        }
        assert_eq!(targets, ["Fluffy", "Patchwerk"]);
    }

    #[test]
    fn map_sets_and_appends_by_key() {
        let mut gear = OptMap::new();
        {
            let mut options = [Opt::map("gear.", &mut gear)];
            parse_option(&mut options, "gear.head", "crown").unwrap();
            parse_option(&mut options, "gear.head+", "_of_fire").unwrap();
        }
        assert_eq!(gear["head"], "crown_of_fire");
    }

    #[test]
    fn map_key_must_follow_the_last_dot() {
        let mut gear = OptMap::new();
        let mut options = [Opt::map("gear.", &mut gear)];
        // The key is the segment after the last dot, so a deeper path
        // belongs to a different prefix.
        assert!(!parse_option(&mut options, "gear.head.enchant", "x").unwrap());
        assert!(!parse_option(&mut options, "gearhead", "x").unwrap());
    }

    #[test]
    fn map_list_set_append_reset() {
        let mut items = OptMapList::new();
        {
            let mut options = [Opt::map_list("items.", &mut items)];
            parse_option(&mut options, "items.a", "x").unwrap();
        }
        assert_eq!(items["a"], ["x"]);
        {
            let mut options = [Opt::map_list("items.", &mut items)];
            parse_option(&mut options, "items.a+", "y").unwrap();
        }
        assert_eq!(items["a"], ["x", "y"]);
        {
            let mut options = [Opt::map_list("items.", &mut items)];
            parse_option(&mut options, "items.a", "z").unwrap();
        }
        assert_eq!(items["a"], ["z"]);
    }

    #[test]
    fn empty_value_skips_map_list_binder() {
        let mut items = OptMapList::new();
        let mut fallback = OptMap::new();
        let mut options = [
            Opt::map_list("items.", &mut items),
            Opt::map("items.", &mut fallback),
        ];
        // An empty value falls through the map-list binder to the next one.
        assert!(parse_option(&mut options, "items.a", "").unwrap());
        drop(options);
        assert!(items.is_empty());
        assert_eq!(fallback["a"], "");
    }

    #[test]
    fn func_result_drives_the_claim() {
        let mut seen = Vec::new();
        {
            let mut options = [Opt::func("special", |name, value| {
                seen.push(format!("{name}={value}"));
                Ok(true)
            })];
            assert!(parse_option(&mut options, "special", "x").unwrap());
            assert!(!parse_option(&mut options, "other", "x").unwrap());
        }
        assert_eq!(seen, ["special=x"]);
    }

    #[test]
    fn declining_func_lets_later_binders_claim() {
        let mut caught = String::new();
        {
            let mut options = [
                Opt::func("special", |_, _| Ok(false)),
                Opt::string("special", &mut caught),
            ];
            assert!(parse_option(&mut options, "special", "x").unwrap());
        }
        assert_eq!(caught, "x");
    }

    #[test]
    fn deprecated_always_errors() {
        let mut options = [Opt::deprecated("aura_delay", "gcd_lag")];
        let err = parse_option(&mut options, "aura_delay", "0.3").unwrap_err();
        match err {
            SimfigError::Deprecated { name, replacement } => {
                assert_eq!(name, "aura_delay");
                assert_eq!(replacement, "gcd_lag");
            }
            other => panic!("Expected Deprecated, got {other:?}"),
        }
    }

    #[test]
    fn first_claim_wins() {
        let mut first = String::new();
        let mut second = String::new();
        {
            let mut options = [
                Opt::string("name", &mut first),
                Opt::string("name", &mut second),
            ];
            parse_option(&mut options, "name", "x").unwrap();
        }
        assert_eq!(first, "x");
        assert_eq!(second, "");
    }

    // --- batch dispatch ---

    #[test]
    fn batch_requires_name_value_form() {
        let mut n = 0i64;
        let mut options = [Opt::int("iterations", &mut n)];
        let err = parse_options("raid_event", &mut options, &["bare_token"]).unwrap_err();
        let msg = err.to_string();
        assert!(msg.starts_with("raid_event:"), "{msg}");
        assert!(msg.contains("Expected format: name=value"), "{msg}");
    }

    #[test]
    fn batch_rejects_unclaimed_tokens() {
        let mut n = 0i64;
        let mut options = [Opt::int("iterations", &mut n)];
        let err = parse_options("sim", &mut options, &["typo=1"]).unwrap_err();
        assert!(matches!(err, SimfigError::UnexpectedParameter { .. }));
    }

    #[test]
    fn comma_packed_form_parses_each_piece() {
        let mut n = 0i64;
        let mut name = String::new();
        {
            let mut options = [
                Opt::int("count", &mut n),
                Opt::string("name", &mut name),
            ];
            parse_options_str("event", &mut options, "count=3,name=adds,").unwrap();
        }
        assert_eq!(n, 3);
        assert_eq!(name, "adds");
    }

    // --- rendering ---

    #[test]
    fn display_renders_name_value_lines() {
        let mut region = String::from("eu");
        let opt = Opt::string("region", &mut region);
        assert_eq!(opt.to_string(), "region=eu\n");

        let mut enabled = true;
        let opt = Opt::bool("optimal_raid", &mut enabled);
        assert_eq!(opt.to_string(), "optimal_raid=1\n");
    }

    #[test]
    fn map_list_rendering_reparses_to_the_same_state() {
        let mut items = OptMapList::new();
        items.insert("trinket".into(), vec!["a".into(), "b".into()]);
        let rendered = {
            let opt = Opt::map_list("items.", &mut items);
            opt.to_string()
        };
        assert_eq!(rendered, "items.trinket=a\nitems.trinket+=b\n");

        let mut reparsed = OptMapList::new();
        {
            let mut options = [Opt::map_list("items.", &mut reparsed)];
            let tokens: Vec<&str> = rendered.lines().collect();
            parse_options("render", &mut options, &tokens).unwrap();
        }
        assert_eq!(reparsed, items);
    }
}
