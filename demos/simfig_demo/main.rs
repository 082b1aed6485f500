//! # simfig demo application
//!
//! A sample frontend that showcases [simfig](https://docs.rs/simfig): it
//! parses profile tokens into an option database, then binds the recorded
//! values into a typed profile struct. This is **not** a real simulator —
//! it exists purely to demonstrate and manually verify simfig's features.
//!
//! ## Running
//!
//! ```sh
//! cargo run --example simfig_demo
//! cargo run --example simfig_demo -- iterations=5000 threads=8
//! ```
//!
//! ## Features demonstrated
//!
//! | Feature              | How to exercise it                                              |
//! |----------------------|-----------------------------------------------------------------|
//! | Template variables   | Default run (`$(race)=orc`, `name=$(race)_warrior`)             |
//! | Typed binders        | `cargo run --example simfig_demo -- iterations=2500 threads=4`  |
//! | Range validation     | `cargo run --example simfig_demo -- threads=99`                 |
//! | Bool validation      | `cargo run --example simfig_demo -- optimal_raid=2`             |
//! | Deprecated option    | `cargo run --example simfig_demo -- aura_delay=0.5`             |
//! | Map / map-of-lists   | `cargo run --example simfig_demo -- items.trinket=a items.trinket+=b` |
//! | Profile inclusion    | `cargo run --example simfig_demo -- input=my_profile.simc`      |
//! | Bare file token      | `cargo run --example simfig_demo -- my_profile.simc`            |
//! | Standard input       | `echo "iterations=100" \| cargo run --example simfig_demo -- -` |
//! | JSON triple dump     | `cargo run --example simfig_demo -- --json`                     |
//! | Render bound state   | `cargo run --example simfig_demo -- --render`                   |

use std::time::Duration;

use clap::Parser;

use simfig::{Opt, OptMap, OptMapList, OptionDb, parse_option};

// ---------------------------------------------------------------------------
// CLI definitions
// ---------------------------------------------------------------------------

/// simfig demo — parse profile tokens and bind them into typed fields.
#[derive(Parser, Debug)]
#[command(name = "simfig-demo")]
struct Cli {
    /// Dump the recorded (section, name, value) triples as JSON and exit.
    #[arg(long)]
    json: bool,

    /// Render the bound option set back out as profile text.
    #[arg(long)]
    render: bool,

    /// Profile tokens: `name=value`, `$(var)=value`, `input=file`, a bare
    /// file name, or `-` for stdin. A built-in sample set runs when empty.
    tokens: Vec<String>,
}

// ---------------------------------------------------------------------------
// The bound profile
// ---------------------------------------------------------------------------

#[derive(Default)]
struct Profile {
    name: String,
    region: String,
    iterations: i64,
    threads: i64,
    target_error: f64,
    max_time: Duration,
    optimal_raid: bool,
    actions: String,
    targets: Vec<String>,
    gear: OptMap,
    items: OptMapList,
}

/// The demo's option set. One binder per profile field, plus a deprecated
/// name to show the refusal path.
fn binders(profile: &mut Profile) -> Vec<Opt<'_>> {
    vec![
        Opt::string("name", &mut profile.name),
        Opt::string("region", &mut profile.region),
        Opt::int("iterations", &mut profile.iterations),
        Opt::int_range("threads", &mut profile.threads, 1, 64),
        Opt::float_range("target_error", &mut profile.target_error, 0.0, 1.0),
        Opt::duration("max_time", &mut profile.max_time),
        Opt::bool("optimal_raid", &mut profile.optimal_raid),
        Opt::append("actions", &mut profile.actions),
        Opt::list("target", &mut profile.targets),
        Opt::map("gear.", &mut profile.gear),
        Opt::map_list("items.", &mut profile.items),
        Opt::deprecated("aura_delay", "gcd_lag"),
    ]
}

fn sample_tokens() -> Vec<String> {
    [
        "$(race)=orc",
        "name=$(race)_warrior",
        "$(slot)=head",
        "gear.$(slot)=crown_of_fire",
        "region=us",
        "iterations=2500",
        "threads=4",
        "target_error=0.05",
        "max_time=300",
        "optimal_raid=1",
        "actions=/charge",
        "actions=/mortal_strike",
        "target=Fluffy_Pillow",
        "target=Patchwerk",
        "items.trinket=ring_a",
        "items.trinket+=ring_b",
        "apm=unclaimed_by_any_binder",
    ]
    .into_iter()
    .map(str::to_owned)
    .collect()
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

fn print_profile(profile: &Profile, unclaimed: &[String]) {
    println!("name={}", profile.name);
    println!("region={}", profile.region);
    println!("iterations={}", profile.iterations);
    println!("threads={}", profile.threads);
    println!("target_error={}", profile.target_error);
    println!("max_time={}", profile.max_time.as_secs_f64());
    println!("optimal_raid={}", u8::from(profile.optimal_raid));
    println!("actions={}", profile.actions);
    for target in &profile.targets {
        println!("target={target}");
    }
    for (key, value) in &profile.gear {
        println!("gear.{key}={value}");
    }
    for (key, values) in &profile.items {
        for (i, value) in values.iter().enumerate() {
            let sep = if i == 0 { "=" } else { "+=" };
            println!("items.{key}{sep}{value}");
        }
    }
    if !unclaimed.is_empty() {
        println!();
        println!("unclaimed (left for other subsystems): {}", unclaimed.join(", "));
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() {
    let cli = Cli::parse();
    let tokens = if cli.tokens.is_empty() {
        eprintln!("(no tokens given — using the built-in sample set)");
        sample_tokens()
    } else {
        cli.tokens.clone()
    };

    let mut db = OptionDb::new();
    db.parse_args(&tokens).unwrap_or_else(|e| {
        eprintln!("Parse error: {e}");
        std::process::exit(1);
    });

    if cli.json {
        let dump = serde_json::to_string_pretty(db.options()).unwrap_or_else(|e| {
            eprintln!("Serialization error: {e}");
            std::process::exit(1);
        });
        println!("{dump}");
        return;
    }

    let mut profile = Profile::default();
    let mut unclaimed = Vec::new();
    {
        let mut options = binders(&mut profile);
        for recorded in db.options() {
            match parse_option(&mut options, &recorded.name, &recorded.value) {
                Ok(true) => {}
                Ok(false) => unclaimed.push(recorded.name.clone()),
                Err(e) => {
                    eprintln!("Bind error: {e}");
                    std::process::exit(1);
                }
            }
        }

        if cli.render {
            for option in &options {
                print!("{option}");
            }
            return;
        }
    }

    print_profile(&profile, &unclaimed);
}
