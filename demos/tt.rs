use clap::{ArgGroup, Parser, ValueEnum};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use tt_rs::command::{execute, log_entry, Action};
use tt_rs::store::Store;
use tt_rs::table::TruthTable;

/// Truth table manipulation.
#[derive(Parser, Debug)]
#[command(author, version, about)]
#[command(group(
    ArgGroup::new("action")
        .required(true)
        .args(["load", "random", "hwb", "maj", "prime", "extend", "shrink", "swap"]),
))]
struct Cli {
    /// Load a truth table into the store (default is binary format, use 0x prefix for
    /// hexadecimal format, 0d<bits>:<value> for decimal).
    #[arg(short, long)]
    load: Option<String>,

    /// Create random truth table for number of variables.
    #[arg(short, long)]
    random: Option<usize>,

    /// Create hwb function for number of bits.
    #[arg(long)]
    hwb: Option<usize>,

    /// Create maj function for number of odd bits.
    #[arg(long)]
    maj: Option<usize>,

    /// Create prime function that is true whenever the input assignment is prime
    /// (for up to 10 bits).
    #[arg(long)]
    prime: Option<usize>,

    /// Extend to bits.
    #[arg(short, long)]
    extend: Option<usize>,

    /// Shrink to bits.
    #[arg(long)]
    shrink: Option<usize>,

    /// Swap two variables (separated with comma, e.g., 2,3).
    #[arg(short, long)]
    swap: Option<String>,

    /// Truth table loaded into the store before the action.
    #[arg(long, value_name = "TT")]
    from: Option<String>,

    /// Seed for the random generator.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Also print the result in hexadecimal.
    #[arg(long)]
    hex: bool,

    /// Log level.
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

#[derive(ValueEnum, Copy, Clone, Debug)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for simplelog::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => simplelog::LevelFilter::Off,
            LogLevel::Error => simplelog::LevelFilter::Error,
            LogLevel::Warn => simplelog::LevelFilter::Warn,
            LogLevel::Info => simplelog::LevelFilter::Info,
            LogLevel::Debug => simplelog::LevelFilter::Debug,
            LogLevel::Trace => simplelog::LevelFilter::Trace,
        }
    }
}

impl Cli {
    fn action(&self) -> color_eyre::Result<Action> {
        let action = if let Some(text) = &self.load {
            Action::Load(text.clone())
        } else if let Some(n) = self.random {
            Action::Random(n)
        } else if let Some(n) = self.hwb {
            Action::Hwb(n)
        } else if let Some(n) = self.maj {
            Action::Maj(n)
        } else if let Some(n) = self.prime {
            Action::Prime(n)
        } else if let Some(n) = self.extend {
            Action::Extend(n)
        } else if let Some(n) = self.shrink {
            Action::Shrink(n)
        } else if let Some(vars) = &self.swap {
            Action::parse_swap(vars)?
        } else {
            color_eyre::eyre::bail!("no action given");
        };
        Ok(action)
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        args.log_level.into(),
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let mut store: Store<TruthTable> = Store::new();
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    if let Some(text) = &args.from {
        execute(&mut store, &Action::Load(text.clone()), &mut rng)?;
    }

    let action = args.action()?;
    execute(&mut store, &action, &mut rng)?;

    match log_entry(&store) {
        Some((key, value)) => println!("{} = {}", key, value),
        None => println!("no truth table"),
    }
    if args.hex {
        if let Some(table) = store.current() {
            println!("hex = 0x{}", table.to_hex_string());
        }
    }
    println!("store size = {}", store.len());

    Ok(())
}
