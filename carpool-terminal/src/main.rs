use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use carpool_terminal::commands::{
    AddCommand, Command, DeleteCommand, EditCommand, EditPassengerDescriptor, FindCommand,
    ListCommand, PoolCommand, UnpoolCommand,
};
use carpool_terminal::config::{DATA_FILE_VAR, Settings};
use carpool_terminal::domain::{
    Address, Driver, Index, Name, Passenger, Phone, Tag, TripDay, TripTime,
};
use carpool_terminal::logic::Logic;
use carpool_terminal::storage::JsonStorage;
use carpool_terminal::store::Filter;
use carpool_terminal::store::predicates::{
    AddressContainsKeywords, NameContainsKeywords, TagContainsKeywords, TripDayIs,
};

#[derive(Parser)]
#[command(name = "carpool-terminal")]
#[command(about = "Organise passengers and drivers into carpools")]
struct Cli {
    /// Path to the JSON data file
    #[arg(long, global = true, env = DATA_FILE_VAR)]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a passenger
    Add {
        #[arg(long, value_parser = Name::parse)]
        name: Name,
        #[arg(long, value_parser = Phone::parse)]
        phone: Phone,
        #[arg(long, value_parser = Address::parse)]
        address: Address,
        /// Day of the week, e.g. "monday"
        #[arg(long, value_parser = TripDay::parse)]
        day: TripDay,
        /// Time as HHMM, e.g. "1930"
        #[arg(long, value_parser = TripTime::parse_hhmm)]
        time: TripTime,
        #[arg(long = "tag", value_parser = Tag::parse)]
        tags: Vec<Tag>,
    },
    /// Edit the passenger at INDEX
    Edit {
        #[arg(value_parser = parse_index)]
        index: Index,
        #[arg(long, value_parser = Name::parse)]
        name: Option<Name>,
        #[arg(long, value_parser = Phone::parse)]
        phone: Option<Phone>,
        #[arg(long, value_parser = Address::parse)]
        address: Option<Address>,
        #[arg(long, value_parser = TripDay::parse)]
        day: Option<TripDay>,
        #[arg(long, value_parser = TripTime::parse_hhmm)]
        time: Option<TripTime>,
        /// Replace all tags
        #[arg(long = "tag", value_parser = Tag::parse)]
        tags: Vec<Tag>,
        /// Remove all tags
        #[arg(long, conflicts_with = "tags")]
        clear_tags: bool,
    },
    /// Delete the passengers at the given indexes
    Delete {
        #[arg(required = true, value_parser = parse_index)]
        indexes: Vec<Index>,
    },
    /// Show passengers matching keywords
    Find {
        #[command(flatten)]
        criteria: FindCriteria,
    },
    /// Show every passenger and pool
    List,
    /// Create a pool from the passengers at the given indexes
    Pool {
        #[arg(long, value_parser = Name::parse)]
        driver_name: Name,
        #[arg(long, value_parser = Phone::parse)]
        driver_phone: Phone,
        #[arg(long, value_parser = TripDay::parse)]
        day: TripDay,
        #[arg(long, value_parser = TripTime::parse_hhmm)]
        time: TripTime,
        #[arg(long = "tag", value_parser = Tag::parse)]
        tags: Vec<Tag>,
        #[arg(value_parser = parse_index)]
        indexes: Vec<Index>,
    },
    /// Remove the pool at INDEX
    Unpool {
        #[arg(value_parser = parse_index)]
        index: Index,
    },
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct FindCriteria {
    /// Whole words of the name
    #[arg(long, num_args = 1..)]
    name: Vec<String>,
    /// Whole words of the address
    #[arg(long, num_args = 1..)]
    address: Vec<String>,
    /// Tags
    #[arg(long, num_args = 1..)]
    tag: Vec<String>,
    /// Trip day
    #[arg(long, value_parser = TripDay::parse)]
    day: Option<TripDay>,
}

impl FindCriteria {
    fn into_filter(self) -> Filter<Passenger> {
        if let Some(day) = self.day {
            Arc::new(TripDayIs(day))
        } else if !self.name.is_empty() {
            Arc::new(NameContainsKeywords::new(self.name))
        } else if !self.address.is_empty() {
            Arc::new(AddressContainsKeywords::new(self.address))
        } else {
            Arc::new(TagContainsKeywords::new(self.tag))
        }
    }
}

fn parse_index(s: &str) -> Result<Index, String> {
    let position: usize = s
        .parse()
        .map_err(|_| format!("'{s}' is not a positive integer"))?;
    Index::from_one_based(position).map_err(|e| e.to_string())
}

impl Commands {
    /// Whether to print the filtered lists after the feedback.
    fn shows_lists(&self) -> bool {
        matches!(self, Commands::List | Commands::Find { .. })
    }

    fn into_command(self) -> Box<dyn Command> {
        match self {
            Commands::Add {
                name,
                phone,
                address,
                day,
                time,
                tags,
            } => {
                let passenger =
                    Passenger::new(name, phone, address, day, time, tags.into_iter().collect());
                Box::new(AddCommand::new(passenger))
            }
            Commands::Edit {
                index,
                name,
                phone,
                address,
                day,
                time,
                tags,
                clear_tags,
            } => {
                let tags = if clear_tags {
                    Some(BTreeSet::new())
                } else if tags.is_empty() {
                    None
                } else {
                    Some(tags.into_iter().collect())
                };
                let descriptor = EditPassengerDescriptor {
                    name,
                    phone,
                    address,
                    trip_day: day,
                    trip_time: time,
                    tags,
                };
                Box::new(EditCommand::new(index, descriptor))
            }
            Commands::Delete { indexes } => Box::new(DeleteCommand::new(indexes)),
            Commands::Find { criteria } => Box::new(FindCommand::new(criteria.into_filter())),
            Commands::List => Box::new(ListCommand),
            Commands::Pool {
                driver_name,
                driver_phone,
                day,
                time,
                tags,
                indexes,
            } => Box::new(PoolCommand::new(
                Driver::new(driver_name, driver_phone),
                indexes.into_iter().collect(),
                day,
                time,
                tags.into_iter().collect(),
            )),
            Commands::Unpool { index } => Box::new(UnpoolCommand::new(index)),
        }
    }
}

/// Initialize tracing, writing to stderr so stdout carries only command output.
fn init_tracing(fallback_filter: &str) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| fallback_filter.to_string()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::from_env();
    if let Some(path) = cli.data_file {
        settings = settings.with_data_file(path);
    }
    init_tracing(&settings.log_filter);

    let storage = JsonStorage::new(&settings.data_file);
    let mut logic = Logic::new(storage)
        .with_context(|| format!("failed to load {}", settings.data_file.display()))?;

    let shows_lists = cli.command.shows_lists();
    let command = cli.command.into_command();
    let result = logic.execute(command.as_ref())?;
    println!("{}", result.feedback());

    if shows_lists {
        let model = logic.model();
        println!();
        println!("Passengers:");
        for (i, passenger) in model.filtered_passengers().iter().enumerate() {
            println!("{}. {}", Index::from_zero_based(i), passenger);
        }
        println!();
        println!("Pools:");
        for (i, pool) in model.filtered_pools().iter().enumerate() {
            println!("{}. {}", Index::from_zero_based(i), pool);
        }
    }

    Ok(())
}
