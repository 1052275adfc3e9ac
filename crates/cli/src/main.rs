use crate::error::CliError;
use clap::Parser;
use commands::Commands;
use model::{
    core::metadata::Metadata,
    filter::FilterExpr,
    schema::{FieldSchema, FieldType},
};
use redis_query::{FilterCompiler, RedisFilterCompiler};
use sse::{EventCollector, parse_async};
use tokio::{fs::File, io::BufReader};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod output;

#[derive(Parser)]
#[command(
    name = "rqf",
    version = "0.1.0",
    about = "Metadata filter to RediSearch query compiler"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    // Logs go to stderr so stdout only carries command output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compile {
            filter,
            schema,
            fields,
        } => {
            let expr = load_filter(&filter).await?;
            let schema = load_schema(schema.as_deref(), fields).await?;
            let query = RedisFilterCompiler::new(schema).compile(expr.as_ref())?;
            println!("{query}");
        }
        Commands::Validate { filter } => {
            let expr = load_filter(&filter).await?;
            match expr {
                Some(expr) => info!(
                    "Filter is valid: {} node(s) deep, keys {:?}",
                    expr.depth(),
                    expr.keys()
                ),
                None => info!("Filter is empty and matches every document"),
            }
            println!("ok");
        }
        Commands::Matches { filter, metadata } => {
            let expr = load_filter(&filter).await?;
            let source = tokio::fs::read_to_string(&metadata).await?;
            let metadata = Metadata::from_json_str(&source)?;
            let matched = expr.is_none_or(|expr| expr.matches(&metadata));
            println!("{matched}");
        }
        Commands::Sse { input } => {
            let reader = BufReader::new(File::open(&input).await?);
            let mut collector = EventCollector::default();
            let end = parse_async(reader, &mut collector).await?;
            debug!(?end, events = collector.events.len(), "Event stream parsed");
            output::print_events(&collector.events)?;
        }
    }

    Ok(())
}

async fn load_filter(path: &str) -> Result<Option<FilterExpr>, CliError> {
    let source = tokio::fs::read_to_string(path).await?;
    Ok(FilterExpr::from_json_str_optional(&source)?)
}

/// Schema file entries first, then `--field` overrides in command line order.
async fn load_schema(
    path: Option<&str>,
    fields: Vec<(String, FieldType)>,
) -> Result<FieldSchema, CliError> {
    let mut schema = match path {
        Some(path) => {
            let source = tokio::fs::read_to_string(path).await?;
            FieldSchema::from_json_str(&source)?
        }
        None => FieldSchema::new(),
    };

    for (name, field_type) in fields {
        if let Some(previous) = schema.insert(name.clone(), field_type) {
            debug!(%name, %previous, %field_type, "Overriding schema field type");
        }
    }

    Ok(schema)
}
