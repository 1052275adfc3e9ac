use clap::Subcommand;
use model::schema::FieldType;

#[derive(Subcommand)]
pub enum Commands {
    /// Compile a JSON filter into a RediSearch query string
    Compile {
        #[arg(long, help = "Filter file path (JSON, `null` for no filter)")]
        filter: String,

        #[arg(long, help = "Schema file path mapping field names to field types")]
        schema: Option<String>,

        #[arg(
            long = "field",
            value_name = "NAME=TYPE",
            value_parser = parse_field,
            help = "Register a field type, overriding the schema file"
        )]
        fields: Vec<(String, FieldType)>,
    },
    /// Check a JSON filter for empty keys and empty membership lists
    Validate {
        #[arg(long, help = "Filter file path")]
        filter: String,
    },
    /// Evaluate a JSON filter against a JSON metadata object
    Matches {
        #[arg(long, help = "Filter file path")]
        filter: String,

        #[arg(long, help = "Metadata file path")]
        metadata: String,
    },
    /// Parse a captured server-sent-event stream and print one JSON event per line
    Sse {
        #[arg(long, help = "Captured event stream file path")]
        input: String,
    },
}

fn parse_field(arg: &str) -> Result<(String, FieldType), String> {
    let (name, field_type) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=TYPE, got '{arg}'"))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(format!("empty field name in '{arg}'"));
    }

    let field_type = field_type
        .trim()
        .parse::<FieldType>()
        .map_err(|err| err.to_string())?;

    Ok((name.to_string(), field_type))
}
