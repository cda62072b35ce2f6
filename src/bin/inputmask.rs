//! CLI tool for input formatting.
//!
//! # Usage
//!
//! ```bash
//! # Classify a card number
//! inputmask classify 371446
//!
//! # Format a value for a field kind
//! inputmask format 9876543210 --kind phone-dot
//!
//! # Reformat a single edit (value, caret, previous value)
//! inputmask edit 9876 --cursor 3 --previous 987-6 --kind phone
//!
//! # Date placeholder overlay
//! inputmask date-mask 120 --format mmyy
//!
//! # Replay keystrokes ("<" is backspace, ">" is delete, "[" / "]" move the caret)
//! inputmask type "4242424242<<42" --kind card
//! ```
//!
//! Set `RUST_LOG=input_mask=trace` (or pass `-v`) to see each edit being
//! formatted.

use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use input_mask::{
    build_date_mask, classify, format, format_edit, DateFormat, Edit, FieldConfig, FieldKind,
    Formatted,
};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "inputmask")]
#[command(author, version, about = "Format card, phone and date input like a masked text field")]
struct Cli {
    /// Log each formatting step (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct FieldArgs {
    /// Field kind: card, phone, phone-dot, date-mmyy, date-mmddyy, date-mmddyyyy
    #[arg(short, long)]
    kind: Option<FieldKind>,

    /// JSON field configuration file
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,

    /// Mask all but the last four digits
    #[arg(long)]
    hidden: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect the card network from a (partial) number
    Classify {
        /// Card number or prefix
        card_number: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Format a complete value
    Format {
        /// Value to format (existing separators are ignored)
        value: String,

        #[command(flatten)]
        field: FieldArgs,
    },

    /// Reformat one edit reported by a text field
    Edit {
        /// Text in the field after the edit
        value: String,

        /// Caret position after the edit, in characters
        #[arg(long)]
        cursor: usize,

        /// Selection end, if a range is selected
        #[arg(long)]
        selection_end: Option<usize>,

        /// Formatted text before the edit
        #[arg(short, long, default_value = "")]
        previous: String,

        #[command(flatten)]
        field: FieldArgs,
    },

    /// Show the placeholder overlay for a date field
    DateMask {
        /// Digits typed so far
        digits: String,

        /// Date format: mmyy, mmddyy, mmddyyyy
        #[arg(short, long, default_value = "mmyy")]
        format: DateFormat,
    },

    /// Replay a keystroke script against an empty field
    Type {
        /// Keys to type; "<" backspace, ">" delete, "[" caret left, "]" caret right
        keys: String,

        /// Print the field after every key
        #[arg(long)]
        trace: bool,

        #[command(flatten)]
        field: FieldArgs,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Classify {
            card_number,
            output,
        } => {
            cmd_classify(&card_number, output);
            Ok(())
        }
        Commands::Format { value, field } => cmd_format(&value, &field),
        Commands::Edit {
            value,
            cursor,
            selection_end,
            previous,
            field,
        } => cmd_edit(&value, cursor, selection_end.unwrap_or(cursor), &previous, &field),
        Commands::DateMask { digits, format } => {
            cmd_date_mask(&digits, format);
            Ok(())
        }
        Commands::Type { keys, trace, field } => cmd_type(&keys, trace, &field),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "input_mask=debug",
        _ => "input_mask=trace",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Resolves the field config: file first, then flags on top.
fn resolve_config(args: &FieldArgs) -> Result<FieldConfig, input_mask::FormatError> {
    let mut config = match &args.config {
        Some(path) => {
            info!(path = %path.display(), "loading field config");
            FieldConfig::from_json_file(path)?
        }
        None => FieldConfig::default(),
    };
    if let Some(kind) = args.kind {
        config.kind = kind;
    }
    if args.hidden {
        config.hidden = true;
    }
    debug!(kind = %config.kind, hidden = config.hidden, "resolved field config");
    Ok(config)
}

fn print_formatted(config: &FieldConfig, formatted: &Formatted, output: OutputFormat) {
    let display = config.display(formatted);
    match output {
        OutputFormat::Text => {
            println!("Value: {}", display);
            println!("Cursor: {}..{}", formatted.cursor_start, formatted.cursor_end);
            println!("Caret: {}", with_caret(&display, formatted.cursor_start));
            if let Some(network) = formatted.network {
                println!("Network: {}", network.name());
            }
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "value": display,
                "cursor_start": formatted.cursor_start,
                "cursor_end": formatted.cursor_end,
                "network": formatted.network.map(|n| n.slug()),
            });
            println!("{}", json);
        }
    }
}

fn with_caret(value: &str, caret: usize) -> String {
    let mut chars: Vec<char> = value.chars().collect();
    chars.insert(caret.min(chars.len()), '|');
    chars.into_iter().collect()
}

fn cmd_classify(card_number: &str, output: OutputFormat) {
    let network = classify(card_number);
    let digits = format::strip_formatting(card_number);
    match output {
        OutputFormat::Text => {
            println!("Network: {}", network.name());
            println!("Grouping: {:?}", network.groups());
            println!("Formatted: {}", format::format_card_for_network(&digits, network));
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "network": network.slug(),
                "name": network.name(),
                "groups": network.groups(),
                "max_length": network.max_length(),
            });
            println!("{}", json);
        }
    }
}

fn cmd_format(value: &str, args: &FieldArgs) -> Result<(), input_mask::FormatError> {
    let config = resolve_config(args)?;
    let formatted = Formatted::from_value(config.kind, value);
    print_formatted(&config, &formatted, args.output);
    Ok(())
}

fn cmd_edit(
    value: &str,
    cursor: usize,
    selection_end: usize,
    previous: &str,
    args: &FieldArgs,
) -> Result<(), input_mask::FormatError> {
    let config = resolve_config(args)?;
    let edit = Edit::with_selection(value, cursor, selection_end, previous);
    let formatted = format_edit(config.kind, &edit);
    print_formatted(&config, &formatted, args.output);
    Ok(())
}

fn cmd_date_mask(digits: &str, format: DateFormat) {
    let mask = build_date_mask(digits, format);
    println!("Filled: {}", mask.filled());
    println!("Placeholder: {}", mask.placeholder());
    println!("Display: {}", mask);
}

fn cmd_type(keys: &str, trace: bool, args: &FieldArgs) -> Result<(), input_mask::FormatError> {
    let config = resolve_config(args)?;
    let mut session = config.session();

    for key in keys.chars() {
        match key {
            '<' => {
                session.backspace();
            }
            '>' => {
                session.delete_forward();
            }
            '[' => session.set_cursor(session.cursor().saturating_sub(1)),
            ']' => session.set_cursor(session.cursor() + 1),
            c => {
                session.insert(&c.to_string());
            }
        }
        if trace {
            let display = config.display(session.formatted());
            println!("{:?} -> {}", key, with_caret(&display, session.cursor()));
        }
    }

    print_formatted(&config, session.formatted(), args.output);
    Ok(())
}
