use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "fontscale",
    about = "fontscale — non-linear font size scaling",
    version,
    propagate_version = true,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a single font size at a given font scale
    Convert {
        /// Font scale factor (e.g. 1.3)
        #[arg(short, long)]
        scale: f32,
        /// Size to convert (sp, or dp with --reverse)
        #[arg(long)]
        size: f32,
        /// Convert dp back to sp
        #[arg(short, long)]
        reverse: bool,
        /// Curve table file (default: built-in tables)
        #[arg(short, long)]
        table: Option<String>,
    },
    /// Print the curve in effect for a font scale
    Curve {
        #[arg(short, long)]
        scale: f32,
        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
        #[arg(short, long)]
        table: Option<String>,
    },
    /// Manage curve table files
    Table {
        #[command(subcommand)]
        action: TableAction,
    },
}

#[derive(Subcommand)]
enum TableAction {
    /// Write the built-in tables to a TOML file
    Init {
        #[arg(short, long, default_value = "fontscale.toml")]
        path: String,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Validate a table file
    Check {
        #[arg(short, long, default_value = "fontscale.toml")]
        path: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("fontscale=info".parse()?)
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert { scale, size, reverse, table } => {
            commands::convert::convert(scale, size, reverse, table.as_deref())
        }
        Commands::Curve { scale, format, table } => {
            commands::convert::curve(scale, &format, table.as_deref())
        }
        Commands::Table { action } => match action {
            TableAction::Init { path, force } => commands::table::init(&path, force),
            TableAction::Check { path } => commands::table::check(&path),
        },
    }
}
