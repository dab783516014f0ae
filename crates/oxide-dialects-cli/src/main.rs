//! oxide-dialects CLI
//!
//! Reads a SQLite schema and renders it for any registered dialect.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use sqlx::sqlite::SqlitePoolOptions;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use oxide_dialects_core::codegen::{emit_all, write_units, EmitterConfig};
use oxide_dialects_core::{dialect, paginate, DdlOptions, DdlSynthesizer};
use oxide_dialects_sqlite::SqliteExecutor;

/// One schema model, many SQL dialects.
#[derive(Debug, Parser)]
#[command(name = "oxide-dialects")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// SQLite database to read the schema from.
    #[arg(short, long, env = "DATABASE_URL", default_value = "sqlite:db.sqlite3")]
    database: String,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List registered dialects.
    Dialects,

    /// Print DDL for the database schema in another dialect.
    Ddl {
        /// Target dialect (`h2`, `MySQL8Dialect`, `postgresql`, ...).
        #[arg(short = 'D', long, default_value = "sqlite")]
        dialect: String,

        /// Print DROP statements instead of CREATE.
        #[arg(long)]
        drop: bool,

        /// Quote every identifier.
        #[arg(short, long)]
        quote: bool,

        /// Log each statement as it is produced.
        #[arg(long)]
        show_sql: bool,
    },

    /// Rewrite a query to return one page.
    Paginate {
        /// Target dialect.
        #[arg(short = 'D', long)]
        dialect: String,

        /// Page number, starting at 1.
        #[arg(short, long, default_value_t = 1)]
        page: i64,

        /// Rows per page.
        #[arg(short, long, default_value_t = 20)]
        size: i64,

        /// The base SELECT.
        query: String,
    },

    /// Print the database catalog as JSON.
    Catalog,

    /// Generate Rust row types for the database schema.
    Emit {
        /// Emitter options as a JSON file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output directory (print to stdout if not specified).
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Dialects => {
            for d in dialect::all() {
                println!("{:<14} {:<22} {}", d.id, d.name, d.aliases.join(", "));
            }
        }

        Commands::Paginate {
            dialect,
            page,
            size,
            query,
        } => {
            let target = dialect::resolve(&dialect)?;
            println!("{}", paginate(target, page, size, &query)?);
        }

        Commands::Ddl {
            dialect,
            drop,
            quote,
            show_sql,
        } => {
            let target = dialect::resolve(&dialect)?;
            let tables = connect(&cli.database).await?.introspect().await?;
            info!(tables = tables.len(), dialect = target.id, "Rendering schema");

            let options = DdlOptions::new().quote_identifiers(quote).show_sql(show_sql);
            let synth = DdlSynthesizer::with_options(target, options);
            let statements = if drop {
                synth.drop_ddl_all(&tables)
            } else {
                synth.create_ddl_all(&tables)?
            };
            for sql in statements {
                println!("{sql};");
            }
        }

        Commands::Catalog => {
            let catalog = connect(&cli.database).await?.catalog().await?;
            println!("{}", serde_json::to_string_pretty(&catalog)?);
        }

        Commands::Emit { config, out } => {
            let config = match config {
                Some(path) => {
                    let json = fs::read_to_string(&path)
                        .with_context(|| format!("reading {}", path.display()))?;
                    EmitterConfig::from_json(&json)?
                }
                None => EmitterConfig::default(),
            };
            let tables = connect(&cli.database).await?.introspect().await?;
            let units = emit_all(&tables, &config);
            match out {
                Some(dir) => {
                    let written = write_units(&dir, &units)?;
                    info!(files = written.len(), dir = %dir.display(), "Source units written");
                }
                None => {
                    for unit in &units {
                        println!("// {}\n{}", unit.file_name, unit.content);
                    }
                }
            }
        }
    }

    Ok(())
}

async fn connect(database: &str) -> anyhow::Result<SqliteExecutor> {
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(database)
        .await
        .with_context(|| format!("connecting to {database}"))?;
    Ok(SqliteExecutor::new(pool))
}
