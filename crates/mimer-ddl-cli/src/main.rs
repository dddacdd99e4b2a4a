//! mimer-ddl CLI - Compile table schemas into Mimer SQL DDL.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Mutex;

use async_trait::async_trait;
use clap::{Parser, Subcommand};
use mimer_ddl::{
    DdlCompiler, DdlError, DialectConfig, MimerDialect, SchemaDeployer, SchemaFile, SchemaSource,
    SqlExecutor, Table,
};
use tracing::{info, warn, Level};
use tracing_subscriber::fmt::format::FmtSpan;

#[derive(Parser)]
#[command(name = "mimer-ddl")]
#[command(about = "Compile table schemas into Mimer SQL DDL")]
#[command(version)]
struct Cli {
    /// Path to YAML dialect configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output JSON result to stdout
    #[arg(long, global = true)]
    output_json: bool,

    /// Log format: text or json
    #[arg(long, default_value = "text", global = true)]
    log_format: String,

    /// Log verbosity: debug, info, warn, error
    #[arg(long, default_value = "info", global = true)]
    verbosity: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the DDL script for a schema file
    Compile {
        /// Path to YAML schema file
        schema: PathBuf,

        /// Only compile the named table
        #[arg(long)]
        table: Option<String>,

        /// Print DROP statements instead of CREATE statements
        #[arg(long)]
        drop: bool,
    },

    /// Compile every table and report errors without printing DDL
    Check {
        /// Path to YAML schema file
        schema: PathBuf,
    },
}

/// Executor that collects statements into a script instead of running them.
#[derive(Default)]
struct ScriptExecutor {
    statements: Mutex<Vec<String>>,
}

impl ScriptExecutor {
    fn into_statements(self) -> Vec<String> {
        self.statements
            .into_inner()
            .unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl SqlExecutor for ScriptExecutor {
    async fn execute(&self, sql: &str) -> Result<(), DdlError> {
        self.statements
            .lock()
            .map_err(|_| DdlError::execution(sql, "script buffer poisoned"))?
            .push(sql.to_string());
        Ok(())
    }

    fn db_type(&self) -> &str {
        "script"
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.format_detailed());
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run() -> Result<(), DdlError> {
    let cli = Cli::parse();

    setup_logging(&cli.verbosity, &cli.log_format).map_err(DdlError::Config)?;

    let config = match &cli.config {
        Some(path) => {
            let config = DialectConfig::load(path)?;
            info!("Loaded dialect configuration from {:?}", path);
            config
        }
        None => DialectConfig::default(),
    };
    let compiler = DdlCompiler::new(MimerDialect::with_config(config)?);

    match cli.command {
        Commands::Compile {
            schema,
            table,
            drop,
        } => {
            let schema = SchemaFile::load(&schema)?;
            let tables = select_tables(&schema, table.as_deref())?;

            let deployer = SchemaDeployer::with_compiler(ScriptExecutor::default(), compiler);
            if drop {
                deployer.drop_all(&tables).await?;
            } else {
                deployer.create_all(&tables).await?;
            }

            let statements = deployer.into_executor().into_statements();
            if cli.output_json {
                println!("{}", serde_json::to_string_pretty(&statements)?);
            } else {
                for sql in &statements {
                    println!("{};", sql);
                }
            }
        }

        Commands::Check { schema } => {
            let schema = SchemaFile::load(&schema)?;
            let tables = schema.tables()?;

            let mut first_error = None;
            let mut failed = Vec::new();
            for table in &tables {
                if let Err(e) = compiler.compile(table) {
                    warn!("Table {} failed to compile: {}", table.name, e);
                    if !cli.output_json {
                        println!("  ✗ {}: {}", table.name, e);
                    }
                    failed.push(serde_json::json!({
                        "table": table.name,
                        "error": e.to_string(),
                    }));
                    first_error.get_or_insert(e);
                } else if !cli.output_json {
                    println!("  ✓ {}", table.name);
                }
            }

            if cli.output_json {
                let report = serde_json::json!({
                    "tables_total": tables.len(),
                    "tables_failed": failed.len(),
                    "failures": failed,
                });
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!(
                    "\nChecked {} tables, {} failed",
                    tables.len(),
                    failed.len()
                );
            }

            if let Some(e) = first_error {
                return Err(e);
            }
        }
    }

    Ok(())
}

/// Pick all tables, or only the one named by `--table`.
fn select_tables(schema: &SchemaFile, name: Option<&str>) -> Result<Vec<Table>, DdlError> {
    match name {
        None => schema.tables(),
        Some(name) => schema
            .table(name)?
            .map(|t| vec![t])
            .ok_or_else(|| DdlError::Config(format!("Table {} not found in schema", name))),
    }
}

fn setup_logging(verbosity: &str, format: &str) -> Result<(), String> {
    let level = match verbosity.to_lowercase().as_str() {
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        other => return Err(format!("Unknown verbosity: {}", other)),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_writer(std::io::stderr);

    match format {
        "json" => subscriber.json().init(),
        "text" => subscriber.init(),
        other => return Err(format!("Unknown log format: {}", other)),
    }

    Ok(())
}
