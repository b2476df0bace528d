//! oxide-informix CLI
//!
//! Renders Informix SQL fragments from the command line.

use std::convert::Infallible;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

use oxide_sql_informix::config::{
    ENABLE_CURRENT_DATE_FUNCTION_ENV, USE_SYSDUAL_FOR_CURRENT_DATE_FUNCTION_ENV, is_flag_set,
};
use oxide_sql_informix::{
    ColumnSize, Dialect, InformixDialect, InformixOptions, SqlError, TypeCode, ddl,
};

/// Informix SQL dialect helper.
#[derive(Parser)]
#[command(name = "oxide-informix")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    /// Register the `current_date` function emulation.
    #[arg(long, env = ENABLE_CURRENT_DATE_FUNCTION_ENV, value_parser = parse_flag)]
    enable_current_date_function: bool,

    /// Emulate `current_date` with `sysmaster:sysdual`.
    #[arg(long, env = USE_SYSDUAL_FOR_CURRENT_DATE_FUNCTION_ENV, value_parser = parse_flag)]
    use_sysdual_for_current_date_function: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the column type for a type code.
    ColumnType {
        /// Type name (e.g. VARCHAR) or numeric type code.
        type_code: TypeCode,

        /// Column length.
        #[arg(short, long, default_value_t = ColumnSize::DEFAULT_LENGTH)]
        length: u32,

        /// Numeric precision.
        #[arg(short, long, default_value_t = ColumnSize::DEFAULT_PRECISION)]
        precision: u32,

        /// Numeric scale.
        #[arg(short, long, default_value_t = ColumnSize::DEFAULT_SCALE)]
        scale: u32,
    },

    /// Add a row limit (and offset) to a SELECT statement.
    Paginate {
        /// The SELECT statement.
        sql: String,

        /// Rows to skip.
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        offset: i64,

        /// Rows to return.
        #[arg(short, long, allow_negative_numbers = true)]
        limit: i64,
    },

    /// Extract the violated constraint name from an error.
    ConstraintName {
        /// Vendor error code (e.g. -268).
        #[arg(allow_negative_numbers = true)]
        code: i32,

        /// Vendor error message.
        message: String,
    },

    /// Show sequence statements.
    Sequence {
        /// Statement kind.
        action: SequenceAction,

        /// Sequence name.
        name: String,
    },

    /// Show the DDL for a temporary table.
    TempTable {
        /// Table name.
        name: String,

        /// Column definitions (e.g. "id bigint not null").
        #[arg(required = true)]
        columns: Vec<String>,
    },

    /// Render a call to a registered SQL function.
    Function {
        /// Function name.
        name: String,

        /// Argument expressions.
        args: Vec<String>,
    },
}

// Same rule as `InformixOptions::from_env`: anything but `true` is off.
#[allow(clippy::unnecessary_wraps)]
fn parse_flag(value: &str) -> Result<bool, Infallible> {
    Ok(is_flag_set(value))
}

#[derive(Clone, Copy, ValueEnum)]
enum SequenceAction {
    Create,
    Drop,
    NextVal,
}

fn main() -> anyhow::Result<()> {
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

    let options = InformixOptions {
        enable_current_date_function: cli.enable_current_date_function,
        use_sysdual_for_current_date_function: cli.use_sysdual_for_current_date_function,
    };
    let dialect = InformixDialect::with_options(options);

    match cli.command {
        Commands::ColumnType {
            type_code,
            length,
            precision,
            scale,
        } => {
            let size = ColumnSize {
                length,
                precision,
                scale,
            };
            debug!(%type_code, code = type_code.code(), "Resolving column type");
            println!("{}", dialect.column_type(type_code, size)?);
        }

        Commands::Paginate { sql, offset, limit } => {
            println!("{}", dialect.limit_string(&sql, offset, limit)?);
        }

        Commands::ConstraintName { code, message } => {
            let error = SqlError::new(code, message);
            match dialect
                .violated_constraint_name_extractor()
                .extract_constraint_name(&error)
            {
                Some(name) => println!("{name}"),
                None => anyhow::bail!("no constraint name found for error code {code}"),
            }
        }

        Commands::Sequence { action, name } => {
            let sql = match action {
                SequenceAction::Create => dialect.create_sequence_string(&name)?,
                SequenceAction::Drop => dialect.drop_sequence_string(&name)?,
                SequenceAction::NextVal => dialect.sequence_next_val_string(&name)?,
            };
            println!("{sql}");
        }

        Commands::TempTable { name, columns } => {
            let columns: Vec<&str> = columns.iter().map(String::as_str).collect();
            println!("{}", ddl::create_temporary_table(&dialect, &name, &columns));
        }

        Commands::Function { name, args } => {
            let args: Vec<&str> = args.iter().map(String::as_str).collect();
            println!("{}", dialect.render_function(&name, &args)?);
        }
    }

    Ok(())
}
