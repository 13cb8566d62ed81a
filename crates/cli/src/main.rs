use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use zone53_application::use_cases::{CreateRecordOptions, ImportOptions};
use zone53_domain::{CliOverrides, Config, RecordType};
use zone53_infrastructure::directory::InMemoryZoneDirectory;

mod bootstrap;
mod commands;

#[derive(Parser)]
#[command(name = "zone53")]
#[command(version)]
#[command(about = "zone53 - manage hosted DNS zones from BIND-style zone files")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// State snapshot path (overrides the configured one)
    #[arg(long, value_name = "FILE", global = true)]
    state: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List hosted zones
    List,
    /// Create a hosted zone
    Mkzone {
        /// Zone name (a trailing dot is optional)
        name: String,
    },
    /// Import a zone file into a hosted zone
    Import {
        /// Zone name or id
        zone: String,
        /// Zone file to read (stdin if omitted)
        #[arg(short, long, value_name = "FILE")]
        file: Option<PathBuf>,
        /// Delete record sets absent from the file
        #[arg(long)]
        replace: bool,
        /// Allow changes to the zone's own NS/SOA records
        #[arg(long)]
        edit_auth: bool,
        /// Wait for the change to propagate
        #[arg(long)]
        wait: bool,
    },
    /// Export a hosted zone as zone text
    Export {
        /// Zone name or id
        zone: String,
        /// Emit fully-qualified names instead of origin-relative ones
        #[arg(short, long)]
        full: bool,
        /// Write to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Create a single record set from one zone file line
    Rrcreate {
        /// Zone name or id
        zone: String,
        /// The record in zone file syntax, e.g. "www 300 IN A 192.0.2.1"
        #[arg(required = true, trailing_var_arg = true)]
        record: Vec<String>,
        /// Set identifier, required with a routing option
        #[arg(short, long)]
        identifier: Option<String>,
        /// Failover routing: PRIMARY or SECONDARY
        #[arg(long, value_name = "STATE")]
        failover: Option<String>,
        /// Health check id to associate
        #[arg(long, value_name = "ID")]
        health_check_id: Option<String>,
        /// Weighted routing weight
        #[arg(short, long)]
        weight: Option<i64>,
        /// Latency routing region
        #[arg(long)]
        region: Option<String>,
        /// Geolocation routing country code
        #[arg(long, value_name = "CC")]
        country_code: Option<String>,
        /// Geolocation routing continent code
        #[arg(long, value_name = "CC")]
        continent_code: Option<String>,
        /// Multivalue answer routing
        #[arg(long)]
        multi_value: bool,
        /// Replace an existing record set with the same name, type and identifier
        #[arg(long)]
        replace: bool,
        /// Wait for the change to propagate
        #[arg(long)]
        wait: bool,
    },
    /// Delete the record sets matching a name and type
    Rrdelete {
        /// Zone name or id
        zone: String,
        /// Record name, relative to the zone unless dot-terminated
        name: String,
        /// Record type, e.g. A, CNAME, MX
        rtype: RecordType,
        /// Only delete the set with this identifier
        #[arg(short, long)]
        identifier: Option<String>,
        /// Wait for the change to propagate
        #[arg(long)]
        wait: bool,
    },
    /// Delete every record set in a zone except NS and SOA
    Rrpurge {
        /// Zone name or id
        zone: String,
        /// Required; rrpurge refuses to run without it
        #[arg(long)]
        confirm: bool,
        /// Wait for the change to propagate
        #[arg(long)]
        wait: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        state_path: cli.state.clone(),
        log_level: cli.log_level.clone(),
    };
    let config = Config::load(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    let state_path = PathBuf::from(&config.state.path);
    let directory = Arc::new(InMemoryZoneDirectory::load(&state_path)?);

    match cli.command {
        Command::List => commands::list(directory.clone()).await?,
        Command::Mkzone { ref name } => commands::mkzone(directory.clone(), name).await?,
        Command::Import {
            ref zone,
            ref file,
            replace,
            edit_auth,
            wait,
        } => {
            let opts = ImportOptions {
                replace,
                edit_auth,
                wait,
            };
            commands::import(directory.clone(), zone, file.as_deref(), &opts).await?
        }
        Command::Export {
            ref zone,
            full,
            ref output,
        } => commands::export(directory.clone(), zone, full, output.as_deref()).await?,
        Command::Rrcreate {
            ref zone,
            ref record,
            ref identifier,
            ref failover,
            ref health_check_id,
            weight,
            ref region,
            ref country_code,
            ref continent_code,
            multi_value,
            replace,
            wait,
        } => {
            let opts = CreateRecordOptions {
                identifier: identifier.clone(),
                failover: failover.clone(),
                health_check_id: health_check_id.clone(),
                weight,
                region: region.clone(),
                country_code: country_code.clone(),
                continent_code: continent_code.clone(),
                multi_value,
                replace,
                wait,
            };
            commands::rrcreate(directory.clone(), zone, record, &opts).await?
        }
        Command::Rrdelete {
            ref zone,
            ref name,
            rtype,
            ref identifier,
            wait,
        } => {
            commands::rrdelete(
                directory.clone(),
                zone,
                name,
                rtype,
                identifier.as_deref(),
                wait,
            )
            .await?
        }
        Command::Rrpurge {
            ref zone,
            confirm,
            wait,
        } => commands::rrpurge(directory.clone(), zone, confirm, wait).await?,
    }

    directory.save(&state_path)?;
    Ok(())
}
