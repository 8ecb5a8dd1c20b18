use academia_cli::commands;
use academia_config::PolicyConfig;
use academia_core::Role;
use academia_rbac::RolePermissionMap;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "academia-cli")]
#[command(about = "Academia CLI - inspect and validate role tables", long_about = None)]
struct Cli {
    /// Role table to use instead of RBAC_ROLE_TABLE or the built-in table
    #[arg(short = 't', long, global = true)]
    table: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List roles and how many permissions each holds
    Roles,
    /// List the permission catalog, or the permissions of one role
    Permissions {
        #[arg(short = 'r', long)]
        role: Option<Role>,
    },
    /// Check whether a role holds a permission
    Check {
        #[arg(short = 'r', long)]
        role: String,

        #[arg(short = 'p', long)]
        permission: String,
    },
    /// Show the named capabilities of a role
    Capabilities {
        #[arg(short = 'r', long)]
        role: Role,
    },
    /// List every authorization gate
    Gates,
    /// Validate a role table file
    Validate {
        #[arg(short = 'f', long)]
        file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    academia_observability::init_basic_console_logging();

    let cli = Cli::parse();

    let table = match &cli.command {
        Commands::Validate { .. } => None,
        _ => {
            let path = cli.table.or(PolicyConfig::from_env().role_table_path);
            Some(RolePermissionMap::load_or_builtin(path.as_deref())?)
        }
    };
    let table = table.unwrap_or_default();

    let output = match cli.command {
        Commands::Roles => commands::roles(&table),
        Commands::Permissions { role } => commands::permissions(&table, role),
        Commands::Check { role, permission } => commands::check(&table, &role, &permission),
        Commands::Capabilities { role } => commands::capabilities(&table, role),
        Commands::Gates => commands::gates(),
        Commands::Validate { file } => match commands::validate(&file) {
            Ok(report) => report,
            Err(e) => {
                eprintln!("❌ {}: {}", file.display(), e);
                std::process::exit(1);
            }
        },
    };
    print!("{output}");
    Ok(())
}
