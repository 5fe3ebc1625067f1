use clap::{Parser, Subcommand, ValueEnum};
use client::{ApiConfig, MappingApi, RestClient};
use harness::suite::{run_groups, Group};
use std::time::Duration;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "harness")]
#[command(about = "A CLI tool for smoke-testing the Mapping Module API")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the smoke-test groups against a live API
    Run {
        /// Base URL of the API (overrides MAPPING_API_BASE_URL)
        #[arg(long)]
        base_url: Option<String>,
        /// Bearer token (overrides MAPPING_API_TOKEN; never hardcode one)
        #[arg(long)]
        token: Option<String>,
        /// Per-request timeout in seconds
        #[arg(long, default_value = "30")]
        timeout_secs: u64,
        /// Groups to run, in declaration order (defaults to all)
        #[arg(short, long, value_enum)]
        group: Vec<GroupArg>,
    },
    /// Health check
    Health {
        /// Base URL of the API (overrides MAPPING_API_BASE_URL)
        #[arg(long)]
        base_url: Option<String>,
        /// Bearer token (overrides MAPPING_API_TOKEN)
        #[arg(long)]
        token: Option<String>,
        /// Per-request timeout in seconds
        #[arg(long, default_value = "30")]
        timeout_secs: u64,
    },
    /// List the endpoints the harness covers
    Endpoints,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum GroupArg {
    Categories,
    Risks,
    Environments,
    Jobs,
}

impl From<GroupArg> for Group {
    fn from(arg: GroupArg) -> Self {
        match arg {
            GroupArg::Categories => Group::Categories,
            GroupArg::Risks => Group::Risks,
            GroupArg::Environments => Group::Environments,
            GroupArg::Jobs => Group::Jobs,
        }
    }
}

fn build_config(base_url: Option<String>, token: Option<String>, timeout_secs: u64) -> ApiConfig {
    let mut config = ApiConfig::from_env().with_timeout(Duration::from_secs(timeout_secs));
    if let Some(base_url) = base_url {
        config = config.with_base_url(base_url);
    }
    if let Some(token) = token {
        config = config.with_token(token);
    }
    config
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            base_url,
            token,
            timeout_secs,
            group,
        } => {
            let config = build_config(base_url, token, timeout_secs);
            let client = RestClient::new(config)?;

            let groups: Vec<Group> = if group.is_empty() {
                Group::ALL.to_vec()
            } else {
                group.into_iter().map(Group::from).collect()
            };

            println!("STARTING MAPPING MODULE TESTS");
            println!("{}", "=".repeat(60));
            println!("Target: {}", client.config().trimmed_base_url());

            let report = run_groups(&client, &groups).await;
            println!("{}", report.render_summary());

            let summary = report.summary();
            info!(
                "run finished: {} passed, {} failed, {} blocked",
                summary.passed, summary.failed, summary.blocked
            );

            if report.has_failures() {
                std::process::exit(1);
            }
        }
        Commands::Health {
            base_url,
            token,
            timeout_secs,
        } => {
            let config = build_config(base_url, token, timeout_secs);
            let client = RestClient::new(config)?;
            health_check(&client).await?;
        }
        Commands::Endpoints => {
            list_endpoints();
        }
    }

    Ok(())
}

async fn health_check(client: &RestClient) -> Result<(), Box<dyn std::error::Error>> {
    println!("Performing health check...");

    match client.list_risk_categories().await {
        Ok(categories) => {
            println!(
                "✓ Health check passed. API is reachable ({} seeded categories).",
                categories.len()
            );
            info!("health check successful");
        }
        Err(e) => {
            println!("✗ Health check failed: {}", e);
            error!("health check failed: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}

fn list_endpoints() {
    println!("Covered endpoints:");
    for group in Group::ALL {
        println!("  {}:", group.name());
        for endpoint in group_endpoints(group) {
            println!("    - {}", endpoint);
        }
    }
    println!("  Fixture sources:");
    println!("    - GET /companies");
}

fn group_endpoints(group: Group) -> &'static [&'static str] {
    match group {
        Group::Categories => &[
            "GET /mapping/risk-categories",
            "GET /mapping/risk-categories/:id",
            "POST /mapping/risk-categories",
            "PATCH /mapping/risk-categories/:id",
            "DELETE /mapping/risk-categories/:id",
        ],
        Group::Risks => &[
            "GET /mapping/risks",
            "GET /mapping/risks?type=PHYSICAL",
            "GET /mapping/risks/:id",
            "POST /mapping/risks",
            "DELETE /mapping/risks/:id",
        ],
        Group::Environments => &[
            "GET /mapping/environments",
            "GET /mapping/environments?companyId",
            "GET /mapping/environments/:id",
            "POST /mapping/environments",
            "PATCH /mapping/environments/:id",
            "POST /mapping/environments/:id/risks",
            "GET /mapping/environments/:id/risks",
            "DELETE /mapping/environments/:id",
        ],
        Group::Jobs => &[
            "GET /mapping/jobs",
            "POST /mapping/jobs",
            "GET /mapping/jobs/:id",
            "PATCH /mapping/jobs/:id",
            "PATCH /mapping/jobs/:id/notes",
            "GET /mapping/jobs/:id/notes",
            "POST /mapping/jobs/:id/environments",
            "GET /mapping/jobs/:id/environments",
            "POST /mapping/jobs/:id/risks",
            "GET /mapping/jobs/:id/risks",
            "POST /mapping/jobs/:id/exams",
            "GET /mapping/jobs/:id/exams",
            "DELETE /mapping/jobs/:id",
        ],
    }
}
