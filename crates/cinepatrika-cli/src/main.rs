use clap::{ArgAction, Parser, Subcommand};

mod commands;
mod logging;
mod output;

use commands::{config, health, home, migration, movies, reviews, subscribe, translate};

#[derive(Parser)]
#[command(name = "cinepatrika")]
#[command(about = "Cinepatrika - bilingual Hindi/English movie reviews from your terminal")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    /// Backend base URL (overrides config file and CINEPATRIKA_BACKEND_URL)
    #[arg(long, global = true, value_name = "URL")]
    base_url: Option<String>,

    /// Write logs to this file (daily rotation) instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the home screen: featured movies hero plus latest reviews
    #[command(long_about = "Fetch featured movies and latest reviews concurrently and render the home screen. If the API is unreachable, the bundled snapshot is shown instead so the screen is never empty.")]
    Home {
        /// How many latest reviews to fetch
        #[arg(long, default_value_t = 6)]
        limit: u32,
    },
    /// Browse movies
    Movies {
        #[command(subcommand)]
        cmd: MovieCommands,
    },
    /// List latest reviews with client-side search and category filter
    #[command(long_about = "List the latest reviews. --search matches title or author case-insensitively; --category keeps reviews with at least one matching tag ('All' keeps everything). Both filters combine.")]
    Reviews {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value = "All")]
        category: String,
        #[arg(long, default_value_t = 20)]
        limit: u32,
        #[command(subcommand)]
        cmd: Option<ReviewCommands>,
    },
    /// Quick newsletter signup (weekly digest)
    #[command(long_about = "Subscribe an email address to the weekly digest with default preferences. Prompts for the address when --email is not given.")]
    QuickSubscribe {
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        name: Option<String>,
    },
    /// Full subscription with notification preferences
    #[command(long_about = "Create a subscription with full preferences. Email and name are required; WhatsApp notifications additionally require a phone number. Missing fields are prompted interactively.")]
    Subscribe {
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        name: Option<String>,
        /// Phone number (required for WhatsApp notifications)
        #[arg(long)]
        phone: Option<String>,
        /// Enable WhatsApp notifications (needs --phone)
        #[arg(long, action = ArgAction::SetTrue)]
        whatsapp: bool,
        /// Disable email notifications
        #[arg(long, action = ArgAction::SetTrue)]
        no_email_notifications: bool,
    },
    /// Remove a subscription
    Unsubscribe {
        #[arg(long)]
        email: String,
    },
    /// Translate text via the free MyMemory endpoint
    #[command(long_about = "Translate text into one of the supported regional languages (hi, gu, mr, te, ta, ml). Translating into the source language returns the text unchanged without a network call.")]
    Translate {
        text: String,
        /// Target language code
        #[arg(long = "to")]
        target: String,
        /// Source language code (defaults to the configured source, normally 'en')
        #[arg(long = "from")]
        source: Option<String>,
    },
    /// WordPress migration admin workflow
    Migration {
        #[command(subcommand)]
        cmd: MigrationCommands,
    },
    /// Check backend liveness
    Health,
    /// View or initialize configuration
    Config {
        #[command(subcommand)]
        cmd: Option<ConfigCommands>,
    },
}

#[derive(Subcommand)]
enum MovieCommands {
    /// List featured movies
    Featured,
    /// Search movies by title
    Search {
        query: String,
        #[arg(long, default_value = "en-US")]
        language: String,
    },
    /// Show one movie
    Show { id: String },
}

#[derive(Subcommand)]
enum ReviewCommands {
    /// Show one review in full
    Show { id: String },
}

#[derive(Subcommand)]
enum MigrationCommands {
    /// Show migration progress counters
    Status,
    /// Start a migration run and poll until it completes
    #[command(long_about = "Start a WordPress migration run and poll the status endpoint on a fixed interval until the backend reports completed, then refetch the staged posts and failed mappings. Polling is bounded; exceeding the bound fails the command.")]
    Run {
        /// Preview list size fetched after completion
        #[arg(long, default_value_t = 50)]
        limit: u32,
        /// Override the poll interval in seconds
        #[arg(long)]
        interval_secs: Option<u64>,
        /// Override the maximum number of status polls
        #[arg(long)]
        max_attempts: Option<u32>,
    },
    /// List migrated posts pending approval
    Posts {
        #[arg(long, default_value_t = 50)]
        limit: u32,
    },
    /// List posts that failed TMDB mapping
    Failed,
    /// Approve (or reject) a staged post, optionally with edits
    Approve {
        id: String,
        /// Reject instead of approve
        #[arg(long, action = ArgAction::SetTrue)]
        reject: bool,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        excerpt: Option<String>,
        #[arg(long)]
        rating: Option<f32>,
        /// Replacement tags (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Write a default config file
    Init,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    logging::init_logging_with_file(cli.verbose, cli.quiet, cli.log_file.clone())
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);
    let config = commands::load_config(cli.base_url.as_deref())?;

    match cli.command {
        Commands::Home { limit } => home::run_home(&config, limit, &output).await,
        Commands::Movies { cmd } => match cmd {
            MovieCommands::Featured => movies::run_featured(&config, &output).await,
            MovieCommands::Search { query, language } => {
                movies::run_search(&config, &query, &language, &output).await
            }
            MovieCommands::Show { id } => movies::run_show(&config, &id, &output).await,
        },
        Commands::Reviews { search, category, limit, cmd } => match cmd {
            Some(ReviewCommands::Show { id }) => reviews::run_show(&config, &id, &output).await,
            None => reviews::run_list(&config, &search, &category, limit, &output).await,
        },
        Commands::QuickSubscribe { email, name } => {
            subscribe::run_quick_subscribe(&config, email, name, &output).await
        }
        Commands::Subscribe { email, name, phone, whatsapp, no_email_notifications } => {
            subscribe::run_subscribe(
                &config,
                email,
                name,
                phone,
                whatsapp,
                no_email_notifications,
                &output,
            )
            .await
        }
        Commands::Unsubscribe { email } => {
            subscribe::run_unsubscribe(&config, &email, &output).await
        }
        Commands::Translate { text, target, source } => {
            translate::run_translate(&config, &text, &target, source.as_deref(), &output).await
        }
        Commands::Migration { cmd } => match cmd {
            MigrationCommands::Status => migration::run_status(&config, &output).await,
            MigrationCommands::Run { limit, interval_secs, max_attempts } => {
                migration::run_migration_command(&config, limit, interval_secs, max_attempts, &output)
                    .await
            }
            MigrationCommands::Posts { limit } => {
                migration::run_posts(&config, limit, &output).await
            }
            MigrationCommands::Failed => migration::run_failed(&config, &output).await,
            MigrationCommands::Approve { id, reject, title, excerpt, rating, tags } => {
                migration::run_approve(
                    &config, &id, !reject, title, excerpt, rating, tags, &output,
                )
                .await
            }
        },
        Commands::Health => health::run_health(&config, &output).await,
        Commands::Config { cmd } => match cmd.unwrap_or(ConfigCommands::Show) {
            ConfigCommands::Show => config::run_show(&config, &output),
            ConfigCommands::Init => config::run_init(&output),
        },
    }
}
