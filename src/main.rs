//! User directory console entry point.

use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use user_console::api::ApiClient;
use user_console::config::Config;
use user_console::controller::Controller;
use user_console::view;

/// Console client for the user directory demo API.
#[derive(Parser, Debug)]
#[command(name = "user-console")]
#[command(about = "Console client for the user directory demo API")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Override the API base URL.
    #[arg(long, global = true, env = "API_BASE_URL")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the interactive console (default).
    Run,

    /// Check server health once.
    CheckHealth,

    /// List users once.
    ListUsers,

    /// Add a user, then refresh the list.
    AddUser {
        /// Name of the user.
        name: String,
        /// Email of the user.
        email: String,
    },

    /// Check configuration validity.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("user_console=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(&args),
        Some(Command::CheckHealth) => cmd_check_health(&args).await,
        Some(Command::ListUsers) => cmd_list_users(&args).await,
        Some(Command::AddUser { ref name, ref email }) => {
            cmd_add_user(&args, name.clone(), email.clone()).await
        }
        Some(Command::Run) | None => cmd_run(&args).await,
    }
}

/// Load configuration, apply CLI overrides, and validate.
fn load_config(args: &Args) -> anyhow::Result<Config> {
    let mut config = Config::load()?;
    if let Some(base_url) = &args.base_url {
        config.api_base_url = base_url.clone();
    }
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("invalid configuration: {}", e))?;
    Ok(config)
}

/// Run the interactive console loop.
async fn cmd_run(args: &Args) -> anyhow::Result<()> {
    let config = load_config(args)?;
    let client = ApiClient::new(&config);
    let mut controller = Controller::new(client);

    controller.initialize().await;
    print!("{}", view::render(controller.state()));
    print_help();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                println!("Bye!");
                break;
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if !handle_command(&mut controller, line.trim()).await {
                    break;
                }
                print!("{}", view::render(controller.state()));
            }
        }
    }

    Ok(())
}

/// Dispatch one console command. Returns false to quit.
async fn handle_command<A: user_console::api::UserApi>(
    controller: &mut Controller<A>,
    line: &str,
) -> bool {
    let (command, rest) = match line.split_once(' ') {
        Some((cmd, rest)) => (cmd, rest),
        None => (line, ""),
    };

    match command {
        "name" => controller.set_name(rest),
        "email" => controller.set_email(rest),
        "submit" => controller.submit_user().await,
        "add" => {
            let (name, email) = match rest.split_once(' ') {
                Some((name, email)) => (name, email),
                None => (rest, ""),
            };
            controller.set_name(name);
            controller.set_email(email);
            controller.submit_user().await;
        }
        "refresh" => controller.list_users().await,
        "health" => controller.check_health().await,
        "help" => print_help(),
        "quit" | "exit" => {
            println!("Bye!");
            return false;
        }
        "" => {}
        other => println!("Unknown command: {} (try 'help')", other),
    }

    true
}

fn print_help() {
    println!("Commands:");
    println!("  name <value>          set the name field");
    println!("  email <value>         set the email field");
    println!("  submit                submit the form");
    println!("  add <name> <email>    fill and submit in one step");
    println!("  refresh               re-fetch the user list");
    println!("  health                re-check server health");
    println!("  quit                  exit");
}

/// Check server health once.
async fn cmd_check_health(args: &Args) -> anyhow::Result<()> {
    let config = load_config(args)?;
    let client = ApiClient::new(&config);
    let mut controller = Controller::new(client);

    controller.check_health().await;
    print!("{}", view::render(controller.state()));
    Ok(())
}

/// List users once.
async fn cmd_list_users(args: &Args) -> anyhow::Result<()> {
    let config = load_config(args)?;
    let client = ApiClient::new(&config);
    let mut controller = Controller::new(client);

    controller.list_users().await;
    print!("{}", view::render(controller.state()));
    Ok(())
}

/// Add a user, then refresh the list.
async fn cmd_add_user(args: &Args, name: String, email: String) -> anyhow::Result<()> {
    let config = load_config(args)?;
    let client = ApiClient::new(&config);
    let mut controller = Controller::new(client);

    controller.set_name(name);
    controller.set_email(email);
    controller.submit_user().await;
    print!("{}", view::render(controller.state()));
    Ok(())
}

/// Check configuration validity.
fn cmd_check_config(args: &Args) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("USER CONSOLE - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Loading configuration... ");
    let mut config = match Config::load() {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration load failed"));
        }
    };

    if let Some(base_url) = &args.base_url {
        config.api_base_url = base_url.clone();
    }

    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  API Base URL: {}", config.api_base_url);
    println!("  HTTP Timeout: {}ms", config.http_timeout_ms);
    println!("  HTTP Pool Size: {}", config.http_pool_size);
    println!("  Log Level: {}", config.rust_log);
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}
