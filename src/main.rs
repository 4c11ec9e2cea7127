//! demobuddy - Main CLI Entry Point

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use demobuddy::cli::{Args, Commands};
use demobuddy::config::Config;
use demobuddy::demo::{build_demo_pipeline, DemoSession, Display};
use demobuddy::store::UserStore;

fn main() -> Result<()> {
    let args = Args::parse();

    if let Err(msg) = args.validate() {
        eprintln!("{}: {}", "Error".red(), msg);
        std::process::exit(2);
    }

    // A broken config file should not kill a live presentation
    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("{}: {} (using defaults)", "Warning".yellow(), e);
        Config::default()
    });

    if args.no_color || !config.display.color {
        colored::control::set_override(false);
    }

    match run(&args, &config) {
        Ok(()) => Ok(()),
        Err(e) if e.to_string().contains("Interrupted") => {
            eprintln!("\nInterrupted.");
            std::process::exit(130);
        }
        Err(e) => Err(e),
    }
}

fn run(args: &Args, config: &Config) -> Result<()> {
    let verbosity = args.verbosity();

    match &args.command {
        None => {
            let display = Display::new(verbosity);
            let mut session = DemoSession::new(display, config.rag_config(), args.yes)?;
            session.run_full()
        }

        Some(Commands::Admin) => {
            let display = Display::new(verbosity);
            let mut session = DemoSession::new(display, config.rag_config(), args.yes)?;
            session.run_admin_only()
        }

        Some(Commands::Rag { query, top_k, json }) => {
            let mut rag_config = config.rag_config();
            if let Some(k) = top_k {
                rag_config.top_k = *k;
            }

            if *json {
                // Machine output: no banner, no prompts
                let store = UserStore::seed();
                let pipeline = build_demo_pipeline(&store, rag_config);
                let result = pipeline.answer(query.as_deref().unwrap_or(""));
                println!("{}", serde_json::to_string_pretty(&result)?);
                Ok(())
            } else {
                let display = Display::new(verbosity);
                let mut session = DemoSession::new(display, rag_config, args.yes)?;
                session.run_rag_only(query.as_deref())
            }
        }

        Some(Commands::Config) => {
            let path = Config::config_path()?;
            println!("{} {}", "Config file:".bold(), path.display());
            print!("{}", toml::to_string_pretty(config)?);
            Ok(())
        }
    }
}
