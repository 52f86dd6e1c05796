//! MonDAI CLI: route queries through the knowledge router from the terminal.
//!
//! Usage:
//!   cargo run -p mondai-cli -- route what is an iqube
//!   cargo run -p mondai-cli -- context "coyn treasury"
//!   cargo run -p mondai-cli -- stats
//!   cargo run -p mondai-cli -- list metaknyts
//!
//! Logs go to stderr; set RUST_LOG=debug to see classification and per-KB hit counts.

use clap::{Parser, Subcommand, ValueEnum};
use mondai_core::{prompts, KnowledgeDomain, KnowledgeRouter, MondaiConfig};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "mondai", version, about = "Query the MonDAI knowledge bases")]
struct Cli {
    /// Config file (TOML). Defaults to $MONDAI_CONFIG, then config/mondai.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Route a query and print the result as JSON.
    Route { query: Vec<String> },
    /// Print the agent system prompt built from the routed knowledge.
    Context { query: Vec<String> },
    /// Print item counts per knowledge base.
    Stats,
    /// Print every item of one knowledge base.
    List {
        #[arg(value_enum)]
        kb: KbArg,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum KbArg {
    Iqubes,
    Coyn,
    Metaknyts,
}

impl From<KbArg> for KnowledgeDomain {
    fn from(kb: KbArg) -> Self {
        match kb {
            KbArg::Iqubes => KnowledgeDomain::IQubes,
            KbArg::Coyn => KnowledgeDomain::Coyn,
            KbArg::Metaknyts => KnowledgeDomain::MetaKnyts,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("[mondai] .env not loaded: {}", e);
        }
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = MondaiConfig::load_from(cli.config.as_deref())?;
    let router = KnowledgeRouter::from_config(&config)?;
    info!(max_results = router.max_results(), "mondai ready");

    match cli.command {
        Command::Route { query } => {
            let route = router.route_query(&query.join(" "));
            println!("{}", serde_json::to_string_pretty(&route)?);
        }
        Command::Context { query } => {
            let route = router.route_query(&query.join(" "));
            println!("{}", prompts::knowledge_system_prompt(&route));
        }
        Command::Stats => {
            println!("{}", serde_json::to_string_pretty(&router.get_knowledge_stats())?);
        }
        Command::List { kb } => {
            let items = router.knowledge_base(kb.into()).get_all_knowledge();
            println!("{}", serde_json::to_string_pretty(&items)?);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_accepts_empty_query() {
        let cli = Cli::try_parse_from(["mondai", "route"]).unwrap();
        assert!(matches!(cli.command, Command::Route { ref query } if query.is_empty()));
    }

    #[test]
    fn list_parses_kb_and_global_config() {
        let cli = Cli::try_parse_from(["mondai", "list", "metaknyts", "--config", "c.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("c.toml")));
        match cli.command {
            Command::List { kb } => assert_eq!(KnowledgeDomain::from(kb), KnowledgeDomain::MetaKnyts),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
