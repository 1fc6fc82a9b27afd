//! methodsig - inspect exported method signatures of on-chain accounts
//!
//! Usage:
//!   methodsig --help

use std::error::Error;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use methodsig::{
    programs::{AccountProgram, StakingProgram, TokenProgram},
    Account, Address, BlockStore, ChainStore, CodeId, ProgramRegistry, SignatureResolver,
    SledBlockStore, StateTreeBuilder, METHODSIG_VERSION,
};

#[derive(Parser)]
#[command(name = "methodsig")]
#[command(version = METHODSIG_VERSION)]
#[command(about = "Resolve exported method signatures of on-chain accounts", long_about = None)]
struct Cli {
    /// State database directory
    #[arg(short, long, global = true, default_value = "./data/state")]
    db: String,

    /// Maximum log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info")]
    log_level: Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a demo genesis state and make it the chain head
    Genesis,

    /// Print the signature of one exported method
    Signature {
        /// Account address (base58)
        address: Address,

        /// Method name
        method: String,
    },

    /// Print every method the account's program exports
    Exports {
        /// Account address (base58)
        address: Address,
    },
}

/// Demo accounts written by `genesis`: label, program (None = plain account), balance
const GENESIS_ACCOUNTS: &[(&str, Option<&str>, u64)] = &[
    ("treasury", None, 1_000_000_000),
    ("wallet", Some(AccountProgram::NAME), 5_000),
    ("token", Some(TokenProgram::NAME), 0),
    ("staking", Some(StakingProgram::NAME), 0),
];

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("setting default subscriber failed");

    let result = match cli.command {
        Commands::Genesis => create_genesis(&cli.db),
        Commands::Signature { address, method } => show_signature(&cli.db, address, &method),
        Commands::Exports { address } => show_exports(&cli.db, address),
    };

    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn create_genesis(db: &str) -> Result<(), Box<dyn Error>> {
    let store = Arc::new(SledBlockStore::open(db)?);

    let mut builder = StateTreeBuilder::new(store.clone());
    for (label, program, balance) in GENESIS_ACCOUNTS {
        let account = match program {
            Some(name) => Account::new_program(CodeId::of(name), *balance),
            None => Account::new(*balance),
        };
        let address = Address::derive(label.as_bytes());
        builder.set_account(address, account);
        println!("{:<10} {}", label, address);
    }

    let tree = builder.commit()?;
    store.set_head(&tree.root())?;
    store.flush()?;
    info!("Genesis written to {} with root {}", db, tree.root());
    Ok(())
}

/// Resolver over the chain head recorded in the database
fn open_resolver(db: &str) -> Result<SignatureResolver<ChainStore, ProgramRegistry>, Box<dyn Error>> {
    let store = Arc::new(SledBlockStore::open(db)?);
    let root = store
        .head()?
        .ok_or_else(|| format!("no chain head in {}; run `methodsig genesis` first", db))?;
    let blocks: Arc<dyn BlockStore> = store;
    let chain = ChainStore::with_head(blocks, root)?;
    Ok(SignatureResolver::new(chain, ProgramRegistry::with_builtins()))
}

fn runtime() -> Result<tokio::runtime::Runtime, Box<dyn Error>> {
    Ok(tokio::runtime::Builder::new_current_thread().enable_all().build()?)
}

fn show_signature(db: &str, address: Address, method: &str) -> Result<(), Box<dyn Error>> {
    let resolver = open_resolver(db)?;
    let signature = runtime()?.block_on(resolver.resolve(&address, method))?;
    println!("{}", serde_json::to_string_pretty(&signature)?);
    Ok(())
}

fn show_exports(db: &str, address: Address) -> Result<(), Box<dyn Error>> {
    let resolver = open_resolver(db)?;
    let exports = runtime()?.block_on(resolver.exports(&address))?;
    println!("{}", serde_json::to_string_pretty(&exports)?);
    Ok(())
}
