use std::{path::PathBuf, time::Duration as StdDuration};

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::cfg::{CategoryCfg, Cfg};
use hazmap_application::prelude as flows;
use hazmap_core::{
    entities::*,
    repositories::{CategoryRepo, UserRepo},
};
use hazmap_db_mem::MemStore;

#[derive(Debug, Parser)]
#[command(
    name = "hazardmap",
    version,
    about = "Community hazard reporting backend"
)]
struct Args {
    /// Path to the TOML configuration file.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start the web server (the default).
    Run,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let cfg = Cfg::load(args.config.as_deref())?;
    match args.command.unwrap_or(Command::Run) {
        Command::Run => serve(cfg),
    }
}

#[rustfmt::skip]
fn default_categories() -> Vec<CategoryCfg> {
    let category = |id: &str, name: &str, keywords: &[&str], hours: Option<i64>| CategoryCfg {
        id: id.to_string(),
        name: name.to_string(),
        keywords: keywords.iter().map(ToString::to_string).collect(),
        auto_expire_hours: hours,
    };
    vec![
        category("wildlife", "Wildlife", &["bear", "snake", "boar", "wolf"], Some(48)),
        category("weather",  "Weather",  &["storm", "ice", "flood", "fog"],  Some(24)),
        category("terrain",  "Terrain",  &["landslide", "rockfall", "erosion"], None),
        category("obstacle", "Obstacle", &["tree", "debris", "blocked"],     Some(168)),
    ]
}

fn seed(db: &MemStore, cfg: &Cfg) -> Result<()> {
    let categories = if cfg.categories.is_empty() {
        default_categories()
    } else {
        cfg.categories.clone()
    };
    for entry in categories {
        let mut category = Category::new(entry.id.as_str(), entry.name);
        category.keywords = entry.keywords;
        category.auto_expire_hours = entry.auto_expire_hours;
        db.create_category(&category)?;
    }

    match Cfg::admin_token() {
        Some(token) => {
            db.create_user(&User {
                id: "admin".into(),
                email: "admin@localhost".into(),
                role: Role::Admin,
                trust_score: 0,
                api_token: Some(token),
            })?;
            info!("Created bootstrap admin account");
        }
        None => {
            warn!("HAZARDMAP_ADMIN_TOKEN is not set, starting without an admin account");
        }
    }
    Ok(())
}

#[tokio::main]
async fn serve(cfg: Cfg) -> Result<()> {
    let address = cfg.bind_address()?;
    let port = cfg.web.port;
    let region = cfg.region_policy()?;
    let simplify = cfg.simplify_config();
    let sweep_interval = StdDuration::from_secs(cfg.web.sweep_interval_mins.max(1) * 60);

    let db = MemStore::default();
    seed(&db, &cfg)?;

    let sweep_db = db.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(sweep_interval);
        loop {
            interval.tick().await;
            match flows::sweep_expired_hazards(&sweep_db, Timestamp::now()) {
                Ok(0) => (),
                Ok(expired) => info!("Expiration sweep resolved {expired} hazard(s)"),
                Err(err) => warn!("Expiration sweep failed: {err}"),
            }
        }
    });

    info!("Starting web server on {address}:{port}");
    hazmap_webserver::run(db, address, port, hazmap_webserver::Cfg { region, simplify }).await;
    Ok(())
}
