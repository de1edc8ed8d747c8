#[macro_use]
extern crate log;

mod cfg;
mod cli;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    cli::run()
}
