use rocket::{config::Config as RocketCfg, Rocket, Route};

use hazmap_core::{geometry::SimplifyConfig, RegionPolicy};
use hazmap_db_mem::MemStore;

pub mod api;
mod caching;
mod guards;

/// Deployment-specific settings shared with all request handlers.
#[derive(Debug, Clone)]
pub struct Cfg {
    pub region: RegionPolicy,
    pub simplify: SimplifyConfig,
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
}

pub(crate) fn rocket_instance(options: InstanceOptions, db: MemStore) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
    } = options;

    let r = match rocket_cfg {
        Some(rocket_cfg) => rocket::custom(rocket_cfg),
        None => rocket::build(),
    };

    let mut instance = r.manage(db).manage(cfg);
    for (m, routes) in mounts {
        instance = instance.mount(m, routes);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes())]
}

pub async fn run(db: MemStore, address: std::net::IpAddr, port: u16, cfg: Cfg) {
    let rocket_cfg = RocketCfg {
        address,
        port,
        ..RocketCfg::default()
    };
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: Some(rocket_cfg),
        cfg,
    };
    let instance = rocket_instance(options, db);
    if let Err(err) = instance.launch().await {
        error!("Unable to run web server: {err}");
    }
}
