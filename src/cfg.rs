use std::{env, fs, net::IpAddr, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;

use hazmap_core::{
    entities::{Distance, MapBbox},
    geometry::{SimplifyConfig, SimplifyTier},
    RegionPolicy,
};

const DEFAULT_ADDRESS: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 6767;
const DEFAULT_REGION_NAME: &str = "Global";
const DEFAULT_REGION_BBOX: &str = "-90,-180,90,180";
const DEFAULT_DUPLICATE_RADIUS_METERS: f64 = 100.0;
const DEFAULT_SWEEP_INTERVAL_MINS: u64 = 10;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Cfg {
    pub web: WebCfg,
    pub region: RegionCfg,
    pub simplify: SimplifyCfg,
    pub categories: Vec<CategoryCfg>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WebCfg {
    pub address: String,
    pub port: u16,
    /// How often expired hazards are swept, in minutes.
    pub sweep_interval_mins: u64,
}

impl Default for WebCfg {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_string(),
            port: DEFAULT_PORT,
            sweep_interval_mins: DEFAULT_SWEEP_INTERVAL_MINS,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegionCfg {
    pub name: String,
    /// `sw_lat,sw_lng,ne_lat,ne_lng` in degrees.
    pub bbox: String,
    pub duplicate_radius_meters: Option<f64>,
}

impl Default for RegionCfg {
    fn default() -> Self {
        Self {
            name: DEFAULT_REGION_NAME.to_string(),
            bbox: DEFAULT_REGION_BBOX.to_string(),
            duplicate_radius_meters: Some(DEFAULT_DUPLICATE_RADIUS_METERS),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimplifyCfg {
    pub small: Option<TierCfg>,
    pub medium: Option<TierCfg>,
    pub large: Option<TierCfg>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TierCfg {
    pub tolerance: f64,
    pub max_vertices: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryCfg {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub auto_expire_hours: Option<i64>,
}

impl Cfg {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Unable to read configuration file {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("Invalid configuration file {}", path.display()))
    }

    pub fn bind_address(&self) -> Result<IpAddr> {
        self.web
            .address
            .parse()
            .with_context(|| format!("Invalid bind address {}", self.web.address))
    }

    pub fn region_policy(&self) -> Result<RegionPolicy> {
        let bounds: MapBbox = self
            .region
            .bbox
            .parse()
            .map_err(|_| anyhow::anyhow!("Invalid region bbox {}", self.region.bbox))?;
        Ok(RegionPolicy {
            name: self.region.name.clone(),
            bounds,
            duplicate_radius: self
                .region
                .duplicate_radius_meters
                .map(Distance::from_meters),
        })
    }

    pub fn simplify_config(&self) -> SimplifyConfig {
        let defaults = SimplifyConfig::default();
        let tier = |override_: Option<TierCfg>, default: SimplifyTier| {
            override_.map_or(default, |t| SimplifyTier {
                tolerance: t.tolerance,
                max_vertices: t.max_vertices,
            })
        };
        SimplifyConfig {
            small: tier(self.simplify.small, defaults.small),
            medium: tier(self.simplify.medium, defaults.medium),
            large: tier(self.simplify.large, defaults.large),
        }
    }

    /// Token of the bootstrap admin account, if any.
    pub fn admin_token() -> Option<String> {
        env::var("HAZARDMAP_ADMIN_TOKEN").ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_usable() {
        let cfg = Cfg::default();
        assert!(cfg.bind_address().is_ok());
        let region = cfg.region_policy().unwrap();
        assert_eq!("Global", region.name);
        assert!(region.duplicate_radius.is_some());
    }

    #[test]
    fn parse_partial_toml() {
        let cfg: Cfg = toml::from_str(
            r#"
            [web]
            port = 8080

            [region]
            name = "Alps"
            bbox = "45,9,49,13"

            [simplify.large]
            tolerance = 0.002
            max_vertices = 10

            [[categories]]
            id = "wildlife"
            name = "Wildlife"
            keywords = ["bear"]
            auto_expire_hours = 48
            "#,
        )
        .unwrap();
        assert_eq!(8080, cfg.web.port);
        assert_eq!("Alps", cfg.region_policy().unwrap().name);
        assert_eq!(10, cfg.simplify_config().large.max_vertices);
        // Unspecified tiers keep their defaults.
        assert_eq!(
            SimplifyConfig::default().small.max_vertices,
            cfg.simplify_config().small.max_vertices
        );
        assert_eq!(1, cfg.categories.len());
    }

    #[test]
    fn reject_unknown_keys() {
        assert!(toml::from_str::<Cfg>("[web]\nbogus = 1\n").is_err());
    }
}
