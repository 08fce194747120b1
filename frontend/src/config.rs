use std::sync::OnceLock;

use log::{warn, Level};
use serde::{Deserialize, Serialize};

use crate::animation::trigger::TriggerConfig;
use crate::consent::ConsentSettings;
use crate::error::Error;
use crate::viewport::Breakpoints;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Development builds log trigger transitions too
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Links {
    pub github: String,
    pub twitter: String,
    pub youtube: String,
    pub download: String,
}

impl Default for Links {
    fn default() -> Self {
        Self {
            github: "https://github.com/WalPress/site-builder".to_string(),
            twitter: "https://x.com/WalpressApp".to_string(),
            youtube: "https://www.youtube.com/@WalpressAPP".to_string(),
            download: "https://github.com/WalPress/site-builder/releases".to_string(),
        }
    }
}

/// Viewport triggers for every scroll-animated section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SectionTriggers {
    pub hero: TriggerConfig,
    pub features: TriggerConfig,
    pub how_it_works: TriggerConfig,
    pub faq: TriggerConfig,
    pub cta: TriggerConfig,
    pub footer: TriggerConfig,
}

impl Default for SectionTriggers {
    fn default() -> Self {
        let replay = TriggerConfig { replay_on_reenter: true, ..TriggerConfig::default() };
        Self {
            hero: replay,
            features: replay,
            how_it_works: TriggerConfig { enter_threshold: 0.3, ..TriggerConfig::default() },
            faq: TriggerConfig::default(),
            cta: replay,
            footer: replay,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub links: Links,
    pub breakpoints: Breakpoints,
    pub consent: ConsentSettings,
    pub triggers: SectionTriggers,
}

impl SiteConfig {
    pub fn parse(raw: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(raw)?)
    }
}

const SITE_JSON: &str = include_str!("../site.json");

/// The embedded `site.json`, or the defaults if it does not parse.
pub fn site() -> &'static SiteConfig {
    static SITE: OnceLock<SiteConfig> = OnceLock::new();
    SITE.get_or_init(|| {
        SiteConfig::parse(SITE_JSON).unwrap_or_else(|err| {
            warn!("{}, using defaults", err);
            SiteConfig::default()
        })
    })
}
