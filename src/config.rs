use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;
use std::num::NonZeroU32;

pub const DEFAULT_RECIPES_TO_SHOW_INITIAL: NonZeroU32 = NonZeroU32::new(10).unwrap();
pub const DEFAULT_RECIPES_TO_SHOW_DELTA: NonZeroU32 = NonZeroU32::new(10).unwrap();

pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    dotenv().ok(); // Load .env file if present
    Config {
        page_sizing: PageSizing {
            initial: get_env_page_size("RECIPES_TO_SHOW_INITIAL", DEFAULT_RECIPES_TO_SHOW_INITIAL),
            delta: get_env_page_size("RECIPES_TO_SHOW_DELTA", DEFAULT_RECIPES_TO_SHOW_DELTA),
        },
        catalog_path: get_env_or_default("CATALOG_PATH", "data/recipes.json"),
        bind_addr: get_env_or_default("BIND_ADDR", "127.0.0.1:3000"),
    }
});

pub struct Config {
    pub page_sizing: PageSizing,
    pub catalog_path: String,
    pub bind_addr: String,
}

/// How many recipes the first page shows and how many each "show more" adds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSizing {
    pub initial: NonZeroU32,
    pub delta: NonZeroU32,
}

impl Default for PageSizing {
    fn default() -> Self {
        Self {
            initial: DEFAULT_RECIPES_TO_SHOW_INITIAL,
            delta: DEFAULT_RECIPES_TO_SHOW_DELTA,
        }
    }
}

fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn get_env_page_size(key: &str, default: NonZeroU32) -> NonZeroU32 {
    match env::var(key) {
        Ok(raw) => parse_page_size(&raw).unwrap_or_else(|| {
            log::warn!("ignoring {key}={raw:?}, expected a positive integer; using {default}");
            default
        }),
        Err(_) => default,
    }
}

fn parse_page_size(raw: &str) -> Option<NonZeroU32> {
    raw.trim().parse::<NonZeroU32>().ok()
}
