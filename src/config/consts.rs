// src/config/consts.rs

// Net config
pub const DEFAULT_URL: &str =
    "https://fbref.com/en/comps/9/2021-2022/stats/2021-2022-Premier-League-Stats";

// Local files
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
