// src/config/consts.rs

// Net config
pub const SOURCE_URL: &str = "https://www.worldometers.info/coronavirus/";
pub const USER_AGENT: &str = "Mozilla/5.0 (compatible; covid_impact/0.2)";

// Source table layout
pub const TABLE_ID: &str = "main_table_countries_today";
pub const SKIP_HEAD_ROWS: usize = 8; // World + continent summary rows
pub const SKIP_TAIL_ROWS: usize = 8; // footer totals

// Local state
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_TABLE_STEM: &str = "covid_impact";
pub const DEFAULT_SHEET_FILE: &str = "covid_data_cleaned.xlsx";
pub const SHEET_NAME: &str = "covid";

// Document store
pub const MONGO_URI: &str = "mongodb://localhost:27017/?serverSelectionTimeoutMS=5000";
pub const MONGO_URI_ENV: &str = "COVID_MONGO_URI";
pub const MONGO_DB: &str = "final_project_db";
pub const MONGO_COLLECTION: &str = "covid_cleaned_data";

// Dashboard
pub const TOP_N_MIN: usize = 2;
pub const TOP_N_MAX: usize = 20;
pub const TOP_N_DEFAULT: usize = 10;
pub const COMPARE_DEFAULT_COUNT: usize = 2;
