use std::path::PathBuf;

pub fn default_port() -> u16 {
    3000
}

pub fn default_host() -> String {
    "127.0.0.1".to_string()
}

pub fn default_root() -> PathBuf {
    PathBuf::from(".")
}

pub fn default_index() -> PathBuf {
    PathBuf::from("index.html")
}

pub fn default_debounce_ms() -> u64 {
    100
}
