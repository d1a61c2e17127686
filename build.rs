use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Forward KEY=VALUE pairs from .env as compile-time env vars
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim();

                    // Real environment wins over .env
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    } else {
        println!("cargo:warning=No .env file found. Using default feed URLs. Copy .env.example to .env to override them.");
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env.example");
    for key in ["GENERIC_FEED_URL", "YOGA_FEED_URL", "ENABLE_LOGGING", "LOG_LEVEL"] {
        println!("cargo:rerun-if-env-changed={}", key);
    }
}
