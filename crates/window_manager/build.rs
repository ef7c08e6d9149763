use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const CATALOG_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AppEntry {
    id: String,
    title: String,
    component: String,
    icon: String,
}

#[derive(Debug, Clone, Deserialize)]
struct AppCatalog {
    schema_version: u32,
    #[serde(rename = "app", default)]
    apps: Vec<AppEntry>,
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("apps.catalog.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let catalog: AppCatalog = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if catalog.schema_version != CATALOG_SCHEMA_VERSION {
        panic!(
            "catalog schema mismatch in {}: expected {CATALOG_SCHEMA_VERSION} found {}",
            path.display(),
            catalog.schema_version
        );
    }

    let mut seen = BTreeSet::new();
    for app in &catalog.apps {
        if app.id.trim().is_empty() {
            panic!("empty app id in {}", path.display());
        }
        if !seen.insert(app.id.as_str()) {
            panic!("duplicate app id `{}` in {}", app.id, path.display());
        }
    }

    // Keep file order: it is the dock order.
    let json = serde_json::to_string_pretty(&catalog.apps).expect("serialize app catalog");
    let generated = format!(
        "/// Build-time generated built-in app catalog JSON.\n\
pub const APP_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("app_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
