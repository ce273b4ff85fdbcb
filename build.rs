use serde::Deserialize;
use std::fs;

#[derive(Deserialize)]
struct Manifest {
    package: Package,
}

#[derive(Deserialize)]
struct Package {
    metadata: Metadata,
}

#[derive(Deserialize)]
struct Metadata {
    dayplan: DayplanMetadata,
}

#[derive(Deserialize)]
struct DayplanMetadata {
    codename: String,
}

// Exposes [package.metadata.dayplan].codename as the CODENAME env var for --version
fn main() {
    let manifest_str = fs::read_to_string("Cargo.toml").expect("Failed to read Cargo.toml");
    let manifest: Manifest = toml::from_str(&manifest_str).expect("Failed to parse Cargo.toml");

    println!("cargo:rustc-env=CODENAME={}", manifest.package.metadata.dayplan.codename);
    println!("cargo:rerun-if-changed=Cargo.toml");
}
