//! Eco Management System - Dioxus app.
//! Default: web (dx serve). Desktop: cargo run --features desktop.

#[cfg(feature = "desktop")]
fn main() {
    use dioxus::logger::tracing::Level;
    use dioxus::prelude::*;
    use eco_frontend::app::App;
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialized: {}", e);
    }
    launch(App);
}

#[cfg(all(feature = "web", not(feature = "desktop"), target_arch = "wasm32"))]
fn main() {
    use dioxus::logger::tracing::Level;
    use dioxus::prelude::*;
    use eco_frontend::app::App;
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialized: {}", e);
    }
    launch(App);
}

/// `cargo run` on the host with the web feature: hand over to the Dioxus CLI.
#[cfg(all(feature = "web", not(feature = "desktop"), not(target_arch = "wasm32")))]
fn main() {
    // Build wasm without reference-types so wasm-bindgen finds its intrinsics.
    let rustflags = std::env::var("RUSTFLAGS").unwrap_or_default();
    let rustflags = if rustflags.is_empty() {
        "-C target-feature=-reference-types".to_string()
    } else {
        format!("{} -C target-feature=-reference-types", rustflags)
    };
    let status = std::process::Command::new("dx")
        .arg("serve")
        .env("RUSTFLAGS", rustflags)
        .status();
    match status {
        Ok(s) => std::process::exit(s.code().unwrap_or(1)),
        Err(e) => {
            eprintln!("Could not run 'dx serve': {}", e);
            eprintln!("Install the Dioxus CLI: cargo install dioxus-cli");
            std::process::exit(1);
        }
    }
}
