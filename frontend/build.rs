// Desktop builds on Linux link against libxdo; fail early with install hints.

fn main() {
    println!("cargo:rerun-if-env-changed=CARGO_FEATURE_DESKTOP");
    let wants_desktop = std::env::var("CARGO_FEATURE_DESKTOP").is_ok();
    let on_linux = std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("linux");
    if wants_desktop && on_linux && !has_libxdo() {
        eprintln!("error: the desktop feature needs libxdo on Linux.");
        eprintln!("  Debian/Ubuntu: sudo apt install libxdo-dev");
        eprintln!("  Fedora/RHEL:   sudo dnf install libxdo-devel");
        eprintln!("Or build for the browser instead: dx serve");
        std::process::exit(1);
    }
}

fn has_libxdo() -> bool {
    let via_pkg_config = std::process::Command::new("pkg-config")
        .args(["--exists", "libxdo"])
        .status()
        .map(|s| s.success());
    match via_pkg_config {
        Ok(true) => true,
        // No .pc file on some distros; fall back to the linker cache.
        _ => std::process::Command::new("ldconfig")
            .arg("-p")
            .output()
            .map(|o| String::from_utf8_lossy(&o.stdout).contains("libxdo"))
            .unwrap_or(false),
    }
}
