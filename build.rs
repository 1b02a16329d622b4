fn main() {
    // stamped into the binary; the terminal template's boot banner shows it
    println!(
        "cargo:rustc-env=BUILD_TIME={}",
        chrono::Utc::now().to_rfc3339()
    );
    println!("cargo:rerun-if-changed=build.rs");
}
