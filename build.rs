fn main() {
    // Build date shown in the site footer
    let build_date = chrono::Utc::now().format("%Y-%m-%d").to_string();
    println!("cargo:rustc-env=BUILD_TIME={}", build_date);

    println!("cargo:rerun-if-changed=build.rs");
}
