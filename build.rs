fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    let stamp = chrono::Utc::now().format("%Y-%m-%d").to_string();
    println!("cargo:rustc-env=BUILD_DATE={stamp}");
}
