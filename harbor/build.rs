fn main() {
    println!("cargo::rustc-check-cfg=cfg(tracing_pretty)");
    println!("cargo::rerun-if-env-changed=RUST_LOG_PRETTY");
    if std::env::var_os("RUST_LOG_PRETTY").is_some_and(|v| v == "1") {
        println!("cargo::rustc-cfg=tracing_pretty");
    }
}
