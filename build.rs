fn main() {
    let python_feature_enabled = std::env::var_os("CARGO_FEATURE_PYTHON").is_some();
    let target_os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();

    // `--features python` builds the postmd cdylib as a CPython extension module;
    // on macOS it must leave libpython symbols for the interpreter to resolve at import.
    if python_feature_enabled && target_os == "macos" {
        println!("cargo:rustc-cdylib-link-arg=-undefined");
        println!("cargo:rustc-cdylib-link-arg=dynamic_lookup");
    }
}
