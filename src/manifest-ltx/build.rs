fn main() {
    // Declare the custom cfg so rustc knows about it
    println!("cargo::rustc-check-cfg=cfg(has_network_tests)");
    println!("cargo::rerun-if-env-changed=LTX_NETWORK_TESTS");

    // Emit a custom cfg flag if LTX_NETWORK_TESTS is set: enables tests that hit the real network.
    if let Ok(enabled) = std::env::var("LTX_NETWORK_TESTS")
        && !enabled.is_empty()
    {
        println!("cargo:rustc-cfg=has_network_tests");
    }
}
