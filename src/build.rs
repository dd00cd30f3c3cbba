// src/build.rs
// Embed the window/taskbar icon in Windows builds.
fn main() {
    println!("cargo:rerun-if-changed=assets/covid_impact.ico");

    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("windows") {
        let mut res = winres::WindowsResource::new();
        res.set_icon("assets/covid_impact.ico");
        if let Err(e) = res.compile() {
            println!("cargo:warning=icon not embedded: {e}");
        }
    }
}
