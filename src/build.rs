// src/build.rs
fn main() {
    println!("cargo:rerun-if-changed=assets/water_trends.ico");

    #[cfg(windows)]
    {
        let mut res = winres::WindowsResource::new();
        res.set_icon("assets/water_trends.ico")
            .set("ProductName", "Water Trends")
            .set("FileDescription", "Water-quality trend charts");
        if let Err(e) = res.compile() {
            println!("cargo:warning=icon resource not embedded: {e}");
        }
    }
}
