//! Writes the desktop and mobile store screenshots into `public/`. Takes no arguments.

use log::LevelFilter;
use pwa_assets::{screenshots, GenerateOptions};

fn main() {
    pwa_assets::init_logging(LevelFilter::Info);
    let options = GenerateOptions::default();

    println!("📸 Generating {} PWA Screenshots...\n", options.theme.product_name);

    match screenshots::generate_screenshots(&options) {
        Ok(_) => {
            println!("\n🎉 All screenshots generated successfully!");
            println!("📁 Location: {}/", options.output.display());
            println!("🔧 Next: Reference the screenshots from the web app manifest");
        }
        Err(err) => {
            eprintln!("\n❌ Error: {err:?}");
        }
    }
}
