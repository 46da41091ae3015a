//! Writes the four manifest icons into `public/`. Takes no arguments.

use log::LevelFilter;
use pwa_assets::{icons, GenerateOptions};

fn main() {
    pwa_assets::init_logging(LevelFilter::Info);
    let options = GenerateOptions::default();

    println!("🎨 Generating {} PWA Icons...\n", options.theme.product_name);

    // Failures are reported on the console; the exit status stays 0.
    match icons::generate_icons(&options) {
        Ok(_) => {
            println!("\n🎉 All icons generated successfully!");
            println!("📁 Location: {}/", options.output.display());
            println!("🔧 Next: Icons are ready to use!");
        }
        Err(err) => {
            eprintln!("\n❌ Error: {err:#}");
            eprintln!("💡 Make sure {}/ can be created and written to", options.output.display());
        }
    }
}
