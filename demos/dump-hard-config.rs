use clap::Parser;
use rb_hardconfig::HardConfig;
use rb_hardconfig::hardconfig::MAGIC_SIZE;
use rb_hardconfig::wlan::Variant;
use std::path::PathBuf;

#[derive(Debug, Parser)]
struct Options {
    /// Path to the hard_config partition image
    input: PathBuf,

    /// Write the decoded WLAN calibration data to this file
    #[arg(long)]
    wlan_data: Option<PathBuf>,

    /// List all tags of the image, including unknown ones
    #[arg(long)]
    tags: bool,
}

fn main() -> anyhow::Result<()> {
    let options = Options::parse();

    let data = std::fs::read(&options.input)?;
    let config = HardConfig::from_bytes(data)?;

    if options.tags {
        println!("Tags:");
        let region = &config.as_bytes()[MAGIC_SIZE..];
        for tag in rb_hardconfig::tag::tags(region) {
            println!(
                "  {:#04x} offset={} len={}",
                tag.id,
                tag.offset + MAGIC_SIZE,
                tag.len
            );
        }
        println!();
    }

    for attr in config.attributes() {
        match config.render(attr.id) {
            Ok(text) => {
                println!("{}:", attr.name);
                for line in text.lines() {
                    println!("  {}", line);
                }
            }
            Err(e) => println!("{}: ERROR: {}", attr.name, e),
        }
    }

    if config.has_wlan_data() {
        let record = config.payload(rb_hardconfig::hardconfig::ID_WLAN_DATA)?;
        println!();
        println!("WLAN data: {} bytes, {:?}", record.len(), Variant::detect(record));

        let decoded = config.wlan_data()?;
        println!("  decoded: {} bytes", decoded.len());

        if let Some(path) = &options.wlan_data {
            std::fs::write(path, &decoded)?;
            println!("  written to {}", path.display());
        }
    }

    Ok(())
}
