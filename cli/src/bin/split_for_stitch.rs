use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use splitter::{OverlapFraction, PartCount};
use splitter_cli::image_utils::{save_parts, SplitOptions, DEFAULT_EXTENSION};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "split_for_stitch")]
#[command(about = "Split an image into 2-5 overlapping parts for stitching", long_about = None)]
struct SplitForStitchCli {
    #[arg(short, long, value_name = "IMAGE")]
    /// input image path
    input: PathBuf,
    #[arg(short, long, value_name = "DIR", default_value = "splits")]
    /// output directory for the parts
    outdir: PathBuf,
    #[arg(long, value_name = "FRACTION", default_value = "0.2")]
    /// overlap between neighbouring parts as a fraction of the part size (0.0 - 0.5), "20%" is accepted as well
    overlap: OverlapFraction,
    #[arg(long, value_name = "N")]
    /// number of parts (2 - 5), derived from the longer image side if omitted
    parts: Option<PartCount>,
    #[arg(long, value_name = "EXT", default_value = DEFAULT_EXTENSION)]
    /// file extension of the written parts, selects the image format
    extension: String,
}

impl SplitForStitchCli {
    fn extension(&self) -> &str {
        self.extension.trim_start_matches('.')
    }

    fn validate(&self) {
        if image::ImageFormat::from_extension(self.extension()).is_none() {
            let mut cmd = SplitForStitchCli::command();
            cmd.error(
                ErrorKind::ValueValidation,
                format!("EXT '{}' is not a known image format", self.extension),
            )
            .exit();
        }
    }

    fn split_options(&self) -> SplitOptions {
        SplitOptions {
            overlap: self.overlap,
            part_count: self.parts,
            extension: self.extension().to_owned(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = SplitForStitchCli::parse();
    args.validate();

    let saved = save_parts(&args.input, &args.outdir, &args.split_options())?;
    for part in &saved {
        println!(
            "[SAVED] part {}: coords {} -> {}",
            part.index,
            part.crop_box,
            part.path.display()
        );
    }

    println!("\n[DONE] Generated parts:");
    for part in &saved {
        println!("   {}", part.path.display());
    }
    println!(
        "\nNow you can run your stitcher on these parts (in left-to-right or top-to-bottom order)."
    );
    Ok(())
}
