use std::path::PathBuf;
use structopt::StructOpt;

/// App parameters
#[derive(StructOpt, Debug)]
#[structopt(name = "spherikal")]
pub struct AppArguments {
    /// Output png path; the frame number is appended when rendering
    /// more than one frame
    #[structopt(long, parse(from_os_str), default_value = "out.png")]
    pub output: PathBuf,

    /// Resolution factor, output side is 512 * 2^factor pixels.
    /// Each extra step quadruples the ray count.
    #[structopt(long, default_value = "1")]
    pub resolution_factor: u32,

    /// Number of frames to render
    #[structopt(long, default_value = "1")]
    pub frames: u32,

    /// Seed for scene population, random when omitted
    #[structopt(long)]
    pub seed: Option<u64>,

    /// Verbose
    #[structopt(short, long, parse(from_occurrences))]
    pub verbose: u8,
}
