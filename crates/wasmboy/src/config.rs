use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use typed_builder::TypedBuilder;

pub const USAGE: &str = "Usage: wasmboy <image> [steps] [--load-addr=HEX] [--start=HEX]";

/// Options for one trace run.
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
pub struct RunConfig {
    #[builder(setter(into))]
    pub image: PathBuf,
    /// Maximum number of CPU steps to execute.
    #[builder(default = 1_000_000)]
    pub steps: u64,
    /// Where the image is copied into the 64 KiB address space.
    #[builder(default = 0x0000)]
    pub load_addr: u16,
    #[builder(default = 0x0100)]
    pub start_pc: u16,
}

/// Parse command-line arguments (without the program name).
pub fn parse_args<I, S>(args: I) -> Result<RunConfig>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut image = None;
    let mut steps = None;
    let mut load_addr = None;
    let mut start_pc = None;

    for arg in args {
        let arg = arg.as_ref();
        if let Some(value) = arg.strip_prefix("--load-addr=") {
            load_addr = Some(parse_hex(value).context("invalid --load-addr")?);
        } else if let Some(value) = arg.strip_prefix("--start=") {
            start_pc = Some(parse_hex(value).context("invalid --start")?);
        } else if arg.starts_with("--") {
            bail!("unknown option '{arg}'");
        } else if image.is_none() {
            image = Some(PathBuf::from(arg));
        } else if steps.is_none() {
            steps = Some(
                arg.parse::<u64>()
                    .with_context(|| format!("invalid step count '{arg}'"))?,
            );
        } else {
            bail!("unexpected argument '{arg}'");
        }
    }

    let Some(image) = image else {
        bail!("missing image path");
    };

    let mut config = RunConfig::builder().image(image).build();
    if let Some(steps) = steps {
        config.steps = steps;
    }
    if let Some(load_addr) = load_addr {
        config.load_addr = load_addr;
    }
    if let Some(start_pc) = start_pc {
        config.start_pc = start_pc;
    }
    Ok(config)
}

fn parse_hex(value: &str) -> Result<u16> {
    let digits = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .or_else(|| value.strip_prefix('$'))
        .unwrap_or(value);
    u16::from_str_radix(digits, 16).with_context(|| format!("'{value}' is not a 16-bit hex value"))
}
