use std::path::PathBuf;

use clap::Parser;

/// glayout - a master/stack tiling engine driven from a simulated host.
#[derive(Parser, Debug)]
#[command(name = "glayout", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive override (e.g. "debug", "glayout_tiling=trace").
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,

    /// Width of the simulated work area.
    #[arg(long, default_value_t = 1920)]
    pub width: u32,

    /// Height of the simulated work area.
    #[arg(long, default_value_t = 1080)]
    pub height: u32,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::parse_from(["glayout"]);
        assert!(args.config.is_none());
        assert!(args.log_level.is_none());
        assert!(!args.print_config);
        assert_eq!((args.width, args.height), (1920, 1080));
    }

    #[test]
    fn overrides() {
        let args = Args::parse_from([
            "glayout",
            "--config",
            "/tmp/glayout.toml",
            "--log-level",
            "debug",
            "--print-config",
            "--width",
            "1000",
            "--height",
            "800",
        ]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/glayout.toml")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(args.print_config);
        assert_eq!((args.width, args.height), (1000, 800));
    }
}
