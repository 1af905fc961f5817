use crate::domain::*;
use crate::error::*;
use crate::initial_conditions::*;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// pinrelax: relax a 1D sequence with pinned values
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Number of smoothing iterations.
    #[arg(default_value = "1")]
    pub iterations: usize,

    /// Secondary run parameter, reported but not used.
    #[arg(default_value = "1")]
    pub secondary: usize,

    /// Sequence length.
    #[arg(short = 'n', long, default_value = "10")]
    pub size: usize,

    /// Initial condition.
    #[arg(long, value_enum, default_value_t)]
    pub ic: ClapICType,

    /// Initial condition dial,
    /// max value for rand, variance for impulse.
    #[arg(long, default_value = "1.0")]
    pub dial: f64,

    /// Seed for the rand initial condition.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Value held at both ends and the middle.
    #[arg(long, default_value = "1.0")]
    pub pin_value: f64,

    /// Print the initial and final sequences.
    #[arg(short, long)]
    pub output_result: bool,

    /// Write the final sequence to this csv file.
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Write an iteration history image, WARNING: we do not check
    /// image size, so be reasonable.
    #[arg(long)]
    pub image: Option<PathBuf>,

    /// Most rows the history image may have.
    #[arg(short, long, default_value = "1000")]
    pub lines: usize,

    /// Debug logging unless RUST_LOG says otherwise.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn cli_parse(name: &str) -> Self {
        let args = Args::parse();
        args.init_logging();
        println!("EXAMPLE: {}", name);
        println!("GIT DESCRIBE: {}", crate::build_info::GIT_DESCRIBE);
        println!("GIT HASH: {}", crate::build_info::GIT_HASH);
        args
    }

    /// Priority: RUST_LOG > --verbose > info
    pub fn init_logging(&self) {
        let default = if self.verbose { "debug" } else { "info" };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }

    pub fn ic_type(&self) -> SmoothResult<ICType> {
        self.ic.to_ic_type(self.dial, self.seed)
    }

    pub fn pins(&self) -> SmoothResult<PinSet> {
        PinSet::ends_and_middle(self.size, self.pin_value)
    }
}

#[cfg(feature = "profile-with-puffin")]
pub fn start_puffin_server() -> SmoothResult<puffin_http::Server> {
    let server_addr = format!("127.0.0.1:{}", puffin_http::DEFAULT_PORT);
    println!("Run this to view profiling data:  puffin_viewer {server_addr}");
    let server = puffin_http::Server::new(&server_addr)
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    profiling::puffin::set_scopes_on(true);
    Ok(server)
}
