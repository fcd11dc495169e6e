use clap::Parser;

/// Search YouTube and play a result in a local media player.
#[derive(Parser, Debug)]
#[command(name = "ytq", version, about)]
pub struct Args {
    /// Number of results to fetch
    #[arg(short = 'n', long = "results", default_value_t = 10,
          value_parser = clap::value_parser!(u32).range(1..=50))]
    pub results: u32,

    /// Play the first result without prompting
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Search query
    #[arg(required = true)]
    pub query: Vec<String>,
}

impl Args {
    /// All positional tokens joined into one query string.
    pub fn query_string(&self) -> String {
        self.query.join(" ")
    }
}
