use clap::Parser;
use tracing::debug;

use ytq::cli::Args;
use ytq::credentials;
use ytq::error::Error;
use ytq::logging;
use ytq::menu::{self, Selection};
use ytq::player;
use ytq::youtube::{self, ApiClient};

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    if let Err(err) = run(&args) {
        eprintln!("ytq: {err:#}");
        let code = err
            .downcast_ref::<Error>()
            .map(Error::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    // Fail on a missing player before spending any network calls.
    let player = player::detect()?;

    let key = credentials::resolve(&credentials::default_sources())?;
    let api = ApiClient::new(key)?;

    let query = args.query_string();
    debug!(%query, n = args.results, "searching");
    let results = api.search(&query, args.results)?;

    let ids: Vec<String> = results.iter().map(|r| r.id.clone()).collect();
    let durations_by_id = api.fetch_durations(&ids)?;
    let durations = youtube::join_durations(&results, &durations_by_id);

    print!("{}", menu::render(&results, &durations));
    match menu::select(results.len(), args.quiet)? {
        Selection::Quit => {
            println!("Bye!");
            Ok(())
        }
        Selection::Play(index) => {
            let chosen = &results[index];
            println!("Playing {}", chosen.title);
            player.play(&player::watch_url(&chosen.id))
        }
    }
}
