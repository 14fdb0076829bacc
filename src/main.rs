use clap::Parser;
use dotenv::dotenv;
use fortunate_cow::{message, prelude::*, Cow, Fortunes};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// A cow tells your fortune.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Only pick fortunes from this category
    category: Option<String>,

    /// JSON file to read fortunes from instead of the built-in set
    #[arg(long, env = "FORTUNES_PATH")]
    fortunes: Option<PathBuf>,

    /// The cow's eyes
    #[arg(long, default_value = "oo")]
    eyes: String,

    /// The cow's tongue
    #[arg(long, default_value = "  ")]
    tongue: String,

    /// Wrap the speech bubble at this many characters
    #[arg(long, default_value_t = 40)]
    width: usize,

    /// Print the available categories and exit
    #[arg(long)]
    list_categories: bool,
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    debug!("cli: {cli:?}");

    match run(cli).await {
        Ok(out) => println!("{out}"),
        Err(err) => {
            error!("💥 {err:?}");
            std::process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> Result<String> {
    let loaded;
    let fortunes = match &cli.fortunes {
        Some(path) => {
            loaded = Fortunes::from_file(path).await?;
            &loaded
        }
        None => Fortunes::embedded()?,
    };

    if cli.list_categories {
        return Ok(fortunes.categories().join("\n"));
    }

    let cow = Cow::new(&cli.eyes, &cli.tongue, cli.width).context("fails to build cow")?;

    message(
        fortunes,
        cli.category.as_deref(),
        &mut rand::thread_rng(),
        &cow,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use fortunate_cow::{Presenter, NO_FORTUNE};
    use std::io::Write;
    use test_log::test as test_log;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("fortunate-cow").chain(args.iter().copied()))
            .expect("cli args")
    }

    fn fortunes_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"{{"fortunes": [
                {{"text": "Hello", "category": "greeting"}},
                {{"text": "Bye", "category": "farewell"}}
            ]}}"#
        )
        .expect("write");
        file
    }

    #[test_log(tokio::test)]
    async fn lists_embedded_categories() {
        let mut args = cli(&["--list-categories"]);
        args.fortunes = None;
        let out = run(args).await.expect("categories");
        let embedded = Fortunes::embedded().expect("fortunes");
        assert_eq!(out, embedded.categories().join("\n"));
    }

    #[test_log(tokio::test)]
    async fn reads_fortunes_from_file() {
        let file = fortunes_file();
        let path = file.path().to_str().expect("utf-8 path");

        let out = run(cli(&["--fortunes", path, "--list-categories"]))
            .await
            .expect("categories");
        assert_eq!(out, "greeting\nfarewell");

        let out = run(cli(&["farewell", "--fortunes", path]))
            .await
            .expect("message");
        assert_eq!(out, Cow::default().render("Bye").expect("render"));

        let out = run(cli(&["unknown", "--fortunes", path]))
            .await
            .expect("message");
        assert_eq!(out, NO_FORTUNE);
    }

    #[test_log(tokio::test)]
    async fn passes_cow_options() {
        let file = fortunes_file();
        let path = file.path().to_str().expect("utf-8 path");

        let args = cli(&["greeting", "--fortunes", path, "--eyes", "^^", "--width", "3"]);
        let out = run(args).await.expect("message");
        let cow = Cow::new("^^", "  ", 3).expect("cow");
        assert_eq!(out, cow.render("Hello").expect("render"));

        let args = cli(&["--fortunes", path, "--eyes", "o"]);
        assert!(run(args).await.is_err());
    }

    #[test_log(tokio::test)]
    async fn fails_on_missing_fortunes_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("missing.json");

        let err = run(cli(&["--fortunes", path.to_str().expect("utf-8 path")]))
            .await
            .expect_err("missing file");
        assert!(err.to_string().contains("fails to read fortunes file"));
    }
}
