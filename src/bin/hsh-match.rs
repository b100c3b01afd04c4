use clap::{Parser, Subcommand};
use serde_json::json;

use hsh_router::routing::{compile, Matcher, Params, Pattern};

#[derive(Parser)]
#[command(name = "hsh-match")]
#[command(about = "Inspect how route patterns compile and match", long_about = None)]
struct Cli {
    /// Treat the pattern as a regular expression instead of a path template.
    #[arg(short, long, global = true)]
    raw: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the generated expression and parameter names
    Compile { pattern: String },
    /// Match one or more paths against a pattern
    Match {
        pattern: String,
        #[arg(required = true)]
        paths: Vec<String>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Compile { pattern } => {
            let matcher = build(&pattern, cli.raw)?;
            let out = json!({
                "pattern": matcher.source(),
                "regex": matcher.regex().as_str(),
                "params": matcher.param_names(),
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Commands::Match { pattern, paths } => {
            let matcher = build(&pattern, cli.raw)?;
            for path in paths {
                let mut params = Params::new();
                let matched = matcher.capture_into(&path, &mut params);
                let out = json!({
                    "path": path,
                    "matched": matched,
                    "params": params,
                });
                println!("{}", serde_json::to_string(&out)?);
            }
        }
    }

    Ok(())
}

fn build(pattern: &str, raw: bool) -> Result<Matcher, hsh_router::RouterError> {
    if raw {
        Pattern::raw(pattern)?.compile()
    } else {
        compile(pattern)
    }
}
