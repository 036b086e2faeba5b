//! Driver commands: `run`, `lex` and `parse`.

mod debug;
mod run;

pub use debug::{dump_tokens, dump_tree, lex_file, parse_file};
pub use run::{evaluate_source, run_file, EvalOutput};

use fwjs_eval::{ArityPolicy, DEFAULT_MAX_CALL_DEPTH};

/// Failure to get at the program text at all.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("cannot read `{path}`: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Evaluation settings taken from the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub arity_policy: ArityPolicy,
    pub max_call_depth: usize,
    /// Print the program's final value as `=> value` after it finishes.
    pub show_result: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            arity_policy: ArityPolicy::default(),
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
            show_result: false,
        }
    }
}

impl RunOptions {
    /// Parse `run` arguments: exactly one file path plus optional flags.
    ///
    /// Recognized flags are `--strict-arity`, `--max-depth=N` and
    /// `--show-result`.
    pub fn from_args(args: &[String]) -> Result<(String, RunOptions), String> {
        let mut options = RunOptions::default();
        let mut path = None;

        for arg in args {
            if arg == "--strict-arity" {
                options.arity_policy = ArityPolicy::Strict;
            } else if arg == "--show-result" {
                options.show_result = true;
            } else if let Some(depth) = arg.strip_prefix("--max-depth=") {
                options.max_call_depth = depth
                    .parse()
                    .map_err(|_| format!("invalid value for --max-depth: `{depth}`"))?;
            } else if arg.starts_with("--") {
                return Err(format!("unknown option `{arg}`"));
            } else if path.is_some() {
                return Err(format!("unexpected argument `{arg}`"));
            } else {
                path = Some(arg.clone());
            }
        }

        match path {
            Some(path) => Ok((path, options)),
            None => Err("missing file argument".to_string()),
        }
    }
}

fn read_file(path: &str) -> Result<String, CommandError> {
    std::fs::read_to_string(path).map_err(|source| CommandError::Io {
        path: path.to_string(),
        source,
    })
}
