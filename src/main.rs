//! CLI entry point for ferret

use std::fs;
use std::io::{self, BufWriter, Write};
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use ferret::{FerretError, SearchConfig, SortMode, Terminator, Walker, sort_paths};

#[derive(Parser, Debug)]
#[command(name = "ferret")]
#[command(about = "Find regular files in a directory tree by name, owner, permissions, and depth")]
#[command(disable_help_flag = true)]
struct Args {
    /// Directory to search
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Filename must contain this substring
    #[arg(short = 'n', value_name = "SUBSTR", default_value = "", overrides_with = "name")]
    name: String,

    /// Sort by full path (f) or by size, largest first (s)
    #[arg(short = 's', value_name = "f|s", overrides_with = "sort")]
    sort: Option<String>,

    /// Only match files whose permissions pack to this decimal value
    #[arg(short = 'm', value_name = "MASK", overrides_with = "mask")]
    mask: Option<String>,

    /// Only match files owned by this user
    #[arg(short = 'u', value_name = "USER", overrides_with = "user")]
    user: Option<String>,

    /// Minimum depth below the root, inclusive
    #[arg(short = 'f', value_name = "NUM", overrides_with = "min_depth")]
    min_depth: Option<String>,

    /// Maximum depth below the root, exclusive
    #[arg(short = 't', value_name = "NUM", overrides_with = "max_depth")]
    max_depth: Option<String>,

    /// Include hidden files and directories
    #[arg(short = 'a')]
    all: bool,

    /// Terminate each printed path with NUL instead of newline
    #[arg(short = '0')]
    print0: bool,

    /// Print usage and exit with failure status
    #[arg(short = 'h')]
    help: bool,
}

/// Build a validated search configuration from the raw arguments.
///
/// Numeric and user arguments are kept as strings by the parser so
/// that a malformed value surfaces as one of the configuration errors
/// below rather than a generic parse failure.
fn build_config(args: &Args) -> Result<SearchConfig, FerretError> {
    let mut config = SearchConfig {
        name_filter: args.name.clone(),
        include_hidden: args.all,
        terminator: if args.print0 {
            Terminator::Nul
        } else {
            Terminator::Newline
        },
        ..Default::default()
    };

    if let Some(ref sort) = args.sort {
        config.sort = match sort.as_str() {
            "f" => SortMode::ByFullPath,
            "s" => SortMode::BySize,
            _ => return Err(FerretError::UnknownComparator(sort.clone())),
        };
    }

    if let Some(ref mask) = args.mask {
        config.mask = Some(
            mask.parse()
                .map_err(|_| FerretError::InvalidMask(mask.clone()))?,
        );
    }

    if let Some(ref user) = args.user {
        if uzers::get_user_by_name(user.as_str()).is_none() {
            return Err(FerretError::UnknownUser(user.clone()));
        }
        config.owner = Some(user.clone());
    }

    if let Some(ref depth) = args.min_depth {
        config.min_depth = depth
            .parse()
            .map_err(|_| FerretError::InvalidDepth(depth.clone()))?;
    }

    if let Some(ref depth) = args.max_depth {
        config.max_depth = depth
            .parse()
            .map_err(|_| FerretError::InvalidDepth(depth.clone()))?;
    }

    Ok(config)
}

/// Check that the search root exists, is a directory, and can be opened.
fn validate_root(path: &Path) -> Result<(), FerretError> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.is_dir() => {}
        _ => return Err(FerretError::RootNotDirectory(path.to_path_buf())),
    }

    fs::read_dir(path)
        .map(drop)
        .map_err(|source| FerretError::RootNotOpenable {
            path: path.to_path_buf(),
            source,
        })
}

/// Write each path followed by the configured terminator byte.
fn print_paths(paths: &[PathBuf], terminator: Terminator) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    for path in paths {
        out.write_all(path.as_os_str().as_bytes())?;
        out.write_all(&[terminator.byte()])?;
    }

    out.flush()
}

fn print_usage() {
    eprintln!(
        "Usage: ferret [OPTIONS] [DIR]\n\
         -n SUBSTR (search based on a substring in the file name)\n\
         -s f|s (sort the list of paths by full path (f) or size (s))\n\
         -m MASK (search for files based on access rights)\n\
         -u USER (search for files based on the owner's username)\n\
         -f NUM (minimum distance of matches from the root)\n\
         -t NUM (maximum distance of matches from the root)\n\
         -a (also search hidden files and subdirectories)\n\
         -0 (use '\\0' instead of '\\n' after each path)\n\
         -h (print this help)"
    );
}

fn main() {
    let args = Args::parse();

    if args.help {
        print_usage();
        process::exit(1);
    }

    let config = build_config(&args).unwrap_or_else(|e| {
        eprintln!("ferret: {}", e);
        process::exit(1);
    });

    if let Err(e) = validate_root(&args.path) {
        eprintln!("ferret: {}", e);
        process::exit(1);
    }

    let walker = Walker::new(config.clone());
    let mut paths = match walker.walk(&args.path) {
        Ok(paths) => paths,
        Err(e) => {
            eprintln!("ferret: {}", e);
            process::exit(1);
        }
    };

    sort_paths(&mut paths, config.sort);

    if let Err(e) = print_paths(&paths, config.terminator) {
        eprintln!("ferret: error writing output: {}", e);
        process::exit(1);
    }
}
