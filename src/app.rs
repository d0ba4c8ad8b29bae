use crate::common::options::ListOptions;
use crate::common::sort;
use crate::utils::format;
use anyhow::Context;
use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

/// Name of the config file looked up inside the listed directory.
pub const CONFIG_FILE_NAME: &str = "lsr.toml";

#[derive(Parser, Debug, Deserialize)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(override_usage = "lsr [OPTIONS] [FILE]")]
#[derive(Clone)]
#[serde(default)]
pub struct Args {
    /// The file or directory to list. Defaults to the current directory.
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Path to a config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Do not ignore entries starting with .
    #[arg(short = 'a', long)]
    pub all: bool,

    /// Do not list implied . and ..
    #[arg(short = 'A', long)]
    pub almost_all: bool,

    /// With -l, print the author of each file
    #[arg(long)]
    pub author: bool,

    /// Print C-style escapes for nongraphic characters (accepted, no effect)
    #[arg(short = 'b', long)]
    pub escape: bool,

    /// Do not list implied entries ending with ~
    #[arg(short = 'B', long)]
    pub ignore_backups: bool,

    /// Use a long listing format
    #[arg(short = 'l')]
    pub long: bool,

    /// Sort by modification time, newest first
    #[arg(short = 't')]
    #[serde(alias = "sort")]
    pub sort_time: bool,

    /// With -l, scale sizes by SIZE when printing them
    #[arg(long, value_name = "SIZE")]
    pub block_size: Option<BlockSize>,

    /// Scale sizes by powers of 1000 instead of 1024
    #[arg(short = 'k', long)]
    pub kibibytes: bool,

    /// Colorize the output
    #[arg(long, value_name = "WHEN", default_value_t = ColorWhen::Auto)]
    pub color: ColorWhen,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            path: PathBuf::from("."),
            config: None,
            all: false,
            almost_all: false,
            author: false,
            escape: false,
            ignore_backups: false,
            long: false,
            sort_time: false,
            block_size: None,
            kibibytes: false,
            color: ColorWhen::default(),
        }
    }
}

impl Args {
    /// Load `Args` from CLI + TOML file (if it exists).
    /// CLI values override those from the file.
    pub fn load() -> anyhow::Result<Self> {
        let cli_args = Args::try_parse()?;
        Self::with_config(cli_args)
    }

    /// Layers the config file (explicit or found in the target directory) under `cli_args`.
    pub fn with_config(cli_args: Args) -> anyhow::Result<Self> {
        if let Some(config_path) = cli_args.config.clone() {
            log::debug!("using config file '{}'", config_path.display());
            let file_args = Self::from_file(&config_path)?;
            return Ok(Self::merge(file_args, cli_args));
        }

        // Otherwise, look for `lsr.toml` in the provided path
        let candidate = cli_args.path.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            match Self::from_file(&candidate) {
                Ok(file_args) => {
                    log::debug!("using config file '{}'", candidate.display());
                    return Ok(Self::merge(file_args, cli_args));
                }
                Err(err) => log::warn!("ignoring config file: {err:#}"),
            }
        }

        Ok(cli_args)
    }

    fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("cannot read config file '{}'", path.display()))?;
        toml::from_str::<Args>(&content)
            .with_context(|| format!("invalid config file '{}'", path.display()))
    }

    /// Merge two Args: CLI values override those from the file
    fn merge(mut file: Args, cli: Args) -> Args {
        // Optional options
        if cli.block_size.is_some() { file.block_size = cli.block_size; }
        if cli.config.is_some() { file.config = cli.config; }
        if cli.color != ColorWhen::Auto { file.color = cli.color; }

        // The listed path always comes from the command line
        file.path = cli.path;

        // Boolean fields: if true in CLI → override
        macro_rules! merge_flag {
            ($field:ident) => {
                if cli.$field {
                    file.$field = true;
                }
            };
        }

        merge_flag!(all);
        merge_flag!(almost_all);
        merge_flag!(author);
        merge_flag!(escape);
        merge_flag!(ignore_backups);
        merge_flag!(long);
        merge_flag!(sort_time);
        merge_flag!(kibibytes);

        file
    }

    /// Resolves everything the listing needs into one immutable value.
    pub fn to_list_options(&self) -> ListOptions {
        ListOptions {
            path: self.path.clone(),
            all: self.all,
            almost_all: self.almost_all,
            author: self.author,
            escape: self.escape,
            ignore_backups: self.ignore_backups,
            long_format: self.long,
            sort: if self.sort_time { sort::SortType::Modified } else { sort::SortType::Directory },
            block_size: self.block_size.map_or(format::BlockSize::None, Into::into),
            kibibytes: self.kibibytes,
            colorize: self.color.should_colorize(),
        }
    }
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
pub enum BlockSize {
    #[value(name = "K", alias = "k")]
    K,
    #[value(name = "M", alias = "m")]
    M,
    #[value(name = "G", alias = "g")]
    G,
    #[value(name = "T", alias = "t")]
    T,
}

impl From<BlockSize> for format::BlockSize {
    fn from(block_size: BlockSize) -> Self {
        match block_size {
            BlockSize::K => format::BlockSize::K,
            BlockSize::M => format::BlockSize::M,
            BlockSize::G => format::BlockSize::G,
            BlockSize::T => format::BlockSize::T,
        }
    }
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorWhen {
    Always,
    #[default]
    Auto,
    Never,
}

impl ColorWhen {
    /// `auto` colors only a terminal, and only when `NO_COLOR` is unset.
    pub fn should_colorize(self) -> bool {
        match self {
            ColorWhen::Always => true,
            ColorWhen::Never => false,
            ColorWhen::Auto => {
                std::env::var_os("NO_COLOR").is_none_or(|v| v.is_empty())
                    && std::io::stdout().is_terminal()
            }
        }
    }
}

impl fmt::Display for ColorWhen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_possible_value().expect("no values are skipped").get_name().fmt(f)
    }
}
