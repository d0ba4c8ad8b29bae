use crate::common::collect::{self, Listing};
use crate::common::entry::DirEntry;
use crate::common::options::ListOptions;
use crate::common::sort;
use crate::common::source::MetadataSource;
use crate::utils::{dir, format};
use colored::Colorize;
use std::io::{self, Write};

/// How each entry is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Names only, on one line.
    Short,
    /// One detailed line per entry, like `ls -l`.
    Long,
}

impl Layout {
    pub fn from_options(options: &ListOptions) -> Self {
        if options.long_format { Self::Long } else { Self::Short }
    }
}

/// Runs the listing: collect, sort and print to stdout
pub fn run(source: &impl MetadataSource, options: &ListOptions) -> anyhow::Result<()> {
    // ─────────────── Data preparation ───────────────
    let mut listing = collect::collect(source, options)?;
    sort::sort_entries(&mut listing.entries, options.sort);

    // ─────────────── Print ───────────────
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    render(&mut out, &listing, options)?;
    out.flush()?;

    Ok(())
}

/// Writes `listing` to `out` in the layout selected by `options`.
pub fn render<W: Write>(out: &mut W, listing: &Listing, options: &ListOptions) -> io::Result<()> {
    match Layout::from_options(options) {
        Layout::Short => {
            for entry in &listing.entries {
                write!(out, "{}  ", style_entry_name(entry, options.colorize))?;
            }
            writeln!(out)
        }
        Layout::Long => {
            for entry in &listing.entries {
                write_long(out, entry, listing.max_size_width, options)?;
            }
            Ok(())
        }
    }
}

fn write_long<W: Write>(
    out: &mut W,
    entry: &DirEntry,
    size_width: usize,
    options: &ListOptions,
) -> io::Result<()> {
    let size = format::format_size(entry.size, options.block_size, options.kibibytes);

    write!(
        out,
        "{} {} {} {} ",
        dir::permission_string(entry.mode, entry.is_dir),
        entry.nlink,
        entry.user,
        entry.group
    )?;

    // ls reports the owner as author
    if options.author {
        write!(out, "{} ", entry.user)?;
    }

    writeln!(
        out,
        "{size:>size_width$}{} {} {}",
        options.block_size.label(),
        entry.modified.format("%b %d %H:%M"),
        style_entry_name(entry, options.colorize)
    )
}

#[inline]
fn style_entry_name(entry: &DirEntry, colorize: bool) -> String {
    if !colorize {
        return entry.name.clone();
    }

    if entry.is_dir {
        entry.name.bright_blue().bold().to_string()
    } else {
        entry.name.normal().to_string()
    }
}
