//! Output formatting for inspected paths.
//!
//! Records are printed one path at a time. The text format lines up the
//! selected columns across all records of a path; JSON and CSV emit every
//! field so that scripts don't need to pick columns up front.

use crate::error::CliError;
use clap::ValueEnum;
use lsi::path::clean;
use lsi::{Error, Record};
use std::io::Write;
use std::path::PathBuf;

/// Shown in the mount column for elements on a different device than their
/// parent.
pub const MOUNT_POINT_SYMBOL: &str = "@";

/// Column headers for CSV output.
const COLUMN_HEADERS: [&str; 15] = [
    "root",
    "path",
    "name",
    "depth",
    "link",
    "mode",
    "owner",
    "group",
    "size",
    "inode",
    "device",
    "parent_device",
    "mount_point",
    "volume",
    "error",
];

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned columns followed by the indented name (human-readable)
    Text,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}

/// Which optional columns the text format prints, in display order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Columns {
    /// Type and permissions.
    pub mode: bool,
    /// Owner name.
    pub user: bool,
    /// Group name.
    pub group: bool,
    /// Size in bytes.
    pub size: bool,
    /// Inode number.
    pub inode: bool,
    /// Mount point marker.
    pub mount: bool,
}

impl Columns {
    /// The `-l` selection: everything but the inode.
    pub fn long() -> Self {
        Self {
            mode: true,
            user: true,
            group: true,
            size: true,
            inode: false,
            mount: true,
        }
    }

    /// Toggle the inode column.
    #[must_use]
    pub fn with_inode(mut self, inode: bool) -> Self {
        self.inode = inode;
        self
    }
}

/// Widest value of each variable-width column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Widths {
    mode: usize,
    user: usize,
    group: usize,
    size: usize,
    inode: usize,
}

impl Widths {
    /// Measure every column over `records`.
    pub fn measure(records: &[Record]) -> Self {
        records.iter().fold(Self::default(), |w, r| Self {
            mode: w.mode.max(r.mode().len()),
            user: w.user.max(r.owner_name().len()),
            group: w.group.max(r.group_name().len()),
            size: w.size.max(r.size().to_string().len()),
            inode: w.inode.max(r.inode().to_string().len()),
        })
    }
}

/// The records of one walked path.
#[derive(Debug)]
pub struct Section {
    /// The path as given on the command line.
    pub root: PathBuf,
    /// Every record produced, ending with the failed one if the walk failed.
    pub records: Vec<Record>,
    /// Why the walk of this path stopped early.
    pub error: Option<Error>,
}

/// Text layout settings.
#[derive(Debug, Clone, Copy)]
pub struct TextStyle {
    /// Columns to print.
    pub columns: Columns,
    /// Whether symlinks were followed; controls indentation and `-> target`.
    pub follow: bool,
    /// Spaces per level of symlink depth.
    pub indent_width: usize,
}

/// Write `sections` in `format`.
pub fn write_sections<W: Write>(
    out: &mut W,
    sections: &[Section],
    format: OutputFormat,
    style: &TextStyle,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => write_text(out, sections, style)?,
        OutputFormat::Json => write_json(out, sections)?,
        OutputFormat::Csv => write_csv(out, sections)?,
    }
    Ok(())
}

/// Print sections as aligned text, with `-- path` headers when there is more
/// than one.
pub fn write_text<W: Write>(
    out: &mut W,
    sections: &[Section],
    style: &TextStyle,
) -> std::io::Result<()> {
    let multiple = sections.len() > 1;
    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        if multiple {
            writeln!(out, "-- {}", clean(&section.root).display())?;
        }

        let widths = Widths::measure(&section.records);
        for record in &section.records {
            let line = match record.error() {
                Some(err) => format_error(record, err),
                None => format_line(record, style, &widths),
            };
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}

/// One aligned output line for a successfully inspected record.
pub fn format_line(record: &Record, style: &TextStyle, widths: &Widths) -> String {
    let columns = style.columns;
    let mut fields: Vec<String> = Vec::with_capacity(7);

    if columns.mode {
        fields.push(format!("{:>w$}", record.mode(), w = widths.mode));
    }
    if columns.user {
        fields.push(format!("{:>w$}", record.owner_name(), w = widths.user));
    }
    if columns.group {
        fields.push(format!("{:>w$}", record.group_name(), w = widths.group));
    }
    if columns.size {
        fields.push(format!("{:>w$}", record.size(), w = widths.size));
    }
    if columns.inode {
        fields.push(format!("{:>w$}", record.inode(), w = widths.inode));
    }
    if columns.mount {
        let marker = if record.is_mount_point() {
            MOUNT_POINT_SYMBOL
        } else {
            ""
        };
        fields.push(format!("{marker:>w$}", w = MOUNT_POINT_SYMBOL.len()));
    }

    let name = if style.follow {
        record.display_name(style.indent_width, true)
    } else {
        record.name().to_string()
    };
    fields.push(name);
    fields.join(" ")
}

/// The line printed for a record that failed.
pub fn format_error(record: &Record, err: &Error) -> String {
    match (err.path(), err.io_error()) {
        (Some(path), Some(cause)) => {
            format!(" * {} ({}): {cause}", record.name(), path.display())
        }
        _ => format!(" * {}: {err}", record.name()),
    }
}

/// Print sections as a JSON array of `{root, records, error}` objects.
pub fn write_json<W: Write>(out: &mut W, sections: &[Section]) -> Result<(), CliError> {
    let mut json_data = Vec::with_capacity(sections.len());
    for section in sections {
        let mut records = Vec::with_capacity(section.records.len());
        for record in &section.records {
            let mut value = serde_json::to_value(record)?;
            if let Some(object) = value.as_object_mut() {
                object.insert(
                    "mount_point".into(),
                    serde_json::Value::Bool(record.error().is_none() && record.is_mount_point()),
                );
            }
            records.push(value);
        }

        json_data.push(serde_json::json!({
            "root": section.root.display().to_string(),
            "records": records,
            "error": section.error.as_ref().map(ToString::to_string),
        }));
    }

    serde_json::to_writer_pretty(&mut *out, &json_data)?;
    writeln!(out)?;
    Ok(())
}

/// Print every record as a CSV row, prefixed by the path it came from.
pub fn write_csv<W: Write>(out: &mut W, sections: &[Section]) -> Result<(), CliError> {
    let mut writer = csv::WriterBuilder::new().from_writer(out);
    writer.write_record(COLUMN_HEADERS)?;

    for section in sections {
        let root = section.root.display().to_string();
        for record in &section.records {
            writer.write_record(&[
                root.clone(),
                record.path().display().to_string(),
                record.name().to_string(),
                record.depth().to_string(),
                record
                    .link()
                    .map(|l| l.display().to_string())
                    .unwrap_or_default(),
                record.mode().to_string(),
                record.owner_name().to_string(),
                record.group_name().to_string(),
                record.size().to_string(),
                record.inode().to_string(),
                record.device().to_string(),
                record.parent_device().to_string(),
                (record.error().is_none() && record.is_mount_point()).to_string(),
                record.volume().to_string(),
                record.error().map(ToString::to_string).unwrap_or_default(),
            ])?;
        }
    }

    writer.flush()?;
    Ok(())
}
