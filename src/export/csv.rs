//! CSV export of slide rows.
//!
//! Columns: `slide_number,title,text_content,shape_count,image_count,
//! image_files,tags,notes`. List columns are joined with [`LIST_SEPARATOR`];
//! a missing value is an empty field. Fields holding a comma, quote or line
//! break are quoted, with quotes doubled.

use super::timestamped_file_name;
use crate::common::{Error, Result};
use crate::inspect::{Analysis, SlideRecord};
use chrono::Local;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tracing::info;

pub const LIST_SEPARATOR: &str = " | ";

pub const HEADER: [&str; 8] = [
    "slide_number",
    "title",
    "text_content",
    "shape_count",
    "image_count",
    "image_files",
    "tags",
    "notes",
];

const DELIMITER: char = ',';
const QUOTE: char = '"';

/// The flattened columns of one slide.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvSlideRow {
    pub slide_number: usize,
    pub title: Option<String>,
    pub text_content: Vec<String>,
    pub shape_count: usize,
    pub image_count: usize,
    pub image_files: Vec<String>,
    pub tags: Vec<String>,
    pub notes: Option<String>,
}

impl From<&SlideRecord> for CsvSlideRow {
    fn from(slide: &SlideRecord) -> Self {
        Self {
            slide_number: slide.slide_number,
            title: slide.title.clone(),
            text_content: slide.text_content.clone(),
            shape_count: slide.shape_count,
            image_count: slide.image_count,
            image_files: slide.image_files.clone(),
            tags: slide.tags.clone(),
            notes: slide.notes.clone(),
        }
    }
}

impl CsvSlideRow {
    fn fields(&self) -> [String; 8] {
        [
            self.slide_number.to_string(),
            self.title.clone().unwrap_or_default(),
            self.text_content.join(LIST_SEPARATOR),
            self.shape_count.to_string(),
            self.image_count.to_string(),
            self.image_files.join(LIST_SEPARATOR),
            self.tags.join(LIST_SEPARATOR),
            self.notes.clone().unwrap_or_default(),
        ]
    }

    fn from_fields(fields: Vec<String>, line: usize) -> Result<Self> {
        let [slide_number, title, text_content, shape_count, image_count, image_files, tags, notes]: [String; 8] =
            fields.try_into().map_err(|fields: Vec<String>| Error::Csv {
                line,
                message: format!("expected {} fields, found {}", HEADER.len(), fields.len()),
            })?;

        Ok(Self {
            slide_number: parse_count(&slide_number, "slide_number", line)?,
            title: non_empty(title),
            text_content: split_list(&text_content),
            shape_count: parse_count(&shape_count, "shape_count", line)?,
            image_count: parse_count(&image_count, "image_count", line)?,
            image_files: split_list(&image_files),
            tags: split_list(&tags),
            notes: non_empty(notes),
        })
    }
}

fn parse_count(field: &str, column: &str, line: usize) -> Result<usize> {
    atoi_simd::parse::<u32>(field.as_bytes())
        .map(|n| n as usize)
        .map_err(|_| Error::Csv {
            line,
            message: format!("{} is not a number: {:?}", column, field),
        })
}

fn non_empty(field: String) -> Option<String> {
    (!field.is_empty()).then_some(field)
}

fn split_list(field: &str) -> Vec<String> {
    if field.is_empty() {
        return Vec::new();
    }
    field.split(LIST_SEPARATOR).map(str::to_string).collect()
}

fn write_field<W: Write>(writer: &mut W, field: &str) -> Result<()> {
    let needs_quote = field.contains(DELIMITER)
        || field.contains(QUOTE)
        || field.contains('\n')
        || field.contains('\r');
    if needs_quote {
        let escaped = field.replace(QUOTE, "\"\"");
        write!(writer, "{0}{1}{0}", QUOTE, escaped)?;
    } else {
        writer.write_all(field.as_bytes())?;
    }
    Ok(())
}

fn write_row<W: Write, S: AsRef<str>>(writer: &mut W, fields: &[S]) -> Result<()> {
    for (idx, field) in fields.iter().enumerate() {
        if idx > 0 {
            write!(writer, "{}", DELIMITER)?;
        }
        write_field(writer, field.as_ref())?;
    }
    writer.write_all(b"\n")?;
    Ok(())
}

/// Write the header and one row per slide.
pub fn write_slides<W: Write>(slides: &[SlideRecord], writer: &mut W) -> Result<()> {
    write_row(writer, &HEADER)?;
    for slide in slides {
        write_row(writer, &CsvSlideRow::from(slide).fields())?;
    }
    Ok(())
}

/// Write the slide rows of `analysis` into `dir`, creating it if needed.
pub fn export_csv(analysis: &Analysis, dir: &Path, file_name: Option<&str>) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(file_name.map(str::to_string).unwrap_or_else(|| {
        timestamped_file_name(&analysis.metadata.filename, "slides", "csv", Local::now())
    }));

    let mut writer = BufWriter::new(File::create(&path)?);
    write_slides(&analysis.slides, &mut writer)?;
    writer.flush()?;

    info!(path = %path.display(), rows = analysis.slides.len(), "exported CSV");
    Ok(path)
}

/// Parse rows written by [`write_slides`]. The header line is checked and
/// skipped.
pub fn read_rows<R: Read>(mut reader: R) -> Result<Vec<CsvSlideRow>> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    let input = input.strip_prefix('\u{feff}').unwrap_or(&input);

    let mut records = parse_records(input)?.into_iter();
    match records.next() {
        Some((_, header)) if header == HEADER => {}
        Some((line, header)) => {
            return Err(Error::Csv {
                line,
                message: format!("unexpected header: {}", header.join(",")),
            });
        }
        None => return Ok(Vec::new()),
    }

    records
        .map(|(line, fields)| CsvSlideRow::from_fields(fields, line))
        .collect()
}

/// Split `input` into records, each tagged with the line it starts on.
fn parse_records(input: &str) -> Result<Vec<(usize, Vec<String>)>> {
    let mut records = Vec::new();
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut line = 1;
    let mut record_line = 1;
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            QUOTE if in_quotes => {
                if chars.peek() == Some(&QUOTE) {
                    // Doubled quote
                    field.push(QUOTE);
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            QUOTE if field.is_empty() => in_quotes = true,
            '\n' if in_quotes => {
                field.push(c);
                line += 1;
            }
            '\n' => {
                fields.push(std::mem::take(&mut field));
                records.push((record_line, std::mem::take(&mut fields)));
                line += 1;
                record_line = line;
            }
            // CRLF: the LF ends the record
            '\r' if !in_quotes && chars.peek() == Some(&'\n') => {}
            DELIMITER if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err(Error::Csv {
            line: record_line,
            message: "unterminated quoted field".to_string(),
        });
    }
    if !field.is_empty() || !fields.is_empty() {
        fields.push(field);
        records.push((record_line, fields));
    }
    Ok(records)
}
