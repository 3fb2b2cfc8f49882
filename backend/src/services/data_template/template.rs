use common::model::field::TemplateEntry;
use log::warn;
use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Could not read the data template: {0}")]
    Io(#[from] std::io::Error),
    #[error("Could not parse the data template: {0}")]
    Csv(#[from] csv::Error),
}

/// Returns the template rows whose name is one of `names`, in file order.
///
/// Names are compared exactly. A missing template file yields no rows;
/// rows that are too short or carry a non-numeric code are skipped.
pub fn find_entries(path: &Path, names: &[String]) -> Result<Vec<TemplateEntry>, TemplateError> {
    let file = match std::fs::File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    let wanted: HashSet<&str> = names.iter().map(String::as_str).collect();
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut entries = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record?;
        let (Some(name), Some(label), Some(code)) = (record.get(0), record.get(1), record.get(2))
        else {
            warn!("Skipping short data template row {}", line + 1);
            continue;
        };
        if !wanted.contains(name) {
            continue;
        }
        match code.trim().parse() {
            Ok(code) => entries.push(TemplateEntry {
                name: name.to_string(),
                label: label.to_string(),
                code,
            }),
            Err(_) => warn!("Skipping data template row {} with code {:?}", line + 1, code),
        }
    }

    Ok(entries)
}

/// Folds the field types of a validated build into the template.
///
/// A row whose name matches a submitted entry exactly is replaced when its
/// label or code differ; names the template does not know yet are appended.
/// The file is rewritten only when something changed, and is created if it
/// does not exist. Returns the number of rows replaced or appended.
pub fn merge_entries(path: &Path, submitted: &[TemplateEntry]) -> Result<usize, TemplateError> {
    let mut rows = read_rows(path)?;
    let mut changed = 0;

    for entry in submitted {
        let wanted = [entry.name.clone(), entry.label.clone(), entry.code.to_string()];
        let mut known = false;
        for row in rows.iter_mut().filter(|row| row.first() == Some(&entry.name)) {
            known = true;
            if row[1..] != wanted[1..] {
                *row = wanted.to_vec();
                changed += 1;
            }
        }
        if !known {
            rows.push(wanted.to_vec());
            changed += 1;
        }
    }

    if changed > 0 {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)?;
        for row in &rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
    }

    Ok(changed)
}

/// Every template row as raw strings, short or malformed rows included.
fn read_rows(path: &Path) -> Result<Vec<Vec<String>>, TemplateError> {
    let file = match std::fs::File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut rows = Vec::new();
    for record in reader.records() {
        rows.push(record?.iter().map(str::to_string).collect());
    }
    Ok(rows)
}
