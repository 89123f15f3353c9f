use crate::errors::DashboardError;
use crate::roster::Row;
use std::fs;
use std::path::Path;

/// UTF-8 signature so spreadsheet tools detect the encoding
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

pub const HEADERS: [&str; 5] = ["Account", "Username", "Password", "Domain", "Endpoint"];

/// Serialize rows as CSV, prefixed with the UTF-8 BOM
pub fn to_csv_bytes<'a, I>(rows: I) -> Result<Vec<u8>, DashboardError>
where
    I: IntoIterator<Item = &'a Row>,
{
    let mut writer = csv::Writer::from_writer(UTF8_BOM.to_vec());
    writer
        .write_record(HEADERS)
        .map_err(|e| DashboardError::Export(e.to_string()))?;
    for row in rows {
        writer
            .write_record(row.fields())
            .map_err(|e| DashboardError::Export(e.to_string()))?;
    }
    writer
        .into_inner()
        .map_err(|e| DashboardError::Export(e.to_string()))
}

/// Write rows to `path`, returning how many were written
pub fn write_csv<'a, I>(path: &Path, rows: I) -> Result<usize, DashboardError>
where
    I: IntoIterator<Item = &'a Row>,
{
    let rows: Vec<&Row> = rows.into_iter().collect();
    let bytes = to_csv_bytes(rows.iter().copied())?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| DashboardError::Export(e.to_string()))?;
    }
    fs::write(path, bytes).map_err(|e| DashboardError::Export(format!("{}: {}", path.display(), e)))?;
    tracing::info!(path = %path.display(), rows = rows.len(), "exported roster");
    Ok(rows.len())
}

/// Read an export back into rows. Empty credential cells become `None`.
pub fn read_csv(bytes: &[u8]) -> Result<Vec<Row>, DashboardError> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let mut reader = csv::Reader::from_reader(bytes);
    let mut rows = Vec::new();

    for record in reader.records() {
        let record = record.map_err(|e| DashboardError::Export(e.to_string()))?;
        if record.len() != HEADERS.len() {
            return Err(DashboardError::Export(format!(
                "expected {} columns, found {}",
                HEADERS.len(),
                record.len()
            )));
        }
        let optional = |i: usize| Some(record[i].to_string()).filter(|s| !s.is_empty());
        rows.push(Row {
            account_name: record[0].to_string(),
            login: optional(1),
            secret: optional(2),
            domain: record[3].to_string(),
            endpoint_base: record[4].to_string(),
        });
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_starts_with_bom_and_header() {
        let bytes = to_csv_bytes(std::iter::empty::<&Row>()).unwrap();
        assert!(bytes.starts_with(UTF8_BOM));
        let text = std::str::from_utf8(&bytes[UTF8_BOM.len()..]).unwrap();
        assert_eq!(text.trim_end(), "Account,Username,Password,Domain,Endpoint");
    }

    #[test]
    fn test_fields_with_commas_and_quotes_are_quoted() {
        let row = Row {
            account_name: "Smith, \"Jr\"".into(),
            login: Some("ünïcode".into()),
            secret: None,
            domain: "h.tv".into(),
            endpoint_base: "http://h.tv:80".into(),
        };
        let bytes = to_csv_bytes([&row]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("\"Smith, \"\"Jr\"\"\",ünïcode,,h.tv,http://h.tv:80"));
    }

    #[test]
    fn test_read_rejects_wrong_column_count() {
        let err = read_csv(b"a,b\n1,2\n").unwrap_err();
        assert!(matches!(err, DashboardError::Export(_)));
    }
}
