//! # Spreadsheet Ingestion
//!
//! Reads the product spreadsheet (CSV) into normalized [`ProductRecord`]s.
//!
//! Header matching is forgiving: headers are lowercased, stripped of
//! accents, and have dots and spaces collapsed to underscores before being
//! matched against a synonym table, so `CODIGO`, `Código` and `codigo `
//! all resolve to the same column. The code and description columns are
//! required; everything else degrades to the empty string.
//!
//! Cell values of `nan`/`NaN` are treated as blank — spreadsheets exported
//! through other tooling often serialize missing cells that way.

use std::io::Read;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::CatalogError;
use crate::model::ProductRecord;

/// Resolved column positions inside one spreadsheet.
#[derive(Debug, Default)]
struct ColumnMap {
    code: Option<usize>,
    description: Option<usize>,
    image: Option<usize>,
    unit: Option<usize>,
    bulk_unit: Option<usize>,
    sale_unit: Option<usize>,
}

impl ColumnMap {
    fn resolve(headers: &csv::StringRecord) -> Self {
        let mut map = Self::default();
        for (idx, raw) in headers.iter().enumerate() {
            let slot = match normalize_header(raw).as_str() {
                "codigo" | "cod" | "code" => &mut map.code,
                "descripcion" | "desc" | "producto" | "nombre" => &mut map.description,
                "imagen" | "img" | "image" | "foto" => &mut map.image,
                "und" | "unidad" | "precio_und" => &mut map.unit,
                "bulto" | "und_bulto" | "precio_bulto" => &mut map.bulk_unit,
                "und_venta" | "unidad_venta" | "venta" => &mut map.sale_unit,
                _ => continue,
            };
            // First matching header wins.
            if slot.is_none() {
                *slot = Some(idx);
            }
        }
        map
    }
}

/// Load product records from a CSV file, resolving image names against
/// `image_dir`.
pub fn load_records(path: &Path, image_dir: &Path) -> Result<Vec<ProductRecord>, CatalogError> {
    let reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;
    read_records(reader, image_dir)
}

/// Load product records from any CSV source. Split out so tests can feed
/// in-memory data.
pub fn read_records<R: Read>(
    mut reader: csv::Reader<R>,
    image_dir: &Path,
) -> Result<Vec<ProductRecord>, CatalogError> {
    let columns = ColumnMap::resolve(reader.headers()?);
    if columns.code.is_none() {
        return Err(CatalogError::MissingColumn("CODIGO"));
    }
    if columns.description.is_none() {
        return Err(CatalogError::MissingColumn("DESCRIPCION"));
    }

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for row in reader.records() {
        let row = row?;
        let cell = |idx: Option<usize>| clean_cell(idx.and_then(|i| row.get(i)).unwrap_or(""));

        let code = cell(columns.code);
        let description = cell(columns.description);
        // A row with neither code nor description is padding, not a product.
        if code.is_empty() && description.is_empty() {
            skipped += 1;
            continue;
        }

        let image_name = cell(columns.image);
        let image = if image_name.is_empty() {
            PathBuf::new()
        } else {
            image_dir.join(image_name)
        };

        records.push(ProductRecord {
            code,
            description,
            image,
            unit: cell(columns.unit),
            bulk_unit: cell(columns.bulk_unit),
            sale_unit: cell(columns.sale_unit),
        });
    }

    debug!(
        "ingested {} record(s), skipped {} blank row(s)",
        records.len(),
        skipped
    );
    Ok(records)
}

/// Normalize a header cell for synonym matching: lowercase, fold accents,
/// collapse dots and spaces to underscores.
fn normalize_header(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.trim().chars().flat_map(char::to_lowercase) {
        let folded = match ch {
            'á' => 'a',
            'é' => 'e',
            'í' => 'i',
            'ó' => 'o',
            'ú' | 'ü' => 'u',
            'ñ' => 'n',
            '.' | ' ' => '_',
            other => other,
        };
        if folded == '_' && out.ends_with('_') {
            continue;
        }
        out.push(folded);
    }
    out
}

/// Trim a cell and blank out `nan` markers.
fn clean_cell(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("nan") {
        String::new()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(csv_text: &str) -> Result<Vec<ProductRecord>, CatalogError> {
        let reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(csv_text.as_bytes());
        read_records(reader, Path::new("imagenes"))
    }

    #[test]
    fn test_reads_basic_rows() {
        let records = read(
            "CODIGO,DESCRIPCION,IMAGEN,UND,BULTO,UND.VENTA\n\
             B-001,BOLSA 20x30,bolsa.png,0.5,45,PAQUETE x100\n\
             B-002,GUANTE NITRILO,,1.2,,CAJA x50\n",
        )
        .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].code, "B-001");
        assert_eq!(records[0].description, "BOLSA 20x30");
        assert_eq!(records[0].image, Path::new("imagenes").join("bolsa.png"));
        assert_eq!(records[0].unit, "0.5");
        assert_eq!(records[0].sale_unit, "PAQUETE x100");
        assert_eq!(records[1].image, PathBuf::new());
        assert_eq!(records[1].bulk_unit, "");
    }

    #[test]
    fn test_headers_match_through_accents_and_case() {
        let records = read(
            "Código,Descripción,Imagen,Und,Bulto,Und. Venta\n\
             X-1,CINTA ADHESIVA,cinta.png,2,20,ROLLO\n",
        )
        .unwrap();
        assert_eq!(records[0].code, "X-1");
        assert_eq!(records[0].sale_unit, "ROLLO");
    }

    #[test]
    fn test_missing_code_column_is_fatal() {
        let err = read("DESCRIPCION\nBOLSA\n").unwrap_err();
        assert!(matches!(err, CatalogError::MissingColumn("CODIGO")));
    }

    #[test]
    fn test_missing_description_column_is_fatal() {
        let err = read("CODIGO\nB-001\n").unwrap_err();
        assert!(matches!(err, CatalogError::MissingColumn("DESCRIPCION")));
    }

    #[test]
    fn test_nan_cells_become_empty() {
        let records = read(
            "CODIGO,DESCRIPCION,IMAGEN,UND\n\
             B-001,BOLSA,NaN,nan\n",
        )
        .unwrap();
        assert_eq!(records[0].image, PathBuf::new());
        assert_eq!(records[0].unit, "");
    }

    #[test]
    fn test_blank_rows_are_skipped() {
        let records = read(
            "CODIGO,DESCRIPCION\n\
             ,\n\
             B-001,BOLSA\n\
             nan,nan\n",
        )
        .unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_short_rows_pad_with_empty() {
        let records = read(
            "CODIGO,DESCRIPCION,IMAGEN,UND\n\
             B-001,BOLSA\n",
        )
        .unwrap();
        assert_eq!(records[0].unit, "");
        assert_eq!(records[0].image, PathBuf::new());
    }

    #[test]
    fn test_row_order_is_preserved() {
        let records = read(
            "CODIGO,DESCRIPCION\n\
             C-3,TRES\n\
             C-1,UNO\n\
             C-2,DOS\n",
        )
        .unwrap();
        let codes: Vec<&str> = records.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, ["C-3", "C-1", "C-2"]);
    }

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header(" UND. VENTA "), "und_venta");
        assert_eq!(normalize_header("Código"), "codigo");
    }
}
