//! CSV export and browser downloads.
//!
//! Files are built in memory, wrapped in a `Blob` and saved through a
//! temporary anchor element.

use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Rows that can be written to a CSV file
pub trait CsvExportable {
    fn headers() -> Vec<&'static str>;

    fn to_csv_row(&self) -> Vec<String>;
}

const SEPARATOR: &str = ";";

/// CSV text with a UTF-8 BOM (so spreadsheet tools detect the accents) and
/// `;` separators.
pub fn build_csv<T: CsvExportable>(data: &[T]) -> String {
    let mut content = String::from('\u{FEFF}');
    content.push_str(&T::headers().join(SEPARATOR));
    content.push('\n');
    for item in data {
        let row: Vec<String> = item
            .to_csv_row()
            .iter()
            .map(|cell| escape_csv_cell(cell))
            .collect();
        content.push_str(&row.join(SEPARATOR));
        content.push('\n');
    }
    content
}

/// Build the CSV for `data` and start the download
pub fn export_csv<T: CsvExportable>(data: &[T], filename: &str) -> Result<(), String> {
    if data.is_empty() {
        return Err("No hay datos para exportar".to_string());
    }
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(&build_csv(data)));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");
    let blob = Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))?;
    download_blob(&blob, filename)
}

/// Save raw bytes (an FTP download) under `filename`
pub fn download_bytes(bytes: &[u8], filename: &str) -> Result<(), String> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes).into());

    let properties = BlobPropertyBag::new();
    properties.set_type("application/octet-stream");
    let blob = Blob::new_with_u8_array_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))?;
    download_blob(&blob, filename)
}

/// Quote a cell containing the separator, quotes or line breaks
fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(';') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(&'static str, f64);

    impl CsvExportable for Row {
        fn headers() -> Vec<&'static str> {
            vec!["Concepto", "Importe"]
        }

        fn to_csv_row(&self) -> Vec<String> {
            vec![self.0.to_string(), format!("{:.2}", self.1)]
        }
    }

    #[test]
    fn test_escape_csv_cell() {
        assert_eq!(escape_csv_cell("Cuota mensual"), "Cuota mensual");
        assert_eq!(escape_csv_cell("a;b"), "\"a;b\"");
        assert_eq!(escape_csv_cell("dijo \"hola\""), "\"dijo \"\"hola\"\"\"");
    }

    #[test]
    fn test_build_csv() {
        let csv = build_csv(&[Row("Fibra 1 Gbps", 120.0), Row("Alta; instalación", 50.5)]);
        assert_eq!(
            csv,
            "\u{FEFF}Concepto;Importe\nFibra 1 Gbps;120.00\n\"Alta; instalación\";50.50\n"
        );
    }
}
