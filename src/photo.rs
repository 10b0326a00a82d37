//! Photo Reading
//!
//! Reads a selected image file into a data URI. The callback-based
//! `FileReader` is wrapped in a promise so the read is a single future.

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FileReader, HtmlInputElement};

/// First file selected in a file input, if any
pub fn selected_file(input: &HtmlInputElement) -> Option<File> {
    input.files().and_then(|files| files.get(0))
}

/// Read `file` as a `data:` URI
pub async fn read_as_data_url(file: &File) -> Result<String, JsValue> {
    let reader = FileReader::new()?;
    let loaded = js_sys::Promise::new(&mut |resolve, reject| {
        reader.set_onload(Some(&resolve));
        reader.set_onerror(Some(&reject));
    });
    reader.read_as_data_url(file)?;
    JsFuture::from(loaded).await?;

    reader
        .result()?
        .as_string()
        .ok_or_else(|| JsValue::from_str("FileReader result is not a string"))
}
