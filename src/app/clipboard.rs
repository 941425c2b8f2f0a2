//! Copy-to-clipboard for instance credentials.

/// Write `text` to the system clipboard.
pub async fn copy_text(text: &str) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
        let promise = window.navigator().clipboard().write_text(text);
        wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| format!("{:?}", e))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = text;
        Err("clipboard is only available in the browser".to_string())
    }
}
