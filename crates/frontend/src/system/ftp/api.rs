//! FTP configurations (plain CRUD) and the remote file operations the
//! backend performs on their behalf. Transfers are never retried.

use contracts::domain::common::RecordId;
use contracts::system::ftp::{FtpActionResponse, FtpConfig, FtpListing};

use crate::shared::api_utils::endpoint_url;
use crate::shared::entity_client::{use_entity_api, EntityClient};
use crate::shared::export::download_bytes;
use crate::shared::http;

pub fn use_ftp_config_api() -> EntityClient<FtpConfig> {
    use_entity_api::<FtpConfig>()
}

/// `/api/ftp/{config}/{action}?path=...`
pub fn ftp_url(config_id: RecordId, action: &str, path: &str) -> String {
    format!(
        "{}/{}/{}?path={}",
        endpoint_url("ftp"),
        config_id,
        action,
        urlencoding::encode(path)
    )
}

fn into_result(response: FtpActionResponse, fallback: &str) -> Result<String, String> {
    let message = response.message.unwrap_or_else(|| fallback.to_string());
    if response.success {
        Ok(message)
    } else {
        Err(message)
    }
}

pub async fn list_files(config_id: RecordId, path: &str) -> Result<FtpListing, String> {
    let listing: FtpListing = http::get_json(&ftp_url(config_id, "files", path)).await?;
    Ok(listing.sorted())
}

/// Upload into directory `dir`; returns the server's message
pub async fn upload(config_id: RecordId, dir: &str, file: web_sys::File) -> Result<String, String> {
    let form = web_sys::FormData::new().map_err(|e| format!("Failed to build form: {:?}", e))?;
    form.append_with_blob_and_filename("file", &file, &file.name())
        .map_err(|e| format!("Failed to attach file: {:?}", e))?;
    let response: FtpActionResponse = http::post_form(&ftp_url(config_id, "upload", dir), form).await?;
    into_result(response, "Archivo subido")
}

/// Fetch a remote file and hand it to the browser as a download
pub async fn download(config_id: RecordId, path: &str, filename: &str) -> Result<(), String> {
    let bytes = http::get_bytes(&ftp_url(config_id, "download", path)).await?;
    download_bytes(&bytes, filename)
}

pub async fn delete_file(config_id: RecordId, path: &str) -> Result<String, String> {
    let response: FtpActionResponse = http::delete_json(&ftp_url(config_id, "files", path)).await?;
    into_result(response, "Archivo eliminado")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_is_encoded() {
        let url = ftp_url(3, "files", "/planos/obra nueva");
        assert!(url.ends_with("/api/ftp/3/files?path=%2Fplanos%2Fobra%20nueva"));
    }

    #[test]
    fn test_action_response() {
        let failed = FtpActionResponse {
            success: false,
            message: Some("Permiso denegado".into()),
        };
        assert_eq!(into_result(failed, "x"), Err("Permiso denegado".to_string()));
        let ok = FtpActionResponse {
            success: true,
            message: None,
        };
        assert_eq!(into_result(ok, "Archivo subido"), Ok("Archivo subido".to_string()));
    }
}
