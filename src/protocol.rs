use crate::constants::{FORM_CONTENT_TYPE, READ_CHUNK_SIZE};
use crate::error::{CvmsError, Result};
use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use std::time::Duration;
use strum_macros::AsRefStr;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

/// Characters left untouched when encoding form values, everything else is `%XX`.
const FORM_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

/// Address and credentials of a single camera.
#[derive(Clone)]
pub struct Target {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
}

impl Target {
    pub fn basic_auth(&self) -> String {
        BASE64.encode(format!("{}:{}", self.username, self.password))
    }
}

impl std::fmt::Debug for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Target")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
pub enum Method {
    #[strum(serialize = "GET")]
    Get,
    #[strum(serialize = "POST")]
    Post,
}

impl Method {
    /// Reads go out as HTTP/1.0, the form write as HTTP/1.1.
    pub fn version(&self) -> &'static str {
        match self {
            Method::Get => "HTTP/1.0",
            Method::Post => "HTTP/1.1",
        }
    }
}

/// Builds the complete request text, headers and optional form body included.
pub fn build_request(target: &Target, method: Method, path: &str, body: Option<&str>) -> String {
    let mut request = format!(
        "{} {} {}\r\nHost: {}\r\nAuthorization: Basic {}\r\n",
        method.as_ref(),
        path,
        method.version(),
        target.host,
        target.basic_auth()
    );

    if let Some(body) = body {
        request.push_str(&format!("Content-Type: {}\r\n", FORM_CONTENT_TYPE));
        request.push_str(&format!("Content-Length: {}\r\n", body.len()));
    }

    request.push_str("Connection: close\r\n\r\n");

    if let Some(body) = body {
        request.push_str(body);
    }
    request
}

pub fn encode_form(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(name, value)| format!("{}={}", name, utf8_percent_encode(value, FORM_VALUE)))
        .collect::<Vec<_>>()
        .join("&")
}

pub fn decode_response(data: &[u8]) -> String {
    String::from_utf8_lossy(data).into_owned()
}

/// One full round trip: connect, write the request, read until the camera closes.
pub async fn send_request(target: &Target, request: &str, timeout: Duration) -> Result<String> {
    let mut stream: TcpStream =
        tokio::time::timeout(timeout, TcpStream::connect((target.host.as_str(), target.port)))
            .await
            .map_err(|_| CvmsError::Timeout("Connection timeout".to_string()))?
            .map_err(|e| CvmsError::ConnectionError(format!("Connection error: {}", e)))?;

    tokio::time::timeout(timeout, stream.write_all(request.as_bytes()))
        .await
        .map_err(|_| CvmsError::Timeout("Timeout sending request".to_string()))??;

    let data = receive_until_close(&mut stream, timeout).await?;
    if data.is_empty() {
        return Err(CvmsError::ConnectionError("Empty response".to_string()));
    }
    Ok(decode_response(&data))
}

pub async fn receive_until_close<R: AsyncRead + Unpin>(
    reader: &mut R,
    timeout: Duration,
) -> Result<Vec<u8>> {
    let mut response = Vec::new();
    let mut chunk = vec![0u8; READ_CHUNK_SIZE];

    loop {
        let received = match tokio::time::timeout(timeout, reader.read(&mut chunk)).await {
            Ok(Ok(n)) => n,
            Ok(Err(e)) => return Err(CvmsError::IoError(e)),
            Err(_) => {
                return Err(CvmsError::Timeout("Timeout receiving data".to_string()));
            }
        };

        if received == 0 {
            break;
        }
        response.extend_from_slice(&chunk[..received]);
    }

    Ok(response)
}
