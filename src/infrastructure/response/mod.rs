use actix_web::http::header::{self, ContentDisposition, DispositionParam, DispositionType};
use actix_web::HttpResponse;

use crate::shared::text::download_filename;

const MARKDOWN_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Header value, e.g. `attachment; filename="login_test_cases.md"`.
pub fn attachment_disposition(scenario: &str) -> ContentDisposition {
    ContentDisposition {
        disposition: DispositionType::Attachment,
        parameters: vec![DispositionParam::Filename(download_filename(scenario))],
    }
}

/// Plain-text download of a combined Markdown document.
pub fn markdown_attachment(scenario: &str, markdown: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(MARKDOWN_CONTENT_TYPE)
        .insert_header((header::CONTENT_DISPOSITION, attachment_disposition(scenario)))
        .body(markdown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn test_disposition_formats_filename() {
        assert_eq!(
            attachment_disposition("bluetooth pairing").to_string(),
            "attachment; filename=\"bluetooth_pairing_test_cases.md\""
        );
    }

    #[actix_web::test]
    async fn test_markdown_attachment_headers_and_body() {
        let response = markdown_attachment("login", "### LOGIN-0001\n".to_string());
        assert_eq!(response.status(), actix_web::http::StatusCode::OK);

        let disposition = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .and_then(|value| value.to_str().ok())
            .unwrap()
            .to_string();
        assert_eq!(disposition, "attachment; filename=\"login_test_cases.md\"");

        let body = to_bytes(response.into_body()).await.unwrap();
        assert_eq!(&body[..], b"### LOGIN-0001\n");
    }
}
