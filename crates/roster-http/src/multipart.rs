//! `multipart/form-data` body encoding.

use roster_core::MultipartPart;

/// Encode `parts` in order, each delimited by `--boundary`, followed by the
/// closing `--boundary--` line.
pub fn encode_multipart(boundary: &str, parts: &[MultipartPart]) -> Vec<u8> {
    let mut body = Vec::new();

    for part in parts {
        body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{}\"", part.field_name).as_bytes(),
        );
        if let Some(filename) = &part.filename {
            body.extend_from_slice(format!("; filename=\"{filename}\"").as_bytes());
        }
        body.extend_from_slice(format!("\r\nContent-Type: {}\r\n\r\n", part.mime_type).as_bytes());
        body.extend_from_slice(&part.data);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());
    body
}

/// Content-Type value announcing `boundary`.
pub fn multipart_content_type(boundary: &str) -> String {
    format!(
        "{}; boundary={boundary}",
        roster_core::ContentType::Multipart.as_str()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_encoding() {
        let parts = vec![
            MultipartPart::new("title", "hello", "text/plain"),
            MultipartPart::new("avatar", vec![0xff, 0x00, 0x7f], "image/png")
                .with_filename("me.png"),
        ];

        let body = encode_multipart("XyZ", &parts);

        let mut expected = Vec::new();
        expected.extend_from_slice(
            b"--XyZ\r\nContent-Disposition: form-data; name=\"title\"\r\nContent-Type: text/plain\r\n\r\nhello\r\n",
        );
        expected.extend_from_slice(
            b"--XyZ\r\nContent-Disposition: form-data; name=\"avatar\"; filename=\"me.png\"\r\nContent-Type: image/png\r\n\r\n",
        );
        expected.extend_from_slice(&[0xff, 0x00, 0x7f]);
        expected.extend_from_slice(b"\r\n--XyZ--\r\n");
        assert_eq!(body, expected);
    }

    #[test]
    fn test_part_count_and_order() {
        let names = ["first", "second", "third", "fourth"];
        let parts: Vec<_> = names
            .iter()
            .map(|name| MultipartPart::new(*name, name.as_bytes(), "text/plain"))
            .collect();

        let body = String::from_utf8(encode_multipart("b0undary", &parts)).unwrap();

        assert_eq!(body.matches("Content-Disposition").count(), names.len());
        assert_eq!(body.matches("--b0undary\r\n").count(), names.len());
        assert_eq!(body.matches("--b0undary--\r\n").count(), 1);
        assert!(body.ends_with("--b0undary--\r\n"));

        let positions: Vec<_> = names
            .iter()
            .map(|name| body.find(&format!("name=\"{name}\"")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_no_parts_is_just_the_terminator() {
        assert_eq!(encode_multipart("b", &[]), b"--b--\r\n".to_vec());
    }

    #[test]
    fn test_content_type_value() {
        assert_eq!(
            multipart_content_type("abc"),
            "multipart/form-data; boundary=abc"
        );
    }
}
