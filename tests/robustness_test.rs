use se_extract::{extract, extract_batch, extract_bytes, BatchInput, Error, Options};

#[test]
fn extract_does_not_panic_on_unclosed_modules() {
    let html = r#"<div class="se-main-container"><div class="se-module"><p class="se-text">open paragraph"#;
    match extract(html) {
        Ok(result) => assert_eq!(result.normalized, "open paragraph"),
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn extract_does_not_panic_on_garbage() {
    for html in ["<<<>>>", "<div class=\"se-main-container", "</p></div></div>", "\0\0\0"] {
        let result = extract(html);
        assert!(
            matches!(result, Ok(_) | Err(Error::NoContainer { .. })),
            "unexpected result for {html:?}: {result:?}"
        );
    }
}

#[test]
fn empty_and_blank_inputs_are_parse_errors() {
    assert!(matches!(extract(""), Err(Error::ParseError(_))));
    assert!(matches!(extract(" \n\t "), Err(Error::ParseError(_))));
}

#[test]
fn empty_container_yields_empty_output() {
    match extract(r#"<div class="se-main-container"></div>"#) {
        Ok(result) => {
            assert!(result.structure.is_empty());
            assert!(result.images.is_empty());
            assert_eq!(result.normalized, "");
            assert_eq!(result.simplified_html, "");
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn image_module_without_src_is_skipped() {
    let html = r#"<div class="se-main-container">
        <div class="se-module"><p class="se-text">before</p></div>
        <div class="se-module"><div class="se-image"><img alt="broken"></div></div>
        <div class="se-module"><p class="se-text">after</p></div>
    </div>"#;
    match extract(html) {
        Ok(result) => {
            assert_eq!(result.structure.len(), 2);
            assert_eq!(result.normalized, "before\n\nafter");
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn deeply_nested_container_is_handled() {
    let depth = 500;
    let html = format!(
        r#"{}<div class="se-main-container"><div class="se-module"><p class="se-text">deep</p></div></div>{}"#,
        "<div>".repeat(depth),
        "</div>".repeat(depth)
    );
    match extract(&html) {
        Ok(result) => assert_eq!(result.normalized, "deep"),
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn euc_kr_bytes_are_decoded() {
    let mut html = b"<html><head><meta charset=\"euc-kr\"></head><body>\
        <div class=\"se-main-container\"><div class=\"se-module\"><p class=\"se-text\">"
        .to_vec();
    html.extend_from_slice(&[0xc7, 0xd1, 0xb1, 0xdb]);
    html.extend_from_slice(b"</p></div></div></body></html>");

    match extract_bytes(&html) {
        Ok(result) => assert_eq!(result.normalized, "\u{d55c}\u{ae00}"),
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn invalid_utf8_is_replaced_not_rejected() {
    let mut html = b"<div class=\"se-main-container\"><p>ok ".to_vec();
    html.extend_from_slice(&[0xff, 0xfe]);
    html.extend_from_slice(b"</p></div>");

    match extract_bytes(&html) {
        Ok(result) => assert!(result.content_text.starts_with("ok")),
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn batch_isolates_failures() {
    let inputs = vec![
        BatchInput {
            url: Some("https://blog.naver.com/first/100".to_string()),
            html: r#"<div class="se-main-container"><p>one</p></div>"#.to_string(),
            frame_html: None,
        },
        BatchInput {
            html: r#"<iframe id="mainFrame" src="/PostView.naver?blogId=b&amp;logNo=2"></iframe>"#.to_string(),
            frame_html: Some(r#"<div class="se-main-container"><p>two</p></div>"#.to_string()),
            ..BatchInput::default()
        },
        BatchInput {
            html: "<p>no post here</p>".to_string(),
            ..BatchInput::default()
        },
    ];

    let outcomes = extract_batch(&inputs, &Options::default());
    let indices: Vec<usize> = outcomes.iter().map(|o| o.index).collect();
    assert_eq!(indices, vec![0, 1, 2]);

    match &outcomes[0].result {
        Ok(result) => {
            assert_eq!(result.normalized, "one");
            assert_eq!(result.post.as_ref().map(|p| p.blog_id.as_str()), Some("first"));
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
    match &outcomes[1].result {
        Ok(result) => assert_eq!(result.normalized, "two"),
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
    assert!(matches!(outcomes[2].result, Err(Error::NoContainer { .. })));
}

#[test]
fn batch_inputs_deserialize_from_json() {
    let inputs: Vec<BatchInput> = match serde_json::from_str(
        r#"[{"url": "https://blog.naver.com/a/1", "html": "<p>x</p>"}, {"html": "<p>y</p>"}]"#,
    ) {
        Ok(inputs) => inputs,
        Err(err) => panic!("batch json should parse: {err}"),
    };
    assert_eq!(inputs.len(), 2);
    assert!(inputs[1].url.is_none());
    assert!(inputs[1].frame_html.is_none());
}
