//! Message Bundle Tests
//!
//! Bundle ordering, JSON decoding and serializer dispatch

use pomsg_plugin::{
    Message, MessageBundle, MessagePart, PluralCaseSpec, Po, PoError, PoGeneratorOptions,
};

const BUNDLE_JSON: &str = r#"{
    "locale": "en",
    "messages": [
        {
            "id": 9001,
            "content_type": "text/html",
            "description": "Shown on the inbox page",
            "parts": [
                {"kind": "raw_text", "text": "Welcome, "},
                {"kind": "placeholder", "name": "USER"}
            ]
        },
        {
            "id": 9002,
            "content_type": "text/plain",
            "meaning": "inbox counter",
            "parts": [
                {
                    "kind": "plural",
                    "cases": [
                        {"spec": {"explicit": 1}, "parts": [{"kind": "raw_text", "text": "1 message"}]},
                        {"spec": "other", "parts": [
                            {"kind": "placeholder", "name": "NUM"},
                            {"kind": "raw_text", "text": " messages"}
                        ]}
                    ]
                }
            ]
        }
    ]
}"#;

#[test]
fn should_decode_bundle_from_json() {
    let bundle = MessageBundle::from_json(BUNDLE_JSON).unwrap();
    assert_eq!(bundle.locale(), Some("en"));
    assert_eq!(bundle.len(), 2);

    let first = &bundle.get_messages()[0];
    assert_eq!(first.id, 9001);
    assert_eq!(first.description, "Shown on the inbox page");
    assert_eq!(first.meaning, "");
    assert_eq!(first.parts[1], MessagePart::placeholder("USER"));

    let second = &bundle.get_messages()[1];
    assert!(second.is_plural());
    match &second.parts[0] {
        MessagePart::Plural { cases } => {
            assert_eq!(cases[0].spec, PluralCaseSpec::Explicit(1));
            assert_eq!(cases[1].spec, PluralCaseSpec::Other);
        }
        other => panic!("expected plural part, got {:?}", other),
    }
}

#[test]
fn should_write_decoded_bundle_with_its_locale() {
    let bundle = MessageBundle::from_json(BUNDLE_JSON).unwrap();
    let po = bundle.write(&Po::new(), None, None).unwrap();
    assert_eq!(
        po,
        "# Description: Shown on the inbox page\n\
         #: id=9001\n\
         #: type=text/html\n\
         msgid \"Welcome, {$USER}\"\n\
         \n\
         # Meaning: inbox counter\n\
         #: id=9002\n\
         #: type=text/plain\n\
         msgid \"1 message\"\n\
         msgid_plural \"{$NUM} messages\"\n\n"
    );
}

#[test]
fn should_prefer_explicit_source_locale() {
    let bundle = MessageBundle::from_json(BUNDLE_JSON).unwrap();
    let po = Po::with_options(PoGeneratorOptions::new().with_header(true));
    let out = bundle.write(&po, Some("en-GB"), Some("ja")).unwrap();
    assert!(out.contains("\"X-Source-Language: en-GB\\n\""));
    assert!(out.contains("\"Language: ja\\n\""));
}

#[test]
fn should_reject_malformed_json() {
    let err = MessageBundle::from_json(r#"{"messages": [{"id": "nope"}]}"#).unwrap_err();
    assert!(matches!(err, PoError::InvalidJson(_)));
}

#[test]
fn should_reject_unknown_part_kind() {
    let json = r#"{"messages": [{"id": 1, "content_type": "text/plain",
        "parts": [{"kind": "gender", "text": "x"}]}]}"#;
    assert!(MessageBundle::from_json(json).is_err());
}

#[test]
fn should_keep_push_order() {
    let mut bundle = MessageBundle::new(None);
    assert!(bundle.is_empty());
    bundle.push(Message::new(3, "text/plain", vec![]));
    bundle.extend(vec![
        Message::new(1, "text/plain", vec![]),
        Message::new(2, "text/plain", vec![]),
    ]);
    let ids: Vec<u64> = bundle.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![3, 1, 2]);
}

#[test]
fn should_split_bundle_in_order() {
    let bundle: MessageBundle = (1..=4)
        .map(|id| Message::new(id, "text/plain", vec![]))
        .collect();
    let (head, tail) = bundle.split_at(1);
    assert_eq!(head.len(), 1);
    assert_eq!(tail.iter().map(|m| m.id).collect::<Vec<_>>(), vec![2, 3, 4]);

    let (all, none) = bundle.split_at(10);
    assert_eq!(all.len(), 4);
    assert!(none.is_empty());
}
