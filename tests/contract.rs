//! Integration tests for the cross-kind node contract.
//!
//! These tests exercise the guarantees every kind must uphold uniformly:
//! - Exact round-trips through the canonical binary and serial channels
//! - Shallow clone sharing vs. deep clone independence for container kinds
//! - Numeric capability gating without concrete-type inspection
//! - Malformed and foreign input rejected with prior state preserved
//! - Contents-channel symmetry and the default filename extension

use std::sync::Arc;

use vartree::prelude::*;

/// One representative, non-default node per shipped kind.
fn representatives() -> Vec<Box<dyn ValueNode>> {
    let mut list = ListNode::new();
    list.push_node(Box::new(BoolNode::new(true)));
    list.push_node(Box::new(IntNode::bounded(-2, -5, 5)));

    vec![
        Box::new(BoolNode::new(true)),
        Box::new(IntNode::bounded(42, 0, 100)),
        Box::new(IntNode::new(i64::MIN)),
        Box::new(FloatNode::bounded(0.25, -1.0, 1.0)),
        Box::new(StrNode::new("config value with spaces")),
        Box::new(BlobNode::new(vec![0xDE, 0xAD, 0xBE, 0xEF])),
        Box::new(list),
    ]
}

#[test]
fn test_binary_roundtrip_identity() {
    for node in representatives() {
        let encoded = node.to_binary();
        assert_eq!(encoded[0], node.kind().tag(), "{} tag byte", node.kind());

        // Through a fresh node of the same kind...
        let mut fresh = new_node(node.kind());
        assert!(fresh.set_binary(&encoded), "{} set_binary", node.kind());
        assert_eq!(fresh.to_binary(), encoded, "{} round-trip", node.kind());

        // ...and through the polymorphic factory.
        let restored = node_from_binary(&encoded).unwrap();
        assert_eq!(restored.kind(), node.kind());
        assert_eq!(restored.to_binary(), encoded);
    }
}

#[test]
fn test_serial_roundtrip_identity() {
    for mut node in representatives() {
        let kind = node.kind();
        let serial = node.to_serial();
        let binary = node.to_binary();

        assert!(node.set_serial(&serial), "{kind} set_serial");
        assert_eq!(node.to_binary(), binary, "{kind} serial round-trip");
        assert_eq!(node.to_serial(), serial);
    }
}

#[test]
fn test_serial_text_is_xml_embeddable_ascii_for_default_channel() {
    // Kinds on the default hex derivation produce pure ASCII hex.
    let blob = BlobNode::new((0..=255u8).collect());
    assert!(blob.to_serial().chars().all(|c| c.is_ascii_hexdigit()));

    let mut list = ListNode::new();
    list.push_node(Box::new(StrNode::new("<&>")));
    assert!(list.to_serial().chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn test_clone_matches_immediate_state() {
    for node in representatives() {
        let copy = node.clone_node();
        assert_eq!(copy.kind(), node.kind());
        assert_eq!(copy.to_binary(), node.to_binary());
        assert_eq!(copy.text(), node.text());
    }
}

#[test]
fn test_clone_shares_children_deep_clone_does_not() {
    let mut original = ListNode::new();
    let shared_child = original.push_node(Box::new(IntNode::new(1)));

    let shallow = original.clone_node();
    let shallow = shallow.as_any().downcast_ref::<ListNode>().unwrap();
    let deep = original.deep_clone();
    let deep = deep.as_any().downcast_ref::<ListNode>().unwrap();

    // The shallow copy holds the same child object; the deep copy does not.
    assert!(Arc::ptr_eq(&shared_child, &shallow.children()[0]));
    assert!(!Arc::ptr_eq(&shared_child, &deep.children()[0]));

    // Mutating through the shallow copy reaches the original...
    assert!(write_node(&shallow.children()[0]).set_text("7"));
    assert_eq!(read_node(&original.children()[0]).text(), "7");

    // ...while the deep copy's child is untouched, and vice versa.
    assert_eq!(read_node(&deep.children()[0]).text(), "1");
    assert!(write_node(&deep.children()[0]).set_text("9"));
    assert_eq!(read_node(&original.children()[0]).text(), "7");
}

#[test]
fn test_numeric_capability_gating() {
    let non_numeric: Vec<Box<dyn ValueNode>> = vec![
        Box::new(StrNode::new("12")),
        Box::new(BlobNode::new(vec![1])),
        Box::new(ListNode::new()),
    ];
    for node in non_numeric {
        assert!(!node.has_value(), "{}", node.kind());
        assert!(!node.has_min_value() && !node.has_max_value());
        // Stable, side-effect-free defaults on repeated calls.
        let before = node.to_binary();
        for _ in 0..3 {
            assert_eq!(node.value(), 0.0);
            assert_eq!(node.min_value(), 0.0);
            assert_eq!(node.max_value(), 0.0);
        }
        assert_eq!(node.to_binary(), before);
    }

    let numeric: Vec<(Box<dyn ValueNode>, f64)> = vec![
        (Box::new(BoolNode::new(true)), 1.0),
        (Box::new(IntNode::new(-3)), -3.0),
        (Box::new(FloatNode::new(2.5)), 2.5),
    ];
    for (node, expected) in numeric {
        assert!(node.has_value(), "{}", node.kind());
        assert_eq!(node.value(), expected);
    }
}

#[test]
fn test_malformed_input_preserves_state() {
    for mut node in representatives() {
        let kind = node.kind();
        let pristine = node.to_binary();

        assert!(!node.set_binary(&[]), "{kind} accepted empty input");
        assert!(!node.set_binary(&[0xEE]), "{kind} accepted unknown tag");
        assert!(
            !node.set_binary(&[kind.tag()]),
            "{kind} accepted truncated body"
        );
        if kind != NodeKind::Str {
            // The string kind's serial channel accepts any text by design.
            assert!(!node.set_serial("zz-not-a-value-zz"), "{kind} serial");
        }

        assert_eq!(node.to_binary(), pristine, "{kind} state changed");
    }
}

#[test]
fn test_foreign_kind_encodings_are_rejected() {
    let encodings: Vec<(NodeKind, Vec<u8>)> = representatives()
        .into_iter()
        .map(|node| (node.kind(), node.to_binary()))
        .collect();

    for mut node in representatives() {
        let pristine = node.to_binary();
        for (kind, encoding) in &encodings {
            if *kind == node.kind() {
                continue;
            }
            assert!(
                !node.set_binary(encoding),
                "{} accepted a {} encoding",
                node.kind(),
                kind
            );
        }
        assert_eq!(node.to_binary(), pristine);
    }
}

#[test]
fn test_contents_channel_defaults() {
    // Kinds without a secondary payload: symmetric no-ops, default extension.
    let mut node = IntNode::new(5);
    let mut sink = Vec::new();
    node.write_contents(&mut sink).unwrap();
    assert!(sink.is_empty());

    let mut source: &[u8] = &[1, 2, 3];
    assert!(!node.read_contents(&mut source, ".bin"));
    assert_eq!(node.get(), 5);
    assert_eq!(node.contents_extension(), ".bin");
}

#[test]
fn test_contents_channel_blob_roundtrip() {
    let payload: Vec<u8> = (0..64).collect();
    let blob = BlobNode::new(payload.clone());

    let mut side_file = Vec::new();
    blob.write_contents(&mut side_file).unwrap();
    assert_eq!(side_file, payload);

    let mut restored = BlobNode::default();
    assert!(restored.read_contents(&mut side_file.as_slice(), blob.contents_extension()));
    assert_eq!(restored.bytes(), payload.as_slice());
}

#[test]
fn test_display_text_may_be_lossy_but_setters_stay_safe() {
    // The list rendering is read-only by design.
    let mut list = ListNode::new();
    list.push_node(Box::new(IntNode::new(1)));
    let rendered = list.text();
    assert!(!list.set_text(&rendered));
    assert_eq!(list.len(), 1);

    // Bounded kinds clamp display-text input instead of rejecting it.
    let mut bounded = IntNode::bounded(0, 0, 10);
    assert!(bounded.set_text("10000"));
    assert_eq!(bounded.get(), 10);
}

#[test]
fn test_editor_flow_through_the_base_trait() {
    // A UI holds nodes polymorphically and never learns concrete types.
    let mut nodes: Vec<Box<dyn ValueNode>> = vec![
        Box::new(BoolNode::default()),
        Box::new(FloatNode::bounded(0.0, -10.0, 10.0)),
        Box::new(StrNode::default()),
    ];

    for (node, input) in nodes.iter_mut().zip(["true", "3.5", "hello"]) {
        assert!(node.set_text(input));
        node.print_debug();
    }

    let texts: Vec<String> = nodes.iter().map(|n| n.text()).collect();
    assert_eq!(texts, ["true", "3.5", "hello"]);
}
