// Copyright 2023 Datafuse Labs.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::collections::BTreeMap;

use json5doc::{Array, Document, Object, ValueKind};

#[test]
fn test_value_kinds() {
    let mut doc = Document::new();
    doc.parse("[null, true, 1, 's', [], {}]").unwrap();
    let kinds: Vec<ValueKind> = doc.root().as_array().iter().map(|v| v.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            ValueKind::Null,
            ValueKind::Boolean,
            ValueKind::Number,
            ValueKind::String,
            ValueKind::Array,
            ValueKind::Object,
        ]
    );
}

#[test]
fn test_getters_on_mismatched_kinds() {
    let mut doc = Document::new();
    doc.parse("{s: 'text', n: 2.75, b: true}").unwrap();
    let object = doc.root().as_object();

    let s = object.find("s").unwrap();
    assert_eq!(s.get_int(-1), -1);
    assert_eq!(s.get_double(0.5), 0.5);
    assert!(s.get_bool(true));
    assert_eq!(s.get_c_str(c"none"), c"text");

    let n = object.find("n").unwrap();
    assert_eq!(n.get_int(0), 2);
    assert_eq!(n.get_float(0.0), 2.75);
    assert_eq!(n.get_str("none"), "none");
    assert_eq!(n.get_c_str(c"none"), c"none");
    assert_eq!(n.get_bytes(b"none"), b"none");

    let b = object.find("b").unwrap();
    assert!(b.get_bool(false));
    assert_eq!(b.get_double(-2.0), -2.0);
}

#[test]
fn test_object_view() {
    let mut doc = Document::new();
    doc.parse("{one: 1, two: 'second', three: [3]}").unwrap();
    let object = Object::new(doc.root());

    assert_eq!(object.len(), 3);
    assert!(!object.is_empty());
    assert!(object.contains("one"));
    assert!(object.contains("three"));
    assert!(!object.contains("four"));
    assert!(!object.contains("On"));
    assert!(object.find("four").is_none());

    let collected: BTreeMap<&str, ValueKind> = object.iter().map(|(k, v)| (k, v.kind())).collect();
    assert_eq!(collected.len(), 3);
    assert_eq!(collected["one"], ValueKind::Number);
    assert_eq!(collected["two"], ValueKind::String);
    assert_eq!(collected["three"], ValueKind::Array);

    let mut count = 0;
    for (key, value) in object {
        assert_eq!(object.find(key).map(|v| v.kind()), Some(value.kind()));
        count += 1;
    }
    assert_eq!(count, 3);
}

#[test]
fn test_array_view() {
    let mut doc = Document::new();
    doc.parse("[1, 1, 'x', [2], 1]").unwrap();
    let array = Array::new(doc.root());

    assert_eq!(array.len(), 5);
    assert!(array.get(5).is_none());
    assert_eq!(array.get(2).unwrap().get_str(""), "x");
    assert_eq!(array.get(3).unwrap().as_array().get(0).unwrap().get_int(0), 2);

    let ones = array.iter().filter(|v| v.get_int(0) == 1).count();
    assert_eq!(ones, 3);

    let mut index = 0;
    for value in array {
        assert_eq!(array.get(index).unwrap().kind(), value.kind());
        index += 1;
    }
    assert_eq!(index, 5);
}

#[test]
fn test_views_over_scalars_are_empty() {
    let mut doc = Document::new();
    doc.parse("['x', 1, null]").unwrap();
    for value in doc.root().as_array() {
        let object = Object::from(value);
        assert!(object.is_empty());
        assert!(!object.contains("x"));
        assert_eq!(object.iter().next().map(|(k, _)| k), None);

        let array = Array::from(value);
        assert!(array.is_empty());
        assert!(array.first().is_none());
        assert!(array.last().is_none());
    }

    // an array root seen as an object, and the reverse
    assert!(doc.root().as_object().is_empty());
    doc.parse("{a: 1}").unwrap();
    assert!(doc.root().as_array().is_empty());
}

#[test]
fn test_concurrent_reads() {
    let mut doc = Document::new();
    doc.parse("{list: [1, 2, 3, 4], name: 'shared'}").unwrap();
    let doc = &doc;

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                s.spawn(move || {
                    let root = doc.root().as_object();
                    let sum: i32 = root
                        .find("list")
                        .unwrap()
                        .as_array()
                        .iter()
                        .map(|v| v.get_int(0))
                        .sum();
                    (sum, root.find("name").unwrap().get_str(""))
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), (10, "shared"));
        }
    });
}

#[test]
fn test_debug_output() {
    let mut doc = Document::new();
    doc.parse("[1, 'a', [true, null]]").unwrap();
    assert_eq!(
        format!("{:?}", doc.root()),
        "Array([Number(1.0), String(\"a\"), Array([Boolean(true), Null])])"
    );
}
