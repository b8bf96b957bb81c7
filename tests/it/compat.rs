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

use json5doc::{Document, Value};
use proptest::prelude::*;
use serde_json::Value as JsonValue;

fn json_strategy() -> impl Strategy<Value = JsonValue> {
    let leaf = prop_oneof![
        Just(JsonValue::Null),
        any::<bool>().prop_map(JsonValue::Bool),
        any::<i32>().prop_map(JsonValue::from),
        (-1e6f64..1e6f64).prop_map(JsonValue::from),
        // no quotes or backslashes: strings are copied verbatim
        "[a-zA-Z0-9 _.-]{0,12}".prop_map(JsonValue::String),
    ];

    leaf.prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..8).prop_map(JsonValue::Array),
            prop::collection::btree_map("[a-zA-Z_][a-zA-Z0-9_]{0,8}", inner, 0..8)
                .prop_map(|m| JsonValue::Object(m.into_iter().collect())),
        ]
    })
}

fn assert_same(ours: Value<'_>, theirs: &JsonValue) {
    match theirs {
        JsonValue::Null => assert!(ours.is_null()),
        JsonValue::Bool(v) => {
            assert!(ours.is_boolean());
            assert_eq!(ours.get_bool(!v), *v);
        }
        JsonValue::Number(n) => {
            assert!(ours.is_number());
            assert_eq!(ours.get_double(f64::NAN), n.as_f64().unwrap());
        }
        JsonValue::String(s) => {
            assert!(ours.is_string());
            assert_eq!(ours.get_str("<none>"), s);
        }
        JsonValue::Array(values) => {
            let array = ours.as_array();
            assert!(ours.is_array());
            assert_eq!(array.len(), values.len());
            for (i, v) in values.iter().enumerate() {
                assert_same(array.get(i).unwrap(), v);
            }
        }
        JsonValue::Object(map) => {
            let object = ours.as_object();
            assert!(ours.is_object());
            assert_eq!(object.len(), map.len());
            for (k, v) in map {
                assert!(object.contains(k), "missing key {}", k);
                assert_same(object.find(k).unwrap(), v);
            }
        }
    }
}

proptest! {
    #[test]
    fn test_agrees_with_serde_json(json in json_strategy()) {
        let root = JsonValue::Array(vec![json]);
        let mut doc = Document::new();

        let source = root.to_string();
        doc.parse(&source).unwrap();
        assert_same(doc.root(), &root);

        let pretty = serde_json::to_string_pretty(&root).unwrap();
        doc.parse(&pretty).unwrap();
        assert_same(doc.root(), &root);
    }
}

#[test]
fn test_into_serde_json() {
    let mut doc = Document::new();
    doc.parse("{list: [1, 'two', null,], flag: false, nested: {inf: 1e999}}")
        .unwrap();
    let json = JsonValue::from(doc.root());
    assert_eq!(
        json,
        serde_json::json!({
            "list": [1.0, "two", null],
            "flag": false,
            "nested": {"inf": null}
        })
    );
}
