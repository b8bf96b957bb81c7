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

use serde_json::Map as JsonMap;
use serde_json::Number as JsonNumber;
use serde_json::Value as JsonValue;

use crate::value::Node;
use crate::value::Value;

impl From<Value<'_>> for JsonValue {
    fn from(value: Value<'_>) -> Self {
        match value.node {
            Node::Null => JsonValue::Null,
            Node::Boolean(v) => JsonValue::Bool(v),
            // NaN and infinities have no JSON representation
            Node::Number(v) => JsonNumber::from_f64(v)
                .map(JsonValue::Number)
                .unwrap_or(JsonValue::Null),
            Node::String(_) => {
                JsonValue::String(String::from_utf8_lossy(value.get_bytes(b"")).into_owned())
            }
            Node::Array(_) => value.as_array().iter().map(JsonValue::from).collect(),
            Node::Object(_) => {
                let mut obj = JsonMap::new();
                for (k, v) in value.as_object() {
                    obj.insert(k.to_string(), JsonValue::from(v));
                }
                JsonValue::Object(obj)
            }
        }
    }
}
