//! Firestore REST encoding: structured queries out, typed values in.

use serde_json::{json, Map, Value};

/// Sort direction for `orderBy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "ASCENDING",
            Self::Descending => "DESCENDING",
        }
    }
}

/// Builder for a `runQuery` request body.
#[derive(Debug, Clone, PartialEq)]
pub struct RunQuery {
    collection: String,
    filters: Vec<(String, Value)>,
    order_by: Vec<(String, Direction)>,
    limit: Option<usize>,
}

impl RunQuery {
    /// Query a single collection.
    pub fn collection(name: impl Into<String>) -> Self {
        Self {
            collection: name.into(),
            filters: Vec::new(),
            order_by: Vec::new(),
            limit: None,
        }
    }

    /// Add an equality filter.
    pub fn where_eq(mut self, field: impl Into<String>, value: Value) -> Self {
        self.filters.push((field.into(), value));
        self
    }

    pub fn order_by(mut self, field: impl Into<String>, direction: Direction) -> Self {
        self.order_by.push((field.into(), direction));
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Render the request body.
    pub fn to_json(&self) -> Value {
        let mut query = Map::new();
        query.insert("from".into(), json!([{ "collectionId": self.collection }]));

        let filters: Vec<Value> = self
            .filters
            .iter()
            .map(|(field, value)| {
                json!({
                    "fieldFilter": {
                        "field": { "fieldPath": field },
                        "op": "EQUAL",
                        "value": encode_value(value),
                    }
                })
            })
            .collect();
        match filters.len() {
            0 => {}
            1 => {
                query.insert("where".into(), filters[0].clone());
            }
            _ => {
                query.insert(
                    "where".into(),
                    json!({ "compositeFilter": { "op": "AND", "filters": filters } }),
                );
            }
        }

        if !self.order_by.is_empty() {
            let orders: Vec<Value> = self
                .order_by
                .iter()
                .map(|(field, direction)| {
                    json!({ "field": { "fieldPath": field }, "direction": direction.as_str() })
                })
                .collect();
            query.insert("orderBy".into(), Value::Array(orders));
        }

        if let Some(limit) = self.limit {
            query.insert("limit".into(), json!(limit));
        }

        json!({ "structuredQuery": Value::Object(query) })
    }
}

/// Encode a plain JSON value as a Firestore typed value.
pub fn encode_value(value: &Value) -> Value {
    match value {
        Value::Null => json!({ "nullValue": null }),
        Value::Bool(b) => json!({ "booleanValue": b }),
        Value::Number(n) if n.is_i64() || n.is_u64() => json!({ "integerValue": n.to_string() }),
        Value::Number(n) => json!({ "doubleValue": n }),
        Value::String(s) => json!({ "stringValue": s }),
        Value::Array(items) => {
            json!({ "arrayValue": { "values": items.iter().map(encode_value).collect::<Vec<_>>() } })
        }
        Value::Object(map) => {
            let fields: Map<String, Value> = map
                .iter()
                .map(|(k, v)| (k.clone(), encode_value(v)))
                .collect();
            json!({ "mapValue": { "fields": fields } })
        }
    }
}

/// Decode a Firestore typed value into plain JSON.
///
/// Integers arrive as strings and become numbers; timestamps and references
/// stay strings; unknown shapes decode as null.
pub fn decode_value(value: &Value) -> Value {
    let Some(map) = value.as_object() else {
        return Value::Null;
    };
    let Some((kind, inner)) = map.iter().next() else {
        return Value::Null;
    };

    match kind.as_str() {
        "nullValue" => Value::Null,
        "booleanValue" => Value::Bool(inner.as_bool().unwrap_or(false)),
        "integerValue" => match inner {
            Value::String(s) => s.parse::<i64>().map(Value::from).unwrap_or(Value::Null),
            Value::Number(_) => inner.clone(),
            _ => Value::Null,
        },
        "doubleValue" => match inner {
            Value::Number(_) => inner.clone(),
            // NaN and infinities are sent as strings.
            Value::String(s) => s
                .parse::<f64>()
                .ok()
                .and_then(serde_json::Number::from_f64)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            _ => Value::Null,
        },
        "stringValue" | "timestampValue" | "referenceValue" | "bytesValue" => inner.clone(),
        "geoPointValue" => json!({
            "latitude": inner.get("latitude").cloned().unwrap_or(json!(0.0)),
            "longitude": inner.get("longitude").cloned().unwrap_or(json!(0.0)),
        }),
        "arrayValue" => Value::Array(
            inner
                .get("values")
                .and_then(Value::as_array)
                .map(|values| values.iter().map(decode_value).collect())
                .unwrap_or_default(),
        ),
        "mapValue" => decode_fields(inner.get("fields")),
        _ => Value::Null,
    }
}

/// Decode a document's `fields` object.
pub fn decode_fields(fields: Option<&Value>) -> Value {
    let decoded: Map<String, Value> = fields
        .and_then(Value::as_object)
        .map(|fields| {
            fields
                .iter()
                .map(|(k, v)| (k.clone(), decode_value(v)))
                .collect()
        })
        .unwrap_or_default();
    Value::Object(decoded)
}

/// A decoded document: id plus plain JSON fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub fields: Value,
}

impl Document {
    /// Decode a REST document resource.
    pub fn from_resource(resource: &Value) -> Option<Self> {
        let name = resource.get("name")?.as_str()?;
        Some(Self {
            id: document_id(name).to_string(),
            fields: decode_fields(resource.get("fields")),
        })
    }

    /// Fields with the `id` key set, ready for serde.
    pub fn into_record(self) -> Value {
        let mut fields = self.fields;
        if let Some(map) = fields.as_object_mut() {
            map.insert("id".to_string(), Value::String(self.id));
        }
        fields
    }
}

/// Collect documents from a `runQuery` answer.
///
/// The answer is an array of results; entries without a document (such as
/// the trailing read-time marker) are skipped.
pub fn documents_from_run_query(response: &Value) -> Vec<Document> {
    response
        .as_array()
        .map(|results| {
            results
                .iter()
                .filter_map(|result| result.get("document"))
                .filter_map(Document::from_resource)
                .collect()
        })
        .unwrap_or_default()
}

/// Last path segment of a document resource name.
pub fn document_id(name: &str) -> &str {
    name.rsplit('/').next().unwrap_or(name)
}
