use serde::Serialize;
use serde_json::{json, Map, Value};

/// `bool` query assembled clause by clause, then rendered with [`BoolQuery::into_query`].
/// Criteria operate on this type before it is sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoolQuery {
    pub must: Vec<Value>,
    pub filter: Vec<Value>,
    pub must_not: Vec<Value>,
}

impl BoolQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn must(mut self, clause: Value) -> Self {
        self.must.push(clause);
        self
    }

    pub fn must_all(mut self, clauses: impl IntoIterator<Item = Value>) -> Self {
        self.must.extend(clauses);
        self
    }

    pub fn filter(mut self, clause: Value) -> Self {
        self.filter.push(clause);
        self
    }

    pub fn must_not(mut self, clause: Value) -> Self {
        self.must_not.push(clause);
        self
    }

    pub fn into_query(self) -> Value {
        let mut body = Map::new();
        if !self.must.is_empty() {
            body.insert("must".to_string(), Value::Array(self.must));
        }
        if !self.filter.is_empty() {
            body.insert("filter".to_string(), Value::Array(self.filter));
        }
        if !self.must_not.is_empty() {
            body.insert("must_not".to_string(), Value::Array(self.must_not));
        }
        json!({ "bool": Value::Object(body) })
    }
}

/// `{ field: value }` with a runtime field name
pub fn field_value(field: &str, value: Value) -> Value {
    let mut object = Map::new();
    object.insert(field.to_string(), value);
    Value::Object(object)
}

pub fn term(field: &str, value: impl Into<Value>) -> Value {
    json!({ "term": field_value(field, value.into()) })
}

pub fn terms(field: &str, values: Vec<Value>) -> Value {
    json!({ "terms": field_value(field, Value::Array(values)) })
}

pub fn ids(values: &[String]) -> Value {
    json!({ "ids": { "values": values } })
}

pub fn exists(field: &str) -> Value {
    json!({ "exists": { "field": field } })
}

pub fn nested(path: &str, query: Value) -> Value {
    json!({ "nested": { "path": path, "query": query } })
}

/// Case-insensitive "contains" on a keyword field
pub fn contains(field: &str, text: &str) -> Value {
    let escaped = text
        .replace('\\', "\\\\")
        .replace('*', "\\*")
        .replace('?', "\\?");
    let pattern = format!("*{}*", escaped);
    json!({
        "wildcard": field_value(field, json!({ "value": pattern, "case_insensitive": true }))
    })
}

/// Body of a `_search` call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchRequest {
    pub query: Value,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sort: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(rename = "_source", skip_serializing_if = "Option::is_none")]
    pub source: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_total_hits: Option<bool>,
}

impl SearchRequest {
    pub fn new(query: Value) -> Self {
        Self {
            query,
            sort: Vec::new(),
            from: None,
            size: None,
            source: None,
            track_total_hits: None,
        }
    }

    pub fn sort(mut self, sort: Vec<Value>) -> Self {
        self.sort = sort;
        self
    }

    pub fn from(mut self, from: u64) -> Self {
        self.from = Some(from);
        self
    }

    pub fn size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn without_source(mut self) -> Self {
        self.source = Some(false);
        self
    }

    pub fn track_total_hits(mut self) -> Self {
        self.track_total_hits = Some(true);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResponse {
    pub total: u64,
    pub hits: Vec<SearchHit>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub id: String,
    pub source: Value,
}

impl SearchHit {
    pub fn new(id: impl Into<String>, source: Value) -> Self {
        Self {
            id: id.into(),
            source,
        }
    }
}

/// Painless script for `_update_by_query`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Script {
    pub source: String,
    pub lang: &'static str,
    pub params: Map<String, Value>,
}

impl Script {
    pub fn painless(source: impl Into<String>, params: Map<String, Value>) -> Self {
        Self {
            source: source.into(),
            lang: "painless",
            params,
        }
    }

    /// Overwrite every top-level field of the stored document with `document`
    pub fn overwrite_fields(document: &Map<String, Value>) -> Self {
        let source = document
            .keys()
            .map(|key| format!("ctx._source.{key} = params.{key};"))
            .collect::<Vec<_>>()
            .join(" ");
        Self::painless(source, document.clone())
    }

    /// Rewrite the entries of `ctx._source[path]` whose `id_field` equals `id`
    /// with every field of `fields`.
    pub fn sync_nested(path: &str, id_field: &str, id: &str, fields: Map<String, Value>) -> Self {
        let source = "if (ctx._source[params.path] != null) { \
            for (item in ctx._source[params.path]) { \
            if (item[params.id_field] == params.id) { \
            for (entry in params.fields.entrySet()) { item[entry.getKey()] = entry.getValue(); } \
            } } }";
        let mut params = Map::new();
        params.insert("path".to_string(), json!(path));
        params.insert("id_field".to_string(), json!(id_field));
        params.insert("id".to_string(), json!(id));
        params.insert("fields".to_string(), Value::Object(fields));
        Self::painless(source, params)
    }
}
