//! Recursive extraction of search-model queries from a conversation document.

use std::collections::HashSet;

use serde_json::Value;

/// Discriminator value marking a JSON object as a search-model query record.
pub const QUERY_RECORD_TYPE: &str = "search_model_queries";

/// Ordered accumulator of unique query strings.
///
/// The vector owns first-seen order; the set keeps membership tests O(1).
#[derive(Debug, Default)]
struct QueryList {
    ordered: Vec<String>,
    seen: HashSet<String>,
}

impl QueryList {
    fn push_unique(&mut self, query: &str) {
        if self.seen.insert(query.to_string()) {
            self.ordered.push(query.to_string());
        }
    }
}

/// Collect all search-model queries embedded anywhere in a conversation
/// document.
///
/// Depth-first, pre-order walk. Deduplication is global across the whole
/// walk and preserves first-seen order. The document is never mutated.
pub fn extract_queries(doc: &Value) -> Vec<String> {
    let mut list = QueryList::default();
    walk(doc, &mut list);
    list.ordered
}

fn walk(value: &Value, list: &mut QueryList) {
    match value {
        Value::Array(items) => {
            for item in items {
                walk(item, list);
            }
        }
        Value::Object(fields) => {
            // A query record carries the discriminator plus an array of
            // candidate queries. Non-string entries are skipped; a
            // non-array "queries" field is not a record at all.
            if fields.get("type").and_then(Value::as_str) == Some(QUERY_RECORD_TYPE) {
                if let Some(queries) = fields.get("queries").and_then(Value::as_array) {
                    for query in queries {
                        if let Some(text) = query.as_str() {
                            list.push_unique(text);
                        }
                    }
                }
            }
            // Every field is walked whether or not the record matched —
            // queries can nest inside unrelated wrapper fields.
            for field in fields.values() {
                walk(field, list);
            }
        }
        _ => {}
    }
}
