/*! Raw and normalized record types.

Raw records are what we get from the source JSONL files:

```json
{"text": "...", "spo_list": [{"subject": "...", "predicate": "...", "object": "..."}]}
```

Normalized records drop the triple field names and keep them positionally:

```json
{"text": "...", "spo_list": [["subject", "predicate", "object"]]}
```

Unknown fields are ignored when deserializing.
!*/
use serde::{Deserialize, Serialize};

/// A single `(subject, predicate, object)` triple as found in source files.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawTriple {
    pub subject: String,
    pub predicate: String,
    pub object: String,
}

/// A source record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawRecord {
    pub text: String,
    pub spo_list: Vec<RawTriple>,
}

/// A line of a schema file. Only the predicate is kept.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SchemaEntry {
    pub predicate: String,
}

/// Positional triple, serialized as a 3-element array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Triple(pub String, pub String, pub String);

impl Triple {
    pub fn subject(&self) -> &str {
        &self.0
    }

    pub fn predicate(&self) -> &str {
        &self.1
    }

    pub fn object(&self) -> &str {
        &self.2
    }
}

impl From<RawTriple> for Triple {
    fn from(t: RawTriple) -> Self {
        Self(t.subject, t.predicate, t.object)
    }
}

/// A normalized record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    text: String,
    spo_list: Vec<Triple>,
}

impl Record {
    pub fn new(text: String, spo_list: Vec<Triple>) -> Self {
        Self { text, spo_list }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn spo_list(&self) -> &[Triple] {
        &self.spo_list
    }
}

impl From<RawRecord> for Record {
    fn from(r: RawRecord) -> Self {
        Self {
            text: r.text,
            spo_list: r.spo_list.into_iter().map(Triple::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_keeps_shape() {
        let raw: RawRecord = serde_json::from_str(
            r#"{"text":"李白是诗人","spo_list":[
                {"subject":"李白","predicate":"职业","object":"诗人"},
                {"subject":"李白","predicate":"国籍","object":"唐"}],
                "postag":[]}"#,
        )
        .unwrap();
        let record = Record::from(raw.clone());

        assert_eq!(record.text(), raw.text);
        assert_eq!(record.spo_list().len(), raw.spo_list.len());
        for (t, r) in record.spo_list().iter().zip(raw.spo_list.iter()) {
            assert_eq!(t.subject(), r.subject);
            assert_eq!(t.predicate(), r.predicate);
            assert_eq!(t.object(), r.object);
        }
    }

    #[test]
    fn triple_is_an_array() {
        let t = Triple("a".to_string(), "p".to_string(), "b".to_string());
        assert_eq!(serde_json::to_string(&t).unwrap(), r#"["a","p","b"]"#);
    }

    #[test]
    fn missing_field_fails() {
        let raw = serde_json::from_str::<RawRecord>(r#"{"text":"ab"}"#);
        assert!(raw.is_err());
    }
}
