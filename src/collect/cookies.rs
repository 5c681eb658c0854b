// src/collect/cookies.rs

use std::collections::HashMap;

use crate::report::{Record, Schema, Value};

pub const TITLE: &str = "Cookies";

pub struct Cookie {
    pub name: String,
    pub value: String,
}

impl Record for Cookie {
    fn field(&self, name: &str) -> Value {
        match name {
            "name" => Value::str(&self.name),
            "value" => Value::str(&self.value),
            _ => Value::Absent,
        }
    }
}

/// Parsed cookie string: an ordered list for positional access plus a
/// name→index map for lookups. Two explicit structures, not one container
/// doing both jobs.
pub struct CookieJar {
    cookies: Vec<Cookie>,
    index: HashMap<String, usize>,
}

impl CookieJar {
    /// Parse a raw "name=value; name2=value2" cookie string. Entries without
    /// an '=' or with an empty name are dropped; duplicate names keep the
    /// later value in the index (the list keeps every entry, in order).
    pub fn parse(raw: &str) -> CookieJar {
        let mut cookies = Vec::new();
        let mut index = HashMap::new();
        for part in raw.split(';') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            let (name, value) = match part.split_once('=') {
                Some((n, v)) => (n.trim(), v.trim()),
                None => continue,
            };
            if name.is_empty() {
                continue;
            }
            index.insert(s!(name), cookies.len());
            cookies.push(Cookie { name: s!(name), value: s!(value) });
        }
        CookieJar { cookies, index }
    }

    pub fn cookies(&self) -> &[Cookie] {
        &self.cookies
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.index.get(name).map(|&i| self.cookies[i].value.as_str())
    }

    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }
}

pub fn schema() -> Schema {
    Schema::new().path("Name", "name").path("Value", "value")
}
