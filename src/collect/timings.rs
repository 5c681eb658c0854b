// src/collect/timings.rs
//
// The "HTTP Resources" listing only reads already-captured timing data —
// a JSON array of performance entries, as a browser serializes them.

use serde::Deserialize;

use crate::report::{Record, Schema, Value};

pub const TITLE: &str = "HTTP Resources";

#[derive(Clone, Debug, Deserialize)]
pub struct TimingEntry {
    pub name: String,
    #[serde(rename = "entryType", default)]
    pub entry_type: String,
    #[serde(rename = "startTime", default)]
    pub start_time: f64,
    #[serde(default)]
    pub duration: f64,
    #[serde(rename = "initiatorType", default)]
    pub initiator_type: Option<String>,
}

impl Record for TimingEntry {
    fn field(&self, name: &str) -> Value {
        match name {
            "name" => Value::str(&self.name),
            "entryType" => Value::str(&self.entry_type),
            "startTime" => Value::Num(self.start_time),
            "duration" => Value::Num(self.duration),
            "initiatorType" => Value::opt(self.initiator_type.as_deref()),
            _ => Value::Absent,
        }
    }
}

pub fn parse(json: &str) -> Result<Vec<TimingEntry>, Box<dyn std::error::Error>> {
    let entries: Vec<TimingEntry> = serde_json::from_str(json)?;
    Ok(entries)
}

fn end_time(item: &dyn Record) -> Value {
    match (item.field("startTime"), item.field("duration")) {
        (Value::Num(start), Value::Num(dur)) => Value::Num(start + dur),
        _ => Value::Absent,
    }
}

pub fn schema() -> Schema {
    Schema::new()
        .path("Name", "name")
        .path("Type", "entryType")
        .path("Initiator", "initiatorType")
        .path("Start (ms)", "startTime")
        .path("Duration (ms)", "duration")
        .func("End (ms)", end_time)
}
