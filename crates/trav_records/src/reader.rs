//! Header-driven reader for delimited call files.
//!
//! ```text
//! # comment
//! H,P,Memo,Latitude,Longitude
//! H,L,Memo,Bearing,Distance,Direction
//! H,F,Memo,Name,Args...
//! P,start,37.4,-121.8
//! L,1,N90°0'0"E,100,TRUE
//! F,2,adjustDegrees,$tangent,90
//! ```
//!
//! An `H` line maps the cells of one record kind to field names. A last
//! field ending in `...` collects every remaining cell.

use std::path::Path;

use rustc_hash::FxHashMap;

use crate::record::{optional_delta, ArcCall, Call, FunctionCall, LineCall, Operand, PointCall, VariableCall};
use crate::{ReadError, Record, RecordKind};

const HEADER_TAG: &str = "H";
const COMMENT: char = '#';
const DELIMITER: char = ',';
const REST_SUFFIX: &str = "...";

/// Column layout declared by an `H` line.
#[derive(Clone, Debug, Default)]
struct Header {
    /// Field names for cells 1.., in order.
    fields: Vec<String>,
    /// Name of the trailing list field, if the last column ends in `...`.
    rest: Option<String>,
}

impl Header {
    fn parse(columns: &[&str]) -> Header {
        let mut fields: Vec<String> = columns.iter().map(|c| (*c).to_string()).collect();
        let rest = match fields.last() {
            Some(last) if last.ends_with(REST_SUFFIX) => fields
                .pop()
                .map(|last| last.trim_end_matches(REST_SUFFIX).to_string()),
            _ => None,
        };
        Header { fields, rest }
    }
}

/// Cells of one record line, keyed by field name.
struct Fields<'a> {
    kind: RecordKind,
    line: u32,
    single: FxHashMap<&'a str, &'a str>,
    rest: Option<(&'a str, Vec<&'a str>)>,
}

impl<'a> Fields<'a> {
    fn map(kind: RecordKind, line: u32, header: &'a Header, cells: &[&'a str]) -> Fields<'a> {
        let single = header
            .fields
            .iter()
            .zip(cells.iter())
            .map(|(name, cell)| (name.as_str(), *cell))
            .collect();
        let rest = header.rest.as_deref().map(|name| {
            let tail = cells.get(header.fields.len()..).unwrap_or_default();
            let values = tail.iter().copied().filter(|c| !c.is_empty()).collect();
            (name, values)
        });
        Fields {
            kind,
            line,
            single,
            rest,
        }
    }

    /// A non-empty cell, or `None`.
    fn optional(&self, field: &str) -> Option<&'a str> {
        self.single.get(field).copied().filter(|c| !c.is_empty())
    }

    fn required(&self, field: &'static str) -> Result<&'a str, ReadError> {
        self.optional(field).ok_or(ReadError::MissingField {
            line: self.line,
            kind: self.kind,
            field,
        })
    }

    fn operand(&self, field: &'static str) -> Result<Operand, ReadError> {
        self.required(field).map(Operand::parse)
    }

    fn number(&self, field: &'static str) -> Result<f64, ReadError> {
        let text = self.required(field)?;
        text.parse().map_err(|_| ReadError::InvalidNumber {
            line: self.line,
            field,
            text: text.to_string(),
        })
    }

    /// Cells of a list field: the `...` tail when the header declares one
    /// under this name, otherwise the single cell, if any.
    fn list(&self, field: &str) -> Vec<&'a str> {
        match &self.rest {
            Some((name, values)) if *name == field => values.clone(),
            _ => self.optional(field).into_iter().collect(),
        }
    }
}

/// Read every record from delimited text.
pub fn read_records(text: &str) -> Result<Vec<Record>, ReadError> {
    let mut headers: FxHashMap<String, Header> = FxHashMap::default();
    let mut records = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = u32::try_from(index + 1).unwrap_or(u32::MAX);
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with(COMMENT) {
            continue;
        }

        let cells: Vec<&str> = trimmed.split(DELIMITER).map(str::trim).collect();
        let Some((&tag, values)) = cells.split_first() else {
            continue;
        };

        if tag == HEADER_TAG {
            let Some((&kind_tag, columns)) = values.split_first().filter(|(t, _)| !t.is_empty())
            else {
                return Err(ReadError::UnknownRecordType {
                    line,
                    tag: String::new(),
                });
            };
            tracing::trace!(line, tag = kind_tag, ?columns, "record header");
            headers.insert(kind_tag.to_string(), Header::parse(columns));
            continue;
        }

        let unknown = || ReadError::UnknownRecordType {
            line,
            tag: tag.to_string(),
        };
        let header = headers.get(tag).ok_or_else(unknown)?;
        let kind = RecordKind::from_tag(tag).ok_or_else(unknown)?;
        let fields = Fields::map(kind, line, header, values);
        records.push(build_record(&fields)?);
    }

    tracing::debug!(records = records.len(), "read traverse records");
    Ok(records)
}

/// Read every record from a file.
pub fn read_file(path: impl AsRef<Path>) -> Result<Vec<Record>, ReadError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| ReadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    read_records(&text)
}

fn build_record(fields: &Fields<'_>) -> Result<Record, ReadError> {
    let call = match fields.kind {
        RecordKind::Point => Call::Point(PointCall {
            latitude: fields.number("Latitude")?,
            longitude: fields.number("Longitude")?,
        }),
        RecordKind::Line => Call::Line(LineCall {
            bearing: fields.operand("Bearing")?,
            distance: fields.operand("Distance")?,
            direction: fields.operand("Direction")?,
        }),
        RecordKind::Arc => Call::Arc(ArcCall {
            distance: fields.operand("Distance")?,
            direction: fields.operand("Direction")?,
            radius: fields.operand("Radius")?,
            delta: fields.optional("Delta").and_then(optional_delta),
            turn_for_center: fields.optional("TurnForCenter").map(Operand::parse),
        }),
        RecordKind::Function => Call::Function(FunctionCall {
            name: fields.required("Name")?.to_string(),
            args: fields.list("Args").into_iter().map(Operand::parse).collect(),
        }),
        RecordKind::Variable => Call::Variable(VariableCall {
            name: fields.required("Name")?.to_string(),
        }),
    };

    Ok(Record {
        memo: fields.optional("Memo").unwrap_or_default().to_string(),
        line: fields.line,
        call,
    })
}
