// crates/geoip-core/src/builder/value.rs

//! Data section values and their binary encoding.

use crate::error::GeoIpError;

/// A value as stored in a MaxMind DB data section.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Double(f64),
    Bytes(Vec<u8>),
    Uint16(u16),
    Uint32(u32),
    Map(Vec<(String, Value)>),
    Int32(i32),
    Uint64(u64),
    Array(Vec<Value>),
    Bool(bool),
    Float(f32),
}

// Type numbers from the MaxMind DB format. Types above 7 are "extended".
const TYPE_UTF8_STRING: u8 = 2;
const TYPE_DOUBLE: u8 = 3;
const TYPE_BYTES: u8 = 4;
const TYPE_UINT16: u8 = 5;
const TYPE_UINT32: u8 = 6;
const TYPE_MAP: u8 = 7;
const TYPE_INT32: u8 = 8;
const TYPE_UINT64: u8 = 9;
const TYPE_ARRAY: u8 = 11;
const TYPE_BOOLEAN: u8 = 14;
const TYPE_FLOAT: u8 = 15;

/// Largest payload size a control byte can express (three extension bytes).
const MAX_SIZE: usize = 65_821 + 0xFF_FFFF;

impl Value {
    /// Builds a map from `(key, value)` pairs, keeping their order.
    pub fn map<K, V, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Value::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn array<V: Into<Value>, I: IntoIterator<Item = V>>(items: I) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }

    /// Appends the encoded form of this value.
    pub fn encode(&self, out: &mut Vec<u8>) -> Result<(), GeoIpError> {
        match self {
            Value::String(s) => {
                write_control(out, TYPE_UTF8_STRING, s.len())?;
                out.extend_from_slice(s.as_bytes());
            }
            Value::Double(v) => {
                write_control(out, TYPE_DOUBLE, 8)?;
                out.extend_from_slice(&v.to_be_bytes());
            }
            Value::Bytes(b) => {
                write_control(out, TYPE_BYTES, b.len())?;
                out.extend_from_slice(b);
            }
            Value::Uint16(v) => write_uint(out, TYPE_UINT16, &v.to_be_bytes())?,
            Value::Uint32(v) => write_uint(out, TYPE_UINT32, &v.to_be_bytes())?,
            Value::Uint64(v) => write_uint(out, TYPE_UINT64, &v.to_be_bytes())?,
            Value::Int32(v) if *v < 0 => {
                // Negative numbers always use the full width.
                write_control(out, TYPE_INT32, 4)?;
                out.extend_from_slice(&v.to_be_bytes());
            }
            Value::Int32(v) => write_uint(out, TYPE_INT32, &v.to_be_bytes())?,
            Value::Map(entries) => {
                write_control(out, TYPE_MAP, entries.len())?;
                for (key, value) in entries {
                    write_control(out, TYPE_UTF8_STRING, key.len())?;
                    out.extend_from_slice(key.as_bytes());
                    value.encode(out)?;
                }
            }
            Value::Array(items) => {
                write_control(out, TYPE_ARRAY, items.len())?;
                for item in items {
                    item.encode(out)?;
                }
            }
            Value::Bool(b) => write_control(out, TYPE_BOOLEAN, usize::from(*b))?,
            Value::Float(v) => {
                write_control(out, TYPE_FLOAT, 4)?;
                out.extend_from_slice(&v.to_be_bytes());
            }
        }
        Ok(())
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, GeoIpError> {
        let mut out = Vec::new();
        self.encode(&mut out)?;
        Ok(out)
    }
}

/// Writes the control byte, the extended type byte and the size extension.
fn write_control(out: &mut Vec<u8>, type_num: u8, size: usize) -> Result<(), GeoIpError> {
    if size > MAX_SIZE {
        return Err(GeoIpError::Build(format!(
            "value of size {size} exceeds the largest encodable size {MAX_SIZE}"
        )));
    }
    let (size_bits, extension): (u8, Vec<u8>) = if size < 29 {
        (size as u8, Vec::new())
    } else if size < 29 + 256 {
        (29, vec![(size - 29) as u8])
    } else if size < 285 + 65_536 {
        (30, ((size - 285) as u16).to_be_bytes().to_vec())
    } else {
        let rest = (size - 65_821) as u32;
        (31, rest.to_be_bytes()[1..].to_vec())
    };

    if type_num <= 7 {
        out.push((type_num << 5) | size_bits);
    } else {
        out.push(size_bits);
        out.push(type_num - 7);
    }
    out.extend_from_slice(&extension);
    Ok(())
}

/// Unsigned integers drop their leading zero bytes.
fn write_uint(out: &mut Vec<u8>, type_num: u8, be_bytes: &[u8]) -> Result<(), GeoIpError> {
    let skip = be_bytes.iter().take_while(|b| **b == 0).count();
    let payload = &be_bytes[skip..];
    write_control(out, type_num, payload.len())?;
    out.extend_from_slice(payload);
    Ok(())
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<u16> for Value {
    fn from(v: u16) -> Self {
        Value::Uint16(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Uint32(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::Uint64(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int32(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::Array(v)
    }
}

#[cfg(feature = "json")]
impl TryFrom<serde_json::Value> for Value {
    type Error = GeoIpError;

    /// Integers become uint32 (uint64 when larger, int32 when negative),
    /// other numbers become doubles. `null` has no counterpart.
    fn try_from(json: serde_json::Value) -> Result<Self, Self::Error> {
        use serde_json::Value as Json;

        Ok(match json {
            Json::Null => return Err(GeoIpError::Build("null has no data section encoding".into())),
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => {
                if let Some(u) = n.as_u64() {
                    match u32::try_from(u) {
                        Ok(small) => Value::Uint32(small),
                        Err(_) => Value::Uint64(u),
                    }
                } else if let Some(i) = n.as_i64() {
                    let i = i32::try_from(i)
                        .map_err(|_| GeoIpError::Build(format!("{i} does not fit in int32")))?;
                    Value::Int32(i)
                } else {
                    Value::Double(n.as_f64().unwrap_or_default())
                }
            }
            Json::String(s) => Value::String(s),
            Json::Array(items) => Value::Array(
                items
                    .into_iter()
                    .map(Value::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            Json::Object(entries) => Value::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| Value::try_from(v).map(|v| (k, v)))
                    .collect::<Result<_, _>>()?,
            ),
        })
    }
}
